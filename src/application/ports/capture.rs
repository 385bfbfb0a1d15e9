//! Microphone capture port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::upload::AudioPayload;

/// Capture errors
#[derive(Debug, Clone, Error)]
pub enum CaptureError {
    #[error("Microphone access denied: {0}")]
    PermissionDenied(String),

    #[error("No audio input device available")]
    NoAudioDevice,

    #[error("Failed to start capture: {0}")]
    StartFailed(String),

    #[error("Capture failed: {0}")]
    CaptureFailed(String),

    #[error("No audio data captured")]
    EmptyCapture,
}

/// Port for user-stopped microphone capture.
///
/// The stream resource is acquired by `start` and released by `stop`
/// or `cancel`; release on `stop` happens before the payload is handed
/// back, regardless of what the caller does with it afterwards.
#[async_trait]
pub trait MicrophoneCapture: Send + Sync {
    /// Start capturing from the default input device.
    ///
    /// Clears any previously buffered fragments and resets the elapsed
    /// counter. May suspend while the platform grants device access.
    async fn start(&self) -> Result<(), CaptureError>;

    /// Stop capturing and return the buffered audio as a WAV payload.
    ///
    /// Consumes the fragment buffer exactly once, concatenated in
    /// production order.
    async fn stop(&self) -> Result<AudioPayload, CaptureError>;

    /// Stop capturing and discard the buffered audio.
    async fn cancel(&self) -> Result<(), CaptureError>;

    /// Check if currently capturing
    fn is_capturing(&self) -> bool;

    /// Get elapsed capture time in milliseconds
    fn elapsed_ms(&self) -> u64;
}
