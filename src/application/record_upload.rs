//! Record-and-upload use case

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::capture::{CaptureSession, CaptureState, InvalidStateTransition};
use crate::domain::upload::AudioPayload;

use super::ports::{CaptureError, MicrophoneCapture, UploadError, Uploader};

/// Errors from the record-and-upload use case
#[derive(Debug, Error)]
pub enum RecordUploadError {
    #[error("Recording failed: {0}")]
    Capture(#[from] CaptureError),

    #[error("Upload failed: {0}")]
    Upload(#[from] UploadError),

    #[error("Invalid state transition: {0}")]
    InvalidState(#[from] InvalidStateTransition),
}

/// One recording cycle: capture until stopped, then one upload.
///
/// Drives the capture session state machine. Exclusive ownership of the
/// capture stream and fragment buffer is structural: every transition
/// goes through the session, so a second capture cannot start while one
/// is live and the buffer is consumed exactly once per cycle.
pub struct RecordUploadUseCase<M, U>
where
    M: MicrophoneCapture,
    U: Uploader,
{
    capture: M,
    uploader: U,
    session: Arc<Mutex<CaptureSession>>,
}

impl<M, U> RecordUploadUseCase<M, U>
where
    M: MicrophoneCapture,
    U: Uploader,
{
    /// Create a new use case instance
    pub fn new(capture: M, uploader: U) -> Self {
        Self {
            capture,
            uploader,
            session: Arc::new(Mutex::new(CaptureSession::new())),
        }
    }

    /// Get current session state
    pub async fn state(&self) -> CaptureState {
        self.session.lock().await.state()
    }

    /// Start capturing from the microphone.
    ///
    /// If device acquisition fails the session rolls back to idle, so a
    /// denied permission or missing device leaves the record control
    /// available again.
    pub async fn start_capture(&self) -> Result<(), RecordUploadError> {
        {
            let mut session = self.session.lock().await;
            session.start_capture()?;
        }

        if let Err(e) = self.capture.start().await {
            let mut session = self.session.lock().await;
            let _ = session.cancel_capture();
            return Err(e.into());
        }

        Ok(())
    }

    /// Stop capturing and build the upload payload.
    ///
    /// The stream is released here in all outcomes; a stop failure
    /// still returns the session to idle.
    pub async fn stop_capture(&self) -> Result<AudioPayload, RecordUploadError> {
        {
            let mut session = self.session.lock().await;
            session.stop_capture()?;
        }

        match self.capture.stop().await {
            Ok(payload) => Ok(payload),
            Err(e) => {
                let mut session = self.session.lock().await;
                let _ = session.finish_upload();
                Err(e.into())
            }
        }
    }

    /// Issue the single upload and return the server's response body.
    ///
    /// The session returns to idle whether the upload succeeded or
    /// failed; failures are reported, never silently dropped.
    pub async fn upload_payload(
        &self,
        payload: AudioPayload,
    ) -> Result<String, RecordUploadError> {
        let result = self.uploader.upload(&payload).await;

        {
            let mut session = self.session.lock().await;
            session.finish_upload()?;
        }

        Ok(result?)
    }

    /// Stop capturing and upload (convenience method)
    pub async fn stop_and_upload(&self) -> Result<String, RecordUploadError> {
        let payload = self.stop_capture().await?;
        self.upload_payload(payload).await
    }

    /// Discard the current capture without uploading
    pub async fn cancel(&self) -> Result<(), RecordUploadError> {
        {
            let mut session = self.session.lock().await;
            session.cancel_capture()?;
        }

        self.capture.cancel().await?;
        Ok(())
    }

    /// Get elapsed capture time in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.capture.elapsed_ms()
    }

    /// Check if currently capturing
    pub fn is_capturing(&self) -> bool {
        self.capture.is_capturing()
    }
}
