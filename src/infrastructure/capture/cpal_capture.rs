//! Cross-platform microphone capture using cpal
//!
//! The stream lives on a dedicated thread because cpal::Stream is not
//! Send; the fragment buffer, state flags, and elapsed counter are
//! shared with it through Arcs.

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, StreamConfig};
use tokio::sync::oneshot;
use tokio::time::Duration as TokioDuration;

use super::wav_encoder::encode_wav;
use crate::application::ports::{CaptureError, MicrophoneCapture};
use crate::domain::capture::FragmentBuffer;
use crate::domain::upload::AudioPayload;

/// Microphone capture adapter backed by cpal.
///
/// Fragments arrive on the audio callback and are appended to the
/// buffer in production order; `stop` consumes the buffer once and
/// wraps it in a WAV container at the device sample rate.
pub struct CpalCapture {
    /// Captured audio fragments (mono i16, at device sample rate)
    fragments: Arc<StdMutex<FragmentBuffer>>,
    /// Device sample rate, set once the stream opens
    device_sample_rate: Arc<AtomicU32>,
    /// Capture state
    is_capturing: Arc<AtomicBool>,
    /// Capture start time (millis since epoch, for atomic access)
    start_time_ms: Arc<AtomicU64>,
    /// Elapsed capture time in milliseconds
    elapsed_ms: Arc<AtomicU64>,
    /// Error from the capture thread's stream setup, if any
    start_error: Arc<StdMutex<Option<CaptureError>>>,
}

impl CpalCapture {
    /// Create a new cpal-based capture adapter
    pub fn new() -> Self {
        Self {
            fragments: Arc::new(StdMutex::new(FragmentBuffer::new())),
            device_sample_rate: Arc::new(AtomicU32::new(0)),
            is_capturing: Arc::new(AtomicBool::new(false)),
            start_time_ms: Arc::new(AtomicU64::new(0)),
            elapsed_ms: Arc::new(AtomicU64::new(0)),
            start_error: Arc::new(StdMutex::new(None)),
        }
    }

    /// Get the default input device
    fn get_input_device() -> Result<cpal::Device, CaptureError> {
        let host = cpal::default_host();
        host.default_input_device()
            .ok_or(CaptureError::NoAudioDevice)
    }

    /// Get the device's default input configuration
    fn get_input_config(
        device: &cpal::Device,
    ) -> Result<(StreamConfig, SampleFormat), CaptureError> {
        let config = device
            .default_input_config()
            .map_err(|e| CaptureError::StartFailed(format!("Failed to get config: {}", e)))?;

        let sample_format = config.sample_format();
        Ok((config.into(), sample_format))
    }

    /// Map a stream build failure onto the capture error taxonomy.
    ///
    /// Hosts report permission denial as a backend-specific error, so
    /// classification falls back to the message text.
    fn classify_build_error(e: cpal::BuildStreamError) -> CaptureError {
        match e {
            cpal::BuildStreamError::DeviceNotAvailable => CaptureError::NoAudioDevice,
            other => {
                let message = other.to_string();
                let lowered = message.to_lowercase();
                if lowered.contains("permission") || lowered.contains("denied") {
                    CaptureError::PermissionDenied(message)
                } else {
                    CaptureError::StartFailed(message)
                }
            }
        }
    }

    /// Mix stereo to mono
    fn stereo_to_mono(samples: &[i16], channels: u16) -> Vec<i16> {
        if channels == 1 {
            return samples.to_vec();
        }

        samples
            .chunks(channels as usize)
            .map(|chunk| {
                let sum: i32 = chunk.iter().map(|&s| s as i32).sum();
                (sum / channels as i32) as i16
            })
            .collect()
    }

    /// Wrap captured samples in a WAV container
    fn build_payload(samples: &[i16], sample_rate: u32) -> Result<AudioPayload, CaptureError> {
        let wav = encode_wav(samples, sample_rate)
            .map_err(|e| CaptureError::CaptureFailed(e.to_string()))?;

        Ok(AudioPayload::new(wav))
    }

    /// Record a stream setup failure and stop the capture thread
    fn fail_start(
        error: CaptureError,
        start_error: &Arc<StdMutex<Option<CaptureError>>>,
        is_capturing: &Arc<AtomicBool>,
    ) {
        if let Ok(mut slot) = start_error.lock() {
            *slot = Some(error);
        }
        is_capturing.store(false, Ordering::SeqCst);
    }

    /// Acquire the default input device and open a playing stream that
    /// feeds the fragment buffer. Runs on the capture thread.
    fn open_stream(
        fragments: &Arc<StdMutex<FragmentBuffer>>,
        is_capturing: &Arc<AtomicBool>,
        device_sample_rate: &Arc<AtomicU32>,
    ) -> Result<cpal::Stream, CaptureError> {
        let device = Self::get_input_device()?;
        let (config, sample_format) = Self::get_input_config(&device)?;

        let sample_rate = config.sample_rate.0;
        let channels = config.channels;
        device_sample_rate.store(sample_rate, Ordering::SeqCst);

        let fragments_clone = Arc::clone(fragments);
        let is_capturing_clone = Arc::clone(is_capturing);

        let stream = match sample_format {
            SampleFormat::I16 => device.build_input_stream(
                &config,
                move |data: &[i16], _: &cpal::InputCallbackInfo| {
                    if is_capturing_clone.load(Ordering::SeqCst) {
                        let mono = CpalCapture::stereo_to_mono(data, channels);
                        if let Ok(mut buffer) = fragments_clone.lock() {
                            buffer.push_fragment(&mono);
                        }
                    }
                },
                |err| eprintln!("Audio stream error: {}", err),
                None,
            ),

            SampleFormat::F32 => {
                let fragments_clone = Arc::clone(fragments);
                let is_capturing_clone = Arc::clone(is_capturing);

                device.build_input_stream(
                    &config,
                    move |data: &[f32], _: &cpal::InputCallbackInfo| {
                        if is_capturing_clone.load(Ordering::SeqCst) {
                            let i16_data: Vec<i16> =
                                data.iter().map(|&s| (s * 32767.0) as i16).collect();
                            let mono = CpalCapture::stereo_to_mono(&i16_data, channels);
                            if let Ok(mut buffer) = fragments_clone.lock() {
                                buffer.push_fragment(&mono);
                            }
                        }
                    },
                    |err| eprintln!("Audio stream error: {}", err),
                    None,
                )
            }

            other => {
                return Err(CaptureError::StartFailed(format!(
                    "Unsupported sample format: {:?}",
                    other
                )));
            }
        };

        let stream = stream.map_err(Self::classify_build_error)?;

        stream
            .play()
            .map_err(|e| CaptureError::StartFailed(e.to_string()))?;

        Ok(stream)
    }
}

impl Default for CpalCapture {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MicrophoneCapture for CpalCapture {
    async fn start(&self) -> Result<(), CaptureError> {
        if self.is_capturing.load(Ordering::SeqCst) {
            return Err(CaptureError::StartFailed(
                "Capture already in progress".to_string(),
            ));
        }

        // Reset per-cycle state
        {
            let mut buffer = self.fragments.lock().unwrap_or_else(|e| e.into_inner());
            buffer.clear();
        }
        {
            let mut slot = self.start_error.lock().unwrap_or_else(|e| e.into_inner());
            *slot = None;
        }
        self.elapsed_ms.store(0, Ordering::SeqCst);

        // Mark as capturing
        self.is_capturing.store(true, Ordering::SeqCst);

        // Store start time
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.start_time_ms.store(now, Ordering::SeqCst);

        // Clone Arcs for the capture thread
        let fragments = Arc::clone(&self.fragments);
        let device_sample_rate = Arc::clone(&self.device_sample_rate);
        let is_capturing = Arc::clone(&self.is_capturing);
        let elapsed_ms = Arc::clone(&self.elapsed_ms);
        let start_time_ms = Arc::clone(&self.start_time_ms);
        let start_error = Arc::clone(&self.start_error);

        // The thread reports back exactly once: after the stream is
        // playing, or with the setup error. Device enumeration and
        // permission prompts may take arbitrarily long.
        let (ready_tx, ready_rx) = oneshot::channel::<Result<(), CaptureError>>();

        // The stream is owned by this thread for its whole life
        std::thread::spawn(move || {
            let stream = match CpalCapture::open_stream(
                &fragments,
                &is_capturing,
                &device_sample_rate,
            ) {
                Ok(s) => s,
                Err(e) => {
                    CpalCapture::fail_start(e.clone(), &start_error, &is_capturing);
                    let _ = ready_tx.send(Err(e));
                    return;
                }
            };

            let _ = ready_tx.send(Ok(()));

            // Keep capturing until stopped
            while is_capturing.load(Ordering::SeqCst) {
                let now = std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_millis() as u64)
                    .unwrap_or(0);
                let start = start_time_ms.load(Ordering::SeqCst);
                elapsed_ms.store(now.saturating_sub(start), Ordering::SeqCst);

                std::thread::sleep(std::time::Duration::from_millis(100));
            }

            // Releases the device
            drop(stream);
        });

        // Wait until the stream is actually playing
        match ready_rx.await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(e),
            Err(_) => {
                // Thread died without reporting
                self.is_capturing.store(false, Ordering::SeqCst);
                Err(CaptureError::StartFailed(
                    "Capture thread exited before the stream opened".to_string(),
                ))
            }
        }
    }

    async fn stop(&self) -> Result<AudioPayload, CaptureError> {
        if !self.is_capturing.load(Ordering::SeqCst) {
            // A recorded setup failure beats the generic message
            let stored = {
                let mut slot = self.start_error.lock().unwrap_or_else(|e| e.into_inner());
                slot.take()
            };
            return Err(stored.unwrap_or_else(|| {
                CaptureError::CaptureFailed("No capture in progress".to_string())
            }));
        }

        // Stop capturing; the thread drops the stream on its way out
        self.is_capturing.store(false, Ordering::SeqCst);

        // Give the thread a moment to clean up
        tokio::time::sleep(TokioDuration::from_millis(100)).await;

        let sample_rate = self.device_sample_rate.load(Ordering::SeqCst);
        if sample_rate == 0 {
            return Err(CaptureError::CaptureFailed("Sample rate not set".into()));
        }

        // Consume the fragment buffer, once
        let samples = {
            let mut buffer = self.fragments.lock().unwrap_or_else(|e| e.into_inner());
            buffer.take()
        };

        if samples.is_empty() {
            return Err(CaptureError::EmptyCapture);
        }

        // Container write happens off the async runtime
        let payload =
            tokio::task::spawn_blocking(move || Self::build_payload(&samples, sample_rate))
                .await
                .map_err(|e| CaptureError::CaptureFailed(format!("Encode task error: {}", e)))??;

        Ok(payload)
    }

    async fn cancel(&self) -> Result<(), CaptureError> {
        self.is_capturing.store(false, Ordering::SeqCst);

        // Give the thread a moment to clean up
        tokio::time::sleep(TokioDuration::from_millis(100)).await;

        {
            let mut buffer = self.fragments.lock().unwrap_or_else(|e| e.into_inner());
            buffer.clear();
        }

        self.elapsed_ms.store(0, Ordering::SeqCst);

        Ok(())
    }

    fn is_capturing(&self) -> bool {
        self.is_capturing.load(Ordering::SeqCst)
    }

    fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms.load(Ordering::SeqCst)
    }
}
