//! Capture infrastructure module
//!
//! Cross-platform microphone capture using cpal, with the payload
//! written as an in-memory WAV container.

mod cpal_capture;
mod wav_encoder;

pub use cpal_capture::CpalCapture;
pub use wav_encoder::{encode_wav, WavEncodeError};
