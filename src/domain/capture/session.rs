//! Capture session state machine

use std::fmt;
use thiserror::Error;

/// Capture session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    Capturing,
    Uploading,
}

impl CaptureState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Capturing => "capturing",
            Self::Uploading => "uploading",
        }
    }
}

impl fmt::Display for CaptureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while in {current_state} state")]
pub struct InvalidStateTransition {
    pub current_state: CaptureState,
    pub action: String,
}

/// Capture session entity.
/// Manages state transitions for one recording cycle.
///
/// State machine:
///   IDLE -> CAPTURING (start_capture)
///   CAPTURING -> UPLOADING (stop_capture)
///   CAPTURING -> IDLE (cancel_capture)
///   UPLOADING -> IDLE (finish_upload, success or failure)
///
/// At most one capture is live at a time: `start_capture` is only legal
/// from IDLE, so the record and stop controls are never both available.
#[derive(Debug, Default)]
pub struct CaptureSession {
    state: CaptureState,
}

impl CaptureSession {
    /// Create a new session in idle state
    pub fn new() -> Self {
        Self {
            state: CaptureState::Idle,
        }
    }

    /// Get the current state
    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Whether the record control is available
    pub fn can_start(&self) -> bool {
        self.state == CaptureState::Idle
    }

    /// Whether the stop control is available
    pub fn can_stop(&self) -> bool {
        self.state == CaptureState::Capturing
    }

    /// Transition from IDLE to CAPTURING
    pub fn start_capture(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != CaptureState::Idle {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "start capture".to_string(),
            });
        }
        self.state = CaptureState::Capturing;
        Ok(())
    }

    /// Transition from CAPTURING to UPLOADING
    pub fn stop_capture(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != CaptureState::Capturing {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "stop capture".to_string(),
            });
        }
        self.state = CaptureState::Uploading;
        Ok(())
    }

    /// Transition from CAPTURING to IDLE (discard without uploading)
    pub fn cancel_capture(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != CaptureState::Capturing {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "cancel capture".to_string(),
            });
        }
        self.state = CaptureState::Idle;
        Ok(())
    }

    /// Transition from UPLOADING to IDLE. Taken whether the upload
    /// succeeded or failed, so the controls always come back.
    pub fn finish_upload(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != CaptureState::Uploading {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "finish upload".to_string(),
            });
        }
        self.state = CaptureState::Idle;
        Ok(())
    }
}
