//! Capture domain module
//!
//! Value objects and the session state machine for one recording cycle.

mod elapsed;
mod fragment;
mod session;

pub use elapsed::Elapsed;
pub use fragment::FragmentBuffer;
pub use session::{CaptureSession, CaptureState, InvalidStateTransition};
