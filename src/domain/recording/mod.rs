//! Recording domain module

mod duration;

pub use duration::Duration;
