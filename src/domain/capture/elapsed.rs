//! Elapsed capture time value object

use std::fmt;

/// Value object for the elapsed recording time.
///
/// Counts whole seconds since capture started. Renders as "MM:SS":
/// minutes are unbounded but padded to at least two digits, seconds
/// are always exactly two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Elapsed {
    seconds: u64,
}

impl Elapsed {
    /// Create from a whole number of seconds
    pub const fn from_secs(seconds: u64) -> Self {
        Self { seconds }
    }

    /// Create from milliseconds, truncating to whole seconds
    pub const fn from_millis(ms: u64) -> Self {
        Self { seconds: ms / 1000 }
    }

    /// Get the elapsed whole seconds
    pub const fn as_secs(&self) -> u64 {
        self.seconds
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_minute_is_zero_padded() {
        for s in 0..60 {
            assert_eq!(Elapsed::from_secs(s).to_string(), format!("00:{:02}", s));
        }
    }

    #[test]
    fn minute_rollover() {
        assert_eq!(Elapsed::from_secs(60).to_string(), "01:00");
        assert_eq!(Elapsed::from_secs(125).to_string(), "02:05");
        assert_eq!(Elapsed::from_secs(3599).to_string(), "59:59");
    }

    #[test]
    fn minutes_are_unbounded() {
        assert_eq!(Elapsed::from_secs(3600).to_string(), "60:00");
        assert_eq!(Elapsed::from_secs(6000 * 60).to_string(), "6000:00");
    }

    #[test]
    fn from_millis_truncates() {
        assert_eq!(Elapsed::from_millis(0).as_secs(), 0);
        assert_eq!(Elapsed::from_millis(999).as_secs(), 0);
        assert_eq!(Elapsed::from_millis(1000).as_secs(), 1);
        assert_eq!(Elapsed::from_millis(61_500).to_string(), "01:01");
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Elapsed::default().to_string(), "00:00");
    }
}
