//! Fragment buffer for captured audio

/// Ordered accumulation of audio fragments delivered during capture.
///
/// Each fragment is one run of mono i16 samples handed over by the
/// capture stream. Fragments are appended in production order and the
/// whole buffer is consumed exactly once when capture stops.
#[derive(Debug, Default)]
pub struct FragmentBuffer {
    samples: Vec<i16>,
    fragment_count: usize,
}

impl FragmentBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one fragment, preserving production order
    pub fn push_fragment(&mut self, fragment: &[i16]) {
        self.samples.extend_from_slice(fragment);
        self.fragment_count += 1;
    }

    /// Total buffered samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether nothing has been captured yet
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of fragments appended since the last clear
    pub fn fragment_count(&self) -> usize {
        self.fragment_count
    }

    /// Discard all buffered audio
    pub fn clear(&mut self) {
        self.samples.clear();
        self.fragment_count = 0;
    }

    /// Consume the buffer, returning the concatenated samples and
    /// leaving it empty
    pub fn take(&mut self) -> Vec<i16> {
        self.fragment_count = 0;
        std::mem::take(&mut self.samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_empty() {
        let buffer = FragmentBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.fragment_count(), 0);
    }

    #[test]
    fn fragments_concatenate_in_order() {
        let mut buffer = FragmentBuffer::new();
        buffer.push_fragment(&[1, 2]);
        buffer.push_fragment(&[3]);
        buffer.push_fragment(&[4, 5, 6]);

        assert_eq!(buffer.fragment_count(), 3);
        assert_eq!(buffer.take(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn take_leaves_buffer_empty() {
        let mut buffer = FragmentBuffer::new();
        buffer.push_fragment(&[1, 2, 3]);

        let samples = buffer.take();
        assert_eq!(samples.len(), 3);
        assert!(buffer.is_empty());
        assert_eq!(buffer.fragment_count(), 0);
    }

    #[test]
    fn clear_discards_audio() {
        let mut buffer = FragmentBuffer::new();
        buffer.push_fragment(&[1, 2, 3]);
        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.fragment_count(), 0);
    }
}
