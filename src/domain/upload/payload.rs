//! Upload payload value object

/// Multipart field name the server expects the audio under
pub const UPLOAD_FIELD: &str = "audio_data";

/// Suggested filename sent with the multipart part
pub const UPLOAD_FILENAME: &str = "recorded.wav";

/// MIME type of the recorded payload
pub const UPLOAD_MIME_TYPE: &str = "audio/wav";

/// Value object representing one finished recording, ready to upload.
/// Holds the WAV container bytes built from the fragment buffer.
#[derive(Debug, Clone)]
pub struct AudioPayload {
    data: Vec<u8>,
}

impl AudioPayload {
    /// Create a payload from encoded WAV bytes
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Get the payload bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the payload bytes
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}
