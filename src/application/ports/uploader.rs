//! Upload port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::upload::AudioPayload;

/// Upload errors
#[derive(Debug, Clone, Error)]
pub enum UploadError {
    #[error("Upload request failed: {0}")]
    RequestFailed(String),

    #[error("Server rejected upload (HTTP {status}): {body}")]
    HttpStatus { status: u16, body: String },
}

/// Port for delivering a finished recording to the server.
///
/// One call, one POST. No retries are attempted at any layer.
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Upload the payload and return the server's response body,
    /// which is shown to the user verbatim.
    async fn upload(&self, payload: &AudioPayload) -> Result<String, UploadError>;
}
