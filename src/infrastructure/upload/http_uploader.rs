//! HTTP multipart uploader adapter

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::application::ports::{UploadError, Uploader};
use crate::domain::upload::{AudioPayload, UPLOAD_FIELD, UPLOAD_FILENAME, UPLOAD_MIME_TYPE};

/// Uploader that POSTs the recording as a multipart form.
///
/// The server contract: field `audio_data`, filename `recorded.wav`,
/// content type `audio/wav`. The response body is plain text meant for
/// the user.
pub struct HttpUploader {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpUploader {
    /// Create a new uploader for the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// The endpoint this uploader posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the multipart form for one payload
    fn build_form(payload: &AudioPayload) -> Result<Form, UploadError> {
        let part = Part::bytes(payload.data().to_vec())
            .file_name(UPLOAD_FILENAME)
            .mime_str(UPLOAD_MIME_TYPE)
            .map_err(|e| UploadError::RequestFailed(e.to_string()))?;

        Ok(Form::new().part(UPLOAD_FIELD, part))
    }
}

#[async_trait]
impl Uploader for HttpUploader {
    async fn upload(&self, payload: &AudioPayload) -> Result<String, UploadError> {
        let form = Self::build_form(payload)?;

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UploadError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(UploadError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_kept_verbatim() {
        let uploader = HttpUploader::new("http://localhost:5000/upload");
        assert_eq!(uploader.endpoint(), "http://localhost:5000/upload");
    }

    #[test]
    fn build_form_accepts_payload() {
        let payload = AudioPayload::new(vec![1, 2, 3, 4]);
        assert!(HttpUploader::build_form(&payload).is_ok());
    }
}
