//! Upload integration tests against a mock server

use voicedrop::application::ports::{UploadError, Uploader};
use voicedrop::domain::upload::AudioPayload;
use voicedrop::infrastructure::capture::encode_wav;
use voicedrop::infrastructure::HttpUploader;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a small but real WAV payload, the way the recorder does
fn test_payload() -> AudioPayload {
    let samples: Vec<i16> = (0..1600).map(|i| ((i % 32) as i16) * 100).collect();
    AudioPayload::new(encode_wav(&samples, 16000).unwrap())
}

#[tokio::test]
async fn upload_returns_server_message_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_string("File uploaded and processed"))
        .expect(1)
        .mount(&server)
        .await;

    let uploader = HttpUploader::new(format!("{}/upload", server.uri()));
    let message = uploader.upload(&test_payload()).await.unwrap();

    assert_eq!(message, "File uploaded and processed");
}

#[tokio::test]
async fn upload_is_multipart_with_expected_field_and_filename() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let uploader = HttpUploader::new(format!("{}/upload", server.uri()));
    uploader.upload(&test_payload()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    let content_type = request
        .headers
        .get("content-type")
        .expect("content-type header")
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("name=\"audio_data\""));
    assert!(body.contains("filename=\"recorded.wav\""));
    assert!(body.contains("audio/wav"));
    // The WAV container itself made it across
    assert!(body.contains("RIFF"));
}

#[tokio::test]
async fn server_rejection_is_surfaced_with_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(500).set_body_string("disk full"))
        .mount(&server)
        .await;

    let uploader = HttpUploader::new(format!("{}/upload", server.uri()));
    let err = uploader.upload(&test_payload()).await.unwrap_err();

    match err {
        UploadError::HttpStatus { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "disk full");
        }
        other => panic!("Expected HttpStatus error, got: {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_server_is_a_request_failure() {
    // Port 1 is never listening
    let uploader = HttpUploader::new("http://127.0.0.1:1/upload");
    let err = uploader.upload(&test_payload()).await.unwrap_err();

    assert!(matches!(err, UploadError::RequestFailed(_)));
}

#[tokio::test]
async fn one_upload_means_one_request() {
    let server = MockServer::start().await;

    // expect(1) is verified when the server drops
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let uploader = HttpUploader::new(format!("{}/upload", server.uri()));
    uploader.upload(&test_payload()).await.unwrap();
}
