//! Upload infrastructure module

mod http_uploader;

pub use http_uploader::HttpUploader;
