//! Upload domain module

mod payload;

pub use payload::{AudioPayload, UPLOAD_FIELD, UPLOAD_FILENAME, UPLOAD_MIME_TYPE};
