//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with cpal, the upload endpoint, and the filesystem.

pub mod capture;
pub mod config;
pub mod upload;

// Re-export adapters
pub use capture::CpalCapture;
pub use config::XdgConfigStore;
pub use upload::HttpUploader;
