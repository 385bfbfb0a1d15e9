//! Voicedrop - record a voice note and upload it to a server
//!
//! This crate records audio from the microphone until the user stops,
//! shows a live MM:SS elapsed display, and delivers the recording to an
//! HTTP endpoint as one multipart upload.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (elapsed time, fragment buffer, payload)
//!   and the capture session state machine
//! - **Application**: The record-and-upload use case and port interfaces
//!   (traits)
//! - **Infrastructure**: Adapter implementations (cpal capture, HTTP
//!   uploader, config store)
//! - **CLI**: Command-line interface, argument parsing, and user controls

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
