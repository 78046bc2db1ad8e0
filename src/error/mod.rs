//! Error types and handling for Baler
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`manifest`]: Manifest load/patch/write errors
//! - [`fs`]: File system errors

#![allow(dead_code)]

// Declare submodules
pub mod fs;
pub mod manifest;

// Re-export convenience constructors from submodules (used in tests only)
#[allow(unused_imports)]
pub use fs::{dir_create_failed, io_error, write_failed as file_write_failed};
#[allow(unused_imports)]
pub use manifest::{
    decode_failed as manifest_decode_failed, encode_failed as manifest_encode_failed,
    open_failed as manifest_open_failed, update_failed as manifest_update_failed,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Baler operations
#[derive(Error, Diagnostic, Debug)]
pub enum BalerError {
    // Manifest errors
    #[error("Failed to open manifest: {path}: {reason}")]
    #[diagnostic(
        code(baler::manifest::open_failed),
        help("Run baler from the directory containing baler.yaml, or pass --workspace")
    )]
    ManifestOpenFailed { path: String, reason: String },

    #[error("Failed to decode manifest: {path}: {reason}")]
    #[diagnostic(
        code(baler::manifest::decode_failed),
        help("Check that the manifest is valid YAML")
    )]
    ManifestDecodeFailed { path: String, reason: String },

    #[error("Failed to update manifest path '{path}' with value '{value}': {reason}")]
    #[diagnostic(code(baler::manifest::update_failed))]
    ManifestUpdateFailed {
        path: String,
        value: String,
        reason: String,
    },

    #[error("Failed to encode manifest at {path}: {reason}")]
    #[diagnostic(code(baler::manifest::encode_failed))]
    ManifestEncodeFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(baler::fs::dir_create_failed))]
    DirCreateFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(baler::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(baler::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for BalerError {
    fn from(err: std::io::Error) -> Self {
        BalerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for BalerError {
    fn from(err: serde_yaml::Error) -> Self {
        BalerError::ManifestDecodeFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BalerError>;
