//! Manifest errors

use super::BalerError;

/// Creates a manifest open failed error
pub fn open_failed(path: impl Into<String>, reason: impl Into<String>) -> BalerError {
    BalerError::ManifestOpenFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest decode failed error
pub fn decode_failed(path: impl Into<String>, reason: impl Into<String>) -> BalerError {
    BalerError::ManifestDecodeFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest update failed error
pub fn update_failed(
    path: impl Into<String>,
    value: impl Into<String>,
    reason: impl Into<String>,
) -> BalerError {
    BalerError::ManifestUpdateFailed {
        path: path.into(),
        value: value.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest encode failed error
pub fn encode_failed(path: impl Into<String>, reason: impl Into<String>) -> BalerError {
    BalerError::ManifestEncodeFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
