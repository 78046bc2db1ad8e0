//! File system errors

use super::BalerError;

/// Creates a directory create failed error
pub fn dir_create_failed(path: impl Into<String>, reason: impl Into<String>) -> BalerError {
    BalerError::DirCreateFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> BalerError {
    BalerError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a generic IO error
pub fn io_error(message: impl Into<String>) -> BalerError {
    BalerError::IoError {
        message: message.into(),
    }
}
