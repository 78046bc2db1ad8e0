//! Error types for editor operations

use thiserror::Error;

/// Errors raised while applying an update command to a document tree
#[derive(Error, Debug)]
pub enum EditError {
    #[error("empty path expression")]
    EmptyPath,

    #[error("empty segment in path expression '{path}'")]
    EmptySegment { path: String },

    #[error("segment '{segment}' is not a valid sequence index")]
    NotAnIndex { segment: String },

    #[error("index {index} is out of bounds for a sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("cannot descend into {kind} value at segment '{segment}'")]
    NotTraversable { segment: String, kind: &'static str },
}
