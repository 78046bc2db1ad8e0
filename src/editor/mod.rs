//! Path-based YAML document editor.
//!
//! A general-purpose engine for mutating a decoded YAML tree through path
//! expressions, independent of any manifest semantics. The patch operation
//! consumes it through [`Editor::update`] only.
//!
//! # Module Organization
//!
//! - [`log`]: Diagnostics sink injected at construction
//! - `path`: Path expression parsing
//! - `value`: Replacement value coercion
//! - `update`: Update command application

mod error;
pub mod log;
mod path;
mod update;
mod value;

// Re-export error type
pub use error::EditError;

// Re-export the diagnostics sink types
pub use log::{EditorLog, StreamLog};

// Re-export update types
pub use update::{Editor, UpdateCommand};
