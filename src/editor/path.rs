//! Path expression parsing
//!
//! Path expressions are dot-separated segments, e.g. `metadata.labels.app`.
//! Whether a segment is a mapping key or a sequence index is decided while
//! walking the tree, based on the node kind under the cursor.

use crate::editor::error::EditError;

/// Split a path expression into its segments
pub(crate) fn parse(path: &str) -> Result<Vec<String>, EditError> {
    if path.is_empty() {
        return Err(EditError::EmptyPath);
    }

    let segments: Vec<String> = path.split('.').map(str::to_string).collect();

    if segments.iter().any(String::is_empty) {
        return Err(EditError::EmptySegment {
            path: path.to_string(),
        });
    }

    Ok(segments)
}
