//! Override patcher
//!
//! Expands the override fields into update commands and applies them to the
//! document tree through the editor. The patchable set is the declarative
//! field table in the manifest module, iterated in declared order.

use serde_yaml::Value;

use crate::editor::{Editor, UpdateCommand};
use crate::error::{BalerError, Result};
use crate::manifest::{FIELD_PATHS, MetadataOverrides};

/// Apply the non-empty overrides to the document in place.
///
/// The first failing update aborts the whole operation, wrapped with the
/// manifest path and attempted value. The in-memory tree may be left
/// partially mutated; nothing has been persisted at that point.
pub fn apply(node: &mut Value, overrides: &MetadataOverrides, editor: &Editor) -> Result<()> {
    for (field, path) in FIELD_PATHS {
        let Some(value) = overrides.value_of(field) else {
            continue;
        };

        let command = UpdateCommand::new(*path, value);
        editor
            .update(node, &command)
            .map_err(|e| BalerError::ManifestUpdateFailed {
                path: (*path).to_string(),
                value: value.to_string(),
                reason: e.to_string(),
            })?;
    }

    Ok(())
}
