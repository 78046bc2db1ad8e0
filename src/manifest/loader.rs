//! Manifest loader

use std::fs::File;
use std::path::Path;

use serde_yaml::Value;

use crate::error::{BalerError, Result};
use crate::manifest::MANIFEST_FILE;

/// Open and decode the user's manifest from a workspace directory into a
/// generic document tree. The file handle is scoped to this call and
/// released on every exit path.
pub fn load(workspace: &Path) -> Result<Value> {
    let path = workspace.join(MANIFEST_FILE);

    let file = File::open(&path).map_err(|e| BalerError::ManifestOpenFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    serde_yaml::from_reader(file).map_err(|e| BalerError::ManifestDecodeFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
