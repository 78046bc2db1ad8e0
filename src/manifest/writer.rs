//! Manifest writer
//!
//! Saves the mutated document tree as the internal manifest under the
//! workspace's local app directory.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::error::{BalerError, Result};
use crate::manifest::{LOCAL_APP_DIR, LOCAL_MANIFEST_FILE};

/// Encode the document to the internal manifest, creating the app directory
/// when missing. The destination is truncated on each call. Returns the path
/// of the written manifest.
pub fn write(node: &Value, workspace: &Path) -> Result<PathBuf> {
    let app_dir = workspace.join(LOCAL_APP_DIR);
    create_app_dir(&app_dir)?;

    let path = app_dir.join(LOCAL_MANIFEST_FILE);
    let file = File::create(&path).map_err(|e| BalerError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    serde_yaml::to_writer(file, node).map_err(|e| BalerError::ManifestEncodeFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(path)
}

#[cfg(unix)]
fn create_app_dir(app_dir: &Path) -> Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new()
        .recursive(true)
        .mode(0o755)
        .create(app_dir)
        .map_err(|e| BalerError::DirCreateFailed {
            path: app_dir.display().to_string(),
            reason: e.to_string(),
        })
}

#[cfg(not(unix))]
fn create_app_dir(app_dir: &Path) -> Result<()> {
    fs::create_dir_all(app_dir).map_err(|e| BalerError::DirCreateFailed {
        path: app_dir.display().to_string(),
        reason: e.to_string(),
    })
}
