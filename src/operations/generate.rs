//! Internal manifest generation
//!
//! Decodes the user's manifest, applies the metadata overrides, and saves the
//! updated document as the tool-managed internal manifest. Control flow is
//! strictly linear: load, patch, write.

use std::path::{Path, PathBuf};

use crate::editor::Editor;
use crate::error::Result;
use crate::manifest::{self, MetadataOverrides};

/// Generate the internal manifest for a workspace. Returns the written path.
///
/// Nothing is persisted until every update has applied, so a failed load or
/// patch leaves the destination absent or in its prior state.
pub fn generate_internal_manifest(
    workspace: &Path,
    overrides: &MetadataOverrides,
    editor: &Editor,
) -> Result<PathBuf> {
    let mut node = manifest::loader::load(workspace)?;
    manifest::patcher::apply(&mut node, overrides, editor)?;
    manifest::writer::write(&node, workspace)
}
