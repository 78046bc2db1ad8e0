//! Generate command implementation
//!
//! Decodes the workspace manifest, applies the metadata overrides, and
//! writes the tool-managed internal manifest under `.baler/app/`.

use std::path::PathBuf;

use console::Style;

use crate::cli::GenerateArgs;
use crate::editor::Editor;
use crate::error::{BalerError, Result};
use crate::manifest::MetadataOverrides;
use crate::operations::generate::generate_internal_manifest;

/// Run the generate command
pub fn run(workspace: Option<PathBuf>, args: GenerateArgs) -> Result<()> {
    let workspace = match workspace {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(|e| BalerError::IoError {
            message: format!("Failed to get current directory: {}", e),
        })?,
    };

    let overrides = MetadataOverrides {
        name: args.name,
        version: args.version,
        tag: args.tag,
    };

    // Editor diagnostics go to the process error stream; the returned error
    // carries the user-facing context.
    let editor = Editor::stderr();
    let path = generate_internal_manifest(&workspace, &overrides, &editor)?;

    let display_path = path.strip_prefix(&workspace).unwrap_or(&path);
    println!(
        "{} internal manifest at {}",
        Style::new().green().apply_to("Generated"),
        display_path.display()
    );

    Ok(())
}
