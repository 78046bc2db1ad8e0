use clap::Parser;

/// Arguments for the generate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Copy the manifest unchanged:\n    baler generate\n\n\
                  Override the bale name:\n    baler generate --name mybale\n\n\
                  Override name and version:\n    baler generate --name mybale --version 1.2.0")]
pub struct GenerateArgs {
    /// Override the bale name in the internal manifest
    #[arg(long)]
    pub name: Option<String>,

    /// Override the bale version in the internal manifest
    #[arg(long)]
    pub version: Option<String>,

    /// Tag recorded for publish flows (not written to the manifest)
    #[arg(long)]
    pub tag: Option<String>,
}
