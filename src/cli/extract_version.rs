use clap::Parser;
use std::path::PathBuf;

/// Arguments for extract-version command
#[derive(Parser, Debug)]
pub struct ExtractVersionArgs {
    /// Path to a skill's metadata file (e.g. pdf/SKILL.md)
    pub path: PathBuf,
}
