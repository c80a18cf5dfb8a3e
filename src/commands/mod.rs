//! Command implementations for skill-release CLI

pub mod build;
pub mod changelog;
pub mod completions;
pub mod extract_version;
pub mod version;

use std::path::PathBuf;

use crate::error::{ReleaseError, Result};

/// Resolve the repository root from optional argument
///
/// If a root is provided, use it. Otherwise, resolve to the current directory.
pub fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| ReleaseError::IoError {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}
