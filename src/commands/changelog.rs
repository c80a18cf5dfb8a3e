//! Changelog command implementation

use std::io::Read;
use std::path::PathBuf;

use crate::cli::ChangelogArgs;
use crate::commands::resolve_root;
use crate::error::{ReleaseError, Result};
use crate::git::History;
use crate::manifest::{self, ManifestEntry};
use crate::operations::ChangelogOperation;

/// Manifest argument meaning "read from stdin"
const STDIN_MARKER: &str = "-";

/// Run changelog command
pub fn run(root: Option<PathBuf>, args: ChangelogArgs) -> Result<()> {
    let root = resolve_root(root)?;
    let history = History::discover(&root)?;

    let raw = read_manifest_arg(&args.manifest)?;
    let artifacts = manifest_entries(&raw);

    let notes = ChangelogOperation::new(&history).generate(&args.release, artifacts.as_deref())?;
    print!("{notes}");

    Ok(())
}

fn read_manifest_arg(arg: &str) -> Result<String> {
    if arg != STDIN_MARKER {
        return Ok(arg.to_string());
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| ReleaseError::FileReadFailed {
            path: "<stdin>".to_string(),
            reason: e.to_string(),
        })?;
    Ok(buffer)
}

/// Parse manifest entries, or `None` when the text is not a manifest
fn manifest_entries(raw: &str) -> Option<Vec<ManifestEntry>> {
    match manifest::parse_entries(raw) {
        Ok(entries) => Some(entries),
        Err(e) => {
            tracing::warn!("ignoring build manifest: {e}");
            None
        }
    }
}
