//! Extract-version command implementation

use crate::cli::ExtractVersionArgs;
use crate::error::{ReleaseError, Result};
use crate::version::{self, ExtractedVersion};

/// Run extract-version command
pub fn run(args: ExtractVersionArgs) -> Result<()> {
    if !args.path.exists() {
        return Err(ReleaseError::FileNotFound {
            path: args.path.display().to_string(),
        });
    }

    let extracted = version::extract_version(&args.path);
    if let ExtractedVersion::Defaulted(reason) = &extracted {
        tracing::warn!(path = %args.path.display(), %reason, "using fallback version");
    }
    println!("{extracted}");

    Ok(())
}
