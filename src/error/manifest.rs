//! Build manifest errors

use super::ReleaseError;

/// Creates a manifest parse failed error
pub fn parse_failed(reason: impl Into<String>) -> ReleaseError {
    ReleaseError::ManifestParseFailed {
        reason: reason.into(),
    }
}
