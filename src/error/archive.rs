//! Archive tool and verification errors

use super::ReleaseError;

/// Creates an archive tool failed error
pub fn tool_failed(tool: impl Into<String>, reason: impl Into<String>) -> ReleaseError {
    ReleaseError::ArchiveToolFailed {
        tool: tool.into(),
        reason: reason.into(),
    }
}

/// Creates an archive verification failed error
pub fn verification_failed(
    bundle: impl Into<String>,
    path: impl Into<String>,
    reason: impl Into<String>,
) -> ReleaseError {
    ReleaseError::ArchiveVerificationFailed {
        bundle: bundle.into(),
        path: path.into(),
        reason: reason.into(),
    }
}
