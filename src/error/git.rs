//! Git history errors

use super::ReleaseError;

/// Creates a git operation failed error
pub fn operation_failed(message: impl Into<String>) -> ReleaseError {
    ReleaseError::GitOperationFailed {
        message: message.into(),
    }
}

/// Creates a git ref resolve failed error
pub fn ref_resolve_failed(git_ref: impl Into<String>, reason: impl Into<String>) -> ReleaseError {
    ReleaseError::GitRefResolveFailed {
        git_ref: git_ref.into(),
        reason: reason.into(),
    }
}
