//! Configuration errors

use super::ReleaseError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ReleaseError {
    ReleaseError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ReleaseError {
    ReleaseError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
