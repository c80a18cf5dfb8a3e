//! File system errors

use super::ReleaseError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> ReleaseError {
    ReleaseError::FileNotFound { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ReleaseError {
    ReleaseError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> ReleaseError {
    ReleaseError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> ReleaseError {
    ReleaseError::IoError {
        message: message.into(),
    }
}
