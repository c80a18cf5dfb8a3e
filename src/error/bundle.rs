//! Bundle-related errors

use super::ReleaseError;

/// Creates a bundle not directory error
pub fn not_directory(path: impl Into<String>) -> ReleaseError {
    ReleaseError::BundleNotDirectory { path: path.into() }
}
