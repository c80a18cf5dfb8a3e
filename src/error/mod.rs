//! Error types and handling for skill-release
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`bundle`]: Bundle directory errors
//! - [`archive`]: Archive tool and verification errors
//! - [`git`]: Git history errors
//! - [`config`]: Configuration errors
//! - [`manifest`]: Build manifest errors
//! - [`fs`]: File system errors

#![allow(dead_code)]

pub mod archive;
pub mod bundle;
pub mod config;
pub mod fs;
pub mod git;
pub mod manifest;

#[allow(unused_imports)]
pub use archive::{tool_failed as archive_tool_failed, verification_failed};
#[allow(unused_imports)]
pub use bundle::not_directory as bundle_not_directory;
#[allow(unused_imports)]
pub use config::{parse_failed as config_parse_failed, read_failed as config_read_failed};
#[allow(unused_imports)]
pub use fs::{
    io_error, not_found as file_not_found, read_failed as file_read_failed,
    write_failed as file_write_failed,
};
#[allow(unused_imports)]
pub use git::{operation_failed as git_operation_failed, ref_resolve_failed};
#[allow(unused_imports)]
pub use manifest::parse_failed as manifest_parse_failed;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for skill-release operations
#[derive(Error, Diagnostic, Debug)]
pub enum ReleaseError {
    // Bundle errors
    #[error("Bundle path is not a directory: {path}")]
    #[diagnostic(code(skill_release::bundle::not_directory))]
    BundleNotDirectory { path: String },

    // Archive errors
    #[error("Archive tool '{tool}' failed: {reason}")]
    #[diagnostic(
        code(skill_release::archive::tool_failed),
        help("Make sure the archiving tool is installed and on PATH")
    )]
    ArchiveToolFailed { tool: String, reason: String },

    #[error("Archive for bundle '{bundle}' failed verification at {path}: {reason}")]
    #[diagnostic(
        code(skill_release::archive::verification_failed),
        help("The release was aborted; no manifest was emitted")
    )]
    ArchiveVerificationFailed {
        bundle: String,
        path: String,
        reason: String,
    },

    // Git errors
    #[error("Not in a git repository")]
    #[diagnostic(
        code(skill_release::git::not_in_repo),
        help("The changelog command must be run from within a git repository checkout")
    )]
    NotInGitRepository,

    #[error("Git operation failed: {message}")]
    #[diagnostic(code(skill_release::git::operation_failed))]
    GitOperationFailed { message: String },

    #[error("Failed to resolve git ref '{git_ref}': {reason}")]
    #[diagnostic(code(skill_release::git::ref_resolve_failed))]
    GitRefResolveFailed { git_ref: String, reason: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(skill_release::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(skill_release::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // Manifest errors
    #[error("Failed to parse build manifest: {reason}")]
    #[diagnostic(
        code(skill_release::manifest::parse_failed),
        help("Expected a JSON array of objects with name, version and file fields")
    )]
    ManifestParseFailed { reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(skill_release::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(skill_release::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(skill_release::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(skill_release::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(skill_release::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ReleaseError {
    fn from(err: std::io::Error) -> Self {
        ReleaseError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ReleaseError {
    fn from(err: serde_yaml::Error) -> Self {
        ReleaseError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ReleaseError {
    fn from(err: serde_json::Error) -> Self {
        ReleaseError::ManifestParseFailed {
            reason: err.to_string(),
        }
    }
}

impl From<git2::Error> for ReleaseError {
    fn from(err: git2::Error) -> Self {
        ReleaseError::GitOperationFailed {
            message: err.message().to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ReleaseError>;
