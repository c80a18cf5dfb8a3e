//! Operations module for building and releasing skill bundles
//!
//! This module provides high-level operations that coordinate:
//! - BuildOperation: discovery, version extraction and packaging of every bundle
//! - ChangelogOperation: release notes from git history and a build manifest
//!
//! The operations coordinate with:
//! - Archive builder (from archive module)
//! - Version extractor (from version module)
//! - Git history (from git module)

pub mod build;
pub mod changelog;

pub use build::{BuildOperation, BuildOptions};
pub use changelog::ChangelogOperation;
