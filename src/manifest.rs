//! Build manifest: the ordered list of artifacts produced by one build run
//!
//! On stdout the manifest is a JSON array of `{ "name", "version", "file" }`
//! objects in discovery order. Archive paths stay internal.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ReleaseError, Result};

/// A packaged, versioned archive produced from one bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArtifact {
    pub name: String,
    pub version: String,
    /// `{name}-v{version}.{ext}`
    pub archive_file_name: String,
    pub archive_path: PathBuf,
}

/// One manifest record as exchanged with the changelog step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub version: String,
    pub file: String,
}

impl From<&BuildArtifact> for ManifestEntry {
    fn from(artifact: &BuildArtifact) -> Self {
        Self {
            name: artifact.name.clone(),
            version: artifact.version.clone(),
            file: artifact.archive_file_name.clone(),
        }
    }
}

/// Artifacts from one successful build run, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildManifest {
    artifacts: Vec<BuildArtifact>,
}

impl BuildManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, artifact: BuildArtifact) {
        self.artifacts.push(artifact);
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn artifacts(&self) -> &[BuildArtifact] {
        &self.artifacts
    }

    pub fn entries(&self) -> Vec<ManifestEntry> {
        self.artifacts.iter().map(ManifestEntry::from).collect()
    }

    /// Serialize as the pretty-printed JSON array written to stdout
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries())?)
    }
}

/// Parse a JSON manifest as produced by the build step
pub fn parse_entries(json: &str) -> Result<Vec<ManifestEntry>> {
    serde_json::from_str(json).map_err(|e| ReleaseError::ManifestParseFailed {
        reason: e.to_string(),
    })
}
