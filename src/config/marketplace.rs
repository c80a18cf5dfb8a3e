//! Marketplace configuration for .claude-plugin/marketplace.json
//!
//! The release pipeline only reads the `skills` paths of each plugin so it
//! can warn when the packaged bundles and the marketplace listing drift
//! apart. Nothing here affects the manifest or the exit code.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ReleaseError, Result};

/// Location of the marketplace file relative to the repository root
pub const MARKETPLACE_FILE: &str = ".claude-plugin/marketplace.json";

/// A single plugin definition from marketplace.json
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarketplacePlugin {
    /// Name of the plugin
    pub name: String,
    /// Skill directories the plugin ships
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
}

/// Configuration from marketplace.json
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarketplaceConfig {
    /// List of plugins
    pub plugins: Vec<MarketplacePlugin>,
}

/// Differences between discovered bundles and the marketplace listing
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MarketplaceDrift {
    /// Bundles that no plugin references
    pub unreferenced: Vec<String>,
    /// Skills referenced by a plugin but not discovered as bundles
    pub missing: Vec<String>,
}

impl MarketplaceDrift {
    pub fn is_empty(&self) -> bool {
        self.unreferenced.is_empty() && self.missing.is_empty()
    }
}

impl MarketplaceConfig {
    /// Parse marketplace configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ReleaseError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| ReleaseError::ConfigParseFailed {
                path: path.display().to_string(),
                reason: format!("Failed to parse marketplace.json: {e}"),
            })?;
        Ok(config)
    }

    /// Load marketplace.json from a repository root, if present
    pub fn load(root: &Path) -> Result<Option<Self>> {
        let path = root.join(MARKETPLACE_FILE);
        if !path.is_file() {
            return Ok(None);
        }
        Self::from_file(&path).map(Some)
    }

    /// Skill directory names referenced by any plugin, without `./` prefixes
    pub fn referenced_skills(&self) -> BTreeSet<String> {
        self.plugins
            .iter()
            .flat_map(|plugin| plugin.skills.iter())
            .map(|skill| normalize_skill_path(skill))
            .filter(|skill| !skill.is_empty())
            .collect()
    }

    /// Compare discovered bundle names against the referenced skills
    pub fn drift<'a>(&self, bundle_names: impl IntoIterator<Item = &'a str>) -> MarketplaceDrift {
        let referenced = self.referenced_skills();
        let discovered: BTreeSet<String> = bundle_names.into_iter().map(str::to_string).collect();

        MarketplaceDrift {
            unreferenced: discovered.difference(&referenced).cloned().collect(),
            missing: referenced.difference(&discovered).cloned().collect(),
        }
    }
}

fn normalize_skill_path(path: &str) -> String {
    path.trim()
        .trim_start_matches("./")
        .trim_end_matches('/')
        .to_string()
}
