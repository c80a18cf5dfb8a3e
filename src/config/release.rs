//! Release pipeline configuration (.skill-release.yaml)
//!
//! Every field is optional in the file. Values are layered as built-in
//! defaults, then the config file, then command line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ReleaseError, Result};

/// Default config file name, looked up at the repository root
pub const CONFIG_FILE_NAME: &str = ".skill-release.yaml";

/// Default metadata file inside each bundle
pub const DEFAULT_METADATA_FILE: &str = "SKILL.md";

/// Default build output directory, relative to the repository root
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Release pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReleaseConfig {
    /// Metadata file each bundle must contain, relative to the bundle
    pub metadata_file: String,

    /// Where archives are written; relative paths resolve against the root
    pub output_dir: PathBuf,

    /// Extra top-level directory names to skip during discovery
    pub exclude: Vec<String>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            metadata_file: DEFAULT_METADATA_FILE.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            exclude: Vec::new(),
        }
    }
}

impl ReleaseConfig {
    /// Parse release configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes to null, which means "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Parse release configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ReleaseError::ConfigReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_yaml(&content).map_err(|e| ReleaseError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: match e {
                ReleaseError::ConfigParseFailed { reason, .. } => reason,
                other => other.to_string(),
            },
        })
    }

    /// Load configuration for a repository root.
    ///
    /// An explicit path must exist. Without one, `.skill-release.yaml` at the
    /// root is used when present and defaults otherwise.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ReleaseError::ConfigReadFailed {
                    path: path.display().to_string(),
                    reason: "file does not exist".to_string(),
                });
            }
            return Self::from_file(path);
        }

        let default_path = root.join(CONFIG_FILE_NAME);
        if default_path.is_file() {
            tracing::debug!(path = %default_path.display(), "loading release configuration");
            Self::from_file(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Override the output directory, as given on the command line
    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self
    }

    /// Absolute output directory for a repository root
    pub fn output_dir_in(&self, root: &Path) -> PathBuf {
        if self.output_dir.is_absolute() {
            self.output_dir.clone()
        } else {
            root.join(&self.output_dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ReleaseConfig::default();
        assert_eq!(config.metadata_file, "SKILL.md");
        assert_eq!(config.output_dir, PathBuf::from("dist"));
        assert!(config.exclude.is_empty());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ReleaseConfig::from_yaml("exclude:\n  - drafts\n").unwrap();
        assert_eq!(config.exclude, vec!["drafts".to_string()]);
        assert_eq!(config.metadata_file, "SKILL.md");
        assert_eq!(config.output_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(ReleaseConfig::from_yaml("").unwrap(), ReleaseConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = ReleaseConfig::from_yaml("outputdir: build\n");
        assert!(matches!(result, Err(ReleaseError::ConfigParseFailed { .. })));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = ReleaseConfig::load(temp.path(), None).unwrap();
        assert_eq!(config, ReleaseConfig::default());
    }

    #[test]
    fn test_load_picks_up_root_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "output_dir: build\nmetadata_file: README.md\n",
        )
        .unwrap();
        let config = ReleaseConfig::load(temp.path(), None).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("build"));
        assert_eq!(config.metadata_file, "README.md");
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yaml");
        let result = ReleaseConfig::load(temp.path(), Some(&missing));
        assert!(matches!(result, Err(ReleaseError::ConfigReadFailed { .. })));
    }

    #[test]
    fn test_from_file_reports_path_on_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.yaml");
        fs::write(&path, "exclude: [unclosed").unwrap();
        match ReleaseConfig::from_file(&path) {
            Err(ReleaseError::ConfigParseFailed { path: reported, .. }) => {
                assert!(reported.ends_with("broken.yaml"));
            }
            other => panic!("expected parse failure, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_output_dir_overrides_file() {
        let config = ReleaseConfig::from_yaml("output_dir: build\n")
            .unwrap()
            .with_output_dir(Some(PathBuf::from("out")));
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_output_dir_in_resolves_relative() {
        let config = ReleaseConfig::default();
        assert_eq!(
            config.output_dir_in(Path::new("/repo")),
            PathBuf::from("/repo/dist")
        );
    }
}
