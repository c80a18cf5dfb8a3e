//! Build operation: discover bundles and package each one
//!
//! Runs `Scanning -> per bundle (Extracting -> Archiving -> Verifying) -> Done`.
//! The first bundle that fails aborts the run and no manifest is returned;
//! archives written for earlier bundles stay on disk.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::archive::ArchiveBuilder;
use crate::config::{MarketplaceConfig, ReleaseConfig};
use crate::error::{ReleaseError, Result};
use crate::manifest::{BuildArtifact, BuildManifest};
use crate::progress::ProgressDisplay;
use crate::version::{self, ExtractedVersion};

/// Top-level directory names that are never bundles
pub const RESERVED_DIRS: &[&str] = &["template-skill", "scripts", "node_modules", "target"];

/// Why a top-level directory was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    Hidden,
    Reserved,
    OutputDirectory,
    Configured,
    MissingMetadata,
}

impl ExclusionReason {
    /// Whether the skip concerns a directory that could have been a bundle
    pub fn is_notable(self) -> bool {
        matches!(self, Self::Configured | Self::MissingMetadata)
    }
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Hidden => "hidden directory",
            Self::Reserved => "reserved directory name",
            Self::OutputDirectory => "build output directory",
            Self::Configured => "excluded by configuration",
            Self::MissingMetadata => "no metadata file",
        };
        f.write_str(reason)
    }
}

/// A discovered bundle directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleDir {
    pub name: String,
    pub source_path: PathBuf,
    pub metadata_path: PathBuf,
}

/// A bundle with its extracted version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub name: String,
    pub version: ExtractedVersion,
    pub source_path: PathBuf,
}

impl BundleDir {
    /// Read the bundle's version from its metadata file
    pub fn load(self) -> Bundle {
        let version = version::extract_version(&self.metadata_path);
        Bundle {
            name: self.name,
            version,
            source_path: self.source_path,
        }
    }
}

/// Decide whether the top-level directory `name` at `root` is skipped.
pub fn exclusion_reason(
    root: &Path,
    name: &str,
    config: &ReleaseConfig,
) -> Option<ExclusionReason> {
    let path = root.join(name);
    if name.starts_with('.') {
        Some(ExclusionReason::Hidden)
    } else if RESERVED_DIRS.contains(&name) {
        Some(ExclusionReason::Reserved)
    } else if config.output_dir_in(root) == path {
        Some(ExclusionReason::OutputDirectory)
    } else if config.exclude.iter().any(|excluded| excluded == name) {
        Some(ExclusionReason::Configured)
    } else if !path.join(&config.metadata_file).is_file() {
        Some(ExclusionReason::MissingMetadata)
    } else {
        None
    }
}

/// Enumerate eligible bundle directories directly under `root`, in listing order.
pub fn discover_bundles(root: &Path, config: &ReleaseConfig) -> Result<Vec<BundleDir>> {
    let read_failed = |e: std::io::Error| ReleaseError::FileReadFailed {
        path: root.display().to_string(),
        reason: e.to_string(),
    };

    let mut bundles = Vec::new();
    for entry in fs::read_dir(root).map_err(read_failed)? {
        let entry = entry.map_err(read_failed)?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();

        if let Some(reason) = exclusion_reason(root, &name, config) {
            if reason.is_notable() {
                tracing::info!(directory = %name, %reason, "skipping directory");
            } else {
                tracing::debug!(directory = %name, %reason, "skipping directory");
            }
            continue;
        }

        let source_path = entry.path();
        bundles.push(BundleDir {
            metadata_path: source_path.join(&config.metadata_file),
            name,
            source_path,
        });
    }

    Ok(bundles)
}

/// Options for a build run
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Compute the manifest without writing archives
    pub dry_run: bool,
}

/// Main orchestrator for the build operation
pub struct BuildOperation<'a> {
    root: &'a Path,
    config: &'a ReleaseConfig,
    builder: ArchiveBuilder,
    options: BuildOptions,
}

impl<'a> BuildOperation<'a> {
    pub fn new(
        root: &'a Path,
        config: &'a ReleaseConfig,
        builder: ArchiveBuilder,
        options: BuildOptions,
    ) -> Self {
        Self {
            root,
            config,
            builder,
            options,
        }
    }

    /// Build every bundle, or abort on the first failure.
    pub fn run(&self) -> Result<BuildManifest> {
        let bundles = discover_bundles(self.root, self.config)?;
        tracing::info!(
            count = bundles.len(),
            root = %self.root.display(),
            output = %self.builder.output_dir().display(),
            "discovered bundles"
        );
        self.check_marketplace(&bundles);

        let progress = ProgressDisplay::new(bundles.len() as u64);
        let mut manifest = BuildManifest::new();

        for bundle_dir in bundles {
            match self.build_one(bundle_dir, &progress) {
                Ok(artifact) => manifest.push(artifact),
                Err(e) => {
                    progress.abandon();
                    return Err(e);
                }
            }
        }

        progress.finish();
        Ok(manifest)
    }

    fn build_one(
        &self,
        bundle_dir: BundleDir,
        progress: &ProgressDisplay,
    ) -> Result<BuildArtifact> {
        let bundle = bundle_dir.load();
        if let ExtractedVersion::Defaulted(reason) = &bundle.version {
            tracing::warn!(
                bundle = %bundle.name,
                %reason,
                "using fallback version {}",
                version::FALLBACK_VERSION
            );
        }

        let version = bundle.version.as_str();
        progress.update_bundle(&bundle.name, version);

        let artifact = if self.options.dry_run {
            self.builder.plan(&bundle.name, version)
        } else {
            self.builder.build(&bundle.source_path, &bundle.name, version)?
        };
        tracing::info!(
            bundle = %bundle.name,
            version,
            file = %artifact.archive_file_name,
            dry_run = self.options.dry_run,
            "packaged bundle"
        );

        progress.inc_bundle();
        Ok(artifact)
    }

    /// Warn when discovered bundles and marketplace.json disagree
    fn check_marketplace(&self, bundles: &[BundleDir]) {
        let marketplace = match MarketplaceConfig::load(self.root) {
            Ok(Some(marketplace)) => marketplace,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!("ignoring marketplace.json: {e}");
                return;
            }
        };

        let drift = marketplace.drift(bundles.iter().map(|b| b.name.as_str()));
        if drift.is_empty() {
            tracing::debug!("marketplace.json matches discovered bundles");
            return;
        }
        for name in &drift.unreferenced {
            tracing::warn!(bundle = %name, "bundle is not referenced in marketplace.json");
        }
        for name in &drift.missing {
            tracing::warn!(
                skill = %name,
                "marketplace.json references a skill that was not discovered"
            );
        }
    }
}
