//! Archive building for a single bundle
//!
//! This module handles:
//! - Deterministic archive naming (`{name}-v{version}.{ext}`)
//! - Collecting the bundle's files as bundle-relative entry paths
//! - Driving an [`Archiver`] into a staging directory
//! - Verifying the archive before it replaces any previous one
//!
//! Files that already carry the archive extension are never packaged, so a
//! stale archive left inside a bundle cannot nest into the new one.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use walkdir::WalkDir;

use crate::error::{ReleaseError, Result};
use crate::manifest::BuildArtifact;

/// Compute the archive file name for a bundle.
pub fn archive_file_name(name: &str, version: &str, extension: &str) -> String {
    format!("{name}-v{version}.{extension}")
}

/// Whether `path` carries the archive extension (case-insensitive).
fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

/// Collect every file under `bundle_dir` as a path relative to it, sorted.
///
/// Files with the archive `extension` are skipped.
pub fn collect_entries(bundle_dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(bundle_dir)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| ReleaseError::IoError {
            message: format!("Failed to walk {}: {e}", bundle_dir.display()),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if has_extension(entry.path(), extension) {
            tracing::debug!(path = %entry.path().display(), "skipping existing archive");
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(bundle_dir)
            .unwrap_or(entry.path())
            .to_path_buf();
        entries.push(relative);
    }

    Ok(entries)
}

/// Something that can write an archive of a directory's files.
pub trait Archiver {
    /// File extension of produced archives, without the dot
    fn extension(&self) -> &str;

    /// Write `entries` (relative to `source_dir`) into a new archive at `destination`.
    fn write_archive(&self, source_dir: &Path, entries: &[PathBuf], destination: &Path)
    -> Result<()>;
}

/// Archiver backed by the external `zip` utility.
///
/// Runs inside the bundle directory and feeds raw entry names on stdin, so the
/// archive holds bundle-relative paths with no wrapping directory. `-MM`
/// makes zip fail when a listed name does not match a file.
#[derive(Debug, Clone)]
pub struct ZipArchiver {
    program: String,
}

impl Default for ZipArchiver {
    fn default() -> Self {
        Self {
            program: "zip".to_string(),
        }
    }
}

impl ZipArchiver {
    /// Use a specific `zip` executable
    #[allow(dead_code)]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Archiver for ZipArchiver {
    fn extension(&self) -> &str {
        "zip"
    }

    fn write_archive(
        &self,
        source_dir: &Path,
        entries: &[PathBuf],
        destination: &Path,
    ) -> Result<()> {
        let destination = std::path::absolute(destination)?;
        let tool_failed = |reason: String| ReleaseError::ArchiveToolFailed {
            tool: self.program.clone(),
            reason,
        };

        let mut child = Command::new(&self.program)
            .args(["-q", "-X", "-MM"])
            .arg(&destination)
            .arg("-@")
            .current_dir(source_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| tool_failed(format!("could not start: {e}")))?;

        let mut names = Vec::new();
        for entry in entries {
            names.extend_from_slice(entry.as_os_str().as_encoded_bytes());
            names.push(b'\n');
        }
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(&names)
                .map_err(|e| tool_failed(format!("could not pass file list: {e}")))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| tool_failed(e.to_string()))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(tool_failed(format!(
                "{} ({})",
                stderr.trim(),
                output.status
            )));
        }

        Ok(())
    }
}

/// Builds one archive per bundle into an output directory.
pub struct ArchiveBuilder {
    archiver: Box<dyn Archiver>,
    output_dir: PathBuf,
}

impl ArchiveBuilder {
    pub fn new(output_dir: impl Into<PathBuf>, archiver: Box<dyn Archiver>) -> Self {
        Self {
            archiver,
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn extension(&self) -> &str {
        self.archiver.extension()
    }

    /// Describe the artifact a build would produce, without writing anything.
    pub fn plan(&self, name: &str, version: &str) -> BuildArtifact {
        let archive_file_name = archive_file_name(name, version, self.extension());
        BuildArtifact {
            name: name.to_string(),
            version: version.to_string(),
            archive_path: self.output_dir.join(&archive_file_name),
            archive_file_name,
        }
    }

    /// Package `bundle_dir` as `{name}-v{version}` in the output directory.
    ///
    /// A previous archive with the same name is replaced, but only after the
    /// new one has been verified.
    pub fn build(&self, bundle_dir: &Path, name: &str, version: &str) -> Result<BuildArtifact> {
        if !bundle_dir.is_dir() {
            return Err(ReleaseError::BundleNotDirectory {
                path: bundle_dir.display().to_string(),
            });
        }

        fs::create_dir_all(&self.output_dir).map_err(|e| ReleaseError::FileWriteFailed {
            path: self.output_dir.display().to_string(),
            reason: format!("Failed to create output directory: {e}"),
        })?;

        let artifact = self.plan(name, version);
        let entries = collect_entries(bundle_dir, self.extension())?;
        tracing::debug!(bundle = name, files = entries.len(), "collected bundle files");

        let staging = tempfile::Builder::new()
            .prefix(".staging-")
            .tempdir_in(&self.output_dir)
            .map_err(|e| ReleaseError::FileWriteFailed {
                path: self.output_dir.display().to_string(),
                reason: format!("Failed to create staging directory: {e}"),
            })?;
        let staged = staging.path().join(&artifact.archive_file_name);

        self.archiver.write_archive(bundle_dir, &entries, &staged)?;
        verify_archive(name, &staged, &artifact.archive_path)?;

        replace_file(&staged, &artifact.archive_path)?;
        Ok(artifact)
    }
}

/// Confirm a staged archive exists and is non-empty.
///
/// Failures are reported against `target`, the path the archive was headed for.
fn verify_archive(bundle: &str, path: &Path, target: &Path) -> Result<()> {
    let failed = |reason: &str| ReleaseError::ArchiveVerificationFailed {
        bundle: bundle.to_string(),
        path: target.display().to_string(),
        reason: reason.to_string(),
    };

    match fs::metadata(path) {
        Ok(meta) if !meta.is_file() => Err(failed("output is not a regular file")),
        Ok(meta) if meta.len() == 0 => Err(failed("archive is empty")),
        Ok(_) => Ok(()),
        Err(_) => Err(failed("archive was not created")),
    }
}

fn replace_file(from: &Path, to: &Path) -> Result<()> {
    let write_failed = |e: std::io::Error| ReleaseError::FileWriteFailed {
        path: to.display().to_string(),
        reason: e.to_string(),
    };
    if to.exists() {
        tracing::debug!(path = %to.display(), "overwriting existing archive");
        fs::remove_file(to).map_err(write_failed)?;
    }
    fs::rename(from, to).map_err(write_failed)
}
