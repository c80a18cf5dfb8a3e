//! Changelog operation: release notes from git history and a build manifest
//!
//! The output always has two sections in fixed order. Neither section is
//! ever empty: an empty commit range and a missing manifest both render a
//! placeholder line instead.

use crate::error::Result;
use crate::git::{CommitSummary, History};
use crate::manifest::ManifestEntry;

pub const COMMITS_HEADING: &str = "## What's Changed";
pub const ARTIFACTS_HEADING: &str = "## Skills in this Release";

/// Commit section line when the range is empty
pub const INITIAL_RELEASE_LINE: &str = "- Initial release";

/// Artifact section line when no manifest entries are available
pub const NO_ARTIFACTS_LINE: &str = "- See release assets for packaged skills";

/// Format one commit line: `- <subject> (<short-hash>)`
pub fn commit_line(commit: &CommitSummary) -> String {
    format!("- {} ({})", commit.subject, commit.short_hash)
}

/// Format one artifact line: ``- **<name>** v<version> (`<file>`)``
pub fn artifact_line(entry: &ManifestEntry) -> String {
    format!("- **{}** v{} (`{}`)", entry.name, entry.version, entry.file)
}

/// Render release notes.
///
/// `artifacts` is `None` when the manifest could not be read; that renders
/// the same placeholder as an empty manifest.
pub fn render(commits: &[CommitSummary], artifacts: Option<&[ManifestEntry]>) -> String {
    let mut out = String::new();

    out.push_str(&format!("{COMMITS_HEADING}\n\n"));
    if commits.is_empty() {
        out.push_str(&format!("{INITIAL_RELEASE_LINE}\n"));
    } else {
        for commit in commits {
            out.push_str(&format!("{}\n", commit_line(commit)));
        }
    }

    out.push_str(&format!("\n{ARTIFACTS_HEADING}\n\n"));
    match artifacts {
        Some(entries) if !entries.is_empty() => {
            for entry in entries {
                out.push_str(&format!("{}\n", artifact_line(entry)));
            }
        }
        _ => out.push_str(&format!("{NO_ARTIFACTS_LINE}\n")),
    }

    out
}

/// Generates release notes for one release identifier
pub struct ChangelogOperation<'a> {
    history: &'a History,
}

impl<'a> ChangelogOperation<'a> {
    pub fn new(history: &'a History) -> Self {
        Self { history }
    }

    /// Render notes for `release` with the given manifest entries
    pub fn generate(&self, release: &str, artifacts: Option<&[ManifestEntry]>) -> Result<String> {
        let range = self.history.resolve_range(release)?;
        let commits = self.history.commits(&range)?;
        tracing::info!(
            %release,
            previous = %range.previous,
            commits = commits.len(),
            "collected release history"
        );
        Ok(render(&commits, artifacts))
    }
}
