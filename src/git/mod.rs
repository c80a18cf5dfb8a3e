//! Git history queries for release notes
//!
//! This module handles:
//! - Opening the repository that encloses a working directory
//! - Resolving the previous release point from tag history
//! - Listing commit subjects between two points
//!
//! Only local history is read; nothing is fetched or written.

pub mod log;
pub mod refs;

use std::path::Path;

use git2::{Oid, Repository};

use crate::error::{ReleaseError, Result};

pub use log::CommitSummary;
pub use refs::PreviousPoint;

/// Commits reachable from `upper` but not from `lower`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRange {
    /// Exclusive lower bound
    pub lower: Oid,
    /// Inclusive upper bound
    pub upper: Oid,
    /// What `lower` refers to
    pub previous: PreviousPoint,
}

/// Read-only view of a repository's history
pub struct History {
    repo: Repository,
}

impl History {
    /// Open the repository enclosing `path`
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|_| ReleaseError::NotInGitRepository)?;
        Ok(Self { repo })
    }

    #[allow(dead_code)]
    pub fn from_repository(repo: Repository) -> Self {
        Self { repo }
    }

    /// Whether `refs/tags/{name}` exists
    pub fn tag_exists(&self, name: &str) -> bool {
        self.repo.find_reference(&format!("refs/tags/{name}")).is_ok()
    }

    /// Work out which commits belong to `release`.
    ///
    /// If `release` is an existing tag, the range ends at that tag and starts
    /// at the nearest tag before it. Otherwise the range ends at `HEAD` and
    /// starts at the nearest tag reachable from `HEAD`. Without any earlier
    /// tag, the repository's first commit is the lower bound.
    pub fn resolve_range(&self, release: &str) -> Result<CommitRange> {
        let (upper, search_from) = if self.tag_exists(release) {
            let tagged = refs::tag_commit(&self.repo, release)?;
            let parent = tagged.parent_id(0).ok();
            (tagged.id(), parent)
        } else {
            let head = refs::head_commit(&self.repo)?;
            (head.id(), Some(head.id()))
        };

        let nearest = match search_from {
            Some(start) => refs::nearest_tag(&self.repo, start)?,
            None => None,
        };

        let (lower, previous) = match nearest {
            Some((name, oid)) => (oid, PreviousPoint::Tag(name)),
            None => (refs::root_commit(&self.repo, upper)?, PreviousPoint::RootCommit),
        };

        tracing::debug!(%release, %previous, %lower, %upper, "resolved commit range");
        Ok(CommitRange {
            lower,
            upper,
            previous,
        })
    }

    /// Commit summaries in `range`, oldest first
    pub fn commits(&self, range: &CommitRange) -> Result<Vec<CommitSummary>> {
        log::commits_between(&self.repo, range.lower, range.upper)
    }
}
