//! Git reference resolution
//!
//! This module handles:
//! - Resolving `HEAD` and tags to commits
//! - Finding the nearest tagged ancestor of a commit
//! - Finding the first commit of a history

use std::collections::HashMap;
use std::fmt;

use git2::{Commit, Oid, Repository, Sort};

use crate::error::{ReleaseError, Result};

/// The lower bound a release range starts after
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviousPoint {
    /// The previous release tag
    Tag(String),
    /// No earlier tag; the first commit of the history
    RootCommit,
}

impl fmt::Display for PreviousPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(name) => write!(f, "tag {name}"),
            Self::RootCommit => write!(f, "first commit"),
        }
    }
}

/// Resolve `HEAD` to a commit
pub fn head_commit(repo: &Repository) -> Result<Commit<'_>> {
    repo.head()
        .and_then(|head| head.peel_to_commit())
        .map_err(|e| ReleaseError::GitRefResolveFailed {
            git_ref: "HEAD".to_string(),
            reason: e.message().to_string(),
        })
}

/// Resolve a tag (lightweight or annotated) to the commit it points at
pub fn tag_commit<'a>(repo: &'a Repository, name: &str) -> Result<Commit<'a>> {
    repo.find_reference(&format!("refs/tags/{name}"))
        .and_then(|reference| reference.peel_to_commit())
        .map_err(|e| ReleaseError::GitRefResolveFailed {
            git_ref: name.to_string(),
            reason: e.message().to_string(),
        })
}

/// Map of tagged commit to tag names. Tags that do not point at a commit are skipped.
fn tags_by_commit(repo: &Repository) -> Result<HashMap<Oid, Vec<String>>> {
    let mut tags: HashMap<Oid, Vec<String>> = HashMap::new();
    for name in repo.tag_names(None)?.iter().flatten() {
        match tag_commit(repo, name) {
            Ok(commit) => tags.entry(commit.id()).or_default().push(name.to_string()),
            Err(e) => tracing::debug!(tag = name, "ignoring tag: {e}"),
        }
    }
    Ok(tags)
}

/// Find the closest tagged commit reachable from `start`, `start` included.
///
/// Walks in topological order, so for linear history this is the most recent
/// tag. When a commit carries several tags the greatest name wins.
pub fn nearest_tag(repo: &Repository, start: Oid) -> Result<Option<(String, Oid)>> {
    let tags = tags_by_commit(repo)?;
    if tags.is_empty() {
        return Ok(None);
    }

    let mut walk = repo.revwalk()?;
    walk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
    walk.push(start)?;

    for oid in walk {
        let oid = oid?;
        if let Some(names) = tags.get(&oid) {
            if let Some(name) = names.iter().max() {
                return Ok(Some((name.clone(), oid)));
            }
        }
    }

    Ok(None)
}

/// The first commit of `start`'s history, following first parents
pub fn root_commit(repo: &Repository, start: Oid) -> Result<Oid> {
    let mut commit = repo.find_commit(start)?;
    while let Ok(parent) = commit.parent(0) {
        commit = parent;
    }
    Ok(commit.id())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::super::testing::{annotated_tag, commit, tag};
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_nearest_tag_prefers_closest() {
        let temp = TempDir::new().expect("temp");
        let repo = Repository::init(temp.path()).expect("init");
        let a = commit(&repo, "a");
        tag(&repo, "v0.1.0", a);
        let b = commit(&repo, "b");
        tag(&repo, "v0.2.0", b);
        let c = commit(&repo, "c");

        let nearest = nearest_tag(&repo, c).expect("walk");
        assert_eq!(nearest, Some(("v0.2.0".to_string(), b)));
    }

    #[test]
    fn test_nearest_tag_includes_start() {
        let temp = TempDir::new().expect("temp");
        let repo = Repository::init(temp.path()).expect("init");
        let a = commit(&repo, "a");
        annotated_tag(&repo, "v1.0.0", a);

        assert_eq!(
            nearest_tag(&repo, a).expect("walk"),
            Some(("v1.0.0".to_string(), a))
        );
    }

    #[test]
    fn test_nearest_tag_without_tags() {
        let temp = TempDir::new().expect("temp");
        let repo = Repository::init(temp.path()).expect("init");
        let a = commit(&repo, "a");
        assert_eq!(nearest_tag(&repo, a).expect("walk"), None);
    }

    #[test]
    fn test_root_commit() {
        let temp = TempDir::new().expect("temp");
        let repo = Repository::init(temp.path()).expect("init");
        let a = commit(&repo, "a");
        commit(&repo, "b");
        let c = commit(&repo, "c");
        assert_eq!(root_commit(&repo, c).expect("root"), a);
    }

    #[test]
    fn test_tag_commit_unknown_tag() {
        let temp = TempDir::new().expect("temp");
        let repo = Repository::init(temp.path()).expect("init");
        commit(&repo, "a");
        assert!(matches!(
            tag_commit(&repo, "v9.9.9"),
            Err(ReleaseError::GitRefResolveFailed { .. })
        ));
    }

    #[test]
    fn test_previous_point_display() {
        assert_eq!(PreviousPoint::Tag("v1.0.0".to_string()).to_string(), "tag v1.0.0");
        assert_eq!(PreviousPoint::RootCommit.to_string(), "first commit");
    }
}
