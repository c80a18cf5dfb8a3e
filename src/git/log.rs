//! Commit listing between two points in history

use git2::{Oid, Repository, Sort};

use crate::error::Result;

/// Number of hex digits in an abbreviated commit hash
const SHORT_HASH_LEN: usize = 7;

/// One line of release history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    pub subject: String,
    pub short_hash: String,
}

/// Commits reachable from `upper` and not from `lower`, oldest first.
pub fn commits_between(repo: &Repository, lower: Oid, upper: Oid) -> Result<Vec<CommitSummary>> {
    let mut walk = repo.revwalk()?;
    walk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME | Sort::REVERSE)?;
    walk.push(upper)?;
    walk.hide(lower)?;

    let mut commits = Vec::new();
    for oid in walk {
        let commit = repo.find_commit(oid?)?;
        let mut short_hash = commit.id().to_string();
        short_hash.truncate(SHORT_HASH_LEN);
        commits.push(CommitSummary {
            subject: commit.summary().unwrap_or_default().to_string(),
            short_hash,
        });
    }

    Ok(commits)
}
