//! Integration tests for the changelog command

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn skill_release_cmd() -> Command {
    Command::cargo_bin("skill-release").unwrap()
}

const MANIFEST: &str = r#"[{"name":"xlsx","version":"1.0.0","file":"xlsx-v1.0.0.zip"}]"#;

/// Workspace with a tagged v1.1.0 release and two later commits
fn released_workspace() -> common::TestWorkspace {
    let workspace = common::TestWorkspace::new();
    let repo = workspace.init_git();
    common::commit(&repo, "Initial commit");
    let released = common::commit(&repo, "Release 1.1.0");
    common::tag(&repo, "v1.1.0", released);
    common::commit(&repo, "Add xlsx skill");
    common::commit(&repo, "Fix pdf script");
    workspace
}

#[test]
fn test_changelog_lists_commits_since_previous_tag() {
    let workspace = released_workspace();

    skill_release_cmd()
        .current_dir(&workspace.path)
        .args(["changelog", "v1.2.0", MANIFEST])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("## What's Changed"))
        .stdout(predicate::str::contains("- Add xlsx skill ("))
        .stdout(predicate::str::contains("- Fix pdf script ("))
        .stdout(predicate::str::contains("Release 1.1.0").not())
        .stdout(predicate::str::contains("## Skills in this Release"))
        .stdout(predicate::str::contains("- **xlsx** v1.0.0 (`xlsx-v1.0.0.zip`)"));
}

#[test]
fn test_changelog_reads_manifest_from_stdin() {
    let workspace = released_workspace();

    skill_release_cmd()
        .current_dir(&workspace.path)
        .args(["changelog", "v1.2.0", "-"])
        .write_stdin(MANIFEST)
        .assert()
        .success()
        .stdout(predicate::str::contains("- **xlsx** v1.0.0 (`xlsx-v1.0.0.zip`)"));
}

#[test]
fn test_changelog_malformed_manifest_uses_placeholder() {
    let workspace = released_workspace();

    skill_release_cmd()
        .current_dir(&workspace.path)
        .args(["changelog", "v1.2.0", "not json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- See release assets for packaged skills"))
        .stderr(predicate::str::contains("ignoring build manifest"));
}

#[test]
fn test_changelog_empty_manifest_uses_placeholder() {
    let workspace = released_workspace();

    skill_release_cmd()
        .current_dir(&workspace.path)
        .args(["changelog", "v1.2.0", "[]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- See release assets for packaged skills"));
}

#[test]
fn test_changelog_single_commit_is_initial_release() {
    let workspace = common::TestWorkspace::new();
    let repo = workspace.init_git();
    common::commit(&repo, "Initial commit");

    skill_release_cmd()
        .current_dir(&workspace.path)
        .args(["changelog", "v1.0.0", "[]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Initial release"))
        .stdout(predicate::str::contains("Initial commit").not());
}

#[test]
fn test_changelog_existing_tag_ends_at_that_tag() {
    let workspace = common::TestWorkspace::new();
    let repo = workspace.init_git();
    let first = common::commit(&repo, "Initial commit");
    common::tag(&repo, "v1.0.0", first);
    let second = common::commit(&repo, "Add docx skill");
    common::tag(&repo, "v1.1.0", second);
    common::commit(&repo, "Unreleased work");

    skill_release_cmd()
        .current_dir(&workspace.path)
        .args(["changelog", "v1.1.0", "[]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Add docx skill ("))
        .stdout(predicate::str::contains("Unreleased work").not());
}

#[test]
fn test_changelog_root_flag() {
    let workspace = released_workspace();

    skill_release_cmd()
        .arg("-r")
        .arg(&workspace.path)
        .args(["changelog", "v1.2.0", "[]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Add xlsx skill ("));
}

#[test]
fn test_changelog_outside_repository_fails() {
    let workspace = common::TestWorkspace::new();

    skill_release_cmd()
        .current_dir(&workspace.path)
        .args(["changelog", "v1.0.0", "[]"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Not in a git repository"));
}
