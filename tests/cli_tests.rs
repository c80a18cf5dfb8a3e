//! CLI integration tests using the REAL skill-release binary

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn skill_release_cmd() -> Command {
    Command::cargo_bin("skill-release").unwrap()
}

#[test]
fn test_help_output() {
    skill_release_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("skill marketplace"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("changelog"))
        .stdout(predicate::str::contains("extract-version"));
}

#[test]
fn test_version_output() {
    skill_release_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("skill-release"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_no_subcommand_is_usage_error() {
    skill_release_cmd().assert().failure().code(2);
}

#[test]
fn test_changelog_without_arguments_is_usage_error() {
    skill_release_cmd()
        .arg("changelog")
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_changelog_without_manifest_is_usage_error() {
    skill_release_cmd()
        .args(["changelog", "v1.0.0"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("MANIFEST"));
}

#[test]
fn test_completions_bash() {
    skill_release_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skill-release"));
}

#[test]
fn test_completions_unknown_shell() {
    skill_release_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown shell: tcsh"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    skill_release_cmd()
        .args(["build", "--no-such-flag"])
        .assert()
        .failure()
        .code(2);
}
