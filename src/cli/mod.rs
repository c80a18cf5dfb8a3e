//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - build: Build command arguments
//! - changelog: Changelog command arguments
//! - extract_version: Extract-version command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod build;
pub mod changelog;
pub mod completions;
pub mod extract_version;

pub use build::BuildArgs;
pub use changelog::ChangelogArgs;
pub use completions::CompletionsArgs;
pub use extract_version::ExtractVersionArgs;

/// skill-release - package skills and write release notes
#[derive(Parser, Debug)]
#[command(
    name = "skill-release",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Build-and-release pipeline for skill marketplace repositories",
    long_about = "skill-release discovers skill directories in a repository, packages each one \
                  into a versioned archive named after the version in its SKILL.md frontmatter, \
                  and writes release notes from git history and the resulting build manifest.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  skill-release build > manifest.json               \x1b[90m# Package every skill\x1b[0m\n   \
                  skill-release build --dry-run                     \x1b[90m# Show what would be packaged\x1b[0m\n   \
                  skill-release changelog v1.2.0 \"$(cat manifest.json)\" \x1b[90m# Release notes\x1b[0m\n   \
                  skill-release extract-version pdf/SKILL.md        \x1b[90m# Print one skill's version\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Repository root (defaults to current directory)
    #[arg(long, short = 'r', global = true, env = "SKILL_RELEASE_ROOT")]
    pub root: Option<PathBuf>,

    /// Configuration file (defaults to .skill-release.yaml in the root)
    #[arg(long, short = 'c', global = true, env = "SKILL_RELEASE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Package every skill and print the build manifest as JSON
    Build(BuildArgs),

    /// Print release notes for a release identifier and build manifest
    Changelog(ChangelogArgs),

    /// Print the version declared in a skill's metadata file
    ExtractVersion(ExtractVersionArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
