//! skill-release - build-and-release pipeline for skill repositories
//!
//! Packages every skill directory of a repository into a versioned archive,
//! emits a JSON build manifest, and writes markdown release notes from git
//! history and that manifest.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod archive;
mod cli;
mod commands;
mod config;
mod error;
mod frontmatter;
mod git;
mod manifest;
mod operations;
mod progress;
mod version;

use cli::{Cli, Commands};

/// Initialize logging to stderr; `--verbose` wins over `RUST_LOG`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Build(args) => commands::build::run(cli.root, cli.config, args),
        Commands::Changelog(args) => commands::changelog::run(cli.root, args),
        Commands::ExtractVersion(args) => commands::extract_version::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
