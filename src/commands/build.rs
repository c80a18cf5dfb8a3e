//! Build command implementation
//!
//! Prints the manifest as JSON on stdout; everything human-facing goes to
//! stderr so the output can be piped into `skill-release changelog`.

use std::path::PathBuf;

use console::Style;

use crate::archive::{ArchiveBuilder, ZipArchiver};
use crate::cli::BuildArgs;
use crate::commands::resolve_root;
use crate::config::ReleaseConfig;
use crate::error::Result;
use crate::manifest::BuildManifest;
use crate::operations::{BuildOperation, BuildOptions};

/// Run build command
pub fn run(root: Option<PathBuf>, config_path: Option<PathBuf>, args: BuildArgs) -> Result<()> {
    let root = resolve_root(root)?;
    let config =
        ReleaseConfig::load(&root, config_path.as_deref())?.with_output_dir(args.output_dir);
    let builder = ArchiveBuilder::new(
        config.output_dir_in(&root),
        Box::new(ZipArchiver::default()),
    );
    let options = BuildOptions {
        dry_run: args.dry_run,
    };

    let manifest = BuildOperation::new(&root, &config, builder, options).run()?;

    println!("{}", manifest.to_json()?);
    print_summary(&manifest, args.dry_run);

    Ok(())
}

fn print_summary(manifest: &BuildManifest, dry_run: bool) {
    if manifest.is_empty() {
        eprintln!(
            "{}",
            Style::new()
                .for_stderr()
                .yellow()
                .apply_to("No skills found to package")
        );
        return;
    }

    let verb = if dry_run { "Would package" } else { "Packaged" };
    eprintln!(
        "{} {} skill(s)",
        Style::new().for_stderr().bold().green().apply_to(verb),
        manifest.len()
    );
    for artifact in manifest.artifacts() {
        eprintln!(
            "  {} v{} {}",
            Style::new().for_stderr().bold().apply_to(&artifact.name),
            artifact.version,
            Style::new()
                .for_stderr()
                .dim()
                .apply_to(artifact.archive_path.display())
        );
    }
}
