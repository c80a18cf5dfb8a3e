use clap::Parser;
use std::path::PathBuf;

/// Arguments for build command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Package all skills into dist/:\n    skill-release build > manifest.json\n\n\
                  Package into a custom directory:\n    skill-release build --output-dir release\n\n\
                  Preview archive names without writing:\n    skill-release build --dry-run")]
pub struct BuildArgs {
    /// Output directory for archives (overrides the config file; default: dist)
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// Compute the manifest without writing any archive
    #[arg(long)]
    pub dry_run: bool,
}
