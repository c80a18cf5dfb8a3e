use clap::Parser;

/// Arguments for changelog command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Notes for an upcoming release:\n    skill-release changelog v1.2.0 \"$(skill-release build)\"\n\n\
                  Read the manifest from stdin:\n    skill-release build | skill-release changelog v1.2.0 -")]
pub struct ChangelogArgs {
    /// Release identifier, usually the tag being released (e.g. v1.2.0)
    pub release: String,

    /// Build manifest as JSON, or '-' to read it from stdin
    pub manifest: String,
}
