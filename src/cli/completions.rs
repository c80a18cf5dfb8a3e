use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    skill-release completions bash > ~/.bash_completion.d/skill-release\n\n\
                  Generate zsh completions:\n    skill-release completions zsh > ~/.zfunc/_skill-release\n\n\
                  Generate fish completions:\n    skill-release completions fish > ~/.config/fish/completions/skill-release.fish\n\n\
                  Generate PowerShell completions:\n    skill-release completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
