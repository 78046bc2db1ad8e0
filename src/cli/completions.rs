use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    baler completions bash > ~/.bash_completion.d/baler\n\n\
                  Generate zsh completions:\n    baler completions zsh > ~/.zfunc/_baler\n\n\
                  Generate fish completions:\n    baler completions fish > ~/.config/fish/completions/baler.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
