use clap::Parser;
use vcsprompt::vcs_prompt;

/// Version-control status segment for shell prompts.
///
/// Prints a terse, colorized indicator for whichever backend owns the
/// current directory, and nothing at all outside a working tree. Wire it
/// into the prompt, e.g. PS1='$(vcsprompt) \$ ' or a zsh precmd hook.
#[derive(Parser)]
#[command(name = "vcsprompt", version, about)]
struct Cli {}

fn main() {
    env_logger::init();
    let _cli = Cli::parse();

    // Every path yields a string; failures are carried in-band in the
    // rendered text, and the exit code stays 0 so the prompt never sees
    // a broken substitution.
    print!("{}", vcs_prompt());
}
