//! Shell completion generation.

use clap::CommandFactory as _;
use clap_complete::Shell;

/// Writes a completion script for `shell` to stdout.
pub fn run(shell: Shell) {
    let mut cmd = crate::Cli::command();
    clap_complete::generate(shell, &mut cmd, "how2validate", &mut std::io::stdout());
}
