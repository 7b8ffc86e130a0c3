//! Shell completion scripts.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::Result;

/// Print the completion script for `shell` to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    render(shell, &mut std::io::stdout().lock());
    Ok(())
}

/// Write the completion script for `shell` to `out`.
pub fn render<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin, out);
}
