//! Shell completion and man page generation.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;

use crate::cli::Cli;

pub fn run_completions<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "oib", out);
}

pub fn run_man<W: Write>(out: &mut W) -> Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    man.render(out)?;
    Ok(())
}
