//! CLI tests (split by concern: argument parsing, command output).

use super::{Cli, Mode};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Mode {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.into_mode()
}

mod output;
