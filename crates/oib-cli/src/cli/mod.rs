//! CLI for the OIB validator.

mod commands;

use anyhow::Result;
use clap::Parser;
use clap_complete::Shell;
use oib_core::config;
use std::ffi::OsString;
use std::io;

use commands::{
    run_check, run_complete, run_completions, run_interactive_session, run_json, run_man,
};

/// Top-level CLI for the OIB validator.
#[derive(Debug, Parser)]
#[command(name = "oib", version)]
#[command(about = "Validate Croatian personal identification numbers (OIB)", long_about = None)]
pub struct Cli {
    /// OIBs to validate. Without any, prints usage and starts interactive mode.
    /// Arguments that are not valid UTF-8 are accepted and reported as invalid.
    #[arg(value_name = "OIB")]
    pub oibs: Vec<OsString>,

    /// Print results as a JSON object keyed by OIB (duplicates collapse, last one wins).
    #[arg(long, requires = "oibs", conflicts_with = "complete")]
    pub json: bool,

    /// Treat each argument as a 10-digit base number and print it with its check digit.
    #[arg(long, requires = "oibs")]
    pub complete: bool,

    /// Print shell completions for SHELL and exit.
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,

    /// Print a roff man page and exit.
    #[arg(long, exclusive = true)]
    pub man: bool,
}

/// What a parsed command line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Completions(Shell),
    Man,
    Complete(Vec<String>),
    Json(Vec<String>),
    Check(Vec<String>),
    Interactive,
}

impl Cli {
    pub fn into_mode(self) -> Mode {
        if let Some(shell) = self.completions {
            return Mode::Completions(shell);
        }
        if self.man {
            return Mode::Man;
        }
        if self.oibs.is_empty() {
            return Mode::Interactive;
        }
        // Lossy text keeps a replacement character, which never passes as a digit.
        let oibs: Vec<String> = self
            .oibs
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        if self.complete {
            Mode::Complete(oibs)
        } else if self.json {
            Mode::Json(oibs)
        } else {
            Mode::Check(oibs)
        }
    }

    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mode = cli.into_mode();
        tracing::debug!(?mode, "dispatch");

        let mut out = io::stdout();
        match mode {
            Mode::Completions(shell) => run_completions(shell, &mut out),
            Mode::Man => run_man(&mut out)?,
            Mode::Complete(bases) => run_complete(&mut out, &bases)?,
            Mode::Json(oibs) => run_json(&mut out, &oibs)?,
            Mode::Check(oibs) => run_check(&mut out, &oibs)?,
            Mode::Interactive => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_interactive_session(&cfg, &mut out).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
