//! `oib` with no arguments – usage, demonstration checks, then a prompt loop.

use anyhow::Result;
use oib_core::config::OibConfig;
use oib_core::validator;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use super::check::{format_result, verdict};

const DEMO_VALID: &str = "12345678903";
const DEMO_INVALID: &str = "12345678901";

/// Why the prompt loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEnd {
    ExitWord,
    EndOfInput,
}

/// Usage text, the optional demonstration checks, and the interactive-mode header.
pub fn write_banner<W: Write>(cfg: &OibConfig, out: &mut W) -> Result<()> {
    writeln!(out, "OIB Validator - Croatian personal identification number checker")?;
    writeln!(out)?;
    writeln!(out, "Usage:")?;
    writeln!(out, "  oib [OIB]...")?;
    writeln!(out)?;
    writeln!(out, "Example:")?;
    writeln!(out, "  oib {DEMO_VALID} {DEMO_INVALID}")?;

    if cfg.show_examples {
        writeln!(out)?;
        writeln!(out, "Running examples:")?;
        writeln!(
            out,
            "Valid OIB test ({DEMO_VALID}): {}",
            verdict(validator::check(DEMO_VALID))
        )?;
        writeln!(
            out,
            "Invalid OIB test ({DEMO_INVALID}): {}",
            verdict(validator::check(DEMO_INVALID))
        )?;
    }

    writeln!(out)?;
    match cfg.exit_words.first() {
        Some(word) => writeln!(out, "Interactive mode (type '{word}' to quit):")?,
        None => writeln!(out, "Interactive mode (end input to quit):")?,
    }
    Ok(())
}

/// Prompt for lines until an exit word or end of input.
///
/// Empty lines are skipped. Other lines go to the validator exactly as typed
/// (minus the line terminator), so surrounding spaces make a line invalid.
/// A line that is not UTF-8 is reported as invalid and the loop continues.
pub async fn prompt_loop<R, W>(cfg: &OibConfig, mut input: R, out: &mut W) -> Result<LoopEnd>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buf = Vec::new();
    let mut checked = 0usize;
    loop {
        write!(out, "{}", cfg.prompt)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            // Keep the shell prompt off the dangling interactive prompt.
            writeln!(out)?;
            tracing::debug!(checked, "interactive input closed");
            return Ok(LoopEnd::EndOfInput);
        }
        strip_line_ending(&mut buf);

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(_) => {
                tracing::debug!(len = buf.len(), "non-UTF-8 interactive line");
                checked += 1;
                writeln!(out, "{}", format_result(&String::from_utf8_lossy(&buf), false))?;
                continue;
            }
        };
        if cfg.is_exit_word(line) {
            tracing::debug!(checked, "interactive exit requested");
            return Ok(LoopEnd::ExitWord);
        }
        if line.is_empty() {
            continue;
        }

        let valid = validator::check(line);
        checked += 1;
        writeln!(out, "{}", format_result(line, valid))?;
    }
}

/// Drop a trailing `\n` or `\r\n`.
fn strip_line_ending(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
}

/// Full no-argument session on the process's stdin.
pub async fn run_interactive_session<W: Write>(cfg: &OibConfig, out: &mut W) -> Result<()> {
    write_banner(cfg, out)?;
    let stdin = BufReader::new(tokio::io::stdin());
    prompt_loop(cfg, stdin, out).await?;
    Ok(())
}
