//! `oib <OIB>...` – validate each argument.

use anyhow::Result;
use oib_core::validator;
use std::io::Write;

pub(super) fn verdict(valid: bool) -> &'static str {
    if valid {
        "Valid"
    } else {
        "Invalid"
    }
}

/// `OIB <value>: Valid` or `OIB <value>: Invalid`.
pub fn format_result(oib: &str, valid: bool) -> String {
    format!("OIB {}: {}", oib, verdict(valid))
}

/// One line per argument, in argument order. Duplicates are printed each time.
pub fn run_check<W: Write>(out: &mut W, oibs: &[String]) -> Result<()> {
    for oib in oibs {
        let valid = validator::check(oib);
        writeln!(out, "{}", format_result(oib, valid))?;
    }
    Ok(())
}

/// All arguments as one JSON object keyed by OIB.
pub fn run_json<W: Write>(out: &mut W, oibs: &[String]) -> Result<()> {
    let results = validator::validate_many(oibs);
    serde_json::to_writer_pretty(&mut *out, &results)?;
    writeln!(out)?;
    Ok(())
}
