//! `oib --complete <BASE>...` – append the check digit to 10-digit base numbers.

use anyhow::Result;
use oib_core::checksum;
use std::io::Write;

pub fn run_complete<W: Write>(out: &mut W, bases: &[String]) -> Result<()> {
    for base in bases {
        match checksum::check_digit_for(base) {
            Some(digit) => writeln!(out, "{base}{digit}")?,
            None => writeln!(out, "OIB base {base}: Invalid")?,
        }
    }
    Ok(())
}
