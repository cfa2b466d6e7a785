//! Parse errors for the validated [`Oib`](crate::Oib) type.
//!
//! The boolean predicate in [`validator`](crate::validator) never produces
//! these; it collapses every failure into `false`.

use thiserror::Error;

/// Why a candidate is not a valid OIB, in the order the rules are checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OibError {
    /// Text is not exactly 11 characters long.
    #[error("expected 11 digits, got {len} characters")]
    InvalidLength { len: usize },

    /// A character at `position` (0-based) is not an ASCII decimal digit.
    #[error("non-digit character {found:?} at position {position}")]
    NonDigit { position: usize, found: char },

    /// The check digit does not match the one computed from the base.
    #[error("check digit mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: u8, found: u8 },
}
