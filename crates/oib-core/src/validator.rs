//! OIB checksum validator.
//!
//! [`check`] is a predicate: malformed input and a wrong check digit both
//! yield `false`, nothing here returns an error. [`validate_many`] applies it
//! to a sequence and collects the outcomes in a [`BatchResult`].

use std::borrow::Cow;
use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::checksum::{ascii_digits, check_digit, BASE_LEN, OIB_LEN};

/// A value that can be validated as an OIB.
///
/// Text is used as-is. Unsigned integers are rendered as canonical decimal
/// text, which has no leading zeros, so an OIB starting with `0` has to be
/// passed as text.
pub trait Candidate {
    /// Decimal text form of the candidate; also the key used in a [`BatchResult`].
    fn to_candidate_text(&self) -> Cow<'_, str>;
}

impl Candidate for str {
    fn to_candidate_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Candidate for String {
    fn to_candidate_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Candidate for Cow<'_, str> {
    fn to_candidate_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl<T: Candidate + ?Sized> Candidate for &T {
    fn to_candidate_text(&self) -> Cow<'_, str> {
        (**self).to_candidate_text()
    }
}

macro_rules! unsigned_candidate {
    ($($t:ty),*) => {
        $(
            impl Candidate for $t {
                fn to_candidate_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

unsigned_candidate!(u8, u16, u32, u64, u128, usize);

/// Returns `true` iff `candidate` is 11 ASCII digits whose last digit is the
/// ISO 7064 MOD 11-10 check digit of the first ten.
pub fn check<C: Candidate>(candidate: C) -> bool {
    let text = candidate.to_candidate_text();
    let valid = check_text(&text);
    tracing::trace!(candidate = %text, valid, "oib check");
    valid
}

fn check_text(text: &str) -> bool {
    let Some(digits) = ascii_digits::<OIB_LEN>(text) else {
        return false;
    };
    let mut base = [0u8; BASE_LEN];
    base.copy_from_slice(&digits[..BASE_LEN]);
    check_digit(&base) == digits[BASE_LEN]
}

/// Validate a single candidate. Same as [`check`].
pub fn validate_one<C: Candidate>(candidate: C) -> bool {
    check(candidate)
}

/// Validate every candidate in order.
///
/// Results are keyed by each candidate's text form. Candidates are not
/// deduplicated first: when two of them share a text form, the later result
/// overwrites the earlier one (see [`BatchResult::insert`]).
pub fn validate_many<I>(candidates: I) -> BatchResult
where
    I: IntoIterator,
    I::Item: Candidate,
{
    let mut results = BatchResult::new();
    for candidate in candidates {
        let key = candidate.to_candidate_text().into_owned();
        let valid = check(&key);
        results.insert(key, valid);
    }
    tracing::debug!(
        total = results.len(),
        valid = results.valid_count(),
        "validated batch"
    );
    results
}

/// Insertion-ordered mapping from candidate text to validation result.
///
/// Behaves like an ordered dictionary: a key keeps the position of its first
/// insertion, and re-inserting it replaces the value (last write wins).
/// Serializes as a JSON object in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    entries: Vec<(String, bool)>,
    index: HashMap<String, usize>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `valid` for `key`, returning the value it replaced, if any.
    pub fn insert(&mut self, key: String, valid: bool) -> Option<bool> {
        if let Some(&pos) = self.index.get(&key) {
            let previous = std::mem::replace(&mut self.entries[pos].1, valid);
            return Some(previous);
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, valid));
        None
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        self.index.get(key).map(|&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of keys whose result is `true`.
    pub fn valid_count(&self) -> usize {
        self.entries.iter().filter(|(_, valid)| *valid).count()
    }

    pub fn all_valid(&self) -> bool {
        self.entries.iter().all(|(_, valid)| *valid)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.entries.iter().map(|(key, valid)| (key.as_str(), *valid))
    }
}

impl Serialize for BatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, valid) in &self.entries {
            map.serialize_entry(key, valid)?;
        }
        map.end()
    }
}
