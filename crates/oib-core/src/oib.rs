//! Validated OIB value.
//!
//! An [`Oib`] can only be built from text that passes [`check`](crate::check),
//! so code holding one never needs to re-validate it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::checksum::{check_digit, BASE_LEN, OIB_LEN};
use crate::error::OibError;

/// A Croatian personal identification number with a correct check digit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Oib(String);

impl Oib {
    /// Parse `text`, reporting the first rule it breaks: length, then
    /// digit-ness, then the check digit.
    pub fn parse(text: &str) -> Result<Self, OibError> {
        let len = text.chars().count();
        if len != OIB_LEN {
            return Err(OibError::InvalidLength { len });
        }

        let mut digits = [0u8; OIB_LEN];
        for (position, (slot, c)) in digits.iter_mut().zip(text.chars()).enumerate() {
            match c.to_digit(10) {
                Some(d) => *slot = d as u8,
                None => return Err(OibError::NonDigit { position, found: c }),
            }
        }

        let mut base = [0u8; BASE_LEN];
        base.copy_from_slice(&digits[..BASE_LEN]);
        let expected = check_digit(&base);
        let found = digits[BASE_LEN];
        if expected != found {
            return Err(OibError::ChecksumMismatch { expected, found });
        }

        Ok(Oib(text.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The ten base digits.
    pub fn base(&self) -> &str {
        &self.0[..BASE_LEN]
    }

    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[BASE_LEN] - b'0'
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for Oib {
    type Err = OibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Oib::parse(s)
    }
}

impl TryFrom<u64> for Oib {
    type Error = OibError;

    /// Integers carry no leading zeros; OIBs starting with `0` must be parsed from text.
    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Oib::parse(&value.to_string())
    }
}

impl TryFrom<&str> for Oib {
    type Error = OibError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Oib::parse(value)
    }
}

impl AsRef<str> for Oib {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Oib {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Oib {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Oib {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Oib::parse(&text).map_err(serde::de::Error::custom)
    }
}
