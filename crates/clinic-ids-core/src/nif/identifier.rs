//! Validated NIF value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{parse_digits, NifCategory, NifError, NifResult};
use crate::grouping::group_in_threes;

/// A NIF that passed the format and check-digit rules.
///
/// Holds the nine compact digits. Serializes as that string and refuses to
/// deserialize anything that would fail [`Nif::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nif(String);

impl Nif {
    /// Parse user input, ignoring whitespace.
    pub fn parse(input: &str) -> NifResult<Self> {
        match parse_digits(input) {
            Ok(digits) => Ok(Self(digits.iter().map(|&d| char::from(b'0' + d)).collect())),
            Err(e) => {
                trace!(error = %e, "rejected NIF input");
                Err(e)
            }
        }
    }

    /// The nine digits without separators.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form, `XXX XXX XXX`.
    pub fn formatted(&self) -> String {
        group_in_threes(&self.0)
    }

    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[8] - b'0'
    }

    pub fn category(&self) -> NifCategory {
        NifCategory::from_digits(&self.0)
    }
}

impl fmt::Display for Nif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Nif {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Nif {
    type Err = NifError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Nif {
    type Error = NifError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Nif> for String {
    fn from(nif: Nif) -> Self {
        nif.0
    }
}
