//! Validated mobile number value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{
    default_rules, international_display, PhoneError, PhoneResult, COUNTRY_CODE,
    MOBILE_LEADING_DIGIT, NATIONAL_LENGTH,
};

/// A mobile number accepted by a [`MobileRules`](super::MobileRules).
///
/// Holds the nine national digits. Displays as `+351 XXX XXX XXX` and
/// serializes as E.164 (`+351XXXXXXXXX`). Deserializing checks only that
/// shape; the second-digit policy stays with the rules that built the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Parse user input against the default rules.
    pub fn parse(input: &str) -> PhoneResult<Self> {
        default_rules().parse(input)
    }

    pub(crate) fn from_national(digits: &str) -> Self {
        Self(digits.to_string())
    }

    /// Rebuild from `+351` followed by nine digits starting with 9.
    fn from_e164(value: &str) -> PhoneResult<Self> {
        let national = value
            .strip_prefix('+')
            .and_then(|rest| rest.strip_prefix(COUNTRY_CODE))
            .filter(|national| {
                national.len() == NATIONAL_LENGTH
                    && national.starts_with(MOBILE_LEADING_DIGIT)
                    && national.bytes().all(|b| b.is_ascii_digit())
            })
            .ok_or_else(|| PhoneError::InvalidFormat(value.to_string()))?;
        Ok(Self::from_national(national))
    }

    /// The nine digits after the country code.
    pub fn national(&self) -> &str {
        &self.0
    }

    pub fn e164(&self) -> String {
        format!("+{}{}", COUNTRY_CODE, self.0)
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&international_display(&self.0))
    }
}

impl FromStr for MobileNumber {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MobileNumber {
    type Error = PhoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_e164(&value)
    }
}

impl From<MobileNumber> for String {
    fn from(number: MobileNumber) -> Self {
        number.e164()
    }
}
