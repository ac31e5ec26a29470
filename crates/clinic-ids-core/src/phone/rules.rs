//! Configurable mobile number rules.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{MobileNumber, PhoneError, PhoneResult, COUNTRY_PREFIXES};
use crate::grouping::strip_phone_separators;

/// Every mobile number starts with this digit.
pub const MOBILE_LEADING_DIGIT: char = '9';

/// Second digits accepted by default (91x, 92x, 93x, 96x).
pub const DEFAULT_SECOND_DIGITS: [char; 4] = ['1', '2', '3', '6'];

/// What [`build_pattern`] produces for [`DEFAULT_SECOND_DIGITS`].
pub const DEFAULT_PATTERN_SOURCE: &str = r"^(?:\+351|00351|351)?(9[1236][0-9]{7})$";

// Compile-time literal with no user input, so Regex::new cannot fail here.
// test_default_pattern_matches_builder keeps it in step with build_pattern.
static DEFAULT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_PATTERN_SOURCE).expect("literal mobile pattern"));

/// Serializable form of [`MobileRules`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobileRulesConfig {
    /// Digits allowed right after the leading 9
    pub second_digits: Vec<char>,
}

impl Default for MobileRulesConfig {
    fn default() -> Self {
        Self {
            second_digits: DEFAULT_SECOND_DIGITS.to_vec(),
        }
    }
}

/// Which mobile numbers are accepted.
#[derive(Debug, Clone)]
pub struct MobileRules {
    second_digits: BTreeSet<char>,
    pattern: Regex,
}

impl Default for MobileRules {
    fn default() -> Self {
        Self::new()
    }
}

impl MobileRules {
    /// Rules accepting 91, 92, 93 and 96 numbers.
    pub fn new() -> Self {
        Self {
            second_digits: DEFAULT_SECOND_DIGITS.into_iter().collect(),
            pattern: DEFAULT_PATTERN.clone(),
        }
    }

    /// Replace the accepted second digits.
    pub fn with_second_digits(digits: &[char]) -> PhoneResult<Self> {
        if digits.is_empty() {
            return Err(PhoneError::Rules("no second digits given".into()));
        }
        if let Some(bad) = digits.iter().find(|c| !c.is_ascii_digit()) {
            return Err(PhoneError::Rules(format!("'{}' is not a digit", bad)));
        }

        let second_digits: BTreeSet<char> = digits.iter().copied().collect();
        let pattern = build_pattern(&second_digits)?;
        debug!(pattern = pattern.as_str(), "built custom mobile rules");

        Ok(Self {
            second_digits,
            pattern,
        })
    }

    /// Build rules from a config value.
    pub fn from_config(config: &MobileRulesConfig) -> PhoneResult<Self> {
        Self::with_second_digits(&config.second_digits)
    }

    /// Load rules from JSON such as `{"second_digits": ["1", "2", "3", "6"]}`.
    pub fn from_json(json: &str) -> PhoneResult<Self> {
        let config: MobileRulesConfig = serde_json::from_str(json)?;
        Self::from_config(&config)
    }

    /// Current rules as a config value.
    pub fn config(&self) -> MobileRulesConfig {
        MobileRulesConfig {
            second_digits: self.second_digits(),
        }
    }

    /// Accepted second digits, ascending.
    pub fn second_digits(&self) -> Vec<char> {
        self.second_digits.iter().copied().collect()
    }

    /// Check whether `input` is an accepted mobile number.
    pub fn is_valid(&self, input: &str) -> bool {
        self.pattern.is_match(&strip_phone_separators(input))
    }

    /// Parse `input` into a [`MobileNumber`].
    pub fn parse(&self, input: &str) -> PhoneResult<MobileNumber> {
        let stripped = strip_phone_separators(input);
        match self.pattern.captures(&stripped).and_then(|c| c.get(1)) {
            Some(national) => Ok(MobileNumber::from_national(national.as_str())),
            None => {
                trace!("rejected mobile number input");
                Err(PhoneError::InvalidFormat(stripped))
            }
        }
    }
}

fn build_pattern(second_digits: &BTreeSet<char>) -> PhoneResult<Regex> {
    let prefixes = COUNTRY_PREFIXES
        .iter()
        .map(|prefix| regex::escape(prefix))
        .collect::<Vec<_>>()
        .join("|");
    let class: String = second_digits.iter().collect();

    // [0-9] rather than \d, which would admit non-ASCII digits
    let pattern = format!(
        "^(?:{})?({}[{}][0-9]{{7}})$",
        prefixes, MOBILE_LEADING_DIGIT, class
    );
    Ok(Regex::new(&pattern)?)
}
