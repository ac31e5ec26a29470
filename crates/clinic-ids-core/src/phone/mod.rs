//! Portuguese mobile number validation and formatting.
//!
//! Accepted shapes, after whitespace, hyphens and parentheses are stripped:
//!
//! ```text
//! [+351 | 00351 | 351] 9 [1236] ddddddd
//! ```
//!
//! The accepted second digits live in [`MobileRules`]. The free functions
//! below use the default rules.

mod number;
mod rules;

pub use number::*;
pub use rules::*;

use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::debug;

use crate::grouping::{group_in_threes, strip_phone_separators};

/// Country code used for display and E.164 output.
pub const COUNTRY_CODE: &str = "351";

/// Country prefixes recognized in input, in the order they are tried.
pub const COUNTRY_PREFIXES: [&str; 3] = ["+351", "00351", "351"];

/// Number of significant digits after the country code.
pub const NATIONAL_LENGTH: usize = 9;

/// Phone errors.
#[derive(Error, Debug)]
pub enum PhoneError {
    #[error("Invalid mobile number format: {0}")]
    InvalidFormat(String),

    #[error("Invalid mobile rules: {0}")]
    Rules(String),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PhoneResult<T> = Result<T, PhoneError>;

static DEFAULT_RULES: Lazy<MobileRules> = Lazy::new(MobileRules::new);

/// Shared default rules.
pub fn default_rules() -> &'static MobileRules {
    &DEFAULT_RULES
}

/// Check whether `input` is an accepted mobile number under the default rules.
pub fn is_valid_mobile(input: &str) -> bool {
    DEFAULT_RULES.is_valid(input)
}

/// Render a phone number as `+351 XXX XXX XXX`.
///
/// A recognized country prefix followed by nine digits, or exactly nine
/// digits on their own, is reformatted. Anything else comes back verbatim.
/// The mobile digit rules are not applied, so landlines format too.
pub fn format_mobile(input: &str) -> String {
    let stripped = strip_phone_separators(input);
    match national_digits(&stripped) {
        Some(national) => international_display(national),
        None => {
            debug!("unrecognized phone number shape, leaving it unformatted");
            input.to_string()
        }
    }
}

/// Find the nine significant digits in separator-free input.
fn national_digits(stripped: &str) -> Option<&str> {
    COUNTRY_PREFIXES
        .iter()
        .filter_map(|prefix| stripped.strip_prefix(prefix))
        .find(|rest| is_national_number(rest))
        .or_else(|| is_national_number(stripped).then_some(stripped))
}

fn is_national_number(candidate: &str) -> bool {
    candidate.len() == NATIONAL_LENGTH && candidate.bytes().all(|b| b.is_ascii_digit())
}

pub(crate) fn international_display(national: &str) -> String {
    format!("+{} {}", COUNTRY_CODE, group_in_threes(national))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_mobile() {
        assert!(is_valid_mobile("+351 912 345 678"));
        assert!(is_valid_mobile("912345678"));
        assert!(is_valid_mobile("00351 932 345 678"));
        assert!(is_valid_mobile("351963456789"));
        assert!(is_valid_mobile("(+351) 926-345-678"));

        assert!(!is_valid_mobile("812345678"));
        assert!(!is_valid_mobile("942345678"));
        assert!(!is_valid_mobile("212345678"));
        assert!(!is_valid_mobile("91234567"));
        assert!(!is_valid_mobile("9123456789"));
        assert!(!is_valid_mobile("+34 912 345 678"));
        assert!(!is_valid_mobile("91234567a"));
        assert!(!is_valid_mobile(""));
    }

    #[test]
    fn test_format_mobile() {
        assert_eq!(format_mobile("912345678"), "+351 912 345 678");
        assert_eq!(format_mobile("+351912345678"), "+351 912 345 678");
        assert_eq!(format_mobile("00351 912 345 678"), "+351 912 345 678");
        assert_eq!(format_mobile("351-912-345-678"), "+351 912 345 678");
        // Landlines still format
        assert_eq!(format_mobile("212 345 678"), "+351 212 345 678");
    }

    #[test]
    fn test_format_mobile_fallback() {
        assert_eq!(format_mobile("12345"), "12345");
        assert_eq!(format_mobile("+44 20 7946 0958"), "+44 20 7946 0958");
        assert_eq!(format_mobile("91234567x"), "91234567x");
        assert_eq!(format_mobile(""), "");
    }

    #[test]
    fn test_format_mobile_is_idempotent() {
        let once = format_mobile("912345678");
        assert_eq!(format_mobile(&once), once);
    }

    #[test]
    fn test_national_digits_prefers_prefix() {
        assert_eq!(national_digits("351912345678"), Some("912345678"));
        // Nine digits that happen to start with 351
        assert_eq!(national_digits("351234567"), Some("351234567"));
        assert_eq!(national_digits("+351"), None);
    }
}
