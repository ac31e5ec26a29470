//! Portuguese tax identifier (NIF) validation and formatting.
//!
//! A NIF is nine decimal digits: eight significand digits followed by a
//! modulo-11 check digit.
//!
//! The free functions never fail: [`is_valid_nif`] answers with a `bool` and
//! [`format_nif`] hands back its input untouched when it cannot group it.
//! [`Nif::parse`] reports which rule was broken.

mod category;
mod identifier;

pub use category::*;
pub use identifier::*;

use thiserror::Error;
use tracing::debug;

use crate::grouping::{group_in_threes, strip_whitespace};

/// Number of digits in a NIF, check digit included.
pub const NIF_LENGTH: usize = 9;

/// The specific rule an input broke.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatIssue {
    #[error("expected 9 digits, found {0} characters")]
    WrongLength(usize),

    #[error("unexpected character '{0}'")]
    NonDigit(char),

    #[error("check digit is {found}, expected {expected}")]
    CheckDigit { expected: u8, found: u8 },
}

/// NIF errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NifError {
    #[error("Invalid NIF format: {0}")]
    InvalidFormat(#[from] FormatIssue),
}

pub type NifResult<T> = Result<T, NifError>;

/// Compute the check digit for the eight significand digits.
///
/// Digits are weighted 9 down to 2 and summed. With `m = sum % 11` the check
/// digit is 0 when `m < 2`, otherwise `11 - m`.
pub fn nif_check_digit(significand: &[u8; 8]) -> u8 {
    let sum: u32 = significand
        .iter()
        .zip((2..=9u32).rev())
        .map(|(&digit, weight)| u32::from(digit) * weight)
        .sum();

    match sum % 11 {
        m if m < 2 => 0,
        m => (11 - m) as u8,
    }
}

/// Check whether `input` is a valid NIF. Whitespace anywhere is ignored.
pub fn is_valid_nif(input: &str) -> bool {
    parse_digits(input).is_ok()
}

/// Group a NIF as `XXX XXX XXX` for display.
///
/// Only the length is checked. Anything that is not nine characters once
/// whitespace is removed comes back unchanged.
pub fn format_nif(input: &str) -> String {
    let compact = strip_whitespace(input);
    let length = compact.chars().count();
    if length != NIF_LENGTH {
        debug!(length, "NIF has the wrong length, leaving it unformatted");
        return input.to_string();
    }
    group_in_threes(&compact)
}

/// Strip whitespace, then check length, digits and check digit in that order.
pub(crate) fn parse_digits(input: &str) -> NifResult<[u8; NIF_LENGTH]> {
    let compact = strip_whitespace(input);
    let length = compact.chars().count();
    if length != NIF_LENGTH {
        return Err(FormatIssue::WrongLength(length).into());
    }

    let mut digits = [0u8; NIF_LENGTH];
    for (slot, c) in digits.iter_mut().zip(compact.chars()) {
        // to_digit(10) only accepts ASCII '0'..='9'
        *slot = c.to_digit(10).ok_or(FormatIssue::NonDigit(c))? as u8;
    }

    let mut significand = [0u8; 8];
    significand.copy_from_slice(&digits[..8]);
    let expected = nif_check_digit(&significand);
    let found = digits[8];
    if expected != found {
        return Err(FormatIssue::CheckDigit { expected, found }.into());
    }

    Ok(digits)
}
