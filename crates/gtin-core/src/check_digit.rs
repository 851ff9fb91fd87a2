//! GS1 Mod-10 check digits for GTIN, GLN, SSCC and EAN/UPC digit sequences.
//!
//! Every public function guards its input first and only then hands the raw
//! digit bytes to [`checksum`], so the arithmetic never sees a non-digit.
//!
//! # Algorithm
//!
//! Positions are numbered from the right, starting at 1 for the last digit of
//! the payload. Odd positions carry weight 3 and even positions weight 1. The
//! check digit `d` satisfies `(weighted_sum + d) mod 10 == 0`, i.e.
//! `d == (10 - (weighted_sum mod 10)) mod 10`. Counting from the right makes
//! the same rule work for every length: EAN-8, UPC-A, EAN-13, GTIN-14,
//! SSCC-18 and anything else.

use crate::error::{CheckDigitError, FormatError};
use crate::internals::is_digits;

/// Name reported by [`CheckDigitError::NullArgument`] for absent sequences.
const SEQUENCE: &str = "sequence";

/// Calculates the check digit for a payload that does not yet carry one.
///
/// # Errors
///
/// - [`CheckDigitError::NullArgument`] if `s` is absent.
/// - [`FormatError::NotDigits`] if `s` is empty or contains a non-digit.
///
/// # Examples
///
/// ```
/// use gtin_core::check_digit::calculate;
///
/// assert_eq!(calculate("400638133393"), Ok('1'));
/// assert!(calculate("40063813339A").is_err());
/// ```
pub fn calculate<'a>(s: impl Into<Option<&'a str>>) -> Result<char, CheckDigitError> {
    let s = require_digits(s)?;
    Ok(checksum(s.as_bytes()))
}

/// Calculates the check digit for `s` and returns `s` with it appended.
///
/// # Errors
///
/// Fails under the same conditions as [`calculate`].
///
/// # Examples
///
/// ```
/// use gtin_core::check_digit::calculate_and_append;
///
/// assert_eq!(calculate_and_append("400638133393").as_deref(), Ok("4006381333931"));
/// ```
pub fn calculate_and_append<'a>(
    s: impl Into<Option<&'a str>>,
) -> Result<String, CheckDigitError> {
    let s = require_digits(s)?;
    let mut out = String::with_capacity(s.len() + 1);
    out.push_str(s);
    out.push(checksum(s.as_bytes()));
    Ok(out)
}

/// Recomputes the check digit of a sequence whose last digit is assumed to
/// already be a check digit.
///
/// The existing last digit is ignored; the result is what it should be.
///
/// # Errors
///
/// - [`CheckDigitError::NullArgument`] if `s` is absent.
/// - [`FormatError::NotDigits`] if `s` is empty or contains a non-digit.
/// - [`FormatError::TooShort`] if `s` has fewer than two digits.
pub fn recalculate<'a>(s: impl Into<Option<&'a str>>) -> Result<char, CheckDigitError> {
    let payload = strip_check_digit(s)?;
    Ok(checksum(payload.as_bytes()))
}

/// Replaces the last digit of `s` with the correct check digit.
///
/// # Errors
///
/// Fails under the same conditions as [`recalculate`].
///
/// # Examples
///
/// ```
/// use gtin_core::check_digit::recalculate_and_apply;
///
/// assert_eq!(recalculate_and_apply("4006381333930").as_deref(), Ok("4006381333931"));
/// ```
pub fn recalculate_and_apply<'a>(
    s: impl Into<Option<&'a str>>,
) -> Result<String, CheckDigitError> {
    let payload = strip_check_digit(s)?;
    let mut out = String::with_capacity(payload.len() + 1);
    out.push_str(payload);
    out.push(checksum(payload.as_bytes()));
    Ok(out)
}

/// Returns `true` if the last digit of `s` is the correct check digit for the
/// digits before it.
///
/// Never fails: absent input, non-digit input and sequences shorter than two
/// digits are all reported as `false`.
///
/// ```
/// use gtin_core::check_digit::is_valid;
///
/// assert!(is_valid("4006381333931"));
/// assert!(!is_valid("4006381333932"));
/// assert!(!is_valid(None));
/// ```
pub fn is_valid<'a>(s: impl Into<Option<&'a str>>) -> bool {
    let Some(s) = s.into() else {
        return false;
    };
    if s.len() < 2 || !is_digits(s) {
        return false;
    }
    s.as_bytes()
        .split_last()
        .is_some_and(|(&check, payload)| checksum(payload) == char::from(check))
}

/// Returns `s` unchanged if its check digit is correct.
///
/// # Errors
///
/// Returns [`FormatError::IncorrectCheckDigit`] whenever [`is_valid`] would
/// return `false`, including for absent and malformed input.
pub fn validate<'a>(s: impl Into<Option<&'a str>>) -> Result<&'a str, CheckDigitError> {
    s.into()
        .filter(|s| is_valid(*s))
        .ok_or(CheckDigitError::InvalidFormat(FormatError::IncorrectCheckDigit))
}

/// Computes the check digit over `digits`, which must all be ASCII `'0'..='9'`.
///
/// The running sum is kept modulo 10 so any length is safe.
pub(crate) fn checksum(digits: &[u8]) -> char {
    let sum = digits.iter().rev().enumerate().fold(0u8, |sum, (i, &byte)| {
        let digit = byte - b'0';
        let weight = if i % 2 == 0 { 3 } else { 1 };
        (sum + digit * weight) % 10
    });
    char::from(b'0' + (10 - sum) % 10)
}

fn require_digits<'a>(s: impl Into<Option<&'a str>>) -> Result<&'a str, CheckDigitError> {
    let s = s.into().ok_or(CheckDigitError::NullArgument { what: SEQUENCE })?;
    if !is_digits(s) {
        return Err(FormatError::NotDigits.into());
    }
    Ok(s)
}

/// Guards `s` and returns it without its trailing check digit.
fn strip_check_digit<'a>(
    s: impl Into<Option<&'a str>>,
) -> Result<&'a str, CheckDigitError> {
    let s = require_digits(s)?;
    if s.len() < 2 {
        return Err(FormatError::TooShort.into());
    }
    // All bytes are ASCII digits, so every index is a char boundary.
    Ok(&s[..s.len() - 1])
}
