//! String helpers shared by the check digit API and identifier types built on it.
//!
//! Absent input is modelled as `None`. Every helper accepts
//! `impl Into<Option<&str>>`, so plain string slices can be passed directly.
//! Lengths are counted in characters, not bytes.
use std::borrow::Cow;
use std::iter;

use crate::error::{CheckDigitError, FormatError};

/// Returns `true` if `s` is present, non-empty and made only of `'0'..='9'`.
///
/// ```
/// use gtin_core::internals::is_digits;
///
/// assert!(is_digits("0123"));
/// assert!(!is_digits(""));
/// assert!(!is_digits(None));
/// ```
pub fn is_digits<'a>(s: impl Into<Option<&'a str>>) -> bool {
    match s.into() {
        Some(s) => !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Counts the consecutive `'0'` characters at the start of `s`.
///
/// Returns 0 for absent or empty input.
pub fn count_leading_zeroes<'a>(s: impl Into<Option<&'a str>>) -> usize {
    s.into()
        .map_or(0, |s| s.chars().take_while(|&c| c == '0').count())
}

/// Returns `true` if the first `n` characters of `s` are all `'0'`.
///
/// `n == 0` holds for any present string, digits or not. A negative `n`,
/// absent input, or input shorter than `n` is always `false`.
pub fn starts_with_n_zeroes<'a>(s: impl Into<Option<&'a str>>, n: isize) -> bool {
    let Some(s) = s.into() else {
        return false;
    };
    let Ok(n) = usize::try_from(n) else {
        return false;
    };
    s.chars().take(n).take_while(|&c| c == '0').count() == n
}

/// Left-pads `s` with `'0'` up to exactly `n` characters.
///
/// The input is returned borrowed and untouched when it is absent, when `n`
/// is negative, or when it is already at least `n` characters long; it is
/// never truncated. The content is copied verbatim and need not be digits.
///
/// ```
/// use gtin_core::internals::left_pad_with_zeroes;
///
/// assert_eq!(left_pad_with_zeroes("ABC", 6).as_deref(), Some("000ABC"));
/// assert_eq!(left_pad_with_zeroes("ABC", 2).as_deref(), Some("ABC"));
/// ```
pub fn left_pad_with_zeroes<'a>(
    s: impl Into<Option<&'a str>>,
    n: isize,
) -> Option<Cow<'a, str>> {
    let s = s.into()?;
    let len = s.chars().count();
    let target = match usize::try_from(n) {
        Ok(target) if target > len => target,
        Ok(_) | Err(_) => return Some(Cow::Borrowed(s)),
    };

    let mut padded = String::with_capacity(target - len + s.len());
    padded.extend(iter::repeat_n('0', target - len));
    padded.push_str(s);
    Some(Cow::Owned(padded))
}

/// Checks that `s` is a digit sequence of exactly `length` digits.
///
/// This is the shape guard for fixed-length identifiers (GTIN-8/12/13/14,
/// GLN, SSCC). `type_name` is embedded in every error message.
///
/// # Errors
///
/// - [`CheckDigitError::NullArgument`] if `s` is absent.
/// - [`FormatError::TypeNotDigits`] if `s` is empty or contains a non-digit.
/// - [`FormatError::TypeWrongLength`] if `s` is all digits but not `length` long.
pub fn validate_format<'a>(
    type_name: &'static str,
    length: usize,
    s: impl Into<Option<&'a str>>,
) -> Result<&'a str, CheckDigitError> {
    let s = s.into().ok_or(CheckDigitError::NullArgument { what: type_name })?;
    if !is_digits(s) {
        return Err(FormatError::TypeNotDigits {
            type_name,
            value: s.to_owned(),
        }
        .into());
    }
    if s.len() != length {
        return Err(FormatError::TypeWrongLength {
            type_name,
            value: s.to_owned(),
            length,
        }
        .into());
    }
    Ok(s)
}
