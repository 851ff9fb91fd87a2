/// Validated digit-sequence newtype.
///
/// [`DigitSequence`] enforces the digit-only shape at construction time via
/// [`TryFrom<&str>`] or [`DigitSequence::with_length`]. Once constructed, the
/// inner value is immutable (no `DerefMut`). The serde `Deserialize` impl
/// re-runs validation so invalid data cannot enter the type from untrusted
/// JSON.
use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::check_digit::{checksum, is_valid};
use crate::error::{CheckDigitError, FormatError};
use crate::internals::{is_digits, validate_format};

/// A non-empty string of ASCII digits `'0'..='9'`.
///
/// Because the shape is guaranteed, check digit operations on a
/// `DigitSequence` cannot fail.
///
/// ```
/// use gtin_core::DigitSequence;
///
/// # fn main() -> Result<(), gtin_core::CheckDigitError> {
/// let payload = DigitSequence::try_from("400638133393")?;
/// assert_eq!(payload.check_digit(), '1');
/// assert_eq!(&*payload.with_check_digit(), "4006381333931");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitSequence(String);

impl TryFrom<&str> for DigitSequence {
    type Error = CheckDigitError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if is_digits(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(FormatError::NotDigits.into())
        }
    }
}

impl DigitSequence {
    /// Constructs a sequence that must be exactly `length` digits long.
    ///
    /// Used for fixed-length identifiers; `type_name` (for example `"GTIN-13"`)
    /// appears in the error message.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`validate_format`]: `NullArgument` for absent
    /// input, `TypeNotDigits` or `TypeWrongLength` for malformed input.
    pub fn with_length<'a>(
        type_name: &'static str,
        length: usize,
        s: impl Into<Option<&'a str>>,
    ) -> Result<Self, CheckDigitError> {
        validate_format(type_name, length, s).map(|s| Self(s.to_owned()))
    }

    /// Returns the check digit computed over the whole sequence.
    pub fn check_digit(&self) -> char {
        checksum(self.0.as_bytes())
    }

    /// Returns a new sequence with [`Self::check_digit`] appended.
    pub fn with_check_digit(&self) -> Self {
        let mut out = String::with_capacity(self.0.len() + 1);
        out.push_str(&self.0);
        out.push(self.check_digit());
        Self(out)
    }

    /// Returns `true` if the last digit is the correct check digit for the
    /// digits before it. Single-digit sequences are never valid.
    pub fn has_valid_check_digit(&self) -> bool {
        is_valid(self.0.as_str())
    }

    /// Consumes the sequence and returns the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for DigitSequence {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DigitSequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for DigitSequence {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DigitSequence {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::try_from(s.as_str()).map_err(de::Error::custom)
    }
}
