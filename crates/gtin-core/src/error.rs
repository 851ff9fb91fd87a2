/// Errors produced by check digit operations and digit-format guards.
use std::fmt;

/// All failures a check digit operation can report.
///
/// Absent input and malformed input are kept apart so callers can match on
/// the variant instead of parsing the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckDigitError {
    /// The input was absent.
    NullArgument {
        /// What was missing: a type name such as `"GTIN-13"`, or `"sequence"`.
        what: &'static str,
    },
    /// The input was present but violated a digit, length or checksum constraint.
    InvalidFormat(FormatError),
}

/// The ways a present input can be malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The sequence was empty or contained a character outside `'0'..='9'`.
    NotDigits,
    /// The sequence had fewer than two digits, so it cannot carry a check digit.
    TooShort,
    /// The trailing check digit does not match the checksum of the payload.
    IncorrectCheckDigit,
    /// A typed value contained a character outside `'0'..='9'`.
    TypeNotDigits {
        /// Name of the type that rejected the input.
        type_name: &'static str,
        /// The input that was rejected.
        value: String,
    },
    /// A typed value was all digits but had the wrong length.
    TypeWrongLength {
        /// Name of the type that rejected the input.
        type_name: &'static str,
        /// The input that was rejected.
        value: String,
        /// The exact number of digits the type requires.
        length: usize,
    },
}

impl fmt::Display for CheckDigitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullArgument { what } => write!(f, "{what} must not be null"),
            Self::InvalidFormat(inner) => fmt::Display::fmt(inner, f),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDigits => f.write_str("Invalid sequence, must be digits"),
            Self::TooShort => f.write_str("Invalid sequence, must be at least 2 digits"),
            Self::IncorrectCheckDigit => f.write_str("Check digit is not correct"),
            Self::TypeNotDigits { type_name, value } => {
                write!(f, "Invalid {type_name} {value}, must be digits")
            }
            Self::TypeWrongLength {
                type_name,
                value,
                length,
            } => write!(f, "Invalid {type_name} {value}, must be {length} digits long"),
        }
    }
}

impl std::error::Error for CheckDigitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NullArgument { .. } => None,
            Self::InvalidFormat(inner) => Some(inner),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<FormatError> for CheckDigitError {
    fn from(err: FormatError) -> Self {
        Self::InvalidFormat(err)
    }
}
