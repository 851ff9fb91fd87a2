#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod check_digit;
pub mod digit_sequence;
pub mod error;
pub mod internals;

pub use check_digit::{
    calculate, calculate_and_append, is_valid, recalculate, recalculate_and_apply, validate,
};
pub use digit_sequence::DigitSequence;
pub use error::{CheckDigitError, FormatError};
pub use internals::validate_format;

/// Returns the current version of the gtin-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
