//! Digit-sequence generators with valid and invalid check digits.
//!
//! The check digit here is computed independently of `gtin-core`, left to
//! right, so the generator doubles as an oracle in tests.

use rand::Rng;
use rand::rngs::StdRng;

/// Generates `len` random ASCII digits.
pub fn gen_digits(rng: &mut StdRng, len: usize) -> String {
    (0..len).map(|_| rng.gen_range(b'0'..=b'9') as char).collect()
}

/// Generates a sequence of `len` digits whose last digit is a correct GS1
/// Mod-10 check digit. `len` of 0 or 1 yields just the check digit of an
/// empty payload, `"0"`.
pub fn gen_with_check_digit(rng: &mut StdRng, len: usize) -> String {
    let body: Vec<u8> = (0..len.saturating_sub(1))
        .map(|_| rng.gen_range(0u8..10))
        .collect();

    // Position counted from the right of the payload: odd positions weigh 3.
    let n = body.len();
    let mut sum: u32 = 0;
    for (i, &digit) in body.iter().enumerate() {
        let weight: u32 = if (n - i) % 2 == 1 { 3 } else { 1 };
        sum += u32::from(digit) * weight;
    }
    let check = (10 - (sum % 10)) % 10;

    body.iter()
        .map(|d| (b'0' + d) as char)
        .chain(std::iter::once((b'0' + check as u8) as char))
        .collect()
}

/// Returns `s` with its final digit replaced by a different digit.
///
/// Input that is empty or does not end in an ASCII digit is returned as is.
pub fn corrupt_check_digit(s: &str) -> String {
    let mut bytes = s.as_bytes().to_vec();
    if let Some(last) = bytes.last_mut().filter(|b| b.is_ascii_digit()) {
        *last = b'0' + (*last - b'0' + 1) % 10;
    }
    String::from_utf8(bytes).unwrap_or_else(|_| s.to_owned())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn gen_digits_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(7);
        let s = gen_digits(&mut rng, 25);
        assert_eq!(s.len(), 25);
        assert!(s.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn gen_with_check_digit_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(gen_with_check_digit(&mut rng, 13).len(), 13);
        assert_eq!(gen_with_check_digit(&mut rng, 0), "0");
    }

    #[test]
    fn corrupt_check_digit_changes_only_last_digit() {
        assert_eq!(corrupt_check_digit("4006381333931"), "4006381333932");
        assert_eq!(corrupt_check_digit("19"), "10");
    }

    #[test]
    fn corrupt_check_digit_leaves_non_digits_alone() {
        assert_eq!(corrupt_check_digit(""), "");
        assert_eq!(corrupt_check_digit("12A"), "12A");
    }
}
