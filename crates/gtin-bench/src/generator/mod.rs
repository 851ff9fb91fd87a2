//! Batch generator for check-digit benchmarks.
//!
//! Produces batches of valid digit sequences with fixed length, seeded so
//! that every run sees the same input.

pub mod digits;

use rand::SeedableRng;
use rand::rngs::StdRng;

pub use digits::{corrupt_check_digit, gen_digits, gen_with_check_digit};

/// Configuration for the batch generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Length of every generated sequence, check digit included.
    pub length: usize,
    /// Number of sequences in the batch.
    pub count: usize,
}

/// Predefined identifier lengths for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// EAN-8 / GTIN-8
    Ean8,
    /// EAN-13, GTIN-13, GLN, ISBN-13
    Ean13,
    /// SSCC
    Sscc18,
    /// Arbitrary 64-digit sequences, beyond any GS1 key.
    Long,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let length = match self {
            SizeTier::Ean8 => 8,
            SizeTier::Ean13 => 13,
            SizeTier::Sscc18 => 18,
            SizeTier::Long => 64,
        };
        GeneratorConfig {
            seed,
            length,
            count: 1_000,
        }
    }
}

/// Generates `config.count` valid sequences of `config.length` digits.
///
/// All randomness is deterministic, seeded from `config.seed`. A length below
/// 2 is raised to 2 so every sequence has a payload and a check digit.
pub fn generate_batch(config: &GeneratorConfig) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let length = config.length.max(2);
    (0..config.count)
        .map(|_| gen_with_check_digit(&mut rng, length))
        .collect()
}
