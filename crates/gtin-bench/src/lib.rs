//! Digit-sequence generator and benchmark utilities for gtin-core.
//!
//! This crate provides deterministic generation of GS1 digit sequences
//! for benchmarking and cross-checking `gtin-core`.

pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_batch};
