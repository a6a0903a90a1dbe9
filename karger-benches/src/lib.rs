//! Benchmark support crate for karger.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for single contractions and full minimum-cut searches.

pub mod error;
pub mod params;
pub mod source;
