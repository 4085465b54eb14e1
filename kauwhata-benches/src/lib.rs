//! Benchmark support crate for kauwhata.
//!
//! Provides scenario parameters and setup helpers used by the Criterion
//! benchmarks for graph generation and serialization.

pub mod error;
pub mod params;
