//! Benchmark setup error type.
//!
//! Aggregates the failures that may arise while preparing benchmark inputs
//! so that setup functions can propagate them with `?`.

use kauwhata_core::GenerationError;
use kauwhata_formats::FormatError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Graph generation failed.
    #[error("graph generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// Rendering the graph failed.
    #[error("serialization failed: {0}")]
    Format(#[from] FormatError),
}
