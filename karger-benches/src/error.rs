//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of panicking
//! inside Criterion closures.

use karger_core::{GraphError, MinCutError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Building the synthetic graph failed.
    #[error("synthetic graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// Configuring the minimum-cut driver failed.
    #[error("minimum-cut configuration failed: {0}")]
    MinCut(#[from] MinCutError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// Parameter that was unexpectedly zero.
        context: &'static str,
    },
}
