//! Benchmark setup error type.

use sociograph_core::{NetworkError, SyntheticError};

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic generation rejected its parameters.
    #[error("synthetic generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// A traversal rejected its endpoints.
    #[error("network query failed: {0}")]
    Network(#[from] NetworkError),
    /// A benchmark size was zero.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was zero.
        context: &'static str,
    },
}
