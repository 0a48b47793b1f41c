//! Error types for heat-cycle calculations.

use thiserror::Error;

/// Result type for heat-cycle operations.
pub type CycleResult<T> = Result<T, CycleError>;

/// Errors raised by validation, parsing, and table loading.
#[derive(Error, Debug)]
pub enum CycleError {
    #[error("hot reservoir temperature ({hot} K) must exceed cold reservoir temperature ({cold} K)")]
    HotNotAboveCold { hot: f64, cold: f64 },

    #[error("distance from the energy source must be greater than zero (got {0} AU)")]
    NonPositiveDistance(f64),

    #[error("effective gamma is zero: no gas in the atmosphere has a tabulated heat-capacity ratio")]
    DegenerateGamma,

    #[error("could not parse {field} from {input:?}")]
    Parse { field: &'static str, input: String },

    #[error("temperature range must contain at least one point")]
    EmptyRange,

    #[error("invalid gas table entry for {key}: {reason}")]
    InvalidTable { key: String, reason: String },

    #[error("gas table JSON error: {0}")]
    Tables(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CycleError {
    /// Whether the error is a rejected input value rather than a fault.
    ///
    /// The interactive driver reports validation errors and ends the session
    /// normally; everything else is fatal.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CycleError::HotNotAboveCold { .. } | CycleError::NonPositiveDistance(_)
        )
    }
}
