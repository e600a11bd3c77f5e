//! Failure taxonomy for cave generation. Every variant is reported to the caller
//! as-is; the core never clamps or retries.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CaveError {
    /// A grid was requested with a zero side, a side too large to address, or
    /// an area that overflows.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Negative smoothing pass count.
    #[error("invalid smoothing iteration count {0}")]
    InvalidIterationCount(i64),

    /// Density must be a finite number.
    #[error("invalid noise density {0}")]
    InvalidDensity(f64),

    /// The random source stopped producing values.
    #[error("entropy source exhausted after {drawn} draws")]
    ExhaustedEntropySource { drawn: usize },

    /// A text grid could not be parsed.
    #[error("invalid grid text at line {line}: {message}")]
    InvalidGridText { line: usize, message: String },
}
