//! Error types for the DSP core.

use thiserror::Error;
use wavescope_spec::ValidationError;

/// Result type for DSP operations.
pub type DspResult<T> = Result<T, DspError>;

/// Errors that can occur during synthesis or analysis.
#[derive(Debug, Error)]
pub enum DspError {
    /// The signal spec violates a hard constraint.
    #[error("invalid signal spec: {0}")]
    InvalidSpec(#[from] ValidationError),

    /// Two sequences that must share a length do not.
    #[error("length mismatch: expected {expected} values, found {found}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Found length.
        found: usize,
    },
}

impl DspError {
    /// Creates a length mismatch error.
    pub fn length_mismatch(expected: usize, found: usize) -> Self {
        Self::LengthMismatch { expected, found }
    }

    /// Returns a stable code for reporting.
    ///
    /// Invalid specs pass through the validation code (e.g. "E001").
    pub fn code(&self) -> &'static str {
        match self {
            DspError::InvalidSpec(err) => err.code.code(),
            DspError::LengthMismatch { .. } => "DSP_001",
        }
    }
}
