//! Wavescope Signal Spec Library
//!
//! This crate provides the types and validation rules for describing the
//! synthetic signals that Wavescope generates and analyzes.
//!
//! # Overview
//!
//! A [`SignalSpec`] names a waveform shape, its frequency and amplitude, how
//! many samples to take, and whether the samples lie on the continuous
//! `[0, 1]` time base or on integer indices. A [`ScopeSpec`] bundles one or two
//! signal specs into a two-channel request.
//!
//! # Example
//!
//! ```
//! use wavescope_spec::{ScopeSpec, SignalSpec, Waveform};
//! use wavescope_spec::validation::validate_scope;
//!
//! let scope = ScopeSpec::dual(
//!     SignalSpec::new(Waveform::Sine, 5.0, 256),
//!     SignalSpec::new(Waveform::Square, 3.0, 128).with_amplitude(0.5),
//! );
//!
//! let result = validate_scope(&scope);
//! assert!(result.is_ok());
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`signal`]: Waveform, sampling mode, and signal/scope spec types
//! - [`validation`]: Spec validation functions

pub mod error;
pub mod signal;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{
    ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use signal::{SamplingMode, ScopeSpec, SignalSpec, Waveform};
pub use validation::{max_phase, nyquist_frequency, validate_scope, validate_signal};
