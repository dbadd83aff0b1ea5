//! Wavescope DSP Core
//!
//! This crate implements the signal pipeline behind Wavescope: periodic
//! waveform synthesis, length equalization, and discrete Fourier analysis.
//!
//! # Overview
//!
//! - **Synthesis** turns a [`SignalSpec`](wavescope_spec::SignalSpec) into a
//!   [`TimeSeries`] on either the continuous `[0, 1]` time base or on integer
//!   sample indices.
//! - **Equalization** zero-pads the shorter of two series so both channels
//!   share a length.
//! - **Analysis** runs an FFT and reports bin frequencies, magnitude, real and
//!   imaginary parts, and phase.
//!
//! Everything here is a pure function of its inputs. Results are plain data
//! that can be cached and re-read by an animation loop without recomputation.
//!
//! # Determinism
//!
//! Synthesizing the same spec twice yields bit-identical samples. The
//! [`TimeSeries::sample_hash`] digest makes that easy to check.
//!
//! # Example
//!
//! ```
//! use wavescope_dsp::{analyze, synthesize};
//! use wavescope_spec::{SignalSpec, Waveform};
//!
//! let series = synthesize(&SignalSpec::new(Waveform::Sine, 1.0, 8))?;
//! let spectrum = analyze(&series);
//! assert_eq!(spectrum.peak_bin(), Some(1));
//! # Ok::<(), wavescope_dsp::DspError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`synthesis`] - Waveform shapes, time bases, and [`synthesize()`]
//! - [`series`] - [`TimeSeries`] and [`equalize()`]
//! - [`spectrum`] - FFT analysis and inverse reconstruction
//! - [`scope`] - Two-channel orchestration via [`run_scope()`]
//! - [`animation`] - Circular shift and oscilloscope frames
//! - [`harmonics`] - Truncated Fourier series approximations

pub mod animation;
pub mod error;
pub mod harmonics;
pub mod scope;
pub mod series;
pub mod spectrum;
pub mod synthesis;

// Re-export main types at crate root
pub use animation::{circular_shift, display_range, render_frame};
pub use error::{DspError, DspResult};
pub use harmonics::{approximate, harmonic_series, partial_sum, Approximation, Harmonic};
pub use scope::{run_scope, ChannelOutput, ScopeFrame, ScopeOutput};
pub use series::{equalize, TimeSeries};
pub use spectrum::{
    analyze, analyze_with_rate, dft_direct, fft, fft_frequencies, reconstruct, SpectrumResult,
};
pub use synthesis::{synthesize, Periodic};
