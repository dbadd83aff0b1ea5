//! Periodic waveform synthesis (sine, square, triangle).
//!
//! All waveforms have period 2π and are evaluated on the phase wrapped into
//! `[0, 2π)`, so values at discontinuities are deterministic:
//!
//! - square is `+1` on `[0, π)` and `-1` on `[π, 2π)`, never 0
//! - triangle starts at `-1`, peaks at `+1` at `π`, and falls back to `-1`

use std::f64::consts::PI;

use wavescope_spec::{SamplingMode, SignalSpec, Waveform};

use crate::error::DspResult;
use crate::series::TimeSeries;

/// Two times PI.
pub const TWO_PI: f64 = 2.0 * PI;

/// A unit-amplitude periodic shape with period 2π.
pub trait Periodic {
    /// Evaluates the shape at a phase in radians (any real value).
    fn evaluate(&self, phase: f64) -> f64;
}

impl Periodic for Waveform {
    fn evaluate(&self, phase: f64) -> f64 {
        match self {
            Waveform::Sine => sine(phase),
            Waveform::Square => square(phase),
            Waveform::Triangle => triangle(phase),
        }
    }
}

/// Wraps a phase into `[0, 2π)`.
#[inline]
pub fn wrap_phase(phase: f64) -> f64 {
    let wrapped = phase.rem_euclid(TWO_PI);
    // rem_euclid can round up to exactly 2π for tiny negative inputs.
    if wrapped >= TWO_PI {
        0.0
    } else {
        wrapped
    }
}

/// Sine wave.
#[inline]
pub fn sine(phase: f64) -> f64 {
    phase.sin()
}

/// Square wave with 50% duty cycle.
#[inline]
pub fn square(phase: f64) -> f64 {
    if wrap_phase(phase) < PI {
        1.0
    } else {
        -1.0
    }
}

/// Symmetric triangle wave.
#[inline]
pub fn triangle(phase: f64) -> f64 {
    let phi = wrap_phase(phase);
    if phi <= PI {
        -1.0 + 2.0 * phi / PI
    } else {
        3.0 - 2.0 * phi / PI
    }
}

/// Builds the sample positions for a sampling mode.
///
/// Continuous positions are `n` evenly spaced points on the closed interval
/// `[0, 1]` (a single point sits at 0). Discrete positions are the indices
/// `0..n`.
pub fn time_base(mode: SamplingMode, n: usize) -> Vec<f64> {
    match mode {
        SamplingMode::Continuous => {
            if n == 1 {
                return vec![0.0];
            }
            let intervals = n.saturating_sub(1) as f64;
            (0..n).map(|i| i as f64 / intervals).collect()
        }
        SamplingMode::Discrete => (0..n).map(|i| i as f64).collect(),
    }
}

/// Phase argument in radians for a sample position.
///
/// Discrete frequencies are measured in cycles per block of `n` samples.
/// The position is scaled into `[0, 1)` first, so the result stays finite
/// whenever `2π·frequency` is.
#[inline]
pub fn phase_argument(mode: SamplingMode, frequency: f64, n: usize, position: f64) -> f64 {
    match mode {
        SamplingMode::Continuous => TWO_PI * frequency * position,
        SamplingMode::Discrete => TWO_PI * frequency * (position / n as f64),
    }
}

/// Synthesizes the time-domain samples described by a spec.
///
/// # Errors
/// Returns [`crate::DspError::InvalidSpec`] when the frequency or amplitude is
/// not a positive finite number, or the sample count is zero.
///
/// # Example
/// ```
/// use wavescope_dsp::synthesize;
/// use wavescope_spec::{SignalSpec, Waveform};
///
/// let series = synthesize(&SignalSpec::new(Waveform::Sine, 1.0, 8)).unwrap();
/// assert_eq!(series.len(), 8);
/// ```
pub fn synthesize(spec: &SignalSpec) -> DspResult<TimeSeries> {
    spec.validate()?;

    let n = spec.sample_count;
    let times = time_base(spec.sampling_mode, n);
    let values = times
        .iter()
        .map(|&t| {
            let phase = phase_argument(spec.sampling_mode, spec.frequency, n, t);
            spec.amplitude * spec.waveform.evaluate(phase)
        })
        .collect();

    log::debug!(
        "synthesized {} {} samples ({} Hz, amplitude {}, {})",
        n,
        spec.waveform,
        spec.frequency,
        spec.amplitude,
        spec.sampling_mode
    );

    Ok(TimeSeries::from_parts(times, values))
}
