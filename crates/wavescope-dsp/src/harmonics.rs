//! Truncated Fourier series of the periodic waveforms.
//!
//! Each waveform is written as `Σ aₙ·cos(nθ) + bₙ·sin(nθ)` over its non-zero
//! harmonics. The coefficients follow the phase conventions of
//! [`crate::synthesis`]:
//!
//! - sine: `b₁ = A`
//! - square: `bₙ = 4A/(nπ)` for odd `n`
//! - triangle: `aₙ = -8A/(n²π²)` for odd `n`

use std::f64::consts::PI;

use serde::Serialize;
use wavescope_spec::{SignalSpec, Waveform};

use crate::error::DspResult;
use crate::series::TimeSeries;
use crate::synthesis::{self, phase_argument, time_base};

/// One harmonic term of a Fourier series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Harmonic {
    /// Harmonic number (1 = fundamental).
    pub order: usize,
    /// Cosine coefficient.
    pub cos: f64,
    /// Sine coefficient.
    pub sin: f64,
}

impl Harmonic {
    /// Evaluates this term at a phase.
    #[inline]
    pub fn at(&self, phase: f64) -> f64 {
        let nt = self.order as f64 * phase;
        self.cos * nt.cos() + self.sin * nt.sin()
    }

    /// Amplitude of the term, `sqrt(a² + b²)`.
    pub fn amplitude(&self) -> f64 {
        self.cos.hypot(self.sin)
    }
}

/// Returns the first `terms` non-zero harmonics of a waveform.
///
/// Sine has a single harmonic, so it never returns more than one term.
pub fn harmonic_series(waveform: Waveform, amplitude: f64, terms: usize) -> Vec<Harmonic> {
    match waveform {
        Waveform::Sine => (terms > 0)
            .then(|| Harmonic {
                order: 1,
                cos: 0.0,
                sin: amplitude,
            })
            .into_iter()
            .collect(),
        Waveform::Square => odd_orders(terms)
            .map(|n| Harmonic {
                order: n,
                cos: 0.0,
                sin: 4.0 * amplitude / (n as f64 * PI),
            })
            .collect(),
        Waveform::Triangle => odd_orders(terms)
            .map(|n| Harmonic {
                order: n,
                cos: -8.0 * amplitude / ((n * n) as f64 * PI * PI),
                sin: 0.0,
            })
            .collect(),
    }
}

fn odd_orders(terms: usize) -> impl Iterator<Item = usize> {
    (0..terms).map(|i| 2 * i + 1)
}

/// Evaluates the partial sum of `terms` harmonics on a spec's time base.
pub fn partial_sum(spec: &SignalSpec, terms: usize) -> DspResult<TimeSeries> {
    spec.validate()?;

    let harmonics = harmonic_series(spec.waveform, spec.amplitude, terms);
    let n = spec.sample_count;
    let times = time_base(spec.sampling_mode, n);
    let values = times
        .iter()
        .map(|&t| {
            let phase = phase_argument(spec.sampling_mode, spec.frequency, n, t);
            harmonics.iter().map(|h| h.at(phase)).sum()
        })
        .collect();

    Ok(TimeSeries::from_parts(times, values))
}

/// An ideal waveform next to its truncated series.
#[derive(Debug, Clone, Serialize)]
pub struct Approximation {
    /// Number of harmonics requested.
    pub terms: usize,
    /// Harmonics used in the partial sum.
    pub harmonics: Vec<Harmonic>,
    /// Exact synthesized waveform.
    pub ideal: TimeSeries,
    /// Partial Fourier sum.
    pub approximation: TimeSeries,
    /// Largest pointwise absolute error.
    pub max_error: f64,
    /// Root-mean-square error.
    pub rms_error: f64,
}

/// Compares a waveform with its `terms`-harmonic Fourier approximation.
///
/// Square waves keep a max error near the jump no matter how many terms are
/// used (Gibbs overshoot); the RMS error still falls as terms grow.
pub fn approximate(spec: &SignalSpec, terms: usize) -> DspResult<Approximation> {
    let ideal = synthesis::synthesize(spec)?;
    let approximation = partial_sum(spec, terms)?;

    let mut max_error = 0.0_f64;
    let mut sum_sq = 0.0;
    for (a, b) in ideal.values().iter().zip(approximation.values()) {
        let err = (a - b).abs();
        max_error = max_error.max(err);
        sum_sq += err * err;
    }
    let rms_error = (sum_sq / ideal.len() as f64).sqrt();

    log::debug!(
        "{} approximation with {} terms: max error {:.6}, rms error {:.6}",
        spec.waveform,
        terms,
        max_error,
        rms_error
    );

    Ok(Approximation {
        terms,
        harmonics: harmonic_series(spec.waveform, spec.amplitude, terms),
        ideal,
        approximation,
        max_error,
        rms_error,
    })
}
