//! Discrete Fourier analysis of time series.
//!
//! The forward transform uses `rustfft` and is unnormalized, so for a series
//! `x` of length `N` the result satisfies `Σ|X[k]|² = N·Σx[n]²`.

use std::f64::consts::PI;

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;
use serde::Serialize;

use crate::error::{DspError, DspResult};
use crate::series::TimeSeries;

/// Frequency-domain decomposition of a time series.
///
/// All five sequences share the transform length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpectrumResult {
    /// Bin frequencies in standard FFT order.
    pub frequencies: Vec<f64>,
    /// Bin magnitudes.
    pub magnitude: Vec<f64>,
    /// Real parts.
    pub real: Vec<f64>,
    /// Imaginary parts.
    pub imag: Vec<f64>,
    /// Principal phase angles in (-π, π].
    pub phase: Vec<f64>,
}

impl SpectrumResult {
    /// Builds a result from complex bins.
    pub fn from_bins(bins: &[Complex<f64>], sample_rate: f64) -> Self {
        Self {
            frequencies: fft_frequencies(bins.len(), sample_rate),
            magnitude: bins.iter().map(|c| c.re.hypot(c.im)).collect(),
            real: bins.iter().map(|c| c.re).collect(),
            imag: bins.iter().map(|c| c.im).collect(),
            phase: bins.iter().map(|c| principal_phase(c.re, c.im)).collect(),
        }
    }

    /// Transform length.
    pub fn len(&self) -> usize {
        self.magnitude.len()
    }

    /// Returns true for the transform of an empty series.
    pub fn is_empty(&self) -> bool {
        self.magnitude.is_empty()
    }

    /// Complex bins reassembled from the real and imaginary parts.
    pub fn bins(&self) -> Vec<Complex<f64>> {
        self.real
            .iter()
            .zip(&self.imag)
            .map(|(&re, &im)| Complex::new(re, im))
            .collect()
    }

    /// The non-negative frequency half (bins `0..N/2`) used for display.
    pub fn half(&self) -> SpectrumResult {
        let n = self.len() / 2;
        SpectrumResult {
            frequencies: self.frequencies[..n].to_vec(),
            magnitude: self.magnitude[..n].to_vec(),
            real: self.real[..n].to_vec(),
            imag: self.imag[..n].to_vec(),
            phase: self.phase[..n].to_vec(),
        }
    }

    /// Index of the strongest bin in the non-negative half.
    ///
    /// Ties resolve to the lowest bin. Returns `None` for an empty spectrum.
    pub fn peak_bin(&self) -> Option<usize> {
        let end = (self.len() / 2).max(1).min(self.len());
        let mut best: Option<(usize, f64)> = None;
        for (k, &m) in self.magnitude[..end].iter().enumerate() {
            match best {
                Some((_, bm)) if m <= bm => {}
                _ => best = Some((k, m)),
            }
        }
        best.map(|(k, _)| k)
    }

    /// Frequency of the strongest bin in the non-negative half.
    pub fn peak_frequency(&self) -> Option<f64> {
        self.peak_bin().map(|k| self.frequencies[k])
    }

    /// Sum of squared magnitudes.
    pub fn energy(&self) -> f64 {
        self.magnitude.iter().map(|m| m * m).sum()
    }
}

/// Principal angle of `re + i·im` in (-π, π]; zero for the zero bin.
fn principal_phase(re: f64, im: f64) -> f64 {
    if re == 0.0 && im == 0.0 {
        return 0.0;
    }
    let angle = im.atan2(re);
    if angle <= -PI {
        PI
    } else if angle == 0.0 {
        // Collapse -0.0.
        0.0
    } else {
        angle
    }
}

/// Bin center frequencies for an `n`-point transform.
///
/// Bins `0..=(n-1)/2` are `k·fs/n`; the remaining bins are the negative
/// frequencies `(k-n)·fs/n`, so for even `n` the Nyquist bin reads `-fs/2`.
pub fn fft_frequencies(n: usize, sample_rate: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let spacing = sample_rate / n as f64;
    let positive = (n - 1) / 2 + 1;
    (0..n)
        .map(|k| {
            if k < positive {
                k as f64 * spacing
            } else {
                (k as f64 - n as f64) * spacing
            }
        })
        .collect()
}

/// Forward FFT of real samples.
pub fn fft(values: &[f64]) -> Vec<Complex<f64>> {
    let mut buffer: Vec<Complex<f64>> = values.iter().map(|&v| Complex::new(v, 0.0)).collect();
    if buffer.is_empty() {
        return buffer;
    }
    let mut planner = FftPlanner::new();
    let plan = planner.plan_fft_forward(buffer.len());
    plan.process(&mut buffer);
    buffer
}

/// Direct O(N²) DFT of real samples.
///
/// Non-optimized reference for [`fft`]; both compute the same linear operator
/// and agree to floating-point rounding.
pub fn dft_direct(values: &[f64]) -> Vec<Complex<f64>> {
    let n = values.len();
    (0..n)
        .map(|k| {
            values
                .iter()
                .enumerate()
                .fold(Complex::new(0.0, 0.0), |acc, (t, &x)| {
                    // Reduce k·t mod n first to keep the angle small.
                    let angle = -2.0 * PI * ((k * t) % n) as f64 / n as f64;
                    acc + Complex::new(x * angle.cos(), x * angle.sin())
                })
        })
        .collect()
}

/// Analyzes a series with `sample_rate = N`.
///
/// This is the scope convention: the whole series spans one unit of time, so
/// bin `k` reads `k` cycles per series.
pub fn analyze(series: &TimeSeries) -> SpectrumResult {
    analyze_with_rate(series, series.len() as f64)
}

/// Analyzes a series with an explicit sample rate for the frequency axis.
pub fn analyze_with_rate(series: &TimeSeries, sample_rate: f64) -> SpectrumResult {
    log::debug!(
        "analyzing {} samples at sample rate {}",
        series.len(),
        sample_rate
    );
    SpectrumResult::from_bins(&fft(series.values()), sample_rate)
}

/// Inverse transform of a spectrum back to real samples.
///
/// Imaginary residue from rounding is discarded.
pub fn reconstruct(spectrum: &SpectrumResult) -> Vec<f64> {
    let mut buffer = spectrum.bins();
    let n = buffer.len();
    if n == 0 {
        return Vec::new();
    }
    let mut planner = FftPlanner::new();
    let plan = planner.plan_fft_inverse(n);
    plan.process(&mut buffer);
    let scale = 1.0 / n as f64;
    buffer.iter().map(|c| c.re * scale).collect()
}

/// Reconstructs a spectrum onto a time base.
pub fn reconstruct_series(spectrum: &SpectrumResult, times: &[f64]) -> DspResult<TimeSeries> {
    if times.len() != spectrum.len() {
        return Err(DspError::length_mismatch(spectrum.len(), times.len()));
    }
    TimeSeries::new(times.to_vec(), reconstruct(spectrum))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn test_fft_frequencies_even() {
        assert_eq!(
            fft_frequencies(8, 8.0),
            vec![0.0, 1.0, 2.0, 3.0, -4.0, -3.0, -2.0, -1.0]
        );
    }

    #[test]
    fn test_fft_frequencies_odd() {
        assert_eq!(
            fft_frequencies(5, 10.0),
            vec![0.0, 2.0, 4.0, -4.0, -2.0]
        );
    }

    #[test]
    fn test_fft_frequencies_small() {
        assert!(fft_frequencies(0, 1.0).is_empty());
        assert_eq!(fft_frequencies(1, 1.0), vec![0.0]);
        assert_eq!(fft_frequencies(2, 2.0), vec![0.0, -1.0]);
    }

    #[test]
    fn test_fft_matches_direct() {
        let values = [0.5, -1.25, 3.0, 0.0, 2.5, -0.75, 1.0];
        let fast = fft(&values);
        let slow = dft_direct(&values);
        for (a, b) in fast.iter().zip(&slow) {
            assert!(close(a.re, b.re, 1e-9));
            assert!(close(a.im, b.im, 1e-9));
        }
    }

    #[test]
    fn test_single_sample_spectrum() {
        let spectrum = analyze(&TimeSeries::from_values(vec![-2.5]));
        assert_eq!(spectrum.len(), 1);
        assert_eq!(spectrum.frequencies, vec![0.0]);
        assert_eq!(spectrum.magnitude, vec![2.5]);
        assert_eq!(spectrum.phase, vec![PI]);

        let positive = analyze(&TimeSeries::from_values(vec![1.5]));
        assert_eq!(positive.magnitude, vec![1.5]);
        assert_eq!(positive.phase, vec![0.0]);
        assert_eq!(positive.peak_bin(), Some(0));
    }

    #[test]
    fn test_empty_spectrum() {
        let spectrum = analyze(&TimeSeries::from_values(vec![]));
        assert!(spectrum.is_empty());
        assert_eq!(spectrum.peak_bin(), None);
        assert!(spectrum.half().is_empty());
        assert!(reconstruct(&spectrum).is_empty());
    }

    #[test]
    fn test_zero_series_has_zero_phase() {
        let spectrum = analyze(&TimeSeries::from_values(vec![0.0; 6]));
        assert!(spectrum.magnitude.iter().all(|&m| m == 0.0));
        assert!(spectrum.real.iter().all(|&r| r == 0.0));
        assert!(spectrum.imag.iter().all(|&i| i == 0.0));
        assert!(spectrum.phase.iter().all(|&p| p == 0.0 && p.is_sign_positive()));
    }

    #[test]
    fn test_principal_phase_range() {
        assert_eq!(principal_phase(-1.0, -0.0), PI);
        assert_eq!(principal_phase(-1.0, 0.0), PI);
        assert!(principal_phase(1.0, -0.0).is_sign_positive());
        assert!(close(principal_phase(0.0, 1.0), PI / 2.0, 1e-15));
        assert!(close(principal_phase(0.0, -1.0), -PI / 2.0, 1e-15));
    }

    #[test]
    fn test_magnitude_and_phase_invariants() {
        let series = TimeSeries::from_values(vec![1.0, 2.0, -1.0, 0.5, 0.25]);
        let spectrum = analyze(&series);
        for k in 0..spectrum.len() {
            let (re, im) = (spectrum.real[k], spectrum.imag[k]);
            assert!(close(spectrum.magnitude[k], (re * re + im * im).sqrt(), 1e-12));
            assert!(spectrum.phase[k] > -PI && spectrum.phase[k] <= PI);
        }
    }

    #[test]
    fn test_half_and_peak() {
        // Discrete cosine at 2 cycles per 8 samples.
        let values: Vec<f64> = (0..8)
            .map(|n| (2.0 * PI * 2.0 * n as f64 / 8.0).cos())
            .collect();
        let spectrum = analyze(&TimeSeries::from_values(values));

        let half = spectrum.half();
        assert_eq!(half.len(), 4);
        assert_eq!(half.frequencies, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(spectrum.peak_bin(), Some(2));
        assert_eq!(spectrum.peak_frequency(), Some(2.0));
        assert!(close(spectrum.magnitude[2], 4.0, 1e-9));
        assert!(close(spectrum.magnitude[6], 4.0, 1e-9));
    }

    #[test]
    fn test_analyze_with_rate() {
        let series = TimeSeries::from_values(vec![1.0, 0.0, -1.0, 0.0]);
        let spectrum = analyze_with_rate(&series, 100.0);
        assert_eq!(spectrum.frequencies, vec![0.0, 25.0, -50.0, -25.0]);
    }

    #[test]
    fn test_reconstruct_round_trip() {
        let values = vec![0.3, -0.7, 1.1, 2.0, -1.5, 0.0, 0.9];
        let spectrum = analyze(&TimeSeries::from_values(values.clone()));
        let restored = reconstruct(&spectrum);
        for (a, b) in values.iter().zip(&restored) {
            assert!(close(*a, *b, 1e-12));
        }
    }

    #[test]
    fn test_reconstruct_series_length_check() {
        let spectrum = analyze(&TimeSeries::from_values(vec![1.0, 2.0]));
        assert!(reconstruct_series(&spectrum, &[0.0]).is_err());

        let restored = reconstruct_series(&spectrum, &[0.0, 0.5]).unwrap();
        assert_eq!(restored.times(), &[0.0, 0.5]);
    }
}
