//! Time-domain sample sequences and length equalization.

use serde::Serialize;

use crate::error::{DspError, DspResult};

/// An ordered sequence of `(time, amplitude)` samples.
///
/// Times are seconds on the continuous base or sample indices on the
/// discrete base. Operations that change the length return a new series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Creates a series from parallel time and value vectors.
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> DspResult<Self> {
        if times.len() != values.len() {
            return Err(DspError::length_mismatch(times.len(), values.len()));
        }
        Ok(Self { times, values })
    }

    /// Creates a series on integer indices `0..values.len()`.
    pub fn from_values(values: Vec<f64>) -> Self {
        let times = (0..values.len()).map(|i| i as f64).collect();
        Self { times, values }
    }

    /// Creates an all-zero series sharing another series' time base.
    pub fn silent_like(other: &TimeSeries) -> Self {
        Self {
            times: other.times.clone(),
            values: vec![0.0; other.len()],
        }
    }

    pub(crate) fn from_parts(times: Vec<f64>, values: Vec<f64>) -> Self {
        debug_assert_eq!(times.len(), values.len());
        Self { times, values }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample positions.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Sample amplitudes.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterates over `(time, amplitude)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    /// Spacing between the last two samples, or 1.0 for shorter series.
    pub fn step(&self) -> f64 {
        match self.times.len() {
            0 | 1 => 1.0,
            n => self.times[n - 1] - self.times[n - 2],
        }
    }

    /// Samples per unit time implied by the spacing of the first two samples.
    ///
    /// Series with fewer than two samples report a rate of 1.0.
    pub fn sample_rate(&self) -> f64 {
        if self.times.len() < 2 {
            return 1.0;
        }
        let dt = self.times[1] - self.times[0];
        if dt > 0.0 {
            1.0 / dt
        } else {
            1.0
        }
    }

    /// Sum of squared amplitudes.
    pub fn energy(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum()
    }

    /// Largest absolute amplitude, or 0.0 for an empty series.
    pub fn peak(&self) -> f64 {
        self.values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }

    /// BLAKE3 hash of the amplitudes as little-endian f64 bytes.
    pub fn sample_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for value in &self.values {
            hasher.update(&value.to_le_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }

    /// Returns a copy right-padded with zero samples up to `len`.
    ///
    /// Padded times continue the existing time base with a uniform step.
    /// A series already at least `len` long is returned unchanged.
    pub fn padded_to(&self, len: usize) -> TimeSeries {
        if len <= self.len() {
            return self.clone();
        }

        let step = self.step();
        let last = self.times.last().copied().unwrap_or(-step);
        let mut times = Vec::with_capacity(len);
        times.extend_from_slice(&self.times);
        times.extend((1..=len - self.len()).map(|k| last + step * k as f64));

        let mut values = Vec::with_capacity(len);
        values.extend_from_slice(&self.values);
        values.resize(len, 0.0);

        Self { times, values }
    }
}

/// Pads the shorter series with trailing zeros so both share a length.
///
/// Inputs of equal length come back unchanged.
pub fn equalize(a: &TimeSeries, b: &TimeSeries) -> (TimeSeries, TimeSeries) {
    let len = a.len().max(b.len());
    if a.len() != b.len() {
        log::debug!(
            "equalizing series of length {} and {} to {}",
            a.len(),
            b.len(),
            len
        );
    }
    (a.padded_to(len), b.padded_to(len))
}
