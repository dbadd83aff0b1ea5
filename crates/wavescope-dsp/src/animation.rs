//! Oscilloscope frame rendering.
//!
//! Frames are pure functions of a cached series and a frame counter; the
//! caller owns the timer that advances the counter.

use crate::series::TimeSeries;

/// Headroom factor applied to the largest amplitude for the display range.
pub const DISPLAY_HEADROOM: f64 = 1.5;

/// Rotates a series left by `shift` samples.
///
/// `shifted[i] = series[(i + shift) mod N]`. The time base is kept, so a
/// shift of `N` (or any multiple) returns an identical series.
pub fn circular_shift(series: &TimeSeries, shift: usize) -> TimeSeries {
    let n = series.len();
    if n == 0 {
        return series.clone();
    }
    let mut values = series.values().to_vec();
    values.rotate_left(shift % n);
    TimeSeries::from_parts(series.times().to_vec(), values)
}

/// Renders the view for an animation frame, with `shift = frame mod N`.
pub fn render_frame(series: &TimeSeries, frame: u64) -> TimeSeries {
    let n = series.len();
    if n == 0 {
        return series.clone();
    }
    let shift = (frame % n as u64) as usize;
    log::trace!("frame {} -> shift {} of {}", frame, shift, n);
    circular_shift(series, shift)
}

/// Symmetric vertical display range for the given channel amplitudes.
///
/// The range is `±max(amplitudes…, 1)·1.5`, so quiet signals still get a
/// unit-scale window.
pub fn display_range(amplitudes: &[f64]) -> (f64, f64) {
    let peak = amplitudes
        .iter()
        .copied()
        .filter(|a| a.is_finite())
        .fold(1.0_f64, f64::max);
    let limit = peak * DISPLAY_HEADROOM;
    (-limit, limit)
}
