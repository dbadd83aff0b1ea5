//! Two-channel orchestration.
//!
//! Synthesizes both channels, equalizes their lengths, and analyzes each one
//! independently. Channels are never mixed.

use serde::Serialize;
use wavescope_spec::{validate_scope, ScopeSpec, SignalSpec, ValidationWarning};

use crate::animation::{display_range, render_frame};
use crate::error::DspResult;
use crate::series::{equalize, TimeSeries};
use crate::spectrum::{analyze, analyze_with_rate, SpectrumResult};
use crate::synthesis::synthesize;

/// Output for one channel.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelOutput {
    /// Spec the channel was synthesized from, `None` for a disabled channel.
    pub spec: Option<SignalSpec>,
    /// Samples after length equalization.
    pub series: TimeSeries,
    /// Full-range spectrum of `series`.
    pub spectrum: SpectrumResult,
}

impl ChannelOutput {
    fn new(spec: Option<SignalSpec>, series: TimeSeries) -> Self {
        let spectrum = analyze(&series);
        Self {
            spec,
            series,
            spectrum,
        }
    }

    /// Returns true if the channel was synthesized from a spec.
    pub fn is_enabled(&self) -> bool {
        self.spec.is_some()
    }

    /// Amplitude used for display scaling; 0 for a disabled channel.
    pub fn amplitude(&self) -> f64 {
        self.spec.as_ref().map_or(0.0, |s| s.amplitude)
    }
}

/// Result of running the two-channel pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct ScopeOutput {
    /// Common length of both channels.
    pub length: usize,
    /// Channel 1.
    pub channel1: ChannelOutput,
    /// Channel 2; all zeros when disabled.
    pub channel2: ChannelOutput,
    /// Validation warnings for the request, left for the caller to report.
    #[serde(skip)]
    pub warnings: Vec<ValidationWarning>,
}

/// Both channels' views for one animation frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScopeFrame {
    /// Frame counter this view was rendered for.
    pub frame: u64,
    /// Effective shift, `frame mod length`.
    pub shift: usize,
    /// Shifted channel 1.
    pub channel1: TimeSeries,
    /// Shifted channel 2.
    pub channel2: TimeSeries,
}

impl ScopeOutput {
    /// Returns true if channel 2 was synthesized from a spec.
    pub fn channel2_enabled(&self) -> bool {
        self.channel2.is_enabled()
    }

    /// Renders both channels for an animation frame.
    pub fn frame(&self, frame: u64) -> ScopeFrame {
        let shift = if self.length == 0 {
            0
        } else {
            (frame % self.length as u64) as usize
        };
        ScopeFrame {
            frame,
            shift,
            channel1: render_frame(&self.channel1.series, frame),
            channel2: render_frame(&self.channel2.series, frame),
        }
    }

    /// Re-labels both spectra with the sample rate implied by each channel's
    /// time spacing instead of `fs = N`.
    ///
    /// Only the frequency axis changes; bin values are identical.
    pub fn with_time_rate(mut self) -> Self {
        for channel in [&mut self.channel1, &mut self.channel2] {
            let rate = channel.series.sample_rate();
            channel.spectrum = analyze_with_rate(&channel.series, rate);
        }
        self
    }

    /// Vertical display range for the oscilloscope view.
    pub fn display_range(&self) -> (f64, f64) {
        display_range(&[self.channel1.amplitude(), self.channel2.amplitude()])
    }
}

/// Runs synthesis, equalization, and analysis for a scope request.
///
/// A missing channel 2 becomes a silent series on channel 1's time base.
/// Errors abort before any synthesis; warnings are returned in
/// [`ScopeOutput::warnings`].
///
/// # Example
/// ```
/// use wavescope_dsp::run_scope;
/// use wavescope_spec::{ScopeSpec, SignalSpec, Waveform};
///
/// let output = run_scope(&ScopeSpec::single(SignalSpec::new(Waveform::Sine, 1.0, 8))).unwrap();
/// assert_eq!(output.length, 8);
/// assert!(!output.channel2_enabled());
/// ```
pub fn run_scope(scope: &ScopeSpec) -> DspResult<ScopeOutput> {
    let warnings = match validate_scope(scope).into_result() {
        Ok(warnings) => warnings,
        Err(mut errors) => return Err(errors.remove(0).into()),
    };
    for warning in &warnings {
        log::debug!("validation warning: {}", warning);
    }

    let series1 = synthesize(&scope.channel1)?;
    let series2 = match scope.channel2 {
        Some(ref spec) => synthesize(spec)?,
        None => TimeSeries::silent_like(&series1),
    };

    let (series1, series2) = equalize(&series1, &series2);
    let length = series1.len();

    log::info!(
        "scope run: {} samples, channel 2 {}",
        length,
        if scope.has_channel2() {
            "enabled"
        } else {
            "disabled"
        }
    );

    Ok(ScopeOutput {
        length,
        channel1: ChannelOutput::new(Some(scope.channel1.clone()), series1),
        channel2: ChannelOutput::new(scope.channel2.clone(), series2),
        warnings,
    })
}
