//! Signal description types.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, SpecError, ValidationError};

/// Periodic waveform shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Sine wave.
    Sine,
    /// Square wave with 50% duty cycle.
    Square,
    /// Symmetric triangle wave.
    Triangle,
}

impl Waveform {
    /// Returns the waveform as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Triangle => "triangle",
        }
    }

    /// Returns all waveforms in menu order.
    pub fn all() -> &'static [Waveform] {
        &[Waveform::Sine, Waveform::Square, Waveform::Triangle]
    }

    /// Maps a 1-based menu choice to a waveform.
    pub fn from_menu_choice(choice: u32) -> Option<Waveform> {
        match choice {
            1 => Some(Waveform::Sine),
            2 => Some(Waveform::Square),
            3 => Some(Waveform::Triangle),
            _ => None,
        }
    }
}

impl std::fmt::Display for Waveform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Waveform {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sine" | "sin" => Ok(Waveform::Sine),
            "square" => Ok(Waveform::Square),
            "triangle" | "tri" => Ok(Waveform::Triangle),
            other => Err(ValidationError::with_path(
                ErrorCode::UnknownWaveform,
                format!(
                    "unknown waveform '{}', expected one of sine, square, triangle",
                    other
                ),
                "waveform",
            )),
        }
    }
}

/// How sample positions are laid out in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingMode {
    /// Evenly spaced points over the closed interval [0, 1].
    #[default]
    Continuous,
    /// Integer sample indices `0..sample_count`.
    Discrete,
}

impl SamplingMode {
    /// Maps a "continuous?" answer to a sampling mode.
    pub fn from_continuous(continuous: bool) -> Self {
        if continuous {
            SamplingMode::Continuous
        } else {
            SamplingMode::Discrete
        }
    }

    /// Returns the sampling mode as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SamplingMode::Continuous => "continuous",
            SamplingMode::Discrete => "discrete",
        }
    }
}

impl std::fmt::Display for SamplingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SamplingMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continuous" => Ok(SamplingMode::Continuous),
            "discrete" => Ok(SamplingMode::Discrete),
            other => Err(ValidationError::with_path(
                ErrorCode::UnknownSamplingMode,
                format!(
                    "unknown sampling mode '{}', expected continuous or discrete",
                    other
                ),
                "sampling_mode",
            )),
        }
    }
}

/// Description of one synthetic signal.
///
/// Construct with [`SignalSpec::new`] and adjust with the `with_*` methods;
/// the synthesizer validates the spec before producing samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignalSpec {
    /// Waveform shape.
    pub waveform: Waveform,
    /// Frequency in Hz (continuous) or cycles per sample block (discrete).
    pub frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
    /// Number of samples to generate.
    pub sample_count: usize,
    /// Time base layout.
    #[serde(default)]
    pub sampling_mode: SamplingMode,
}

impl SignalSpec {
    /// Creates a unit-amplitude continuous signal spec.
    pub fn new(waveform: Waveform, frequency: f64, sample_count: usize) -> Self {
        Self {
            waveform,
            frequency,
            amplitude: 1.0,
            sample_count,
            sampling_mode: SamplingMode::Continuous,
        }
    }

    /// Sets the amplitude.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Sets the sampling mode.
    pub fn with_sampling_mode(mut self, sampling_mode: SamplingMode) -> Self {
        self.sampling_mode = sampling_mode;
        self
    }

    /// Switches to the discrete time base.
    pub fn discrete(self) -> Self {
        self.with_sampling_mode(SamplingMode::Discrete)
    }

    /// Checks the hard constraints, returning the first violation.
    ///
    /// Use [`crate::validation::validate_signal`] to collect every error and
    /// warning at once.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match crate::validation::validate_signal(self).into_result() {
            Ok(_) => Ok(()),
            Err(mut errors) => Err(errors.remove(0)),
        }
    }
}

/// A two-channel scope request.
///
/// Channel 2 is optional; when absent it is treated as a silent channel with
/// the same length and time base as channel 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScopeSpec {
    /// Primary channel.
    pub channel1: SignalSpec,
    /// Optional secondary channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel2: Option<SignalSpec>,
}

impl ScopeSpec {
    /// Creates a single-channel scope request.
    pub fn single(channel1: SignalSpec) -> Self {
        Self {
            channel1,
            channel2: None,
        }
    }

    /// Creates a two-channel scope request.
    pub fn dual(channel1: SignalSpec, channel2: SignalSpec) -> Self {
        Self {
            channel1,
            channel2: Some(channel2),
        }
    }

    /// Parses a scope request from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the request to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns true when channel 2 is enabled.
    pub fn has_channel2(&self) -> bool {
        self.channel2.is_some()
    }
}
