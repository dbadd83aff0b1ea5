//! Signal spec validation logic.

use std::f64::consts::TAU;

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::signal::{SamplingMode, ScopeSpec, SignalSpec};

/// Sample counts above this produce a warning.
pub const LARGE_SAMPLE_COUNT: usize = 1 << 20;

/// Validates a single signal spec.
///
/// Every violated constraint is reported, not only the first one.
///
/// # Example
/// ```
/// use wavescope_spec::{SignalSpec, Waveform};
/// use wavescope_spec::validation::validate_signal;
///
/// let spec = SignalSpec::new(Waveform::Sine, 5.0, 256);
/// assert!(validate_signal(&spec).is_ok());
/// ```
pub fn validate_signal(spec: &SignalSpec) -> ValidationResult {
    validate_signal_at(spec, None)
}

/// Validates a two-channel scope request.
///
/// Field paths are prefixed with `channel1.` or `channel2.`.
pub fn validate_scope(scope: &ScopeSpec) -> ValidationResult {
    let mut result = validate_signal_at(&scope.channel1, Some("channel1"));
    if let Some(ref channel2) = scope.channel2 {
        result.merge(validate_signal_at(channel2, Some("channel2")));
    }
    result
}

fn validate_signal_at(spec: &SignalSpec, prefix: Option<&str>) -> ValidationResult {
    let mut result = ValidationResult::default();
    let field = |name: &str| match prefix {
        Some(p) => format!("{}.{}", p, name),
        None => name.to_string(),
    };

    if !(spec.frequency.is_finite() && spec.frequency > 0.0) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidFrequency,
            format!("frequency must be positive, got {}", spec.frequency),
            field("frequency"),
        ));
    } else if !max_phase(spec.frequency).is_finite() {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidFrequency,
            format!(
                "frequency {} is too large: its phase overflows over one time unit",
                spec.frequency
            ),
            field("frequency"),
        ));
    }

    if !(spec.amplitude.is_finite() && spec.amplitude > 0.0) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidAmplitude,
            format!("amplitude must be positive, got {}", spec.amplitude),
            field("amplitude"),
        ));
    }

    if spec.sample_count == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSampleCount,
            "sample_count must be at least 1",
            field("sample_count"),
        ));
    }

    if result.is_ok() {
        check_warnings(spec, &field, &mut result);
    }

    result
}

fn check_warnings(
    spec: &SignalSpec,
    field: &dyn Fn(&str) -> String,
    result: &mut ValidationResult,
) {
    if spec.sample_count == 1 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::SingleSample,
            "a single sample yields a single-bin spectrum",
            field("sample_count"),
        ));
        return;
    }

    let nyquist = nyquist_frequency(spec.sampling_mode, spec.sample_count);
    if spec.frequency >= nyquist {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::AboveNyquist,
            format!(
                "frequency {} is at or above the Nyquist limit {} for {} samples; the spectrum will alias",
                spec.frequency, nyquist, spec.sample_count
            ),
            field("frequency"),
        ));
    }

    if spec.sample_count > LARGE_SAMPLE_COUNT {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::LargeSampleCount,
            format!(
                "sample_count {} exceeds {}",
                spec.sample_count, LARGE_SAMPLE_COUNT
            ),
            field("sample_count"),
        ));
    }
}

/// Largest phase argument a signal reaches, in radians.
///
/// Sample positions never pass one full block (`t <= 1` continuous,
/// `n / N < 1` discrete), so `2π·f` bounds every phase.
pub fn max_phase(frequency: f64) -> f64 {
    TAU * frequency
}

/// Returns the highest representable frequency for a time base.
///
/// The continuous base spans [0, 1] with `n - 1` intervals, so its sample
/// rate is `n - 1`; the discrete base measures frequency in cycles per block
/// of `n` samples.
pub fn nyquist_frequency(mode: SamplingMode, sample_count: usize) -> f64 {
    match mode {
        SamplingMode::Continuous => sample_count.saturating_sub(1) as f64 / 2.0,
        SamplingMode::Discrete => sample_count as f64 / 2.0,
    }
}
