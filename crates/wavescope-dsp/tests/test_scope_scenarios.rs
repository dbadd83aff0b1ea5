//! End-to-end scenarios for the two-channel pipeline.

use std::f64::consts::PI;

use pretty_assertions::assert_eq;
use wavescope_dsp::{analyze, analyze_with_rate, run_scope, synthesize, DspError};
use wavescope_spec::{ErrorCode, ScopeSpec, SignalSpec, Waveform};

#[test]
fn test_continuous_sine_eight_samples() {
    let spec = SignalSpec::new(Waveform::Sine, 1.0, 8);
    let series = synthesize(&spec).unwrap();

    let expected: Vec<f64> = (0..8).map(|i| (2.0 * PI * i as f64 / 7.0).sin()).collect();
    for (actual, expected) in series.values().iter().zip(&expected) {
        assert!((actual - expected).abs() < 1e-12);
    }
    assert_eq!(series.times()[7], 1.0);

    let spectrum = analyze(&series);
    assert_eq!(spectrum.peak_bin(), Some(1));

    let peak = spectrum.magnitude[1];
    assert!((spectrum.magnitude[7] - peak).abs() < 1e-9);
    // The duplicated endpoint leaks some energy; every other bin stays well
    // below the peak.
    for k in [0, 2, 3, 4, 5, 6] {
        assert!(
            spectrum.magnitude[k] < 0.3 * peak,
            "bin {} magnitude {} too close to peak {}",
            k,
            spectrum.magnitude[k],
            peak
        );
    }
}

#[test]
fn test_discrete_sine_has_clean_peak() {
    let spec = SignalSpec::new(Waveform::Sine, 1.0, 8).discrete();
    let spectrum = analyze(&synthesize(&spec).unwrap());

    assert!((spectrum.magnitude[1] - 4.0).abs() < 1e-9);
    assert!((spectrum.magnitude[7] - 4.0).abs() < 1e-9);
    for k in [0, 2, 3, 4, 5, 6] {
        assert!(spectrum.magnitude[k] < 1e-9);
    }
    // sin has a -π/2 phase at the positive bin.
    assert!((spectrum.phase[1] + PI / 2.0).abs() < 1e-9);
}

#[test]
fn test_discrete_square_never_intermediate() {
    let spec = SignalSpec::new(Waveform::Square, 1.0, 4)
        .with_amplitude(2.0)
        .discrete();
    let series = synthesize(&spec).unwrap();
    assert_eq!(series.len(), 4);
    assert!(series.values().iter().all(|v| v.abs() == 2.0));
}

#[test]
fn test_square_spectrum_has_only_odd_harmonics() {
    let spec = SignalSpec::new(Waveform::Square, 4.0, 64).discrete();
    let spectrum = analyze(&synthesize(&spec).unwrap());

    assert_eq!(spectrum.peak_bin(), Some(4));
    // Even multiples of the fundamental vanish for a 50% duty square wave.
    for k in [8, 16, 24] {
        assert!(spectrum.magnitude[k] < 1e-9, "bin {} = {}", k, spectrum.magnitude[k]);
    }
    assert!(spectrum.magnitude[12] > 1.0);
}

#[test]
fn test_disabled_channel2_scenario() {
    let scope = ScopeSpec::single(SignalSpec::new(Waveform::Triangle, 3.0, 50));
    let output = run_scope(&scope).unwrap();

    assert_eq!(output.channel2.series.len(), output.channel1.series.len());
    assert!(output.channel2.series.values().iter().all(|&v| v == 0.0));

    let spectrum = &output.channel2.spectrum;
    assert!(spectrum.magnitude.iter().all(|&m| m == 0.0));
    assert!(spectrum.real.iter().all(|&r| r == 0.0));
    assert!(spectrum.imag.iter().all(|&i| i == 0.0));
    let first_phase = spectrum.phase[0];
    assert!(spectrum.phase.iter().all(|&p| p == first_phase));
}

#[test]
fn test_single_sample_channel() {
    let scope = ScopeSpec::single(SignalSpec::new(Waveform::Sine, 1.0, 1).with_amplitude(5.0));
    let output = run_scope(&scope).unwrap();

    let spectrum = &output.channel1.spectrum;
    assert_eq!(spectrum.len(), 1);
    assert_eq!(spectrum.frequencies, vec![0.0]);
    assert_eq!(spectrum.magnitude, vec![0.0]);
    assert_eq!(spectrum.phase, vec![0.0]);
    assert!(spectrum.half().is_empty());
}

#[test]
fn test_frequency_axis_matches_scope_convention() {
    let scope = ScopeSpec::dual(
        SignalSpec::new(Waveform::Sine, 2.0, 10),
        SignalSpec::new(Waveform::Sine, 2.0, 6).discrete(),
    );
    let output = run_scope(&scope).unwrap();

    assert_eq!(output.length, 10);
    assert_eq!(
        output.channel1.spectrum.frequencies,
        vec![0.0, 1.0, 2.0, 3.0, 4.0, -5.0, -4.0, -3.0, -2.0, -1.0]
    );
    assert_eq!(
        output.channel1.spectrum.half().frequencies,
        vec![0.0, 1.0, 2.0, 3.0, 4.0]
    );
}

#[test]
fn test_time_spacing_sample_rate() {
    // 101 continuous samples over [0, 1] are spaced 1/100 apart.
    let series = synthesize(&SignalSpec::new(Waveform::Sine, 10.0, 101)).unwrap();
    let rate = series.sample_rate();
    assert!((rate - 100.0).abs() < 1e-9);

    let spectrum = analyze_with_rate(&series, rate);
    let peak = spectrum.peak_frequency().unwrap();
    assert!((peak - 10.0).abs() < 1.0);
}

#[test]
fn test_invalid_spec_reports_code() {
    let err = synthesize(&SignalSpec::new(Waveform::Sine, 1.0, 0)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidSampleCount.code());
    assert!(matches!(err, DspError::InvalidSpec(_)));
}

#[test]
fn test_scope_output_serializes() {
    let scope = ScopeSpec::single(SignalSpec::new(Waveform::Square, 1.0, 4).discrete());
    let output = run_scope(&scope).unwrap();

    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["length"], 4);
    assert!(json["channel2"]["spec"].is_null());
    assert_eq!(json["channel1"]["spec"]["waveform"], "square");
    assert_eq!(
        json["channel1"]["spectrum"]["magnitude"]
            .as_array()
            .unwrap()
            .len(),
        4
    );
}
