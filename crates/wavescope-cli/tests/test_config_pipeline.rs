//! End-to-end checks from a config file on disk to command results.

use std::fs;

use pretty_assertions::assert_eq;
use wavescope_cli::commands::generate::GenerateResult;
use wavescope_cli::commands::validate::ValidateResult;
use wavescope_cli::input::load_scope_spec;
use wavescope_cli::session::Session;
use wavescope_spec::{validate_scope, SamplingMode, Waveform, WarningCode};

const DUAL_CONFIG: &str = r#"{
    "channel1": { "waveform": "sine", "frequency": 1.0, "amplitude": 2.0,
                  "sample_count": 8, "sampling_mode": "discrete" },
    "channel2": { "waveform": "square", "frequency": 1.0, "amplitude": 0.5,
                  "sample_count": 4, "sampling_mode": "discrete" }
}"#;

fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scope.json");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn dual_config_generates_equalized_channels() {
    let (_dir, path) = write_config(DUAL_CONFIG);
    let scope = load_scope_spec(&path).unwrap();
    assert_eq!(scope.channel2.as_ref().unwrap().waveform, Waveform::Square);

    let mut session = Session::new();
    let output = session.generate(scope).unwrap();
    assert_eq!(output.length, 8);
    assert_eq!(output.channel2.series.values()[4..], [0.0, 0.0, 0.0, 0.0]);
    assert_eq!(output.display_range(), (-3.0, 3.0));

    let result = GenerateResult::from_output(output, false);
    assert_eq!(result.channel1.peak_bin, Some(1));
    assert_eq!(result.channel1.spectrum.len(), 4);

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["length"], 8);
    assert_eq!(value["channel2"]["spec"]["sampling_mode"], "discrete");
}

#[test]
fn session_frames_follow_config() {
    let (_dir, path) = write_config(DUAL_CONFIG);
    let mut session = Session::new();
    session.generate(load_scope_spec(&path).unwrap()).unwrap();

    let first = session.tick().unwrap();
    let second = session.tick().unwrap();
    assert_eq!(first.shift, 0);
    assert_eq!(second.shift, 1);
    assert_eq!(second.channel2.values()[..3], [0.5, -0.5, -0.5]);
    assert_eq!(session.frame_at(9).unwrap(), with_frame(&second, 9));
}

fn with_frame(view: &wavescope_dsp::ScopeFrame, frame: u64) -> wavescope_dsp::ScopeFrame {
    wavescope_dsp::ScopeFrame {
        frame,
        ..view.clone()
    }
}

#[test]
fn invalid_config_reports_codes_and_keeps_session() {
    let (_dir, good) = write_config(DUAL_CONFIG);
    let mut session = Session::new();
    session.generate(load_scope_spec(&good).unwrap()).unwrap();

    let (_dir2, bad) = write_config(
        r#"{ "channel1": { "waveform": "triangle", "frequency": 0.0, "amplitude": 1.0,
                           "sample_count": 16 } }"#,
    );
    let scope = load_scope_spec(&bad).unwrap();
    assert_eq!(scope.channel1.sampling_mode, SamplingMode::Continuous);

    let validation = validate_scope(&scope);
    assert_eq!(validation.errors[0].code.code(), "E001");
    assert_eq!(validation.errors[0].path.as_deref(), Some("channel1.frequency"));

    assert!(session.generate(scope).is_err());
    assert_eq!(session.output().unwrap().length, 8);
}

#[test]
fn aliasing_config_validates_with_warning() {
    let (_dir, path) = write_config(
        r#"{ "channel1": { "waveform": "sine", "frequency": 40.0, "amplitude": 1.0,
                           "sample_count": 64 } }"#,
    );
    let scope = load_scope_spec(&path).unwrap();
    let validation = validate_scope(&scope);
    assert!(validation.is_ok());
    assert_eq!(validation.warnings[0].code, WarningCode::AboveNyquist);

    let result = ValidateResult::from_scope(&scope);
    assert_eq!(result.channel1.nyquist, 31.5);
    assert!(result.channel2.is_none());
}

#[test]
fn unknown_field_is_rejected() {
    let (_dir, path) = write_config(
        r#"{ "channel1": { "waveform": "sine", "frequency": 1.0, "amplitude": 1.0,
                           "sample_count": 8, "phase": 0.5 } }"#,
    );
    let err = load_scope_spec(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("phase"));
}
