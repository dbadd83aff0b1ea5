//! Scope spec input: config files, command-line flags, and console prompts.

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use wavescope_spec::{SamplingMode, ScopeSpec, SignalSpec, Waveform};

/// Flags describing one or two channels, or a config file holding them.
#[derive(Args, Debug, Clone)]
pub struct SignalArgs {
    /// Path to a scope config file (JSON); overrides the channel flags
    #[arg(short, long)]
    pub config: Option<String>,

    /// Channel 1 waveform (sine, square, triangle)
    #[arg(short, long, default_value = "sine")]
    pub waveform: String,

    /// Channel 1 frequency in Hz (cycles per block when discrete)
    #[arg(short, long, default_value_t = 5.0, allow_hyphen_values = true)]
    pub frequency: f64,

    /// Channel 1 amplitude
    #[arg(short, long, default_value_t = 1.0, allow_hyphen_values = true)]
    pub amplitude: f64,

    /// Channel 1 sample count
    #[arg(short = 'n', long, default_value_t = 256)]
    pub samples: usize,

    /// Use integer sample indices instead of the continuous [0, 1] time base
    #[arg(long)]
    pub discrete: bool,

    /// Channel 2 waveform; enables channel 2
    #[arg(long)]
    pub ch2_waveform: Option<String>,

    /// Channel 2 frequency
    #[arg(long, default_value_t = 5.0, allow_hyphen_values = true)]
    pub ch2_frequency: f64,

    /// Channel 2 amplitude
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    pub ch2_amplitude: f64,

    /// Channel 2 sample count (default: same as channel 1)
    #[arg(long)]
    pub ch2_samples: Option<usize>,

    /// Use the discrete time base for channel 2
    #[arg(long)]
    pub ch2_discrete: bool,
}

impl SignalArgs {
    /// Resolves the flags (or the config file) into a scope spec.
    pub fn to_scope_spec(&self) -> Result<ScopeSpec> {
        if let Some(ref path) = self.config {
            return load_scope_spec(Path::new(path));
        }

        let waveform: Waveform = self.waveform.parse()?;
        let channel1 = SignalSpec::new(waveform, self.frequency, self.samples)
            .with_amplitude(self.amplitude)
            .with_sampling_mode(SamplingMode::from_continuous(!self.discrete));

        let channel2 = match self.ch2_waveform {
            Some(ref name) => {
                let waveform: Waveform = name
                    .parse()
                    .context("Invalid channel 2 waveform")?;
                Some(
                    SignalSpec::new(
                        waveform,
                        self.ch2_frequency,
                        self.ch2_samples.unwrap_or(self.samples),
                    )
                    .with_amplitude(self.ch2_amplitude)
                    .with_sampling_mode(SamplingMode::from_continuous(!self.ch2_discrete)),
                )
            }
            None => None,
        };

        Ok(ScopeSpec { channel1, channel2 })
    }
}

/// Loads a scope spec from a JSON config file.
pub fn load_scope_spec(path: &Path) -> Result<ScopeSpec> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let scope = ScopeSpec::from_json(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    log::debug!("loaded scope config from {}", path.display());
    Ok(scope)
}

/// Asks for a scope spec on a console.
///
/// Mirrors the classic two-channel flow: channel 1 settings, then an optional
/// channel 2. An out-of-range waveform choice falls back to sine.
pub fn prompt_scope_spec<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<ScopeSpec> {
    writeln!(output, "Channel 1 (CH1):")?;
    let channel1 = prompt_signal_spec(input, output)?;

    let channel2 = if prompt_yes_no(input, output, "\nUse channel 2? (y/n): ")? {
        writeln!(output, "\nChannel 2 (CH2):")?;
        Some(prompt_signal_spec(input, output)?)
    } else {
        None
    };

    Ok(ScopeSpec { channel1, channel2 })
}

/// Asks for one channel's settings.
pub fn prompt_signal_spec<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<SignalSpec> {
    for (i, waveform) in Waveform::all().iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, waveform)?;
    }

    let choice: u32 = prompt_parse(input, output, "Select the waveform: ")?;
    let waveform = Waveform::from_menu_choice(choice).unwrap_or_else(|| {
        log::warn!("waveform choice {} out of range, using sine", choice);
        Waveform::Sine
    });
    let frequency: f64 = prompt_parse(input, output, "Frequency (Hz): ")?;
    let amplitude: f64 = prompt_parse(input, output, "Amplitude: ")?;
    let samples: usize = prompt_parse(input, output, "Number of samples: ")?;
    let continuous = prompt_yes_no(input, output, "Continuous signal? (y/n): ")?;

    Ok(SignalSpec::new(waveform, frequency, samples)
        .with_amplitude(amplitude)
        .with_sampling_mode(SamplingMode::from_continuous(continuous)))
}

fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        anyhow::bail!("Unexpected end of input at prompt '{}'", prompt.trim());
    }
    Ok(line.trim().to_string())
}

fn prompt_parse<T, R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    R: BufRead,
    W: Write,
{
    let line = prompt_line(input, output, prompt)?;
    line.parse::<T>()
        .with_context(|| format!("Invalid value '{}' for '{}'", line, prompt.trim()))
}

fn prompt_yes_no<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<bool> {
    let line = prompt_line(input, output, prompt)?;
    Ok(matches!(line.to_ascii_lowercase().as_str(), "y" | "yes" | "s" | "si"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn default_args() -> SignalArgs {
        SignalArgs {
            config: None,
            waveform: "sine".to_string(),
            frequency: 5.0,
            amplitude: 1.0,
            samples: 256,
            discrete: false,
            ch2_waveform: None,
            ch2_frequency: 5.0,
            ch2_amplitude: 1.0,
            ch2_samples: None,
            ch2_discrete: false,
        }
    }

    #[test]
    fn test_args_single_channel() {
        let scope = default_args().to_scope_spec().unwrap();
        assert_eq!(scope.channel1, SignalSpec::new(Waveform::Sine, 5.0, 256));
        assert!(scope.channel2.is_none());
    }

    #[test]
    fn test_args_dual_channel() {
        let args = SignalArgs {
            ch2_waveform: Some("triangle".to_string()),
            ch2_frequency: 2.0,
            ch2_amplitude: 0.5,
            ch2_discrete: true,
            ..default_args()
        };
        let scope = args.to_scope_spec().unwrap();
        let channel2 = scope.channel2.unwrap();
        assert_eq!(channel2.waveform, Waveform::Triangle);
        assert_eq!(channel2.sample_count, 256);
        assert_eq!(channel2.amplitude, 0.5);
        assert_eq!(channel2.sampling_mode, SamplingMode::Discrete);
    }

    #[test]
    fn test_args_unknown_waveform() {
        let args = SignalArgs {
            waveform: "sawtooth".to_string(),
            ..default_args()
        };
        let err = args.to_scope_spec().unwrap_err();
        assert!(err.to_string().contains("sawtooth"));
    }

    #[test]
    fn test_load_scope_spec() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scope.json");
        fs::write(
            &path,
            r#"{"channel1":{"waveform":"square","frequency":1.0,"amplitude":2.0,"sample_count":4,"sampling_mode":"discrete"}}"#,
        )
        .unwrap();

        let scope = load_scope_spec(&path).unwrap();
        assert_eq!(scope.channel1.waveform, Waveform::Square);
        assert_eq!(scope.channel1.sampling_mode, SamplingMode::Discrete);
    }

    #[test]
    fn test_load_scope_spec_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = load_scope_spec(&dir.path().join("missing.json")).unwrap_err();
        assert!(missing.to_string().contains("Failed to read config file"));

        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let bad = load_scope_spec(&path).unwrap_err();
        assert!(bad.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_overrides_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scope.json");
        let scope = ScopeSpec::single(SignalSpec::new(Waveform::Triangle, 3.0, 32));
        fs::write(&path, scope.to_json_pretty().unwrap()).unwrap();

        let args = SignalArgs {
            config: Some(path.to_string_lossy().into_owned()),
            ..default_args()
        };
        assert_eq!(args.to_scope_spec().unwrap(), scope);
    }

    #[test]
    fn test_prompt_single_channel() {
        let mut input = Cursor::new("2\n1\n2\n4\nn\nn\n");
        let mut output = Vec::new();

        let scope = prompt_scope_spec(&mut input, &mut output).unwrap();
        assert_eq!(
            scope.channel1,
            SignalSpec::new(Waveform::Square, 1.0, 4)
                .with_amplitude(2.0)
                .discrete()
        );
        assert!(scope.channel2.is_none());

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Channel 1 (CH1):"));
        assert!(transcript.contains("3. triangle"));
        assert!(!transcript.contains("Channel 2 (CH2):"));
    }

    #[test]
    fn test_prompt_dual_channel() {
        let mut input = Cursor::new("1\n5\n1\n128\ny\ny\n3\n2.5\n0.5\n64\nn\n");
        let mut output = Vec::new();

        let scope = prompt_scope_spec(&mut input, &mut output).unwrap();
        assert_eq!(scope.channel1, SignalSpec::new(Waveform::Sine, 5.0, 128));
        assert_eq!(
            scope.channel2,
            Some(
                SignalSpec::new(Waveform::Triangle, 2.5, 64)
                    .with_amplitude(0.5)
                    .discrete()
            )
        );
    }

    #[test]
    fn test_prompt_out_of_range_choice_defaults_to_sine() {
        let mut input = Cursor::new("9\n1\n1\n8\ny\nn\n");
        let mut output = Vec::new();
        let scope = prompt_scope_spec(&mut input, &mut output).unwrap();
        assert_eq!(scope.channel1.waveform, Waveform::Sine);
    }

    #[test]
    fn test_prompt_rejects_bad_number() {
        let mut input = Cursor::new("1\nfast\n");
        let mut output = Vec::new();
        let err = prompt_scope_spec(&mut input, &mut output).unwrap_err();
        assert!(err.to_string().contains("fast"));
    }

    #[test]
    fn test_prompt_end_of_input() {
        let mut input = Cursor::new("1\n");
        let mut output = Vec::new();
        let err = prompt_scope_spec(&mut input, &mut output).unwrap_err();
        assert!(err.to_string().contains("Unexpected end of input"));
    }
}
