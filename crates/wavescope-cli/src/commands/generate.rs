//! Generate command implementation
//!
//! Runs the two-channel pipeline and prints a summary or the full results.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;
use wavescope_dsp::{
    run_scope, ChannelOutput, DspResult, ScopeOutput, SpectrumResult, TimeSeries,
};
use wavescope_spec::{validate_scope, ScopeSpec, SignalSpec};

use super::json_output::{error_codes, JsonError, JsonOutput, JsonWarning};
use super::reporting;
use crate::input::SignalArgs;

/// Machine-readable result of one channel.
#[derive(Debug, Serialize)]
pub struct ChannelReport {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<SignalSpec>,
    pub sample_hash: String,
    pub peak_bin: Option<usize>,
    pub peak_frequency: Option<f64>,
    pub energy: f64,
    pub series: TimeSeries,
    pub spectrum: SpectrumResult,
}

impl ChannelReport {
    /// Builds a report, keeping only the non-negative half of the spectrum
    /// unless `full` is set.
    pub fn from_channel(channel: &ChannelOutput, full: bool) -> Self {
        Self {
            enabled: channel.is_enabled(),
            spec: channel.spec.clone(),
            sample_hash: channel.series.sample_hash(),
            peak_bin: channel.spectrum.peak_bin(),
            peak_frequency: channel.spectrum.peak_frequency(),
            energy: channel.series.energy(),
            series: channel.series.clone(),
            spectrum: if full {
                channel.spectrum.clone()
            } else {
                channel.spectrum.half()
            },
        }
    }
}

/// Machine-readable result of the generate command.
#[derive(Debug, Serialize)]
pub struct GenerateResult {
    pub length: usize,
    pub display_range: [f64; 2],
    pub channel1: ChannelReport,
    pub channel2: ChannelReport,
}

impl GenerateResult {
    pub fn from_output(output: &ScopeOutput, full: bool) -> Self {
        let (low, high) = output.display_range();
        Self {
            length: output.length,
            display_range: [low, high],
            channel1: ChannelReport::from_channel(&output.channel1, full),
            channel2: ChannelReport::from_channel(&output.channel2, full),
        }
    }
}

/// Run the generate command
///
/// # Arguments
/// * `args` - Channel flags or config file
/// * `json_output` - Whether to output machine-readable JSON
/// * `full` - Include negative-frequency bins in JSON output
/// * `rows` - Spectrum rows to print per channel in human output
/// * `rate_from_time` - Derive the frequency axis from the time spacing
///
/// # Returns
/// Exit code: 0 on success, 1 if the request is invalid
pub fn run(
    args: &SignalArgs,
    json_output: bool,
    full: bool,
    rows: usize,
    rate_from_time: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(args, full, rate_from_time)
    } else {
        let scope = args.to_scope_spec()?;
        run_human(&scope, rows, rate_from_time)
    }
}

/// Runs the pipeline and optionally re-labels the spectra by time spacing.
pub fn generate_output(scope: &ScopeSpec, rate_from_time: bool) -> DspResult<ScopeOutput> {
    let output = run_scope(scope)?;
    Ok(if rate_from_time {
        output.with_time_rate()
    } else {
        output
    })
}

/// Runs the pipeline on `scope` and prints the colored summary.
pub fn run_human(scope: &ScopeSpec, rows: usize, rate_from_time: bool) -> Result<ExitCode> {
    println!("{}", "Generating scope".cyan().bold());

    let validation = validate_scope(scope);
    reporting::print_validation(&validation);
    if !validation.is_ok() {
        println!(
            "\n{} Request has {} error(s)",
            "FAILED".red().bold(),
            validation.errors.len()
        );
        return Ok(ExitCode::from(1));
    }

    let output = generate_output(scope, rate_from_time)?;
    print_output(&output, rows);

    println!(
        "\n{} {} samples per channel",
        "SUCCESS".green().bold(),
        output.length
    );
    Ok(ExitCode::SUCCESS)
}

/// Prints both channel summaries and their spectrum tables.
pub fn print_output(output: &ScopeOutput, rows: usize) {
    let (low, high) = output.display_range();
    println!("{} {} samples, y-range [{}, {}]", "Length:".dimmed(), output.length, low, high);

    println!();
    reporting::print_channel("CH1", &output.channel1);
    reporting::print_spectrum_table(&output.channel1.spectrum.half(), rows);

    println!();
    reporting::print_channel("CH2", &output.channel2);
    if output.channel2_enabled() {
        reporting::print_spectrum_table(&output.channel2.spectrum.half(), rows);
    }
}

fn run_json(args: &SignalArgs, full: bool, rate_from_time: bool) -> Result<ExitCode> {
    let scope = match args.to_scope_spec() {
        Ok(scope) => scope,
        Err(e) => {
            let error = JsonError::new(error_codes::INPUT, format!("{:#}", e));
            JsonOutput::<GenerateResult>::failure(vec![error], vec![]).print()?;
            return Ok(ExitCode::from(1));
        }
    };

    let validation = validate_scope(&scope);
    let warnings: Vec<JsonWarning> = validation.warnings.iter().map(Into::into).collect();

    match generate_output(&scope, rate_from_time) {
        Ok(output) => {
            JsonOutput::success(GenerateResult::from_output(&output, full), warnings).print()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let errors = if validation.errors.is_empty() {
                vec![JsonError::from(&e)]
            } else {
                validation.errors.iter().map(Into::into).collect()
            };
            JsonOutput::<GenerateResult>::failure(errors, warnings).print()?;
            Ok(ExitCode::from(1))
        }
    }
}
