//! Validate command implementation
//!
//! Checks a scope request without synthesizing anything.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;
use wavescope_spec::{nyquist_frequency, validate_scope, ScopeSpec, SignalSpec};

use super::json_output::{error_codes, JsonError, JsonOutput, JsonWarning};
use super::reporting;
use crate::input::SignalArgs;

/// Per-channel facts reported alongside a successful validation.
#[derive(Debug, Serialize)]
pub struct ChannelSummary {
    pub spec: SignalSpec,
    pub nyquist: f64,
}

/// Machine-readable result of the validate command.
#[derive(Debug, Serialize)]
pub struct ValidateResult {
    pub channel1: ChannelSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel2: Option<ChannelSummary>,
}

impl ValidateResult {
    pub fn from_scope(scope: &ScopeSpec) -> Self {
        Self {
            channel1: summarize(&scope.channel1),
            channel2: scope.channel2.as_ref().map(summarize),
        }
    }
}

fn summarize(spec: &SignalSpec) -> ChannelSummary {
    ChannelSummary {
        spec: spec.clone(),
        nyquist: nyquist_frequency(spec.sampling_mode, spec.sample_count),
    }
}

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(args: &SignalArgs, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(args)
    } else {
        run_human(args)
    }
}

fn run_human(args: &SignalArgs) -> Result<ExitCode> {
    let source = args.config.as_deref().unwrap_or("command-line flags");
    println!("{} {}", "Validating:".cyan().bold(), source);

    let scope = args.to_scope_spec()?;
    println!("  CH1 {}", reporting::describe_signal(&scope.channel1));
    if let Some(ref channel2) = scope.channel2 {
        println!("  CH2 {}", reporting::describe_signal(channel2));
    }

    let result = validate_scope(&scope);
    reporting::print_validation(&result);

    if result.is_ok() {
        println!("\n{} Request is valid", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Request has {} error(s)",
            "FAILED".red().bold(),
            result.errors.len()
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(args: &SignalArgs) -> Result<ExitCode> {
    let scope = match args.to_scope_spec() {
        Ok(scope) => scope,
        Err(e) => {
            let error = JsonError::new(error_codes::INPUT, format!("{:#}", e));
            JsonOutput::<ValidateResult>::failure(vec![error], vec![]).print()?;
            return Ok(ExitCode::from(1));
        }
    };

    let result = validate_scope(&scope);
    let warnings: Vec<JsonWarning> = result.warnings.iter().map(Into::into).collect();

    if result.is_ok() {
        JsonOutput::success(ValidateResult::from_scope(&scope), warnings).print()?;
        Ok(ExitCode::SUCCESS)
    } else {
        let errors: Vec<JsonError> = result.errors.iter().map(Into::into).collect();
        JsonOutput::<ValidateResult>::failure(errors, warnings).print()?;
        Ok(ExitCode::from(1))
    }
}
