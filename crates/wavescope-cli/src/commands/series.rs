//! Series command implementation
//!
//! Compares each channel's waveform with its truncated Fourier series.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;
use wavescope_dsp::{approximate, Approximation};
use wavescope_spec::SignalSpec;

use super::json_output::{error_codes, JsonError, JsonOutput};
use super::reporting;
use crate::input::SignalArgs;

/// Machine-readable result of the series command.
#[derive(Debug, Serialize)]
pub struct SeriesResult {
    pub channel1: Approximation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel2: Option<Approximation>,
}

/// Run the series command
///
/// # Arguments
/// * `args` - Channel flags or config file
/// * `terms` - Number of non-zero harmonics to sum
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(args: &SignalArgs, terms: usize, json_output: bool) -> Result<ExitCode> {
    let scope = match args.to_scope_spec() {
        Ok(scope) => scope,
        Err(e) if json_output => {
            let error = JsonError::new(error_codes::INPUT, format!("{:#}", e));
            JsonOutput::<SeriesResult>::failure(vec![error], vec![]).print()?;
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e),
    };

    let result = approximate(&scope.channel1, terms).and_then(|channel1| {
        let channel2 = scope
            .channel2
            .as_ref()
            .map(|spec| approximate(spec, terms))
            .transpose()?;
        Ok(SeriesResult { channel1, channel2 })
    });

    if json_output {
        return match result {
            Ok(result) => {
                JsonOutput::success(result, vec![]).print()?;
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                JsonOutput::<SeriesResult>::failure(vec![JsonError::from(&e)], vec![]).print()?;
                Ok(ExitCode::from(1))
            }
        };
    }

    let result = result?;
    print_approximation("CH1", &scope.channel1, &result.channel1);
    if let (Some(spec), Some(approx)) = (scope.channel2.as_ref(), result.channel2.as_ref()) {
        println!();
        print_approximation("CH2", spec, approx);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_approximation(label: &str, spec: &SignalSpec, approx: &Approximation) {
    println!(
        "{} {} with {} term(s)",
        format!("{}:", label).cyan().bold(),
        reporting::describe_signal(spec),
        approx.terms
    );

    println!(
        "  {:>6} {:>12} {:>12} {:>12}",
        "order".dimmed(),
        "cos".dimmed(),
        "sin".dimmed(),
        "amplitude".dimmed()
    );
    for h in &approx.harmonics {
        println!(
            "  {:>6} {:>12.6} {:>12.6} {:>12.6}",
            h.order,
            h.cos,
            h.sin,
            h.amplitude()
        );
    }

    println!("  {:<10} {:.6}", "max error".dimmed(), approx.max_error);
    println!("  {:<10} {:.6}", "rms error".dimmed(), approx.rms_error);
}
