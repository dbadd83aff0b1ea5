//! Frame command implementation
//!
//! Renders oscilloscope animation frames from a cached session.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;
use wavescope_dsp::ScopeFrame;
use wavescope_spec::validate_scope;

use super::json_output::{error_codes, JsonError, JsonOutput, JsonWarning};
use super::reporting;
use crate::input::SignalArgs;
use crate::session::Session;

/// Machine-readable result of the frame command.
#[derive(Debug, Serialize)]
pub struct FrameResult {
    pub length: usize,
    pub display_range: [f64; 2],
    pub channel2_enabled: bool,
    pub frames: Vec<ScopeFrame>,
}

/// Run the frame command
///
/// # Arguments
/// * `args` - Channel flags or config file
/// * `start` - First frame number to render
/// * `count` - Number of consecutive frames
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(args: &SignalArgs, start: u64, count: usize, json_output: bool) -> Result<ExitCode> {
    if json_output {
        return run_json(args, start, count);
    }

    let scope = args.to_scope_spec()?;
    let mut session = Session::new();
    let output = session.generate(scope)?;
    let (low, high) = output.display_range();
    let channel2_enabled = output.channel2_enabled();

    println!(
        "{} {} samples, y-range [{}, {}]",
        "Scope:".cyan().bold(),
        output.length,
        low,
        high
    );
    reporting::print_warnings(&output.warnings);

    for view in render_frames(&mut session, start, count) {
        print_frame(&view, channel2_enabled);
    }
    Ok(ExitCode::SUCCESS)
}

/// Renders `count` frames starting at `start`, advancing the session counter.
pub fn render_frames(session: &mut Session, start: u64, count: usize) -> Vec<ScopeFrame> {
    session.seek(start);
    std::iter::from_fn(|| session.tick()).take(count).collect()
}

/// Prints one frame's shifted channel values.
pub fn print_frame(view: &ScopeFrame, channel2_enabled: bool) {
    println!(
        "\n{} {} (shift {})",
        "Frame".bold(),
        view.frame,
        view.shift
    );
    println!("  {} {}", "CH1".cyan(), reporting::format_values(view.channel1.values()));
    if channel2_enabled {
        println!("  {} {}", "CH2".cyan(), reporting::format_values(view.channel2.values()));
    }
}

fn run_json(args: &SignalArgs, start: u64, count: usize) -> Result<ExitCode> {
    let scope = match args.to_scope_spec() {
        Ok(scope) => scope,
        Err(e) => {
            let error = JsonError::new(error_codes::INPUT, format!("{:#}", e));
            JsonOutput::<FrameResult>::failure(vec![error], vec![]).print()?;
            return Ok(ExitCode::from(1));
        }
    };

    let warnings: Vec<JsonWarning> = validate_scope(&scope)
        .warnings
        .iter()
        .map(Into::into)
        .collect();

    let mut session = Session::new();
    let (length, display_range, channel2_enabled) = match session.generate(scope) {
        Ok(output) => {
            let (low, high) = output.display_range();
            (output.length, [low, high], output.channel2_enabled())
        }
        Err(e) => {
            JsonOutput::<FrameResult>::failure(vec![JsonError::from(&e)], warnings).print()?;
            return Ok(ExitCode::from(1));
        }
    };

    let result = FrameResult {
        length,
        display_range,
        channel2_enabled,
        frames: render_frames(&mut session, start, count),
    };
    JsonOutput::success(result, warnings).print()?;
    Ok(ExitCode::SUCCESS)
}
