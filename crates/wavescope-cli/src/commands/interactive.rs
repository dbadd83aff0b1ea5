//! Interactive command implementation
//!
//! Asks for the channel settings on the console, then generates like the
//! `generate` command and optionally plays back a few animation frames.

use anyhow::Result;
use std::io;
use std::process::ExitCode;

use super::{frame, generate, reporting};
use crate::input::prompt_scope_spec;
use crate::session::Session;
use wavescope_spec::validate_scope;

/// Run the interactive command
///
/// # Arguments
/// * `rows` - Spectrum rows to print per channel
/// * `frames` - Animation frames to print after generating
pub fn run(rows: usize, frames: usize) -> Result<ExitCode> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let scope = prompt_scope_spec(&mut input, &mut output)?;

    println!();
    let validation = validate_scope(&scope);
    reporting::print_validation(&validation);

    let mut session = Session::new();
    let result = session.generate(scope)?;
    generate::print_output(result, rows);

    if frames > 0 {
        let channel2_enabled = result.channel2_enabled();
        for view in frame::render_frames(&mut session, 0, frames) {
            frame::print_frame(&view, channel2_enabled);
        }
    }

    Ok(ExitCode::SUCCESS)
}
