//! CLI argument definitions for the Wavescope command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser, Subcommand};
use wavescope_cli::input::SignalArgs;

/// Largest harmonic count accepted by `series`.
pub(crate) const MAX_TERMS: u64 = 50;

/// Wavescope - Waveform synthesis and spectral analysis
#[derive(Parser)]
#[command(name = "wavescope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Synthesize one or two channels and print their spectra
    Generate {
        #[command(flatten)]
        signal: SignalArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,

        /// Include negative-frequency bins in JSON output
        #[arg(long)]
        full: bool,

        /// Spectrum rows to print per channel
        #[arg(long, default_value_t = 8)]
        rows: usize,

        /// Label frequency bins with the sample rate implied by the time base
        #[arg(long)]
        rate_from_time: bool,
    },

    /// Render oscilloscope animation frames (circularly shifted channels)
    Frame {
        #[command(flatten)]
        signal: SignalArgs,

        /// First frame number to render
        #[arg(long, default_value_t = 0)]
        frame: u64,

        /// Number of consecutive frames to render
        #[arg(long, default_value_t = 1)]
        count: usize,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a scope config or channel flags without synthesizing
    Validate {
        #[command(flatten)]
        signal: SignalArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Compare waveforms with their truncated Fourier series
    Series {
        #[command(flatten)]
        signal: SignalArgs,

        /// Number of non-zero harmonics to sum (1-50)
        #[arg(
            short,
            long,
            default_value_t = 5,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_TERMS)
        )]
        terms: usize,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Enter channel settings at console prompts, then generate
    Interactive {
        /// Spectrum rows to print per channel
        #[arg(long, default_value_t = 8)]
        rows: usize,

        /// Animation frames to print after generating
        #[arg(long, default_value_t = 0)]
        frames: usize,
    },
}
