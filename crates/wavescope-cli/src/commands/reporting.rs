//! Shared human-readable output helpers for the commands.

use colored::Colorize;
use wavescope_dsp::{ChannelOutput, SpectrumResult};
use wavescope_spec::{SignalSpec, ValidationResult, ValidationWarning};

/// Number of values shown per line by [`format_values`].
pub const MAX_INLINE_VALUES: usize = 16;

/// One-line description of a channel's request.
pub fn describe_signal(spec: &SignalSpec) -> String {
    format!(
        "{} f={} A={} N={} ({})",
        spec.waveform,
        spec.frequency,
        spec.amplitude,
        spec.sample_count,
        spec.sampling_mode.as_str()
    )
}

/// Prints validation errors and warnings with their codes.
pub fn print_validation(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for error in &result.errors {
            let path_info = error
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "x".red(),
                error.code.code(),
                path_info.dimmed(),
                error.message
            );
        }
    }

    print_warnings(&result.warnings);
}

/// Prints validation warnings with their codes.
pub fn print_warnings(warnings: &[ValidationWarning]) {
    if warnings.is_empty() {
        return;
    }
    println!("\n{}", "Warnings:".yellow().bold());
    for warning in warnings {
        let path_info = warning
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "!".yellow(),
            warning.code.code(),
            path_info.dimmed(),
            warning.message
        );
    }
}

/// Prints the summary block for one channel.
pub fn print_channel(label: &str, channel: &ChannelOutput) {
    let Some(ref spec) = channel.spec else {
        println!("{} {}", format!("{}:", label).cyan().bold(), "disabled".dimmed());
        return;
    };

    println!("{} {}", format!("{}:", label).cyan().bold(), describe_signal(spec));
    let hash = channel.series.sample_hash();
    println!("  {:<12} {}", "hash".dimmed(), &hash[..16]);
    println!("  {:<12} {:.6}", "peak".dimmed(), channel.series.peak());
    println!("  {:<12} {:.6}", "energy".dimmed(), channel.series.energy());
    match (channel.spectrum.peak_bin(), channel.spectrum.peak_frequency()) {
        (Some(bin), Some(freq)) => println!(
            "  {:<12} bin {} ({} Hz, |X| = {:.4})",
            "peak bin".dimmed(),
            bin,
            freq,
            channel.spectrum.magnitude[bin]
        ),
        _ => println!("  {:<12} {}", "peak bin".dimmed(), "none".dimmed()),
    }
}

/// Prints the first `rows` bins of a spectrum as a table.
pub fn print_spectrum_table(spectrum: &SpectrumResult, rows: usize) {
    if rows == 0 || spectrum.is_empty() {
        return;
    }
    println!(
        "  {:>6} {:>10} {:>12} {:>10}",
        "bin".dimmed(),
        "freq".dimmed(),
        "magnitude".dimmed(),
        "phase".dimmed()
    );
    for k in 0..rows.min(spectrum.len()) {
        println!(
            "  {:>6} {:>10.3} {:>12.6} {:>10.4}",
            k, spectrum.frequencies[k], spectrum.magnitude[k], spectrum.phase[k]
        );
    }
    if spectrum.len() > rows {
        println!("  {}", format!("... {} more bins", spectrum.len() - rows).dimmed());
    }
}

/// Formats up to [`MAX_INLINE_VALUES`] samples on one line.
pub fn format_values(values: &[f64]) -> String {
    let shown: Vec<String> = values
        .iter()
        .take(MAX_INLINE_VALUES)
        .map(|v| format!("{:.4}", v))
        .collect();
    let mut line = shown.join(" ");
    if values.len() > MAX_INLINE_VALUES {
        line.push_str(&format!(" ... (+{})", values.len() - MAX_INLINE_VALUES));
    }
    line
}
