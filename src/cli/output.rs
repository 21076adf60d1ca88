//! CLI output formatting.
//!
//! Formatting is kept apart from printing so it can be tested.

use crate::scene::{SceneReport, TIMELINE};
use crate::surface::MemorySurface;

/// Print version information.
pub fn print_version() {
    println!(
        "tinsel {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("TINSEL_GIT_HASH")
    );
}

/// Print help message.
pub fn print_help() {
    println!(
        r"tinsel - animated holiday card

USAGE:
    tinsel <COMMAND> [OPTIONS]

COMMANDS:
    render                      Play the card headlessly and print the decorations
        -c, --config <FILE>     YAML configuration (seed, reveal.iteration_cap)
        --seed <N>              Override the configured seed
        --page                  Print the whole document instead
        --json                  Print a JSON timeline report instead
        -v, --verbose           Enable debug logging (or set RUST_LOG)

    timeline                    Print the reveal timeline

    help                        Show this help message
    version                     Show version information

EXAMPLES:
    tinsel render --seed 2024
    tinsel render --config card.yaml --json
"
    );
}

/// Format the reveal timeline as a table.
#[must_use]
pub fn format_timeline() -> String {
    TIMELINE
        .iter()
        .map(|(offset, action)| format!("T+{offset:>6}ms  {action}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the decoration fragments, one per line.
#[must_use]
pub fn format_markup(surface: &MemorySurface) -> String {
    surface.fragments().join("\n")
}

/// One-line summary for stderr.
#[must_use]
pub fn format_summary(report: &SceneReport) -> String {
    format!(
        "seed {} | {} actions | {} ornaments | {} lights | {} markers cleared",
        report.seed,
        report.fired.len(),
        report.stats.ornaments,
        report.stats.lights,
        report.stats.markers_cleared
    )
}
