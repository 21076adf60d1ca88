//! CLI module for tinsel.
//!
//! All CLI logic lives here so `main.rs` stays a thin shim and everything
//! below it can be tested.

mod args;
mod commands;
mod output;

pub use args::{Args, Command, OutputFormat};
pub use commands::{render_card, resolve_config, run_cli};
pub use output::{format_markup, format_summary, format_timeline, print_help, print_version};

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins; otherwise `verbose` selects `debug` over `warn`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "tinsel=debug" } else { "tinsel=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests;
