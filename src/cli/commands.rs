//! CLI command handlers.

use std::path::Path;
use std::process::ExitCode;

use super::args::OutputFormat;
use super::output::{format_markup, format_summary, format_timeline, print_help, print_version};
use super::{Args, Command};
use crate::config::CardConfig;
use crate::error::CardResult;
use crate::scene::SceneController;
use crate::surface::MemorySurface;

/// Main CLI entry point.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Render {
            config_path,
            seed_override,
            format,
            verbose: _,
        } => render(config_path.as_deref(), seed_override, format),
        Command::Timeline => {
            println!("{}", format_timeline());
            ExitCode::SUCCESS
        }
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Resolve configuration: file (or defaults), then the seed override.
///
/// # Errors
///
/// Returns error if the file cannot be loaded.
pub fn resolve_config(path: Option<&Path>, seed_override: Option<u64>) -> CardResult<CardConfig> {
    let mut config = match path {
        Some(path) => CardConfig::load(path)?,
        None => CardConfig::default(),
    };

    if seed_override.is_some() {
        config.seed = seed_override;
    }

    Ok(config)
}

/// Play the full timeline against the headless card skeleton.
///
/// # Errors
///
/// Returns the first error raised by a timeline action.
pub fn render_card(config: &CardConfig) -> CardResult<SceneController<MemorySurface>> {
    let mut controller = SceneController::new(MemorySurface::card_skeleton(), config);
    controller.run_to_completion()?;
    Ok(controller)
}

fn render(path: Option<&Path>, seed_override: Option<u64>, format: OutputFormat) -> ExitCode {
    let result = resolve_config(path, seed_override).and_then(|config| {
        let controller = render_card(&config)?;
        let report = controller.report();
        let body = match format {
            OutputFormat::Markup => format_markup(controller.surface()),
            OutputFormat::Page => controller.surface().to_html(),
            OutputFormat::Json => report.to_json()?,
        };
        Ok((body, report))
    });

    match result {
        Ok((body, report)) => {
            println!("{body}");
            eprintln!("{}", format_summary(&report));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
