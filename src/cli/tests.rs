//! CLI module tests.

#![allow(clippy::unwrap_used)]

use super::args::{Args, Command, OutputFormat};
use super::commands::{render_card, resolve_config};
use super::output::{format_markup, format_summary, format_timeline};
use crate::config::CardConfig;
use std::path::PathBuf;

// ============================================================================
// Args parsing tests
// ============================================================================

#[test]
fn test_parse_no_args_shows_help() {
    let args = Args::parse_from(["tinsel"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_help_and_version() {
    for flag in ["-h", "--help", "help"] {
        assert_eq!(Args::parse_from(["tinsel", flag]).command, Command::Help);
    }
    for flag in ["-V", "--version", "version"] {
        assert_eq!(Args::parse_from(["tinsel", flag]).command, Command::Version);
    }
}

#[test]
fn test_parse_unknown_command_shows_help() {
    let args = Args::parse_from(["tinsel", "sparkle"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_timeline() {
    let args = Args::parse_from(["tinsel", "timeline"]);
    assert_eq!(args.command, Command::Timeline);
}

#[test]
fn test_parse_render_defaults() {
    let args = Args::parse_from(["tinsel", "render"]);
    assert_eq!(
        args.command,
        Command::Render {
            config_path: None,
            seed_override: None,
            format: OutputFormat::Markup,
            verbose: false,
        }
    );
    assert!(!args.verbose());
}

#[test]
fn test_parse_render_all_options() {
    let args = Args::parse_from([
        "tinsel", "render", "--config", "card.yaml", "--seed", "2024", "--json", "-v",
    ]);
    assert_eq!(
        args.command,
        Command::Render {
            config_path: Some(PathBuf::from("card.yaml")),
            seed_override: Some(2024),
            format: OutputFormat::Json,
            verbose: true,
        }
    );
    assert!(args.verbose());
}

#[test]
fn test_parse_render_page() {
    let args = Args::parse_from(["tinsel", "render", "--page"]);
    assert!(matches!(
        args.command,
        Command::Render {
            format: OutputFormat::Page,
            ..
        }
    ));
}

#[test]
fn test_parse_render_bad_seed_shows_help() {
    let args = Args::parse_from(["tinsel", "render", "--seed", "many"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_render_missing_config_path_shows_help() {
    let args = Args::parse_from(["tinsel", "render", "-c"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_render_ignores_unknown_option() {
    let args = Args::parse_from(["tinsel", "render", "--snow", "--seed", "3"]);
    assert!(matches!(
        args.command,
        Command::Render {
            seed_override: Some(3),
            ..
        }
    ));
}

// ============================================================================
// Command tests
// ============================================================================

#[test]
fn test_resolve_config_seed_override() {
    let config = resolve_config(None, Some(77)).unwrap();
    assert_eq!(config.seed, Some(77));
    assert_eq!(config.reveal.iteration_cap, 100);
}

#[test]
fn test_resolve_config_missing_file() {
    let result = resolve_config(Some(std::path::Path::new("/nonexistent/card.yaml")), None);
    assert!(result.is_err());
}

#[test]
fn test_render_card_full_timeline() {
    let config = CardConfig::builder().seed(42).build();
    let controller = render_card(&config).unwrap();

    assert!(controller.is_complete());
    assert_eq!(controller.surface().fragments().len(), 150);
}

// ============================================================================
// Output tests
// ============================================================================

#[test]
fn test_format_timeline() {
    let table = format_timeline();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines[0].contains("1000ms") && lines[0].contains("reveal-root"));
    assert!(lines[7].contains("11000ms") && lines[7].contains("reveal-text"));
}

#[test]
fn test_format_markup_one_fragment_per_line() {
    let config = CardConfig::builder().seed(1).build();
    let controller = render_card(&config).unwrap();
    let markup = format_markup(controller.surface());
    assert_eq!(markup.lines().count(), 150);
    assert!(markup.lines().all(|l| l.starts_with("<div class=\"")));
}

#[test]
fn test_format_summary() {
    let config = CardConfig::builder().seed(9).build();
    let report = render_card(&config).unwrap().report();
    let summary = format_summary(&report);
    assert!(summary.contains("seed 9"));
    assert!(summary.contains("35 ornaments"));
    assert!(summary.contains("115 lights"));
}
