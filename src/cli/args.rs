//! CLI argument parsing.
//!
//! Parses from any iterator of strings so the parser can be tested without
//! touching `std::env::args()`.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// What `render` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Decoration fragments, one per line.
    #[default]
    Markup,
    /// The whole headless document.
    Page,
    /// JSON timeline report.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play the timeline headlessly and print the result.
    Render {
        /// Optional YAML configuration.
        config_path: Option<PathBuf>,
        /// Optional seed override.
        seed_override: Option<u64>,
        /// Output format.
        format: OutputFormat,
        /// Enable debug logging.
        verbose: bool,
    },
    /// Print the reveal timeline.
    Timeline,
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Whether debug logging was requested.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        matches!(self.command, Command::Render { verbose: true, .. })
    }

    fn parse_from_vec(args: &[String]) -> Self {
        let Some(first) = args.get(1) else {
            return Self {
                command: Command::Help,
            };
        };

        let command = match first.as_str() {
            "render" => Self::parse_render_command(&args[2..]),
            "timeline" => Command::Timeline,
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'render' command options.
    fn parse_render_command(rest: &[String]) -> Command {
        let mut config_path = None;
        let mut seed_override = None;
        let mut format = OutputFormat::default();
        let mut verbose = false;

        let mut i = 0;
        while i < rest.len() {
            match rest[i].as_str() {
                "-c" | "--config" => {
                    if let Some(path) = rest.get(i + 1) {
                        config_path = Some(PathBuf::from(path));
                        i += 2;
                    } else {
                        eprintln!("Error: '--config' requires a path");
                        return Command::Help;
                    }
                }
                "--seed" => match rest.get(i + 1).map(|s| s.parse::<u64>()) {
                    Some(Ok(seed)) => {
                        seed_override = Some(seed);
                        i += 2;
                    }
                    _ => {
                        eprintln!("Error: '--seed' requires an unsigned integer");
                        return Command::Help;
                    }
                },
                "--json" => {
                    format = OutputFormat::Json;
                    i += 1;
                }
                "--page" => {
                    format = OutputFormat::Page;
                    i += 1;
                }
                "-v" | "--verbose" => {
                    verbose = true;
                    i += 1;
                }
                unknown => {
                    eprintln!("Warning: ignoring unknown option '{unknown}'");
                    i += 1;
                }
            }
        }

        Command::Render {
            config_path,
            seed_override,
            format,
            verbose,
        }
    }
}
