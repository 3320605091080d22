// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use intuitus::app_config::{self, Config};
use intuitus::markers::{MarkerParser, ScriptStats, available_markers};
use intuitus::render;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// Output format for parsed scripts
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ParseFormat {
    /// Script text reassembled from segments
    Plain,
    /// Markers highlighted with their icon
    Highlight,
    /// Segments as JSON
    Json,
}

/// Output format for listings
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ListFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a script and print its segments
    Parse {
        /// Script file, or '-' for stdin
        #[arg(value_name = "SCRIPT")]
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "highlight")]
        format: ParseFormat,

        /// Disable ANSI colors in highlighted output
        #[arg(long)]
        no_color: bool,
    },

    /// List the recognized markers
    Markers {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ListFormat,
    },

    /// Show word, marker and pause totals for a script
    Stats {
        /// Script file, or '-' for stdin
        #[arg(value_name = "SCRIPT")]
        input: PathBuf,

        /// Reading speed in words per minute (defaults to the configured speed)
        #[arg(short, long)]
        wpm: Option<u32>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ListFormat,
    },

    /// Generate shell completions for intuitus
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Intuitus - teleprompter script markers
///
/// Parses teleprompter scripts annotated with bracketed markers such as
/// [PAUSA 3s] or [SONREÍR].
#[derive(Parser, Debug)]
#[command(name = "intuitus")]
#[command(version)]
#[command(about = "Teleprompter script marker tool")]
#[command(long_about = "Intuitus parses teleprompter scripts and their expression markers.

EXAMPLES:
    intuitus parse guion.txt                 # Highlight markers in a script
    intuitus parse -f json guion.txt         # Print segments as JSON
    cat guion.txt | intuitus parse -         # Read the script from stdin
    intuitus markers                         # List available markers
    intuitus stats --wpm 160 guion.txt       # Estimate reading time
    intuitus completions bash > intuitus.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // The logger accepts everything; the effective level is set via set_max_level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(cmd_log_level) = &cli.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "intuitus", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load_or_create(&cli.config_path)?;

    // Command line level wins over the configured one
    if cli.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    match cli.command {
        Commands::Parse { input, format, no_color } => {
            run_parse(&input, format, config.output.color && !no_color)
        }
        Commands::Markers { format } => run_markers(format),
        Commands::Stats { input, wpm, format } => {
            let wpm = wpm.unwrap_or_else(|| config.teleprompter.settings().speed_wpm);
            run_stats(&input, wpm, format)
        }
        Commands::Completions { .. } => Ok(()),
    }
}

// @reads: Script from a file, or stdin when the path is '-'
fn read_script(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut script = String::new();
        std::io::stdin()
            .read_to_string(&mut script)
            .context("Failed to read script from stdin")?;
        return Ok(script);
    }

    debug!("Reading script: {:?}", input);
    std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read script file: {:?}", input))
}

fn run_parse(input: &Path, format: ParseFormat, color: bool) -> Result<()> {
    let script = read_script(input)?;
    let segments = MarkerParser::parse(&script);

    let output = match format {
        ParseFormat::Plain => render::render_plain(&segments),
        ParseFormat::Highlight => render::render_highlighted(&segments, color),
        ParseFormat::Json => {
            serde_json::to_string_pretty(&segments).context("Failed to serialize segments")?
        }
    };

    println!("{}", output);
    Ok(())
}

fn run_markers(format: ListFormat) -> Result<()> {
    let markers = available_markers();

    match format {
        ListFormat::Text => print!("{}", render::render_markers_help(&markers)),
        ListFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&markers).context("Failed to serialize markers")?
        ),
    }
    Ok(())
}

fn run_stats(input: &Path, wpm: u32, format: ListFormat) -> Result<()> {
    let script = read_script(input)?;
    let stats = ScriptStats::from_segments(&MarkerParser::parse(&script));

    let report = stats.report(wpm);

    match format {
        ListFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize stats")?
        ),
        ListFormat::Text => print!("{}", render::render_stats(&report)),
    }
    Ok(())
}
