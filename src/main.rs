//! btox CLI
//!
//! Developer toolbox: UUIDs, hashes and nearest terminal colors, as an
//! interactive terminal UI or one-shot commands.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use btox::config::{Config, EditorCommand};
use btox::hash::digest_hex;
use btox::ids::{self, IdFormat};
use btox::logging::{LogConfig, LogTarget, default_log_file, init_logging};
use btox::matcher::{ColorMatcher, parse_hex};
use btox::report::{format_colors, format_digest, format_ids};
use btox::types::{DistanceMetric, HashAlgorithm, OutputFormat, Tool};

#[derive(Parser)]
#[command(name = "btox")]
#[command(about = "Toolbox for UUIDs, hashes and terminal colors")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Editor command for external edits (default: $VISUAL, $EDITOR, vi)
    #[arg(long, global = true)]
    editor: Option<String>,

    /// Log file for the interactive session (default: user cache dir)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive interface (the default)
    Tui {
        /// Open a tool directly
        #[arg(long, value_enum)]
        tool: Option<ToolArg>,
    },

    /// Generate version 4 UUIDs
    Uuid {
        /// How many to generate
        #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=100))]
        count: u8,

        /// Omit the hyphens
        #[arg(long)]
        no_dash: bool,

        /// Uppercase hex digits
        #[arg(long)]
        upper: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Hash text (reads stdin when TEXT is omitted)
    Hash {
        /// Text to hash
        text: Option<String>,

        /// Digest algorithm
        #[arg(short, long, value_enum, default_value = "md5")]
        algorithm: HashAlgorithmArg,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Find the terminal 256 colors nearest to a hex color
    Color {
        /// Hex color: RRGGBB or RGB, optional leading #
        hex: String,

        /// Color-difference formula
        #[arg(short, long, value_enum, default_value = "ciede2000")]
        metric: MetricArg,

        /// How many matches to list
        #[arg(short = 'n', long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
        count: u8,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

// ============================================================================
// ARGUMENT ENUMS
// ============================================================================

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ToolArg {
    Uuid,
    Hash,
    Color,
}

impl From<ToolArg> for Tool {
    fn from(arg: ToolArg) -> Self {
        match arg {
            ToolArg::Uuid => Tool::Uuid,
            ToolArg::Hash => Tool::Hash,
            ToolArg::Color => Tool::Color,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum HashAlgorithmArg {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    #[value(name = "sha512-224")]
    Sha512_224,
    #[value(name = "sha512-256")]
    Sha512_256,
    Sha512,
}

impl From<HashAlgorithmArg> for HashAlgorithm {
    fn from(arg: HashAlgorithmArg) -> Self {
        match arg {
            HashAlgorithmArg::Md5 => HashAlgorithm::Md5,
            HashAlgorithmArg::Sha1 => HashAlgorithm::Sha1,
            HashAlgorithmArg::Sha224 => HashAlgorithm::Sha224,
            HashAlgorithmArg::Sha256 => HashAlgorithm::Sha256,
            HashAlgorithmArg::Sha384 => HashAlgorithm::Sha384,
            HashAlgorithmArg::Sha512_224 => HashAlgorithm::Sha512_224,
            HashAlgorithmArg::Sha512_256 => HashAlgorithm::Sha512_256,
            HashAlgorithmArg::Sha512 => HashAlgorithm::Sha512,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum MetricArg {
    Rgb,
    Cie76,
    Cie94,
    Ciede2000,
}

impl From<MetricArg> for DistanceMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Rgb => DistanceMetric::Rgb,
            MetricArg::Cie76 => DistanceMetric::Cie76,
            MetricArg::Cie94 => DistanceMetric::Cie94,
            MetricArg::Ciede2000 => DistanceMetric::Ciede2000,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let log = LogConfig::from_verbosity(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Tui { tool: None });
    if !matches!(command, Commands::Tui { .. }) {
        init_stderr_logging(&log);
    }

    let result = match command {
        Commands::Tui { tool } => cmd_tui(tool.map(Tool::from), cli.editor, cli.log_file, log),
        Commands::Uuid {
            count,
            no_dash,
            upper,
            format,
        } => cmd_uuid(count, !no_dash, upper, format.into()),
        Commands::Hash {
            text,
            algorithm,
            format,
        } => cmd_hash(text, algorithm.into(), format.into()),
        Commands::Color {
            hex,
            metric,
            count,
            format,
        } => cmd_color(&hex, metric.into(), count, format.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// LOGGING
// ============================================================================

fn init_stderr_logging(log: &LogConfig) {
    if let Err(e) = init_logging(log) {
        eprintln!("Warning: logging disabled: {}", e);
    }
}

/// The interactive session owns the terminal, so it only ever logs to a file.
fn tui_log_target(log_file: Option<PathBuf>) -> LogTarget {
    match log_file.or_else(default_log_file) {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Off,
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

fn cmd_tui(
    start: Option<Tool>,
    editor: Option<String>,
    log_file: Option<PathBuf>,
    log: LogConfig,
) -> Result<(), String> {
    let log = log.with_target(tui_log_target(log_file));
    // A log file that cannot be opened leaves logging off; never fall back to the screen.
    let _ = init_logging(&log);

    let config = Config {
        editor: EditorCommand::from_env(editor.as_deref()),
        log,
        start,
    };
    tracing::info!(editor = %config.editor.display(), ?start, "starting interactive session");

    btox::tui::run(config).map_err(|e| format!("Terminal error: {}", e))
}

fn cmd_uuid(count: u8, dash: bool, upper: bool, format: OutputFormat) -> Result<(), String> {
    let ids = ids::generate_v4(usize::from(count), IdFormat { dash, upper });
    print!("{}", format_ids(&ids, format));
    Ok(())
}

fn cmd_hash(
    text: Option<String>,
    algorithm: HashAlgorithm,
    format: OutputFormat,
) -> Result<(), String> {
    let data = match text {
        Some(text) => text.into_bytes(),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| format!("Failed to read stdin: {}", e))?;
            buf
        }
    };
    let digest = digest_hex(algorithm, &data);
    print!("{}", format_digest(algorithm, &digest, format));
    Ok(())
}

fn cmd_color(
    hex: &str,
    metric: DistanceMetric,
    count: u8,
    format: OutputFormat,
) -> Result<(), String> {
    let matcher = ColorMatcher::default();
    let matched = parse_hex(hex).is_some();
    let colors = matcher.search(hex, metric, usize::from(count));
    tracing::debug!(hex, matched, results = colors.len(), "color search");
    print!("{}", format_colors(hex, metric, matched, &colors, format));
    Ok(())
}
