// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use vttscrub::app_config::{self, Config};
use vttscrub::app_controller::Controller;
use vttscrub::file_utils::FileManager;

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

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for vttscrub
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct CleanArgs {
    /// Caption file, directory of .vtt files, or "-" for stdin
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Force overwrite of existing transcripts
    #[arg(short, long)]
    force_overwrite: bool,

    /// Directory to write transcripts to (default: next to each input)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Number of recent lines a new line is compared against
    #[arg(short, long)]
    window: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Print the transcript to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,
}

/// vttscrub - readable transcripts from auto-generated WebVTT captions
#[derive(Parser, Debug)]
#[command(name = "vttscrub")]
#[command(version)]
#[command(about = "Turn auto-generated WebVTT captions into a deduplicated transcript")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "vttscrub strips timing, cue numbers and inline tags from WebVTT captions and \
collapses the rolling, repeated lines that automatic captioning produces.

EXAMPLES:
    vttscrub talk.en.vtt                  # Writes talk.en.txt next to the input
    vttscrub -f talk.en.vtt               # Overwrite an existing transcript
    vttscrub --stdout talk.en.vtt         # Print instead of writing
    cat talk.vtt | vttscrub -             # Clean stdin to stdout
    vttscrub -o transcripts/ captions/    # Clean a whole directory
    vttscrub -w 40 talk.vtt               # Compare against the last 40 lines
    vttscrub completions bash > vttscrub.bash
    vttscrub ./completions                # A caption file named like the subcommand

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    args: CleanArgs,
}

// @struct: Custom logger implementation, filtered by log::max_level
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌ ", "1;31"),
            Level::Warn => ("🚧 ", "1;33"),
            Level::Info => (" ", "1;32"),
            Level::Debug => ("🔍 ", "1;36"),
            Level::Trace => ("📋 ", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, color) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Start at info; the level is adjusted once options and config are known
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "vttscrub", &mut std::io::stdout());
            Ok(())
        }
        None => run_clean(cli.args).await,
    }
}

async fn run_clean(options: CleanArgs) -> Result<()> {
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let input_path = options.input_path.clone().ok_or_else(|| {
        anyhow!("INPUT_PATH is required when no subcommand is specified")
    })?;

    let config = load_config(&options)?;
    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let controller = Controller::with_config(config)
        .context("Configuration validation failed")?;

    if input_path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read captions from stdin")?;
        print_transcript(&controller, &content)?;
        return Ok(());
    }

    if input_path.is_file() {
        if options.stdout {
            let content = FileManager::read_to_string(&input_path)?;
            print_transcript(&controller, &content)?;
            return Ok(());
        }

        let output_dir = options.output_dir.clone().unwrap_or_else(|| {
            input_path.parent().unwrap_or(Path::new(".")).to_path_buf()
        });
        controller.run(input_path, output_dir, options.force_overwrite).await?;
    } else if input_path.is_dir() {
        if options.stdout {
            return Err(anyhow!("--stdout only works with a single input file"));
        }

        let summary = controller
            .run_folder(input_path, options.output_dir.clone(), options.force_overwrite)
            .await?;
        if summary.failed > 0 {
            return Err(anyhow!("{} file(s) could not be cleaned", summary.failed));
        }
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", input_path));
    }

    Ok(())
}

// Load the config file or create a default one, then apply CLI overrides
fn load_config(options: &CleanArgs) -> Result<Config> {
    let config_path = &options.config_path;

    let mut config = if Path::new(config_path).exists() {
        Config::load(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        config.save(config_path)?;
        config
    };

    if let Some(window) = options.window {
        config.cleaner.recency_window = window;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    Ok(config)
}

fn print_transcript(controller: &Controller, content: &str) -> Result<()> {
    let report = controller.clean_text(content);
    info!("{}", report.stats);

    let mut stdout = std::io::stdout().lock();
    if !report.transcript.is_empty() {
        writeln!(stdout, "{}", report.transcript).context("Failed to write transcript")?;
    }
    Ok(())
}
