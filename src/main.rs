use anyhow::Context;
use clap::{Parser, Subcommand};
use roster::pipeline::{self, OutputFormat};
use roster_core::config::Config;
use roster_tui::{Content, TableView};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "roster", version, about = "Normalize and view HR roster spreadsheets")]
struct Cli {
    /// Write debug logs to <tmp>/roster-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Read configuration from this file instead of ~/.config/roster/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a roster (.xlsx, .xls, .csv) in the terminal viewer.
    View {
        file: PathBuf,
        /// Show the sheet as exported, with only the index column removed.
        #[arg(long)]
        raw: bool,
    },
    /// Normalize a roster and print it.
    Export {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Grid)]
        format: OutputFormat,
    },
    /// Pull roster rows out of a plain-text listing, normalize, and print.
    Extract {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Grid)]
        format: OutputFormat,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        init_debug_log()?;
    }

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::View { file, raw } => view(&file, raw, &config),
        Commands::Export { file, format } => {
            let normalizer = config.normalizer()?;
            let table = pipeline::load_roster(&file, &normalizer)?;
            print(&pipeline::render(&table, format, config.display.max_column_width)?)
        }
        Commands::Extract { file, format } => {
            let normalizer = config.normalizer()?;
            let table = pipeline::extract_roster(&file, &normalizer)?;
            print(&pipeline::render(&table, format, config.display.max_column_width)?)
        }
    }
}

fn view(file: &Path, raw: bool, config: &Config) -> anyhow::Result<()> {
    let title = pipeline::file_label(file);
    let loaded = config
        .normalizer()
        .context("invalid column layout")
        .and_then(|normalizer| {
            if raw {
                pipeline::load_raw(file, &normalizer).map(|t| TableView::from_raw(&title, t))
            } else {
                pipeline::load_roster(file, &normalizer)
                    .map(|t| TableView::from_canonical(&title, t))
            }
        });

    let content = Content::from_result(&title, loaded);
    let failure = match &content {
        Content::Failed { message, .. } => Some(message.clone()),
        Content::Table(_) => None,
    };

    roster_tui::run(content, config)?;

    match failure {
        Some(message) => anyhow::bail!(message),
        None => Ok(()),
    }
}

/// An explicit `--config` must load; the default location falls back to the
/// built-in defaults.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("could not load config {}", path.display())),
        None => Ok(Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %format!("{err:#}"), "config not loaded, using defaults");
            Config::defaults()
        })),
    }
}

fn print(output: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn init_debug_log() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join("roster-debug.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();
    tracing::info!(path = %path.display(), "roster debug log started");
    Ok(())
}
