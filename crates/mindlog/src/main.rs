//! mindlog - journal statistics from the command line
//!
//! Loads a journal file (an export document or a saved state snapshot) and
//! prints the derived views:
//! - Streak statistics
//! - Insights (mood trend, average mood, entry distribution)
//! - The filtered history timeline
//! - The configured prompts

mod render;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::{Parser, Subcommand};
use mindlog_api::EntryKind;
use mindlog_config::{JournalConfig, load_config_or_default};
use mindlog_core::{HistoryFilter, Insights, Journal, filter_history};
use mindlog_store::{JournalFile, import_document};
use mindlog_util::{default_config_path, is_mock_time_active};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// mindlog - Personal journal streaks and insights
#[derive(Parser, Debug)]
#[command(name = "mindlog")]
#[command(about = "Streaks, insights and history for a personal journal", long_about = None)]
struct Args {
    /// Configuration file path (default: ~/.config/mindlog/config.toml)
    #[arg(short, long, default_value_os_t = default_config_path())]
    config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the streak statistics as JSON
    Stats {
        /// Export document or state snapshot
        file: PathBuf,
    },

    /// Print streaks, average mood, mood trend and entry distribution
    Insights {
        /// Export document or state snapshot
        file: PathBuf,
    },

    /// Print the entry timeline, newest first
    History {
        /// Export document or state snapshot
        file: PathBuf,

        /// Only show entries of this type (daily, weekly, monthly, yearly)
        #[arg(short, long)]
        kind: Option<EntryKind>,

        /// Only show entries whose answers contain this text
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Print the configured questions and ratings
    Prompts {
        /// Only show prompts for this type
        #[arg(short, long)]
        kind: Option<EntryKind>,
    },
}

/// Load a journal from an export document or a state snapshot
fn load_journal(path: &Path, config: &JournalConfig, now: &DateTime<Local>) -> Result<Journal> {
    let file = JournalFile::read(path)
        .with_context(|| format!("Failed to load journal file {:?}", path))?;

    let journal = match file {
        JournalFile::Export(document) => {
            let entries = import_document(document)
                .with_context(|| format!("Failed to import {:?}", path))?;
            Journal::from_entries(entries, now)
        }
        JournalFile::Snapshot(snapshot) => Journal::restore(snapshot, now),
    };

    info!(
        path = %path.display(),
        entry_count = journal.entries().len(),
        "Journal loaded"
    );

    Ok(journal.with_app_name(config.settings.app_name.clone()))
}

fn run(args: Args) -> Result<()> {
    let config = load_config_or_default(&args.config)
        .with_context(|| format!("Failed to load config from {:?}", args.config))?;
    debug!(config_path = %args.config.display(), "Configuration loaded");

    let now = mindlog_util::now();
    if is_mock_time_active() {
        warn!(now = %now, "Using mock time");
    }

    match args.command {
        Command::Stats { file } => {
            let journal = load_journal(&file, &config, &now)?;
            let json = serde_json::to_string_pretty(journal.stats())
                .context("Failed to serialize stats")?;
            println!("{}", json);
        }
        Command::Insights { file } => {
            let journal = load_journal(&file, &config, &now)?;
            let insights =
                Insights::compute(journal.entries(), &now, config.settings.mood_trend_days);
            print!("{}", render::insights(&insights));
        }
        Command::History { file, kind, search } => {
            let journal = load_journal(&file, &config, &now)?;
            let filter = HistoryFilter { kind, search };
            let entries = filter_history(journal.entries(), &filter);
            print!("{}", render::history(&entries, &config, &now));
        }
        Command::Prompts { kind } => {
            let kinds: Vec<EntryKind> = match kind {
                Some(kind) => vec![kind],
                None => EntryKind::ALL.to_vec(),
            };
            print!("{}", render::prompts(&config, &kinds));
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays machine-readable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    debug!(version = env!("CARGO_PKG_VERSION"), "mindlog starting");

    run(args)
}
