//! tasklens-log - append one event to the task event log

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use clap::Parser;
use tasklens_core::ingest::parse_timestamp;
use tasklens_core::{Config, EventLogger, EventRecord};

#[derive(Parser, Debug)]
#[command(name = "tasklens-log")]
#[command(about = "Append a task event to the event log")]
#[command(version)]
struct Args {
    /// Event log to append to (default: configured event log)
    #[arg(long)]
    log: Option<PathBuf>,

    /// Task identifier
    #[arg(long)]
    task_id: String,

    /// Task category (e.g. study, exercise, relax)
    #[arg(long)]
    task_type: String,

    /// What happened: completed, skipped, or any other label
    #[arg(long)]
    action: String,

    /// User identifier
    #[arg(long, default_value = "u1")]
    user_id: String,

    /// When the event happened (ISO 8601). Defaults to now.
    #[arg(long)]
    time: Option<String>,

    /// When the task was finished (ISO 8601)
    #[arg(long)]
    completed_at: Option<String>,

    /// Duration in minutes
    #[arg(long)]
    duration: Option<u32>,

    /// Free-form metadata, stored verbatim
    #[arg(long, default_value = "{}")]
    metadata: String,
}

/// Reject timestamps the insights engine would fail on later.
fn checked_time(label: &str, value: &str) -> Result<String> {
    if parse_timestamp(value).is_none() {
        anyhow::bail!("Invalid {} timestamp: {:?}", label, value);
    }
    Ok(value.trim().to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard =
        tasklens_core::logging::init(&config.logging).context("failed to initialize logging")?;

    let timestamp = match &args.time {
        Some(time) => checked_time("event", time)?,
        None => Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false),
    };
    let completed_at = match &args.completed_at {
        Some(time) => checked_time("completed_at", time)?,
        None => String::new(),
    };

    let record = EventRecord {
        timestamp,
        user_id: args.user_id,
        task_id: args.task_id,
        task_type: args.task_type,
        action: args.action,
        completed_at,
        duration_min: args.duration.map(|d| d.to_string()).unwrap_or_default(),
        metadata: args.metadata,
    };

    let log_path = args.log.unwrap_or_else(|| config.paths.event_log());
    let logger = EventLogger::new(&log_path);
    logger
        .append(&record)
        .with_context(|| format!("failed to append to {}", log_path.display()))?;

    println!(
        "Appended event {} ({}, {}) to {}",
        record.task_id,
        record.task_type,
        record.action,
        log_path.display()
    );
    Ok(())
}
