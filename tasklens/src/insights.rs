//! tasklens-insights - generate the behavioral insights report
//!
//! Reads the event log, computes insights and writes the CSV and JSON
//! reports. Paths default to the configured (or XDG) locations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tasklens_core::format::{format_percent, format_score, format_window_opt};
use tasklens_core::ingest::read_event_log;
use tasklens_core::report::{generate_report, render_json, ReportPaths};
use tasklens_core::{generate_insights, Config, Insights};

#[derive(Parser, Debug)]
#[command(name = "tasklens-insights")]
#[command(about = "Generate behavioral insights from a task event log")]
#[command(version)]
struct Args {
    /// Event log to read (default: configured event log)
    #[arg(long)]
    log: Option<PathBuf>,

    /// Where to write the tabular CSV report
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Where to write the structured JSON report
    #[arg(long)]
    json: Option<PathBuf>,

    /// Output format on stdout: text (default), json or none
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Compute insights without writing report files
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if !matches!(args.format.as_str(), "text" | "json" | "none") {
        anyhow::bail!(
            "Unknown output format: {}. Use 'text', 'json' or 'none'",
            args.format
        );
    }

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard =
        tasklens_core::logging::init(&config.logging).context("failed to initialize logging")?;

    let log_path = args.log.clone().unwrap_or_else(|| config.paths.event_log());
    let defaults = ReportPaths::from_config(&config.paths);
    let paths = ReportPaths {
        csv: args.csv.clone().unwrap_or(defaults.csv),
        json: args.json.clone().unwrap_or(defaults.json),
    };

    tracing::info!(
        log = %log_path.display(),
        dry_run = args.dry_run,
        "tasklens-insights starting"
    );

    let insights = if args.dry_run {
        let events = read_event_log(&log_path)
            .with_context(|| format!("failed to read event log {}", log_path.display()))?;
        generate_insights(&events, &config.insights)
    } else {
        generate_report(&log_path, &paths, &config.insights)
            .with_context(|| format!("failed to generate insights from {}", log_path.display()))?
    };

    match args.format.as_str() {
        "json" => print!("{}", render_json(&insights)?),
        "text" => {
            print_text(&insights);
            if !args.dry_run {
                println!();
                println!("Insights generated and saved.");
                println!("  CSV:  {}", paths.csv.display());
                println!("  JSON: {}", paths.json.display());
            }
        }
        _ => {}
    }

    Ok(())
}

fn print_text(insights: &Insights) {
    println!("TASK INSIGHTS");
    println!(
        "   Events:          {} ({} completed, {} skipped)",
        insights.total_events, insights.completed, insights.skipped
    );

    if insights.is_degenerate() {
        println!("   No completed or skipped tasks found.");
    }

    println!(
        "   Completion rate: {}",
        format_percent(insights.overall_completion_rate)
    );
    match insights.best_window_rate {
        Some(rate) => println!(
            "   Best window:     {} at {}",
            format_window_opt(insights.best_time_window),
            format_percent(rate)
        ),
        None => println!(
            "   Best window:     {}",
            format_window_opt(insights.best_time_window)
        ),
    }
    println!(
        "   Productivity:    {}",
        format_score(insights.weekly_productivity_score)
    );

    if !insights.top_tasks.is_empty() {
        println!();
        println!("TOP TASKS");
        for (i, task) in insights.top_tasks.iter().enumerate() {
            println!("   {}. {}", i + 1, task);
        }
    }

    if !insights.suggestions.is_empty() {
        println!();
        println!("SUGGESTIONS");
        for suggestion in &insights.suggestions {
            println!("   - {}", suggestion);
        }
    }
}
