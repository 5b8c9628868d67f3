//! Report emission
//!
//! Writes the two report artifacts, tabular CSV and structured JSON, from a
//! single [`Insights`] value.
//!
//! A run either replaces both files or leaves both in their prior state. Each
//! document is rendered and written to a temporary file beside its target
//! first, and the previous CSV is copied aside. Targets are only replaced once
//! every temporary is complete; if the JSON rename fails after the CSV was
//! replaced, the previous CSV is put back (or the new one removed).

pub mod structured;
pub mod tabular;

pub use structured::render_json;
pub use tabular::{render_csv, report_rows, ReportRow, TOP_TASKS_SEPARATOR};

use crate::analytics::{generate_insights, Insights};
use crate::config::{InsightsConfig, PathsConfig};
use crate::error::Result;
use crate::ingest::read_event_log;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// Output locations for one run.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
}

impl ReportPaths {
    pub fn from_config(paths: &PathsConfig) -> Self {
        Self {
            csv: paths.report_csv(),
            json: paths.report_json(),
        }
    }
}

fn parent_dir(target: &Path) -> &Path {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Write `bytes` to a temporary file in the target's directory.
fn stage(target: &Path, bytes: &[u8]) -> Result<NamedTempFile> {
    let dir = parent_dir(target);
    std::fs::create_dir_all(dir)?;

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(bytes)?;
    staged.as_file().sync_all()?;
    Ok(staged)
}

/// Copy the current contents of `target`, if any, beside it.
fn keep_previous(target: &Path) -> Result<Option<NamedTempFile>> {
    if !target.is_file() {
        return Ok(None);
    }
    let saved = NamedTempFile::new_in(parent_dir(target))?;
    std::fs::copy(target, saved.path())?;
    Ok(Some(saved))
}

/// Put `target` back the way it was before this run.
fn roll_back(target: &Path, previous: Option<NamedTempFile>) {
    let restored = match previous {
        Some(saved) => saved.persist(target).map(drop).map_err(|e| e.error),
        None => std::fs::remove_file(target),
    };
    if let Err(e) = restored {
        warn!(path = %target.display(), error = %e, "Failed to restore previous report");
    }
}

/// Write both report files for `insights`.
pub fn write_reports(insights: &Insights, paths: &ReportPaths) -> Result<()> {
    let csv = render_csv(insights)?;
    let json = render_json(insights)?;

    let staged_csv = stage(&paths.csv, &csv)?;
    let staged_json = stage(&paths.json, json.as_bytes())?;
    let previous_csv = keep_previous(&paths.csv)?;

    staged_csv.persist(&paths.csv)?;
    if let Err(e) = staged_json.persist(&paths.json) {
        roll_back(&paths.csv, previous_csv);
        return Err(e.into());
    }

    info!(
        csv = %paths.csv.display(),
        json = %paths.json.display(),
        "Reports written"
    );
    Ok(())
}

/// Read the event log, compute insights and write both reports.
///
/// Nothing is written when the log cannot be read or parsed.
pub fn generate_report(
    event_log: &Path,
    paths: &ReportPaths,
    config: &InsightsConfig,
) -> Result<Insights> {
    info!(log = %event_log.display(), "Generating insights report");
    let events = read_event_log(event_log)?;
    let insights = generate_insights(&events, config);
    write_reports(&insights, paths)?;
    Ok(insights)
}
