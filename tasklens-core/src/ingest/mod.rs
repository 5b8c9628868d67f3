//! Ingestion of the event log
//!
//! Reads the CSV written by the event logger and turns each row into an
//! [`Event`]. Columns are located by header name, so column order and extra
//! passthrough columns do not matter.
//!
//! Validation is all-or-nothing: a single timestamp that cannot be resolved
//! to an instant fails the whole read with
//! [`Error::UnparseableTimestamp`]. Every other cell is accepted as-is.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklens_core::ingest::read_event_log;
//! use std::path::Path;
//!
//! let events = read_event_log(Path::new("user_behavior_log.csv"))?;
//! println!("{} events", events.len());
//! # Ok::<(), tasklens_core::Error>(())
//! ```

pub mod timestamp;

pub use timestamp::parse_timestamp;

use crate::error::{Error, Result};
use crate::types::{Action, Event};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Header names accepted for the event time column.
const TIME_COLUMNS: [&str; 2] = ["timestamp", "event_time"];

/// Positions of the interpreted columns within a log row.
#[derive(Debug)]
struct ColumnMap {
    event_time: usize,
    user_id: Option<usize>,
    task_id: Option<usize>,
    task_type: usize,
    action: usize,
    /// (index, header) of every column the engine does not interpret
    extra: Vec<(usize, String)>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| Error::MissingColumn {
                column: name.to_string(),
            })
        };

        let event_time = TIME_COLUMNS
            .iter()
            .find_map(|name| find(*name))
            .ok_or_else(|| Error::MissingColumn {
                column: TIME_COLUMNS[0].to_string(),
            })?;
        let task_type = require("task_type")?;
        let action = require("action")?;
        let user_id = find("user_id");
        let task_id = find("task_id");

        let interpreted = [Some(event_time), user_id, task_id, Some(task_type), Some(action)];
        let extra = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| !interpreted.contains(&Some(*i)))
            .map(|(i, h)| (i, h.trim().to_string()))
            .collect();

        Ok(Self {
            event_time,
            user_id,
            task_id,
            task_type,
            action,
            extra,
        })
    }
}

/// Cell value, or empty when the row is shorter than the header.
fn cell(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or("")
}

fn optional_cell(record: &StringRecord, index: Option<usize>) -> String {
    index.map(|i| cell(record, i).to_string()).unwrap_or_default()
}

/// Parse an event log from any reader.
///
/// A completely empty input (not even a header) yields no events.
pub fn parse_events<R: Read>(reader: R) -> Result<Vec<Event>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    let columns = ColumnMap::from_headers(&headers)?;

    let mut events = Vec::new();
    let mut first_invalid: Option<(u64, String)> = None;
    let mut invalid_rows = 0usize;

    for result in rdr.records() {
        let record = result?;
        let raw_time = cell(&record, columns.event_time);

        let Some(event_time) = parse_timestamp(raw_time) else {
            invalid_rows += 1;
            if first_invalid.is_none() {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                first_invalid = Some((line, raw_time.to_string()));
            }
            continue;
        };

        events.push(Event {
            event_time,
            user_id: optional_cell(&record, columns.user_id),
            task_id: optional_cell(&record, columns.task_id),
            task_type: cell(&record, columns.task_type).to_string(),
            action: Action::parse(cell(&record, columns.action)),
            extra: columns
                .extra
                .iter()
                .map(|(i, name)| (name.clone(), cell(&record, *i).to_string()))
                .collect(),
        });
    }

    if let Some((line, value)) = first_invalid {
        return Err(Error::UnparseableTimestamp {
            line,
            value,
            invalid_rows,
        });
    }

    debug!(events = events.len(), "Parsed event log");
    Ok(events)
}

/// Read and parse the event log at `path`.
pub fn read_event_log(path: &Path) -> Result<Vec<Event>> {
    let file = std::fs::File::open(path)?;
    let events = parse_events(file)?;
    debug!(path = %path.display(), events = events.len(), "Read event log");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TimeWindow;

    const HEADER: &str = "timestamp,user_id,task_id,task_type,action,completed_at,duration_min,metadata";

    #[test]
    fn test_parse_canonical_log() {
        let csv = format!(
            "{HEADER}\n\
             2024-01-15T09:00:00Z,u1,t1,exercise,completed,2024-01-15T09:20:00Z,20,{{}}\n\
             2024-01-15T21:00:00,u1,t2,relax,skipped,,,\n"
        );
        let events = parse_events(csv.as_bytes()).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].task_type, "exercise");
        assert_eq!(events[0].action, Action::Completed);
        assert_eq!(events[0].window(), TimeWindow::Morning);
        assert_eq!(events[0].user_id, "u1");
        assert_eq!(events[0].task_id, "t1");
        assert_eq!(
            events[0].extra,
            vec![
                ("completed_at".to_string(), "2024-01-15T09:20:00Z".to_string()),
                ("duration_min".to_string(), "20".to_string()),
                ("metadata".to_string(), "{}".to_string()),
            ]
        );
        assert_eq!(events[1].action, Action::Skipped);
        assert_eq!(events[1].window(), TimeWindow::Night);
    }

    #[test]
    fn test_metadata_with_embedded_commas_is_preserved() {
        let csv = format!(
            "{HEADER}\n2024-01-15T09:00:00Z,u1,t1,study,completed,,15,\"{{\"\"mood\"\": \"\"ok\"\", \"\"n\"\": 2}}\"\n"
        );
        let events = parse_events(csv.as_bytes()).unwrap();
        assert_eq!(events[0].extra[2].1, r#"{"mood": "ok", "n": 2}"#);
    }

    #[test]
    fn test_columns_located_by_name() {
        let csv = "action,task_type,event_time\ncompleted,study,2024-01-15T13:00:00Z\n";
        let events = parse_events(csv.as_bytes()).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].task_type, "study");
        assert_eq!(events[0].window(), TimeWindow::Afternoon);
        assert!(events[0].user_id.is_empty());
        assert!(events[0].extra.is_empty());
    }

    #[test]
    fn test_unknown_action_is_kept() {
        let csv = format!("{HEADER}\n2024-01-15T09:00:00Z,u1,t1,study,started,,,\n");
        let events = parse_events(csv.as_bytes()).unwrap();
        assert_eq!(events[0].action, Action::Other("started".into()));
    }

    #[test]
    fn test_short_rows_read_as_empty() {
        let csv = format!("{HEADER}\n2024-01-15T09:00:00Z,u1,t1,study\n");
        let events = parse_events(csv.as_bytes()).unwrap();
        assert_eq!(events[0].action, Action::Other(String::new()));
        assert_eq!(events[0].extra[0].1, "");
    }

    #[test]
    fn test_header_only_log_has_no_events() {
        let events = parse_events(format!("{HEADER}\n").as_bytes()).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_empty_input_has_no_events() {
        let events = parse_events("".as_bytes()).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "timestamp,user_id,task_id,action\n2024-01-15T09:00:00Z,u1,t1,completed\n";
        let err = parse_events(csv.as_bytes()).unwrap_err();
        match err {
            Error::MissingColumn { column } => assert_eq!(column, "task_type"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }

        let csv = "user_id,task_type,action\nu1,study,completed\n";
        let err = parse_events(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MissingColumn { column } if column == "timestamp"));
    }

    #[test]
    fn test_unparseable_timestamp_fails_whole_log() {
        let csv = format!(
            "{HEADER}\n\
             2024-01-15T09:00:00Z,u1,t1,study,completed,,,\n\
             not-a-time,u1,t2,study,skipped,,,\n\
             2024-01-15T10:00:00Z,u1,t3,study,completed,,,\n\
             ,u1,t4,study,completed,,,\n"
        );
        let err = parse_events(csv.as_bytes()).unwrap_err();
        match err {
            Error::UnparseableTimestamp {
                line,
                value,
                invalid_rows,
            } => {
                assert_eq!(line, 3);
                assert_eq!(value, "not-a-time");
                assert_eq!(invalid_rows, 2);
            }
            other => panic!("expected UnparseableTimestamp, got {other:?}"),
        }
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = read_event_log(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
