//! Event logger: appends one row to the event log
//!
//! The log is append-only. Each append serializes the full CSV line into
//! memory first and hands it to the OS in a single `write_all` on a handle
//! opened in append mode, so a concurrent reader sees either the whole row
//! or none of it.
//!
//! A missing or zero-length log gets the canonical [`LOG_HEADER`] before the
//! first row. A log whose last line lacks a terminator gets one in front of
//! the new row, in the same write.

use crate::error::{Error, Result};
use crate::types::{EventRecord, LOG_HEADER};
use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Appends event rows to a CSV log file.
#[derive(Debug, Clone)]
pub struct EventLogger {
    path: PathBuf,
}

impl EventLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one event. Creates the file (and parent directories) if needed.
    pub fn append(&self, record: &EventRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)?;
        let len = file.metadata()?.len();
        let needs_header = len == 0;
        let unterminated = len > 0 && last_byte(&mut file, len)? != b'\n';

        let line = encode_row(record, needs_header, unterminated)?;
        file.write_all(&line)?;
        file.flush()?;

        debug!(
            path = %self.path.display(),
            task_id = %record.task_id,
            action = %record.action,
            "Appended event"
        );
        Ok(())
    }
}

fn last_byte(file: &mut std::fs::File, len: u64) -> Result<u8> {
    let mut byte = [0u8; 1];
    file.seek(SeekFrom::Start(len - 1))?;
    file.read_exact(&mut byte)?;
    Ok(byte[0])
}

/// Serialize a record (optionally preceded by a line break or the header)
/// into one buffer.
fn encode_row(record: &EventRecord, with_header: bool, terminate_last: bool) -> Result<Vec<u8>> {
    let lead = if terminate_last { b"\n".to_vec() } else { Vec::new() };
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(lead);
    if with_header {
        writer.write_record(LOG_HEADER)?;
    }
    writer.serialize(record)?;
    writer.into_inner().map_err(|e| Error::Io(e.into_error()))
}
