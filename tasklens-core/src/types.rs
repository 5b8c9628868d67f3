//! Core domain types for tasklens
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Event** | One recorded user action on a task at a point in time |
//! | **Action** | What the user did: completed, skipped, or anything else |
//! | **Window** | One of five fixed clock-hour buckets used to group events |
//! | **Reward** | Per-event score derived from the action (+1, -1, 0) |
//!
//! Identifiers (`user_id`, `task_id`) are carried through verbatim and never
//! interpreted. Extra log columns are kept as raw strings.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// Action
// ============================================

/// What the user did with a task.
///
/// Only `Completed` and `Skipped` take part in completion rates. Any other
/// value is kept verbatim so nothing in the log is lost.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    Completed,
    Skipped,
    Other(String),
}

impl Action {
    /// Parse an action cell. Never fails: unknown values become `Other`.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "completed" => Action::Completed,
            "skipped" => Action::Skipped,
            other => Action::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Action::Completed => "completed",
            Action::Skipped => "skipped",
            Action::Other(value) => value,
        }
    }

    /// True for actions that count toward completion rates.
    pub fn is_rated(&self) -> bool {
        matches!(self, Action::Completed | Action::Skipped)
    }

    /// Reward contributed by this action to the productivity score.
    pub fn reward(&self) -> i64 {
        match self {
            Action::Completed => 1,
            Action::Skipped => -1,
            Action::Other(_) => 0,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================
// Time windows
// ============================================

/// Fixed time-of-day buckets.
///
/// Variant order is chronological and is the tie-break order used when two
/// windows share the best completion rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    /// 04:00–08:00
    EarlyMorning,
    /// 08:00–12:00
    Morning,
    /// 12:00–16:00
    Afternoon,
    /// 16:00–20:00
    Evening,
    /// 20:00–04:00 (wraps midnight)
    Night,
}

/// Explicit ranges, checked in order. Anything unmatched is `Night`.
const WINDOW_RANGES: [(TimeWindow, u32, u32); 4] = [
    (TimeWindow::EarlyMorning, 4, 8),
    (TimeWindow::Morning, 8, 12),
    (TimeWindow::Afternoon, 12, 16),
    (TimeWindow::Evening, 16, 20),
];

impl TimeWindow {
    /// Classify an hour of day.
    ///
    /// Hours 20–23 and 0–3 land in `Night`, as does any out-of-range value.
    pub fn classify(hour: u32) -> Self {
        WINDOW_RANGES
            .iter()
            .find(|(_, start, end)| (*start..*end).contains(&hour))
            .map(|(window, _, _)| *window)
            .unwrap_or(TimeWindow::Night)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::EarlyMorning => "early_morning",
            TimeWindow::Morning => "morning",
            TimeWindow::Afternoon => "afternoon",
            TimeWindow::Evening => "evening",
            TimeWindow::Night => "night",
        }
    }

    /// Label with underscores replaced by spaces (e.g. "early morning").
    pub fn display_name(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================
// Event
// ============================================

/// One parsed row of the event log.
#[derive(Debug, Clone)]
pub struct Event {
    /// When the action happened, normalized to UTC
    pub event_time: DateTime<Utc>,
    pub user_id: String,
    pub task_id: String,
    /// Category label used for grouping (e.g. "study")
    pub task_type: String,
    pub action: Action,
    /// Remaining columns as (header, value), in log order
    pub extra: Vec<(String, String)>,
}

impl Event {
    /// Hour of day (0-23) in UTC.
    pub fn hour(&self) -> u32 {
        self.event_time.hour()
    }

    pub fn window(&self) -> TimeWindow {
        TimeWindow::classify(self.hour())
    }

    pub fn reward(&self) -> i64 {
        self.action.reward()
    }
}

// ============================================
// Log record (append side)
// ============================================

/// Column order of a log written by [`crate::logger::EventLogger`].
pub const LOG_HEADER: [&str; 8] = [
    "timestamp",
    "user_id",
    "task_id",
    "task_type",
    "action",
    "completed_at",
    "duration_min",
    "metadata",
];

/// An event as it is written to the log: raw cell values, no validation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventRecord {
    pub timestamp: String,
    pub user_id: String,
    pub task_id: String,
    pub task_type: String,
    pub action: String,
    pub completed_at: String,
    pub duration_min: String,
    pub metadata: String,
}
