//! Insights report generation
//!
//! Runs every analytics stage over a parsed event log and gathers the
//! results into one [`Insights`] value. Both report files are rendered from
//! that value, so they always agree.

use serde::Serialize;

use super::completion::CompletionStats;
use super::ranking::top_task_types;
use super::reward::productivity_score;
use super::suggestions::{generate_suggestions, SuggestionContext};
use crate::config::InsightsConfig;
use crate::types::{Event, TimeWindow};

/// Computed behavioral insights for one event log.
///
/// Serializes to the structured report. Fields marked `skip` only feed the
/// `details` column of the tabular report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    /// completed / (completed + skipped), two decimals; 0 with no rated events
    pub overall_completion_rate: f64,
    /// Window with the highest completion rate, if any window had rated events
    pub best_time_window: Option<TimeWindow>,
    /// Most completed task types, at most three
    pub top_tasks: Vec<String>,
    /// Sum of rewards over the whole log
    pub weekly_productivity_score: i64,
    /// Rule-based suggestions in rule order
    pub suggestions: Vec<String>,

    /// Completion rate inside `best_time_window`, two decimals
    #[serde(skip)]
    pub best_window_rate: Option<f64>,
    #[serde(skip)]
    pub completed: u64,
    #[serde(skip)]
    pub skipped: u64,
    /// Number of events read, rated or not
    #[serde(skip)]
    pub total_events: usize,
}

impl Insights {
    /// True when the log had no completed or skipped events.
    pub fn is_degenerate(&self) -> bool {
        self.completed + self.skipped == 0
    }
}

/// Compute insights from a parsed event log.
pub fn generate_insights(events: &[Event], config: &InsightsConfig) -> Insights {
    let stats = CompletionStats::from_events(events);
    let best = stats.best_window();

    let top_tasks = top_task_types(events, config.top_tasks_limit())
        .into_iter()
        .map(|c| c.task_type)
        .collect();

    let suggestions = generate_suggestions(&SuggestionContext {
        events,
        best_window: best.map(|b| b.window),
    });

    let insights = Insights {
        overall_completion_rate: stats.completion_rate(),
        best_time_window: best.map(|b| b.window),
        top_tasks,
        weekly_productivity_score: productivity_score(events),
        suggestions,
        best_window_rate: best.map(|b| b.completion_rate),
        completed: stats.overall.completed,
        skipped: stats.overall.skipped,
        total_events: events.len(),
    };

    tracing::info!(
        events = insights.total_events,
        completed = insights.completed,
        skipped = insights.skipped,
        completion_rate = insights.overall_completion_rate,
        best_window = ?insights.best_time_window,
        score = insights.weekly_productivity_score,
        "Generated insights"
    );

    insights
}
