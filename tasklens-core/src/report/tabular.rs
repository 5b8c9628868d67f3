//! Tabular (CSV) report rendering
//!
//! One row per metric, then one row per suggestion:
//!
//! ```text
//! metric,value,details
//! overall_completion_rate,0.75,"completed:3, skipped:1"
//! best_time_window,morning,completion_rate:0.75
//! top_task_types,exercise,
//! weekly_productivity_score,2,sum of rewards
//! suggestion1,You complete more tasks in the morning. Schedule focus work then.,
//! ```

use serde::Serialize;

use crate::analytics::Insights;
use crate::error::{Error, Result};

/// Separator used to join `top_task_types` into a single cell.
pub const TOP_TASKS_SEPARATOR: &str = "|";

/// One line of the tabular report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub metric: String,
    pub value: String,
    pub details: String,
}

impl ReportRow {
    fn new(metric: impl Into<String>, value: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            value: value.into(),
            details: details.into(),
        }
    }
}

/// Render a rate the way it appears in the table (`0.75`, `0`, `1`).
fn format_rate(rate: f64) -> String {
    rate.to_string()
}

/// Build the report rows for `insights`.
pub fn report_rows(insights: &Insights) -> Vec<ReportRow> {
    let best_window_details = match insights.best_window_rate {
        Some(rate) => format!("completion_rate:{}", format_rate(rate)),
        None => "completion_rate:null".to_string(),
    };

    let mut rows = vec![
        ReportRow::new(
            "overall_completion_rate",
            format_rate(insights.overall_completion_rate),
            format!("completed:{}, skipped:{}", insights.completed, insights.skipped),
        ),
        ReportRow::new(
            "best_time_window",
            insights
                .best_time_window
                .map(|w| w.as_str())
                .unwrap_or_default(),
            best_window_details,
        ),
        ReportRow::new(
            "top_task_types",
            insights.top_tasks.join(TOP_TASKS_SEPARATOR),
            "",
        ),
        ReportRow::new(
            "weekly_productivity_score",
            insights.weekly_productivity_score.to_string(),
            "sum of rewards",
        ),
    ];

    rows.extend(
        insights
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, s)| ReportRow::new(format!("suggestion{}", i + 1), s.as_str(), "")),
    );

    rows
}

/// Render the full CSV document, header included.
pub fn render_csv(insights: &Insights) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in report_rows(insights) {
        writer.serialize(row)?;
    }
    writer.into_inner().map_err(|e| Error::Io(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TimeWindow;

    fn sample() -> Insights {
        Insights {
            overall_completion_rate: 0.75,
            best_time_window: Some(TimeWindow::Morning),
            top_tasks: vec!["exercise".into(), "study".into()],
            weekly_productivity_score: 2,
            suggestions: vec![
                "You complete more tasks in the morning. Schedule focus work then.".into(),
                "Study tasks are often skipped. Try breaking them into smaller chunks.".into(),
            ],
            best_window_rate: Some(0.8),
            completed: 3,
            skipped: 1,
            total_events: 5,
        }
    }

    #[test]
    fn test_rows_for_full_report() {
        let rows = report_rows(&sample());
        let metrics: Vec<_> = rows.iter().map(|r| r.metric.as_str()).collect();
        assert_eq!(
            metrics,
            vec![
                "overall_completion_rate",
                "best_time_window",
                "top_task_types",
                "weekly_productivity_score",
                "suggestion1",
                "suggestion2",
            ]
        );
        assert_eq!(rows[0].value, "0.75");
        assert_eq!(rows[0].details, "completed:3, skipped:1");
        assert_eq!(rows[1].value, "morning");
        assert_eq!(rows[1].details, "completion_rate:0.8");
        assert_eq!(rows[2].value, "exercise|study");
        assert_eq!(rows[3].value, "2");
        assert_eq!(rows[3].details, "sum of rewards");
        assert!(rows[5].value.starts_with("Study tasks"));
    }

    #[test]
    fn test_rows_for_empty_report() {
        let insights = Insights {
            overall_completion_rate: 0.0,
            best_time_window: None,
            top_tasks: vec![],
            weekly_productivity_score: 0,
            suggestions: vec![],
            best_window_rate: None,
            completed: 0,
            skipped: 0,
            total_events: 0,
        };
        let rows = report_rows(&insights);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].value, "0");
        assert_eq!(rows[1].value, "");
        assert_eq!(rows[1].details, "completion_rate:null");
        assert_eq!(rows[2].value, "");
    }

    #[test]
    fn test_render_csv_quotes_details_with_commas() {
        let csv = String::from_utf8(render_csv(&sample()).unwrap()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("metric,value,details"));
        assert_eq!(
            lines.next(),
            Some("overall_completion_rate,0.75,\"completed:3, skipped:1\"")
        );
        assert_eq!(lines.next(), Some("best_time_window,morning,completion_rate:0.8"));
        assert_eq!(csv.lines().count(), 7);
    }
}
