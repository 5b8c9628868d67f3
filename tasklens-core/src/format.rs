//! Formatting helpers for human-readable output.

use crate::types::TimeWindow;

/// Format a 0..1 rate as a whole percentage (e.g., "75%").
pub fn format_percent(rate: f64) -> String {
    format!("{:.0}%", rate * 100.0)
}

/// Format a signed score with an explicit sign (e.g., "+2", "-1", "0").
pub fn format_score(score: i64) -> String {
    if score > 0 {
        format!("+{}", score)
    } else {
        score.to_string()
    }
}

/// Format an optional window with its hour range, or an em dash if missing.
pub fn format_window_opt(window: Option<TimeWindow>) -> String {
    match window {
        Some(window) => format!("{} ({})", window.display_name(), hour_range(window)),
        None => "—".to_string(),
    }
}

fn hour_range(window: TimeWindow) -> &'static str {
    match window {
        TimeWindow::EarlyMorning => "04:00–08:00",
        TimeWindow::Morning => "08:00–12:00",
        TimeWindow::Afternoon => "12:00–16:00",
        TimeWindow::Evening => "16:00–20:00",
        TimeWindow::Night => "20:00–04:00",
    }
}
