//! Structured (JSON) report rendering

use crate::analytics::Insights;
use crate::error::Result;

/// Render the JSON document: one object, two-space indent, trailing newline.
pub fn render_json(insights: &Insights) -> Result<String> {
    let mut json = serde_json::to_string_pretty(insights)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TimeWindow;

    #[test]
    fn test_render_json_layout() {
        let insights = Insights {
            overall_completion_rate: 0.75,
            best_time_window: Some(TimeWindow::EarlyMorning),
            top_tasks: vec!["exercise".into()],
            weekly_productivity_score: 2,
            suggestions: vec![],
            best_window_rate: Some(0.75),
            completed: 3,
            skipped: 1,
            total_events: 4,
        };
        let json = render_json(&insights).unwrap();
        let expected = r#"{
  "overall_completion_rate": 0.75,
  "best_time_window": "early_morning",
  "top_tasks": [
    "exercise"
  ],
  "weekly_productivity_score": 2,
  "suggestions": []
}
"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_null_best_window() {
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
        let value: serde_json::Value =
            serde_json::from_str(&render_json(&insights).unwrap()).unwrap();
        assert!(value["best_time_window"].is_null());
        assert_eq!(value["overall_completion_rate"], 0.0);
        assert_eq!(value["top_tasks"], serde_json::json!([]));
    }
}
