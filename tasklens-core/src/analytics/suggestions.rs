//! Rule-based suggestions
//!
//! Rules are evaluated in table order and each contributes at most one
//! message. Task-type names in the rules are fixed literals.

use crate::types::{Action, Event, TimeWindow};

/// Inputs available to every rule.
pub struct SuggestionContext<'a> {
    pub events: &'a [Event],
    pub best_window: Option<TimeWindow>,
}

/// A single (condition, message) pair.
pub struct SuggestionRule {
    /// Stable identifier, used in logs and tests
    pub name: &'static str,
    pub condition: fn(&SuggestionContext) -> bool,
    pub message: fn(&SuggestionContext) -> String,
}

/// All rules, in output order.
pub const RULES: &[SuggestionRule] = &[
    SuggestionRule {
        name: "best_window_focus",
        condition: |ctx| ctx.best_window.is_some(),
        message: |ctx| {
            let window = ctx
                .best_window
                .map(|w| w.display_name())
                .unwrap_or_default();
            format!(
                "You complete more tasks in the {}. Schedule focus work then.",
                window
            )
        },
    },
    SuggestionRule {
        name: "study_skipped",
        condition: |ctx| has_skipped(ctx.events, "study"),
        message: |_| {
            "Study tasks are often skipped. Try breaking them into smaller chunks.".to_string()
        },
    },
    SuggestionRule {
        name: "relax_skipped",
        condition: |ctx| has_skipped(ctx.events, "relax"),
        message: |_| {
            "Relaxation is often skipped; consider shorter breaks earlier in the day.".to_string()
        },
    },
];

/// True when at least one event of `task_type` was skipped.
fn has_skipped(events: &[Event], task_type: &str) -> bool {
    events
        .iter()
        .any(|e| e.task_type == task_type && e.action == Action::Skipped)
}

/// Evaluate every rule in order and collect the messages that apply.
pub fn generate_suggestions(ctx: &SuggestionContext) -> Vec<String> {
    RULES
        .iter()
        .filter(|rule| (rule.condition)(ctx))
        .map(|rule| {
            tracing::debug!(rule = rule.name, "Suggestion rule matched");
            (rule.message)(ctx)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(task_type: &str, action: &str) -> Event {
        Event {
            event_time: Utc.with_ymd_and_hms(2024, 5, 6, 9, 0, 0).unwrap(),
            user_id: "u1".into(),
            task_id: "t".into(),
            task_type: task_type.into(),
            action: Action::parse(action),
            extra: vec![],
        }
    }

    fn rule(name: &str) -> &'static SuggestionRule {
        RULES.iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["best_window_focus", "study_skipped", "relax_skipped"]
        );
    }

    #[test]
    fn test_best_window_rule_uses_spaced_name() {
        let ctx = SuggestionContext {
            events: &[],
            best_window: Some(TimeWindow::EarlyMorning),
        };
        let rule = rule("best_window_focus");
        assert!((rule.condition)(&ctx));
        assert_eq!(
            (rule.message)(&ctx),
            "You complete more tasks in the early morning. Schedule focus work then."
        );

        let ctx = SuggestionContext {
            events: &[],
            best_window: None,
        };
        assert!(!(rule.condition)(&ctx));
    }

    #[test]
    fn test_study_rule_needs_a_skip() {
        let rule = rule("study_skipped");

        let events = vec![event("study", "completed"), event("study", "skipped")];
        let ctx = SuggestionContext {
            events: &events,
            best_window: None,
        };
        assert!((rule.condition)(&ctx));

        let events = vec![event("study", "completed"), event("exercise", "skipped")];
        let ctx = SuggestionContext {
            events: &events,
            best_window: None,
        };
        assert!(!(rule.condition)(&ctx));
    }

    #[test]
    fn test_relax_rule_needs_a_skip() {
        let rule = rule("relax_skipped");

        let events = vec![event("relax", "skipped")];
        let ctx = SuggestionContext {
            events: &events,
            best_window: None,
        };
        assert!((rule.condition)(&ctx));

        let events = vec![event("relax", "started")];
        let ctx = SuggestionContext {
            events: &events,
            best_window: None,
        };
        assert!(!(rule.condition)(&ctx));
    }

    #[test]
    fn test_task_type_match_is_exact() {
        let events = vec![event("Study", "skipped"), event("study-group", "skipped")];
        let ctx = SuggestionContext {
            events: &events,
            best_window: None,
        };
        assert!(generate_suggestions(&ctx).is_empty());
    }

    #[test]
    fn test_generate_all_in_rule_order() {
        let events = vec![event("relax", "skipped"), event("study", "skipped")];
        let ctx = SuggestionContext {
            events: &events,
            best_window: Some(TimeWindow::Evening),
        };
        let suggestions = generate_suggestions(&ctx);
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions[0].contains("in the evening"));
        assert!(suggestions[1].starts_with("Study tasks"));
        assert!(suggestions[2].starts_with("Relaxation"));
    }
}
