//! Reward scoring
//!
//! Each event maps to a reward on its own (see [`Action::reward`]); the
//! productivity score is the sum over the whole log. No date filtering is
//! applied, so a "weekly" score covers whatever span the log holds.
//!
//! [`Action::reward`]: crate::types::Action::reward

use crate::types::Event;

/// Sum of per-event rewards over every event, rated or not.
pub fn productivity_score(events: &[Event]) -> i64 {
    events.iter().map(Event::reward).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Action;
    use chrono::{TimeZone, Utc};

    fn event(action: &str) -> Event {
        Event {
            event_time: Utc.with_ymd_and_hms(2024, 5, 6, 9, 0, 0).unwrap(),
            user_id: "u1".into(),
            task_id: "t".into(),
            task_type: "study".into(),
            action: Action::parse(action),
            extra: vec![],
        }
    }

    #[test]
    fn test_score_is_literal_sum() {
        let events = vec![
            event("completed"),
            event("completed"),
            event("completed"),
            event("skipped"),
            event("started"),
            event(""),
        ];
        assert_eq!(productivity_score(&events), 2);
    }

    #[test]
    fn test_score_can_go_negative() {
        let events = vec![event("skipped"), event("skipped"), event("completed")];
        assert_eq!(productivity_score(&events), -1);
    }

    #[test]
    fn test_empty_log_scores_zero() {
        assert_eq!(productivity_score(&[]), 0);
    }
}
