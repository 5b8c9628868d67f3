//! Ranking of frequently completed task types

use crate::types::{Action, Event};
use std::collections::HashMap;

/// Completion count for one task type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTypeCount {
    pub task_type: String,
    pub completions: u64,
}

/// Count completions per task type, in first-encountered order.
pub fn completion_counts(events: &[Event]) -> Vec<TaskTypeCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<TaskTypeCount> = Vec::new();

    for event in events.iter().filter(|e| e.action == Action::Completed) {
        match index.get(event.task_type.as_str()) {
            Some(&i) => counts[i].completions += 1,
            None => {
                index.insert(event.task_type.as_str(), counts.len());
                counts.push(TaskTypeCount {
                    task_type: event.task_type.clone(),
                    completions: 1,
                });
            }
        }
    }

    counts
}

/// Up to `limit` task types ordered by completion count, descending.
///
/// The sort is stable, so equal counts keep first-encountered order.
pub fn top_task_types(events: &[Event], limit: usize) -> Vec<TaskTypeCount> {
    let mut counts = completion_counts(events);
    counts.sort_by(|a, b| b.completions.cmp(&a.completions));
    counts.truncate(limit);
    counts
}
