//! Completion-rate aggregation
//!
//! Only `completed` and `skipped` events are counted; every other action is
//! left out of both numerator and denominator.

use crate::types::{Action, Event, TimeWindow};
use std::collections::BTreeMap;

/// Round to two decimal places, ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Completed/skipped tallies for some slice of the log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionCounts {
    pub completed: u64,
    pub skipped: u64,
}

impl CompletionCounts {
    /// Count an action. Non-rated actions are ignored.
    pub fn record(&mut self, action: &Action) {
        match action {
            Action::Completed => self.completed += 1,
            Action::Skipped => self.skipped += 1,
            Action::Other(_) => {}
        }
    }

    pub fn total(&self) -> u64 {
        self.completed + self.skipped
    }

    /// Unrounded completion fraction; 0.0 when nothing was rated.
    pub fn rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.completed as f64 / self.total() as f64
        }
    }
}

/// Window with the highest completion rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestWindow {
    pub window: TimeWindow,
    /// Rounded to two decimals
    pub completion_rate: f64,
}

/// Overall and per-window completion tallies.
#[derive(Debug, Clone, Default)]
pub struct CompletionStats {
    pub overall: CompletionCounts,
    /// Only windows with at least one rated event appear here
    pub by_window: BTreeMap<TimeWindow, CompletionCounts>,
}

impl CompletionStats {
    pub fn from_events(events: &[Event]) -> Self {
        let mut stats = Self::default();
        for event in events.iter().filter(|e| e.action.is_rated()) {
            stats.overall.record(&event.action);
            stats
                .by_window
                .entry(event.window())
                .or_default()
                .record(&event.action);
        }
        stats
    }

    /// Overall completion rate, rounded to two decimals.
    pub fn completion_rate(&self) -> f64 {
        round2(self.overall.rate())
    }

    /// Unrounded rate per window, in chronological window order.
    pub fn window_rates(&self) -> Vec<(TimeWindow, f64)> {
        self.by_window
            .iter()
            .map(|(window, counts)| (*window, counts.rate()))
            .collect()
    }

    /// Window with the highest rate.
    ///
    /// Rates are compared unrounded. On a tie the chronologically earliest
    /// window wins.
    pub fn best_window(&self) -> Option<BestWindow> {
        let mut best: Option<(TimeWindow, f64)> = None;
        for (window, rate) in self.window_rates() {
            match best {
                Some((_, best_rate)) if rate <= best_rate => {}
                _ => best = Some((window, rate)),
            }
        }
        best.map(|(window, rate)| BestWindow {
            window,
            completion_rate: round2(rate),
        })
    }
}
