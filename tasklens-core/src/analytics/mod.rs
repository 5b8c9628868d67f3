//! Analytics module for tasklens
//!
//! Turns a parsed event log into behavioral insights:
//! - Completion rates, overall and per time window
//! - Best time window
//! - Most completed task types
//! - Reward-based productivity score
//! - Rule-based suggestions
//!
//! Every stage is a pure function over `&[Event]`; [`generate_insights`]
//! runs them all and produces the single [`Insights`] value that both report
//! formats are rendered from.

pub mod completion;
pub mod insights;
pub mod ranking;
pub mod reward;
pub mod suggestions;

pub use completion::{round2, BestWindow, CompletionCounts, CompletionStats};
pub use insights::{generate_insights, Insights};
pub use ranking::{completion_counts, top_task_types, TaskTypeCount};
pub use reward::productivity_score;
pub use suggestions::{generate_suggestions, SuggestionContext, SuggestionRule, RULES};
