//! # tasklens-core
//!
//! Core library for tasklens - behavioral insights from a personal
//! task-interaction log.
//!
//! This library provides:
//! - Domain types for events, actions and time windows
//! - Event log ingestion with timestamp normalization
//! - Analytics: completion rates, best time window, top task types,
//!   productivity score and rule-based suggestions
//! - Report emission (CSV and JSON, written together)
//! - The append-only event logger
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Data flow
//!
//! ```text
//! EventLogger ──► event log (CSV) ──► ingest ──► analytics ──► Insights ──► report (CSV + JSON)
//! ```
//!
//! Each run re-reads the whole log and produces a fresh report; nothing is
//! carried between runs.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tasklens_core::report::{generate_report, ReportPaths};
//! use tasklens_core::Config;
//!
//! let config = Config::load().expect("failed to load config");
//! let paths = ReportPaths::from_config(&config.paths);
//!
//! let insights = generate_report(&config.paths.event_log(), &paths, &config.insights)
//!     .expect("failed to generate report");
//! println!("completion rate: {}", insights.overall_completion_rate);
//! ```

// Re-export commonly used items at the crate root
pub use analytics::{generate_insights, Insights};
pub use config::Config;
pub use error::{Error, Result};
pub use logger::EventLogger;
pub use types::*;

// Public modules
pub mod analytics;
pub mod config;
pub mod error;
pub mod format;
pub mod ingest;
pub mod logger;
pub mod logging;
pub mod report;
pub mod types;
