//! # cadence-core
//!
//! Recurrence engine for recurring tasks: a rule model, deterministic
//! occurrence expansion over an inclusive date window, and the validity
//! predicate the editing UI drives its indicator from.
//!
//! ## Modules
//!
//! - [`recur`] — rule model, date arithmetic, occurrence generation
//! - [`config`] — host configuration
//! - [`error`] — error types

pub mod config;
pub mod error;
pub mod recur;

pub use recur::editor::RecurrenceEditor;
pub use recur::generate::{is_complete, occurrences, occurrences_iso};
pub use recur::rule::{Frequency, MonthlyRule, Recurrence, Weekday, WeeklyRule};
