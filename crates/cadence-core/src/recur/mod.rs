//! Recurrence rules and occurrence generation.
//!
//! A [`rule::Recurrence`] describes how often a task repeats; the functions
//! in [`generate`] expand it into the concrete calendar dates inside its
//! `[start_date, end_date]` window. [`editor::RecurrenceEditor`] keeps a
//! rule and its derived occurrence list in sync while the rule is edited.

pub mod dates;
pub mod editor;
pub mod generate;
pub mod rule;
