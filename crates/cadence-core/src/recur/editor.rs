//! State holder for a recurrence rule under edit.
//!
//! The hosting form mutates the rule through [`RecurrenceEditor::edit`];
//! the occurrence list and completeness flag are re-derived on every edit
//! so the form can render a live date list and validity indicator without
//! any subscription machinery.

use chrono::NaiveDate;

use super::generate::{is_complete, occurrences};
use super::rule::Recurrence;

/// Holds the rule being edited together with its derived state.
///
/// The derived fields are a cache of pure re-derivations; dropping them
/// and recomputing always yields identical values.
#[derive(Debug, Clone)]
pub struct RecurrenceEditor {
    rule: Recurrence,
    occurrences: Vec<NaiveDate>,
    complete: bool,
}

impl RecurrenceEditor {
    /// Creates an editor around a fresh disabled rule seeded with the
    /// given start date.
    #[must_use]
    pub fn new(start_date: NaiveDate) -> Self {
        Self::from_rule(Recurrence::new(start_date))
    }

    /// Creates an editor around an existing rule.
    #[must_use]
    pub fn from_rule(rule: Recurrence) -> Self {
        let mut editor = Self {
            rule,
            occurrences: Vec::new(),
            complete: false,
        };
        editor.refresh();
        editor
    }

    /// The current rule.
    #[must_use]
    pub fn rule(&self) -> &Recurrence {
        &self.rule
    }

    /// The occurrence dates derived from the current rule.
    #[must_use]
    pub fn occurrences(&self) -> &[NaiveDate] {
        &self.occurrences
    }

    /// Whether the current rule is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Applies a mutation to the rule, then re-derives occurrences and
    /// completeness.
    pub fn edit(&mut self, apply: impl FnOnce(&mut Recurrence)) {
        apply(&mut self.rule);
        self.refresh();
    }

    /// Replaces the rule wholesale, then re-derives.
    pub fn set_rule(&mut self, rule: Recurrence) {
        self.rule = rule;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.occurrences = occurrences(&self.rule);
        self.complete = is_complete(&self.rule);
        tracing::debug!(
            count = self.occurrences.len(),
            complete = self.complete,
            "Recomputed occurrences"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recur::rule::{Frequency, Weekday};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn fresh_editor_is_disabled_empty_and_complete() {
        let editor = RecurrenceEditor::new(date(2024, 5, 1));
        assert!(!editor.rule().enabled);
        assert!(editor.occurrences().is_empty());
        assert!(editor.is_complete());
    }

    #[test]
    fn edits_refresh_derived_state() {
        let mut editor = RecurrenceEditor::new(date(2024, 1, 1));

        editor.edit(|rule| {
            rule.enabled = true;
            rule.frequency = Frequency::Weekly;
        });
        assert!(!editor.is_complete(), "no end date, no weekdays yet");
        assert!(editor.occurrences().is_empty());

        editor.edit(|rule| {
            rule.end_date = Some(date(2024, 1, 14));
            rule.weekly.weekdays.insert(Weekday::Monday);
        });
        assert!(editor.is_complete());
        assert_eq!(
            editor.occurrences(),
            &[date(2024, 1, 1), date(2024, 1, 8)]
        );
    }

    #[test]
    fn transiently_invalid_states_never_panic() {
        let mut editor = RecurrenceEditor::new(date(2024, 1, 1));
        editor.edit(|rule| {
            rule.enabled = true;
            rule.end_date = Some(date(2023, 1, 1));
            rule.weekly.weekdays.insert(Weekday::Friday);
        });
        assert!(editor.occurrences().is_empty());
        assert!(!editor.is_complete());
    }

    #[test]
    fn set_rule_replaces_and_rederives() {
        let mut editor = RecurrenceEditor::new(date(2024, 1, 1));
        let mut replacement = Recurrence::new(date(2024, 2, 5));
        replacement.enabled = true;
        replacement.end_date = Some(date(2024, 2, 11));
        replacement.weekly.weekdays.insert(Weekday::Wednesday);

        editor.set_rule(replacement);
        assert_eq!(editor.occurrences(), &[date(2024, 2, 7)]);
    }
}
