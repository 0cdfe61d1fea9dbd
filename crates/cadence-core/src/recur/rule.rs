//! Recurrence rule model.
//!
//! Field names and value encodings follow the JSON the surrounding task
//! application stores: camelCase keys, weekdays as numeric indices with
//! 0 = Sunday, monthly variants tagged by a `type` field.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;

use super::dates::parse_iso_date;

/// Recurrence frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Weekly,
    Biweekly,
    Monthly,
}

impl Frequency {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
        }
    }

    /// Parses a frequency from a string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "weekly" => Self::Weekly,
            "biweekly" => Self::Biweekly,
            "monthly" => Self::Monthly,
            _ => return None,
        })
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Day of the week.
///
/// Declaration order matches the numeric wire encoding: 0 = Sunday through
/// 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Returns the numeric index (0 = Sunday .. 6 = Saturday).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// Parses a weekday from its numeric index.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        Some(match index {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            6 => Self::Saturday,
            _ => return None,
        })
    }

    /// Converts from the chrono weekday type.
    #[must_use]
    pub const fn from_chrono(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }

    /// Converts to the chrono weekday type.
    #[must_use]
    pub const fn to_chrono(self) -> chrono::Weekday {
        match self {
            Self::Sunday => chrono::Weekday::Sun,
            Self::Monday => chrono::Weekday::Mon,
            Self::Tuesday => chrono::Weekday::Tue,
            Self::Wednesday => chrono::Weekday::Wed,
            Self::Thursday => chrono::Weekday::Thu,
            Self::Friday => chrono::Weekday::Fri,
            Self::Saturday => chrono::Weekday::Sat,
        }
    }

    /// Returns all weekdays in order (Sunday through Saturday).
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Sunday,
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
        ]
    }
}

impl TryFrom<u8> for Weekday {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value).ok_or_else(|| format!("weekday index out of range: {value}"))
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.index()
    }
}

/// Weekday selection for weekly and biweekly rules.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeeklyRule {
    /// Selected weekdays. Empty means the rule produces no occurrences.
    #[serde(default)]
    pub weekdays: BTreeSet<Weekday>,
}

/// Monthly recurrence pattern.
///
/// A closed sum so the expansion match stays exhaustive when a variant is
/// added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MonthlyRule {
    /// The same numeric day each month (1..=31). Months too short for the
    /// day contribute no occurrence.
    DayOfMonth { day: u32 },
    /// The final occurrence of a weekday in the month.
    LastWeekday { weekday: Weekday },
    /// The nth occurrence (1-indexed) of a weekday in the month. Months
    /// with fewer than `nth` such weekdays contribute no occurrence.
    NthWeekday { weekday: Weekday, nth: u32 },
}

/// A recurrence rule as edited by the task form.
///
/// `start_date`/`end_date` are the inclusive bounds of the generation
/// window. Either missing means the rule is incomplete and expands to
/// nothing; the same holds for an empty weekday set on weekly rules and a
/// missing monthly pattern on monthly rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recurrence {
    pub enabled: bool,
    pub frequency: Frequency,
    #[serde(with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
    /// Consulted only for weekly/biweekly frequency.
    pub weekly: WeeklyRule,
    /// Consulted only for monthly frequency.
    pub monthly: Option<MonthlyRule>,
}

impl Recurrence {
    /// Creates a disabled rule seeded with a start date, the state a task
    /// form begins editing from.
    #[must_use]
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date: Some(start_date),
            ..Self::default()
        }
    }

    /// ## Summary
    /// Parses a rule from its JSON wire form.
    ///
    /// Malformed date strings inside well-formed JSON are not errors; they
    /// deserialize to `None` and leave the rule merely incomplete.
    ///
    /// ## Errors
    /// Returns `CoreError::ParseError` if the JSON itself is malformed.
    pub fn from_json_str(text: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl Default for Recurrence {
    fn default() -> Self {
        Self {
            enabled: false,
            frequency: Frequency::Weekly,
            start_date: None,
            end_date: None,
            weekly: WeeklyRule::default(),
            monthly: None,
        }
    }
}

/// Returns the monthly patterns an editing UI offers for a reference date:
/// its day of month, its ordinal weekday, and its weekday as
/// last-of-the-month.
#[must_use]
pub fn monthly_presets(date: NaiveDate) -> [MonthlyRule; 3] {
    let weekday = Weekday::from_chrono(date.weekday());
    [
        MonthlyRule::DayOfMonth { day: date.day() },
        MonthlyRule::NthWeekday {
            weekday,
            nth: (date.day() - 1) / 7 + 1,
        },
        MonthlyRule::LastWeekday { weekday },
    ]
}

/// Serde adapter for window bounds: absent, null, empty, or unparseable
/// date strings all deserialize to `None` rather than failing, so a rule
/// mid-edit still deserializes.
mod lenient_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::parse_iso_date;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_some(&d.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_iso_date))
    }
}
