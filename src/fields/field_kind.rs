use crate::constants::{DATE_FORMAT, DATETIME_FORMAT, TIME_FORMAT};
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// One editable component of a date, time or datetime value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Deserialize,
    Serialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldKind {
    Year,
    Month,
    Day,
    Hours,
    Minutes,
    Seconds,
}

impl FieldKind {
    pub const DATE_KINDS: &'static [FieldKind] =
        &[FieldKind::Year, FieldKind::Month, FieldKind::Day];
    pub const TIME_KINDS: &'static [FieldKind] =
        &[FieldKind::Hours, FieldKind::Minutes, FieldKind::Seconds];
    pub const ALL_KINDS: &'static [FieldKind] = &[
        FieldKind::Year,
        FieldKind::Month,
        FieldKind::Day,
        FieldKind::Hours,
        FieldKind::Minutes,
        FieldKind::Seconds,
    ];

    pub fn half(&self) -> FieldHalf {
        match self {
            FieldKind::Year | FieldKind::Month | FieldKind::Day => FieldHalf::Date,
            FieldKind::Hours | FieldKind::Minutes | FieldKind::Seconds => FieldHalf::Time,
        }
    }

    /// Shortest raw value that is judged at all. Anything shorter is an error
    /// once the debounce window has passed.
    pub fn min_length(&self) -> usize {
        match self {
            FieldKind::Year => 4,
            FieldKind::Month
            | FieldKind::Day
            | FieldKind::Hours
            | FieldKind::Minutes
            | FieldKind::Seconds => 1,
        }
    }

    /// The month is picked from a closed list instead of being typed.
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldKind::Month)
    }

    /// Brings a raw value to its stored width: natural width for the year,
    /// at least two digits for everything else.
    ///
    /// Values that are not plain non-negative integers are returned untouched.
    pub fn normalize(&self, raw: &str) -> String {
        match self {
            FieldKind::Year => raw.to_string(),
            _ => pad_two_digits(raw),
        }
    }

    /// The component of `reference` this kind stands for, already normalized.
    pub fn reference_value(&self, reference: &NaiveDateTime) -> String {
        match self {
            FieldKind::Year => reference.year().to_string(),
            FieldKind::Month => format!("{:02}", reference.month()),
            FieldKind::Day => format!("{:02}", reference.day()),
            FieldKind::Hours => format!("{:02}", reference.hour()),
            FieldKind::Minutes => format!("{:02}", reference.minute()),
            FieldKind::Seconds => format!("{:02}", reference.second()),
        }
    }
}

pub(crate) fn pad_two_digits(raw: &str) -> String {
    match raw.parse::<u32>() {
        Ok(value) if !raw.starts_with('+') => format!("{value:02}"),
        _ => raw.to_string(),
    }
}

/// The date or the time part of a value. Validation never crosses halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum FieldHalf {
    Date,
    Time,
}

impl FieldHalf {
    pub fn kinds(&self) -> &'static [FieldKind] {
        match self {
            FieldHalf::Date => FieldKind::DATE_KINDS,
            FieldHalf::Time => FieldKind::TIME_KINDS,
        }
    }
}

/// What the widget edits. Decides which [`FieldKind`]s are active.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Deserialize,
    Serialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldType {
    #[default]
    Datetime,
    Date,
    Time,
}

impl FieldType {
    pub fn active_fields(&self) -> &'static [FieldKind] {
        match self {
            FieldType::Datetime => FieldKind::ALL_KINDS,
            FieldType::Date => FieldKind::DATE_KINDS,
            FieldType::Time => FieldKind::TIME_KINDS,
        }
    }

    pub fn halves(&self) -> &'static [FieldHalf] {
        match self {
            FieldType::Datetime => &[FieldHalf::Date, FieldHalf::Time],
            FieldType::Date => &[FieldHalf::Date],
            FieldType::Time => &[FieldHalf::Time],
        }
    }

    pub fn has_half(&self, half: FieldHalf) -> bool {
        self.halves().contains(&half)
    }

    pub fn is_active(&self, kind: FieldKind) -> bool {
        self.active_fields().contains(&kind)
    }

    pub fn default_format(&self) -> &'static str {
        match self {
            FieldType::Datetime => DATETIME_FORMAT,
            FieldType::Date => DATE_FORMAT,
            FieldType::Time => TIME_FORMAT,
        }
    }
}
