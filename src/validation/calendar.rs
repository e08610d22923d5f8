use crate::fields::{FieldHalf, FieldKind, FieldValues};
use chrono::{Datelike, NaiveDateTime, Timelike};
use log::debug;

/// Gregorian leap year rule.
pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, `None` if the month is outside 1..=12.
pub fn days_in_month(year: i64, month: i64) -> Option<i64> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Decides whether candidate field values form a valid date or time of day.
///
/// Absent components fall back to the reference instant captured when the
/// widget was built. The reference is never resampled, so the same candidate
/// always gets the same verdict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarValidator {
    reference: NaiveDateTime,
}

impl CalendarValidator {
    pub fn new(reference: NaiveDateTime) -> Self {
        CalendarValidator { reference }
    }

    pub fn reference(&self) -> NaiveDateTime {
        self.reference
    }

    /// The zero-padded component of the reference instant for `kind`.
    pub fn current(&self, kind: FieldKind) -> String {
        kind.reference_value(&self.reference)
    }

    pub fn is_valid_date(&self, year: Option<&str>, month: Option<&str>, day: Option<&str>) -> bool {
        let (Some(year), Some(month), Some(day)) = (
            parse_component(year, self.reference.year().into()),
            parse_component(month, self.reference.month().into()),
            parse_component(day, self.reference.day().into()),
        ) else {
            return false;
        };

        match days_in_month(year, month) {
            Some(max_day) => (1..=max_day).contains(&day),
            None => false,
        }
    }

    pub fn is_valid_time(
        &self,
        hours: Option<&str>,
        minutes: Option<&str>,
        seconds: Option<&str>,
    ) -> bool {
        let (Some(hours), Some(minutes), Some(seconds)) = (
            parse_component(hours, self.reference.hour().into()),
            parse_component(minutes, self.reference.minute().into()),
            parse_component(seconds, self.reference.second().into()),
        ) else {
            return false;
        };

        (0..=23).contains(&hours) && (0..=59).contains(&minutes) && (0..=59).contains(&seconds)
    }

    /// Validates the triple of `half` taken from `values`.
    pub fn is_valid_half(&self, half: FieldHalf, values: &FieldValues) -> bool {
        let get = |kind: FieldKind| values.get(&kind).map(String::as_str);
        let valid = match half {
            FieldHalf::Date => self.is_valid_date(
                get(FieldKind::Year),
                get(FieldKind::Month),
                get(FieldKind::Day),
            ),
            FieldHalf::Time => self.is_valid_time(
                get(FieldKind::Hours),
                get(FieldKind::Minutes),
                get(FieldKind::Seconds),
            ),
        };
        debug!("Validated {half} {values:?}: {valid}");
        valid
    }
}

/// Only plain ASCII digits count as a component. Signs and whitespace are rejected.
fn parse_component(raw: Option<&str>, fallback: i64) -> Option<i64> {
    match raw {
        Some(raw) if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => {
            raw.parse::<i64>().ok()
        }
        Some(_) => None,
        None => Some(fallback),
    }
}
