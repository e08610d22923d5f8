use crate::fields::FieldKind;
use chrono::Month;

/// What the widget needs to know about the user's locale.
pub trait LocaleProvider {
    /// Year, month and day in the order the locale writes a date.
    fn date_order(&self) -> [FieldKind; 3];

    /// Hours, minutes and seconds in the order the locale writes a time.
    fn time_order(&self) -> [FieldKind; 3];

    /// Display name of a month, e.g. "June".
    fn month_name(&self, month: Month) -> String;
}
