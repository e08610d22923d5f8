mod calendar;
pub use self::calendar::{CalendarValidator, days_in_month, is_leap_year};
pub(crate) mod config_validation;
