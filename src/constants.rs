use std::time::Duration;

pub const DATETIME_FORMAT: &str = "Y-m-d H:i:s";
pub const DATE_FORMAT: &str = "Y-m-d";
pub const TIME_FORMAT: &str = "H:i:s";

/// Quiet period before a typed value is judged.
pub const INSERT_DEBOUNCE: Duration = Duration::from_millis(600);
/// Quiet period after a backward delete. Longer so erasing digits does not flash an error.
pub const DELETE_DEBOUNCE: Duration = Duration::from_millis(1200);

pub const DEFAULT_FIELD_FORMAT: &str = "local";
pub const DEFAULT_CALENDAR_BUTTON: &str = r##"<a href="#">Afficher le calendrier</a>"##;
pub const DEFAULT_LANG: &str = "en-US";

pub const WRAPPER_CLASS: &str = "datetimefield-wrapper";
pub const CONTROL_PREFIX: &str = "datetimefield";
pub const ERROR_CLASS: &str = "datetimefield-error";
