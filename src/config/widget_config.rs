use crate::constants::{DEFAULT_CALENDAR_BUTTON, DEFAULT_FIELD_FORMAT};
use crate::fields::FieldType;
use crate::format::FormatString;
use crate::validation::config_validation::validate_formats_match_type;
use log::warn;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Options of a date/time field widget.
///
/// Keys follow the option names of the widget (`type`, `inputFormat`, ...).
/// The lowercase aliases accept files whose keys were lowercased by a config source.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
#[validate(schema(function = "validate_formats_match_type"))]
pub struct WidgetConfig {
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    /// Layout of the value the host element starts with. Defaults by type.
    #[serde(default, alias = "inputformat")]
    pub input_format: Option<String>,
    /// Layout of the value written back to the host element. Defaults by type.
    #[serde(default, alias = "outputformat")]
    pub output_format: Option<String>,
    /// Order of the sub-fields. Only `local` is supported.
    #[serde(default = "default_field_format", alias = "fieldformat")]
    pub field_format: String,
    /// Not implemented.
    #[serde(default, alias = "hascalendar")]
    pub has_calendar: bool,
    /// Not implemented.
    #[serde(default = "default_calendar_button", alias = "showcalendarbutton")]
    pub show_calendar_button: String,
    /// Locale tag such as `fr-FR`. Taken from the environment when absent.
    #[serde(default)]
    pub lang: Option<String>,
}

impl WidgetConfig {
    pub fn new(field_type: FieldType) -> Self {
        WidgetConfig {
            field_type,
            input_format: None,
            output_format: None,
            field_format: default_field_format(),
            has_calendar: false,
            show_calendar_button: default_calendar_button(),
            lang: None,
        }
    }

    pub fn with_input_format(mut self, format: impl Into<String>) -> Self {
        self.input_format = Some(format.into());
        self
    }

    pub fn with_output_format(mut self, format: impl Into<String>) -> Self {
        self.output_format = Some(format.into());
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn input_format(&self) -> FormatString {
        self.resolve_format(self.input_format.as_deref())
    }

    pub fn output_format(&self) -> FormatString {
        self.resolve_format(self.output_format.as_deref())
    }

    /// Logs options that are accepted but have no effect yet.
    ///
    /// Custom field orders fall back to the locale order and the calendar popup
    /// is not available.
    pub fn warn_unsupported_options(&self) -> usize {
        let mut unsupported = 0;
        if self.field_format != DEFAULT_FIELD_FORMAT {
            warn!(
                "Field format '{}' is not supported, using '{DEFAULT_FIELD_FORMAT}'.",
                self.field_format
            );
            unsupported += 1;
        }
        if self.has_calendar {
            warn!("The calendar popup is not available.");
            unsupported += 1;
        }
        unsupported
    }

    fn resolve_format(&self, format: Option<&str>) -> FormatString {
        match format.map(str::trim) {
            Some(format) if !format.is_empty() => FormatString::new(format),
            _ => FormatString::new(self.field_type.default_format()),
        }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        WidgetConfig::new(FieldType::default())
    }
}

fn default_field_format() -> String {
    DEFAULT_FIELD_FORMAT.to_string()
}

fn default_calendar_button() -> String {
    DEFAULT_CALENDAR_BUTTON.to_string()
}
