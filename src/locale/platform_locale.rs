use crate::constants::DEFAULT_LANG;
use crate::fields::FieldKind;
use crate::locale::traits::LocaleProvider;
use chrono::Month;
use std::env;

const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

const GERMAN_MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Languages writing dates year first.
const YEAR_FIRST_LANGUAGES: &[&str] = &["zh", "ja", "ko", "hu", "lt", "sv"];

/// Locale rules derived from a BCP 47 style tag such as `en-US` or `fr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformLocale {
    lang: String,
}

impl PlatformLocale {
    pub fn new(lang: &str) -> Self {
        PlatformLocale {
            lang: normalize_tag(lang),
        }
    }

    /// Reads the locale from `LANG`, e.g. `fr_FR.UTF-8` becomes `fr-FR`.
    pub fn from_env() -> Self {
        match env::var("LANG") {
            Ok(lang) if !lang.is_empty() && lang != "C" && lang != "POSIX" => {
                PlatformLocale::new(&lang)
            }
            _ => PlatformLocale::new(DEFAULT_LANG),
        }
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn language(&self) -> &str {
        self.lang.split('-').next().unwrap_or_default()
    }

    fn region(&self) -> Option<&str> {
        self.lang.split('-').nth(1)
    }
}

impl Default for PlatformLocale {
    fn default() -> Self {
        PlatformLocale::new(DEFAULT_LANG)
    }
}

impl LocaleProvider for PlatformLocale {
    fn date_order(&self) -> [FieldKind; 3] {
        let language = self.language();
        if language == "en" && matches!(self.region(), None | Some("US")) {
            [FieldKind::Month, FieldKind::Day, FieldKind::Year]
        } else if YEAR_FIRST_LANGUAGES.contains(&language) {
            [FieldKind::Year, FieldKind::Month, FieldKind::Day]
        } else {
            [FieldKind::Day, FieldKind::Month, FieldKind::Year]
        }
    }

    fn time_order(&self) -> [FieldKind; 3] {
        [FieldKind::Hours, FieldKind::Minutes, FieldKind::Seconds]
    }

    fn month_name(&self, month: Month) -> String {
        let index = month.number_from_month() as usize - 1;
        match self.language() {
            "fr" => FRENCH_MONTHS[index].to_string(),
            "de" => GERMAN_MONTHS[index].to_string(),
            _ => month.name().to_string(),
        }
    }
}

fn normalize_tag(lang: &str) -> String {
    let tag = lang.split(['.', '@']).next().unwrap_or_default();
    let mut parts = tag.split(['-', '_']).filter(|part| !part.is_empty());
    match (parts.next(), parts.next()) {
        (Some(language), Some(region)) => format!(
            "{}-{}",
            language.to_ascii_lowercase(),
            region.to_ascii_uppercase()
        ),
        (Some(language), None) => language.to_ascii_lowercase(),
        _ => DEFAULT_LANG.to_string(),
    }
}
