use crate::fields::FieldHalf;
use thiserror::Error;

/// A value does not fit the token layout it is supposed to be encoded with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error(
        "The {half} value '{value}' has {found} segments, but the format '{format}' expects {expected}."
    )]
    SegmentCountMismatch {
        half: FieldHalf,
        format: String,
        value: String,
        expected: usize,
        found: usize,
    },
    #[error(
        "Could not split datetime value '{value}' into a date and a time segment. Found {found} numeric segments."
    )]
    DatetimeDecomposition { value: String, found: usize },
    #[error("The datetime format '{format}' has no time part. Date and time must be separated by a space.")]
    MissingTimeFormat { format: String },
}
