use crate::fields::{FieldHalf, FieldType, FieldValues};
use crate::format::error::FormatError;
use crate::format::format_string::FormatString;
use crate::format::token::Token;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

static NUMERIC_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]").expect("static regex is valid"));

/// The character the segments of one half are separated by.
///
/// Dates use `/` when the layout contains one, times use `:`; both fall back to `-`.
pub fn separator_for(half: FieldHalf, format: &str) -> char {
    let preferred = match half {
        FieldHalf::Date => '/',
        FieldHalf::Time => ':',
    };
    if format.contains(preferred) {
        preferred
    } else {
        '-'
    }
}

/// Extracts the components of one half from `value` using the layout `format`.
///
/// Only layout segments that are exactly one token are mapped; other segments
/// are skipped.
pub fn parse_half(half: FieldHalf, format: &str, value: &str) -> Result<FieldValues, FormatError> {
    let separator = separator_for(half, format);
    let format_segments: Vec<&str> = format.split(separator).collect();
    let value_segments: Vec<&str> = value.split(separator).collect();

    if format_segments.len() != value_segments.len() {
        return Err(FormatError::SegmentCountMismatch {
            half,
            format: format.to_string(),
            value: value.to_string(),
            expected: format_segments.len(),
            found: value_segments.len(),
        });
    }

    let mut values = FieldValues::new();
    for (format_segment, value_segment) in format_segments.iter().zip(value_segments) {
        let mut chars = format_segment.chars();
        match (chars.next().and_then(Token::from_char), chars.next()) {
            (Some(token), None) if token.half() == half => {
                values.insert(token.kind(), value_segment.to_string());
            }
            _ => debug!("Skipping format segment '{format_segment}' of '{format}'"),
        }
    }
    Ok(values)
}

/// Splits a datetime value into its date and time segment.
///
/// Whitespace separated pieces without a digit are dropped; the first two
/// remaining pieces are taken.
pub fn split_datetime_value(value: &str) -> Result<(String, String), FormatError> {
    let segments: Vec<&str> = value
        .split_whitespace()
        .filter(|segment| NUMERIC_SEGMENT.is_match(segment))
        .take(2)
        .collect();

    match segments.as_slice() {
        [date, time] => Ok((date.to_string(), time.to_string())),
        _ => Err(FormatError::DatetimeDecomposition {
            value: value.to_string(),
            found: segments.len(),
        }),
    }
}

/// Decodes a complete widget value into raw field values.
///
/// An empty value decodes to an empty mapping. For `datetime` both halves
/// must decode, otherwise nothing is returned.
pub fn parse(
    field_type: FieldType,
    format: &FormatString,
    value: &str,
) -> Result<FieldValues, FormatError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(FieldValues::new());
    }

    match field_type {
        FieldType::Date => parse_half(FieldHalf::Date, format.as_str(), &strip_whitespace(value)),
        FieldType::Time => parse_half(FieldHalf::Time, format.as_str(), &strip_whitespace(value)),
        FieldType::Datetime => {
            let (date_format, time_format) =
                format
                    .split_halves()
                    .ok_or_else(|| FormatError::MissingTimeFormat {
                        format: format.to_string(),
                    })?;
            let (date_value, time_value) = split_datetime_value(value)?;

            let mut values = parse_half(FieldHalf::Date, date_format.as_str(), &date_value)?;
            values.extend(parse_half(
                FieldHalf::Time,
                time_format.as_str(),
                &time_value,
            )?);
            Ok(values)
        }
    }
}

fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn values(pairs: &[(FieldKind, &str)]) -> FieldValues {
        pairs
            .iter()
            .map(|(kind, value)| (*kind, value.to_string()))
            .collect()
    }

    #[rstest]
    #[case(FieldHalf::Date, "d/m/Y", '/')]
    #[case(FieldHalf::Date, "Y-m-d", '-')]
    #[case(FieldHalf::Time, "H:i:s", ':')]
    #[case(FieldHalf::Time, "H-i-s", '-')]
    fn test_separator_for(#[case] half: FieldHalf, #[case] format: &str, #[case] expected: char) {
        assert_eq!(separator_for(half, format), expected);
    }

    #[rstest]
    fn test_parse_half_date() {
        let parsed = parse_half(FieldHalf::Date, "d/m/Y", "15/06/2022").unwrap();
        assert_eq!(
            parsed,
            values(&[
                (FieldKind::Year, "2022"),
                (FieldKind::Month, "06"),
                (FieldKind::Day, "15"),
            ])
        );
    }

    #[rstest]
    fn test_parse_half_short_year_maps_to_year() {
        let parsed = parse_half(FieldHalf::Date, "y-m-d", "22-06-15").unwrap();
        assert_eq!(parsed.get(&FieldKind::Year).map(String::as_str), Some("22"));
    }

    #[rstest]
    fn test_parse_half_alternate_hour_token() {
        let parsed = parse_half(FieldHalf::Time, "h:i", "21:05").unwrap();
        assert_eq!(
            parsed,
            values(&[(FieldKind::Hours, "21"), (FieldKind::Minutes, "05")])
        );
    }

    #[rstest]
    fn test_parse_half_segment_count_mismatch() {
        let err = parse_half(FieldHalf::Time, "H:i:s", "09:30").unwrap_err();
        assert_eq!(
            err,
            FormatError::SegmentCountMismatch {
                half: FieldHalf::Time,
                format: "H:i:s".to_string(),
                value: "09:30".to_string(),
                expected: 3,
                found: 2,
            }
        );
    }

    #[rstest]
    fn test_parse_half_skips_compound_segments() {
        let parsed = parse_half(FieldHalf::Date, "Ym-d", "202206-15").unwrap();
        assert_eq!(parsed, values(&[(FieldKind::Day, "15")]));
    }

    #[rstest]
    #[case("2022-01-05 09:30:00", ("2022-01-05", "09:30:00"))]
    #[case("  2022-01-05   09:30:00  ", ("2022-01-05", "09:30:00"))]
    #[case("on 2022-01-05 at 09:30:00 sharp", ("2022-01-05", "09:30:00"))]
    #[case("2022-01-05 09:30:00 extra-1", ("2022-01-05", "09:30:00"))]
    fn test_split_datetime_value(#[case] value: &str, #[case] expected: (&str, &str)) {
        let (date, time) = split_datetime_value(value).unwrap();
        assert_eq!((date.as_str(), time.as_str()), expected);
    }

    #[rstest]
    #[case("2022-01-05", 1)]
    #[case("today now", 0)]
    fn test_split_datetime_value_fails(#[case] value: &str, #[case] found: usize) {
        assert_eq!(
            split_datetime_value(value),
            Err(FormatError::DatetimeDecomposition {
                value: value.to_string(),
                found,
            })
        );
    }

    #[rstest]
    fn test_parse_datetime() {
        let format = FormatString::new("Y-m-d H:i:s");
        let parsed = parse(FieldType::Datetime, &format, "2022-01-05 09:30:00").unwrap();
        assert_eq!(
            parsed,
            values(&[
                (FieldKind::Year, "2022"),
                (FieldKind::Month, "01"),
                (FieldKind::Day, "05"),
                (FieldKind::Hours, "09"),
                (FieldKind::Minutes, "30"),
                (FieldKind::Seconds, "00"),
            ])
        );
    }

    #[rstest]
    fn test_parse_datetime_requires_both_halves() {
        let format = FormatString::new("Y-m-d H:i:s");
        let result = parse(FieldType::Datetime, &format, "2022-01-05 09:30");
        assert!(matches!(
            result,
            Err(FormatError::SegmentCountMismatch {
                half: FieldHalf::Time,
                ..
            })
        ));
    }

    #[rstest]
    fn test_parse_datetime_format_without_time() {
        let format = FormatString::new("Y-m-d");
        let result = parse(FieldType::Datetime, &format, "2022-01-05 09:30:00");
        assert!(matches!(result, Err(FormatError::MissingTimeFormat { .. })));
    }

    #[rstest]
    fn test_parse_single_half_strips_whitespace() {
        let format = FormatString::new("H:i:s");
        let parsed = parse(FieldType::Time, &format, " 09 :30:00 ").unwrap();
        assert_eq!(parsed.get(&FieldKind::Hours).map(String::as_str), Some("09"));
    }

    #[rstest]
    fn test_parse_empty_value() {
        let format = FormatString::new("Y-m-d");
        assert!(parse(FieldType::Date, &format, "   ").unwrap().is_empty());
    }

    #[rstest]
    #[case(FieldType::Date, "Y-m-d", "2022-06-15", "d/m/Y")]
    #[case(FieldType::Date, "d/m/Y", "15/06/2022", "m-d-Y")]
    #[case(FieldType::Date, "y-m-d", "22-06-15", "d/m/y")]
    #[case(FieldType::Time, "H:i:s", "09:30:05", "s-i-H")]
    #[case(FieldType::Time, "h:i:s", "21:05:00", "H-i-s")]
    #[case(FieldType::Datetime, "Y-m-d H:i:s", "2022-01-05 09:30:00", "d/m/Y H-i-s")]
    #[case(FieldType::Datetime, "d/m/y h:i:s", "05/01/22 21:30:00", "Y-m-d H:i:s")]
    fn test_parse_then_render_denotes_same_value(
        #[case] field_type: FieldType,
        #[case] input_format: &str,
        #[case] value: &str,
        #[case] output_format: &str,
    ) {
        let input = FormatString::new(input_format);
        let output = FormatString::new(output_format);
        let parsed = parse(field_type, &input, value).unwrap();
        let rendered = output.render(&parsed);
        let reparsed = parse(field_type, &output, &rendered).unwrap();
        assert_eq!(parsed, reparsed);
        assert_eq!(parsed.len(), field_type.active_fields().len());
    }
}
