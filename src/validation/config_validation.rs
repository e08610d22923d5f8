use crate::config::WidgetConfig;
use crate::fields::{FieldHalf, FieldType};
use crate::format::FormatString;
use std::borrow::Cow;
use validator::ValidationError;

/// Both formats must carry date tokens exactly when the type has a date part,
/// and time tokens exactly when it has a time part.
pub(crate) fn validate_formats_match_type(config: &WidgetConfig) -> Result<(), ValidationError> {
    validate_format(config.field_type, &config.input_format(), "inputFormat")?;
    validate_format(config.field_type, &config.output_format(), "outputFormat")
}

fn validate_format(
    field_type: FieldType,
    format: &FormatString,
    option: &'static str,
) -> Result<(), ValidationError> {
    for half in [FieldHalf::Date, FieldHalf::Time] {
        if format.has_half(half) != field_type.has_half(half) {
            let mut error = ValidationError::new("format_type_mismatch");
            error.add_param(Cow::from("option"), &option);
            error.add_param(Cow::from("format"), &format.as_str());
            error.add_param(Cow::from("type"), &field_type.to_string());
            return Err(error.with_message(Cow::Owned(format!(
                "The {option} '{format}' does not match the {half} tokens of type '{field_type}'."
            ))));
        }
    }

    if field_type == FieldType::Datetime && format.split_halves().is_none() {
        let mut error = ValidationError::new("missing_half_separator");
        error.add_param(Cow::from("option"), &option);
        error.add_param(Cow::from("format"), &format.as_str());
        return Err(error.with_message(Cow::Owned(format!(
            "The {option} '{format}' must separate date and time with a space."
        ))));
    }
    Ok(())
}
