use crate::error::ConfigurationError;

/// The original text input the widget replaces.
pub trait HostElement {
    fn tag_name(&self) -> &str;

    fn attribute(&self, name: &str) -> Option<&str>;

    fn value(&self) -> &str;

    fn set_value(&mut self, value: String);

    /// Takes the element out of the layout; the generated controls stand in for it.
    fn hide(&mut self);

    fn is_hidden(&self) -> bool;
}

/// Checks that `element` is a named single line text input and returns its name.
pub fn validate_host<H: HostElement>(element: &H) -> Result<String, ConfigurationError> {
    if !element.tag_name().eq_ignore_ascii_case("input") {
        return Err(ConfigurationError::NotAnInputElement(
            element.tag_name().to_string(),
        ));
    }

    match element.attribute("type") {
        Some(input_type) if input_type.eq_ignore_ascii_case("text") => {}
        other => {
            return Err(ConfigurationError::NotSingleLineText(
                other.unwrap_or_default().to_string(),
            ));
        }
    }

    match element.attribute("name").map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(ConfigurationError::MissingName),
    }
}

/// An in-memory input element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputElement {
    pub tag_name: String,
    pub input_type: Option<String>,
    pub name: Option<String>,
    pub class: Option<String>,
    pub value: String,
    pub hidden: bool,
}

impl InputElement {
    /// A `<input type="text">` with the given name and value.
    pub fn text(name: &str, value: &str) -> Self {
        InputElement {
            tag_name: "INPUT".to_string(),
            input_type: Some("text".to_string()),
            name: Some(name.to_string()),
            class: None,
            value: value.to_string(),
            hidden: false,
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }
}

impl HostElement for InputElement {
    fn tag_name(&self) -> &str {
        &self.tag_name
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "type" => self.input_type.as_deref(),
            "name" => self.name.as_deref(),
            "class" => self.class.as_deref(),
            _ => None,
        }
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }

    fn hide(&mut self) {
        self.hidden = true;
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }
}
