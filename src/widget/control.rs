use crate::constants::{CONTROL_PREFIX, ERROR_CLASS, WRAPPER_CLASS};
use crate::fields::FieldKind;
use crate::locale::LocaleProvider;
use chrono::Month;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Two digit month code, `01` to `12`.
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlWidget {
    Text { min_length: usize },
    Select { options: Vec<ChoiceOption> },
}

/// The generated input for one sub-field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubFieldControl {
    pub kind: FieldKind,
    /// `<host name>__datetimefield_<kind>`
    pub name: String,
    pub class: String,
    pub widget: ControlWidget,
    pub error: bool,
}

impl SubFieldControl {
    pub fn new(host_name: &str, kind: FieldKind, locale: &impl LocaleProvider) -> Self {
        let widget = if kind.is_choice() {
            ControlWidget::Select {
                options: month_options(locale),
            }
        } else {
            ControlWidget::Text {
                min_length: kind.min_length(),
            }
        };
        SubFieldControl {
            kind,
            name: format!("{host_name}__{CONTROL_PREFIX}_{kind}"),
            class: format!("{CONTROL_PREFIX}_{kind}"),
            widget,
            error: false,
        }
    }

    pub fn classes(&self) -> Vec<String> {
        let mut classes = vec![self.class.clone()];
        if self.error {
            classes.push(ERROR_CLASS.to_string());
        }
        classes
    }
}

fn month_options(locale: &impl LocaleProvider) -> Vec<ChoiceOption> {
    (1..=12u8)
        .filter_map(|number| Month::try_from(number).ok())
        .map(|month| ChoiceOption {
            value: format!("{:02}", month.number_from_month()),
            label: locale.month_name(month),
        })
        .collect()
}

/// The element inserted in place of the host, holding one control per active field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWrapper {
    pub classes: Vec<String>,
    pub controls: Vec<SubFieldControl>,
}

impl FieldWrapper {
    pub fn new(host_class: Option<&str>, controls: Vec<SubFieldControl>) -> Self {
        let mut classes = vec![WRAPPER_CLASS.to_string()];
        classes.extend(
            host_class
                .unwrap_or_default()
                .split_whitespace()
                .map(str::to_string),
        );
        FieldWrapper { classes, controls }
    }

    pub fn control(&self, kind: FieldKind) -> Option<&SubFieldControl> {
        self.controls.iter().find(|control| control.kind == kind)
    }

    pub fn control_mut(&mut self, kind: FieldKind) -> Option<&mut SubFieldControl> {
        self.controls.iter_mut().find(|control| control.kind == kind)
    }

    pub fn order(&self) -> Vec<FieldKind> {
        self.controls.iter().map(|control| control.kind).collect()
    }
}
