pub mod control;
pub use self::control::{ChoiceOption, ControlWidget, FieldWrapper, SubFieldControl};
mod date_time_field;
pub use self::date_time_field::DateTimeField;
pub mod element;
pub use self::element::{HostElement, InputElement};
