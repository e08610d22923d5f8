pub mod cli;
pub mod config;
mod constants;
pub mod error;
pub mod fields;
pub mod format;
pub mod locale;
pub mod sync;
pub mod validation;
pub mod widget;

pub use widget::DateTimeField;
