use crate::fields::error::FieldError;
use crate::format::error::FormatError;
use config::ConfigError;
use thiserror::Error;
use validator::ValidationErrors;

/// The widget could not be attached to its host element.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("The host element must be an input element, got '{0}'.")]
    NotAnInputElement(String),
    #[error("The host element must be a single line text input, got type '{0}'.")]
    NotSingleLineText(String),
    #[error("The host element must have a non-empty \"name\" attribute.")]
    MissingName,
    #[error(transparent)]
    InvalidConfig(#[from] ValidationErrors),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Error while processing original value of field '{name}'. {source}")]
    Format {
        name: String,
        #[source]
        source: FormatError,
    },
    #[error("Field '{0}' is already rendered.")]
    AlreadyRendered(String),
    #[error("Field '{0}' is not rendered yet.")]
    NotRendered(String),
    #[error(transparent)]
    Field(#[from] FieldError),
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
