use crate::fields::FieldKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Field '{kind}' is empty.")]
    Empty { kind: FieldKind },
    #[error("Field '{kind}' needs at least {min} characters, got {found}.")]
    TooShort {
        kind: FieldKind,
        min: usize,
        found: usize,
    },
    #[error("Field '{0}' is not active for this widget.")]
    Inactive(FieldKind),
    #[error("Field '{0}' is typed, not picked from a list.")]
    NotAChoice(FieldKind),
}

impl FieldError {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldError::Empty { kind } | FieldError::TooShort { kind, .. } => *kind,
            FieldError::Inactive(kind) | FieldError::NotAChoice(kind) => *kind,
        }
    }

    /// Checks the length rule for a raw value. Empty wins over too short.
    pub fn check_length(kind: FieldKind, raw: &str) -> Result<(), FieldError> {
        let found = raw.chars().count();
        if found == 0 {
            Err(FieldError::Empty { kind })
        } else if found < kind.min_length() {
            Err(FieldError::TooShort {
                kind,
                min: kind.min_length(),
                found,
            })
        } else {
            Ok(())
        }
    }
}
