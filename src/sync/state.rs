use crate::fields::FieldKind;
use crate::fields::error::FieldError;
use std::time::Duration;

/// Where a single sub-field stands in the edit protocol.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldState {
    /// Value equals backup, nothing pending.
    #[default]
    Clean,
    /// An edit is waiting for its debounce deadline.
    Editing { deadline: Duration },
    /// The value is empty or too short. Left only by a long enough edit.
    Errored(FieldError),
}

impl FieldState {
    pub fn is_errored(&self) -> bool {
        matches!(self, FieldState::Errored(_))
    }
}

/// How the host describes a raw edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditKind {
    #[default]
    Insert,
    /// Content was removed from the end, e.g. with backspace.
    DeleteBackward,
}

impl EditKind {
    /// Infers the edit kind from the value before and after the edit.
    pub fn between(old: &str, new: &str) -> EditKind {
        if new.len() < old.len() && old.starts_with(new) {
            EditKind::DeleteBackward
        } else {
            EditKind::Insert
        }
    }
}

/// The decided outcome of an edit or of a fired debounce timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// Validation is deferred until `deadline`.
    Scheduled { kind: FieldKind, deadline: Duration },
    /// The field is empty or too short; the composed output must be cleared.
    Errored(FieldError),
    /// The candidate passed validation and is now the backup.
    Committed { kind: FieldKind, value: String },
    /// The candidate failed validation and was replaced by the backup.
    RolledBack {
        kind: FieldKind,
        rejected: String,
        restored: String,
    },
}

impl SyncEvent {
    pub fn kind(&self) -> FieldKind {
        match self {
            SyncEvent::Scheduled { kind, .. }
            | SyncEvent::Committed { kind, .. }
            | SyncEvent::RolledBack { kind, .. } => *kind,
            SyncEvent::Errored(err) => err.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2022", "202", EditKind::DeleteBackward)]
    #[case("2", "", EditKind::DeleteBackward)]
    #[case("202", "2022", EditKind::Insert)]
    #[case("15", "25", EditKind::Insert)]
    #[case("15", "5", EditKind::Insert)]
    #[case("15", "15", EditKind::Insert)]
    fn test_edit_kind_between(#[case] old: &str, #[case] new: &str, #[case] expected: EditKind) {
        assert_eq!(EditKind::between(old, new), expected);
    }
}
