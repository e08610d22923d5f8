use crate::constants::{DELETE_DEBOUNCE, INSERT_DEBOUNCE};
use crate::fields::FieldKind;
use crate::sync::state::EditKind;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingValidation {
    deadline: Duration,
    order: u64,
}

/// One restartable timer per field.
///
/// Scheduling a field that already has a pending timer replaces it, so only
/// the last edit of a burst is ever validated. Time is whatever the caller
/// passes in as `now`.
#[derive(Debug, Default)]
pub struct DebounceTimers {
    pending: HashMap<FieldKind, PendingValidation>,
    next_order: u64,
}

impl DebounceTimers {
    pub fn delay_for(edit: EditKind) -> Duration {
        match edit {
            EditKind::Insert => INSERT_DEBOUNCE,
            EditKind::DeleteBackward => DELETE_DEBOUNCE,
        }
    }

    /// (Re)starts the timer of `kind` and returns its deadline.
    pub fn schedule(&mut self, kind: FieldKind, now: Duration, edit: EditKind) -> Duration {
        let deadline = now + Self::delay_for(edit);
        self.pending.insert(
            kind,
            PendingValidation {
                deadline,
                order: self.next_order,
            },
        );
        self.next_order += 1;
        deadline
    }

    pub fn cancel(&mut self, kind: FieldKind) -> bool {
        self.pending.remove(&kind).is_some()
    }

    pub fn is_pending(&self, kind: FieldKind) -> bool {
        self.pending.contains_key(&kind)
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.values().map(|pending| pending.deadline).min()
    }

    /// Removes and returns every field whose deadline is at or before `now`,
    /// earliest deadline first and in scheduling order on ties.
    pub fn take_due(&mut self, now: Duration) -> Vec<FieldKind> {
        let mut due: Vec<(FieldKind, PendingValidation)> = self
            .pending
            .iter()
            .filter(|(_, pending)| pending.deadline <= now)
            .map(|(kind, pending)| (*kind, *pending))
            .collect();
        due.sort_by_key(|(_, pending)| (pending.deadline, pending.order));

        for (kind, _) in &due {
            self.pending.remove(kind);
        }
        due.into_iter().map(|(kind, _)| kind).collect()
    }
}
