use crate::fields::error::FieldError;
use crate::fields::{FieldKind, FieldStore};
use crate::sync::state::{EditKind, FieldState, SyncEvent};
use crate::sync::timer::DebounceTimers;
use crate::validation::CalendarValidator;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::time::Duration;

/// Runs the debounced commit/rollback protocol over a [`FieldStore`].
///
/// Edits are applied to the store immediately. Empty values are flagged at
/// once; everything else is judged when the field's debounce timer fires.
/// A judged value is either committed or replaced by the field's backup.
#[derive(Debug)]
pub struct SyncEngine {
    store: FieldStore,
    validator: CalendarValidator,
    timers: DebounceTimers,
    states: HashMap<FieldKind, FieldState>,
}

impl SyncEngine {
    pub fn new(store: FieldStore, validator: CalendarValidator) -> Self {
        let states = store
            .active_fields()
            .iter()
            .map(|kind| (*kind, FieldState::Clean))
            .collect();
        SyncEngine {
            store,
            validator,
            timers: DebounceTimers::default(),
            states,
        }
    }

    pub fn store(&self) -> &FieldStore {
        &self.store
    }

    pub fn validator(&self) -> &CalendarValidator {
        &self.validator
    }

    pub fn state(&self, kind: FieldKind) -> Option<&FieldState> {
        self.states.get(&kind)
    }

    pub fn has_errors(&self) -> bool {
        self.states.values().any(FieldState::is_errored)
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// True when no validation is pending for any field.
    pub fn is_quiescent(&self) -> bool {
        self.timers.next_deadline().is_none()
    }

    /// Handles a raw edit of `kind` at time `now`.
    ///
    /// The month is a closed choice and is judged synchronously, see [`SyncEngine::select`].
    pub fn edit(
        &mut self,
        kind: FieldKind,
        raw: &str,
        edit: EditKind,
        now: Duration,
    ) -> Result<SyncEvent, FieldError> {
        if kind.is_choice() {
            return self.select(kind, raw);
        }
        self.store.set(kind, raw)?;
        self.states.insert(kind, FieldState::Clean);

        if raw.is_empty() {
            self.timers.cancel(kind);
            return Ok(self.flag(FieldError::Empty { kind }));
        }

        if self.timers.is_pending(kind) {
            debug!("Restarting the debounce of '{kind}'");
        }
        let deadline = self.timers.schedule(kind, now, edit);
        debug!("Scheduled validation of '{kind}' for {deadline:?}");
        self.states.insert(kind, FieldState::Editing { deadline });
        Ok(SyncEvent::Scheduled { kind, deadline })
    }

    /// Handles a pick from a closed list of choices. Judged without a timer.
    ///
    /// Typed kinds are refused; they go through [`SyncEngine::edit`].
    pub fn select(&mut self, kind: FieldKind, raw: &str) -> Result<SyncEvent, FieldError> {
        if !kind.is_choice() {
            return Err(FieldError::NotAChoice(kind));
        }
        self.store.set(kind, raw)?;
        self.timers.cancel(kind);
        self.states.insert(kind, FieldState::Clean);
        self.judge(kind)
    }

    /// Fires every timer due at `now`, in deadline order.
    pub fn advance(&mut self, now: Duration) -> Result<Vec<SyncEvent>, FieldError> {
        self.timers
            .take_due(now)
            .into_iter()
            .map(|kind| self.fire(kind))
            .collect()
    }

    /// Judges the current value of `kind` right away, dropping any pending timer.
    pub fn revalidate(&mut self, kind: FieldKind) -> Result<SyncEvent, FieldError> {
        self.timers.cancel(kind);
        self.fire(kind)
    }

    fn fire(&mut self, kind: FieldKind) -> Result<SyncEvent, FieldError> {
        let candidate = self.store.get(kind).unwrap_or_default();
        if !kind.is_choice()
            && let Err(err) = FieldError::check_length(kind, candidate)
        {
            return Ok(self.flag(err));
        }
        self.judge(kind)
    }

    fn judge(&mut self, kind: FieldKind) -> Result<SyncEvent, FieldError> {
        if self
            .validator
            .is_valid_half(kind.half(), self.store.values())
        {
            self.store.commit(kind)?;
            self.states.insert(kind, FieldState::Clean);
            let value = self.store.get(kind).unwrap_or_default().to_string();
            info!("Committed '{kind}' = '{value}'");
            Ok(SyncEvent::Committed { kind, value })
        } else {
            self.reject(kind)
        }
    }

    fn reject(&mut self, kind: FieldKind) -> Result<SyncEvent, FieldError> {
        let rejected = self.store.get(kind).unwrap_or_default().to_string();
        self.store.rollback(kind)?;
        self.states.insert(kind, FieldState::Clean);
        let restored = self.store.get(kind).unwrap_or_default().to_string();
        warn!(
            "The provided value is not a valid {}. Field '{kind}' value '{rejected}' was reset to '{restored}'.",
            kind.half()
        );
        Ok(SyncEvent::RolledBack {
            kind,
            rejected,
            restored,
        })
    }

    fn flag(&mut self, err: FieldError) -> SyncEvent {
        debug!("{err}");
        self.states.insert(err.kind(), FieldState::Errored(err.clone()));
        SyncEvent::Errored(err)
    }
}
