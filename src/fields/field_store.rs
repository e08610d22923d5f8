use crate::fields::error::FieldError;
use crate::fields::{FieldKind, FieldType};
use std::collections::BTreeMap;

/// Field values keyed by kind, ordered year first and seconds last.
pub type FieldValues = BTreeMap<FieldKind, String>;

/// Current and last known good value of every active sub-field.
///
/// `set` is unconditional. Only `commit` moves a value into the backup and only
/// `rollback` reads it back, so the backup always holds a value that passed
/// validation (or the initial seed).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldStore {
    field_type: FieldType,
    values: FieldValues,
    backups: FieldValues,
}

impl FieldStore {
    /// Creates a store with every active field seeded from `seed`.
    ///
    /// Non-year seeds are brought to two digits. Kinds missing from `seed` or
    /// not active for `field_type` are skipped.
    pub fn new(field_type: FieldType, seed: &FieldValues) -> Self {
        let values: FieldValues = field_type
            .active_fields()
            .iter()
            .filter_map(|kind| {
                seed.get(kind)
                    .map(|value| (*kind, kind.normalize(value.trim())))
            })
            .collect();
        FieldStore {
            field_type,
            backups: values.clone(),
            values,
        }
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn active_fields(&self) -> &'static [FieldKind] {
        self.field_type.active_fields()
    }

    pub fn get(&self, kind: FieldKind) -> Option<&str> {
        self.values.get(&kind).map(String::as_str)
    }

    pub fn backup(&self, kind: FieldKind) -> Option<&str> {
        self.backups.get(&kind).map(String::as_str)
    }

    pub fn set(&mut self, kind: FieldKind, value: impl Into<String>) -> Result<(), FieldError> {
        self.ensure_active(kind)?;
        self.values.insert(kind, value.into());
        Ok(())
    }

    /// Accepts the current value: it is normalized in place and copied into the backup.
    pub fn commit(&mut self, kind: FieldKind) -> Result<(), FieldError> {
        self.ensure_active(kind)?;
        if let Some(value) = self.values.get_mut(&kind) {
            *value = kind.normalize(value);
            self.backups.insert(kind, value.clone());
        }
        Ok(())
    }

    /// Discards the current value and restores the backup.
    pub fn rollback(&mut self, kind: FieldKind) -> Result<(), FieldError> {
        self.ensure_active(kind)?;
        match self.backups.get(&kind) {
            Some(backup) => {
                self.values.insert(kind, backup.clone());
            }
            None => {
                self.values.remove(&kind);
            }
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn is_clean(&self, kind: FieldKind) -> bool {
        self.values.get(&kind) == self.backups.get(&kind)
    }

    /// The aggregate value: every active field's current value.
    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    fn ensure_active(&self, kind: FieldKind) -> Result<(), FieldError> {
        if self.field_type.is_active(kind) {
            Ok(())
        } else {
            Err(FieldError::Inactive(kind))
        }
    }
}
