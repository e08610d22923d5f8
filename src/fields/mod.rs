pub mod error;
mod field_kind;
pub use self::field_kind::{FieldHalf, FieldKind, FieldType};
pub(crate) use self::field_kind::pad_two_digits;
mod field_store;
pub use self::field_store::{FieldStore, FieldValues};
