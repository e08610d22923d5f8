mod engine;
pub use self::engine::SyncEngine;
mod state;
pub use self::state::{EditKind, FieldState, SyncEvent};
mod timer;
pub use self::timer::DebounceTimers;
