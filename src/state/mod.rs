//! State management module
//!
//! The entry state is a plain value; `AppState` is the one controller that owns it.

pub mod app_state;
pub mod entry_state;

// Re-export main types
pub use app_state::AppState;
pub use entry_state::{Action, EntryState};
