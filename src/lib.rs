//! Engine Clock - engine start/stop time entry for pilots
//!
//! This library provides keypad-style entry of two clock times and derives
//! the elapsed engine time as `HH:MM` and as tech-log tenths of an hour.

pub mod config;
pub mod timing;
pub mod state;
pub mod platform;
pub mod api;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{Action, AppState, EntryState};
pub use timing::{ElapsedSummary, TimeField};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
