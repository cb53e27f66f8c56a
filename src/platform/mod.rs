//! Platform detection module
//!
//! Environment-dependent checks used by the install prompt. Nothing here
//! touches time entry.

pub mod capabilities;

// Re-export main types
pub use capabilities::{install_hint, HeaderCapabilities, InstallHint, PlatformCapabilities};
