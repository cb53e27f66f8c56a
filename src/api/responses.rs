//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    platform::InstallHint,
    state::EntryState,
    timing::{ElapsedSummary, TimeField},
};

/// Display view of the entry state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryView {
    pub engine_start: String,
    pub engine_stop: String,
    pub active: Option<TimeField>,
    pub elapsed: ElapsedSummary,
}

impl From<&EntryState> for EntryView {
    fn from(entry: &EntryState) -> Self {
        Self {
            engine_start: entry.formatted(TimeField::EngineStart),
            engine_stop: entry.formatted(TimeField::EngineStop),
            active: entry.active,
            elapsed: entry.summary(),
        }
    }
}

/// API response structure for keypad and selection endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub entry: EntryView,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, entry: &EntryState) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            entry: entry.into(),
        }
    }

    /// The action was applied
    pub fn applied(message: String, entry: &EntryState) -> Self {
        Self::new("applied".to_string(), message, entry)
    }

    /// The input was not usable and nothing changed
    pub fn ignored(message: String, entry: &EntryState) -> Self {
        Self::new("ignored".to_string(), message, entry)
    }
}

/// Status response with server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub entry: EntryView,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Install prompt response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallHintResponse {
    pub hint: InstallHint,
    pub standalone: bool,
    pub touch_device: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
