//! Main application state management

use std::{sync::Mutex, time::Instant};
use chrono::{DateTime, Utc};
use tracing::info;

use super::{Action, EntryState};

/// Single controller owning the entry state and server metadata
#[derive(Debug)]
pub struct AppState {
    /// Time values and active field
    pub entry: Mutex<EntryState>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
}

impl AppState {
    /// Create a new AppState with empty fields
    pub fn new(port: u16, host: String) -> Self {
        Self {
            entry: Mutex::new(EntryState::new()),
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
        }
    }

    /// Apply an action to the entry state and record it as the last action
    pub fn dispatch(&self, label: &str, action: Action) -> Result<EntryState, String> {
        let mut entry = self.entry.lock()
            .map_err(|e| format!("Failed to lock entry state: {}", e))?;

        let new_entry = entry.clone().apply(action);
        *entry = new_entry.clone();
        drop(entry); // Release the lock early

        info!(
            action = label,
            engine_start = %new_entry.engine_start.formatted(),
            engine_stop = %new_entry.engine_stop.formatted(),
            active = new_entry.active.map(|f| f.as_str()).unwrap_or("none"),
            "Entry state updated"
        );

        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(label.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        Ok(new_entry)
    }

    /// Get current entry state
    pub fn get_entry_state(&self) -> Result<EntryState, String> {
        self.entry.lock()
            .map(|entry| entry.clone())
            .map_err(|e| format!("Failed to lock entry state: {}", e))
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
