//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use tracing::{debug, error};

use crate::{
    platform::{install_hint, HeaderCapabilities, PlatformCapabilities},
    state::{Action, AppState},
    timing::{Digit, TimeField},
};
use super::responses::{ApiResponse, HealthResponse, InstallHintResponse, StatusResponse};

/// Run an action through the controller and wrap the result
fn apply_action(
    state: &AppState,
    label: &str,
    action: Action,
    message: String,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.dispatch(label, action) {
        Ok(entry) => Ok(Json(ApiResponse::applied(message, &entry))),
        Err(e) => {
            error!("Failed to apply {}: {}", label, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Answer with the unchanged state
fn ignore_input(state: &AppState, message: String) -> Result<Json<ApiResponse>, StatusCode> {
    debug!("{}", message);
    match state.get_entry_state() {
        Ok(entry) => Ok(Json(ApiResponse::ignored(message, &entry))),
        Err(e) => {
            error!("Failed to get entry state: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /select/:field - Make a field active
pub async fn select_handler(
    State(state): State<Arc<AppState>>,
    Path(field): Path<String>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match TimeField::from_name(&field) {
        Some(field) => apply_action(
            &state,
            "select",
            Action::Select(Some(field)),
            format!("{} selected", field.as_str()),
        ),
        None => ignore_input(&state, format!("Unknown field: {}", field)),
    }
}

/// Handle POST /deselect - Clear the active field pointer
pub async fn deselect_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    apply_action(&state, "deselect", Action::Select(None), "No field selected".to_string())
}

/// Handle POST /digit/:digit - Type one digit into the active field
pub async fn digit_handler(
    State(state): State<Arc<AppState>>,
    Path(digit): Path<String>,
) -> Result<Json<ApiResponse>, StatusCode> {
    let mut chars = digit.chars();
    let parsed = match (chars.next(), chars.next()) {
        (Some(c), None) => Digit::from_char(c),
        _ => None,
    };

    match parsed {
        Some(d) => apply_action(&state, "digit", Action::Digit(d), format!("Digit {} pressed", d.as_char())),
        None => ignore_input(&state, format!("Not a digit: {}", digit)),
    }
}

/// Handle POST /backspace - Remove the last digit of the active field
pub async fn backspace_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    apply_action(&state, "backspace", Action::Backspace, "Backspace pressed".to_string())
}

/// Handle POST /clear - Empty the active field
pub async fn clear_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    apply_action(&state, "clear", Action::Clear, "Active field cleared".to_string())
}

/// Handle POST /reset - Empty both fields and deselect
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    apply_action(&state, "reset", Action::Reset, "All fields reset".to_string())
}

/// Handle GET /status - Return current values and derived elapsed time
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let entry = match state.get_entry_state() {
        Ok(e) => e,
        Err(e) => {
            error!("Failed to get entry state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        entry: (&entry).into(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /install-hint - Decide which install affordance to show
pub async fn install_hint_handler(headers: HeaderMap) -> Json<InstallHintResponse> {
    let caps = HeaderCapabilities::from_headers(&headers);
    Json(InstallHintResponse {
        hint: install_hint(&caps),
        standalone: caps.is_standalone(),
        touch_device: caps.is_touch_device(),
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
