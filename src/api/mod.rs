//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/select/:field", post(select_handler))
        .route("/deselect", post(deselect_handler))
        .route("/digit/:digit", post(digit_handler))
        .route("/backspace", post(backspace_handler))
        .route("/clear", post(clear_handler))
        .route("/reset", post(reset_handler))
        .route("/status", get(status_handler))
        .route("/install-hint", get(install_hint_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
