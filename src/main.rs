//! Engine Clock - engine start/stop time entry for pilots
//!
//! This is the main entry point for the engine-clock server.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use engine_clock::{
    config::Config,
    state::AppState,
    api::create_router,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("engine_clock={},tower_http=info", config.log_level()))
        .init();

    info!("Starting engine-clock server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}", config.host, config.port);

    let state = Arc::new(AppState::new(config.port, config.host.clone()));
    let app = create_router(state);

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /select/:field - Select engineStart or engineStop");
    info!("  POST /deselect      - Select no field");
    info!("  POST /digit/:digit  - Type a digit into the active field");
    info!("  POST /backspace     - Remove the last digit");
    info!("  POST /clear         - Clear the active field");
    info!("  POST /reset         - Clear everything");
    info!("  GET  /status        - Current times and elapsed engine time");
    info!("  GET  /install-hint  - Home-screen install hint for this client");
    info!("  GET  /health        - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
