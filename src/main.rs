use std::env;

use hrms_engine::api::{AppState, create_router};
use hrms_engine::config::ConfigLoader;
use hrms_engine::error::HrmsError;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "config/hrms.yaml";
const CONFIG_PATH_ENV: &str = "HRMS_CONFIG";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    let path = env::args()
        .nth(1)
        .or_else(|| env::var(CONFIG_PATH_ENV).ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = match ConfigLoader::load(&path) {
        Ok(config) => config,
        Err(HrmsError::ConfigNotFound { path }) => {
            warn!(path, "Config file not found, using built-in defaults");
            ConfigLoader::default()
        }
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let address = config.config().server.bind_addr.clone();
    info!(
        default_employer_code = config.default_employer_code(),
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));

    let listener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(address, "Failed to bind: {e}");
            std::process::exit(1);
        }
    };
    info!("Server running on {address}");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
    }

    info!("Server shut down");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
