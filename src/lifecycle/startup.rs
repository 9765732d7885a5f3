//! Startup orchestration.
//!
//! Config first, then logging, then the listener. Any error before the
//! listener is bound is fatal and returned to `main`.

use std::path::Path;
use thiserror::Error;

use crate::config::{load_config, ConfigError, MockServerConfig};
use crate::http::{MockServer, ServerError};
use crate::lifecycle::{signals, Shutdown};
use crate::observability::logging;

/// Fatal startup or serve failure.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Server(#[from] ServerError),
}

/// Resolve the configuration: the given file, or built-in defaults.
pub fn resolve_config(path: Option<&Path>) -> Result<MockServerConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(MockServerConfig::default()),
    }
}

/// Start the mock server and serve until a termination signal arrives.
pub async fn start(config_path: Option<&Path>) -> Result<(), StartupError> {
    let config = resolve_config(config_path)?;
    logging::init(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        config_file = ?config_path,
        "Configuration loaded"
    );

    let server = MockServer::new(config);
    let listener = server.bind().await?;
    let local_addr = listener.local_addr().map_err(ServerError::from)?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::trigger_on_signal(shutdown);

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
