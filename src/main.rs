//! Rustodon Mock API Server
//!
//! A static stand-in for the Rustodon REST API built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌───────────────────────────────────────────────┐
//!                       │                 MOCK SERVER                    │
//!                       │                                                │
//!     Client Request    │  ┌─────────┐    ┌─────────┐    ┌───────────┐  │
//!     ──────────────────┼─▶│  axum   │───▶│ routing │───▶│ fixtures  │  │
//!                       │  │ server  │    │  table  │    │ (JSON)    │  │
//!                       │  └─────────┘    └─────────┘    └─────┬─────┘  │
//!                       │                                      │        │
//!     Client Response   │  ┌──────────────────────────┐        │        │
//!     ◀─────────────────┼──│ pretty JSON + CORS + id  │◀───────┘        │
//!                       │  └──────────────────────────┘                 │
//!                       │                                                │
//!                       │  config · observability · lifecycle            │
//!                       └───────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;

use rustodon_mock_server::lifecycle::startup;

#[derive(Parser)]
#[command(name = "rustodon-mock-server")]
#[command(about = "Static mock of the Rustodon REST API", long_about = None)]
struct Cli {
    /// Optional TOML file overriding the built-in defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Err(e) = startup::start(cli.config.as_deref()).await {
        tracing::error!(error = %e, "Mock server failed");
        return Err(e.into());
    }

    Ok(())
}
