// relayctl-web -- web control panel for a 2-channel RS-232 relay board.
//
// Reads configuration from the environment (or .env), opens the serial
// connection once at startup, and exposes UP, DOWN, STOP, OFF endpoints
// plus a minimal HTML panel at /.

mod config;
mod routes;
mod state;

use anyhow::{Context, Result};

use relayctl_board::Sequencer;
use relayctl_transport::{normalize_port, SerialTransport};

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    // The board connection persists for the process lifetime; failing to
    // open it is fatal at startup rather than on first request.
    let port = normalize_port(&config.serial_port)?;
    let transport = SerialTransport::open(&port, config.baud_rate)
        .await
        .with_context(|| format!("could not open serial port {port}"))?;

    let state = AppState::new(Sequencer::new(Box::new(transport)), config.hold);
    let app = routes::app(state);

    let addr = format!("{}:{}", config.host, config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("could not bind {addr}"))?;

    tracing::info!(%addr, port = %port, hold = ?config.hold, "relay control panel listening");
    axum::serve(listener, app).await.context("server failed")?;

    Ok(())
}
