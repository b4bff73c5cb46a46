//! Router assembly and action handlers.
//!
//! Four action endpoints map one-to-one onto sequencer actions; the root
//! serves a minimal control panel that drives them with `fetch()`. Handlers
//! hold the request open for the full sequence (settle delays plus hold),
//! so UP/DOWN/STOP responses arrive only after the final OFF frame is out.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::json;

use crate::state::AppState;

/// Control panel page served at `/`.
const CONTROL_PANEL: &str = r#"<!doctype html>
<html>
<head><title>Relay Control</title></head>
<body>
<h1>Screen Control Panel</h1>
<button onclick="run('/up')">UP</button>
<button onclick="run('/down')">DOWN</button>
<button onclick="run('/stop')">STOP</button>
<button onclick="run('/off')">OFF</button>
<p id="status"></p>
<script>
function run(path) {
  fetch(path)
    .then(r => r.json())
    .then(j => { document.getElementById('status').textContent = j.status || j.error; });
}
</script>
</body>
</html>
"#;

/// Assemble the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/up", get(up))
        .route("/down", get(down))
        .route("/stop", get(stop))
        .route("/off", get(off))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Error wrapper turning a failed sequence into a 500 JSON response.
#[derive(Debug)]
pub struct ApiError(relayctl_core::Error);

impl From<relayctl_core::Error> for ApiError {
    fn from(err: relayctl_core::Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "relay action failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

/// `GET /` -- the control panel page.
async fn index() -> Html<&'static str> {
    Html(CONTROL_PANEL)
}

/// `GET /healthz` -- liveness probe.
async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /up` -- run the actuator up for the configured hold duration.
async fn up(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    state.sequencer.up(state.hold).await?;
    Ok(Json(json!({
        "status": format!("UP executed ({:.1}s)", state.hold.as_secs_f64())
    })))
}

/// `GET /down` -- run the actuator down for the configured hold duration.
async fn down(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    state.sequencer.down(state.hold).await?;
    Ok(Json(json!({
        "status": format!("DOWN executed ({:.1}s)", state.hold.as_secs_f64())
    })))
}

/// `GET /stop` -- brake for the configured hold duration.
async fn stop(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    state.sequencer.stop(state.hold).await?;
    Ok(Json(json!({
        "status": format!("STOP executed ({:.1}s)", state.hold.as_secs_f64())
    })))
}

/// `GET /off` -- release both relays immediately.
async fn off(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    state.sequencer.off().await?;
    Ok(Json(json!({ "status": "OFF executed" })))
}
