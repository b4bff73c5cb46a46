//! Shared application state.
//!
//! `AppState` is injected into axum handlers via the `State` extractor.
//! It holds the sequencer -- and through it the single long-lived serial
//! connection to the board. The sequencer's internal lock serializes
//! concurrent requests: at most one action sequence is in flight against
//! the transport at a time.

use std::sync::Arc;
use std::time::Duration;

use relayctl_board::Sequencer;

/// Process-wide state shared by all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Owns the serial connection; executes all relay actions.
    pub sequencer: Arc<Sequencer>,
    /// Hold duration for UP/DOWN/STOP, configured once at startup.
    pub hold: Duration,
}

impl AppState {
    /// Create the shared state from an already-built sequencer.
    pub fn new(sequencer: Sequencer, hold: Duration) -> Self {
        AppState {
            sequencer: Arc::new(sequencer),
            hold,
        }
    }
}
