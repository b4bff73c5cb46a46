//! Action sequencer -- timed frame writes realizing the named actions.
//!
//! The sequencer translates a named [`Action`] into an ordered list of
//! [`Step`]s (frame writes and delays) and executes them against a
//! [`Transport`]. Planning is pure ([`plan`]), so the exact
//! (write, delay) sequence of every action is unit-testable without
//! hardware or real time; execution is the only part that touches I/O.
//!
//! Directional safety: for UP and DOWN the opposing relay's OFF frame is
//! written and its settle delay fully elapsed before the ON frame goes out,
//! so the two directional relays are never commanded ON at the same instant.

use std::time::Duration;

use tokio::sync::Mutex;
use tracing::debug;

use relayctl_core::error::Result;
use relayctl_core::transport::Transport;
use relayctl_core::types::{RelayId, RelayState, RelayTarget};

use crate::frame::Frame;

/// Pause enforced after every frame write.
///
/// A hardware processing requirement of the board: frames arriving faster
/// than this are silently dropped or misprocessed. Not configurable.
pub const SETTLE_DELAY: Duration = Duration::from_millis(200);

/// A named relay action, owned transiently for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Run the actuator "up" for `hold`, then stop.
    Up {
        /// How long relay 1 stays energized.
        hold: Duration,
    },
    /// Run the actuator "down" for `hold`, then stop.
    Down {
        /// How long relay 2 stays energized.
        hold: Duration,
    },
    /// Brake: energize both relays for `hold`, then release both.
    ///
    /// Observed behavior of the board/actuator pairing -- "stop" holds both
    /// channels ON rather than releasing them. See DESIGN.md.
    Stop {
        /// How long both relays stay energized.
        hold: Duration,
    },
    /// Release both relays immediately.
    Off,
    /// Set one relay (or both) to an explicit state.
    Set {
        /// Channel(s) to command.
        target: RelayTarget,
        /// Desired state.
        state: RelayState,
    },
}

/// One step of a planned action sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Write one frame to the transport.
    Write(Frame),
    /// Sleep for the fixed [`SETTLE_DELAY`].
    Settle,
    /// Sleep for the caller-supplied hold duration.
    Hold(Duration),
}

/// Translate an action into its ordered step list.
///
/// Every `Write` is followed by a `Settle`; `Hold` appears at most once.
pub fn plan(action: &Action) -> Vec<Step> {
    use RelayId::{One, Two};
    use RelayState::{Off, On};

    match *action {
        // Opposing relay released first; its settle elapses before the ON
        // frame is written.
        Action::Up { hold } => vec![
            Step::Write(Frame::new(Two, Off)),
            Step::Settle,
            Step::Write(Frame::new(One, On)),
            Step::Settle,
            Step::Hold(hold),
            Step::Write(Frame::new(One, Off)),
            Step::Settle,
        ],
        Action::Down { hold } => vec![
            Step::Write(Frame::new(One, Off)),
            Step::Settle,
            Step::Write(Frame::new(Two, On)),
            Step::Settle,
            Step::Hold(hold),
            Step::Write(Frame::new(Two, Off)),
            Step::Settle,
        ],
        Action::Stop { hold } => vec![
            Step::Write(Frame::new(One, On)),
            Step::Settle,
            Step::Write(Frame::new(Two, On)),
            Step::Settle,
            Step::Hold(hold),
            Step::Write(Frame::new(One, Off)),
            Step::Settle,
            Step::Write(Frame::new(Two, Off)),
            Step::Settle,
        ],
        Action::Off => vec![
            Step::Write(Frame::new(One, Off)),
            Step::Settle,
            Step::Write(Frame::new(Two, Off)),
            Step::Settle,
        ],
        Action::Set { target, state } => target
            .relays()
            .into_iter()
            .flat_map(|relay| [Step::Write(Frame::new(relay, state)), Step::Settle])
            .collect(),
    }
}

/// Executes action sequences against the board.
///
/// Owns the transport exclusively. The internal mutex is held for the full
/// duration of a sequence -- sleeps included -- so concurrent callers (e.g.
/// simultaneous HTTP requests against one long-lived serial connection)
/// queue whole actions rather than interleaving frames. An interleaved
/// OFF landing between another caller's ON and its hold would defeat the
/// directional-safety invariant.
pub struct Sequencer {
    transport: Mutex<Box<dyn Transport>>,
}

impl Sequencer {
    /// Create a sequencer owning `transport`.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Sequencer {
            transport: Mutex::new(transport),
        }
    }

    /// Execute one action sequence to completion.
    ///
    /// Steps run in planned order; nothing is skipped or reordered. A write
    /// failure aborts the remaining steps immediately and surfaces to the
    /// caller -- there are no compensating writes, so a relay can be left
    /// ON after a mid-sequence failure. There is no cancellation: once a
    /// sequence starts it runs until done or until a write fails.
    pub async fn run(&self, action: Action) -> Result<()> {
        let steps = plan(&action);
        debug!(?action, steps = steps.len(), "running action sequence");

        let mut transport = self.transport.lock().await;
        for step in steps {
            match step {
                Step::Write(frame) => {
                    debug!(relay = %frame.relay, state = %frame.state, "writing frame");
                    transport.send(&frame.to_bytes()).await?;
                }
                Step::Settle => tokio::time::sleep(SETTLE_DELAY).await,
                Step::Hold(hold) => tokio::time::sleep(hold).await,
            }
        }
        Ok(())
    }

    /// Set one relay (or both) to an explicit state.
    pub async fn set_relay(&self, target: RelayTarget, state: RelayState) -> Result<()> {
        self.run(Action::Set { target, state }).await
    }

    /// Run the actuator up for `hold`, then stop it.
    pub async fn up(&self, hold: Duration) -> Result<()> {
        self.run(Action::Up { hold }).await
    }

    /// Run the actuator down for `hold`, then stop it.
    pub async fn down(&self, hold: Duration) -> Result<()> {
        self.run(Action::Down { hold }).await
    }

    /// Brake for `hold`, then release both relays.
    pub async fn stop(&self, hold: Duration) -> Result<()> {
        self.run(Action::Stop { hold }).await
    }

    /// Release both relays immediately (no hold).
    pub async fn off(&self) -> Result<()> {
        self.run(Action::Off).await
    }
}
