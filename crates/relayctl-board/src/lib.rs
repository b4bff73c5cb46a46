//! relayctl-board: protocol driver for the 2-channel RS-232 relay board.
//!
//! Two layers, composed linearly:
//!
//! - [`frame`] -- pure byte-level encoding of single-relay commands into the
//!   board's fixed 8-byte wire format
//! - [`sequencer`] -- translation of named actions (UP, DOWN, STOP, OFF,
//!   per-relay set) into ordered, timed frame writes against a
//!   [`Transport`](relayctl_core::Transport)

pub mod frame;
pub mod sequencer;

pub use frame::{encode_frame, Frame};
pub use sequencer::{plan, Action, Sequencer, Step, SETTLE_DELAY};
