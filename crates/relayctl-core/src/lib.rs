//! relayctl-core: Core traits, types, and error definitions for relayctl.
//!
//! This crate defines the abstractions shared by the board driver, the
//! transport implementations, and the CLI/web front-ends. Nothing in here
//! performs I/O.
//!
//! # Key types
//!
//! - [`Transport`] -- byte-level write channel to the relay board
//! - [`RelayId`] / [`RelayState`] / [`RelayTarget`] -- relay domain types
//! - [`Error`] / [`Result`] -- error handling

pub mod error;
pub mod transport;
pub mod types;

// Re-export key types at crate root for ergonomic `use relayctl_core::*`.
pub use error::{Error, Result};
pub use transport::Transport;
pub use types::{RelayId, RelayState, RelayTarget};
