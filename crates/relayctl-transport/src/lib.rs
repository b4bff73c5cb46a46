//! relayctl-transport: serial transport implementation for relayctl.
//!
//! Provides [`SerialTransport`], the real-hardware implementation of
//! [`Transport`](relayctl_core::Transport), plus COM-port name
//! normalization for running the same tooling on Windows and Linux.

pub mod port;
pub mod serial;

pub use port::normalize_port;
pub use serial::SerialTransport;
