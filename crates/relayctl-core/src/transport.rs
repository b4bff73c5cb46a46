//! Transport trait for relay board communication.
//!
//! The [`Transport`] trait abstracts over the physical link to the relay
//! board. Implementations exist for serial ports (`relayctl-transport`) and
//! mock transports for testing (`relayctl-test-harness`).
//!
//! The board is write-only from this system's perspective: it never
//! acknowledges a frame, so the trait has no receive leg. The sequencer in
//! `relayctl-board` operates on a `Transport` rather than directly on a
//! serial port, enabling both real hardware control and deterministic unit
//! testing.

use async_trait::async_trait;

use crate::error::Result;

/// Asynchronous byte-level write channel to the relay board.
///
/// Implementations handle buffering and flushing at the physical layer.
/// Frame construction and inter-frame timing are handled by the sequencer
/// that consumes this trait.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send raw bytes to the board.
    ///
    /// Implementations should not return until all bytes have been written
    /// and flushed to the underlying transport (serial TX buffer, etc.) --
    /// the board's settle-delay timing is measured from write completion.
    async fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Close the transport connection.
    ///
    /// After calling `close()`, subsequent `send()` calls should return
    /// [`Error::NotConnected`](crate::error::Error::NotConnected).
    async fn close(&mut self) -> Result<()>;

    /// Check whether the transport is currently connected.
    fn is_connected(&self) -> bool;
}
