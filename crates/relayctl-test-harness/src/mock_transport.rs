//! Mock transport for deterministic testing of the board driver.
//!
//! [`MockTransport`] implements the [`Transport`] trait by recording every
//! write into a shareable [`SentLog`]. The board never responds, so there
//! is nothing to pre-load -- tests hand the transport to a sequencer, keep
//! a log handle, and assert on the recorded write order afterwards (or
//! concurrently, for serialization tests).
//!
//! # Example
//!
//! ```
//! use relayctl_test_harness::MockTransport;
//!
//! let mock = MockTransport::new();
//! let log = mock.log();
//! // ...move `mock` into a sequencer, run actions...
//! assert!(log.frames().is_empty());
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use relayctl_core::error::{Error, Result};
use relayctl_core::transport::Transport;

/// Shareable handle onto the bytes a [`MockTransport`] has sent.
///
/// Clones observe the same log, so a test can keep a handle after moving
/// the transport into the sequencer that owns it.
#[derive(Debug, Clone, Default)]
pub struct SentLog(Arc<Mutex<Vec<Vec<u8>>>>);

impl SentLog {
    /// All frames sent so far, one element per `send()` call, in order.
    pub fn frames(&self) -> Vec<Vec<u8>> {
        self.0.lock().unwrap().clone()
    }

    /// Number of `send()` calls recorded so far.
    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    /// Whether nothing has been sent yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&self, data: &[u8]) {
        self.0.lock().unwrap().push(data.to_vec());
    }
}

/// A mock [`Transport`] that records writes and can inject failures.
#[derive(Debug, Default)]
pub struct MockTransport {
    log: SentLog,
    connected: bool,
    /// When set, sends beyond this count fail with `ConnectionLost`.
    fail_after: Option<usize>,
}

impl MockTransport {
    /// Create a new mock transport in the connected state.
    pub fn new() -> Self {
        MockTransport {
            log: SentLog::default(),
            connected: true,
            fail_after: None,
        }
    }

    /// Return a handle onto this transport's sent-data log.
    pub fn log(&self) -> SentLog {
        self.log.clone()
    }

    /// Make every send after the first `n` successful ones fail with
    /// [`Error::ConnectionLost`]. Failed sends are not recorded.
    pub fn fail_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    /// Set the connected state.
    ///
    /// When `false`, subsequent `send()` calls return
    /// [`Error::NotConnected`].
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&mut self, data: &[u8]) -> Result<()> {
        if !self.connected {
            return Err(Error::NotConnected);
        }
        if let Some(limit) = self.fail_after {
            if self.log.len() >= limit {
                return Err(Error::ConnectionLost);
            }
        }
        self.log.push(data);
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        self.connected = false;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_sends_in_order() {
        let mut mock = MockTransport::new();
        let log = mock.log();

        mock.send(&[0x01, 0x02]).await.unwrap();
        mock.send(&[0x03]).await.unwrap();

        assert_eq!(log.frames(), vec![vec![0x01, 0x02], vec![0x03]]);
        assert_eq!(log.len(), 2);
    }

    #[tokio::test]
    async fn log_handle_survives_transport_move() {
        let mock = MockTransport::new();
        let log = mock.log();

        // Simulates a sequencer taking ownership.
        let mut boxed: Box<dyn Transport> = Box::new(mock);
        boxed.send(&[0xAA]).await.unwrap();

        assert_eq!(log.frames(), vec![vec![0xAA]]);
    }

    #[tokio::test]
    async fn fail_after_injects_connection_lost() {
        let mut mock = MockTransport::new().fail_after(1);
        let log = mock.log();

        mock.send(&[0x01]).await.unwrap();
        let err = mock.send(&[0x02]).await.unwrap_err();

        assert!(matches!(err, Error::ConnectionLost));
        assert_eq!(log.frames(), vec![vec![0x01]]);
    }

    #[tokio::test]
    async fn send_after_close_is_not_connected() {
        let mut mock = MockTransport::new();
        assert!(mock.is_connected());

        mock.close().await.unwrap();
        assert!(!mock.is_connected());

        let err = mock.send(&[0x01]).await.unwrap_err();
        assert!(matches!(err, Error::NotConnected));
    }

    #[tokio::test]
    async fn set_connected_false_rejects_sends() {
        let mut mock = MockTransport::new();
        mock.set_connected(false);

        let err = mock.send(&[0x01]).await.unwrap_err();
        assert!(matches!(err, Error::NotConnected));
    }
}
