//! Serial port transport for the relay board.
//!
//! This module provides [`SerialTransport`], which implements the
//! [`Transport`] trait for physical RS-232 connections and USB virtual COM
//! ports. The board speaks fixed 8N1 framing (8 data bits, no parity, one
//! stop bit); only the baud rate varies, defaulting to 9600.
//!
//! # Example
//!
//! ```no_run
//! use relayctl_transport::SerialTransport;
//! use relayctl_core::Transport;
//!
//! # async fn example() -> relayctl_core::Result<()> {
//! let mut transport = SerialTransport::open("/dev/ttyS2", 9600).await?;
//! transport.send(&[0x55, 0x56, 0x00, 0x00, 0x00, 0x01, 0x01, 0xAD]).await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio_serial::{SerialPortBuilderExt, SerialStream};

use relayctl_core::error::{Error, Result};
use relayctl_core::transport::Transport;

/// Default baud rate of the relay board.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Serial port transport for the relay board.
///
/// Holds the port open for the lifetime of the value; `close()` releases
/// it and subsequent sends fail with [`Error::NotConnected`].
pub struct SerialTransport {
    /// The underlying serial port stream, `None` after close.
    port: Option<SerialStream>,
    /// Port name for logging/diagnostics.
    port_name: String,
}

impl SerialTransport {
    /// Open a serial port at the given baud rate with 8N1 framing.
    ///
    /// # Arguments
    ///
    /// * `port` - Serial device path (e.g. "/dev/ttyS2" on Linux, "COM3"
    ///   on Windows). See [`normalize_port`](crate::port::normalize_port)
    ///   for mapping COMx names on Linux hosts.
    /// * `baud_rate` - Baud rate (board default: 9600).
    pub async fn open(port: &str, baud_rate: u32) -> Result<Self> {
        tracing::debug!(port = %port, baud_rate, "opening serial port");

        let serial_stream = tokio_serial::new(port, baud_rate)
            .data_bits(tokio_serial::DataBits::Eight)
            .parity(tokio_serial::Parity::None)
            .stop_bits(tokio_serial::StopBits::One)
            .flow_control(tokio_serial::FlowControl::None)
            .open_native_async()
            .map_err(|e| {
                tracing::error!(port = %port, error = %e, "failed to open serial port");
                Error::Open {
                    port: port.to_string(),
                    reason: e.to_string(),
                }
            })?;

        tracing::info!(port = %port, baud_rate, "serial port opened");

        Ok(Self {
            port: Some(serial_stream),
            port_name: port.to_string(),
        })
    }

    /// Get the name of the serial port.
    pub fn port_name(&self) -> &str {
        &self.port_name
    }
}

#[async_trait]
impl Transport for SerialTransport {
    async fn send(&mut self, data: &[u8]) -> Result<()> {
        let port = self.port.as_mut().ok_or(Error::NotConnected)?;

        tracing::trace!(
            port = %self.port_name,
            bytes = data.len(),
            data = ?data,
            "sending frame"
        );

        port.write_all(data).await.map_err(|e| {
            tracing::error!(port = %self.port_name, error = %e, "failed to send frame");
            if e.kind() == std::io::ErrorKind::BrokenPipe
                || e.kind() == std::io::ErrorKind::NotConnected
            {
                Error::ConnectionLost
            } else {
                Error::Io(e)
            }
        })?;

        // Flush so the settle delay starts counting from actual
        // transmission, not from buffer admission.
        port.flush().await.map_err(|e| {
            tracing::error!(port = %self.port_name, error = %e, "failed to flush serial port");
            Error::Io(e)
        })?;

        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(mut port) = self.port.take() {
            tracing::debug!(port = %self.port_name, "closing serial port");
            if let Err(e) = port.flush().await {
                tracing::warn!(
                    port = %self.port_name,
                    error = %e,
                    "failed to flush before closing (continuing anyway)"
                );
            }
            // Dropping the stream closes the port.
            tracing::info!(port = %self.port_name, "serial port closed");
        }
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.port.is_some()
    }
}
