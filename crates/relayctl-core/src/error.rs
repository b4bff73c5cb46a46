//! Error types for relayctl.
//!
//! All fallible operations across the workspace return [`Result<T>`], which
//! uses [`Error`] as the error type. Argument validation, transport-open,
//! and transport-write failures are all captured here.

/// The error type for all relayctl operations.
///
/// The open/write split matters to callers: an [`Error::Open`] is fatal
/// (wrong port, permission denied, no hardware access), while write-path
/// errors surface mid-sequence and abort the remaining steps of an action.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A malformed relay id, state code, or action was supplied.
    ///
    /// Always raised before any I/O occurs.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The serial device could not be opened.
    #[error("failed to open serial port {port}: {reason}")]
    Open {
        /// Port name or device path as given by the caller.
        port: String,
        /// Human-readable reason from the serial layer.
        reason: String,
    },

    /// No connection to the board has been established, or the transport
    /// was used after `close()`.
    #[error("not connected")]
    NotConnected,

    /// The connection to the board was lost mid-write.
    #[error("connection lost")]
    ConnectionLost,

    /// An underlying I/O error on an already-open connection.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience `Result` alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_invalid_argument() {
        let e = Error::InvalidArgument("relay id 3 out of range".into());
        assert_eq!(e.to_string(), "invalid argument: relay id 3 out of range");
    }

    #[test]
    fn error_display_open() {
        let e = Error::Open {
            port: "COM3".into(),
            reason: "permission denied".into(),
        };
        assert_eq!(
            e.to_string(),
            "failed to open serial port COM3: permission denied"
        );
    }

    #[test]
    fn error_display_not_connected() {
        let e = Error::NotConnected;
        assert_eq!(e.to_string(), "not connected");
    }

    #[test]
    fn error_display_connection_lost() {
        let e = Error::ConnectionLost;
        assert_eq!(e.to_string(), "connection lost");
    }

    #[test]
    fn error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe broken");
        let e: Error = io_err.into();
        assert!(matches!(e, Error::Io(_)));
        assert!(e.to_string().contains("pipe broken"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<Error>();
    }
}
