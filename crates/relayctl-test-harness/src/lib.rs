//! relayctl-test-harness: mock transport for driver tests.
//!
//! Lets you test frame encoding and action sequencing without a relay board
//! on the other end of a serial cable.

pub mod mock_transport;

pub use mock_transport::{MockTransport, SentLog};
