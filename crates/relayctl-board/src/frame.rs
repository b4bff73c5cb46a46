//! Relay command frame encoder.
//!
//! The board accepts fixed-length 8-byte binary commands over the serial
//! link. This module handles the pure byte-level encoding; it performs no
//! I/O and no timing.
//!
//! # Frame format
//!
//! ```text
//! 0x55 0x56 0x00 0x00 0x00 <relay_id> <state_code> <checksum>
//! ```
//!
//! - Preamble: `0x55 0x56`
//! - Three reserved zero bytes
//! - `relay_id`: `0x01` or `0x02`
//! - `state_code`: `0x01` = ON, `0x02` = OFF
//! - `checksum`: unsigned 8-bit truncated sum of the preceding 7 bytes

use relayctl_core::error::Result;
use relayctl_core::types::{RelayId, RelayState};

/// First preamble byte of every frame.
pub const PREAMBLE_0: u8 = 0x55;

/// Second preamble byte of every frame.
pub const PREAMBLE_1: u8 = 0x56;

/// Total length of a command frame in bytes.
pub const FRAME_LEN: usize = 8;

/// A single relay command, ready to be encoded for the wire.
///
/// This is a value type: constructed fresh per command, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Target relay channel.
    pub relay: RelayId,
    /// Desired output state.
    pub state: RelayState,
}

impl Frame {
    /// Create a frame commanding `relay` to `state`.
    pub fn new(relay: RelayId, state: RelayState) -> Self {
        Frame { relay, state }
    }

    /// Encode this frame into its 8-byte wire representation.
    ///
    /// Pure and idempotent: identical frames encode to identical bytes.
    pub fn to_bytes(self) -> [u8; FRAME_LEN] {
        encode_frame(self.relay, self.state)
    }
}

/// Encode a (relay, state) pair into the exact 8-byte wire representation.
///
/// # Example
///
/// ```
/// use relayctl_board::frame::encode_frame;
/// use relayctl_core::types::{RelayId, RelayState};
///
/// let bytes = encode_frame(RelayId::One, RelayState::On);
/// assert_eq!(bytes, [0x55, 0x56, 0x00, 0x00, 0x00, 0x01, 0x01, 0xAD]);
/// ```
pub fn encode_frame(relay: RelayId, state: RelayState) -> [u8; FRAME_LEN] {
    let mut bytes = [
        PREAMBLE_0,
        PREAMBLE_1,
        0x00,
        0x00,
        0x00,
        relay.id(),
        state.code(),
        0x00,
    ];
    bytes[7] = checksum(&bytes[..7]);
    bytes
}

/// Encode a frame from raw protocol bytes, validating both fields.
///
/// The typed API makes invalid frames unrepresentable; this entry point
/// exists for callers holding raw integers (e.g. parsed from external
/// input) and fails with `InvalidArgument` before any encoding happens.
pub fn encode_raw(relay_id: u8, state_code: u8) -> Result<[u8; FRAME_LEN]> {
    let relay = RelayId::try_from(relay_id)?;
    let state = RelayState::try_from(state_code)?;
    Ok(encode_frame(relay, state))
}

/// Unsigned 8-bit truncated sum of `bytes`.
fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, b| acc.wrapping_add(*b))
}
