//! Relay domain types.
//!
//! These types carry no state of their own -- a [`RelayId`] names a physical
//! channel, a [`RelayState`] names a desired output level, and a
//! [`RelayTarget`] is what the CLI and sequencer accept where "both" is a
//! valid choice alongside a single channel.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One of the two physical relay channels on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelayId {
    /// Relay channel 1.
    One,
    /// Relay channel 2.
    Two,
}

impl RelayId {
    /// The channel number as it appears on the wire (byte 5 of a frame).
    pub fn id(self) -> u8 {
        match self {
            RelayId::One => 0x01,
            RelayId::Two => 0x02,
        }
    }
}

impl TryFrom<u8> for RelayId {
    type Error = Error;

    fn try_from(raw: u8) -> std::result::Result<Self, Error> {
        match raw {
            1 => Ok(RelayId::One),
            2 => Ok(RelayId::Two),
            n => Err(Error::InvalidArgument(format!(
                "relay id must be 1 or 2, got {n}"
            ))),
        }
    }
}

impl fmt::Display for RelayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Desired output state for a relay channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelayState {
    /// Channel energized.
    On,
    /// Channel released.
    Off,
}

impl RelayState {
    /// The state code as it appears on the wire (byte 6 of a frame).
    pub fn code(self) -> u8 {
        match self {
            RelayState::On => 0x01,
            RelayState::Off => 0x02,
        }
    }
}

impl TryFrom<u8> for RelayState {
    type Error = Error;

    fn try_from(raw: u8) -> std::result::Result<Self, Error> {
        match raw {
            0x01 => Ok(RelayState::On),
            0x02 => Ok(RelayState::Off),
            n => Err(Error::InvalidArgument(format!(
                "state code must be 0x01 (on) or 0x02 (off), got {n:#04x}"
            ))),
        }
    }
}

impl fmt::Display for RelayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayState::On => write!(f, "on"),
            RelayState::Off => write!(f, "off"),
        }
    }
}

/// Error returned when a string cannot be parsed into a [`RelayState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStateError(String);

impl fmt::Display for ParseStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown relay state: {} (expected on/off)", self.0)
    }
}

impl std::error::Error for ParseStateError {}

impl FromStr for RelayState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "on" => Ok(RelayState::On),
            "off" => Ok(RelayState::Off),
            _ => Err(ParseStateError(s.to_string())),
        }
    }
}

/// What a switching command addresses: a single channel or both.
///
/// "Both" is not a wire concept -- it always expands to one frame per
/// channel, relay 1 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelayTarget {
    /// A single relay channel.
    Single(RelayId),
    /// Both channels, commanded sequentially.
    Both,
}

impl RelayTarget {
    /// The channels addressed by this target, in command order.
    pub fn relays(self) -> Vec<RelayId> {
        match self {
            RelayTarget::Single(relay) => vec![relay],
            RelayTarget::Both => vec![RelayId::One, RelayId::Two],
        }
    }
}

impl fmt::Display for RelayTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayTarget::Single(relay) => write!(f, "{relay}"),
            RelayTarget::Both => write!(f, "both"),
        }
    }
}

/// Error returned when a string cannot be parsed into a [`RelayTarget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTargetError(String);

impl fmt::Display for ParseTargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown relay: {} (expected 1, 2, or both)", self.0)
    }
}

impl std::error::Error for ParseTargetError {}

impl FromStr for RelayTarget {
    type Err = ParseTargetError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" => Ok(RelayTarget::Single(RelayId::One)),
            "2" => Ok(RelayTarget::Single(RelayId::Two)),
            "both" => Ok(RelayTarget::Both),
            _ => Err(ParseTargetError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_id_wire_values() {
        assert_eq!(RelayId::One.id(), 0x01);
        assert_eq!(RelayId::Two.id(), 0x02);
    }

    #[test]
    fn relay_id_try_from_rejects_out_of_range() {
        assert_eq!(RelayId::try_from(1).unwrap(), RelayId::One);
        assert_eq!(RelayId::try_from(2).unwrap(), RelayId::Two);
        assert!(matches!(
            RelayId::try_from(0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            RelayId::try_from(3),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn relay_state_wire_values() {
        assert_eq!(RelayState::On.code(), 0x01);
        assert_eq!(RelayState::Off.code(), 0x02);
    }

    #[test]
    fn relay_state_try_from_rejects_unknown_code() {
        assert_eq!(RelayState::try_from(0x01).unwrap(), RelayState::On);
        assert_eq!(RelayState::try_from(0x02).unwrap(), RelayState::Off);
        assert!(matches!(
            RelayState::try_from(0x00),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn relay_state_from_str() {
        assert_eq!("on".parse::<RelayState>().unwrap(), RelayState::On);
        assert_eq!("OFF".parse::<RelayState>().unwrap(), RelayState::Off);
        assert!("high".parse::<RelayState>().is_err());
    }

    #[test]
    fn relay_target_from_str() {
        assert_eq!(
            "1".parse::<RelayTarget>().unwrap(),
            RelayTarget::Single(RelayId::One)
        );
        assert_eq!(
            "2".parse::<RelayTarget>().unwrap(),
            RelayTarget::Single(RelayId::Two)
        );
        assert_eq!("both".parse::<RelayTarget>().unwrap(), RelayTarget::Both);
        assert_eq!("BOTH".parse::<RelayTarget>().unwrap(), RelayTarget::Both);
        assert!("3".parse::<RelayTarget>().is_err());
    }

    #[test]
    fn relay_target_expansion_order() {
        assert_eq!(
            RelayTarget::Both.relays(),
            vec![RelayId::One, RelayId::Two]
        );
        assert_eq!(
            RelayTarget::Single(RelayId::Two).relays(),
            vec![RelayId::Two]
        );
    }

    #[test]
    fn display_round_trip() {
        assert_eq!(RelayId::One.to_string(), "1");
        assert_eq!(RelayState::Off.to_string(), "off");
        assert_eq!(RelayTarget::Both.to_string(), "both");
    }
}
