// relayctl -- CLI utility to control a 2-channel RS-232 relay board.
//
// Usage:
//   relayctl 1 on                  # Turn relay 1 ON on default COM3
//   relayctl 2 off                 # Turn relay 2 OFF
//   relayctl both on               # Turn both relays ON
//   relayctl -p COM4 1 on          # Use COM4 instead of default COM3
//   relayctl -p COM6 -b 19200 both on   # Override baud rate
//
// COMx names are mapped to /dev/ttyS<n-1> when running on a full Linux
// host; under WSL the command fails fast because serial hardware is not
// reachable there.

use anyhow::{Context, Result};
use clap::Parser;

use relayctl_board::Sequencer;
use relayctl_core::types::{RelayState, RelayTarget};
use relayctl_transport::{normalize_port, SerialTransport};

/// Control a 2-channel RS-232 relay board via a serial port.
#[derive(Parser)]
#[command(name = "relayctl", version, about)]
struct Cli {
    /// Relay to switch: "1", "2", or "both".
    relay: RelayTarget,

    /// Desired state: "on" or "off".
    action: RelayState,

    /// Serial port.
    #[arg(short = 'p', long, default_value = "COM3")]
    port: String,

    /// Baud rate.
    #[arg(short = 'b', long, default_value_t = 9600)]
    baudrate: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let port = normalize_port(&cli.port)?;
    let transport = SerialTransport::open(&port, cli.baudrate)
        .await
        .with_context(|| format!("error opening {port}"))?;

    let sequencer = Sequencer::new(Box::new(transport));
    sequencer
        .set_relay(cli.relay, cli.action)
        .await
        .with_context(|| format!("failed to switch relay {} {}", cli.relay, cli.action))?;

    Ok(())
}
