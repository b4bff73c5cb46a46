//! Environment-driven configuration.
//!
//! All recognized options are read once at startup into a [`Config`] and
//! passed down explicitly -- core logic never touches the process
//! environment. A `.env` file is honored when present (loaded in `main`).

use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Startup configuration for the web control panel.
#[derive(Debug, Clone)]
pub struct Config {
    /// Serial port name or device path (`RELAY_SERIAL_PORT`, default COM3).
    pub serial_port: String,
    /// Serial baud rate (`RELAY_BAUD`, default 9600).
    pub baud_rate: u32,
    /// Hold duration for UP/DOWN/STOP (`RELAY_TIMEOUT`, seconds, default 1).
    pub hold: Duration,
    /// HTTP bind host (`RELAY_HTTP_HOST`, default 0.0.0.0).
    pub host: String,
    /// HTTP bind port (`RELAY_HTTP_PORT`, default 5000).
    pub http_port: u16,
}

impl Config {
    /// Build the configuration from the process environment, applying
    /// defaults for anything unset. Malformed values are startup errors.
    pub fn from_env() -> Result<Self> {
        let serial_port = env_or("RELAY_SERIAL_PORT", "COM3");
        let baud_rate = parse_baud(&env_or("RELAY_BAUD", "9600"))?;
        let hold = parse_hold(&env_or("RELAY_TIMEOUT", "1"))?;
        let host = env_or("RELAY_HTTP_HOST", "0.0.0.0");
        let http_port = env_or("RELAY_HTTP_PORT", "5000")
            .parse::<u16>()
            .context("invalid RELAY_HTTP_PORT")?;

        Ok(Config {
            serial_port,
            baud_rate,
            hold,
            host,
            http_port,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a baud rate string.
fn parse_baud(s: &str) -> Result<u32> {
    let baud: u32 = s.parse().context("invalid RELAY_BAUD")?;
    if baud == 0 {
        bail!("invalid RELAY_BAUD: must be non-zero");
    }
    Ok(baud)
}

/// Parse the hold duration as fractional seconds (e.g. "1", "0.5", "2.5").
fn parse_hold(s: &str) -> Result<Duration> {
    let secs: f64 = s.parse().context("invalid RELAY_TIMEOUT")?;
    if !secs.is_finite() || secs < 0.0 {
        bail!("invalid RELAY_TIMEOUT: must be a non-negative number of seconds");
    }
    Ok(Duration::from_secs_f64(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_baud_accepts_common_rates() {
        assert_eq!(parse_baud("9600").unwrap(), 9600);
        assert_eq!(parse_baud("19200").unwrap(), 19200);
    }

    #[test]
    fn parse_baud_rejects_garbage() {
        assert!(parse_baud("fast").is_err());
        assert!(parse_baud("0").is_err());
    }

    #[test]
    fn parse_hold_accepts_fractional_seconds() {
        assert_eq!(parse_hold("1").unwrap(), Duration::from_secs(1));
        assert_eq!(parse_hold("0.5").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_hold("2.5").unwrap(), Duration::from_millis(2500));
    }

    #[test]
    fn parse_hold_rejects_negative_and_garbage() {
        assert!(parse_hold("-1").is_err());
        assert!(parse_hold("soon").is_err());
        assert!(parse_hold("inf").is_err());
    }
}
