//! Serial port name normalization.
//!
//! The relay board tooling originated on Windows, where ports are named
//! `COM3`, `COM4`, etc. On a full Linux system the same physical port is
//! `/dev/ttyS<n-1>`. Under WSL serial hardware is not reachable at all, so
//! attempting the open would only produce a confusing device error -- we
//! fail fast with a clear diagnostic instead.

use relayctl_core::error::{Error, Result};

/// Normalize a port name for the current host.
///
/// On Linux: rejects the call under WSL, and maps `COMx` names to
/// `/dev/ttyS<x-1>`. Anything that is not a COMx name (or whose suffix is
/// not a number) passes through unchanged. On other platforms the name is
/// returned as-is.
pub fn normalize_port(port: &str) -> Result<String> {
    if cfg!(target_os = "linux") {
        if is_wsl() {
            return Err(Error::Open {
                port: port.to_string(),
                reason: "serial ports are not accessible under WSL; \
                         run on native Windows or a full Linux host"
                    .to_string(),
            });
        }
        if let Some(mapped) = map_com_port(port) {
            return Ok(mapped);
        }
    }
    Ok(port.to_string())
}

/// Map a Windows `COMx` name to the equivalent Linux device path.
///
/// `COM3` becomes `/dev/ttyS2`. Returns `None` for names that are not of
/// the `COM<number>` form.
fn map_com_port(port: &str) -> Option<String> {
    let upper = port.to_uppercase();
    let suffix = upper.strip_prefix("COM")?;
    let num: u32 = suffix.parse().ok()?;
    if num == 0 {
        return None;
    }
    Some(format!("/dev/ttyS{}", num - 1))
}

/// Detect WSL by the kernel signature in `/proc/version`.
fn is_wsl() -> bool {
    std::fs::read_to_string("/proc/version")
        .map(|v| v.to_lowercase().contains("microsoft"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_com_ports_to_tty_devices() {
        assert_eq!(map_com_port("COM3"), Some("/dev/ttyS2".to_string()));
        assert_eq!(map_com_port("COM1"), Some("/dev/ttyS0".to_string()));
        assert_eq!(map_com_port("com4"), Some("/dev/ttyS3".to_string()));
    }

    #[test]
    fn leaves_non_com_names_alone() {
        assert_eq!(map_com_port("/dev/ttyUSB0"), None);
        assert_eq!(map_com_port("ttyS0"), None);
    }

    #[test]
    fn leaves_malformed_com_suffixes_alone() {
        assert_eq!(map_com_port("COMX"), None);
        assert_eq!(map_com_port("COM"), None);
        assert_eq!(map_com_port("COM0"), None);
    }

    #[test]
    fn normalize_passes_device_paths_through() {
        // A device path is never rewritten, on any platform.
        assert_eq!(
            normalize_port("/dev/ttyUSB0").unwrap(),
            "/dev/ttyUSB0".to_string()
        );
    }
}
