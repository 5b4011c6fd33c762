//! Device Identity and Reporting Cadence
//!
//! A device identifier distinguishes this node's messages from every other
//! node sharing the broker, so it doubles as a HashMap key in fleet
//! tooling: bounded, inline, `Copy`, `Hash`.

use core::fmt;
use core::time::Duration;

use crate::{
    constants::limits::MAX_DEVICE_ID_LEN,
    constants::timing::MS_PER_SECOND,
    errors::{ConfigError, ConfigResult},
};

/// Fleet-unique device identifier.
///
/// Identifiers are lowercase ASCII alphanumerics plus `_` and `-`, at most
/// [`MAX_DEVICE_ID_LEN`] bytes. The charset keeps ids safe to embed in
/// topic namespaces and file names without escaping.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceId {
    len: u8,
    data: [u8; MAX_DEVICE_ID_LEN],
}

impl DeviceId {
    /// Parse and validate an identifier.
    pub fn new(id: &str) -> ConfigResult<Self> {
        let bytes = id.as_bytes();
        if bytes.is_empty() {
            return Err(ConfigError::InvalidDeviceId {
                reason: "identifier is empty",
            });
        }
        if bytes.len() > MAX_DEVICE_ID_LEN {
            return Err(ConfigError::InvalidDeviceId {
                reason: "identifier too long",
            });
        }
        for &b in bytes {
            let ok = b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-';
            if !ok {
                return Err(ConfigError::InvalidDeviceId {
                    reason: "only lowercase letters, digits, `_` and `-` are allowed",
                });
            }
        }

        let mut data = [0u8; MAX_DEVICE_ID_LEN];
        data[..bytes.len()].copy_from_slice(bytes);

        Ok(Self {
            len: bytes.len() as u8,
            data,
        })
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        // new() only stores validated ASCII
        core::str::from_utf8(&self.data[..self.len as usize])
            .expect("DeviceId contains invalid UTF-8")
    }
}

impl fmt::Debug for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often the node samples and publishes sensor data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UpdateInterval {
    millis: u32,
}

impl UpdateInterval {
    /// Build an interval from milliseconds; zero is rejected.
    pub fn from_millis(millis: u32) -> ConfigResult<Self> {
        if millis == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        Ok(Self { millis })
    }

    /// Interval in milliseconds.
    pub const fn as_millis(&self) -> u32 {
        self.millis
    }

    /// Interval as a [`Duration`] for scheduler hand-off.
    pub const fn as_duration(&self) -> Duration {
        Duration::from_millis(self.millis as u64)
    }

    /// Whole seconds between samples, rounded down.
    pub const fn as_secs(&self) -> u32 {
        self.millis / MS_PER_SECOND as u32
    }
}
