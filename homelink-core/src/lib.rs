//! Core configuration bundle for HomeLink
//!
//! Exposes the complete configuration surface of a home-automation node
//! (network credentials, broker endpoint, topic namespace, device identity,
//! pin assignments) as one immutable, validated value instead of a pile of
//! compiled-in constants.
//!
//! Key constraints:
//! - `no_std` capable, bounded storage only (fits constrained nodes)
//! - No I/O, no parsing at use sites - the bundle is plain data
//! - Secrets are never revealed by `Debug` or `Display`
//!
//! ```
//! use homelink_core::{
//!     BrokerEndpoint, DeviceConfig, DeviceId, PinMap, BoardProfile,
//!     TopicSet, UpdateInterval, WifiCredentials,
//! };
//!
//! let config = DeviceConfig {
//!     device_id: DeviceId::new("esp8266_001")?,
//!     update_interval: UpdateInterval::from_millis(5000)?,
//!     wifi: WifiCredentials::new("lab-wifi", "correct horse battery")?,
//!     broker: BrokerEndpoint::new("broker.lan", 8883, "node", "hunter2!")?,
//!     topics: TopicSet::home()?,
//!     pins: PinMap::esp8266_default(),
//!     board: BoardProfile::esp8266(),
//! };
//!
//! // Startup-time validation: refuse to run on a misconfigured bundle.
//! config.validate()?;
//! # Ok::<(), homelink_core::ConfigError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod broker;
pub mod bundle;
pub mod constants;
pub mod errors;
pub mod identity;
pub mod message;
pub mod network;
pub mod pins;
pub mod secret;
pub mod topics;
pub mod validate;

// Public API
pub use broker::{BrokerEndpoint, Transport};
pub use bundle::DeviceConfig;
pub use errors::{ConfigError, ConfigResult};
pub use identity::{DeviceId, UpdateInterval};
pub use message::{PayloadError, SensorReport, SwitchState};
pub use network::WifiCredentials;
pub use pins::{BoardProfile, PinAssignment, PinMap, PinRole};
pub use secret::Secret;
pub use topics::{Channel, Direction, TopicKind, TopicSet};

/// Crate version, useful for diagnostics payloads.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
