//! Constants for HomeLink Core
//!
//! Centralized, documented constants used throughout the configuration
//! bundle. All numeric values live here with an explanation of their
//! purpose and source.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Net**: well-known broker ports
//! - **Timing**: reporting cadence defaults and bounds
//! - **Limits**: bounded-storage capacities and placeholder markers
//! - **Boards**: per-board pin capability tables
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding new constants, include documentation and a source
//! 3. Use descriptive names that include units

/// Well-known broker ports and transport selection.
pub mod net;

/// Reporting cadence defaults and conversion factors.
pub mod timing;

/// Bounded-storage capacities and credential placeholder markers.
pub mod limits;

/// Pin capability tables for supported boards.
pub mod boards;

// Re-export commonly used constants for convenience
pub use limits::{
    MAX_DEVICE_ID_LEN, MAX_HOST_LEN, MAX_NAMESPACE_LEN, MAX_SECRET_LEN, MAX_SSID_LEN,
    MAX_TOPIC_LEN, MAX_USERNAME_LEN,
};

pub use net::{MQTT_TCP_PORT, MQTT_TLS_PORT};

pub use timing::{DEFAULT_UPDATE_INTERVAL_MS, MS_PER_SECOND};
