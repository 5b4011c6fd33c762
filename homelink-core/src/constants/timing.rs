//! Time-Related Constants
//!
//! Reporting cadence defaults and conversion factors for the device
//! identity section of the bundle.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u32 = 60;

// ===== REPORTING CADENCE =====

/// Default sensor reporting interval (milliseconds).
///
/// 0.2 Hz keeps a battery-friendly cadence while the dashboard still feels
/// live. Matches the deployed home-automation nodes.
pub const DEFAULT_UPDATE_INTERVAL_MS: u32 = 5000;

/// Shortest interval worth publishing at (milliseconds).
///
/// Below one second the broker round-trip dominates and readings of the
/// slow environmental sensors repeat verbatim.
pub const MIN_SANE_UPDATE_INTERVAL_MS: u32 = 1000;
