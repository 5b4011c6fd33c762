//! Storage Capacities and Placeholder Markers
//!
//! Every text field of the bundle lives in bounded inline storage. The
//! capacities below are deliberate: they fit the protocols the values are
//! handed to, not just the example deployment.

// ===== FIELD CAPACITIES =====

/// Maximum Wi-Fi SSID length (bytes).
///
/// Source: IEEE 802.11 limits SSIDs to 32 octets.
pub const MAX_SSID_LEN: usize = 32;

/// Maximum secret length (Wi-Fi passphrase, broker password) in bytes.
///
/// WPA2 passphrases top out at 63 characters.
pub const MAX_SECRET_LEN: usize = 64;

/// Maximum broker hostname length (bytes).
///
/// Covers cloud-broker hostnames (regional EMQX/HiveMQ endpoints run
/// around 40 characters) with headroom.
pub const MAX_HOST_LEN: usize = 64;

/// Maximum broker username length (bytes).
pub const MAX_USERNAME_LEN: usize = 32;

/// Maximum device identifier length (bytes).
pub const MAX_DEVICE_ID_LEN: usize = 32;

/// Maximum topic namespace length (bytes).
pub const MAX_NAMESPACE_LEN: usize = 32;

/// Maximum rendered topic length (bytes).
///
/// Namespace plus the longest fixed suffix (`/control/motor`) plus slack.
pub const MAX_TOPIC_LEN: usize = 64;

// ===== PLACEHOLDER DETECTION =====

/// Values a template config ships with before anyone fills it in.
///
/// Compared case-insensitively. A credential equal to one of these (or
/// starting with `your_`) is treated as unset and rejected at startup
/// rather than sent to a join routine that will silently fail.
pub const PLACEHOLDER_MARKERS: &[&str] = &[
    "changeme",
    "change_me",
    "placeholder",
    "example",
    "password",
    "secret",
    "ssid",
    "xxxxxxxx",
];
