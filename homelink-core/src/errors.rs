//! Error Types for Configuration Validation Failures
//!
//! ## Design Philosophy
//!
//! HomeLink's error system follows the same rules as the rest of the core
//! crate:
//!
//! 1. **Small Size**: Every variant is a few bytes. Validation runs at
//!    startup, but the same errors are reused by topic parsing on the
//!    receive path, so they must stay cheap to return.
//!
//! 2. **No Heap Allocation**: All error data is inline - no String, only
//!    `&'static str` for reasons. Deterministic memory usage on embedded
//!    targets.
//!
//! 3. **Copy Semantics**: Errors implement Copy so they can be returned and
//!    stored without move complications.
//!
//! 4. **Actionable Information**: Every variant names the field or role it
//!    refers to, so a startup log line is enough to fix the deployment.
//!
//! ## Error Categories
//!
//! ### Credential and identity problems
//! - `Empty`: a required text value was left blank
//! - `Placeholder`: a value still carries an unset template default
//! - `InvalidDeviceId`: identifier violates the fleet naming rules
//!
//! ### Endpoint problems
//! - `InvalidPort`: broker port outside [1, 65535]
//! - `InvalidInterval`: zero reporting cadence
//!
//! ### Namespace problems
//! - `MalformedTopic`: topic string breaks the `segment/segment` shape
//! - `DuplicateTopic`: two routing keys collide
//!
//! ### Hardware map problems
//! - `PinCollision`: two digital roles bound to one physical pin
//! - `PinUnavailable`: role bound to a pin the board does not expose
//! - `NotAnalogCapable`: analog role bound to a non-analog input
//!
//! `CapacityExceeded` is the one construction-time error: a value did not
//! fit the bounded storage the bundle reserves for it.

use thiserror_no_std::Error;

use crate::pins::PinRole;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Required field left blank
    #[error("Field `{field}` must not be empty")]
    Empty {
        /// Stable name of the offending field (e.g. "wifi.ssid")
        field: &'static str,
    },

    /// Field still carries an unset template value such as "your_wifi_ssid"
    #[error("Field `{field}` still holds a placeholder value")]
    Placeholder {
        /// Stable name of the offending field
        field: &'static str,
    },

    /// Value does not fit the bounded storage reserved for it
    #[error("Field `{field}` exceeds its reserved capacity")]
    CapacityExceeded {
        /// Stable name of the offending field
        field: &'static str,
    },

    /// Broker port outside [1, 65535]
    #[error("Broker port must be in [1, 65535]")]
    InvalidPort,

    /// Update interval must be a positive number of milliseconds
    #[error("Update interval must be greater than zero")]
    InvalidInterval,

    /// Topic string breaks the `segment/segment` routing-key shape
    #[error("Malformed topic: {reason}")]
    MalformedTopic {
        /// What exactly is wrong with the topic string
        reason: &'static str,
    },

    /// Two routing keys in the namespace render to the same string
    #[error("Duplicate topic in namespace")]
    DuplicateTopic,

    /// Two digital roles are bound to the same physical pin
    #[error("Roles {first} and {second} share one pin")]
    PinCollision {
        /// First role in declaration order
        first: PinRole,
        /// Second role bound to the same pin
        second: PinRole,
    },

    /// Role bound to a pin the target board does not expose
    #[error("Pin for role {role} is not available on this board")]
    PinUnavailable {
        /// The misassigned role
        role: PinRole,
    },

    /// Analog role bound to a channel without an ADC behind it
    #[error("Role {role} requires an analog-capable input")]
    NotAnalogCapable {
        /// The analog role in question
        role: PinRole,
    },

    /// Device identifier violates the fleet naming rules
    #[error("Invalid device id: {reason}")]
    InvalidDeviceId {
        /// Which naming rule was broken
        reason: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Empty { field } => defmt::write!(fmt, "empty field {}", field),
            Self::Placeholder { field } => defmt::write!(fmt, "placeholder in {}", field),
            Self::CapacityExceeded { field } => defmt::write!(fmt, "{} too long", field),
            Self::InvalidPort => defmt::write!(fmt, "port out of range"),
            Self::InvalidInterval => defmt::write!(fmt, "interval is zero"),
            Self::MalformedTopic { reason } => defmt::write!(fmt, "bad topic: {}", reason),
            Self::DuplicateTopic => defmt::write!(fmt, "duplicate topic"),
            Self::PinCollision { first, second } => {
                defmt::write!(fmt, "pin shared by {} and {}", first.name(), second.name())
            }
            Self::PinUnavailable { role } => defmt::write!(fmt, "no pin for {}", role.name()),
            Self::NotAnalogCapable { role } => {
                defmt::write!(fmt, "{} needs analog input", role.name())
            }
            Self::InvalidDeviceId { reason } => defmt::write!(fmt, "bad device id: {}", reason),
        }
    }
}
