//! Error type for profile loading and fleet registration.

use thiserror::Error;

use homelink_core::ConfigError;

/// Errors surfaced while resolving a deployment profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Profile file could not be read.
    #[error("failed to read profile: {0}")]
    Io(#[from] std::io::Error),

    /// Profile document is not valid TOML (or has unknown keys).
    #[error("failed to parse profile: {0}")]
    Parse(#[from] toml::de::Error),

    /// A required value is absent from every source.
    #[error("missing configuration value `{key}` (set {env_var} or add it to the profile)")]
    MissingKey {
        /// Dotted profile key, e.g. `broker.host`
        key: &'static str,
        /// Environment variable that would satisfy it
        env_var: &'static str,
    },

    /// A value is present but unusable.
    #[error("invalid value for `{key}`: {reason}")]
    InvalidValue {
        /// Dotted profile key
        key: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The resolved bundle failed startup validation.
    #[error("invalid configuration: {0}")]
    Config(ConfigError),

    /// A second bundle claimed an already-registered device identifier.
    #[error("device id `{0}` is already registered with this fleet")]
    DuplicateDeviceId(String),

    /// The fleet registry lock was poisoned by a panicking writer.
    #[error("fleet registry unavailable: {0}")]
    Registry(&'static str),
}

impl From<ConfigError> for ProfileError {
    fn from(err: ConfigError) -> Self {
        ProfileError::Config(err)
    }
}
