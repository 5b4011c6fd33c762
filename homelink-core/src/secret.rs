//! Redacting Wrapper for Credential Values
//!
//! Secrets in the bundle (Wi-Fi passphrase, broker password) are stored
//! behind [`Secret`], which never reveals its contents through `Debug` or
//! `Display`. Consumers that genuinely need the value (a network-join
//! routine, a broker client) call [`Secret::expose`] at the hand-off point,
//! which keeps accidental `{:?}` logging of a whole bundle safe.
//!
//! Storage is bounded and inline, like every other text field in the core
//! crate.

use core::fmt;

use crate::errors::{ConfigError, ConfigResult};

/// A bounded secret value with redacted formatting.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret<const N: usize> {
    inner: heapless::String<N>,
}

impl<const N: usize> Secret<N> {
    /// Wrap a secret, failing if it exceeds the reserved capacity.
    ///
    /// `field` names the owning bundle field for error reporting.
    pub fn new(value: &str, field: &'static str) -> ConfigResult<Self> {
        let mut inner = heapless::String::new();
        inner
            .push_str(value)
            .map_err(|_| ConfigError::CapacityExceeded { field })?;
        Ok(Self { inner })
    }

    /// Hand out the secret for use at an interface boundary.
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Whether the secret was left blank.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Length in bytes, safe to log.
    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<const N: usize> fmt::Debug for Secret<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(\u{2022}\u{2022}\u{2022}\u{2022})")
    }
}

impl<const N: usize> fmt::Display for Secret<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\u{2022}\u{2022}\u{2022}\u{2022}")
    }
}

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for Secret<N> {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Secret(redacted)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_is_redacted() {
        let secret: Secret<64> = Secret::new("hunter2", "test.secret").unwrap();
        let rendered = {
            // format! needs std; tests run with the default std feature
            std::format!("{:?} {}", secret, secret)
        };
        assert!(!rendered.contains("hunter2"));
        assert_eq!(secret.expose(), "hunter2");
    }

    #[test]
    fn capacity_is_enforced() {
        let long = "x".repeat(65);
        let result: ConfigResult<Secret<64>> = Secret::new(&long, "test.secret");
        assert_eq!(
            result.unwrap_err(),
            ConfigError::CapacityExceeded {
                field: "test.secret"
            }
        );
    }
}
