//! Wi-Fi Credentials Section
//!
//! The (network name, network secret) pair handed to a network-join
//! routine. Construction only enforces capacity; semantic checks run in
//! [`WifiCredentials::validate`] so a bundle can be assembled field by
//! field and rejected as a whole at startup.

use crate::{
    constants::limits::{MAX_SECRET_LEN, MAX_SSID_LEN},
    errors::{ConfigError, ConfigResult},
    secret::Secret,
    validate::check_credential,
};

/// Credentials for joining the local network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiCredentials {
    ssid: heapless::String<MAX_SSID_LEN>,
    password: Secret<MAX_SECRET_LEN>,
}

impl WifiCredentials {
    /// Assemble the section, failing only on capacity overruns.
    pub fn new(ssid: &str, password: &str) -> ConfigResult<Self> {
        let mut ssid_buf = heapless::String::new();
        ssid_buf
            .push_str(ssid)
            .map_err(|_| ConfigError::CapacityExceeded { field: "wifi.ssid" })?;

        Ok(Self {
            ssid: ssid_buf,
            password: Secret::new(password, "wifi.password")?,
        })
    }

    /// Network name.
    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    /// Network secret; consumers call [`Secret::expose`] at the join point.
    pub fn password(&self) -> &Secret<MAX_SECRET_LEN> {
        &self.password
    }

    /// Startup validation: both values present and actually configured.
    ///
    /// Every deployed node authenticates, so an empty passphrase is
    /// treated as unset rather than as an open-network marker.
    pub fn validate(&self) -> ConfigResult<()> {
        check_credential(&self.ssid, "wifi.ssid")?;
        check_credential(self.password.expose(), "wifi.password")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;

    #[test]
    fn configured_credentials_pass() {
        let wifi = WifiCredentials::new("lab-wifi", "correct horse battery").unwrap();
        assert!(wifi.validate().is_ok());
    }

    #[test]
    fn template_values_are_fatal() {
        let wifi = WifiCredentials::new("your_wifi_ssid", "your_wifi_password").unwrap();
        assert_eq!(
            wifi.validate(),
            Err(ConfigError::Placeholder { field: "wifi.ssid" })
        );
    }

    #[test]
    fn blank_secret_is_fatal() {
        let wifi = WifiCredentials::new("lab-wifi", "").unwrap();
        assert_eq!(
            wifi.validate(),
            Err(ConfigError::Empty {
                field: "wifi.password"
            })
        );
    }

    #[test]
    fn debug_never_reveals_the_passphrase() {
        let wifi = WifiCredentials::new("lab-wifi", "correct horse battery").unwrap();
        let rendered = std::format!("{:?}", wifi);
        assert!(rendered.contains("lab-wifi"));
        assert!(!rendered.contains("correct horse battery"));
    }
}
