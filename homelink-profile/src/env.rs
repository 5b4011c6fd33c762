//! Environment Variable Names
//!
//! The complete list of keys a deployment may supply through the
//! environment. This module *is* the in-source configuration artifact:
//! names only, never values.
//!
//! Secrets (passwords) should only ever arrive this way. The non-secret
//! keys are overridable too so a container deployment can steer one image
//! to many nodes without rewriting profile files.

/// Wi-Fi network name.
pub const ENV_WIFI_SSID: &str = "HOMELINK_WIFI_SSID";

/// Wi-Fi passphrase. Secret - prefer this over the profile file.
pub const ENV_WIFI_PASSWORD: &str = "HOMELINK_WIFI_PASSWORD";

/// Broker hostname or IP address.
pub const ENV_MQTT_HOST: &str = "HOMELINK_MQTT_HOST";

/// Broker port (decimal).
pub const ENV_MQTT_PORT: &str = "HOMELINK_MQTT_PORT";

/// Broker authentication username.
pub const ENV_MQTT_USERNAME: &str = "HOMELINK_MQTT_USERNAME";

/// Broker authentication password. Secret - prefer this over the profile file.
pub const ENV_MQTT_PASSWORD: &str = "HOMELINK_MQTT_PASSWORD";

/// Device identifier for this node.
pub const ENV_DEVICE_ID: &str = "HOMELINK_DEVICE_ID";

/// Read one variable from the process environment.
///
/// Empty values count as unset: an `export HOMELINK_MQTT_PASSWORD=` line
/// left over in a shell profile must not mask the real lookup chain.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variables_read_as_none() {
        assert_eq!(process_env("HOMELINK_TEST_UNSET_VARIABLE"), None);
    }
}
