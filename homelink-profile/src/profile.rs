//! TOML Deployment Profiles
//!
//! A profile document carries the non-secret structure of one node's
//! configuration. Every field is optional in the document itself; what is
//! actually required must be present *somewhere* in the lookup chain
//! (environment, then document, then built-in default) by the time
//! [`Profile::into_config`] resolves the bundle.
//!
//! Unknown keys are rejected outright. A typo'd `passwrod` that silently
//! falls back to a default is exactly the failure mode this crate exists
//! to prevent.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use homelink_core::{
    constants::net::MQTT_TLS_PORT,
    constants::timing::{DEFAULT_UPDATE_INTERVAL_MS, MIN_SANE_UPDATE_INTERVAL_MS},
    BoardProfile, BrokerEndpoint, DeviceConfig, DeviceId, PinAssignment, PinMap, TopicSet,
    UpdateInterval, WifiCredentials,
};

use crate::env::{
    process_env, ENV_DEVICE_ID, ENV_MQTT_HOST, ENV_MQTT_PASSWORD, ENV_MQTT_PORT,
    ENV_MQTT_USERNAME, ENV_WIFI_PASSWORD, ENV_WIFI_SSID,
};
use crate::error::ProfileError;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct WifiSection {
    ssid: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct BrokerSection {
    host: Option<String>,
    port: Option<u16>,
    username: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct DeviceSection {
    id: Option<String>,
    update_interval_ms: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct TopicsSection {
    namespace: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PinsSection {
    board: Option<String>,
    light: Option<u8>,
    fan: Option<u8>,
    motor_forward: Option<u8>,
    motor_backward: Option<u8>,
    environment_sensor: Option<u8>,
    light_sensor: Option<u8>,
}

/// A parsed (but not yet resolved) deployment profile document.
///
/// `Profile::default()` is the empty document, for deployments driven
/// entirely by the environment.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    #[serde(default)]
    wifi: WifiSection,
    #[serde(default)]
    broker: BrokerSection,
    #[serde(default)]
    device: DeviceSection,
    #[serde(default)]
    topics: TopicsSection,
    #[serde(default)]
    pins: PinsSection,
}

impl Profile {
    /// Parse a profile document from TOML text.
    pub fn from_toml_str(document: &str) -> Result<Self, ProfileError> {
        Ok(toml::from_str(document)?)
    }

    /// Read and parse a profile file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        log::info!("loading deployment profile from {}", path.display());
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// Resolve the profile into a validated [`DeviceConfig`] using the
    /// process environment for overrides and secrets.
    pub fn into_config(self) -> Result<DeviceConfig, ProfileError> {
        self.into_config_with_env(process_env)
    }

    /// Resolve with an explicit environment lookup.
    ///
    /// Exists so tests (and callers with their own secret stores) can
    /// inject a lookup instead of mutating the process environment.
    pub fn into_config_with_env<F>(self, lookup: F) -> Result<DeviceConfig, ProfileError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ssid = lookup(ENV_WIFI_SSID)
            .or(self.wifi.ssid)
            .ok_or(ProfileError::MissingKey {
                key: "wifi.ssid",
                env_var: ENV_WIFI_SSID,
            })?;
        let wifi_password =
            lookup(ENV_WIFI_PASSWORD)
                .or(self.wifi.password)
                .ok_or(ProfileError::MissingKey {
                    key: "wifi.password",
                    env_var: ENV_WIFI_PASSWORD,
                })?;

        let host = lookup(ENV_MQTT_HOST)
            .or(self.broker.host)
            .ok_or(ProfileError::MissingKey {
                key: "broker.host",
                env_var: ENV_MQTT_HOST,
            })?;
        let port = match lookup(ENV_MQTT_PORT) {
            Some(raw) => raw.parse::<u16>().map_err(|err| ProfileError::InvalidValue {
                key: "broker.port",
                reason: err.to_string(),
            })?,
            None => self.broker.port.unwrap_or(MQTT_TLS_PORT),
        };
        let username =
            lookup(ENV_MQTT_USERNAME)
                .or(self.broker.username)
                .ok_or(ProfileError::MissingKey {
                    key: "broker.username",
                    env_var: ENV_MQTT_USERNAME,
                })?;
        let mqtt_password =
            lookup(ENV_MQTT_PASSWORD)
                .or(self.broker.password)
                .ok_or(ProfileError::MissingKey {
                    key: "broker.password",
                    env_var: ENV_MQTT_PASSWORD,
                })?;

        let device_id = lookup(ENV_DEVICE_ID)
            .or(self.device.id)
            .ok_or(ProfileError::MissingKey {
                key: "device.id",
                env_var: ENV_DEVICE_ID,
            })?;
        let device_id = DeviceId::new(&device_id)?;

        let interval_ms = self
            .device
            .update_interval_ms
            .unwrap_or(DEFAULT_UPDATE_INTERVAL_MS);
        let update_interval = UpdateInterval::from_millis(interval_ms)?;
        if interval_ms < MIN_SANE_UPDATE_INTERVAL_MS {
            log::warn!(
                "update interval {} ms is below the {} ms floor the sensors can keep up with",
                interval_ms,
                MIN_SANE_UPDATE_INTERVAL_MS
            );
        }

        let topics = match self.topics.namespace {
            Some(ns) => TopicSet::new(&ns)?,
            None => TopicSet::home()?,
        };

        let board = match self.pins.board.as_deref() {
            None | Some("esp8266") => BoardProfile::esp8266(),
            Some("esp32") => BoardProfile::esp32(),
            Some(other) => {
                return Err(ProfileError::InvalidValue {
                    key: "pins.board",
                    reason: format!("unknown board `{other}` (expected `esp8266` or `esp32`)"),
                })
            }
        };
        let mut pins = if board == BoardProfile::esp32() {
            PinMap::esp32_default()
        } else {
            PinMap::esp8266_default()
        };
        if let Some(pin) = self.pins.light {
            pins.light = PinAssignment::Digital(pin);
        }
        if let Some(pin) = self.pins.fan {
            pins.fan = PinAssignment::Digital(pin);
        }
        if let Some(pin) = self.pins.motor_forward {
            pins.motor_forward = PinAssignment::Digital(pin);
        }
        if let Some(pin) = self.pins.motor_backward {
            pins.motor_backward = PinAssignment::Digital(pin);
        }
        if let Some(pin) = self.pins.environment_sensor {
            pins.environment_sensor = PinAssignment::Digital(pin);
        }
        if let Some(channel) = self.pins.light_sensor {
            pins.light_sensor = PinAssignment::Analog(channel);
        }

        let config = DeviceConfig {
            device_id,
            update_interval,
            wifi: WifiCredentials::new(&ssid, &wifi_password)?,
            broker: BrokerEndpoint::new(&host, port, &username, &mqtt_password)?,
            topics,
            pins,
            board,
        };
        config.validate()?;

        log::info!(
            "profile resolved: device {} -> {}:{} ({:?} transport), publishing every {} ms",
            config.device_id,
            config.broker.host(),
            config.broker.port(),
            config.broker.transport(),
            config.update_interval.as_millis(),
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    const COMPLETE: &str = r#"
        [wifi]
        ssid = "lab-wifi"
        password = "lab-secret-42"

        [broker]
        host = "mqtt.example.net"
        port = 8883
        username = "node_user"
        password = "n0de-pass!"

        [device]
        id = "esp8266_001"
        update-interval-ms = 5000
    "#;

    #[test]
    fn complete_profile_resolves_without_env() {
        let config = Profile::from_toml_str(COMPLETE)
            .unwrap()
            .into_config_with_env(no_env)
            .unwrap();
        assert_eq!(config.device_id.as_str(), "esp8266_001");
        assert_eq!(config.broker.port(), 8883);
        assert_eq!(config.topics.namespace(), "home");
        assert_eq!(config.board.name(), "esp8266");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Profile::from_toml_str("[broker]\npasswrod = \"oops\"\n").unwrap_err();
        assert!(matches!(err, ProfileError::Parse(_)));
    }

    #[test]
    fn missing_secret_names_its_env_var() {
        let document = "[wifi]\nssid = \"lab-wifi\"\n";
        let err = Profile::from_toml_str(document)
            .unwrap()
            .into_config_with_env(no_env)
            .unwrap_err();
        match err {
            ProfileError::MissingKey { key, env_var } => {
                assert_eq!(key, "wifi.password");
                assert_eq!(env_var, "HOMELINK_WIFI_PASSWORD");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn environment_wins_over_the_document() {
        let overlay = |name: &str| match name {
            "HOMELINK_MQTT_PASSWORD" => Some("from-env".to_owned()),
            "HOMELINK_MQTT_PORT" => Some("1883".to_owned()),
            _ => None,
        };
        let config = Profile::from_toml_str(COMPLETE)
            .unwrap()
            .into_config_with_env(overlay)
            .unwrap();
        assert_eq!(config.broker.password().expose(), "from-env");
        assert_eq!(config.broker.port(), 1883);
    }

    #[test]
    fn unparseable_port_is_reported() {
        let overlay = |name: &str| match name {
            "HOMELINK_MQTT_PORT" => Some("86000".to_owned()),
            _ => None,
        };
        let err = Profile::from_toml_str(COMPLETE)
            .unwrap()
            .into_config_with_env(overlay)
            .unwrap_err();
        assert!(matches!(
            err,
            ProfileError::InvalidValue {
                key: "broker.port",
                ..
            }
        ));
    }

    #[test]
    fn board_selects_the_default_wiring() {
        let document = format!("{COMPLETE}\n[pins]\nboard = \"esp32\"\n");
        let config = Profile::from_toml_str(&document)
            .unwrap()
            .into_config_with_env(no_env)
            .unwrap();
        assert_eq!(config.board.name(), "esp32");
        assert_eq!(config.pins, PinMap::esp32_default());
    }

    #[test]
    fn pin_overrides_are_validated() {
        // Rebinding the fan onto the light pin must fail the bundle
        let document = format!("{COMPLETE}\n[pins]\nfan = 2\n");
        let err = Profile::from_toml_str(&document)
            .unwrap()
            .into_config_with_env(no_env)
            .unwrap_err();
        assert!(matches!(err, ProfileError::Config(_)));
    }

    #[test]
    fn unknown_board_is_rejected() {
        let document = format!("{COMPLETE}\n[pins]\nboard = \"arduino_uno\"\n");
        let err = Profile::from_toml_str(&document)
            .unwrap()
            .into_config_with_env(no_env)
            .unwrap_err();
        assert!(matches!(
            err,
            ProfileError::InvalidValue {
                key: "pins.board",
                ..
            }
        ));
    }
}
