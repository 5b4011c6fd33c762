//! Fleet Registry for Device Identity Management
//!
//! A device identifier only has to be unique *per broker*, and the only
//! party that can see the whole fleet is the controller that provisions
//! it. [`FleetRegistry`] is that party's bookkeeping: it accepts validated
//! bundles and refuses a second registration under an identifier that is
//! already taken, turning the fleet-uniqueness rule from a deployment
//! convention into an enforced check.

use std::collections::HashMap;
use std::sync::RwLock;

use homelink_core::{DeviceConfig, DeviceId};

use crate::error::ProfileError;

/// Thread-safe registry of the bundles provisioned onto one broker.
#[derive(Debug, Default)]
pub struct FleetRegistry {
    devices: RwLock<HashMap<DeviceId, DeviceConfig>>,
}

impl FleetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bundle, enforcing validity and identifier uniqueness.
    ///
    /// The bundle is re-validated on the way in: a registry of the fleet
    /// is only useful if everything in it would actually boot.
    pub fn register(&self, config: &DeviceConfig) -> Result<(), ProfileError> {
        config.validate()?;

        let mut devices = self
            .devices
            .write()
            .map_err(|_| ProfileError::Registry("lock poisoned"))?;

        if devices.contains_key(&config.device_id) {
            return Err(ProfileError::DuplicateDeviceId(
                config.device_id.as_str().to_owned(),
            ));
        }

        devices.insert(config.device_id, config.clone());
        log::info!(
            "registered device {} ({} of fleet)",
            config.device_id,
            devices.len()
        );
        Ok(())
    }

    /// Whether an identifier is already taken.
    pub fn contains(&self, id: &DeviceId) -> bool {
        self.devices
            .read()
            .map(|devices| devices.contains_key(id))
            .unwrap_or(false)
    }

    /// Fetch a registered bundle by identifier.
    pub fn get(&self, id: &DeviceId) -> Option<DeviceConfig> {
        self.devices
            .read()
            .ok()
            .and_then(|devices| devices.get(id).cloned())
    }

    /// Remove a decommissioned device, freeing its identifier.
    pub fn deregister(&self, id: &DeviceId) -> Result<bool, ProfileError> {
        let mut devices = self
            .devices
            .write()
            .map_err(|_| ProfileError::Registry("lock poisoned"))?;
        Ok(devices.remove(id).is_some())
    }

    /// Number of registered devices.
    pub fn len(&self) -> usize {
        self.devices.read().map(|devices| devices.len()).unwrap_or(0)
    }

    /// Whether the fleet is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homelink_core::{
        BoardProfile, BrokerEndpoint, PinMap, TopicSet, UpdateInterval, WifiCredentials,
    };

    fn bundle(id: &str) -> DeviceConfig {
        DeviceConfig {
            device_id: DeviceId::new(id).unwrap(),
            update_interval: UpdateInterval::from_millis(5000).unwrap(),
            wifi: WifiCredentials::new("lab-wifi", "lab-secret-42").unwrap(),
            broker: BrokerEndpoint::new("mqtt.example.net", 8883, "node_user", "n0de-pass!")
                .unwrap(),
            topics: TopicSet::home().unwrap(),
            pins: PinMap::esp8266_default(),
            board: BoardProfile::esp8266(),
        }
    }

    #[test]
    fn distinct_ids_register() {
        let fleet = FleetRegistry::new();
        fleet.register(&bundle("esp8266_001")).unwrap();
        fleet.register(&bundle("esp8266_002")).unwrap();
        assert_eq!(fleet.len(), 2);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let fleet = FleetRegistry::new();
        fleet.register(&bundle("esp8266_001")).unwrap();

        let err = fleet.register(&bundle("esp8266_001")).unwrap_err();
        assert!(matches!(err, ProfileError::DuplicateDeviceId(id) if id == "esp8266_001"));
        assert_eq!(fleet.len(), 1);
    }

    #[test]
    fn invalid_bundles_never_enter_the_fleet() {
        let fleet = FleetRegistry::new();
        let mut config = bundle("esp8266_001");
        config.wifi = WifiCredentials::new("your_wifi_ssid", "pw").unwrap();

        assert!(fleet.register(&config).is_err());
        assert!(fleet.is_empty());
    }

    #[test]
    fn deregistering_frees_the_id() {
        let fleet = FleetRegistry::new();
        let config = bundle("esp8266_001");
        fleet.register(&config).unwrap();
        assert!(fleet.deregister(&config.device_id).unwrap());
        assert!(!fleet.contains(&config.device_id));
        fleet.register(&config).unwrap();
    }
}
