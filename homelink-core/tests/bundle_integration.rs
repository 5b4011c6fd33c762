//! Integration tests for the configuration bundle
//!
//! Exercises the documented deployment end to end: assemble the bundle the
//! way startup code does, validate it, and hand the derived values
//! (transport, routing keys, cadence) to stand-in consumers.

use homelink_core::{
    BoardProfile, BrokerEndpoint, Channel, ConfigError, DeviceConfig, DeviceId, Direction, PinMap,
    TopicKind, TopicSet, Transport, UpdateInterval, WifiCredentials,
};

fn deployed_bundle() -> DeviceConfig {
    DeviceConfig {
        device_id: DeviceId::new("esp8266_001").unwrap(),
        update_interval: UpdateInterval::from_millis(5000).unwrap(),
        wifi: WifiCredentials::new("hallway-ap", "portable-basalt-lantern").unwrap(),
        broker: BrokerEndpoint::new("mqtt.example.net", 8883, "node_user", "n0de-pass!").unwrap(),
        topics: TopicSet::home().unwrap(),
        pins: PinMap::esp8266_default(),
        board: BoardProfile::esp8266(),
    }
}

#[test]
fn deployed_bundle_passes_startup_validation() {
    let config = deployed_bundle();
    assert!(config.validate().is_ok());

    // The secure port commits the consumer to TLS
    assert_eq!(config.broker.transport(), Transport::Tls);
    assert!(config.broker.transport().is_encrypted());

    // 5000 ms cadence means 5-second samples
    assert_eq!(config.update_interval.as_secs(), 5);
}

#[test]
fn the_seven_routing_keys_are_distinct_and_directed() {
    let config = deployed_bundle();

    let mut rendered: Vec<String> = TopicKind::ALL
        .iter()
        .map(|&kind| config.topics.topic(kind).unwrap().as_str().to_owned())
        .collect();
    rendered.sort();
    rendered.dedup();
    assert_eq!(rendered.len(), 7, "routing keys must be pairwise distinct");

    // Direction grouping: one sensor-report + three status device->broker,
    // three control broker->device
    let device_to_broker = TopicKind::ALL
        .iter()
        .filter(|kind| kind.direction() == Direction::DeviceToBroker)
        .count();
    assert_eq!(device_to_broker, 4);
}

#[test]
fn subscription_and_publication_keys_line_up() {
    // A controller publishes a command; the device parses the key it
    // subscribed to and answers on the matching status key.
    let config = deployed_bundle();

    let command_key = config.topics.control(Channel::Fan).unwrap();
    let kind = config.topics.parse(&command_key).unwrap();
    assert_eq!(kind, TopicKind::Control(Channel::Fan));

    let status_key = config.topics.status(Channel::Fan).unwrap();
    assert_eq!(status_key, "home/status/fan");
}

#[test]
fn a_second_device_reuses_the_namespace_but_not_the_id() {
    let first = deployed_bundle();

    let mut second = deployed_bundle();
    second.device_id = DeviceId::new("esp8266_002").unwrap();

    assert!(second.validate().is_ok());
    assert_ne!(first.device_id, second.device_id);
    assert_eq!(first.topics, second.topics);
}

#[test]
fn template_configs_never_reach_the_network() {
    // A bundle assembled from an untouched template must fail closed
    let config = DeviceConfig {
        wifi: WifiCredentials::new("your_wifi_ssid", "your_wifi_password").unwrap(),
        ..deployed_bundle()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Placeholder { .. })
    ));
}

#[test]
fn debug_output_of_a_full_bundle_leaks_no_secrets() {
    let config = deployed_bundle();
    let rendered = format!("{config:?}");

    assert!(rendered.contains("hallway-ap"));
    assert!(rendered.contains("mqtt.example.net"));
    assert!(!rendered.contains("portable-basalt-lantern"));
    assert!(!rendered.contains("n0de-pass!"));
}
