//! Topic Namespace
//!
//! ## Overview
//!
//! Seven routing keys connect a node to its controllers, grouped by
//! direction:
//!
//! ```text
//! device -> broker    {ns}/sensors            one shared sensor-report channel
//! broker -> device    {ns}/control/light      actuator commands
//!                     {ns}/control/fan
//!                     {ns}/control/motor
//! device -> broker    {ns}/status/light       actuator state reports
//!                     {ns}/status/fan
//!                     {ns}/status/motor
//! ```
//!
//! Consumers never spell these strings out. [`TopicSet`] owns the
//! namespace prefix and renders or parses every key through a typed
//! [`TopicKind`], so a renamed channel is a one-line change and a typo'd
//! subscription cannot compile.
//!
//! ## Namespace choice
//!
//! The deployed default is the shared `home` prefix ([`TopicSet::home`]).
//! Fleets that segregate traffic per node use the device identifier as the
//! prefix instead ([`TopicSet::for_device`]); both shapes produce the same
//! seven keys below the prefix.

use core::fmt::Write as _;

use crate::{
    constants::limits::{MAX_NAMESPACE_LEN, MAX_TOPIC_LEN},
    errors::{ConfigError, ConfigResult},
    identity::DeviceId,
    validate::check_topic_shape,
};

/// Rendered topic string, bounded for embedded use.
pub type TopicBuf = heapless::String<MAX_TOPIC_LEN>;

/// Actuator channels addressed by control and status topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Relay-switched light.
    Light,
    /// Ventilation fan.
    Fan,
    /// Motor (curtain/gate drive).
    Motor,
}

impl Channel {
    /// All channels, in declaration order.
    pub const ALL: [Channel; 3] = [Channel::Light, Channel::Fan, Channel::Motor];

    /// Topic segment for this channel.
    pub const fn name(&self) -> &'static str {
        match self {
            Channel::Light => "light",
            Channel::Fan => "fan",
            Channel::Motor => "motor",
        }
    }

    /// Parse a topic segment back into a channel.
    pub fn parse(segment: &str) -> Option<Self> {
        match segment {
            "light" => Some(Channel::Light),
            "fan" => Some(Channel::Fan),
            "motor" => Some(Channel::Motor),
            _ => None,
        }
    }
}

/// Message flow direction of a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Published by the device, consumed by controllers.
    DeviceToBroker,
    /// Published by controllers, consumed by the device.
    BrokerToDevice,
}

/// The seven routing keys of the namespace, typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopicKind {
    /// Shared sensor-report channel for all on-board sensors.
    SensorReport,
    /// Actuator command channel.
    Control(Channel),
    /// Actuator state-report channel.
    Status(Channel),
}

impl TopicKind {
    /// All seven kinds, in a stable order.
    pub const ALL: [TopicKind; 7] = [
        TopicKind::SensorReport,
        TopicKind::Control(Channel::Light),
        TopicKind::Control(Channel::Fan),
        TopicKind::Control(Channel::Motor),
        TopicKind::Status(Channel::Light),
        TopicKind::Status(Channel::Fan),
        TopicKind::Status(Channel::Motor),
    ];

    /// Who publishes on this topic.
    pub const fn direction(&self) -> Direction {
        match self {
            TopicKind::SensorReport | TopicKind::Status(_) => Direction::DeviceToBroker,
            TopicKind::Control(_) => Direction::BrokerToDevice,
        }
    }
}

/// The bundle's topic namespace: one prefix, seven derived keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSet {
    namespace: heapless::String<MAX_NAMESPACE_LEN>,
}

impl TopicSet {
    /// Build a namespace from a prefix.
    ///
    /// The prefix may contain `/` for multi-level namespaces; every
    /// segment must be non-empty and free of MQTT specials.
    pub fn new(namespace: &str) -> ConfigResult<Self> {
        if namespace.is_empty() {
            return Err(ConfigError::MalformedTopic {
                reason: "namespace is empty",
            });
        }
        if namespace.starts_with('$') {
            return Err(ConfigError::MalformedTopic {
                reason: "system topic prefix `$` is reserved",
            });
        }
        for segment in namespace.split('/') {
            if segment.is_empty() {
                return Err(ConfigError::MalformedTopic {
                    reason: "empty segment",
                });
            }
            if segment
                .bytes()
                .any(|b| b == b'+' || b == b'#' || b.is_ascii_whitespace())
            {
                return Err(ConfigError::MalformedTopic {
                    reason: "namespace contains reserved characters",
                });
            }
        }

        let mut buf = heapless::String::new();
        buf.push_str(namespace)
            .map_err(|_| ConfigError::CapacityExceeded {
                field: "topics.namespace",
            })?;

        Ok(Self { namespace: buf })
    }

    /// The deployed default namespace.
    pub fn home() -> ConfigResult<Self> {
        Self::new("home")
    }

    /// Per-device namespace, prefixing every key with the device id.
    pub fn for_device(id: &DeviceId) -> ConfigResult<Self> {
        Self::new(id.as_str())
    }

    /// Namespace prefix.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Render the routing key for a topic kind.
    pub fn topic(&self, kind: TopicKind) -> ConfigResult<TopicBuf> {
        let mut buf = TopicBuf::new();
        let ns = self.namespace.as_str();
        match kind {
            TopicKind::SensorReport => write!(buf, "{}/sensors", ns),
            TopicKind::Control(ch) => write!(buf, "{}/control/{}", ns, ch.name()),
            TopicKind::Status(ch) => write!(buf, "{}/status/{}", ns, ch.name()),
        }
        .map_err(|_| ConfigError::CapacityExceeded { field: "topic" })?;
        Ok(buf)
    }

    /// Shared sensor-report key (`{ns}/sensors`).
    pub fn sensor_report(&self) -> ConfigResult<TopicBuf> {
        self.topic(TopicKind::SensorReport)
    }

    /// Command key for an actuator channel (`{ns}/control/{channel}`).
    pub fn control(&self, channel: Channel) -> ConfigResult<TopicBuf> {
        self.topic(TopicKind::Control(channel))
    }

    /// State-report key for an actuator channel (`{ns}/status/{channel}`).
    pub fn status(&self, channel: Channel) -> ConfigResult<TopicBuf> {
        self.topic(TopicKind::Status(channel))
    }

    /// Recover the topic kind from a received routing key.
    ///
    /// Keys outside this namespace are rejected, as are unknown
    /// categories and channels below it.
    pub fn parse(&self, topic: &str) -> ConfigResult<TopicKind> {
        let rest = topic
            .strip_prefix(self.namespace.as_str())
            .and_then(|r| r.strip_prefix('/'))
            .ok_or(ConfigError::MalformedTopic {
                reason: "key outside this namespace",
            })?;

        if rest == "sensors" {
            return Ok(TopicKind::SensorReport);
        }

        let (category, channel) = rest.split_once('/').ok_or(ConfigError::MalformedTopic {
            reason: "unknown category",
        })?;
        let channel = Channel::parse(channel).ok_or(ConfigError::MalformedTopic {
            reason: "unknown channel",
        })?;

        match category {
            "control" => Ok(TopicKind::Control(channel)),
            "status" => Ok(TopicKind::Status(channel)),
            _ => Err(ConfigError::MalformedTopic {
                reason: "unknown category",
            }),
        }
    }

    /// Startup validation: every key well-formed, all keys distinct.
    ///
    /// Distinctness is structural with the fixed kind set, but the check
    /// stays: it is the invariant consumers rely on, and it holds for any
    /// future key added to [`TopicKind::ALL`].
    pub fn validate(&self) -> ConfigResult<()> {
        let mut rendered: heapless::Vec<TopicBuf, 7> = heapless::Vec::new();
        for kind in TopicKind::ALL {
            let key = self.topic(kind)?;
            check_topic_shape(&key)?;
            if rendered.iter().any(|seen| seen == &key) {
                return Err(ConfigError::DuplicateTopic);
            }
            rendered
                .push(key)
                .map_err(|_| ConfigError::CapacityExceeded { field: "topics" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_deployed_keys() {
        let topics = TopicSet::home().unwrap();
        assert_eq!(topics.sensor_report().unwrap(), "home/sensors");
        assert_eq!(topics.control(Channel::Light).unwrap(), "home/control/light");
        assert_eq!(topics.control(Channel::Fan).unwrap(), "home/control/fan");
        assert_eq!(topics.control(Channel::Motor).unwrap(), "home/control/motor");
        assert_eq!(topics.status(Channel::Light).unwrap(), "home/status/light");
        assert_eq!(topics.status(Channel::Fan).unwrap(), "home/status/fan");
        assert_eq!(topics.status(Channel::Motor).unwrap(), "home/status/motor");
    }

    #[test]
    fn seven_keys_all_distinct() {
        assert!(TopicSet::home().unwrap().validate().is_ok());
    }

    #[test]
    fn parse_round_trips_every_kind() {
        let topics = TopicSet::home().unwrap();
        for kind in TopicKind::ALL {
            let key = topics.topic(kind).unwrap();
            assert_eq!(topics.parse(&key).unwrap(), kind);
        }
    }

    #[test]
    fn foreign_keys_are_rejected() {
        let topics = TopicSet::home().unwrap();
        assert!(topics.parse("office/sensors").is_err());
        assert!(topics.parse("homeoffice/sensors").is_err());
        assert!(topics.parse("home/telemetry").is_err());
        assert!(topics.parse("home/control/siren").is_err());
        assert!(topics.parse("home/control/light/extra").is_err());
        assert!(topics.parse("home").is_err());
    }

    #[test]
    fn per_device_namespace() {
        let id = DeviceId::new("esp8266_001").unwrap();
        let topics = TopicSet::for_device(&id).unwrap();
        assert_eq!(topics.sensor_report().unwrap(), "esp8266_001/sensors");
        assert!(topics.validate().is_ok());
    }

    #[test]
    fn bad_namespaces_are_rejected() {
        assert!(TopicSet::new("").is_err());
        assert!(TopicSet::new("ho me").is_err());
        assert!(TopicSet::new("home/+").is_err());
        assert!(TopicSet::new("$SYS").is_err());
        assert!(TopicSet::new("home//floor").is_err());
        assert!(TopicSet::new("building/floor3").is_ok());
    }

    #[test]
    fn directions() {
        assert_eq!(
            TopicKind::SensorReport.direction(),
            Direction::DeviceToBroker
        );
        assert_eq!(
            TopicKind::Control(Channel::Fan).direction(),
            Direction::BrokerToDevice
        );
        assert_eq!(
            TopicKind::Status(Channel::Fan).direction(),
            Direction::DeviceToBroker
        );
    }
}
