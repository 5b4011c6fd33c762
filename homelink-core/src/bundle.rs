//! The Device Configuration Bundle
//!
//! ## Overview
//!
//! [`DeviceConfig`] is the single value the rest of the firmware receives
//! at startup: network credentials, broker endpoint, topic namespace,
//! identity and cadence, and the pin map, assembled once and passed by
//! reference to every collaborator. No collaborator reaches for ambient
//! globals, which is what keeps alternate configurations constructible in
//! tests.
//!
//! ## Lifecycle
//!
//! The bundle has exactly one state - defined - for the whole process
//! lifetime. Construction is plain data assembly; all checking lives in
//! [`DeviceConfig::validate`], which the consuming firmware must call
//! before acting on any field. A bundle that fails validation is a fatal
//! configuration error, not something to limp along with: every failure
//! mode here (placeholder credentials, pin collisions, duplicate routing
//! keys) produces silently wrong behavior downstream if ignored.

use crate::{
    broker::BrokerEndpoint,
    errors::ConfigResult,
    identity::{DeviceId, UpdateInterval},
    network::WifiCredentials,
    pins::{BoardProfile, PinMap},
    topics::TopicSet,
};

/// Complete, immutable configuration of one node.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceConfig {
    /// Fleet-unique identifier of this node.
    pub device_id: DeviceId,
    /// Sensor sampling and publishing cadence.
    pub update_interval: UpdateInterval,
    /// Local network join credentials.
    pub wifi: WifiCredentials,
    /// Message broker endpoint and authentication.
    pub broker: BrokerEndpoint,
    /// Routing-key namespace.
    pub topics: TopicSet,
    /// Role-to-pin bindings.
    pub pins: PinMap,
    /// Pin capabilities of the target board.
    pub board: BoardProfile,
}

impl DeviceConfig {
    /// Startup validation of the whole bundle.
    ///
    /// Runs every section check plus the cross-section checks (pin
    /// collisions, routing-key distinctness). Sections are checked in a
    /// stable order, so the first error reported is deterministic.
    pub fn validate(&self) -> ConfigResult<()> {
        self.wifi.validate()?;
        self.broker.validate()?;
        self.topics.validate()?;
        self.pins.validate(&self.board)?;

        #[cfg(feature = "log")]
        log::debug!(
            "configuration valid: device {} -> {}:{} ({:?}), every {} ms",
            self.device_id,
            self.broker.host(),
            self.broker.port(),
            self.broker.transport(),
            self.update_interval.as_millis(),
        );

        Ok(())
    }
}
