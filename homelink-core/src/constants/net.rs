//! Network-Related Constants
//!
//! Well-known broker ports. The bundle never opens a connection itself;
//! these values let consumers pick the right transport without repeating
//! literals.

/// Conventional MQTT port for plain TCP.
///
/// Source: IANA service name registry (`mqtt`, 1883)
pub const MQTT_TCP_PORT: u16 = 1883;

/// Conventional MQTT port for TLS.
///
/// A bundle pointing at this port obliges the consumer to establish an
/// encrypted session.
///
/// Source: IANA service name registry (`secure-mqtt`, 8883)
pub const MQTT_TLS_PORT: u16 = 8883;
