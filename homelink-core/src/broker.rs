//! Broker Endpoint Section
//!
//! Host, port and authentication for the message broker. The bundle never
//! connects; it only states where and how the consumer must. The one rule
//! with teeth here: the conventional secure port obliges the consumer to
//! bring up TLS, so [`BrokerEndpoint::transport`] makes that decision
//! explicit instead of leaving it to every call site.

use crate::{
    constants::limits::{MAX_HOST_LEN, MAX_SECRET_LEN, MAX_USERNAME_LEN},
    constants::net::MQTT_TLS_PORT,
    errors::{ConfigError, ConfigResult},
    secret::Secret,
    validate::{check_credential, check_not_empty},
};

/// Transport the consumer must establish for a given endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Plain TCP session.
    Tcp,
    /// TLS-encrypted session.
    Tls,
}

impl Transport {
    /// Map a broker port to its mandated transport.
    ///
    /// Port 8883 is registered for MQTT-over-TLS; pointing a bundle at it
    /// commits the consumer to an encrypted channel. Everything else is
    /// treated as plain TCP.
    pub const fn for_port(port: u16) -> Self {
        if port == MQTT_TLS_PORT {
            Transport::Tls
        } else {
            Transport::Tcp
        }
    }

    /// Whether this transport encrypts the channel.
    pub const fn is_encrypted(&self) -> bool {
        matches!(self, Transport::Tls)
    }
}

/// Connection parameters for the message broker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerEndpoint {
    host: heapless::String<MAX_HOST_LEN>,
    port: u16,
    username: heapless::String<MAX_USERNAME_LEN>,
    password: Secret<MAX_SECRET_LEN>,
}

impl BrokerEndpoint {
    /// Assemble the section, failing only on capacity overruns.
    pub fn new(host: &str, port: u16, username: &str, password: &str) -> ConfigResult<Self> {
        let mut host_buf = heapless::String::new();
        host_buf
            .push_str(host)
            .map_err(|_| ConfigError::CapacityExceeded {
                field: "broker.host",
            })?;

        let mut user_buf = heapless::String::new();
        user_buf
            .push_str(username)
            .map_err(|_| ConfigError::CapacityExceeded {
                field: "broker.username",
            })?;

        Ok(Self {
            host: host_buf,
            port,
            username: user_buf,
            password: Secret::new(password, "broker.password")?,
        })
    }

    /// Broker hostname or IP address.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Broker port.
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Authentication username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Authentication password; exposed only at the session hand-off.
    pub fn password(&self) -> &Secret<MAX_SECRET_LEN> {
        &self.password
    }

    /// Transport the consumer must establish for this endpoint.
    pub const fn transport(&self) -> Transport {
        Transport::for_port(self.port)
    }

    /// Startup validation: reachable shape, configured credentials.
    pub fn validate(&self) -> ConfigResult<()> {
        check_not_empty(&self.host, "broker.host")?;
        if self.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        check_credential(&self.username, "broker.username")?;
        check_credential(self.password.expose(), "broker.password")?;
        Ok(())
    }
}
