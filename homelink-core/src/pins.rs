//! Physical I/O Mapping
//!
//! ## Overview
//!
//! Six logical roles cover the node's hardware: four actuator outputs, a
//! digital environmental-sensor input and one analog light-level input.
//! [`PinMap`] binds each role to a physical pin; [`BoardProfile`] says
//! which bindings the target board can honor.
//!
//! Two misconfigurations here produce undefined hardware behavior rather
//! than an error at runtime, which is why validation refuses to proceed:
//!
//! - two output roles driven through one pin (relay chatter, shorted
//!   driver stages)
//! - the analog role wired to a pin with no ADC behind it (reads float)

use core::fmt;

use crate::{
    constants::boards::{
        ESP32_ANALOG_CHANNELS, ESP32_DIGITAL_PINS, ESP8266_ANALOG_CHANNELS, ESP8266_DIGITAL_PINS,
    },
    errors::{ConfigError, ConfigResult},
};

/// Logical hardware roles of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinRole {
    /// Relay output for the light channel.
    Light,
    /// Relay output for the fan channel.
    Fan,
    /// Motor driver, forward direction.
    MotorForward,
    /// Motor driver, backward direction.
    MotorBackward,
    /// Digital input from the environmental (temperature/humidity) sensor.
    EnvironmentSensor,
    /// Analog input from the light-level sensor.
    LightSensor,
}

impl PinRole {
    /// All roles, in declaration order.
    pub const ALL: [PinRole; 6] = [
        PinRole::Light,
        PinRole::Fan,
        PinRole::MotorForward,
        PinRole::MotorBackward,
        PinRole::EnvironmentSensor,
        PinRole::LightSensor,
    ];

    /// Human-readable role name.
    pub const fn name(&self) -> &'static str {
        match self {
            PinRole::Light => "light",
            PinRole::Fan => "fan",
            PinRole::MotorForward => "motor_forward",
            PinRole::MotorBackward => "motor_backward",
            PinRole::EnvironmentSensor => "environment_sensor",
            PinRole::LightSensor => "light_sensor",
        }
    }

    /// Whether the role needs an ADC behind its pin.
    pub const fn is_analog(&self) -> bool {
        matches!(self, PinRole::LightSensor)
    }
}

impl fmt::Display for PinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A physical pin binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinAssignment {
    /// GPIO pin in the board's conventional numbering.
    Digital(u8),
    /// ADC channel index (`A0` is channel 0).
    Analog(u8),
}

/// Pin capabilities of a target board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardProfile {
    name: &'static str,
    digital_pins: &'static [u8],
    analog_channels: &'static [u8],
}

impl BoardProfile {
    /// ESP8266 devkit profile.
    pub const fn esp8266() -> Self {
        Self {
            name: "esp8266",
            digital_pins: ESP8266_DIGITAL_PINS,
            analog_channels: ESP8266_ANALOG_CHANNELS,
        }
    }

    /// ESP32 devkit profile.
    pub const fn esp32() -> Self {
        Self {
            name: "esp32",
            digital_pins: ESP32_DIGITAL_PINS,
            analog_channels: ESP32_ANALOG_CHANNELS,
        }
    }

    /// Custom board profile for hardware outside the supported devkits.
    pub const fn custom(
        name: &'static str,
        digital_pins: &'static [u8],
        analog_channels: &'static [u8],
    ) -> Self {
        Self {
            name,
            digital_pins,
            analog_channels,
        }
    }

    /// Board name for logs and diagnostics.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the board exposes this GPIO number.
    pub fn supports_digital(&self, pin: u8) -> bool {
        self.digital_pins.contains(&pin)
    }

    /// Whether the board has an ADC on this channel.
    pub fn supports_analog(&self, channel: u8) -> bool {
        self.analog_channels.contains(&channel)
    }
}

/// Role-to-pin bindings for one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinMap {
    /// Light relay output.
    pub light: PinAssignment,
    /// Fan relay output.
    pub fan: PinAssignment,
    /// Motor forward output.
    pub motor_forward: PinAssignment,
    /// Motor backward output.
    pub motor_backward: PinAssignment,
    /// Environmental sensor data input.
    pub environment_sensor: PinAssignment,
    /// Light-level sensor analog input.
    pub light_sensor: PinAssignment,
}

impl PinMap {
    /// The deployed ESP8266 wiring.
    pub const fn esp8266_default() -> Self {
        Self {
            light: PinAssignment::Digital(2),
            fan: PinAssignment::Digital(4),
            motor_forward: PinAssignment::Digital(5),
            motor_backward: PinAssignment::Digital(6),
            environment_sensor: PinAssignment::Digital(7),
            light_sensor: PinAssignment::Analog(0),
        }
    }

    /// Reference wiring for an ESP32 devkit.
    pub const fn esp32_default() -> Self {
        Self {
            light: PinAssignment::Digital(16),
            fan: PinAssignment::Digital(17),
            motor_forward: PinAssignment::Digital(25),
            motor_backward: PinAssignment::Digital(26),
            environment_sensor: PinAssignment::Digital(27),
            light_sensor: PinAssignment::Analog(6),
        }
    }

    /// Binding for a role.
    pub const fn assignment(&self, role: PinRole) -> PinAssignment {
        match role {
            PinRole::Light => self.light,
            PinRole::Fan => self.fan,
            PinRole::MotorForward => self.motor_forward,
            PinRole::MotorBackward => self.motor_backward,
            PinRole::EnvironmentSensor => self.environment_sensor,
            PinRole::LightSensor => self.light_sensor,
        }
    }

    /// Startup validation against a board profile.
    ///
    /// Checks, in order: every digital role bound to a digital pin the
    /// board exposes; the analog role bound to a real ADC channel; no two
    /// digital roles sharing one pin.
    pub fn validate(&self, board: &BoardProfile) -> ConfigResult<()> {
        for role in PinRole::ALL {
            match (role.is_analog(), self.assignment(role)) {
                (false, PinAssignment::Digital(pin)) => {
                    if !board.supports_digital(pin) {
                        return Err(ConfigError::PinUnavailable { role });
                    }
                }
                (false, PinAssignment::Analog(_)) => {
                    return Err(ConfigError::PinUnavailable { role });
                }
                (true, PinAssignment::Analog(channel)) => {
                    if !board.supports_analog(channel) {
                        return Err(ConfigError::NotAnalogCapable { role });
                    }
                }
                (true, PinAssignment::Digital(_)) => {
                    return Err(ConfigError::NotAnalogCapable { role });
                }
            }
        }

        // Pairwise distinctness across the digital roles sharing the bus
        let digital: [PinRole; 5] = [
            PinRole::Light,
            PinRole::Fan,
            PinRole::MotorForward,
            PinRole::MotorBackward,
            PinRole::EnvironmentSensor,
        ];
        for (i, first) in digital.iter().enumerate() {
            for second in &digital[i + 1..] {
                if self.assignment(*first) == self.assignment(*second) {
                    return Err(ConfigError::PinCollision {
                        first: *first,
                        second: *second,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deployed_wiring_is_valid() {
        let map = PinMap::esp8266_default();
        assert!(map.validate(&BoardProfile::esp8266()).is_ok());
    }

    #[test]
    fn shared_pin_is_fatal() {
        let mut map = PinMap::esp8266_default();
        map.fan = map.light;
        assert_eq!(
            map.validate(&BoardProfile::esp8266()),
            Err(ConfigError::PinCollision {
                first: PinRole::Light,
                second: PinRole::Fan,
            })
        );
    }

    #[test]
    fn analog_role_needs_adc() {
        let mut map = PinMap::esp8266_default();
        map.light_sensor = PinAssignment::Digital(3);
        assert_eq!(
            map.validate(&BoardProfile::esp8266()),
            Err(ConfigError::NotAnalogCapable {
                role: PinRole::LightSensor
            })
        );

        // ESP8266 has exactly one ADC channel
        map.light_sensor = PinAssignment::Analog(1);
        assert_eq!(
            map.validate(&BoardProfile::esp8266()),
            Err(ConfigError::NotAnalogCapable {
                role: PinRole::LightSensor
            })
        );
    }

    #[test]
    fn unknown_pin_is_fatal() {
        let mut map = PinMap::esp8266_default();
        map.motor_forward = PinAssignment::Digital(42);
        assert_eq!(
            map.validate(&BoardProfile::esp8266()),
            Err(ConfigError::PinUnavailable {
                role: PinRole::MotorForward
            })
        );
    }

    #[test]
    fn digital_role_cannot_sit_on_adc() {
        let mut map = PinMap::esp8266_default();
        map.fan = PinAssignment::Analog(0);
        assert_eq!(
            map.validate(&BoardProfile::esp8266()),
            Err(ConfigError::PinUnavailable { role: PinRole::Fan })
        );
    }

    #[test]
    fn reference_wirings_match_their_boards() {
        assert!(PinMap::esp32_default().validate(&BoardProfile::esp32()).is_ok());

        // The esp8266 wiring uses pins the esp32 profile does not expose
        assert!(PinMap::esp8266_default()
            .validate(&BoardProfile::esp32())
            .is_err());
    }
}
