//! Typed Payload Shapes
//!
//! ## Overview
//!
//! The topic namespace routes three payload shapes:
//!
//! - [`SensorReport`] on the sensor-report topic: one combined reading
//!   from every on-board sensor
//! - [`SwitchState`] on control topics (the commanded state) and on
//!   status topics (the reported state)
//!
//! The bundle does not dispatch messages; these types only pin down the
//! wire shapes so device and controller sides agree on them at compile
//! time instead of at 2 a.m.
//!
//! ## Encodings
//!
//! Controllers accept two sensor-report encodings and devices may send
//! either:
//!
//! - JSON object: `{"motion":1,"humidity":45.5,"light_level":300,"temperature":25.0}`
//!   (motion as a 0/1 flag; absent fields read as zero)
//! - positional CSV fallback: `motion,humidity,light_level,temperature`
//!
//! Switch payloads are the literal strings `on` / `off`, parsed
//! case-insensitively.

use core::fmt::Write as _;

use thiserror_no_std::Error;

#[cfg(all(feature = "serde_json", not(feature = "std")))]
use alloc::string::String;

/// Capacity of an encoded CSV sensor report.
pub const MAX_CSV_LEN: usize = 64;

/// Errors for payload encoding and decoding.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadError {
    /// CSV report with the wrong number of fields
    #[error("Expected {expected} comma-separated fields, found {found}")]
    WrongFieldCount {
        /// Fields the format defines
        expected: u8,
        /// Fields actually present
        found: u8,
    },

    /// A field failed to parse or holds a non-finite number
    #[error("Field `{field}` is not valid")]
    InvalidField {
        /// Name of the offending field
        field: &'static str,
    },

    /// Switch payload other than `on` / `off`
    #[error("Unknown switch payload")]
    UnknownSwitch,

    /// Encoded payload does not fit its bounded buffer
    #[error("Encoded payload exceeds capacity")]
    Overflow,
}

/// Commanded or reported state of an actuator channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchState {
    /// Actuator energized.
    On,
    /// Actuator released.
    Off,
}

impl SwitchState {
    /// Wire form of the state.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SwitchState::On => "on",
            SwitchState::Off => "off",
        }
    }

    /// Parse a control or status payload, case-insensitively.
    pub fn parse(payload: &str) -> Result<Self, PayloadError> {
        if payload.eq_ignore_ascii_case("on") {
            Ok(SwitchState::On)
        } else if payload.eq_ignore_ascii_case("off") {
            Ok(SwitchState::Off)
        } else {
            Err(PayloadError::UnknownSwitch)
        }
    }

    /// Logical inverse, for toggle-style controllers.
    pub const fn toggled(&self) -> Self {
        match self {
            SwitchState::On => SwitchState::Off,
            SwitchState::Off => SwitchState::On,
        }
    }
}

/// One combined reading from the node's sensors.
///
/// Field values mirror what the hardware produces: the motion input is a
/// level, humidity and temperature come from the environmental sensor,
/// the light level is the raw ADC count.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SensorReport {
    /// Motion detected during the sampling window.
    #[cfg_attr(feature = "serde", serde(with = "motion_flag"))]
    pub motion: bool,
    /// Relative humidity in percent.
    pub humidity: f32,
    /// Raw light-level reading from the ADC.
    pub light_level: u16,
    /// Temperature in degrees Celsius.
    pub temperature: f32,
}

impl SensorReport {
    /// Decode the positional CSV fallback format.
    pub fn from_csv(payload: &str) -> Result<Self, PayloadError> {
        let found = payload.split(',').count();
        if found != 4 {
            return Err(PayloadError::WrongFieldCount {
                expected: 4,
                found: found.min(u8::MAX as usize) as u8,
            });
        }

        // Arity checked above; the defaults can no longer be reached
        let mut parts = payload.split(',').map(str::trim);
        let motion = parts.next().unwrap_or_default();
        let humidity = parts.next().unwrap_or_default();
        let light_level = parts.next().unwrap_or_default();
        let temperature = parts.next().unwrap_or_default();

        let motion = match motion {
            "0" => false,
            "1" => true,
            _ => return Err(PayloadError::InvalidField { field: "motion" }),
        };
        let humidity: f32 = humidity
            .parse()
            .map_err(|_| PayloadError::InvalidField { field: "humidity" })?;
        let light_level: u16 = light_level
            .parse()
            .map_err(|_| PayloadError::InvalidField {
                field: "light_level",
            })?;
        let temperature: f32 = temperature
            .parse()
            .map_err(|_| PayloadError::InvalidField {
                field: "temperature",
            })?;

        if !humidity.is_finite() {
            return Err(PayloadError::InvalidField { field: "humidity" });
        }
        if !temperature.is_finite() {
            return Err(PayloadError::InvalidField {
                field: "temperature",
            });
        }

        Ok(Self {
            motion,
            humidity,
            light_level,
            temperature,
        })
    }

    /// Encode as the positional CSV fallback format.
    pub fn to_csv(&self) -> Result<heapless::String<MAX_CSV_LEN>, PayloadError> {
        let mut buf = heapless::String::new();
        write!(
            buf,
            "{},{},{},{}",
            self.motion as u8, self.humidity, self.light_level, self.temperature
        )
        .map_err(|_| PayloadError::Overflow)?;
        Ok(buf)
    }

    /// Encode as the JSON object format.
    #[cfg(all(feature = "serde", feature = "serde_json"))]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode the JSON object format.
    #[cfg(all(feature = "serde", feature = "serde_json"))]
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}

/// Motion travels on the wire as a 0/1 integer flag.
#[cfg(feature = "serde")]
mod motion_flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*value as u8)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(u8::deserialize(deserializer)? == 1)
    }
}
