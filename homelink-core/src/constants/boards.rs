//! Pin Capability Tables for Supported Boards
//!
//! Which physical pins a role may legally be bound to, per board. Digital
//! tables list usable GPIO numbers in the board's conventional numbering;
//! analog tables list ADC channel indices (`A0` is channel 0).

/// Usable digital pins on an ESP8266 devkit (D0-D8 numbering).
///
/// Excludes the pins tied to the on-board flash; binding an actuator to
/// those bricks the boot sequence.
pub const ESP8266_DIGITAL_PINS: &[u8] = &[0, 1, 2, 3, 4, 5, 6, 7, 8];

/// Analog-capable channels on an ESP8266 devkit.
///
/// The bare chip exposes a single ADC input, broken out as `A0`.
pub const ESP8266_ANALOG_CHANNELS: &[u8] = &[0];

/// Usable digital pins on an ESP32 devkit.
///
/// Conservative list: excludes the strapping pins (0, 2 is allowed but
/// shared with the boot LED on some boards), the integrated-flash pins
/// (6-11) and input-only 34-39.
pub const ESP32_DIGITAL_PINS: &[u8] = &[
    2, 4, 5, 12, 13, 14, 15, 16, 17, 18, 19, 21, 22, 23, 25, 26, 27, 32, 33,
];

/// Analog-capable channels on an ESP32 devkit (ADC1 channels 0-7).
///
/// ADC2 channels are deliberately absent: they are unusable while Wi-Fi is
/// active, and every HomeLink node runs Wi-Fi.
pub const ESP32_ANALOG_CHANNELS: &[u8] = &[0, 1, 2, 3, 4, 5, 6, 7];
