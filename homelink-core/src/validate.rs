//! Common Validation Utilities
//!
//! Shared checks used by every section of the bundle. All helpers are pure
//! functions over borrowed data: no allocation, no side effects, safe to
//! call from startup code and from tests alike.
//!
//! The checks enforce the contract a bundle must satisfy before any
//! consumer acts on it:
//!
//! - required text present (`check_not_empty`)
//! - credentials actually configured, not template leftovers
//!   (`check_credential`, `is_placeholder`)
//! - routing keys shaped like `segment/segment` with no MQTT wildcards
//!   (`check_topic_shape`)

use crate::{
    constants::limits::PLACEHOLDER_MARKERS,
    errors::{ConfigError, ConfigResult},
};

/// Check that a required text value is present.
pub fn check_not_empty(value: &str, field: &'static str) -> ConfigResult<()> {
    if value.is_empty() {
        Err(ConfigError::Empty { field })
    } else {
        Ok(())
    }
}

/// Detect template values that were never filled in.
///
/// Matches case-insensitively against [`PLACEHOLDER_MARKERS`] and the
/// `your_*` convention used by config templates shipped with firmware
/// sketches.
pub fn is_placeholder(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() >= 5 && bytes[..5].eq_ignore_ascii_case(b"your_") {
        return true;
    }
    PLACEHOLDER_MARKERS
        .iter()
        .any(|marker| value.eq_ignore_ascii_case(marker))
}

/// Full credential check: present and not a placeholder.
pub fn check_credential(value: &str, field: &'static str) -> ConfigResult<()> {
    check_not_empty(value, field)?;
    if is_placeholder(value) {
        return Err(ConfigError::Placeholder { field });
    }
    Ok(())
}

/// Check that a topic string is a well-formed routing key.
///
/// Requires at least two `/`-separated segments (the `category/subcategory`
/// form), every segment non-empty, and no publish-side MQTT specials:
/// wildcards (`+`, `#`), the `$` system prefix, or embedded whitespace.
pub fn check_topic_shape(topic: &str) -> ConfigResult<()> {
    if topic.is_empty() {
        return Err(ConfigError::MalformedTopic {
            reason: "topic is empty",
        });
    }
    if topic.starts_with('$') {
        return Err(ConfigError::MalformedTopic {
            reason: "system topic prefix `$` is reserved",
        });
    }

    let mut segments = 0usize;
    for segment in topic.split('/') {
        if segment.is_empty() {
            return Err(ConfigError::MalformedTopic {
                reason: "empty segment",
            });
        }
        if segment.bytes().any(|b| b == b'+' || b == b'#') {
            return Err(ConfigError::MalformedTopic {
                reason: "wildcards are not allowed in configured topics",
            });
        }
        if segment.bytes().any(|b| b.is_ascii_whitespace()) {
            return Err(ConfigError::MalformedTopic {
                reason: "whitespace in segment",
            });
        }
        segments += 1;
    }

    if segments < 2 {
        return Err(ConfigError::MalformedTopic {
            reason: "expected category/subcategory form",
        });
    }

    Ok(())
}
