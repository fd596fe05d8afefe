//! Persisted widget state carried across a save/restore lifecycle boundary.
//!
//! The snapshot is a flat JSON object: seven integer colors keyed by name plus
//! the host's own state nested untouched under `superState`. Decoding is
//! lenient per field: a missing or malformed color decodes to `None`, which a
//! restore treats as "keep the current value".

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::color::Color;

pub const RING_COLOR_KEY: &str = "ringColor";
pub const TEXT_COLOR_KEY: &str = "textColor";
pub const DOTS_COLOR_KEY: &str = "dotsColor";
pub const HOUR_HAND_COLOR_KEY: &str = "hourHandColor";
pub const MINUTE_HAND_COLOR_KEY: &str = "minuteHandColor";
pub const SECOND_HAND_COLOR_KEY: &str = "secondHandColor";
pub const BACKGROUND_COLOR_KEY: &str = "backgroundColor";
pub const SUPER_STATE_KEY: &str = "superState";

/// Errors decoding a whole persisted document
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid persisted state JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("persisted state must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Serialized snapshot of a clock's style plus opaque host state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(from = "Value")]
pub struct PersistedConfig {
    #[serde(rename = "ringColor", skip_serializing_if = "Option::is_none")]
    pub ring_color: Option<Color>,
    #[serde(rename = "textColor", skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    #[serde(rename = "dotsColor", skip_serializing_if = "Option::is_none")]
    pub dots_color: Option<Color>,
    #[serde(rename = "hourHandColor", skip_serializing_if = "Option::is_none")]
    pub hour_hand_color: Option<Color>,
    #[serde(rename = "minuteHandColor", skip_serializing_if = "Option::is_none")]
    pub minute_hand_color: Option<Color>,
    #[serde(rename = "secondHandColor", skip_serializing_if = "Option::is_none")]
    pub second_hand_color: Option<Color>,
    #[serde(rename = "backgroundColor", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Host-owned state, never interpreted here
    #[serde(rename = "superState", skip_serializing_if = "Option::is_none")]
    pub super_state: Option<Value>,
}

impl PersistedConfig {
    /// Decode a JSON document. Only a document that is not a JSON object is
    /// an error; bad individual fields are dropped.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(ConfigError::NotAnObject(json_type_name(&value)));
        }
        Ok(Self::from(value))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of color fields carried by this snapshot
    pub fn color_count(&self) -> usize {
        [
            self.ring_color,
            self.text_color,
            self.dots_color,
            self.hour_hand_color,
            self.minute_hand_color,
            self.second_hand_color,
            self.background_color,
        ]
        .iter()
        .filter(|c| c.is_some())
        .count()
    }
}

impl From<Value> for PersistedConfig {
    fn from(value: Value) -> Self {
        let mut map = match value {
            Value::Object(map) => map,
            other => {
                log::warn!(
                    "Ignoring persisted clock state: expected object, found {}",
                    json_type_name(&other)
                );
                return Self::default();
            }
        };

        let color = |key: &str| -> Option<Color> {
            let raw = map.get(key)?;
            let parsed = raw.as_i64().and_then(Color::from_json_int);
            if parsed.is_none() {
                log::warn!("Ignoring malformed persisted field {}: {}", key, raw);
            }
            parsed
        };

        let ring_color = color(RING_COLOR_KEY);
        let text_color = color(TEXT_COLOR_KEY);
        let dots_color = color(DOTS_COLOR_KEY);
        let hour_hand_color = color(HOUR_HAND_COLOR_KEY);
        let minute_hand_color = color(MINUTE_HAND_COLOR_KEY);
        let second_hand_color = color(SECOND_HAND_COLOR_KEY);
        let background_color = color(BACKGROUND_COLOR_KEY);

        Self {
            ring_color,
            text_color,
            dots_color,
            hour_hand_color,
            minute_hand_color,
            second_hand_color,
            background_color,
            super_state: map.remove(SUPER_STATE_KEY),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
