//! Disclosure configuration types.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default dwell time before a hover opens the body.
pub const DEFAULT_HOVER_DELAY: Duration = Duration::from_millis(500);

/// Per-widget configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisclosureConfig {
    /// How long the pointer must stay inside the control before the body opens.
    #[serde(rename = "hover_delay_ms", with = "millis")]
    pub hover_delay: Duration,
}

impl Default for DisclosureConfig {
    fn default() -> Self {
        Self {
            hover_delay: DEFAULT_HOVER_DELAY,
        }
    }
}

impl DisclosureConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hover delay.
    pub fn hover_delay(mut self, delay: Duration) -> Self {
        self.hover_delay = delay;
        self
    }

    /// Check that the config is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hover_delay.is_zero() {
            return Err(ConfigError::ZeroDelay);
        }
        Ok(())
    }

    /// Parse a config from JSON and validate it.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }
}

/// Errors that can occur when loading a [`DisclosureConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A zero hover delay would open on incidental pointer transit.
    #[error("hover delay must be greater than zero")]
    ZeroDelay,

    /// The config source was not valid JSON for this schema.
    #[error("invalid disclosure config: {0}")]
    Parse(#[from] serde_json::Error),
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
