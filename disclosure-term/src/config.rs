//! Host configuration.

use std::fs;
use std::path::{Path, PathBuf};

use disclosure::{ConfigError, DisclosureConfig};
use log::LevelFilter;
use serde::Deserialize;

use crate::error::TermError;

/// Everything the terminal host needs to show one disclosure.
///
/// The header and body are opaque to the controller; only
/// `disclosure` affects its behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TermConfig {
    /// Label shown next to the indicator
    pub header: String,
    /// Static hint painted after the label
    pub hint: String,
    /// Body lines, shown only while open
    pub body: Vec<String>,
    /// Indicator while open
    pub expanded_char: char,
    /// Indicator while closed
    pub collapsed_char: char,
    /// Log destination (the terminal itself is owned by the UI)
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub disclosure: DisclosureConfig,
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            header: "Details".into(),
            hint: "Hover to view".into(),
            body: vec![
                "Hover over the header and wait to peek at this text.".into(),
                "Click the header (or press Enter) to pin it open.".into(),
                "Press q to quit.".into(),
            ],
            expanded_char: '▼',
            collapsed_char: '▶',
            log_file: PathBuf::from("disclosure-term.log"),
            log_level: LevelFilter::Debug,
            disclosure: DisclosureConfig::default(),
        }
    }
}

impl TermConfig {
    /// Parse a config from JSON. Missing fields use their defaults.
    pub fn from_json(input: &str) -> Result<Self, TermError> {
        let config: Self = serde_json::from_str(input).map_err(ConfigError::from)?;
        config.disclosure.validate()?;
        Ok(config)
    }

    /// Load the config from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, TermError> {
        match path {
            Some(path) => Self::from_json(&fs::read_to_string(path)?),
            None => Ok(Self::default()),
        }
    }

    /// Indicator character for the given visibility.
    pub fn indicator(&self, open: bool) -> char {
        if open {
            self.expanded_char
        } else {
            self.collapsed_char
        }
    }
}
