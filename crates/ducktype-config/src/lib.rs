//! TOML-backed configuration for value rendering.
//!
//! ```toml
//! [render]
//! max_depth = 64
//! utc_offset_minutes = 0
//! ```


use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error as ThisError;

///
/// CONSTANTS
///

/// Default nesting limit applied by the renderer.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Largest UTC offset accepted for TIMESTAMPTZ rendering (15:59).
pub const MAX_UTC_OFFSET_MINUTES: i32 = 15 * 60 + 59;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

///
/// Config
///
/// Root of a ducktype config file.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub render: RenderConfig,
}

impl Config {
    /// Parse and validate a config document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.render.validate()?;

        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&source)
    }
}

///
/// RenderConfig
///
/// Knobs owned by the value renderer.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Deepest nesting level the renderer will descend into.
    pub max_depth: usize,

    /// Session offset applied to TIMESTAMPTZ values.
    pub utc_offset_minutes: i32,
}

impl RenderConfig {
    #[must_use]
    pub const fn new(max_depth: usize, utc_offset_minutes: i32) -> Self {
        Self {
            max_depth,
            utc_offset_minutes,
        }
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid(
                "render.max_depth must be at least 1".to_string(),
            ));
        }

        if self.utc_offset_minutes.unsigned_abs() > MAX_UTC_OFFSET_MINUTES.unsigned_abs() {
            return Err(ConfigError::Invalid(format!(
                "render.utc_offset_minutes {} is outside +/-{MAX_UTC_OFFSET_MINUTES}",
                self.utc_offset_minutes
            )));
        }

        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH, 0)
    }
}
