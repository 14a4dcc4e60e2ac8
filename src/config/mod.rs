//! Unified configuration loading for TaraMap.
//!
//! Loads all tunables from a single TOML file with sensible defaults, so a
//! missing or partial file always produces a working configuration.
//!
//! ## Example TOML
//!
//! ```toml
//! [matcher]
//! min_overlap = 12      # beacons required to accept an alignment
//!
//! [registration]
//! stall_limit = 1       # zero-success worklist passes before aborting
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::matching::AlignerConfig;
use crate::registration::EngineConfig;

/// Config load error.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    /// File could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// File is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Full TaraMap configuration loaded from TOML.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct TaraConfig {
    /// Scan aligner settings.
    #[serde(default)]
    pub matcher: AlignerConfig,

    /// Registration worklist settings.
    #[serde(default)]
    pub registration: EngineConfig,
}

impl TaraConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&contents)?)
    }

    /// Load from the default config path (`configs/tara.toml`), falling
    /// back to built-in defaults when the file does not exist.
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/tara.toml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from a TOML string.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
