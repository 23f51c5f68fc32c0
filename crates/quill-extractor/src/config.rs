//! Configuration for the Extractor

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Upper bound on the completion call (seconds)
    pub extraction_timeout_secs: u64,

    /// Maximum combined transcript and source length (characters)
    pub max_input_chars: usize,
}

impl ExtractorConfig {
    /// Get the extraction timeout as a Duration
    pub fn extraction_timeout(&self) -> Duration {
        Duration::from_secs(self.extraction_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.extraction_timeout_secs == 0 {
            return Err("extraction_timeout_secs must be greater than 0".to_string());
        }
        if self.max_input_chars == 0 {
            return Err("max_input_chars must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Default configuration for interactive use
    fn default() -> Self {
        Self {
            extraction_timeout_secs: 60,
            max_input_chars: 200_000,
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: short timeout, small inputs
    pub fn strict() -> Self {
        Self {
            extraction_timeout_secs: 20,
            max_input_chars: 50_000,
        }
    }

    /// Lenient preset: long timeout, large inputs
    pub fn lenient() -> Self {
        Self {
            extraction_timeout_secs: 180,
            max_input_chars: 1_000_000,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
