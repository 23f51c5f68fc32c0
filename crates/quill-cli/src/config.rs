//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use quill_extractor::ExtractorConfig;
use quill_llm::{LlmConfig, ProviderKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Completion length cap used for drafts, which run longer than extraction
const DEFAULT_DRAFT_MAX_TOKENS: u32 = 2500;

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name
    #[serde(default = "default_profile")]
    pub active_profile: String,

    /// Available profiles
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Provider profile.
///
/// Stores the name of the environment variable holding the credential,
/// never the credential itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Environment variable with the API key; the vendor default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,

    /// Provider settings
    #[serde(flatten)]
    pub llm: LlmConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Completion length cap for drafts
    #[serde(default = "default_draft_max_tokens")]
    pub draft_max_tokens: u32,

    /// Extraction limits
    #[serde(default)]
    pub extraction: ExtractorConfig,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Profile {
    /// Profile for a vendor with default settings
    pub fn for_provider(provider: ProviderKind) -> Self {
        Self {
            api_key_env: None,
            llm: LlmConfig::for_provider(provider),
        }
    }

    /// Environment variable the credential is read from
    pub fn api_key_env(&self) -> &str {
        self.api_key_env
            .as_deref()
            .unwrap_or_else(|| self.llm.provider.default_api_key_env())
    }

    /// Provider settings with the credential resolved from the environment
    ///
    /// A missing or blank variable leaves the credential unset; the provider
    /// reports that when it is first called.
    pub fn resolve(&self) -> LlmConfig {
        let mut llm = self.llm.clone();
        llm.api_key = std::env::var(self.api_key_env())
            .ok()
            .filter(|key| !key.trim().is_empty());
        llm
    }
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".quill").join("config.toml"))
    }

    /// Load configuration from a file, or the default when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the active profile.
    pub fn get_active_profile(&self) -> Result<&Profile> {
        self.profiles
            .get(&self.active_profile)
            .ok_or_else(|| CliError::Config(format!("Profile '{}' not found", self.active_profile)))
    }

    /// Profile to run with: `name` when given, otherwise the active one.
    ///
    /// The active profile recorded in the configuration is not changed.
    pub fn profile_for(&self, name: Option<&str>) -> Result<&Profile> {
        match name {
            Some(name) => self
                .profiles
                .get(name)
                .ok_or_else(|| CliError::Config(format!("Profile '{}' does not exist", name))),
            None => self.get_active_profile(),
        }
    }

    /// Add or update a profile.
    pub fn set_profile(&mut self, name: String, profile: Profile) {
        self.profiles.insert(name, profile);
    }

    /// Switch to a different profile.
    pub fn switch_profile(&mut self, name: String) -> Result<()> {
        if !self.profiles.contains_key(&name) {
            return Err(CliError::Config(format!("Profile '{}' does not exist", name)));
        }
        self.active_profile = name;
        Ok(())
    }

    /// Check every profile and the extraction settings.
    pub fn validate(&self) -> Result<()> {
        for (name, profile) in &self.profiles {
            profile
                .llm
                .validate()
                .map_err(|e| CliError::Config(format!("Profile '{}': {}", name, e)))?;
        }
        self.settings
            .extraction
            .validate()
            .map_err(CliError::Config)?;
        if self.settings.draft_max_tokens == 0 {
            return Err(CliError::Config("draft_max_tokens must be greater than 0".into()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert("openai".to_string(), Profile::for_provider(ProviderKind::OpenAi));
        profiles.insert(
            "perplexity".to_string(),
            Profile::for_provider(ProviderKind::Perplexity),
        );

        Self {
            active_profile: default_profile(),
            profiles,
            settings: Settings::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            extraction: ExtractorConfig::default(),
            draft_max_tokens: DEFAULT_DRAFT_MAX_TOKENS,
        }
    }
}

fn default_profile() -> String {
    "openai".to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_draft_max_tokens() -> u32 {
    DEFAULT_DRAFT_MAX_TOKENS
}
