//! Deployment configuration loaded from TOML.

use crosspost_compose::{PINTEREST_BOARD_ID_VAR, PINTEREST_BOARD_NAME_VAR, PublishDefaults};
use crosspost_core::PlatformRegistry;
use crosspost_error::{ConfigError, CrosspostResult, IoError};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
///
/// ```toml
/// extra_platforms = ["mastodon"]
///
/// [defaults]
/// pinterest_board_name = "Lunary"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct CrosspostConfig {
    /// Platform names added to the built-in registry
    #[serde(default)]
    extra_platforms: Vec<String>,
    /// Option defaults; environment variables override these
    #[serde(default)]
    defaults: DefaultsConfig,
}

/// Option defaults configured in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct DefaultsConfig {
    /// Pinterest board name
    #[serde(default)]
    pinterest_board_name: Option<String>,
    /// Pinterest board identifier, used when no name is set
    #[serde(default)]
    pinterest_board_id: Option<String>,
}

impl CrosspostConfig {
    /// Load configuration from a TOML file.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> CrosspostResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            IoError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> CrosspostResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config
            .extra_platforms
            .iter()
            .any(|name| name.trim().is_empty())
        {
            return Err(ConfigError::new("extra_platforms must not contain blank names").into());
        }
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load(path: Option<&Path>) -> CrosspostResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                tracing::debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Built-in registry plus the configured extra platforms.
    pub fn registry(&self) -> PlatformRegistry {
        PlatformRegistry::builtin().with_platforms(self.extra_platforms.iter().map(String::as_str))
    }

    /// Publish defaults from the process environment layered over the file.
    pub fn publish_defaults(&self) -> PublishDefaults {
        self.publish_defaults_with(|name| std::env::var(name).ok())
    }

    /// Publish defaults from `env` layered over the file.
    ///
    /// Each variable set in `env` replaces the matching file value.
    pub fn publish_defaults_with<F>(&self, env: F) -> PublishDefaults
    where
        F: Fn(&str) -> Option<String>,
    {
        PublishDefaults::from_lookup(|name| {
            env(name)
                .filter(|value| !value.trim().is_empty())
                .or_else(|| self.file_default(name))
        })
    }

    fn file_default(&self, name: &str) -> Option<String> {
        match name {
            PINTEREST_BOARD_NAME_VAR => self.defaults.pinterest_board_name.clone(),
            PINTEREST_BOARD_ID_VAR => self.defaults.pinterest_board_id.clone(),
            _ => None,
        }
    }
}
