// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings for the agent configuration change handler.
//!
//! Settings are plain serde types. With the `yaml` feature they can be read
//! from a YAML document, a file, or the OS-appropriate config directory.

use serde::{Deserialize, Serialize};

#[cfg(feature = "yaml")]
use crate::domain::{HookError, Result};
#[cfg(feature = "yaml")]
use directories::ProjectDirs;
#[cfg(feature = "yaml")]
use std::path::Path;

/// File name looked up by [`HandlerSettings::from_default_location`].
pub const DEFAULT_SETTINGS_FILE: &str = "hooks.yaml";

/// What the handler does with an event kind it does not recognize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownActionPolicy {
    /// Return without doing anything.
    #[default]
    Ignore,
    /// Return without doing anything, but emit a `warn` event.
    Warn,
}

/// Settings for [`AgentConfigUpdateHandler`](crate::service::AgentConfigUpdateHandler).
///
/// # Examples
///
/// ```
/// use plugin_hooks::domain::{HandlerSettings, UnknownActionPolicy};
///
/// let settings = HandlerSettings::default();
/// assert_eq!(settings.unknown_action, UnknownActionPolicy::Ignore);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerSettings {
    /// Policy for unrecognized event kinds.
    pub unknown_action: UnknownActionPolicy,
}

impl HandlerSettings {
    /// Sets the policy for unrecognized event kinds.
    pub fn with_unknown_action(mut self, policy: UnknownActionPolicy) -> Self {
        self.unknown_action = policy;
        self
    }
}

#[cfg(feature = "yaml")]
impl HandlerSettings {
    /// Parses settings from a YAML document. Missing fields take their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use plugin_hooks::domain::{HandlerSettings, UnknownActionPolicy};
    ///
    /// let settings = HandlerSettings::from_yaml_str("unknown_action: warn\n").unwrap();
    /// assert_eq!(settings.unknown_action, UnknownActionPolicy::Warn);
    /// ```
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| HookError::Settings {
            message: format!("Invalid YAML: {}", e),
            source: Some(Box::new(e)),
        })
    }

    /// Reads settings from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded handler settings from {}", path.as_ref().display());
        Self::from_yaml_str(&content)
    }

    /// Reads `hooks.yaml` from the config directory of the application.
    ///
    /// A missing file yields the default settings.
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| HookError::Settings {
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Self::from_dir(proj_dirs.config_dir())
    }

    /// Reads `hooks.yaml` from the given directory.
    ///
    /// A missing file yields the default settings.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let settings_file = dir.as_ref().join(DEFAULT_SETTINGS_FILE);
        if !settings_file.exists() {
            tracing::debug!(
                "No settings file at {}, using defaults",
                settings_file.display()
            );
            return Ok(Self::default());
        }

        Self::from_file(settings_file)
    }
}
