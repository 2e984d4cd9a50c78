// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lifecycle event kinds for agent configurations.

use std::fmt;

/// The kind of change reported for an agent configuration.
///
/// Event kinds arrive as strings from the saved-object change notifications.
/// Anything other than `created`, `updated` or `deleted` maps to `Other` and is
/// handled as a no-op.
///
/// # Examples
///
/// ```
/// use plugin_hooks::domain::ConfigAction;
///
/// assert_eq!(ConfigAction::from("deleted"), ConfigAction::Deleted);
/// assert_eq!(
///     ConfigAction::from("archived"),
///     ConfigAction::Other("archived".to_string())
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConfigAction {
    /// A configuration was created.
    Created,
    /// A configuration was changed.
    Updated,
    /// A configuration was removed.
    Deleted,
    /// Any kind that is not recognized. Matching is exact and case-sensitive.
    Other(String),
}

impl ConfigAction {
    /// Returns the wire name of the event kind.
    pub fn as_str(&self) -> &str {
        match self {
            ConfigAction::Created => "created",
            ConfigAction::Updated => "updated",
            ConfigAction::Deleted => "deleted",
            ConfigAction::Other(kind) => kind,
        }
    }

    /// Returns `true` for the three recognized kinds.
    pub fn is_known(&self) -> bool {
        !matches!(self, ConfigAction::Other(_))
    }
}

impl From<&str> for ConfigAction {
    fn from(s: &str) -> Self {
        match s {
            "created" => ConfigAction::Created,
            "updated" => ConfigAction::Updated,
            "deleted" => ConfigAction::Deleted,
            other => ConfigAction::Other(other.to_string()),
        }
    }
}

impl From<String> for ConfigAction {
    fn from(s: String) -> Self {
        ConfigAction::from(s.as_str())
    }
}

impl fmt::Display for ConfigAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
