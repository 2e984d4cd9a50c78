// SPDX-License-Identifier: MIT OR Apache-2.0

//! Agent configuration identifier newtype.
//!
//! `ConfigId` names the configuration bundle that a group of agents enrolls
//! against. Keeping it distinct from plain strings stops it being confused with
//! action factory ids or action kinds at the handler boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The identifier of an agent configuration.
///
/// # Examples
///
/// ```
/// use plugin_hooks::domain::ConfigId;
///
/// let id = ConfigId::from("cfg-1");
/// assert_eq!(id.as_str(), "cfg-1");
/// assert_eq!(id.to_string(), "cfg-1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigId(String);

impl ConfigId {
    /// Creates a new `ConfigId`.
    pub fn new(id: impl Into<String>) -> Self {
        ConfigId(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigId` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConfigId {
    fn from(s: String) -> Self {
        ConfigId(s)
    }
}

impl From<&str> for ConfigId {
    fn from(s: &str) -> Self {
        ConfigId(s.to_string())
    }
}

impl From<ConfigId> for String {
    fn from(id: ConfigId) -> Self {
        id.0
    }
}

impl AsRef<str> for ConfigId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
