// SPDX-License-Identifier: MIT OR Apache-2.0

//! The stored form of a user-configured action.

use serde::{Deserialize, Serialize};

/// A configured action as persisted by the UI.
///
/// The config is kept as raw JSON by default; factories decode it into their
/// own config type when they create the action.
///
/// # Examples
///
/// ```
/// use plugin_hooks::domain::SerializedAction;
/// use serde_json::json;
///
/// let stored = json!({
///     "factoryId": "nav",
///     "name": "Go to dashboard",
///     "config": { "dashboardId": "abc" }
/// });
///
/// let action: SerializedAction = serde_json::from_value(stored).unwrap();
/// assert_eq!(action.factory_id, "nav");
/// assert_eq!(action.config["dashboardId"], "abc");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedAction<C = serde_json::Value> {
    /// Id of the factory that produced the action.
    pub factory_id: String,
    /// The name the user gave the action.
    pub name: String,
    /// The factory-specific config.
    pub config: C,
}

impl<C> SerializedAction<C> {
    /// Creates a serialized action.
    pub fn new(factory_id: impl Into<String>, name: impl Into<String>, config: C) -> Self {
        Self {
            factory_id: factory_id.into(),
            name: name.into(),
            config,
        }
    }
}

impl<C: Serialize> SerializedAction<C> {
    /// Converts a typed action into its raw JSON form.
    pub fn into_raw(self) -> serde_json::Result<SerializedAction> {
        Ok(SerializedAction {
            factory_id: self.factory_id,
            name: self.name,
            config: serde_json::to_value(self.config)?,
        })
    }
}
