// SPDX-License-Identifier: MIT OR Apache-2.0

//! The registry-owned wrapper around an action factory definition.

use crate::domain::{Result, SerializedAction};
use crate::ports::{Action, ActionFactoryDefinition};
use serde_json::Value;
use std::fmt;

/// A registered action factory.
///
/// Created by the registry from an [`ActionFactoryDefinition`]. The id and
/// order are captured at registration and never change afterwards.
pub struct ActionFactory<FC, AC>
where
    FC: Send + Sync + 'static,
    AC: Send + 'static,
{
    id: String,
    order: i32,
    definition: Box<dyn ActionFactoryDefinition<FC, AC>>,
}

impl<FC, AC> ActionFactory<FC, AC>
where
    FC: Send + Sync + 'static,
    AC: Send + 'static,
{
    /// Wraps a definition.
    pub fn new(definition: Box<dyn ActionFactoryDefinition<FC, AC>>) -> Self {
        Self {
            id: definition.id().to_string(),
            order: definition.order(),
            definition,
        }
    }

    /// The unique id of the factory.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sort key for listing factories.
    pub fn order(&self) -> i32 {
        self.order
    }

    /// The name shown for the factory in the given context.
    pub fn display_name(&self, context: &FC) -> String {
        self.definition.display_name(context)
    }

    /// The icon shown for the factory in the given context.
    pub fn icon_type(&self, context: &FC) -> Option<String> {
        self.definition.icon_type(context)
    }

    /// Whether the factory should be offered in the given context.
    pub async fn is_compatible(&self, context: &FC) -> bool {
        self.definition.is_compatible(context).await
    }

    /// The config a freshly added action starts with.
    pub fn create_config(&self) -> Result<Value> {
        self.definition.create_config()
    }

    /// Validates a config collected from the user.
    pub fn is_config_valid(&self, config: &Value) -> bool {
        self.definition.is_config_valid(config)
    }

    /// Builds an executable action from its stored form.
    pub fn create(&self, serialized: SerializedAction) -> Result<Box<dyn Action<AC>>> {
        self.definition.create(serialized)
    }
}

impl<FC, AC> fmt::Debug for ActionFactory<FC, AC>
where
    FC: Send + Sync + 'static,
    AC: Send + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionFactory")
            .field("id", &self.id)
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}
