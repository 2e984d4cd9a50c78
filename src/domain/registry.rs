// SPDX-License-Identifier: MIT OR Apache-2.0

//! Action factory registry trait definition.
//!
//! This module defines the `ActionFactoryRegistry` trait, the interface plugins
//! use to register action factories and that the UI and action runtime use to
//! look them up.

use crate::domain::{ActionFactory, Result};
use crate::ports::ActionFactoryDefinition;
use std::sync::Arc;

/// The action factory registry interface.
///
/// Factory ids are unique for the lifetime of a registry. There is no update or
/// removal operation.
pub trait ActionFactoryRegistry<FC, AC>
where
    FC: Send + Sync + 'static,
    AC: Send + 'static,
{
    /// Registers an action factory.
    ///
    /// # Errors
    ///
    /// * `HookError::InvalidDefinition` - the definition has an empty id
    /// * `HookError::DuplicateRegistration` - the id is already registered
    ///
    /// A failed registration leaves the registry unchanged.
    fn register_action_factory(
        &mut self,
        definition: Box<dyn ActionFactoryDefinition<FC, AC>>,
    ) -> Result<()>;

    /// Returns the factory registered under `id`.
    ///
    /// # Errors
    ///
    /// * `HookError::NotFound` - nothing is registered under `id`
    fn get_action_factory(&self, id: &str) -> Result<Arc<ActionFactory<FC, AC>>>;

    /// Returns a snapshot of all factories in registration order.
    fn get_action_factories(&self) -> Vec<Arc<ActionFactory<FC, AC>>>;

    /// Checks whether a factory is registered under `id`.
    fn has_action_factory(&self, id: &str) -> bool {
        self.get_action_factory(id).is_ok()
    }
}
