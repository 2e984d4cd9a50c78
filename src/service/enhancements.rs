// SPDX-License-Identifier: MIT OR Apache-2.0

//! Action factory registry implementation.
//!
//! `UiActionsServiceEnhancements` keeps registered factories in an insertion
//! ordered map and adds the drilldown convenience registration on top.

use crate::adapters::{DrilldownActionFactory, DrilldownDefinition};
use crate::domain::{ActionFactory, ActionFactoryRegistry, HookError, Result};
use crate::ports::ActionFactoryDefinition;
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Insertion ordered map of registered factories, keyed by factory id.
pub type ActionFactoryMap<FC, AC> = IndexMap<String, Arc<ActionFactory<FC, AC>>>;

/// The action factory registry.
///
/// Registration needs `&mut self`; the registry does no locking of its own.
/// Hosts that register from several threads must wrap it themselves.
///
/// # Examples
///
/// ```rust
/// use plugin_hooks::adapters::DrilldownDefinition;
/// use plugin_hooks::domain::ActionFactoryRegistry;
/// use plugin_hooks::service::UiActionsServiceEnhancements;
/// use serde_json::Value;
///
/// # fn main() -> plugin_hooks::domain::Result<()> {
/// let mut service = UiActionsServiceEnhancements::<(), String>::new();
///
/// service.register_drilldown(
///     DrilldownDefinition::<Value, String>::builder("nav")
///         .euiicon("link")
///         .execute(|_config: Value, _context: String| async { Ok(()) })
///         .build()?,
/// )?;
///
/// let factory = service.get_action_factory("nav")?;
/// assert_eq!(factory.icon_type(&()).as_deref(), Some("link"));
/// assert!(service.get_action_factory("missing").is_err());
/// # Ok(())
/// # }
/// ```
pub struct UiActionsServiceEnhancements<FC, AC>
where
    FC: Send + Sync + 'static,
    AC: Send + 'static,
{
    action_factories: ActionFactoryMap<FC, AC>,
}

impl<FC, AC> UiActionsServiceEnhancements<FC, AC>
where
    FC: Send + Sync + 'static,
    AC: Send + 'static,
{
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::with_registry(IndexMap::new())
    }

    /// Creates a registry over an existing map of factories.
    pub fn with_registry(action_factories: ActionFactoryMap<FC, AC>) -> Self {
        Self { action_factories }
    }

    /// Registers a drilldown as an action factory.
    ///
    /// # Errors
    ///
    /// Same as [`ActionFactoryRegistry::register_action_factory`].
    pub fn register_drilldown<C>(&mut self, drilldown: DrilldownDefinition<C, AC>) -> Result<()>
    where
        C: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    {
        self.register_action_factory(Box::new(DrilldownActionFactory::new(drilldown)))
    }

    /// Returns a snapshot of all factories sorted by their order.
    ///
    /// Factories with equal order keep registration order.
    pub fn get_action_factories_by_order(&self) -> Vec<Arc<ActionFactory<FC, AC>>> {
        let mut factories = self.get_action_factories();
        factories.sort_by_key(|factory| factory.order());
        factories
    }

    /// The number of registered factories.
    pub fn len(&self) -> usize {
        self.action_factories.len()
    }

    /// Returns `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.action_factories.is_empty()
    }
}

impl<FC, AC> Default for UiActionsServiceEnhancements<FC, AC>
where
    FC: Send + Sync + 'static,
    AC: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<FC, AC> ActionFactoryRegistry<FC, AC> for UiActionsServiceEnhancements<FC, AC>
where
    FC: Send + Sync + 'static,
    AC: Send + 'static,
{
    fn register_action_factory(
        &mut self,
        definition: Box<dyn ActionFactoryDefinition<FC, AC>>,
    ) -> Result<()> {
        let id = definition.id().to_string();
        if id.is_empty() {
            return Err(HookError::InvalidDefinition {
                message: "action factory id must not be empty".to_string(),
            });
        }

        match self.action_factories.entry(id) {
            Entry::Occupied(entry) => Err(HookError::DuplicateRegistration {
                id: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                tracing::debug!("Registered action factory '{}'", entry.key());
                entry.insert(Arc::new(ActionFactory::new(definition)));
                Ok(())
            }
        }
    }

    fn get_action_factory(&self, id: &str) -> Result<Arc<ActionFactory<FC, AC>>> {
        self.action_factories
            .get(id)
            .cloned()
            .ok_or_else(|| HookError::NotFound { id: id.to_string() })
    }

    fn get_action_factories(&self) -> Vec<Arc<ActionFactory<FC, AC>>> {
        self.action_factories.values().cloned().collect()
    }

    fn has_action_factory(&self, id: &str) -> bool {
        self.action_factories.contains_key(id)
    }
}

impl<FC, AC> fmt::Debug for UiActionsServiceEnhancements<FC, AC>
where
    FC: Send + Sync + 'static,
    AC: Send + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiActionsServiceEnhancements")
            .field("action_factories", &self.action_factories.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn drilldown(id: &str, order: i32) -> DrilldownDefinition<Value, ()> {
        DrilldownDefinition::builder(id)
            .order(order)
            .execute(|_config: Value, _context: ()| async { Ok(()) })
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_is_empty() {
        let service = UiActionsServiceEnhancements::<(), ()>::new();
        assert!(service.is_empty());
        assert!(service.get_action_factories().is_empty());
    }

    #[test]
    fn test_duplicate_leaves_first_registration() {
        let mut service = UiActionsServiceEnhancements::<(), ()>::new();
        service.register_drilldown(drilldown("a", 1)).unwrap();

        let err = service.register_drilldown(drilldown("a", 99)).unwrap_err();
        assert!(matches!(err, HookError::DuplicateRegistration { ref id } if id == "a"));
        assert_eq!(service.len(), 1);
        assert_eq!(service.get_action_factory("a").unwrap().order(), 1);
    }

    #[test]
    fn test_by_order_is_stable() {
        let mut service = UiActionsServiceEnhancements::<(), ()>::new();
        service.register_drilldown(drilldown("late", 5)).unwrap();
        service.register_drilldown(drilldown("first", 1)).unwrap();
        service.register_drilldown(drilldown("tie", 5)).unwrap();

        let ids: Vec<String> = service
            .get_action_factories_by_order()
            .iter()
            .map(|f| f.id().to_string())
            .collect();
        assert_eq!(ids, vec!["first", "late", "tie"]);

        let registered: Vec<String> = service
            .get_action_factories()
            .iter()
            .map(|f| f.id().to_string())
            .collect();
        assert_eq!(registered, vec!["late", "first", "tie"]);
    }

    #[test]
    fn test_with_registry_shares_existing_entries() {
        let mut seed = UiActionsServiceEnhancements::<(), ()>::new();
        seed.register_drilldown(drilldown("seeded", 0)).unwrap();
        let map: ActionFactoryMap<(), ()> = seed
            .get_action_factories()
            .into_iter()
            .map(|f| (f.id().to_string(), f))
            .collect();

        let mut service = UiActionsServiceEnhancements::with_registry(map);
        assert!(service.has_action_factory("seeded"));
        assert!(service.register_drilldown(drilldown("seeded", 0)).is_err());
    }

    #[test]
    fn test_debug_lists_ids() {
        let mut service = UiActionsServiceEnhancements::<(), ()>::new();
        service.register_drilldown(drilldown("nav", 0)).unwrap();
        assert!(format!("{:?}", service).contains("nav"));
    }
}
