// SPDX-License-Identifier: MIT OR Apache-2.0

//! Action factory definition trait.
//!
//! Plugins implement `ActionFactoryDefinition` to describe a kind of dynamic
//! action: how it is named and shown, when it is offered, how its config is
//! created and validated, and how a stored config turns into an [`Action`].

use crate::domain::{Result, SerializedAction};
use crate::ports::Action;
use async_trait::async_trait;
use serde_json::Value;

/// A trait for action factory definitions.
///
/// `FC` is the context the factory is offered in (the place where the user
/// configures the action), `AC` the context the created action executes with.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so the registry can be shared with the
/// action runtime.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use plugin_hooks::domain::{Result, SerializedAction};
/// use plugin_hooks::ports::{Action, ActionFactoryDefinition};
///
/// struct Noop;
///
/// #[async_trait]
/// impl Action<()> for Noop {
///     fn id(&self) -> &str { "" }
///     fn action_type(&self) -> &str { "noop" }
///     fn display_name(&self) -> String { "Nothing".to_string() }
///     async fn execute(&self, _context: ()) -> Result<()> { Ok(()) }
/// }
///
/// struct NoopFactory;
///
/// #[async_trait]
/// impl ActionFactoryDefinition<(), ()> for NoopFactory {
///     fn id(&self) -> &str {
///         "noop"
///     }
///
///     fn display_name(&self, _context: &()) -> String {
///         "Do nothing".to_string()
///     }
///
///     fn icon_type(&self, _context: &()) -> Option<String> {
///         None
///     }
///
///     async fn is_compatible(&self, _context: &()) -> bool {
///         true
///     }
///
///     fn create(&self, _serialized: SerializedAction) -> Result<Box<dyn Action<()>>> {
///         Ok(Box::new(Noop))
///     }
/// }
/// ```
#[async_trait]
pub trait ActionFactoryDefinition<FC, AC>: Send + Sync
where
    FC: Send + Sync + 'static,
    AC: Send + 'static,
{
    /// The unique id of the factory. Must not be empty.
    fn id(&self) -> &str;

    /// Sort key for listing factories in the UI. Lower values come first.
    fn order(&self) -> i32 {
        0
    }

    /// The name shown for the factory in the given context.
    fn display_name(&self, context: &FC) -> String;

    /// The icon shown for the factory in the given context.
    fn icon_type(&self, context: &FC) -> Option<String>;

    /// Whether the factory should be offered in the given context.
    async fn is_compatible(&self, context: &FC) -> bool;

    /// The config a freshly added action starts with.
    fn create_config(&self) -> Result<Value> {
        Ok(Value::Object(Default::default()))
    }

    /// Validates a config collected from the user.
    fn is_config_valid(&self, _config: &Value) -> bool {
        true
    }

    /// Builds an executable action from its stored form.
    fn create(&self, serialized: SerializedAction) -> Result<Box<dyn Action<AC>>>;
}
