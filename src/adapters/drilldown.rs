// SPDX-License-Identifier: MIT OR Apache-2.0

//! Drilldown adapter.
//!
//! A drilldown is a user-configured action, usually navigation, attached to a
//! UI element. Plugins describe one with a [`DrilldownDefinition`]; this module
//! turns it into an [`ActionFactoryDefinition`] the registry can hold.
//!
//! The config type `C` is typed on the drilldown side. Stored configs are raw
//! JSON, so the adapter decodes them with serde when an action is created.

use crate::domain::{HookError, Result, SerializedAction};
use crate::ports::{Action, ActionFactoryDefinition};
use async_trait::async_trait;
use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

type DisplayNameFn = Arc<dyn Fn() -> String + Send + Sync>;
type CreateConfigFn<C> = Arc<dyn Fn() -> C + Send + Sync>;
type ConfigValidFn<C> = Arc<dyn Fn(&C) -> bool + Send + Sync>;
type ExecuteFn<C, AC> = Arc<dyn Fn(C, AC) -> BoxFuture<'static, Result<()>> + Send + Sync>;
type HrefFn<C, AC> = Arc<dyn Fn(C, AC) -> BoxFuture<'static, Result<String>> + Send + Sync>;

/// Describes a drilldown.
///
/// Built with [`DrilldownDefinition::builder`] and registered with
/// [`UiActionsServiceEnhancements::register_drilldown`](crate::service::UiActionsServiceEnhancements::register_drilldown).
pub struct DrilldownDefinition<C, AC> {
    id: String,
    order: i32,
    euiicon: Option<String>,
    display_name: DisplayNameFn,
    create_config: Option<CreateConfigFn<C>>,
    is_config_valid: Option<ConfigValidFn<C>>,
    execute: ExecuteFn<C, AC>,
    href: Option<HrefFn<C, AC>>,
}

impl<C, AC> DrilldownDefinition<C, AC>
where
    C: Send + 'static,
    AC: Send + 'static,
{
    /// Starts building a drilldown with the given factory id.
    pub fn builder(id: impl Into<String>) -> DrilldownDefinitionBuilder<C, AC> {
        DrilldownDefinitionBuilder::new(id)
    }

    /// The factory id the drilldown registers under.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sort key for listing.
    pub fn order(&self) -> i32 {
        self.order
    }

    /// The configured icon.
    pub fn euiicon(&self) -> Option<&str> {
        self.euiicon.as_deref()
    }

    /// Whether the drilldown resolves link targets.
    pub fn has_href(&self) -> bool {
        self.href.is_some()
    }
}

impl<C, AC> fmt::Debug for DrilldownDefinition<C, AC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrilldownDefinition")
            .field("id", &self.id)
            .field("order", &self.order)
            .field("euiicon", &self.euiicon)
            .field("has_href", &self.href.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a [`DrilldownDefinition`].
///
/// # Examples
///
/// ```rust
/// use plugin_hooks::adapters::DrilldownDefinition;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Serialize, Deserialize)]
/// struct NavConfig {
///     url: String,
/// }
///
/// # fn main() -> plugin_hooks::domain::Result<()> {
/// let drilldown = DrilldownDefinition::<NavConfig, String>::builder("nav")
///     .order(1)
///     .euiicon("link")
///     .display_name("Go to URL")
///     .execute(|config: NavConfig, clicked: String| async move {
///         println!("{} -> {}", clicked, config.url);
///         Ok(())
///     })
///     .href(|config: NavConfig, _clicked: String| async move { Ok(config.url) })
///     .build()?;
///
/// assert_eq!(drilldown.euiicon(), Some("link"));
/// # Ok(())
/// # }
/// ```
pub struct DrilldownDefinitionBuilder<C, AC> {
    id: String,
    order: i32,
    euiicon: Option<String>,
    display_name: Option<DisplayNameFn>,
    create_config: Option<CreateConfigFn<C>>,
    is_config_valid: Option<ConfigValidFn<C>>,
    execute: Option<ExecuteFn<C, AC>>,
    href: Option<HrefFn<C, AC>>,
}

impl<C, AC> DrilldownDefinitionBuilder<C, AC>
where
    C: Send + 'static,
    AC: Send + 'static,
{
    /// Creates a new builder.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            order: 0,
            euiicon: None,
            display_name: None,
            create_config: None,
            is_config_valid: None,
            execute: None,
            href: None,
        }
    }

    /// Sets the sort key.
    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Sets the icon shown for the factory and its actions.
    pub fn euiicon(mut self, icon: impl Into<String>) -> Self {
        self.euiicon = Some(icon.into());
        self
    }

    /// Sets a fixed display name for the factory.
    pub fn display_name(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.display_name_with(move || name.clone())
    }

    /// Sets a display name resolver for the factory.
    pub fn display_name_with<F>(mut self, f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.display_name = Some(Arc::new(f));
        self
    }

    /// Sets the function producing the initial config of a new action.
    pub fn create_config<F>(mut self, f: F) -> Self
    where
        F: Fn() -> C + Send + Sync + 'static,
    {
        self.create_config = Some(Arc::new(f));
        self
    }

    /// Sets the config validator.
    pub fn is_config_valid<F>(mut self, f: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.is_config_valid = Some(Arc::new(f));
        self
    }

    /// Sets the callback run when an action of this drilldown executes.
    pub fn execute<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(C, AC) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        let execute: ExecuteFn<C, AC> =
            Arc::new(move |config: C, context: AC| -> BoxFuture<'static, Result<()>> {
                Box::pin(f(config, context))
            });
        self.execute = Some(execute);
        self
    }

    /// Sets the callback resolving the link target of an action.
    pub fn href<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(C, AC) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String>> + Send + 'static,
    {
        let href: HrefFn<C, AC> =
            Arc::new(move |config: C, context: AC| -> BoxFuture<'static, Result<String>> {
                Box::pin(f(config, context))
            });
        self.href = Some(href);
        self
    }

    /// Builds the definition.
    ///
    /// # Errors
    ///
    /// Returns `HookError::InvalidDefinition` when the id is empty or no
    /// execute callback was set.
    pub fn build(self) -> Result<DrilldownDefinition<C, AC>> {
        if self.id.is_empty() {
            return Err(HookError::InvalidDefinition {
                message: "drilldown id must not be empty".to_string(),
            });
        }

        let execute = self.execute.ok_or_else(|| HookError::InvalidDefinition {
            message: format!("drilldown '{}' has no execute callback", self.id),
        })?;

        let display_name: DisplayNameFn = match self.display_name {
            Some(f) => f,
            None => {
                let id = self.id.clone();
                Arc::new(move || id.clone())
            }
        };

        Ok(DrilldownDefinition {
            id: self.id,
            order: self.order,
            euiicon: self.euiicon,
            display_name,
            create_config: self.create_config,
            is_config_valid: self.is_config_valid,
            execute,
            href: self.href,
        })
    }
}

/// The action factory made from a drilldown.
///
/// The factory is context-blind: it reports the drilldown icon and is
/// compatible everywhere.
pub struct DrilldownActionFactory<C, AC> {
    drilldown: DrilldownDefinition<C, AC>,
}

impl<C, AC> DrilldownActionFactory<C, AC> {
    /// Adapts a drilldown definition.
    pub fn new(drilldown: DrilldownDefinition<C, AC>) -> Self {
        Self { drilldown }
    }

    fn decode(&self, config: Value) -> Result<C>
    where
        C: DeserializeOwned,
    {
        serde_json::from_value(config).map_err(|e| HookError::InvalidConfig {
            factory_id: self.drilldown.id.clone(),
            source: e,
        })
    }
}

#[async_trait]
impl<C, FC, AC> ActionFactoryDefinition<FC, AC> for DrilldownActionFactory<C, AC>
where
    C: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    FC: Send + Sync + 'static,
    AC: Send + 'static,
{
    fn id(&self) -> &str {
        &self.drilldown.id
    }

    fn order(&self) -> i32 {
        self.drilldown.order
    }

    fn display_name(&self, _context: &FC) -> String {
        (self.drilldown.display_name)()
    }

    fn icon_type(&self, _context: &FC) -> Option<String> {
        self.drilldown.euiicon.clone()
    }

    async fn is_compatible(&self, _context: &FC) -> bool {
        true
    }

    fn create_config(&self) -> Result<Value> {
        let Some(create) = &self.drilldown.create_config else {
            return Ok(Value::Object(Default::default()));
        };

        serde_json::to_value(create()).map_err(|e| HookError::InvalidConfig {
            factory_id: self.drilldown.id.clone(),
            source: e,
        })
    }

    fn is_config_valid(&self, config: &Value) -> bool {
        let Ok(typed) = serde_json::from_value::<C>(config.clone()) else {
            return false;
        };
        self.drilldown
            .is_config_valid
            .as_ref()
            .map_or(true, |valid| valid(&typed))
    }

    fn create(&self, serialized: SerializedAction) -> Result<Box<dyn Action<AC>>> {
        let config = self.decode(serialized.config)?;

        Ok(Box::new(DrilldownAction {
            factory_id: self.drilldown.id.clone(),
            name: serialized.name,
            euiicon: self.drilldown.euiicon.clone(),
            config,
            execute: Arc::clone(&self.drilldown.execute),
            href: self.drilldown.href.clone(),
        }))
    }
}

/// An action created by a [`DrilldownActionFactory`].
pub struct DrilldownAction<C, AC> {
    factory_id: String,
    name: String,
    euiicon: Option<String>,
    config: C,
    execute: ExecuteFn<C, AC>,
    href: Option<HrefFn<C, AC>>,
}

impl<C, AC> DrilldownAction<C, AC> {
    /// The decoded config the action was created with.
    pub fn config(&self) -> &C {
        &self.config
    }
}

#[async_trait]
impl<C, AC> Action<AC> for DrilldownAction<C, AC>
where
    C: Clone + Send + Sync + 'static,
    AC: Send + 'static,
{
    fn id(&self) -> &str {
        ""
    }

    fn action_type(&self) -> &str {
        &self.factory_id
    }

    fn icon_type(&self) -> Option<String> {
        self.euiicon.clone()
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    async fn execute(&self, context: AC) -> Result<()> {
        (self.execute)(self.config.clone(), context).await
    }

    fn supports_href(&self) -> bool {
        self.href.is_some()
    }

    async fn href(&self, context: AC) -> Result<Option<String>> {
        match &self.href {
            Some(href) => href(self.config.clone(), context).await.map(Some),
            None => Ok(None),
        }
    }
}
