// SPDX-License-Identifier: MIT OR Apache-2.0

//! Agent configuration change handler.
//!
//! Maps configuration lifecycle events onto the fleet services. The handler is
//! only a sequencing policy; the services do the actual work.

use crate::domain::{ConfigAction, ConfigId, HandlerSettings, Result, UnknownActionPolicy};
use crate::ports::{AgentService, EnrollmentApiKeyService};

/// Reacts to agent configuration lifecycle events.
///
/// | event     | calls                                                   |
/// |-----------|---------------------------------------------------------|
/// | `created` | generate an enrollment API key                          |
/// | `updated` | update all agents of the configuration                  |
/// | `deleted` | unenroll all agents, then delete the enrollment API keys |
/// | other     | nothing                                                 |
///
/// Service errors are returned as-is. Nothing is retried, and a failed unenroll
/// stops the `deleted` sequence before the keys are touched.
///
/// # Examples
///
/// ```rust
/// use plugin_hooks::adapters::InMemoryFleet;
/// use plugin_hooks::domain::ConfigId;
/// use plugin_hooks::service::AgentConfigUpdateHandler;
/// use std::sync::Arc;
///
/// struct SavedObjects;
///
/// # fn main() -> plugin_hooks::domain::Result<()> {
/// let fleet = Arc::new(InMemoryFleet::new());
/// let handler = AgentConfigUpdateHandler::new(Arc::clone(&fleet), Arc::clone(&fleet));
/// let cfg = ConfigId::from("cfg-1");
///
/// futures::executor::block_on(handler.handle(&SavedObjects, "created", &cfg))?;
/// assert_eq!(fleet.api_keys_for_config(&cfg)?.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AgentConfigUpdateHandler<K, A> {
    api_keys: K,
    agents: A,
    settings: HandlerSettings,
}

impl<K, A> AgentConfigUpdateHandler<K, A> {
    /// Creates a handler with default settings.
    pub fn new(api_keys: K, agents: A) -> Self {
        Self {
            api_keys,
            agents,
            settings: HandlerSettings::default(),
        }
    }

    /// Replaces the handler settings.
    pub fn with_settings(mut self, settings: HandlerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The active settings.
    pub fn settings(&self) -> &HandlerSettings {
        &self.settings
    }

    /// Handles one configuration event.
    ///
    /// `action` is the event kind as received; see [`ConfigAction`].
    pub async fn handle<S>(
        &self,
        so_client: &S,
        action: impl Into<ConfigAction>,
        config_id: &ConfigId,
    ) -> Result<()>
    where
        S: ?Sized + Sync + 'static,
        K: EnrollmentApiKeyService<S>,
        A: AgentService<S>,
    {
        dispatch(
            so_client,
            &self.api_keys,
            &self.agents,
            &self.settings,
            action.into(),
            config_id,
        )
        .await
    }
}

/// Handles one configuration event with default settings.
///
/// Shorthand for building an [`AgentConfigUpdateHandler`] around borrowed
/// services and calling [`AgentConfigUpdateHandler::handle`] once.
pub async fn agent_config_update_event_handler<S, K, A>(
    so_client: &S,
    api_keys: &K,
    agents: &A,
    action: &str,
    config_id: &ConfigId,
) -> Result<()>
where
    S: ?Sized + Sync + 'static,
    K: EnrollmentApiKeyService<S> + ?Sized,
    A: AgentService<S> + ?Sized,
{
    dispatch(
        so_client,
        api_keys,
        agents,
        &HandlerSettings::default(),
        ConfigAction::from(action),
        config_id,
    )
    .await
}

async fn dispatch<S, K, A>(
    so_client: &S,
    api_keys: &K,
    agents: &A,
    settings: &HandlerSettings,
    action: ConfigAction,
    config_id: &ConfigId,
) -> Result<()>
where
    S: ?Sized + Sync + 'static,
    K: EnrollmentApiKeyService<S> + ?Sized,
    A: AgentService<S> + ?Sized,
{
    tracing::debug!("Handling '{}' for agent config {}", action, config_id);

    match action {
        ConfigAction::Created => {
            api_keys.generate_for_config(so_client, config_id).await?;
        }
        ConfigAction::Updated => {
            agents.update_for_config(so_client, config_id).await?;
        }
        ConfigAction::Deleted => {
            // keys are still needed while agents are being unenrolled
            agents.unenroll_for_config(so_client, config_id).await?;
            api_keys.delete_for_config(so_client, config_id).await?;
        }
        ConfigAction::Other(kind) => match settings.unknown_action {
            UnknownActionPolicy::Ignore => {}
            UnknownActionPolicy::Warn => {
                tracing::warn!(
                    "Ignoring unknown action '{}' for agent config {}",
                    kind,
                    config_id
                );
            }
        },
    }

    Ok(())
}
