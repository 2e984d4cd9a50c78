// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory fleet adapter.
//!
//! `InMemoryFleet` implements both fleet ports against process-local state. It
//! is meant for embedding the handler in tools and tests where no real fleet
//! backend is available. Key ids are sequential and carry no secret material.

use crate::domain::{ConfigId, HookError, Result};
use crate::ports::{AgentService, EnrollmentApiKeyService};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

const SERVICE_NAME: &str = "in-memory-fleet";

/// An enrollment API key record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrollmentApiKey {
    /// Key id
    pub id: String,
    /// Configuration the key enrolls into
    pub config_id: ConfigId,
}

/// An enrolled agent record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentRecord {
    /// Agent id
    pub id: String,
    /// Configuration the agent is enrolled in
    pub config_id: ConfigId,
    /// Last configuration revision pushed to the agent
    pub config_revision: u64,
    /// `false` once the agent has been unenrolled
    pub active: bool,
}

#[derive(Debug, Default)]
struct FleetState {
    agents: Vec<AgentRecord>,
    api_keys: Vec<EnrollmentApiKey>,
    revisions: HashMap<ConfigId, u64>,
    next_key: u64,
}

/// Process-local implementation of [`EnrollmentApiKeyService`] and [`AgentService`].
///
/// The saved-objects handle passed by the handler is ignored.
///
/// # Examples
///
/// ```rust
/// use plugin_hooks::adapters::InMemoryFleet;
/// use plugin_hooks::domain::ConfigId;
///
/// # fn main() -> plugin_hooks::domain::Result<()> {
/// let fleet = InMemoryFleet::new();
/// fleet.enroll_agent("agent-1", "cfg-1")?;
/// assert_eq!(fleet.agents_for_config(&ConfigId::from("cfg-1"))?.len(), 1);
/// # Ok(())
/// # }
/// ```
///
/// Every method fails with `HookError::Upstream` once the state lock is
/// poisoned.
#[derive(Debug, Default)]
pub struct InMemoryFleet {
    state: Mutex<FleetState>,
}

impl InMemoryFleet {
    /// Creates an empty fleet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enrolls an agent into a configuration.
    pub fn enroll_agent(
        &self,
        agent_id: impl Into<String>,
        config_id: impl Into<ConfigId>,
    ) -> Result<()> {
        let mut state = self.state()?;
        let config_id = config_id.into();
        let config_revision = state.revisions.get(&config_id).copied().unwrap_or(0);
        state.agents.push(AgentRecord {
            id: agent_id.into(),
            config_id,
            config_revision,
            active: true,
        });
        Ok(())
    }

    /// Returns every agent record of the configuration, active or not.
    pub fn agents_for_config(&self, config_id: &ConfigId) -> Result<Vec<AgentRecord>> {
        let state = self.state()?;
        Ok(state
            .agents
            .iter()
            .filter(|agent| &agent.config_id == config_id)
            .cloned()
            .collect())
    }

    /// Returns the enrollment API keys of the configuration.
    pub fn api_keys_for_config(&self, config_id: &ConfigId) -> Result<Vec<EnrollmentApiKey>> {
        let state = self.state()?;
        Ok(state
            .api_keys
            .iter()
            .filter(|key| &key.config_id == config_id)
            .cloned()
            .collect())
    }

    fn state(&self) -> Result<MutexGuard<'_, FleetState>> {
        self.state
            .lock()
            .map_err(|_| HookError::upstream(SERVICE_NAME, "fleet state lock poisoned"))
    }
}

#[async_trait]
impl<S> EnrollmentApiKeyService<S> for InMemoryFleet
where
    S: ?Sized + Sync + 'static,
{
    async fn generate_for_config(&self, _so_client: &S, config_id: &ConfigId) -> Result<()> {
        let mut state = self.state()?;
        state.next_key += 1;
        let key = EnrollmentApiKey {
            id: format!("{}-key-{}", config_id, state.next_key),
            config_id: config_id.clone(),
        };
        tracing::info!("Generated enrollment API key {} for config {}", key.id, config_id);
        state.api_keys.push(key);
        Ok(())
    }

    async fn delete_for_config(&self, _so_client: &S, config_id: &ConfigId) -> Result<()> {
        let mut state = self.state()?;
        let before = state.api_keys.len();
        state.api_keys.retain(|key| &key.config_id != config_id);
        tracing::info!(
            "Deleted {} enrollment API keys for config {}",
            before - state.api_keys.len(),
            config_id
        );
        Ok(())
    }
}

#[async_trait]
impl<S> AgentService<S> for InMemoryFleet
where
    S: ?Sized + Sync + 'static,
{
    async fn update_for_config(&self, _so_client: &S, config_id: &ConfigId) -> Result<()> {
        let mut state = self.state()?;
        let revision = {
            let entry = state.revisions.entry(config_id.clone()).or_insert(0);
            *entry += 1;
            *entry
        };

        let mut updated = 0;
        for agent in state
            .agents
            .iter_mut()
            .filter(|agent| agent.active && &agent.config_id == config_id)
        {
            agent.config_revision = revision;
            updated += 1;
        }

        tracing::info!(
            "Moved {} agents of config {} to revision {}",
            updated,
            config_id,
            revision
        );
        Ok(())
    }

    async fn unenroll_for_config(&self, _so_client: &S, config_id: &ConfigId) -> Result<()> {
        let mut state = self.state()?;
        let mut unenrolled = 0;
        for agent in state
            .agents
            .iter_mut()
            .filter(|agent| agent.active && &agent.config_id == config_id)
        {
            agent.active = false;
            unenrolled += 1;
        }

        tracing::info!("Unenrolled {} agents from config {}", unenrolled, config_id);
        Ok(())
    }
}
