// SPDX-License-Identifier: MIT OR Apache-2.0

//! Agent service trait definition.

use crate::domain::{ConfigId, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Bulk operations on the agents enrolled in a configuration.
///
/// `S` is the host's saved-objects client, passed through untouched.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use plugin_hooks::domain::{ConfigId, Result};
/// use plugin_hooks::ports::AgentService;
///
/// struct SavedObjects;
/// struct NoAgents;
///
/// #[async_trait]
/// impl AgentService<SavedObjects> for NoAgents {
///     async fn update_for_config(&self, _so: &SavedObjects, _id: &ConfigId) -> Result<()> {
///         Ok(())
///     }
///
///     async fn unenroll_for_config(&self, _so: &SavedObjects, _id: &ConfigId) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait AgentService<S>: Send + Sync
where
    S: ?Sized + Sync + 'static,
{
    /// Reconciles every agent of the configuration with its current revision.
    async fn update_for_config(&self, so_client: &S, config_id: &ConfigId) -> Result<()>;

    /// Unenrolls every agent of the configuration.
    async fn unenroll_for_config(&self, so_client: &S, config_id: &ConfigId) -> Result<()>;
}

#[async_trait]
impl<S, T> AgentService<S> for Arc<T>
where
    S: ?Sized + Sync + 'static,
    T: AgentService<S> + ?Sized,
{
    async fn update_for_config(&self, so_client: &S, config_id: &ConfigId) -> Result<()> {
        (**self).update_for_config(so_client, config_id).await
    }

    async fn unenroll_for_config(&self, so_client: &S, config_id: &ConfigId) -> Result<()> {
        (**self).unenroll_for_config(so_client, config_id).await
    }
}
