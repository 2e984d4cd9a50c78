// SPDX-License-Identifier: MIT OR Apache-2.0

//! Enrollment API key service trait definition.

use crate::domain::{ConfigId, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Issues and revokes the enrollment API keys agents use to join a configuration.
///
/// `S` is the host's saved-objects client. This crate never looks inside it; it
/// is only passed through to the service.
///
/// Failures should be reported as [`HookError::Upstream`](crate::domain::HookError::Upstream).
#[async_trait]
pub trait EnrollmentApiKeyService<S>: Send + Sync
where
    S: ?Sized + Sync + 'static,
{
    /// Generates a new enrollment API key scoped to the configuration.
    async fn generate_for_config(&self, so_client: &S, config_id: &ConfigId) -> Result<()>;

    /// Deletes every enrollment API key of the configuration.
    async fn delete_for_config(&self, so_client: &S, config_id: &ConfigId) -> Result<()>;
}

#[async_trait]
impl<S, T> EnrollmentApiKeyService<S> for Arc<T>
where
    S: ?Sized + Sync + 'static,
    T: EnrollmentApiKeyService<S> + ?Sized,
{
    async fn generate_for_config(&self, so_client: &S, config_id: &ConfigId) -> Result<()> {
        (**self).generate_for_config(so_client, config_id).await
    }

    async fn delete_for_config(&self, so_client: &S, config_id: &ConfigId) -> Result<()> {
        (**self).delete_for_config(so_client, config_id).await
    }
}
