// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fakes for the integration tests.

use async_trait::async_trait;
use plugin_hooks::domain::{ConfigId, HookError, Result};
use plugin_hooks::ports::{AgentService, EnrollmentApiKeyService};
use std::sync::{Arc, Mutex};

/// Stand-in for the host's saved-objects client.
#[allow(dead_code)]
#[derive(Debug)]
pub struct FakeSavedObjects {
    pub namespace: String,
}

#[allow(dead_code)]
impl FakeSavedObjects {
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
        }
    }
}

/// A call made against the fleet fakes, with the namespace of the client it got.
#[allow(dead_code)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    GenerateKey(String, ConfigId),
    DeleteKeys(String, ConfigId),
    UpdateAgents(String, ConfigId),
    Unenroll(String, ConfigId),
}

/// Records every fleet call and fails the operations it is told to fail.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingFleet {
    calls: Mutex<Vec<Call>>,
    failing: Mutex<Vec<&'static str>>,
}

#[allow(dead_code)]
impl RecordingFleet {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Makes the named operation (`generate`, `delete`, `update`, `unenroll`) fail.
    pub fn fail_on(&self, operation: &'static str) {
        self.failing.lock().unwrap().push(operation);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(&operation) {
            return Err(HookError::upstream("recording-fleet", format!("{} failed", operation)));
        }
        Ok(())
    }
}

#[async_trait]
impl EnrollmentApiKeyService<FakeSavedObjects> for RecordingFleet {
    async fn generate_for_config(&self, so: &FakeSavedObjects, config_id: &ConfigId) -> Result<()> {
        self.record(
            "generate",
            Call::GenerateKey(so.namespace.clone(), config_id.clone()),
        )
    }

    async fn delete_for_config(&self, so: &FakeSavedObjects, config_id: &ConfigId) -> Result<()> {
        self.record(
            "delete",
            Call::DeleteKeys(so.namespace.clone(), config_id.clone()),
        )
    }
}

#[async_trait]
impl AgentService<FakeSavedObjects> for RecordingFleet {
    async fn update_for_config(&self, so: &FakeSavedObjects, config_id: &ConfigId) -> Result<()> {
        self.record(
            "update",
            Call::UpdateAgents(so.namespace.clone(), config_id.clone()),
        )
    }

    async fn unenroll_for_config(&self, so: &FakeSavedObjects, config_id: &ConfigId) -> Result<()> {
        self.record(
            "unenroll",
            Call::Unenroll(so.namespace.clone(), config_id.clone()),
        )
    }
}

/// Installs a test-writer subscriber once so `tracing` output shows up on failure.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
