// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the agent configuration change handler.

mod common;

use common::{Call, FakeSavedObjects, RecordingFleet};
use plugin_hooks::prelude::*;
use std::sync::Arc;

fn handler(
    fleet: &Arc<RecordingFleet>,
) -> AgentConfigUpdateHandler<Arc<RecordingFleet>, Arc<RecordingFleet>> {
    AgentConfigUpdateHandler::new(Arc::clone(fleet), Arc::clone(fleet))
}

#[tokio::test]
async fn test_created_generates_exactly_one_key() {
    common::init_tracing();
    let fleet = RecordingFleet::new();
    let so = FakeSavedObjects::new("default");

    handler(&fleet)
        .handle(&so, "created", &ConfigId::from("cfg-1"))
        .await
        .unwrap();

    assert_eq!(
        fleet.calls(),
        vec![Call::GenerateKey("default".to_string(), ConfigId::from("cfg-1"))]
    );
}

#[tokio::test]
async fn test_updated_updates_agents_only() {
    let fleet = RecordingFleet::new();
    let so = FakeSavedObjects::new("default");

    handler(&fleet)
        .handle(&so, ConfigAction::Updated, &ConfigId::from("cfg-1"))
        .await
        .unwrap();

    assert_eq!(
        fleet.calls(),
        vec![Call::UpdateAgents("default".to_string(), ConfigId::from("cfg-1"))]
    );
}

#[tokio::test]
async fn test_deleted_unenrolls_before_deleting_keys() {
    let fleet = RecordingFleet::new();
    let so = FakeSavedObjects::new("space-a");

    handler(&fleet)
        .handle(&so, "deleted", &ConfigId::from("cfg-1"))
        .await
        .unwrap();

    assert_eq!(
        fleet.calls(),
        vec![
            Call::Unenroll("space-a".to_string(), ConfigId::from("cfg-1")),
            Call::DeleteKeys("space-a".to_string(), ConfigId::from("cfg-1")),
        ]
    );
}

#[tokio::test]
async fn test_failed_unenroll_stops_before_key_deletion() {
    let fleet = RecordingFleet::new();
    fleet.fail_on("unenroll");
    let so = FakeSavedObjects::new("default");

    let err = handler(&fleet)
        .handle(&so, "deleted", &ConfigId::from("cfg-1"))
        .await
        .unwrap_err();

    match err {
        HookError::Upstream { service, message, .. } => {
            assert_eq!(service, "recording-fleet");
            assert_eq!(message, "unenroll failed");
        }
        other => panic!("expected upstream error, got {}", other),
    }
    assert_eq!(
        fleet.calls(),
        vec![Call::Unenroll("default".to_string(), ConfigId::from("cfg-1"))]
    );
}

#[tokio::test]
async fn test_failed_key_deletion_is_returned_after_unenroll() {
    let fleet = RecordingFleet::new();
    fleet.fail_on("delete");
    let so = FakeSavedObjects::new("default");

    let result = handler(&fleet)
        .handle(&so, "deleted", &ConfigId::from("cfg-1"))
        .await;

    assert!(result.unwrap_err().is_upstream());
    assert_eq!(fleet.calls().len(), 2);
}

#[tokio::test]
async fn test_failed_generation_propagates() {
    let fleet = RecordingFleet::new();
    fleet.fail_on("generate");
    let so = FakeSavedObjects::new("default");

    let result = handler(&fleet)
        .handle(&so, "created", &ConfigId::from("cfg-1"))
        .await;

    assert!(result.unwrap_err().is_upstream());
}

#[tokio::test]
async fn test_unrecognized_kind_makes_no_calls() {
    let fleet = RecordingFleet::new();
    let so = FakeSavedObjects::new("default");

    for kind in ["archived", "CREATED", "", "delete"] {
        handler(&fleet)
            .handle(&so, kind, &ConfigId::from("cfg-1"))
            .await
            .unwrap();
    }

    assert!(fleet.calls().is_empty());
}

#[tokio::test]
async fn test_unrecognized_kind_with_warn_policy_still_succeeds() {
    common::init_tracing();
    let fleet = RecordingFleet::new();
    let so = FakeSavedObjects::new("default");
    let settings = HandlerSettings::default().with_unknown_action(UnknownActionPolicy::Warn);

    handler(&fleet)
        .with_settings(settings)
        .handle(&so, "archived", &ConfigId::from("cfg-1"))
        .await
        .unwrap();

    assert!(fleet.calls().is_empty());
}

#[tokio::test]
async fn test_free_function_matches_handler() {
    let fleet = RecordingFleet::new();
    let so = FakeSavedObjects::new("default");
    let cfg = ConfigId::from("cfg-2");

    agent_config_update_event_handler(&so, fleet.as_ref(), fleet.as_ref(), "created", &cfg)
        .await
        .unwrap();
    agent_config_update_event_handler(&so, fleet.as_ref(), fleet.as_ref(), "bogus", &cfg)
        .await
        .unwrap();

    assert_eq!(
        fleet.calls(),
        vec![Call::GenerateKey("default".to_string(), cfg)]
    );
}

#[tokio::test]
async fn test_in_memory_fleet_lifecycle() {
    let fleet = Arc::new(InMemoryFleet::new());
    let handler = AgentConfigUpdateHandler::new(Arc::clone(&fleet), Arc::clone(&fleet));
    let so = FakeSavedObjects::new("default");
    let cfg = ConfigId::from("cfg-3");

    handler.handle(&so, "created", &cfg).await.unwrap();
    fleet.enroll_agent("agent-a", cfg.clone()).unwrap();
    fleet.enroll_agent("agent-b", cfg.clone()).unwrap();

    handler.handle(&so, "updated", &cfg).await.unwrap();
    assert!(fleet
        .agents_for_config(&cfg)
        .unwrap()
        .iter()
        .all(|agent| agent.config_revision == 1 && agent.active));

    handler.handle(&so, "deleted", &cfg).await.unwrap();
    assert!(fleet
        .agents_for_config(&cfg)
        .unwrap()
        .iter()
        .all(|agent| !agent.active));
    assert!(fleet.api_keys_for_config(&cfg).unwrap().is_empty());
}

#[tokio::test]
async fn test_handler_shared_across_tasks() {
    let fleet = RecordingFleet::new();
    let handler = Arc::new(handler(&fleet));

    let mut tasks = Vec::new();
    for i in 0..4 {
        let handler = Arc::clone(&handler);
        tasks.push(tokio::spawn(async move {
            let so = FakeSavedObjects::new("default");
            handler
                .handle(&so, "updated", &ConfigId::from(format!("cfg-{}", i)))
                .await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(fleet.calls().len(), 4);
}
