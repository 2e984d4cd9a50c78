// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! These traits are the seams of the crate: plugins implement the action
//! traits, and the host implements the fleet service traits that the
//! configuration change handler calls.

pub mod action;
pub mod action_factory;
pub mod agents;
pub mod api_keys;

// Re-export commonly used types
pub use action::Action;
pub use action_factory::ActionFactoryDefinition;
pub use agents::AgentService;
pub use api_keys::EnrollmentApiKeyService;
