// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the registry and the configuration change handler.

pub mod config_update;
pub mod enhancements;

// Re-export commonly used types
pub use config_update::{agent_config_update_event_handler, AgentConfigUpdateHandler};
pub use enhancements::{ActionFactoryMap, UiActionsServiceEnhancements};
