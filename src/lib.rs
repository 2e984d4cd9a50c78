// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin glue for a host application, in hexagonal style.
//!
//! This crate provides two small, independent pieces:
//!
//! - an **action factory registry** plugins use to register the factories
//!   behind configurable UI actions ("drilldowns"), with a convenience adapter
//!   that turns a drilldown definition into a factory;
//! - an **agent configuration change handler** that turns configuration
//!   lifecycle events (`created`, `updated`, `deleted`) into calls on the fleet
//!   services that issue enrollment keys, update agents and unenroll them.
//!
//! # Architecture
//!
//! - **Domain Layer**: errors, identifiers, `SerializedAction`, the
//!   `ActionFactory` wrapper, the registry interface and handler settings
//! - **Ports**: traits at the seams (`ActionFactoryDefinition`, `Action`,
//!   `EnrollmentApiKeyService`, `AgentService`)
//! - **Adapters**: the drilldown adapter and an in-memory fleet
//! - **Service**: the registry implementation and the change handler
//!
//! # Feature Flags
//!
//! - `yaml`: Load handler settings from YAML (default)
//!
//! # Quick Start
//!
//! ```rust
//! use plugin_hooks::prelude::*;
//! use serde_json::Value;
//!
//! # fn main() -> Result<()> {
//! let mut registry = UiActionsServiceEnhancements::<(), String>::new();
//! registry.register_drilldown(
//!     DrilldownDefinition::<Value, String>::builder("open-dashboard")
//!         .order(1)
//!         .euiicon("dashboardApp")
//!         .execute(|_config: Value, _clicked: String| async { Ok(()) })
//!         .build()?,
//! )?;
//!
//! assert!(registry.has_action_factory("open-dashboard"));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{DrilldownDefinition, InMemoryFleet};
    pub use crate::domain::{
        ActionFactory, ActionFactoryRegistry, ConfigAction, ConfigId, HandlerSettings, HookError,
        Result, SerializedAction, UnknownActionPolicy,
    };
    pub use crate::ports::{Action, ActionFactoryDefinition, AgentService, EnrollmentApiKeyService};
    pub use crate::service::{
        agent_config_update_event_handler, AgentConfigUpdateHandler, UiActionsServiceEnhancements,
    };
}
