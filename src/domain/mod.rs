// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module holds the errors, identifiers and value types shared by the
//! registry and the configuration change handler, plus the registry interface.

pub mod action_factory;
pub mod config_action;
pub mod config_id;
pub mod errors;
pub mod registry;
pub mod serialized_action;
pub mod settings;

// Re-export commonly used types
pub use action_factory::ActionFactory;
pub use config_action::ConfigAction;
pub use config_id::ConfigId;
pub use errors::{HookError, Result};
pub use registry::ActionFactoryRegistry;
pub use serialized_action::SerializedAction;
pub use settings::{HandlerSettings, UnknownActionPolicy};
