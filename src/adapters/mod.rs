// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing port implementations.
//!
//! `drilldown` adapts drilldown definitions into action factory definitions.
//! `in_memory` provides a process-local fleet backing both fleet ports.

pub mod drilldown;
pub mod in_memory;

pub use drilldown::{
    DrilldownAction, DrilldownActionFactory, DrilldownDefinition, DrilldownDefinitionBuilder,
};
pub use in_memory::{AgentRecord, EnrollmentApiKey, InMemoryFleet};
