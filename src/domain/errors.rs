// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the plugin hooks crate.
//!
//! This module defines the errors raised by the action factory registry, the
//! drilldown adapter, the configuration change handler and the settings loader.
//! All errors use `thiserror` for proper error handling and conversion.

use thiserror::Error;

/// The main error type for plugin hook operations.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use plugin_hooks::domain::errors::HookError;
///
/// fn lookup(id: &str) -> Result<(), HookError> {
///     Err(HookError::NotFound { id: id.to_string() })
/// }
///
/// assert!(lookup("nav").is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HookError {
    /// An action factory with the same id is already registered.
    #[error("ActionFactory [actionFactory.id = {id}] already registered.")]
    DuplicateRegistration {
        /// The id that was registered twice
        id: String,
    },

    /// No action factory is registered under the requested id.
    #[error("Action factory [actionFactoryId = {id}] does not exist.")]
    NotFound {
        /// The id that was looked up
        id: String,
    },

    /// A factory or drilldown definition is missing a required part.
    #[error("Invalid definition: {message}")]
    InvalidDefinition {
        /// What is wrong with the definition
        message: String,
    },

    /// A serialized action config could not be decoded for its factory.
    #[error("Invalid config for action factory '{factory_id}': {source}")]
    InvalidConfig {
        /// The factory that rejected the config
        factory_id: String,
        /// The underlying decoding error
        #[source]
        source: serde_json::Error,
    },

    /// An external service called by the configuration change handler failed.
    #[error("Upstream service '{service}' error: {message}")]
    Upstream {
        /// The name of the failing service
        service: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Handler settings could not be loaded or parsed.
    #[error("Failed to load settings: {message}")]
    Settings {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading settings.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HookError {
    /// Creates an `Upstream` error without an underlying cause.
    pub fn upstream(service: impl Into<String>, message: impl Into<String>) -> Self {
        HookError::Upstream {
            service: service.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Creates an `Upstream` error wrapping the error returned by a service client.
    pub fn upstream_with_source<E>(
        service: impl Into<String>,
        message: impl Into<String>,
        err: E,
    ) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        HookError::Upstream {
            service: service.into(),
            message: message.into(),
            source: Some(Box::new(err)),
        }
    }

    /// Returns `true` for errors raised by an external service.
    pub fn is_upstream(&self) -> bool {
        matches!(self, HookError::Upstream { .. })
    }
}

/// A specialized Result type for plugin hook operations.
pub type Result<T> = std::result::Result<T, HookError>;
