//! Error handling for Shouter
//!
//! Provides the error types for every layer of the registry:
//! - Registration errors (listener validation, singleton setup)
//! - Handler errors (subscriber invocation outcomes)
//! - Configuration errors (loading store settings)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Subscriber handler error type
///
/// Returned by [`Subscriber::call`](crate::Subscriber::call). Dispatch never
/// propagates these: an unsupported event is skipped silently, anything else
/// is logged and the next listener is notified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// The subscriber has no handler for this event
    #[error("Event '{event}' is not supported by this subscriber")]
    Unsupported {
        /// The event name that was requested.
        event: String,
    },

    /// The handler rejected the published arguments
    #[error("Invalid arguments for '{event}': {reason}")]
    InvalidArguments {
        /// The event name that was requested.
        event: String,
        /// Why the arguments were rejected.
        reason: String,
    },

    /// The handler ran and failed
    #[error("Handler failed: {message}")]
    Failed {
        /// The failure message.
        message: String,
    },
}

impl HandlerError {
    /// Create an unsupported-event error
    pub fn unsupported(event: impl Into<String>) -> Self {
        HandlerError::Unsupported {
            event: event.into(),
        }
    }

    /// Create an invalid-arguments error
    pub fn invalid_arguments(event: impl Into<String>, reason: impl Into<String>) -> Self {
        HandlerError::InvalidArguments {
            event: event.into(),
            reason: reason.into(),
        }
    }

    /// Create a generic failure
    pub fn failed(message: impl Into<String>) -> Self {
        HandlerError::Failed {
            message: message.into(),
        }
    }

    /// Check if the subscriber simply does not handle the event
    pub fn is_unsupported(&self) -> bool {
        matches!(self, HandlerError::Unsupported { .. })
    }
}

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main error type for Shouter
///
/// A unified error type used by every fallible public API.
#[derive(Error, Debug)]
pub enum ShouterError {
    /// A listener was built without a scope
    #[error("You must supply a scope for running the events")]
    ScopeMissing,

    /// The global store was already created
    #[error("Store is a singleton and has already been initialized")]
    AlreadyInitialized,

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ShouterError {
    /// Check if this is a missing-scope validation error
    pub fn is_scope_missing(&self) -> bool {
        matches!(self, ShouterError::ScopeMissing)
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, ShouterError::Config(_))
    }
}

/// Result type using ShouterError
pub type Result<T> = std::result::Result<T, ShouterError>;
