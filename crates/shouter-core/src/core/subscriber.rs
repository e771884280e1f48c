//! Subscriber capability interface
//!
//! A subscriber is anything that can be asked whether it handles a named
//! event and then be invoked with positional arguments. The registry never
//! looks past this interface.

use std::collections::HashMap;
use std::fmt;

use crate::error::HandlerError;
use crate::types::{Args, EventHandler};

/// Capability trait for objects that receive published events
///
/// Implement this trait directly for types with a fixed set of events, or use
/// [`HandlerMap`] to assemble one from closures.
pub trait Subscriber: Send + Sync {
    /// Whether this subscriber has a handler for `event`
    fn responds_to(&self, event: &str) -> bool;

    /// Invoke the handler for `event` with `args`
    ///
    /// Returning [`HandlerError::Unsupported`] is equivalent to answering
    /// `false` from [`responds_to`](Subscriber::responds_to).
    fn call(&self, event: &str, args: &Args) -> Result<(), HandlerError>;
}

/// A subscriber built from one closure per event name
///
/// # Example
/// ```rust,ignore
/// let subscriber = HandlerMap::new()
///     .on("on_change", |_| Ok(()))
///     .on("on_move", |args| {
///         tracing::info!("moved to {:?}", args);
///         Ok(())
///     });
/// ```
#[derive(Default)]
pub struct HandlerMap {
    handlers: HashMap<String, EventHandler>,
}

impl HandlerMap {
    /// Create an empty handler map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the handler for `event`
    pub fn on<F>(mut self, event: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Args) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        self.handlers.insert(event.into(), Box::new(handler));
        self
    }

    /// Number of events this map handles
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Subscriber for HandlerMap {
    fn responds_to(&self, event: &str) -> bool {
        self.handlers.contains_key(event)
    }

    fn call(&self, event: &str, args: &Args) -> Result<(), HandlerError> {
        match self.handlers.get(event) {
            Some(handler) => handler(args),
            None => Err(HandlerError::unsupported(event)),
        }
    }
}

impl fmt::Debug for HandlerMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut events: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        events.sort_unstable();
        f.debug_struct("HandlerMap").field("events", &events).finish()
    }
}
