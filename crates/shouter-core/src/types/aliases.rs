//! Type aliases for the shared callable and handle types.
//!
//! Listener options are cloned once per subscriber in a batch registration,
//! so every callable is stored behind an `Arc` rather than a `Box`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shouter_core::types::*;
//!
//! let guard: Guard = guard(|| true);
//! let hook: Hook = hook(|| tracing::info!("fired"));
//! ```

use std::sync::Arc;

use serde_json::Value;

use crate::core::subscriber::Subscriber;

// =============================================================================
// HANDLE TYPES
// =============================================================================

/// A shared, thread-safe handle to a registered subscriber.
///
/// Identity is the address of the shared allocation; two clones of the same
/// handle are the same subscriber.
pub type SubscriberHandle = Arc<dyn Subscriber>;

/// Positional event arguments.
pub type Args = [Value];

// =============================================================================
// CALLBACK TYPES
// =============================================================================

/// A zero-argument predicate gating delivery at dispatch time.
pub type Guard = Arc<dyn Fn() -> bool + Send + Sync>;

/// A zero-argument hook run after a handler fires.
pub type Hook = Arc<dyn Fn() + Send + Sync>;

/// A named event handler receiving the published arguments.
pub type EventHandler = Box<dyn Fn(&Args) -> Result<(), crate::HandlerError> + Send + Sync>;

/// Wrap a closure as a [`Guard`].
pub fn guard<F>(f: F) -> Guard
where
    F: Fn() -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap a closure as a [`Hook`].
pub fn hook<F>(f: F) -> Hook
where
    F: Fn() + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap a concrete subscriber as a [`SubscriberHandle`].
pub fn handle<S>(subscriber: S) -> SubscriberHandle
where
    S: Subscriber + 'static,
{
    Arc::new(subscriber)
}

/// Check whether two handles point at the same subscriber.
///
/// Compares data addresses only, so handles created through different
/// unsizing sites still compare equal.
pub fn same_subscriber(a: &SubscriberHandle, b: &SubscriberHandle) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
