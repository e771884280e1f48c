//! # Shouter
//!
//! An in-process publish/subscribe registry:
//! - Subscribers register interest in named scopes
//! - Publishers broadcast named events with positional arguments
//! - Single-fire, guarded and callback-carrying listeners
//! - Thread-safe, synchronous, same-process delivery
//!
//! ## Architecture
//!
//! 1. **shouter-core** - Listener, subscriber capability, store and dispatch
//! 2. **shouter** - Free-function façade over the global store
//!
//! ## Example
//!
//! ```rust,ignore
//! use shouter::{handle, publish, subscribe, HandlerMap, ListenerOptions};
//!
//! let listener = handle(HandlerMap::new().on("on_change", |_| Ok(())));
//! subscribe(listener, ListenerOptions::scoped("main"))?;
//! publish!("main", "on_change");
//! ```

use std::sync::Arc;

pub use serde_json;

pub use shouter_core::{
    guard, handle, hook, init_store, same_subscriber, store, Args, ConfigError, DispatchPolicy,
    Guard, HandlerError, HandlerMap, Hook, Listener, ListenerId, ListenerOptions, Result, Scope,
    ShouterError, Store, StoreConfig, Subscriber, SubscriberHandle,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Subscribe one subscriber under `options`
///
/// Fails with [`ShouterError::ScopeMissing`] when no scope is set.
pub fn subscribe(subscriber: SubscriberHandle, options: ListenerOptions) -> Result<()> {
    store().register([subscriber], options)
}

/// Subscribe several subscribers under the same `options`
///
/// Either every subscriber is registered or none is.
pub fn subscribe_all<I>(subscribers: I, options: ListenerOptions) -> Result<()>
where
    I: IntoIterator<Item = SubscriberHandle>,
{
    store().register(subscribers, options)
}

/// Remove every registration of `subscribers`, in all scopes
pub fn unsubscribe(subscribers: &[SubscriberHandle]) {
    store().unregister(subscribers);
}

/// Publish `event` with `args` to every listener in `scope`
pub fn publish(scope: impl AsRef<str>, event: &str, args: &Args) {
    store().notify(scope.as_ref(), event, args, None);
}

/// Publish and run `on_fired` after each delivery to a listener without its own callback
pub fn publish_with<F>(scope: impl AsRef<str>, event: &str, args: &Args, on_fired: F)
where
    F: Fn(),
{
    store().notify(scope.as_ref(), event, args, Some(&on_fired));
}

/// Remove every listener
pub fn clear() {
    store().clear();
}

/// Alias for [`clear`]
pub fn clear_listeners() {
    clear();
}

/// Snapshot of the registered listeners in insertion order
pub fn listeners() -> Vec<Arc<Listener>> {
    store().listeners()
}

/// Publish an event, converting each argument with `serde_json::json!`
///
/// ```rust,ignore
/// publish!("main", "on_change_with_args", "first", 2);
/// ```
#[macro_export]
macro_rules! publish {
    ($scope:expr, $event:expr $(, $arg:expr)* $(,)?) => {
        $crate::publish($scope, $event, &[$($crate::serde_json::json!($arg)),*])
    };
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
