//! Listener store implementation.
//!
//! Provides the [`Store`] struct and the process-wide instance.

use parking_lot::Mutex;
use std::sync::{Arc, OnceLock};

use crate::config::{DispatchPolicy, StoreConfig};
use crate::core::listener::{Listener, ListenerId, ListenerOptions};
use crate::error::{Result, ShouterError};
use crate::types::{Args, SubscriberHandle};

/// Ordered registry of active listeners
///
/// There is exactly one store per process, reached through [`store`]. The
/// constructor is private to the crate so no second instance can be made.
pub struct Store {
    /// Active listeners in insertion order
    listeners: Mutex<Vec<Arc<Listener>>>,
    /// Configuration
    config: StoreConfig,
}

impl Store {
    pub(crate) fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub(crate) fn with_config(config: StoreConfig) -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
            config,
        }
    }

    /// Register every subscriber in `subscribers` under `options`
    ///
    /// The batch is validated before anything is appended, so on error the
    /// store is left exactly as it was.
    pub fn register<I>(&self, subscribers: I, options: ListenerOptions) -> Result<()>
    where
        I: IntoIterator<Item = SubscriberHandle>,
    {
        let batch = subscribers
            .into_iter()
            .map(|subscriber| Listener::new(subscriber, options.clone()).map(Arc::new))
            .collect::<Result<Vec<_>>>()
            .inspect_err(|e| tracing::debug!("Registration rejected: {}", e))?;

        let mut listeners = self.listeners.lock();
        for listener in &batch {
            tracing::debug!("{} registered for scope '{}'", listener.id(), listener.scope());
        }
        listeners.extend(batch);
        Ok(())
    }

    /// Remove every listener wrapping any of `subscribers`, in all scopes
    ///
    /// Returns the number of listeners removed. Unknown handles are ignored.
    pub fn unregister(&self, subscribers: &[SubscriberHandle]) -> usize {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|listener| !subscribers.iter().any(|s| listener.belongs_to(s)));
        let removed = before - listeners.len();
        if removed > 0 {
            tracing::debug!("Unregistered {} listener(s)", removed);
        }
        removed
    }

    /// Drop every listener
    pub fn clear(&self) {
        let dropped = std::mem::take(&mut *self.listeners.lock());
        tracing::debug!("Store cleared ({} listener(s) dropped)", dropped.len());
    }

    /// Deliver `event` with `args` to every listener registered for `scope`
    ///
    /// Listeners fire in insertion order. A listener is skipped when its
    /// subscriber does not handle `event`, when its guard returns false, or
    /// when its handler fails; the remaining listeners are still notified.
    /// After a successful delivery the listener's own callback runs, or
    /// `on_fired` when the listener has none. Single-fire listeners are then
    /// removed.
    pub fn notify(&self, scope: &str, event: &str, args: &Args, on_fired: Option<&dyn Fn()>) {
        match self.config.dispatch {
            DispatchPolicy::Snapshot => self.notify_snapshot(scope, event, args, on_fired),
            DispatchPolicy::Serialized => self.notify_serialized(scope, event, args, on_fired),
        }
    }

    fn notify_snapshot(
        &self,
        scope: &str,
        event: &str,
        args: &Args,
        on_fired: Option<&dyn Fn()>,
    ) {
        let matches = {
            let listeners = self.listeners.lock();
            if listeners.is_empty() {
                return;
            }
            matching(&listeners, scope)
        };

        for listener in matches {
            if deliver(&listener, event, args, on_fired) && listener.is_single_fire() {
                self.remove(listener.id());
            }
        }
    }

    fn notify_serialized(
        &self,
        scope: &str,
        event: &str,
        args: &Args,
        on_fired: Option<&dyn Fn()>,
    ) {
        let mut listeners = self.listeners.lock();
        if listeners.is_empty() {
            return;
        }

        for listener in matching(&listeners, scope) {
            if deliver(&listener, event, args, on_fired) && listener.is_single_fire() {
                listeners.retain(|l| l.id() != listener.id());
                tracing::debug!("{} fired once and was removed", listener.id());
            }
        }
    }

    /// Remove exactly one registration
    fn remove(&self, id: ListenerId) {
        let mut listeners = self.listeners.lock();
        if let Some(pos) = listeners.iter().position(|l| l.id() == id) {
            listeners.remove(pos);
            tracing::debug!("{} fired once and was removed", id);
        }
    }

    /// Snapshot of the active listeners in insertion order
    pub fn listeners(&self) -> Vec<Arc<Listener>> {
        self.listeners.lock().clone()
    }

    /// Number of active listeners
    pub fn len(&self) -> usize {
        self.listeners.lock().len()
    }

    /// Whether no listeners are registered
    pub fn is_empty(&self) -> bool {
        self.listeners.lock().is_empty()
    }

    /// Whether `subscriber` has at least one listener
    pub fn contains(&self, subscriber: &SubscriberHandle) -> bool {
        self.listeners
            .lock()
            .iter()
            .any(|listener| listener.belongs_to(subscriber))
    }

    /// Get the current configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

fn matching(listeners: &[Arc<Listener>], scope: &str) -> Vec<Arc<Listener>> {
    listeners
        .iter()
        .filter(|listener| listener.matches_scope(scope))
        .cloned()
        .collect()
}

/// Run one listener: responds-to check, guard, handler, hook.
///
/// Returns true when the handler completed successfully.
fn deliver(listener: &Listener, event: &str, args: &Args, on_fired: Option<&dyn Fn()>) -> bool {
    let subscriber = listener.subscriber();
    if !subscriber.responds_to(event) {
        tracing::trace!("{} does not handle '{}'", listener.id(), event);
        return false;
    }
    if !listener.guard_passes() {
        tracing::trace!("{} guard rejected '{}'", listener.id(), event);
        return false;
    }
    let Some(claim) = listener.try_claim() else {
        tracing::trace!("{} already delivered", listener.id());
        return false;
    };

    // The claim is released on drop, including when the handler panics
    if let Err(e) = subscriber.call(event, args) {
        if e.is_unsupported() {
            tracing::trace!("{} does not handle '{}'", listener.id(), event);
        } else {
            tracing::warn!("{} failed on '{}': {}", listener.id(), event, e);
        }
        return false;
    }

    claim.commit();
    tracing::trace!("{} handled '{}'", listener.id(), event);
    let hook = match listener.callback() {
        Some(callback) => Some(&**callback as &dyn Fn()),
        None => on_fired,
    };
    if let Some(hook) = hook {
        hook();
    }
    true
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("listeners", &self.len())
            .field("config", &self.config)
            .finish()
    }
}

/// Global store instance
static STORE: OnceLock<Store> = OnceLock::new();

/// Get or initialize the global store
///
/// This is the primary way to access the registry throughout the application.
pub fn store() -> &'static Store {
    STORE.get_or_init(Store::new)
}

/// Initialize the global store with custom configuration
///
/// Must be called before any call to [`store`]. Fails with
/// [`ShouterError::AlreadyInitialized`] if the store already exists.
pub fn init_store(config: StoreConfig) -> Result<&'static Store> {
    STORE
        .set(Store::with_config(config))
        .map_err(|_| ShouterError::AlreadyInitialized)?;
    Ok(store())
}
