//! Listener registration record
//!
//! A [`Listener`] binds a subscriber handle to a scope plus the optional
//! behaviour modifiers from [`ListenerOptions`]. It is validated once at
//! construction and never changes afterwards.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

use crate::error::{Result, ShouterError};
use crate::types::{same_subscriber, Guard, Hook, SubscriberHandle};

/// Broadcast channel identifier
///
/// Only listeners whose scope equals the published scope are notified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scope(String);

impl Scope {
    /// Create a scope from any string-like value
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The scope name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name is empty or only whitespace
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for Scope {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Scope {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Scope {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier of a single registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(Uuid);

impl ListenerId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({})", &self.0.to_string()[..8])
    }
}

/// Registration options
///
/// Defaults: no scope (must be set before registering), `single = false`,
/// no guard, no callback.
#[derive(Clone, Default)]
pub struct ListenerOptions {
    /// Scope the listener belongs to. Required.
    pub scope: Option<Scope>,
    /// Remove the listener after its first successful notification.
    pub single: bool,
    /// Predicate evaluated at dispatch time; delivery is skipped when false.
    pub guard: Option<Guard>,
    /// Hook run after the handler fires. Takes precedence over a per-publish hook.
    pub callback: Option<Hook>,
}

impl ListenerOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options for `scope` with every other field at its default
    pub fn scoped(scope: impl Into<Scope>) -> Self {
        Self::new().scope(scope)
    }

    /// Set the scope
    pub fn scope(mut self, scope: impl Into<Scope>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Set the single-fire flag
    pub fn single(mut self, single: bool) -> Self {
        self.single = single;
        self
    }

    /// Set the dispatch guard
    pub fn guard<F>(mut self, guard: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.guard = Some(crate::types::guard(guard));
        self
    }

    /// Set the post-delivery callback
    pub fn callback<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.callback = Some(crate::types::hook(callback));
        self
    }
}

impl fmt::Debug for ListenerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerOptions")
            .field("scope", &self.scope)
            .field("single", &self.single)
            .field("guard", &self.guard.is_some())
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

/// A registered (subscriber, scope, modifiers) tuple
pub struct Listener {
    id: ListenerId,
    subscriber: SubscriberHandle,
    scope: Scope,
    options: ListenerOptions,
    /// Set while a notify owns delivery of a single-fire listener.
    claimed: AtomicBool,
}

impl Listener {
    /// Build a listener, validating that a non-blank scope is present
    pub fn new(subscriber: SubscriberHandle, options: ListenerOptions) -> Result<Self> {
        let scope = match &options.scope {
            Some(scope) if !scope.is_blank() => scope.clone(),
            _ => return Err(ShouterError::ScopeMissing),
        };

        Ok(Self {
            id: ListenerId::new(),
            subscriber,
            scope,
            options,
            claimed: AtomicBool::new(false),
        })
    }

    /// Registration identifier
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// The wrapped subscriber handle
    pub fn subscriber(&self) -> &SubscriberHandle {
        &self.subscriber
    }

    /// The options this listener was registered with
    pub fn options(&self) -> &ListenerOptions {
        &self.options
    }

    /// The validated scope
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Exact scope equality
    pub fn matches_scope(&self, scope: &str) -> bool {
        self.scope.as_str() == scope
    }

    /// Whether the listener is removed after its first delivery
    pub fn is_single_fire(&self) -> bool {
        self.options.single
    }

    /// Whether this listener wraps `subscriber`
    pub fn belongs_to(&self, subscriber: &SubscriberHandle) -> bool {
        same_subscriber(&self.subscriber, subscriber)
    }

    /// Evaluate the guard; a listener without one always passes
    pub(crate) fn guard_passes(&self) -> bool {
        self.options.guard.as_ref().is_none_or(|guard| guard())
    }

    pub(crate) fn callback(&self) -> Option<&Hook> {
        self.options.callback.as_ref()
    }

    /// Take exclusive delivery rights
    ///
    /// Always succeeds for multi-fire listeners. A single-fire listener has at
    /// most one outstanding claim; it is released when the returned [`Claim`]
    /// drops without [`Claim::commit`].
    pub(crate) fn try_claim(&self) -> Option<Claim<'_>> {
        if self.is_single_fire()
            && self
                .claimed
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_err()
        {
            return None;
        }
        Some(Claim {
            listener: self,
            committed: false,
        })
    }
}

/// Delivery rights over a listener for the duration of one handler call
pub(crate) struct Claim<'a> {
    listener: &'a Listener,
    committed: bool,
}

impl Claim<'_> {
    /// Keep the claim once the listener has been delivered
    pub(crate) fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for Claim<'_> {
    fn drop(&mut self) {
        if !self.committed && self.listener.is_single_fire() {
            self.listener.claimed.store(false, Ordering::Release);
        }
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("id", &self.id)
            .field("scope", &self.scope)
            .field("options", &self.options)
            .finish()
    }
}
