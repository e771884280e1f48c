//! # Shouter Core
//!
//! Listener registry and dispatch engine for Shouter.
//! Provides the listener record, the subscriber capability trait,
//! and the thread-safe process-wide store.

pub mod config;
pub mod core;
pub mod error;
pub mod store;
pub mod types;

pub use crate::core::{HandlerMap, Listener, ListenerId, ListenerOptions, Scope, Subscriber};

pub use config::{DispatchPolicy, StoreConfig};

pub use error::{ConfigError, HandlerError, Result, ShouterError};

pub use store::{init_store, store, Store};

pub use types::{guard, handle, hook, same_subscriber, Args, Guard, Hook, SubscriberHandle};
