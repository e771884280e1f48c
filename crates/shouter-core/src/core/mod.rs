//! Core registry types: listeners and the subscriber capability.

pub mod listener;
pub mod subscriber;

pub use listener::{Listener, ListenerId, ListenerOptions, Scope};
pub use subscriber::{HandlerMap, Subscriber};
