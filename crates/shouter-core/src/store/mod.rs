//! # Listener Store Module
//!
//! The process-wide registry of listeners and its dispatch engine.
//!
//! ## Overview
//!
//! - Subscribers register under a scope, optionally single-fire, guarded or
//!   with a post-delivery callback
//! - Publishers notify a scope with a named event and positional arguments
//! - Every operation is synchronous and thread-safe
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shouter_core::{store, handle, HandlerMap, ListenerOptions};
//! use serde_json::json;
//!
//! let subscriber = handle(HandlerMap::new().on("on_change", |args| {
//!     println!("changed: {:?}", args);
//!     Ok(())
//! }));
//!
//! store().register([subscriber.clone()], ListenerOptions::scoped("main"))?;
//! store().notify("main", "on_change", &[json!(42)], None);
//! store().unregister(&[subscriber]);
//! ```

mod registry;

pub use registry::*;
