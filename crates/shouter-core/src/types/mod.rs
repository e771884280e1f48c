//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: Type aliases for subscriber handles, guards, hooks and handlers.

pub mod aliases;

pub use aliases::*;
