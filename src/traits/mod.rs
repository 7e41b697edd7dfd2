//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`ConsoleBackend`] - Output target behind the logger's console polyfill
//! - [`RouteSource`] - Route and query parameter streams from the host router

pub mod console;
pub mod route;

pub use console::{ConsoleBackend, ConsoleMethod};
pub use route::RouteSource;
