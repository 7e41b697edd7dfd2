//! Ignite messages - user-facing error reporting and namespaced logging
//!
//! This library exposes modules for use in integration tests and by the
//! `ignite-messages` binary.

pub mod adapters;
pub mod error;
pub mod logging;
pub mod messages;
pub mod prelude;
pub mod traits;
