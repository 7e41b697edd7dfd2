//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`RecordingConsole`] - Console backend that records every call
//! - [`MockRoute`] - Activated route with injectable navigation

pub mod console;
pub mod route;

pub use console::{ConsoleCall, RecordingConsole};
pub use route::MockRoute;
