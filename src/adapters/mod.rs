//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`TracingConsole`] - Console backend forwarding to `tracing` (default)
//! - [`StderrConsole`] - Console backend writing directly to stderr
//! - [`NullConsole`] - Console backend with no capabilities
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::RecordingConsole`] - Records console calls, configurable capabilities
//! - [`mock::MockRoute`] - Route with injectable parameter changes

pub mod mock;
pub mod null_console;
pub mod stderr_console;
pub mod tracing_console;

pub use mock::{MockRoute, RecordingConsole};
pub use null_console::NullConsole;
pub use stderr_console::StderrConsole;
pub use tracing_console::TracingConsole;
