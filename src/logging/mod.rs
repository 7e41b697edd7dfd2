//! Namespaced console logging.
//!
//! [`Logger`] formats `NAMESPACE [LEVEL] | message` lines, optionally
//! colorized, and hands them to a [`ConsolePolyfill`] which picks the best
//! method the backend supports. The default backend forwards to `tracing`,
//! so [`init_tracing`] decides where lines finally end up.

pub mod console;
pub mod format;
pub mod level;
pub mod logger;
pub mod options;

pub use console::{fallback_chain, ConsolePolyfill};
pub use format::{strip_markup, FormattedMessage, Style};
pub use level::LogLevel;
pub use logger::{GroupGuard, Logger, DEFAULT_NAMESPACE};
pub use options::{LoggerConfig, LoggerOptions, LoggerOptionsPatch, COLORIZE_ENV, NO_COLOR_ENV};

use tracing_subscriber::EnvFilter;

use crate::error::{MessagesError, MessagesResult};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Install a global `tracing` subscriber writing to stderr.
///
/// Honors `RUST_LOG`. Fails if a subscriber is already installed.
pub fn init_tracing() -> MessagesResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| MessagesError::Subscriber(e.to_string()))
}
