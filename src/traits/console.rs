//! Console backend trait abstraction.
//!
//! A backend is whatever ends up printing log lines: the tracing bridge in
//! production, a recorder in tests. Backends advertise which methods they
//! support; [`crate::logging::ConsolePolyfill`] picks a fallback for the rest.

use std::fmt;

/// The console methods a backend may implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConsoleMethod {
    /// The basic capability every other method falls back to.
    Log,
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    /// Opens an indented group.
    Group,
    /// Closes the innermost group.
    GroupEnd,
}

impl ConsoleMethod {
    /// Every method, in declaration order.
    pub const ALL: [ConsoleMethod; 8] = [
        ConsoleMethod::Log,
        ConsoleMethod::Trace,
        ConsoleMethod::Debug,
        ConsoleMethod::Info,
        ConsoleMethod::Warn,
        ConsoleMethod::Error,
        ConsoleMethod::Group,
        ConsoleMethod::GroupEnd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleMethod::Log => "log",
            ConsoleMethod::Trace => "trace",
            ConsoleMethod::Debug => "debug",
            ConsoleMethod::Info => "info",
            ConsoleMethod::Warn => "warn",
            ConsoleMethod::Error => "error",
            ConsoleMethod::Group => "group",
            ConsoleMethod::GroupEnd => "groupEnd",
        }
    }
}

impl fmt::Display for ConsoleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for console output targets.
///
/// # Example
///
/// ```ignore
/// use ignite::traits::{ConsoleBackend, ConsoleMethod};
///
/// struct Stdout;
///
/// impl ConsoleBackend for Stdout {
///     fn supports(&self, method: ConsoleMethod) -> bool {
///         method == ConsoleMethod::Log
///     }
///
///     fn write(&self, _method: ConsoleMethod, text: &str, args: &[String]) {
///         println!("{} {}", text, args.join(" "));
///     }
/// }
/// ```
pub trait ConsoleBackend: Send + Sync {
    /// Whether this backend implements `method`.
    fn supports(&self, method: ConsoleMethod) -> bool;

    /// Emit one call. Only invoked with methods for which
    /// [`supports`](Self::supports) returned true.
    ///
    /// For [`ConsoleMethod::Group`] `text` is the group title; for
    /// [`ConsoleMethod::GroupEnd`] it is empty.
    fn write(&self, method: ConsoleMethod, text: &str, args: &[String]);
}
