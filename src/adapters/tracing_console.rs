//! Console backend that forwards to `tracing`.
//!
//! Each console method maps to the matching tracing level (`log` and
//! `group` titles are info). Group nesting is rendered as indentation.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::traits::{ConsoleBackend, ConsoleMethod};

/// Indentation added per open group.
const GROUP_INDENT: &str = "  ";

/// Console backend emitting `tracing` events under target `ignite::console`.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use ignite::adapters::TracingConsole;
/// use ignite::logging::{Logger, LoggerConfig};
///
/// let log = Logger::with_console("API", LoggerConfig::global(), Arc::new(TracingConsole::new()));
/// log.info("Request sent");
/// ```
#[derive(Debug, Default)]
pub struct TracingConsole {
    depth: AtomicUsize,
}

impl TracingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of groups currently open.
    pub fn depth(&self) -> usize {
        self.depth.load(Ordering::SeqCst)
    }

    fn line(&self, text: &str, args: &[String]) -> String {
        let mut line = GROUP_INDENT.repeat(self.depth());
        line.push_str(text);
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl ConsoleBackend for TracingConsole {
    fn supports(&self, _method: ConsoleMethod) -> bool {
        true
    }

    fn write(&self, method: ConsoleMethod, text: &str, args: &[String]) {
        match method {
            ConsoleMethod::Group => {
                let line = self.line(text, args);
                tracing::info!(target: "ignite::console", "{}", line);
                self.depth.fetch_add(1, Ordering::SeqCst);
            }
            ConsoleMethod::GroupEnd => {
                // Unbalanced ends are ignored rather than wrapping.
                let _ = self
                    .depth
                    .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |d| d.checked_sub(1));
            }
            ConsoleMethod::Trace => {
                tracing::trace!(target: "ignite::console", "{}", self.line(text, args))
            }
            ConsoleMethod::Debug => {
                tracing::debug!(target: "ignite::console", "{}", self.line(text, args))
            }
            ConsoleMethod::Log | ConsoleMethod::Info => {
                tracing::info!(target: "ignite::console", "{}", self.line(text, args))
            }
            ConsoleMethod::Warn => {
                tracing::warn!(target: "ignite::console", "{}", self.line(text, args))
            }
            ConsoleMethod::Error => {
                tracing::error!(target: "ignite::console", "{}", self.line(text, args))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_everything() {
        let console = TracingConsole::new();
        assert!(ConsoleMethod::ALL.iter().all(|m| console.supports(*m)));
    }

    #[test]
    fn test_group_depth() {
        let console = TracingConsole::new();
        console.write(ConsoleMethod::Group, "outer", &[]);
        console.write(ConsoleMethod::Group, "inner", &[]);
        assert_eq!(console.depth(), 2);
        assert_eq!(console.line("x", &[]), "    x");

        console.write(ConsoleMethod::GroupEnd, "", &[]);
        console.write(ConsoleMethod::GroupEnd, "", &[]);
        console.write(ConsoleMethod::GroupEnd, "", &[]);
        assert_eq!(console.depth(), 0);
    }

    #[test]
    fn test_line_appends_args() {
        let console = TracingConsole::new();
        let line = console.line("Failed", &["42".to_string(), "\"x\"".to_string()]);
        assert_eq!(line, "Failed 42 \"x\"");
    }
}
