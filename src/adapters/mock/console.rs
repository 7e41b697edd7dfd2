//! Recording console backend for testing.
//!
//! Captures every call the console polyfill makes so tests can assert on
//! exact formatted output, and can pretend to support only a subset of
//! methods to exercise the fallback chains.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use crate::traits::{ConsoleBackend, ConsoleMethod};

/// A single captured console call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleCall {
    pub method: ConsoleMethod,
    pub text: String,
    pub args: Vec<String>,
}

/// Recording console backend.
///
/// Clones share the same call log.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use ignite::adapters::mock::RecordingConsole;
/// use ignite::logging::{Logger, LoggerConfig, LoggerOptions};
/// use ignite::traits::ConsoleMethod;
///
/// let console = RecordingConsole::new();
/// let config = LoggerConfig::new(LoggerOptions { colorize: false });
/// let log = Logger::with_console("DEFAULT", config, Arc::new(console.clone()));
///
/// log.error("Something");
/// assert_eq!(console.texts(ConsoleMethod::Error), vec!["DEFAULT [ERROR] | Something"]);
/// ```
#[derive(Debug, Clone)]
pub struct RecordingConsole {
    calls: Arc<Mutex<Vec<ConsoleCall>>>,
    /// `None` means every method is supported.
    capabilities: Option<Arc<HashSet<ConsoleMethod>>>,
}

impl RecordingConsole {
    /// A console supporting every method.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            capabilities: None,
        }
    }

    /// A console supporting only `methods`.
    pub fn with_capabilities(methods: &[ConsoleMethod]) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            capabilities: Some(Arc::new(methods.iter().copied().collect())),
        }
    }

    /// All captured calls, in order.
    pub fn calls(&self) -> Vec<ConsoleCall> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Number of calls that landed on `method`.
    pub fn calls_for(&self, method: ConsoleMethod) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|call| call.method == method)
            .count()
    }

    /// Texts of the calls that landed on `method`, in order.
    pub fn texts(&self, method: ConsoleMethod) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|call| call.method == method)
            .map(|call| call.text.clone())
            .collect()
    }

    /// Forget every captured call.
    pub fn clear(&self) {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Default for RecordingConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleBackend for RecordingConsole {
    fn supports(&self, method: ConsoleMethod) -> bool {
        self.capabilities
            .as_ref()
            .map_or(true, |methods| methods.contains(&method))
    }

    fn write(&self, method: ConsoleMethod, text: &str, args: &[String]) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ConsoleCall {
                method,
                text: text.to_string(),
                args: args.to_vec(),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_calls_in_order() {
        let console = RecordingConsole::new();
        console.write(ConsoleMethod::Info, "first", &[]);
        console.write(ConsoleMethod::Error, "second", &["x".to_string()]);

        let calls = console.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].text, "first");
        assert_eq!(calls[1].method, ConsoleMethod::Error);
        assert_eq!(calls[1].args, vec!["x".to_string()]);
    }

    #[test]
    fn test_clones_share_log() {
        let console = RecordingConsole::new();
        console.clone().write(ConsoleMethod::Log, "shared", &[]);
        assert_eq!(console.texts(ConsoleMethod::Log), vec!["shared"]);

        console.clear();
        assert!(console.calls().is_empty());
    }

    #[test]
    fn test_capabilities() {
        let console = RecordingConsole::with_capabilities(&[ConsoleMethod::Log]);
        assert!(console.supports(ConsoleMethod::Log));
        assert!(!console.supports(ConsoleMethod::Warn));
        assert!(RecordingConsole::new().supports(ConsoleMethod::GroupEnd));
    }
}
