//! Console polyfill.
//!
//! Normalizes logging across backends that implement only part of the
//! console surface. Each method resolves to the first supported entry of its
//! fallback chain; with nothing supported the call is a no-op.

use std::fmt;
use std::sync::Arc;

use crate::traits::{ConsoleBackend, ConsoleMethod};

/// Fallback chain for `method`, most specific first.
pub fn fallback_chain(method: ConsoleMethod) -> &'static [ConsoleMethod] {
    match method {
        ConsoleMethod::Log => &[ConsoleMethod::Log],
        ConsoleMethod::Trace => &[ConsoleMethod::Trace, ConsoleMethod::Log],
        ConsoleMethod::Debug => &[ConsoleMethod::Debug, ConsoleMethod::Log],
        ConsoleMethod::Info => &[ConsoleMethod::Info, ConsoleMethod::Log],
        ConsoleMethod::Warn => &[ConsoleMethod::Warn, ConsoleMethod::Error, ConsoleMethod::Log],
        ConsoleMethod::Error => &[ConsoleMethod::Error, ConsoleMethod::Log],
        ConsoleMethod::Group => &[ConsoleMethod::Group],
        ConsoleMethod::GroupEnd => &[ConsoleMethod::GroupEnd],
    }
}

/// Capability-aware wrapper around a [`ConsoleBackend`].
#[derive(Clone)]
pub struct ConsolePolyfill {
    backend: Arc<dyn ConsoleBackend>,
}

impl ConsolePolyfill {
    pub fn new(backend: Arc<dyn ConsoleBackend>) -> Self {
        Self { backend }
    }

    /// The method a call to `requested` ends up on, if any.
    pub fn resolve(&self, requested: ConsoleMethod) -> Option<ConsoleMethod> {
        fallback_chain(requested)
            .iter()
            .copied()
            .find(|method| self.backend.supports(*method))
    }

    /// Write through the fallback chain of `requested`.
    pub fn call(&self, requested: ConsoleMethod, text: &str, args: &[String]) {
        if let Some(method) = self.resolve(requested) {
            self.backend.write(method, text, args);
        }
    }

    pub fn log(&self, text: &str, args: &[String]) {
        self.call(ConsoleMethod::Log, text, args);
    }

    pub fn trace(&self, text: &str, args: &[String]) {
        self.call(ConsoleMethod::Trace, text, args);
    }

    pub fn debug(&self, text: &str, args: &[String]) {
        self.call(ConsoleMethod::Debug, text, args);
    }

    pub fn info(&self, text: &str, args: &[String]) {
        self.call(ConsoleMethod::Info, text, args);
    }

    pub fn warn(&self, text: &str, args: &[String]) {
        self.call(ConsoleMethod::Warn, text, args);
    }

    pub fn error(&self, text: &str, args: &[String]) {
        self.call(ConsoleMethod::Error, text, args);
    }

    pub fn group(&self, title: &str) {
        self.call(ConsoleMethod::Group, title, &[]);
    }

    pub fn group_end(&self) {
        self.call(ConsoleMethod::GroupEnd, "", &[]);
    }
}

impl fmt::Debug for ConsolePolyfill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let supported: Vec<&str> = ConsoleMethod::ALL
            .iter()
            .filter(|method| self.backend.supports(**method))
            .map(|method| method.as_str())
            .collect();
        f.debug_struct("ConsolePolyfill")
            .field("supported", &supported)
            .finish()
    }
}
