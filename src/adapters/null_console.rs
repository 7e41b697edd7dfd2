//! Console backend with no capabilities.

use crate::traits::{ConsoleBackend, ConsoleMethod};

/// A backend that supports nothing; every call through the polyfill is a
/// no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullConsole;

impl ConsoleBackend for NullConsole {
    fn supports(&self, _method: ConsoleMethod) -> bool {
        false
    }

    fn write(&self, _method: ConsoleMethod, _text: &str, _args: &[String]) {}
}
