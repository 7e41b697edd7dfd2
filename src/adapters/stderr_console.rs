//! Console backend writing straight to standard error.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::traits::{ConsoleBackend, ConsoleMethod};

/// Writes every call as one line on stderr, indented by group depth.
///
/// Useful where no tracing subscriber is installed and colorized output
/// should reach the terminal untouched.
#[derive(Debug, Default)]
pub struct StderrConsole {
    depth: AtomicUsize,
}

impl StderrConsole {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConsoleBackend for StderrConsole {
    fn supports(&self, _method: ConsoleMethod) -> bool {
        true
    }

    fn write(&self, method: ConsoleMethod, text: &str, args: &[String]) {
        if method == ConsoleMethod::GroupEnd {
            let _ = self
                .depth
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |d| d.checked_sub(1));
            return;
        }

        let indent = "  ".repeat(self.depth.load(Ordering::SeqCst));
        let mut stderr = std::io::stderr().lock();
        // A closed stderr has nowhere to report to.
        let _ = if args.is_empty() {
            writeln!(stderr, "{}{}", indent, text)
        } else {
            writeln!(stderr, "{}{} {}", indent, text, args.join(" "))
        };

        if method == ConsoleMethod::Group {
            self.depth.fetch_add(1, Ordering::SeqCst);
        }
    }
}
