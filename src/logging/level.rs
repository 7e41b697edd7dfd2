//! Log levels and their presentation.

use std::fmt;

use crate::traits::ConsoleMethod;

/// Severity of a log line.
///
/// `Success` is an info-level line with its own label and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Success,
    Warn,
    Error,
}

impl LogLevel {
    /// Uppercase label used in formatted lines.
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Success => "SUCCESS",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// ANSI foreground color code.
    pub fn color_code(&self) -> u8 {
        match self {
            LogLevel::Trace => 90,   // gray
            LogLevel::Debug => 39,   // default foreground
            LogLevel::Info => 34,    // blue
            LogLevel::Success => 32, // green
            LogLevel::Warn => 33,    // brown/yellow
            LogLevel::Error => 31,   // red
        }
    }

    /// Console method this level is written with.
    pub fn console_method(&self) -> ConsoleMethod {
        match self {
            LogLevel::Trace => ConsoleMethod::Trace,
            LogLevel::Debug => ConsoleMethod::Debug,
            LogLevel::Info | LogLevel::Success => ConsoleMethod::Info,
            LogLevel::Warn => ConsoleMethod::Warn,
            LogLevel::Error => ConsoleMethod::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_written_as_info() {
        assert_eq!(LogLevel::Success.console_method(), ConsoleMethod::Info);
        assert_eq!(LogLevel::Info.console_method(), ConsoleMethod::Info);
        assert_eq!(LogLevel::Success.label(), "SUCCESS");
    }

    #[test]
    fn test_levels_have_distinct_colors() {
        let levels = [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Success,
            LogLevel::Warn,
            LogLevel::Error,
        ];
        let mut codes: Vec<u8> = levels.iter().map(|l| l.color_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), levels.len());
    }
}
