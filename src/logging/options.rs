//! Logger configuration.
//!
//! Colorization is process-wide: every [`Logger`](super::Logger) built with
//! [`LoggerConfig::global`] reads the same options, and
//! [`Logger::config`](super::Logger::config) mutates them. Last writer
//! wins. Loggers that need isolation (tests, embedded hosts) can be built on
//! their own [`LoggerConfig`] instead.

use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

/// Environment variable that forces colorization on or off.
pub const COLORIZE_ENV: &str = "IGNITE_LOG_COLORIZE";

/// Environment variable honoured by convention to disable colors.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

static GLOBAL_CONFIG: Lazy<LoggerConfig> =
    Lazy::new(|| LoggerConfig::new(LoggerOptions::from_env()));

/// Logger options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerOptions {
    /// Emit ANSI color markup. When false the markup tokens are stripped.
    pub colorize: bool,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self { colorize: true }
    }
}

impl LoggerOptions {
    /// Options from the process environment.
    ///
    /// `NO_COLOR` (any value) disables colors; `IGNITE_LOG_COLORIZE` set to a
    /// recognized boolean overrides it.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();
        if lookup(NO_COLOR_ENV).is_some() {
            options.colorize = false;
        }
        if let Some(colorize) = lookup(COLORIZE_ENV).as_deref().and_then(parse_bool) {
            options.colorize = colorize;
        }
        options
    }
}

/// A partial update to [`LoggerOptions`]. Unset fields are left alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoggerOptionsPatch {
    pub colorize: Option<bool>,
}

impl LoggerOptionsPatch {
    pub fn colorize(colorize: bool) -> Self {
        Self {
            colorize: Some(colorize),
        }
    }
}

/// Shared reference to a set of logger options.
///
/// Cloning shares the options; use [`LoggerConfig::new`] for an independent
/// set.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    options: Arc<RwLock<LoggerOptions>>,
}

impl LoggerConfig {
    pub fn new(options: LoggerOptions) -> Self {
        Self {
            options: Arc::new(RwLock::new(options)),
        }
    }

    /// The process-wide configuration.
    pub fn global() -> Self {
        GLOBAL_CONFIG.clone()
    }

    /// Current options.
    pub fn options(&self) -> LoggerOptions {
        *self.options.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a partial update.
    pub fn apply(&self, patch: LoggerOptionsPatch) {
        let mut options = self.options.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(colorize) = patch.colorize {
            options.colorize = colorize;
        }
    }

    /// Replace every option.
    pub fn set(&self, options: LoggerOptions) {
        *self.options.write().unwrap_or_else(PoisonError::into_inner) = options;
    }

    /// Whether two handles share the same options.
    pub fn same_as(&self, other: &LoggerConfig) -> bool {
        Arc::ptr_eq(&self.options, &other.options)
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new(LoggerOptions::default())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
