//! Common test utilities for integration tests.
//!
//! This module provides reusable fixtures and helper functions for
//! integration testing the message store, the normalizer and the logger.
//!
//! # Example
//!
//! ```ignore
//! use common::TestHarness;
//!
//! let harness = TestHarness::new();
//! harness.normalizer.report_errors("I dun goofed");
//! assert_eq!(harness.texts(), vec!["I dun goofed"]);
//! ```

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use ignite::logging::{Logger, LoggerConfig, LoggerOptions, DEFAULT_NAMESPACE};
use ignite::messages::{ErrorNormalizer, MessageStore};

/// First syntax error fixture, as produced by the data layer.
#[allow(dead_code)]
pub const SYNTAX_ERROR_1: &str = r#"Variable "$residentialAddress" got invalid value {"country":{"code":"USA"},"line1":"Kentucky 1231","subdivision":{"code":"KY"}}. In field "city": Expected "String!", found null."#;

/// Second syntax error fixture.
#[allow(dead_code)]
pub const SYNTAX_ERROR_2: &str = r#"Variable "$mailingAddress" got invalid value {"country":{"code":"USA"},"line1":"Kentucky 1231","subdivision":{"code":"KY"}}. In field "city": Expected "String!", found null."#;

/// A logger with its own uncolored configuration, recording every call.
#[allow(dead_code)]
pub fn plain_logger(console: &RecordingConsole) -> Logger {
    Logger::with_console(
        DEFAULT_NAMESPACE,
        LoggerConfig::new(LoggerOptions { colorize: false }),
        Arc::new(console.clone()),
    )
}

/// A store, a normalizer reporting into it and the console it logs to.
#[allow(dead_code)]
pub struct TestHarness {
    pub store: MessageStore,
    pub normalizer: ErrorNormalizer,
    pub console: RecordingConsole,
}

#[allow(dead_code)]
impl TestHarness {
    pub fn new() -> Self {
        let console = RecordingConsole::new();
        let store = MessageStore::new();
        let normalizer = ErrorNormalizer::new(store.clone(), &plain_logger(&console));
        Self {
            store,
            normalizer,
            console,
        }
    }

    /// Texts of the current messages, in order.
    pub fn texts(&self) -> Vec<String> {
        self.store
            .snapshot()
            .iter()
            .map(|message| message.text().to_string())
            .collect()
    }
}

