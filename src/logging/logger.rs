//! Namespaced logger.
//!
//! A [`Logger`] pairs an immutable namespace with a shared
//! [`LoggerConfig`] and a console. [`Logger::named`] derives a handle for a
//! different namespace that keeps the same configuration and console.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use super::console::ConsolePolyfill;
use super::format::FormattedMessage;
use super::level::LogLevel;
use super::options::{LoggerConfig, LoggerOptions, LoggerOptionsPatch};
use crate::adapters::TracingConsole;
use crate::traits::ConsoleBackend;

/// Namespace used when none is given.
pub const DEFAULT_NAMESPACE: &str = "DEFAULT";

/// A namespaced logging sink.
///
/// # Example
///
/// ```ignore
/// use ignite::logging::Logger;
///
/// let log = Logger::default().named("CHECKOUT");
/// log.info("Cart loaded").warn("Coupon expired");
///
/// log.group("Submitting order", || {
///     log.debug("Validating address");
/// });
/// ```
#[derive(Clone)]
pub struct Logger {
    namespace: Arc<str>,
    config: LoggerConfig,
    console: ConsolePolyfill,
}

impl Logger {
    /// A logger on the global configuration writing through `tracing`.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self::with_console(
            namespace,
            LoggerConfig::global(),
            Arc::new(TracingConsole::new()),
        )
    }

    /// Alias of [`Logger::new`].
    pub fn for_namespace(namespace: impl Into<String>) -> Self {
        Self::new(namespace)
    }

    /// A logger with explicit configuration and console backend.
    pub fn with_console(
        namespace: impl Into<String>,
        config: LoggerConfig,
        backend: Arc<dyn ConsoleBackend>,
    ) -> Self {
        Self {
            namespace: Arc::from(namespace.into()),
            config,
            console: ConsolePolyfill::new(backend),
        }
    }

    /// Update the process-wide options. Affects every logger built on
    /// [`LoggerConfig::global`].
    pub fn config(patch: LoggerOptionsPatch) {
        LoggerConfig::global().apply(patch);
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// A handle for `namespace` sharing this logger's configuration and
    /// console.
    pub fn named(&self, namespace: impl Into<String>) -> Logger {
        Self {
            namespace: Arc::from(namespace.into()),
            config: self.config.clone(),
            console: self.console.clone(),
        }
    }

    /// The options currently in effect for this logger.
    pub fn options(&self) -> LoggerOptions {
        self.config.options()
    }

    pub fn trace(&self, message: &str) -> &Self {
        self.log(LogLevel::Trace, message, &[])
    }

    pub fn debug(&self, message: &str) -> &Self {
        self.log(LogLevel::Debug, message, &[])
    }

    pub fn info(&self, message: &str) -> &Self {
        self.log(LogLevel::Info, message, &[])
    }

    pub fn success(&self, message: &str) -> &Self {
        self.log(LogLevel::Success, message, &[])
    }

    pub fn warn(&self, message: &str) -> &Self {
        self.log(LogLevel::Warn, message, &[])
    }

    pub fn error(&self, message: &str) -> &Self {
        self.log(LogLevel::Error, message, &[])
    }

    /// Log `message` at `level`. Extra arguments are rendered with `{:?}`
    /// and passed to the console after the text.
    pub fn log(&self, level: LogLevel, message: &str, args: &[&dyn fmt::Debug]) -> &Self {
        let formatted = FormattedMessage::for_level(&self.namespace, level, message);
        let text = formatted.render(self.config.options().colorize);
        let args: Vec<String> = args.iter().map(|arg| format!("{:?}", arg)).collect();
        self.console.call(level.console_method(), &text, &args);
        self
    }

    /// Run `action` inside a console group.
    ///
    /// The group is closed on every exit path, including a panic, which
    /// then continues to unwind.
    pub fn group<F, R>(&self, title: &str, action: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _group = self.enter_group(title);
        action()
    }

    /// Await the future produced by `action` inside a console group.
    ///
    /// The group is closed when the future completes, panics or is dropped.
    pub async fn group_async<F, Fut, T>(&self, title: &str, action: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let _group = self.enter_group(title);
        action().await
    }

    /// Open a group that closes when the returned guard is dropped.
    pub fn enter_group(&self, title: &str) -> GroupGuard<'_> {
        self.group_start(title);
        GroupGuard { logger: self }
    }

    pub fn group_start(&self, title: &str) -> &Self {
        self.console.group(title);
        self
    }

    pub fn group_end(&self) -> &Self {
        self.console.group_end();
        self
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("namespace", &self.namespace)
            .field("options", &self.config.options())
            .field("console", &self.console)
            .finish()
    }
}

/// Closes a console group when dropped.
#[must_use = "the group closes as soon as the guard is dropped"]
pub struct GroupGuard<'a> {
    logger: &'a Logger,
}

impl Drop for GroupGuard<'_> {
    fn drop(&mut self) {
        self.logger.group_end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::RecordingConsole;
    use crate::logging::options::LoggerOptions;
    use crate::traits::ConsoleMethod;

    fn plain_logger(console: &RecordingConsole) -> Logger {
        Logger::with_console(
            DEFAULT_NAMESPACE,
            LoggerConfig::new(LoggerOptions { colorize: false }),
            Arc::new(console.clone()),
        )
    }

    #[test]
    fn test_default_namespace() {
        let console = RecordingConsole::new();
        assert_eq!(plain_logger(&console).namespace(), "DEFAULT");
    }

    #[test]
    fn test_named_sets_namespace() {
        let console = RecordingConsole::new();
        let logger = plain_logger(&console).named("MY-LOGGER");
        assert_eq!(logger.namespace(), "MY-LOGGER");
    }

    #[test]
    fn test_named_keeps_config_and_console() {
        let console = RecordingConsole::new();
        let logger = plain_logger(&console);
        let named = logger.named("CHILD");

        named.info("Hello");
        assert!(named.config.same_as(&logger.config));
        assert_eq!(console.texts(ConsoleMethod::Info), vec!["CHILD [INFO] | Hello"]);
    }

    #[test]
    fn test_level_methods() {
        let console = RecordingConsole::new();
        let logger = plain_logger(&console);

        logger.trace("Something");
        logger.debug("Something");
        logger.info("Something");
        logger.success("Something");
        logger.warn("Something");
        logger.error("Something");

        assert_eq!(console.texts(ConsoleMethod::Trace), vec!["DEFAULT [TRACE] | Something"]);
        assert_eq!(console.texts(ConsoleMethod::Debug), vec!["DEFAULT [DEBUG] | Something"]);
        assert_eq!(
            console.texts(ConsoleMethod::Info),
            vec!["DEFAULT [INFO] | Something", "DEFAULT [SUCCESS] | Something"]
        );
        assert_eq!(console.texts(ConsoleMethod::Warn), vec!["DEFAULT [WARN] | Something"]);
        assert_eq!(console.texts(ConsoleMethod::Error), vec!["DEFAULT [ERROR] | Something"]);
    }

    #[test]
    fn test_methods_chain() {
        let console = RecordingConsole::new();
        plain_logger(&console).info("one").warn("two").error("three");
        assert_eq!(console.calls().len(), 3);
    }

    #[test]
    fn test_extra_args_are_debug_rendered() {
        let console = RecordingConsole::new();
        let logger = plain_logger(&console);

        logger.log(LogLevel::Error, "Failed", &[&42, &"detail"]);

        let calls = console.calls();
        assert_eq!(calls[0].text, "DEFAULT [ERROR] | Failed");
        assert_eq!(calls[0].args, vec!["42".to_string(), "\"detail\"".to_string()]);
    }

    #[test]
    fn test_colorize_follows_config() {
        let console = RecordingConsole::new();
        let config = LoggerConfig::new(LoggerOptions { colorize: true });
        let logger = Logger::with_console("NS", config.clone(), Arc::new(console.clone()));

        logger.error("Boom");
        config.apply(LoggerOptionsPatch::colorize(false));
        logger.error("Boom");

        assert_eq!(
            console.texts(ConsoleMethod::Error),
            vec![
                "\x1b[1;31mNS [ERROR] | \x1b[0;31mBoom\x1b[0m".to_string(),
                "NS [ERROR] | Boom".to_string(),
            ]
        );
    }

    #[test]
    fn test_group_wraps_action() {
        let console = RecordingConsole::new();
        let logger = plain_logger(&console);

        let result = logger.group("My group", || {
            logger.info("inside");
            7
        });

        assert_eq!(result, 7);
        let methods: Vec<ConsoleMethod> = console.calls().iter().map(|c| c.method).collect();
        assert_eq!(
            methods,
            vec![ConsoleMethod::Group, ConsoleMethod::Info, ConsoleMethod::GroupEnd]
        );
        assert_eq!(console.texts(ConsoleMethod::Group), vec!["My group"]);
    }

    #[test]
    fn test_group_ends_when_action_fails() {
        let console = RecordingConsole::new();
        let logger = plain_logger(&console);

        let result: Result<(), String> = logger.group("Foo", || Err("Nope".to_string()));

        assert_eq!(result, Err("Nope".to_string()));
        assert_eq!(console.calls_for(ConsoleMethod::Group), 1);
        assert_eq!(console.calls_for(ConsoleMethod::GroupEnd), 1);
    }

    #[test]
    fn test_group_ends_when_action_panics() {
        let console = RecordingConsole::new();
        let logger = plain_logger(&console);

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger.group("Foo", || panic!("Nope"));
        }));

        assert!(outcome.is_err());
        assert_eq!(console.calls_for(ConsoleMethod::Group), 1);
        assert_eq!(console.calls_for(ConsoleMethod::GroupEnd), 1);
    }

    #[tokio::test]
    async fn test_group_async_wraps_action() {
        let console = RecordingConsole::new();
        let logger = plain_logger(&console);

        let value = logger
            .group_async("My group", || async {
                tokio::task::yield_now().await;
                "done"
            })
            .await;

        assert_eq!(value, "done");
        assert_eq!(console.texts(ConsoleMethod::Group), vec!["My group"]);
        assert_eq!(console.calls_for(ConsoleMethod::GroupEnd), 1);
    }

    #[tokio::test]
    async fn test_group_async_ends_when_action_fails() {
        let console = RecordingConsole::new();
        let logger = plain_logger(&console);

        let result: Result<(), &str> = logger.group_async("Foo", || async { Err("Nope") }).await;

        assert_eq!(result, Err("Nope"));
        assert_eq!(console.calls_for(ConsoleMethod::GroupEnd), 1);
    }

    #[test]
    fn test_dropped_group_future_still_ends_group() {
        let console = RecordingConsole::new();
        let logger = plain_logger(&console);

        let mut fut = Box::pin(logger.group_async("Pending", || std::future::pending::<()>()));
        let waker = futures::task::noop_waker();
        let mut cx = std::task::Context::from_waker(&waker);
        assert!(fut.as_mut().poll(&mut cx).is_pending());
        drop(fut);

        assert_eq!(console.calls_for(ConsoleMethod::Group), 1);
        assert_eq!(console.calls_for(ConsoleMethod::GroupEnd), 1);
    }

    #[test]
    fn test_enter_group_guard() {
        let console = RecordingConsole::new();
        let logger = plain_logger(&console);

        {
            let _group = logger.enter_group("Scoped");
            assert_eq!(console.calls_for(ConsoleMethod::GroupEnd), 0);
        }

        assert_eq!(console.calls_for(ConsoleMethod::GroupEnd), 1);
    }
}
