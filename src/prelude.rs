//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```ignore
//! use ignite::prelude::*;
//! ```
//!
//! This will import:
//! - Message types (Message, MessageKind, MessageStore)
//! - Error reporting (ErrorNormalizer, ReportedError, FetchErrorsExt)
//! - Logging (Logger, LogLevel, LoggerOptionsPatch)
//! - Crate errors (MessagesError, MessagesResult)

// Message types
pub use crate::messages::{Message, MessageKind, MessageList, MessageStore, GENERIC_ERROR_KEY};

// Error reporting
pub use crate::messages::{ErrorNormalizer, FetchErrorsExt, GraphQLErrorResponse, ReportedError};

// Logging
pub use crate::logging::{LogLevel, Logger, LoggerOptionsPatch};

// Crate errors
pub use crate::error::{MessagesError, MessagesResult};

// Seams
pub use crate::traits::{ConsoleBackend, ConsoleMethod, RouteSource};
