//! Error handling for the messages crate.
//!
//! Two kinds of failure flow through this crate and they are kept apart:
//!
//! - **Reported errors** are failures of the *caller's* operations (a GraphQL
//!   batch, a thrown string, an IO error). They are data, modelled by
//!   [`crate::messages::ReportedError`], and end up as user-facing messages.
//! - **Crate errors** ([`MessagesError`]) are failures of this crate's own
//!   operations, such as wiring navigation auto-clear without a runtime.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | NoRuntime | `MessageStore::init_navigation_auto_clear` |
//! | AutoClearActive | `MessageStore::init_navigation_auto_clear` |
//! | Subscriber | `logging::init_tracing` |
//! | InvalidJson | `ReportedError::from_json_str` |
//! | Io | the demo binary's stdin reader |

mod messages_error;
mod result;

pub use messages_error::MessagesError;
pub use result::MessagesResult;
