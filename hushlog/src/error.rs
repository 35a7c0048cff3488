//! Error type for adapter creation and handle substitution.
//!
//! Rule evaluation never fails; only the operations that touch the adapter
//! registry or a [`LoggerSlot`](crate::LoggerSlot) return these errors.

use thiserror::Error;

use crate::logger::HandleType;

/// Boxed error returned by adapter factories.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no adapter registered for logger type {handle_type} (registered: [{}])", .registered.join(", "))]
    NoMatchingAdapter {
        handle_type: HandleType,
        registered: Vec<String>,
    },

    #[error("failed to create adapter for logger type {handle_type}")]
    AdapterConstructionFailed {
        handle_type: HandleType,
        #[source]
        source: BoxError,
    },

    #[error("slot no longer holds the adapter: expected {expected}, found {found}")]
    RestoreTargetMismatch {
        expected: HandleType,
        found: HandleType,
    },

    #[error("adapter expects a {expected} handle, got {found}")]
    UnexpectedNativeType {
        expected: HandleType,
        found: HandleType,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
