//! Adapters: drop-in loggers that sanitize throwables before delegating.
//!
//! This module provides:
//!
//! - [`Adapter`]: the contract every adapter fulfils on top of [`Logger`]
//! - [`Accepts`]: which native handle types an adapter can wrap
//! - [`AdapterFactory`]: how the registry builds an adapter
//! - [`SanitizingLogger`]: the adapter used for every built-in backend

use std::{fmt, sync::Arc};

use crate::{
    error::{BoxError, Error, Result},
    logger::{HandleType, Logger, LoggerSlot},
    rules::RuleSetHolder,
};

mod sanitizing;

#[cfg(feature = "slog")]
pub use sanitizing::SlogAdapter;
pub use sanitizing::SanitizingLogger;
#[cfg(feature = "tracing-backend")]
pub use sanitizing::TracingAdapter;

/// Builds an adapter around a native handle, sharing the given rules.
pub type AdapterFactory = Arc<
    dyn Fn(Arc<dyn Logger>, RuleSetHolder) -> std::result::Result<Arc<dyn Adapter>, BoxError>
        + Send
        + Sync,
>;

// =============================================================================
// Accepts - Native type predicate
// =============================================================================

/// Which native handle types an adapter accepts.
#[derive(Clone)]
pub enum Accepts {
    /// Exactly this type.
    Type(HandleType),
    /// Any of these types.
    AnyOf(Vec<HandleType>),
    /// Types passing a custom test, reported under `label`.
    Predicate {
        label: String,
        test: Arc<dyn Fn(&HandleType) -> bool + Send + Sync>,
    },
}

impl Accepts {
    pub fn type_of<L: Logger>() -> Self {
        Accepts::Type(HandleType::of::<L>())
    }

    pub fn any_of(types: impl IntoIterator<Item = HandleType>) -> Self {
        Accepts::AnyOf(types.into_iter().collect())
    }

    pub fn predicate(
        label: impl Into<String>,
        test: impl Fn(&HandleType) -> bool + Send + Sync + 'static,
    ) -> Self {
        Accepts::Predicate {
            label: label.into(),
            test: Arc::new(test),
        }
    }

    pub fn matches(&self, handle_type: &HandleType) -> bool {
        match self {
            Accepts::Type(accepted) => accepted == handle_type,
            Accepts::AnyOf(accepted) => accepted.contains(handle_type),
            Accepts::Predicate { test, .. } => test(handle_type),
        }
    }

    /// Human-readable description, used in error reports.
    pub fn label(&self) -> String {
        match self {
            Accepts::Type(accepted) => accepted.name().to_owned(),
            Accepts::AnyOf(accepted) => accepted
                .iter()
                .map(HandleType::name)
                .collect::<Vec<_>>()
                .join(" | "),
            Accepts::Predicate { label, .. } => label.clone(),
        }
    }
}

impl fmt::Debug for Accepts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Accepts").field(&self.label()).finish()
    }
}

// =============================================================================
// Adapter - Wrapping contract
// =============================================================================

/// A [`Logger`] that wraps a native handle and sanitizes every throwable
/// argument against shared rules before delegating to it.
///
/// Calls without a throwable argument reach the native handle unchanged.
pub trait Adapter: Logger {
    /// The handle this adapter wraps.
    fn native(&self) -> &Arc<dyn Logger>;

    /// The rules consulted on every call.
    fn rules(&self) -> &RuleSetHolder;

    fn accepts_native_type(&self, handle_type: &HandleType) -> bool;

    /// Erases the adapter into the logger a [`LoggerSlot`] holds.
    fn into_logger(self: Arc<Self>) -> Arc<dyn Logger>;

    /// Puts the native handle back into `slot`.
    ///
    /// Fails with [`Error::RestoreTargetMismatch`] if the slot no longer holds
    /// this adapter, e.g. because it was already restored.
    fn restore(&self, slot: &LoggerSlot) -> Result<()> {
        let this = std::ptr::from_ref(self).cast::<()>();
        slot.replace_if_current(this, Arc::clone(self.native()))
            .map_err(|found| Error::RestoreTargetMismatch {
                expected: self.handle_type(),
                found,
            })?;
        tracing::debug!(native = %self.native().handle_type(), "restored native logger");
        Ok(())
    }
}

impl fmt::Debug for dyn Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("type", &self.handle_type())
            .field("native", &self.native().handle_type())
            .finish()
    }
}
