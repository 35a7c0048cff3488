//! The logging call surface wrapped by adapters.
//!
//! This module provides:
//!
//! - [`Logger`]: the call surface every native handle and every adapter exposes
//! - [`Level`], [`Marker`]: call qualifiers
//! - [`HandleType`]: the stable type tag the registry matches native handles on
//! - [`Arg`]: a value passed to a log call
//! - [`LoggerExt`]: per-level convenience methods
//! - [`LoggerSlot`]: the settable reference a component logs through
//! - backend implementations for `slog::Logger` and `tracing::Dispatch`
//!   (behind the `slog` and `tracing-backend` features)

use std::{
    any::{Any, TypeId},
    borrow::Cow,
    fmt,
    hash::{Hash, Hasher},
};

mod arg;
mod ext;
mod format;
mod slot;
#[cfg(feature = "slog")]
mod slog_backend;
#[cfg(feature = "tracing-backend")]
mod tracing_backend;

pub use arg::Arg;
pub use ext::LoggerExt;
pub use format::{FormattedMessage, format_message};
pub use slot::LoggerSlot;

#[cfg(feature = "slog")]
pub(crate) use slog_backend::slog_handle_type;
#[cfg(feature = "tracing-backend")]
pub(crate) use tracing_backend::dispatch_handle_type;

// =============================================================================
// Level / Marker - Call qualifiers
// =============================================================================

/// Severity of a log call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag attached to a log call, e.g. `"AUDIT"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Marker(Cow<'static, str>);

impl Marker {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// HandleType - Type tag of a native handle
// =============================================================================

/// Type tag of a logger handle: its [`TypeId`] and type name.
///
/// Equality and hashing use the [`TypeId`] only; the name is for diagnostics.
#[derive(Clone, Copy)]
pub struct HandleType {
    id: TypeId,
    name: &'static str,
}

impl HandleType {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::named::<T>(std::any::type_name::<T>())
    }

    /// Tag of `T` reported under `name` instead of its full type name.
    ///
    /// Useful for handles whose full name spells out default type parameters.
    pub fn named<T: ?Sized + 'static>(name: &'static str) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }
}

impl PartialEq for HandleType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for HandleType {}

impl Hash for HandleType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for HandleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HandleType").field(&self.name).finish()
    }
}

impl fmt::Display for HandleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// =============================================================================
// Logger - The call surface
// =============================================================================

/// The logging call surface.
///
/// Native handles implement this to be wrappable; adapters implement it to be
/// drop-in replacements for the handle they wrap. Every call is qualified by a
/// level and an optional marker.
pub trait Logger: Send + Sync + 'static {
    fn is_enabled(&self, level: Level, marker: Option<&Marker>) -> bool;

    /// Logs a plain message.
    fn log(&self, level: Level, marker: Option<&Marker>, message: &str);

    /// Logs a message with an attached cause, usually an [`Arg::Throwable`].
    fn log_cause(&self, level: Level, marker: Option<&Marker>, message: &str, cause: &Arg<'_>);

    /// Logs a `{}`-style format string with its arguments.
    fn log_args(&self, level: Level, marker: Option<&Marker>, format: &str, args: &[Arg<'_>]);

    /// Type tag of the concrete handle, used by the adapter registry.
    fn handle_type(&self) -> HandleType {
        HandleType::of::<Self>()
    }

    fn as_any(&self) -> &dyn Any;
}
