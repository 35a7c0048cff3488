//! The sanitizing adapter shared by every built-in backend.

use std::{any::Any, fmt, sync::Arc};

use super::{Accepts, Adapter, AdapterFactory};
use crate::{
    error::{BoxError, Error, Result},
    logger::{Arg, HandleType, Level, Logger, Marker},
    rules::RuleSetHolder,
};

/// Wraps a native handle of type `L`.
///
/// `native` is the handle exactly as it was taken out of the slot and is what
/// [`Adapter::restore`] puts back; `inner` is a typed clone of it that calls
/// are delegated to.
pub struct SanitizingLogger<L> {
    native: Arc<dyn Logger>,
    inner: L,
    rules: RuleSetHolder,
}

#[cfg(feature = "slog")]
pub type SlogAdapter = SanitizingLogger<slog::Logger>;

#[cfg(feature = "tracing-backend")]
pub type TracingAdapter = SanitizingLogger<tracing::Dispatch>;

impl<L: Logger + Clone> SanitizingLogger<L> {
    /// Wraps `native`, which must be an `L`.
    ///
    /// `native` itself is kept and is what [`Adapter::restore`] writes back.
    pub fn from_native(native: Arc<dyn Logger>, rules: RuleSetHolder) -> Result<Self> {
        let inner = native
            .as_any()
            .downcast_ref::<L>()
            .cloned()
            .ok_or_else(|| Error::UnexpectedNativeType {
                expected: HandleType::of::<L>(),
                found: native.handle_type(),
            })?;
        Ok(Self {
            native,
            inner,
            rules,
        })
    }

    pub fn accepts() -> Accepts {
        Accepts::type_of::<L>()
    }

    /// Factory for registering this adapter with an
    /// [`AdapterRegistry`](crate::AdapterRegistry).
    pub fn factory() -> AdapterFactory {
        Arc::new(
            |native: Arc<dyn Logger>, rules: RuleSetHolder| -> std::result::Result<_, BoxError> {
                let adapter: Arc<dyn Adapter> = Arc::new(Self::from_native(native, rules)?);
                Ok(adapter)
            },
        )
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }
}

impl<L: Logger + Clone> Logger for SanitizingLogger<L> {
    fn is_enabled(&self, level: Level, marker: Option<&Marker>) -> bool {
        Logger::is_enabled(&self.inner, level, marker)
    }

    fn log(&self, level: Level, marker: Option<&Marker>, message: &str) {
        Logger::log(&self.inner, level, marker, message);
    }

    fn log_cause(&self, level: Level, marker: Option<&Marker>, message: &str, cause: &Arg<'_>) {
        if !Logger::is_enabled(&self.inner, level, marker) {
            return;
        }
        let cause = self.rules.sanitize(cause);
        self.inner.log_cause(level, marker, message, &cause);
    }

    fn log_args(&self, level: Level, marker: Option<&Marker>, format: &str, args: &[Arg<'_>]) {
        if !Logger::is_enabled(&self.inner, level, marker) {
            return;
        }
        let args = self.rules.sanitize_args(Some(args)).unwrap_or_default();
        self.inner.log_args(level, marker, format, &args);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<L: Logger + Clone> Adapter for SanitizingLogger<L> {
    fn native(&self) -> &Arc<dyn Logger> {
        &self.native
    }

    fn rules(&self) -> &RuleSetHolder {
        &self.rules
    }

    fn accepts_native_type(&self, handle_type: &HandleType) -> bool {
        *handle_type == HandleType::of::<L>()
    }

    fn into_logger(self: Arc<Self>) -> Arc<dyn Logger> {
        self
    }
}

impl<L> fmt::Debug for SanitizingLogger<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SanitizingLogger")
            .field("native", &self.native.handle_type())
            .field("rules", &self.rules)
            .finish()
    }
}
