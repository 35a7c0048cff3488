//! `tracing` backend.
//!
//! A `tracing::Dispatch` is a handle to a subscriber. Calls made through it
//! are recorded as events on that subscriber (not the thread's default), with
//! the marker under `marker` and the cause, rendered with `Display`, under
//! `error`.

use std::any::Any;

use super::{Arg, HandleType, Level, Marker, format_message};

/// Tag of `tracing::Dispatch`, named by its public path.
pub(crate) fn dispatch_handle_type() -> HandleType {
    HandleType::named::<tracing::Dispatch>("tracing::Dispatch")
}

impl From<Level> for tracing::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => tracing::Level::TRACE,
            Level::Debug => tracing::Level::DEBUG,
            Level::Info => tracing::Level::INFO,
            Level::Warn => tracing::Level::WARN,
            Level::Error => tracing::Level::ERROR,
        }
    }
}

// Callsite metadata is static, so the level must be known at each call.
macro_rules! event_at {
    ($level:expr, $($rest:tt)*) => {
        match $level {
            Level::Trace => tracing::event!(tracing::Level::TRACE, $($rest)*),
            Level::Debug => tracing::event!(tracing::Level::DEBUG, $($rest)*),
            Level::Info => tracing::event!(tracing::Level::INFO, $($rest)*),
            Level::Warn => tracing::event!(tracing::Level::WARN, $($rest)*),
            Level::Error => tracing::event!(tracing::Level::ERROR, $($rest)*),
        }
    };
}

impl super::Logger for tracing::Dispatch {
    fn is_enabled(&self, level: Level, _marker: Option<&Marker>) -> bool {
        tracing::dispatcher::with_default(self, || match level {
            Level::Trace => tracing::enabled!(tracing::Level::TRACE),
            Level::Debug => tracing::enabled!(tracing::Level::DEBUG),
            Level::Info => tracing::enabled!(tracing::Level::INFO),
            Level::Warn => tracing::enabled!(tracing::Level::WARN),
            Level::Error => tracing::enabled!(tracing::Level::ERROR),
        })
    }

    fn log(&self, level: Level, marker: Option<&Marker>, message: &str) {
        let marker = marker.map(Marker::as_str);
        tracing::dispatcher::with_default(self, || {
            event_at!(level, marker = marker, "{}", message);
        });
    }

    fn log_cause(&self, level: Level, marker: Option<&Marker>, message: &str, cause: &Arg<'_>) {
        let marker = marker.map(Marker::as_str);
        tracing::dispatcher::with_default(self, || {
            event_at!(level, marker = marker, error = %cause, "{}", message);
        });
    }

    fn log_args(&self, level: Level, marker: Option<&Marker>, format: &str, args: &[Arg<'_>]) {
        let formatted = format_message(format, args);
        match formatted.cause {
            Some(cause) => super::Logger::log_cause(self, level, marker, &formatted.text, &cause),
            None => super::Logger::log(self, level, marker, &formatted.text),
        }
    }

    fn handle_type(&self) -> HandleType {
        dispatch_handle_type()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_tracing_levels() {
        assert_eq!(tracing::Level::from(Level::Warn), tracing::Level::WARN);
        assert_eq!(tracing::Level::from(Level::Error), tracing::Level::ERROR);
    }

    #[test]
    fn handle_type_uses_the_public_path() {
        let dispatch = tracing::Dispatch::none();
        let tag = super::super::Logger::handle_type(&dispatch);
        assert_eq!(tag.name(), "tracing::Dispatch");
        assert_eq!(tag, HandleType::of::<tracing::Dispatch>());
    }

    #[test]
    fn no_subscriber_means_disabled() {
        let dispatch = tracing::Dispatch::none();
        assert!(!super::super::Logger::is_enabled(&dispatch, Level::Error, None));
    }
}
