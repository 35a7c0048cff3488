//! `slog` backend.
//!
//! `slog::Logger` implements [`Logger`](super::Logger) so it can be held in a
//! [`LoggerSlot`](super::LoggerSlot) and wrapped by an adapter. Causes are
//! attached under the `error` key: throwables as nested JSON
//! (`{"type": ..., "message": ...}`) through `slog`'s nested-value support,
//! redaction placeholders as plain strings.
//!
//! `slog` filters `trace!`/`debug!` at compile time by default; those calls
//! may never reach the drain.

use std::{any::Any, borrow::Cow};

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use super::{Arg, HandleType, Level, Marker, format_message};

/// Tag of `slog::Logger`, named without its default drain parameter.
pub(crate) fn slog_handle_type() -> HandleType {
    HandleType::named::<slog::Logger>("slog::Logger")
}

impl From<Level> for slog::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => slog::Level::Trace,
            Level::Debug => slog::Level::Debug,
            Level::Info => slog::Level::Info,
            Level::Warn => slog::Level::Warning,
            Level::Error => slog::Level::Error,
        }
    }
}

#[derive(Serialize)]
struct ThrowableRecord<'a> {
    #[serde(rename = "type")]
    type_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<Cow<'a, str>>,
}

impl SlogValue for Arg<'_> {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        match self {
            Arg::Throwable(throwable) => {
                let json = serde_json::to_value(ThrowableRecord {
                    type_name: throwable.throwable_type().name(),
                    message: throwable.message(),
                })
                .unwrap_or_else(|err| {
                    JsonValue::String(format!("Failed to serialize throwable: {err}"))
                });
                SlogValue::serialize(&slog::Serde(json), record, key, serializer)
            }
            Arg::Text(text) => serializer.emit_str(key, text),
            Arg::Display(value) => serializer.emit_arguments(key, &format_args!("{value}")),
            Arg::Redacted(redaction) => serializer.emit_arguments(key, &format_args!("{redaction}")),
            Arg::Absent => serializer.emit_none(key),
        }
    }
}

// slog's macros need the level as a constant, so each call is dispatched.
macro_rules! slog_at {
    ($logger:expr, $level:expr, $($rest:tt)*) => {
        match $level {
            Level::Trace => slog::trace!($logger, $($rest)*),
            Level::Debug => slog::debug!($logger, $($rest)*),
            Level::Info => slog::info!($logger, $($rest)*),
            Level::Warn => slog::warn!($logger, $($rest)*),
            Level::Error => slog::error!($logger, $($rest)*),
        }
    };
}

impl super::Logger for slog::Logger {
    fn is_enabled(&self, level: Level, _marker: Option<&Marker>) -> bool {
        slog::Drain::is_enabled(self, level.into())
    }

    fn log(&self, level: Level, marker: Option<&Marker>, message: &str) {
        let marker = marker.map(Marker::as_str);
        slog_at!(self, level, "{}", message; "marker" => marker);
    }

    fn log_cause(&self, level: Level, marker: Option<&Marker>, message: &str, cause: &Arg<'_>) {
        let marker = marker.map(Marker::as_str);
        slog_at!(self, level, "{}", message; "marker" => marker, "error" => cause);
    }

    fn log_args(&self, level: Level, marker: Option<&Marker>, format: &str, args: &[Arg<'_>]) {
        let formatted = format_message(format, args);
        match formatted.cause {
            Some(cause) => super::Logger::log_cause(self, level, marker, &formatted.text, &cause),
            None => super::Logger::log(self, level, marker, &formatted.text),
        }
    }

    fn handle_type(&self) -> HandleType {
        slog_handle_type()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
