//! Per-level convenience methods over the core call surface.

use super::{Arg, Level, Logger, Marker};
use crate::throwable::Throwable;

macro_rules! level_methods {
    ($($level:ident => $plain:ident, $cause:ident, $args:ident;)*) => {
        $(
            #[doc = concat!("Logs `message` at `", stringify!($level), "`.")]
            fn $plain(&self, message: &str) {
                self.log(Level::$level, None, message);
            }

            #[doc = concat!("Logs `message` with `cause` at `", stringify!($level), "`.")]
            fn $cause(&self, message: &str, cause: &dyn Throwable) {
                self.log_cause(Level::$level, None, message, &Arg::Throwable(cause));
            }

            #[doc = concat!("Logs a `{}` format string at `", stringify!($level), "`.")]
            fn $args(&self, format: &str, args: &[Arg<'_>]) {
                self.log_args(Level::$level, None, format, args);
            }
        )*
    };
}

/// Convenience methods available on every [`Logger`], including adapters and
/// `dyn Logger`.
pub trait LoggerExt: Logger {
    level_methods! {
        Trace => trace, trace_cause, trace_args;
        Debug => debug, debug_cause, debug_args;
        Info => info, info_cause, info_args;
        Warn => warn, warn_cause, warn_args;
        Error => error, error_cause, error_args;
    }

    /// Logs `message` at `level`, tagged with `marker`.
    fn log_marked(&self, level: Level, marker: &Marker, message: &str) {
        self.log(level, Some(marker), message);
    }

    /// Logs `message` with `cause` at `level`, tagged with `marker`.
    fn log_marked_cause(&self, level: Level, marker: &Marker, message: &str, cause: &dyn Throwable) {
        self.log_cause(level, Some(marker), message, &Arg::Throwable(cause));
    }
}

impl<L: Logger + ?Sized> LoggerExt for L {}
