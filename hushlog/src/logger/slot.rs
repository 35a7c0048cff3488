//! Settable logger reference held by a component.

use std::{
    any::Any,
    fmt,
    sync::{Arc, PoisonError, RwLock},
};

use super::{Arg, HandleType, Level, Logger, Marker};

/// The logger a component logs through, replaceable at runtime.
///
/// A component holds an `Arc<LoggerSlot>` instead of a bare logger so that a
/// test harness can swap in an adapter and later put the original back.
/// `LoggerSlot` is itself a [`Logger`] that forwards to whatever it currently
/// holds.
pub struct LoggerSlot {
    current: RwLock<Arc<dyn Logger>>,
}

impl LoggerSlot {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            current: RwLock::new(logger),
        }
    }

    pub fn from_logger<L: Logger>(logger: L) -> Self {
        Self::new(Arc::new(logger))
    }

    /// Returns the logger currently held.
    pub fn get(&self) -> Arc<dyn Logger> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the held logger and returns the previous one.
    pub fn set(&self, logger: Arc<dyn Logger>) -> Arc<dyn Logger> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, logger)
    }

    /// Type tag of the held logger.
    pub fn current_type(&self) -> HandleType {
        self.get().handle_type()
    }

    /// Builds a replacement from the current logger and installs it, all under
    /// the write lock. Returns the previous logger.
    pub(crate) fn substitute<T, E>(
        &self,
        build: impl FnOnce(&Arc<dyn Logger>) -> Result<(Arc<dyn Logger>, T), E>,
    ) -> Result<(Arc<dyn Logger>, T), E> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let (replacement, extra) = build(&current)?;
        let previous = std::mem::replace(&mut *current, replacement);
        Ok((previous, extra))
    }

    /// Installs `replacement` if the slot still holds the logger whose data
    /// pointer is `expected`. On mismatch returns the type of what it holds.
    pub(crate) fn replace_if_current(
        &self,
        expected: *const (),
        replacement: Arc<dyn Logger>,
    ) -> Result<(), HandleType> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if data_ptr(&current) != expected {
            return Err(current.handle_type());
        }
        *current = replacement;
        Ok(())
    }
}

pub(crate) fn data_ptr(logger: &Arc<dyn Logger>) -> *const () {
    Arc::as_ptr(logger).cast::<()>()
}

impl Logger for LoggerSlot {
    fn is_enabled(&self, level: Level, marker: Option<&Marker>) -> bool {
        self.get().is_enabled(level, marker)
    }

    fn log(&self, level: Level, marker: Option<&Marker>, message: &str) {
        self.get().log(level, marker, message);
    }

    fn log_cause(&self, level: Level, marker: Option<&Marker>, message: &str, cause: &Arg<'_>) {
        self.get().log_cause(level, marker, message, cause);
    }

    fn log_args(&self, level: Level, marker: Option<&Marker>, format: &str, args: &[Arg<'_>]) {
        self.get().log_args(level, marker, format, args);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Debug for LoggerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerSlot")
            .field("current", &self.current_type())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct Lines(Mutex<Vec<String>>);

    impl Logger for Lines {
        fn is_enabled(&self, _: Level, _: Option<&Marker>) -> bool {
            true
        }

        fn log(&self, level: Level, _: Option<&Marker>, message: &str) {
            self.0.lock().unwrap().push(format!("{level} {message}"));
        }

        fn log_cause(&self, level: Level, _: Option<&Marker>, message: &str, cause: &Arg<'_>) {
            self.0.lock().unwrap().push(format!("{level} {message} [{cause}]"));
        }

        fn log_args(&self, level: Level, _: Option<&Marker>, format: &str, args: &[Arg<'_>]) {
            let text = super::super::format_message(format, args).text;
            self.0.lock().unwrap().push(format!("{level} {text}"));
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct Other;

    impl Logger for Other {
        fn is_enabled(&self, _: Level, _: Option<&Marker>) -> bool {
            false
        }
        fn log(&self, _: Level, _: Option<&Marker>, _: &str) {}
        fn log_cause(&self, _: Level, _: Option<&Marker>, _: &str, _: &Arg<'_>) {}
        fn log_args(&self, _: Level, _: Option<&Marker>, _: &str, _: &[Arg<'_>]) {}
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn forwards_to_the_held_logger() {
        let lines = Arc::new(Lines::default());
        let slot = LoggerSlot::new(lines.clone());

        slot.log(Level::Info, None, "started");
        slot.log_args(Level::Warn, None, "{} left", &[Arg::from("2")]);

        assert_eq!(*lines.0.lock().unwrap(), ["INFO started", "WARN 2 left"]);
        assert_eq!(slot.current_type(), HandleType::of::<Lines>());
    }

    #[test]
    fn set_returns_the_previous_logger() {
        let slot = LoggerSlot::from_logger(Lines::default());
        let previous = slot.set(Arc::new(Other));

        assert!(previous.as_any().is::<Lines>());
        assert!(slot.get().as_any().is::<Other>());
    }

    #[test]
    fn replace_if_current_checks_identity() {
        let first: Arc<dyn Logger> = Arc::new(Other);
        let slot = LoggerSlot::new(first.clone());
        let unrelated: Arc<dyn Logger> = Arc::new(Other);

        let found = slot
            .replace_if_current(data_ptr(&unrelated), Arc::new(Lines::default()))
            .unwrap_err();
        assert_eq!(found, HandleType::of::<Other>());

        slot.replace_if_current(data_ptr(&first), Arc::new(Lines::default()))
            .unwrap();
        assert!(slot.get().as_any().is::<Lines>());
    }

    #[test]
    fn substitute_keeps_the_slot_on_error() {
        let slot = LoggerSlot::from_logger(Other);
        let result: Result<(Arc<dyn Logger>, ()), &str> = slot.substitute(|_| Err("nope"));

        assert!(result.is_err());
        assert!(slot.get().as_any().is::<Other>());
    }
}
