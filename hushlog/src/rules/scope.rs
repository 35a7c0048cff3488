//! Declarative redaction settings for one test scope.

use std::fmt;

use super::{ClassAndMessage, RuleSet, RuleSetHolder};
use crate::throwable::{ThrowableClass, ThrowableType};

/// The hide settings declared for one scope (a test, a test module, a run).
///
/// ```rust
/// use hushlog::{RedactionScope, RuleSetHolder, Throwable};
///
/// #[derive(Throwable)]
/// #[throwable(display)]
/// struct NegativeSeconds;
///
/// impl std::fmt::Display for NegativeSeconds {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str("seconds cannot be 0 or negative")
///     }
/// }
///
/// let holder = RuleSetHolder::new();
/// RedactionScope::new()
///     .hide_message("cannot be 0 or negative")
///     .apply(&holder);
/// assert!(holder.snapshot().hidden_messages().contains("cannot be 0 or negative"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RedactionScope {
    suspended: Option<bool>,
    rules: RuleSet,
}

impl RedactionScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the suspend flag when this scope is applied.
    #[must_use]
    pub fn suspended(mut self, suspended: bool) -> Self {
        self.suspended = Some(suspended);
        self
    }

    #[must_use]
    pub fn hide_class<T: ThrowableClass>(self) -> Self {
        self.hide_classes([ThrowableType::of::<T>()])
    }

    #[must_use]
    pub fn hide_classes(mut self, classes: impl IntoIterator<Item = ThrowableType>) -> Self {
        self.rules.hidden_classes.extend(classes);
        self
    }

    #[must_use]
    pub fn hide_message(self, message: impl Into<String>) -> Self {
        self.hide_messages([message])
    }

    #[must_use]
    pub fn hide_messages<S: Into<String>>(mut self, messages: impl IntoIterator<Item = S>) -> Self {
        self.rules
            .hidden_messages
            .extend(messages.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn hide_class_and_message<T: ThrowableClass>(mut self, message: impl Into<String>) -> Self {
        self.rules
            .hidden_class_and_message
            .push(ClassAndMessage::of::<T>(message));
        self
    }

    /// The rules this scope installs.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Installs this scope into `holder`.
    ///
    /// All three rule collections are replaced, so anything the scope does not
    /// declare ends up cleared. The suspend flag is only written when the scope
    /// sets it.
    pub fn apply(&self, holder: &RuleSetHolder) {
        if let Some(suspended) = self.suspended {
            holder.set_suspended(suspended);
        }
        holder.replace(self.rules.clone());
        tracing::debug!(scope = %self, "applied redaction scope");
    }
}

impl fmt::Display for RedactionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suspended {
            Some(true) => write!(f, "suspended, {}", self.rules),
            Some(false) => write!(f, "not suspended, {}", self.rules),
            None => write!(f, "{}", self.rules),
        }
    }
}
