//! Immutable redaction rule snapshots.

use std::{
    collections::{BTreeSet, HashSet},
    fmt,
};

use crate::throwable::{ThrowableClass, ThrowableType};

// =============================================================================
// ClassAndMessage - Combined type + message rule
// =============================================================================

/// Hides a throwable when both its exact type and a message substring match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassAndMessage {
    class: ThrowableType,
    message: String,
}

impl ClassAndMessage {
    pub fn new(class: ThrowableType, message: impl Into<String>) -> Self {
        Self {
            class,
            message: message.into(),
        }
    }

    /// Rule for the throwable type `T`.
    pub fn of<T: ThrowableClass>(message: impl Into<String>) -> Self {
        Self::new(ThrowableType::of::<T>(), message)
    }

    pub fn class(&self) -> ThrowableType {
        self.class
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn matches(&self, class: ThrowableType, message: Option<&str>) -> bool {
        self.class == class && message.is_some_and(|m| m.contains(self.message.as_str()))
    }
}

// =============================================================================
// RuleSet - One consistent snapshot of the hide rules
// =============================================================================

/// The hide rules in effect at one point in time.
///
/// A `RuleSet` is never mutated in place once shared; the holder replaces it
/// wholesale, so a reader always sees one consistent snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSet {
    pub(crate) hidden_classes: HashSet<ThrowableType>,
    pub(crate) hidden_messages: BTreeSet<String>,
    pub(crate) hidden_class_and_message: Vec<ClassAndMessage>,
}

impl RuleSet {
    pub fn hidden_classes(&self) -> &HashSet<ThrowableType> {
        &self.hidden_classes
    }

    pub fn hidden_messages(&self) -> &BTreeSet<String> {
        &self.hidden_messages
    }

    pub fn hidden_class_and_message(&self) -> &[ClassAndMessage] {
        &self.hidden_class_and_message
    }

    /// True when no rule is configured.
    pub fn is_empty(&self) -> bool {
        self.hidden_classes.is_empty()
            && self.hidden_messages.is_empty()
            && self.hidden_class_and_message.is_empty()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("no hide rules");
        }
        let mut parts = Vec::new();
        if !self.hidden_messages.is_empty() {
            let messages: Vec<_> = self.hidden_messages.iter().map(String::as_str).collect();
            parts.push(format!("message contains any of [{}]", messages.join(", ")));
        }
        if !self.hidden_classes.is_empty() {
            let mut names: Vec<_> = self.hidden_classes.iter().map(|c| c.name()).collect();
            names.sort_unstable();
            parts.push(format!("class is one of [{}]", names.join(", ")));
        }
        if !self.hidden_class_and_message.is_empty() {
            let pairs: Vec<_> = self
                .hidden_class_and_message
                .iter()
                .map(|rule| {
                    format!(
                        "class: {} with message containing: {}",
                        rule.class.name(),
                        rule.message
                    )
                })
                .collect();
            parts.push(format!("exception is one of [{}]", pairs.join("; ")));
        }
        f.write_str(&parts.join(", "))
    }
}
