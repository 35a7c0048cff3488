//! Shared, mutable home of the rules every adapter consults.

use std::{
    collections::{BTreeSet, HashSet},
    sync::{
        Arc, PoisonError, RwLock,
        atomic::{AtomicBool, Ordering},
    },
};

use super::{
    rule_set::{ClassAndMessage, RuleSet},
    sanitize::{sanitize, sanitize_args},
};
use crate::{logger::Arg, throwable::ThrowableType};

// =============================================================================
// SuspendSwitch - Shareable suspend flag
// =============================================================================

/// Atomic flag that, when set, redacts every throwable.
///
/// Clones share the same flag, so one switch can suspend several holders.
#[derive(Clone, Debug, Default)]
pub struct SuspendSwitch(Arc<AtomicBool>);

impl SuspendSwitch {
    pub fn new(suspended: bool) -> Self {
        Self(Arc::new(AtomicBool::new(suspended)))
    }

    pub fn set(&self, suspended: bool) {
        self.0.store(suspended, Ordering::Release);
    }

    pub fn get(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// True if both switches control the same flag.
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

// =============================================================================
// RuleSetHolder - Rules shared by adapters
// =============================================================================

/// Holds the suspend flag and the current [`RuleSet`] snapshot.
///
/// Clones are handles to the same state. Every setter replaces its field
/// entirely and is visible to all adapters on their next call. Setters never
/// mutate a snapshot a reader may hold, so a concurrent log call sees either
/// the old or the new rules, never a mix.
#[derive(Clone, Debug, Default)]
pub struct RuleSetHolder {
    inner: Arc<HolderInner>,
}

#[derive(Debug, Default)]
struct HolderInner {
    suspended: SuspendSwitch,
    rules: RwLock<Arc<RuleSet>>,
}

impl RuleSetHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a holder driven by an existing suspend switch.
    pub fn with_suspend_switch(switch: SuspendSwitch) -> Self {
        Self {
            inner: Arc::new(HolderInner {
                suspended: switch,
                rules: RwLock::default(),
            }),
        }
    }

    pub fn set_suspended(&self, suspended: bool) {
        self.inner.suspended.set(suspended);
    }

    pub fn is_suspended(&self) -> bool {
        self.inner.suspended.get()
    }

    pub fn suspend_switch(&self) -> SuspendSwitch {
        self.inner.suspended.clone()
    }

    /// Replaces the hidden classes; `None` clears them.
    pub fn set_hidden_classes<I>(&self, classes: Option<I>)
    where
        I: IntoIterator<Item = ThrowableType>,
    {
        let classes: HashSet<ThrowableType> =
            classes.map(|c| c.into_iter().collect()).unwrap_or_default();
        self.update(|rules| rules.hidden_classes = classes);
    }

    /// Replaces the hidden message substrings; `None` clears them.
    pub fn set_hidden_messages<I, S>(&self, messages: Option<I>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let messages: BTreeSet<String> = messages
            .map(|m| m.into_iter().map(Into::into).collect())
            .unwrap_or_default();
        self.update(|rules| rules.hidden_messages = messages);
    }

    /// Replaces the class-and-message rules; `None` clears them.
    pub fn set_hidden_class_and_message<I>(&self, pairs: Option<I>)
    where
        I: IntoIterator<Item = ClassAndMessage>,
    {
        let pairs: Vec<ClassAndMessage> = pairs.map(|p| p.into_iter().collect()).unwrap_or_default();
        self.update(|rules| rules.hidden_class_and_message = pairs);
    }

    /// Clears every hide rule. The suspend flag is left alone.
    pub fn clear(&self) {
        self.replace(RuleSet::default());
    }

    /// Installs `rules` as the current snapshot.
    pub fn replace(&self, rules: RuleSet) {
        let mut current = self
            .inner
            .rules
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *current = Arc::new(rules);
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Arc<RuleSet> {
        self.inner
            .rules
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Sanitizes one argument against the current rules.
    pub fn sanitize<'a>(&self, arg: &Arg<'a>) -> Arg<'a> {
        // Non-throwables never need a snapshot.
        if !matches!(arg, Arg::Throwable(_)) {
            return arg.clone();
        }
        sanitize(&self.snapshot(), self.is_suspended(), arg)
    }

    /// Sanitizes a whole argument list against one snapshot of the rules.
    pub fn sanitize_args<'a>(&self, args: Option<&[Arg<'a>]>) -> Option<Vec<Arg<'a>>> {
        sanitize_args(&self.snapshot(), self.is_suspended(), args)
    }

    /// True if both handles share the same state.
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn update(&self, apply: impl FnOnce(&mut RuleSet)) {
        let mut current = self
            .inner
            .rules
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let mut next = RuleSet::clone(&current);
        apply(&mut next);
        *current = Arc::new(next);
    }
}
