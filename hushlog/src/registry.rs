//! Ordered mapping from native logger types to adapter factories.
//!
//! Entries are scanned in insertion order and the first whose [`Accepts`]
//! matches the native handle's type builds the adapter. A factory failure is
//! reported as is; the scan never falls through to a later entry.

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::{
    adapter::{Accepts, Adapter, AdapterFactory, SanitizingLogger},
    error::{BoxError, Error, Result},
    logger::{HandleType, Logger},
    rules::RuleSetHolder,
};

struct Entry {
    accepts: Accepts,
    factory: AdapterFactory,
}

/// Creates adapters for native logger handles.
///
/// Every adapter it creates shares the registry's [`RuleSetHolder`].
pub struct AdapterRegistry {
    entries: RwLock<Vec<Entry>>,
    rules: RuleSetHolder,
}

impl AdapterRegistry {
    /// Creates a registry holding the built-in adapters.
    pub fn new(rules: RuleSetHolder) -> Self {
        Self {
            entries: RwLock::new(builtin_entries()),
            rules,
        }
    }

    /// Creates a registry with no entries at all.
    pub fn empty(rules: RuleSetHolder) -> Self {
        Self {
            entries: RwLock::default(),
            rules,
        }
    }

    pub fn rules(&self) -> &RuleSetHolder {
        &self.rules
    }

    /// Appends an entry. Existing entries keep precedence.
    pub fn register<F>(&self, accepts: Accepts, factory: F)
    where
        F: Fn(Arc<dyn Logger>, RuleSetHolder) -> std::result::Result<Arc<dyn Adapter>, BoxError>
            + Send
            + Sync
            + 'static,
    {
        self.push(Entry {
            accepts,
            factory: Arc::new(factory),
        });
    }

    /// Registers [`SanitizingLogger<L>`] for native handles of type `L`.
    pub fn register_adapter<L: Logger + Clone>(&self) {
        self.push(sanitizing_entry::<L>(SanitizingLogger::<L>::accepts()));
    }

    fn push(&self, entry: Entry) {
        tracing::debug!(accepts = %entry.accepts.label(), "registering adapter");
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }

    /// Wraps `native` with the adapter of the first matching entry.
    pub fn create(&self, native: Arc<dyn Logger>) -> Result<Arc<dyn Adapter>> {
        let handle_type = native.handle_type();
        let factory = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|entry| entry.accepts.matches(&handle_type))
            .map(|entry| Arc::clone(&entry.factory));

        let Some(factory) = factory else {
            return Err(Error::NoMatchingAdapter {
                handle_type,
                registered: self.registered(),
            });
        };

        let adapter = factory(native, self.rules.clone())
            .map_err(|source| Error::AdapterConstructionFailed {
                handle_type,
                source,
            })?;
        tracing::debug!(native = %handle_type, "created adapter");
        Ok(adapter)
    }

    pub fn is_supported(&self, handle_type: &HandleType) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|entry| entry.accepts.matches(handle_type))
    }

    /// Labels of all entries, in scan order.
    pub fn registered(&self) -> Vec<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|entry| entry.accepts.label())
            .collect()
    }

    /// Drops every custom entry and re-installs the built-ins.
    pub fn reset(&self) {
        *self.entries.write().unwrap_or_else(PoisonError::into_inner) = builtin_entries();
        tracing::debug!("adapter registry reset");
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new(RuleSetHolder::new())
    }
}

impl std::fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("entries", &self.registered())
            .field("rules", &self.rules)
            .finish()
    }
}

/// Process-wide registry, holding the built-ins on first use.
///
/// Its state survives between tests in the same process; call
/// [`AdapterRegistry::reset`] and [`RuleSetHolder::clear`] to get back to a
/// known state.
pub fn global() -> &'static AdapterRegistry {
    static GLOBAL: OnceLock<AdapterRegistry> = OnceLock::new();
    GLOBAL.get_or_init(AdapterRegistry::default)
}

#[allow(unused_mut)]
fn builtin_entries() -> Vec<Entry> {
    let mut entries = Vec::new();
    #[cfg(feature = "slog")]
    entries.push(sanitizing_entry::<slog::Logger>(Accepts::Type(
        crate::logger::slog_handle_type(),
    )));
    #[cfg(feature = "tracing-backend")]
    entries.push(sanitizing_entry::<tracing::Dispatch>(Accepts::Type(
        crate::logger::dispatch_handle_type(),
    )));
    entries
}

fn sanitizing_entry<L: Logger + Clone>(accepts: Accepts) -> Entry {
    Entry {
        accepts,
        factory: SanitizingLogger::<L>::factory(),
    }
}
