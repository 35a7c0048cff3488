//! Swapping a component's logger for an adapter and putting it back.
//!
//! A [`Substitution`] records one installed adapter. [`SubstitutionSet`]
//! collects several and restores them all when dropped, which makes it usable
//! as a per-test guard from any harness.

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use crate::{
    adapter::Adapter,
    error::Result,
    logger::{Logger, LoggerSlot},
    registry::AdapterRegistry,
};

// =============================================================================
// Substitution - One installed adapter
// =============================================================================

/// An adapter installed in a [`LoggerSlot`] in place of its original logger.
pub struct Substitution {
    slot: Arc<LoggerSlot>,
    original: Arc<dyn Logger>,
    adapter: Arc<dyn Adapter>,
    reverted: AtomicBool,
}

impl Substitution {
    /// Wraps the logger currently in `slot` with an adapter from `registry`
    /// and installs the adapter in its place.
    ///
    /// The slot is locked for the whole exchange; factories must not log
    /// through it.
    pub fn install(registry: &AdapterRegistry, slot: &Arc<LoggerSlot>) -> Result<Self> {
        let (original, adapter) = slot.substitute(|current| {
            let adapter = registry.create(Arc::clone(current))?;
            Ok::<_, crate::Error>((Arc::clone(&adapter).into_logger(), adapter))
        })?;
        tracing::debug!(
            native = %original.handle_type(),
            adapter = %adapter.handle_type(),
            "installed adapter"
        );
        Ok(Self {
            slot: Arc::clone(slot),
            original,
            adapter,
            reverted: AtomicBool::new(false),
        })
    }

    /// Puts the original logger back.
    ///
    /// Returns `Ok(true)` when it restored the slot and `Ok(false)` when this
    /// substitution had already been reverted.
    pub fn revert(&self) -> Result<bool> {
        if self.reverted.swap(true, Ordering::AcqRel) {
            return Ok(false);
        }
        if let Err(err) = self.adapter.restore(&self.slot) {
            self.reverted.store(false, Ordering::Release);
            return Err(err);
        }
        Ok(true)
    }

    pub fn is_reverted(&self) -> bool {
        self.reverted.load(Ordering::Acquire)
    }

    pub fn adapter(&self) -> &Arc<dyn Adapter> {
        &self.adapter
    }

    pub fn original(&self) -> &Arc<dyn Logger> {
        &self.original
    }

    pub fn slot(&self) -> &Arc<LoggerSlot> {
        &self.slot
    }
}

impl fmt::Debug for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Substitution")
            .field("original", &self.original.handle_type())
            .field("adapter", &self.adapter)
            .field("reverted", &self.is_reverted())
            .finish()
    }
}

// =============================================================================
// SubstitutionSet - Guard over many substitutions
// =============================================================================

/// Substitutions made for one test, reverted together.
///
/// Dropping the set reverts whatever is still installed, newest first.
#[derive(Debug, Default)]
pub struct SubstitutionSet {
    records: Vec<Substitution>,
}

impl SubstitutionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(
        &mut self,
        registry: &AdapterRegistry,
        slot: &Arc<LoggerSlot>,
    ) -> Result<&Substitution> {
        let record = Substitution::install(registry, slot)?;
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Installs an adapter only if `registry` supports the slot's logger.
    pub fn install_if_supported(
        &mut self,
        registry: &AdapterRegistry,
        slot: &Arc<LoggerSlot>,
    ) -> Result<bool> {
        let current = slot.current_type();
        if !registry.is_supported(&current) {
            tracing::debug!(native = %current, "no adapter for logger, leaving it in place");
            return Ok(false);
        }
        self.install(registry, slot)?;
        Ok(true)
    }

    /// Reverts every substitution, newest first.
    ///
    /// All are attempted; the first error is returned.
    pub fn revert_all(&mut self) -> Result<()> {
        let mut first_error = None;
        while let Some(record) = self.records.pop() {
            if let Err(err) = record.revert() {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Substitution> {
        self.records.iter()
    }
}

impl Drop for SubstitutionSet {
    fn drop(&mut self) {
        if let Err(err) = self.revert_all() {
            tracing::warn!(error = %err, "failed to restore logger");
        }
    }
}
