//! # Store Adapter
//!
//! In-memory slot store. Serves both as the test fake (spec'd to be
//! substitutable so tests can assert on contents directly) and as the
//! reference implementation of the `SlotStore` contract.

use crate::domain::value_objects::Word;
use crate::ports::outbound::SlotStore;
use std::collections::HashMap;

/// In-memory slot store over a sparse map.
///
/// Unwritten indices read as `Word::ZERO`, matching a zero-initialized
/// persistent mapping. Zero writes are stored rather than elided: the
/// contract has no deletion, and a zero value submitted on purpose is a
/// legitimate occupant.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InMemorySlotStore {
    slots: HashMap<u64, Word>,
}

impl InMemorySlotStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots ever written.
    #[must_use]
    pub fn written_slots(&self) -> usize {
        self.slots.len()
    }

    /// Full copy of the current contents, for atomicity assertions in tests.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<u64, Word> {
        self.slots.clone()
    }
}

impl SlotStore for InMemorySlotStore {
    fn get(&self, index: u64) -> Word {
        self.slots.get(&index).copied().unwrap_or(Word::ZERO)
    }

    fn set(&mut self, index: u64, word: Word) {
        self.slots.insert(index, word);
    }
}

// =============================================================================
// TESTS
// =============================================================================
