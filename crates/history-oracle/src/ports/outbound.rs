//! # Driven Ports (SPI - Outbound)
//!
//! Interfaces the oracle depends on. Adapters implement these traits to
//! provide:
//! - Slot storage (the persistent mapping backing both ring halves)
//! - Current time (the execution environment's clock)
//!
//! Both ports are synchronous: invocations are fully serialized by the
//! hosting environment, so there are no suspension points to model.

use crate::domain::value_objects::{Timestamp, Word};

// =============================================================================
// SLOT STORE
// =============================================================================

/// The persistent mapping from slot index to 32-byte word.
///
/// ## Contract
///
/// - `get` returns `Word::ZERO` for any index never written.
/// - No deletion primitive; slots are only ever overwritten.
/// - All operations are O(1) and infallible.
/// - The store is exclusively owned by the oracle: nothing else reads or
///   writes these indices, and the mapping outlives every invocation.
///
/// The oracle only touches indices in `[0, 2 * RING_MODULUS)`; see
/// `domain::ring` for the layout.
pub trait SlotStore: Send {
    /// Reads the word at `index`. Zero if never written.
    fn get(&self, index: u64) -> Word;

    /// Writes `word` at `index`, overwriting any previous occupant.
    fn set(&mut self, index: u64, word: Word);
}

// =============================================================================
// TIME SOURCE
// =============================================================================

/// The execution environment's clock.
///
/// The submit path reads the current time from here at invocation time and
/// never from the payload; injecting it keeps submissions deterministic under
/// test.
pub trait TimeSource: Send {
    /// Returns the current time.
    fn now(&self) -> Timestamp;
}

// =============================================================================
// TESTS
// =============================================================================
