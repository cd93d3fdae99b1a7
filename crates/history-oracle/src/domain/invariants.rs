//! # Domain Invariants
//!
//! Critical invariants that MUST hold over the dual ring buffer.
//! Checked from tests and audits; the hot paths preserve them by
//! construction.
//!
//! - INVARIANT-1: Slot-Pair Binding — a non-zero timestamp slot holds a
//!   timestamp that reduces to its own index, and its paired value slot holds
//!   the value submitted with it.
//! - INVARIANT-2: Live Range — the oracle touches no index outside
//!   `[0, 2 * RING_MODULUS)`.
//! - INVARIANT-3: Reject Atomicity — a rejected invocation leaves every slot
//!   unchanged.

use crate::domain::ring::RING_MODULUS;
use crate::domain::value_objects::{Word, U256};

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// INVARIANT-1: Slot-Pair Binding (timestamp half).
///
/// A non-zero stored timestamp must reduce to the index it occupies. The
/// write path guarantees this by deriving the index from the timestamp;
/// anything else means the store was corrupted from outside.
#[must_use]
pub fn check_slot_pair_invariant(index: u64, stored_timestamp: Word) -> bool {
    stored_timestamp.is_zero()
        || stored_timestamp.to_u256() % U256::from(RING_MODULUS) == U256::from(index)
}

/// INVARIANT-2: Live Range.
///
/// Both ring halves fit in `[0, 2 * RING_MODULUS)`.
#[must_use]
pub const fn check_live_range_invariant(index: u64) -> bool {
    index < 2 * RING_MODULUS
}

/// Audits every slot pair against INVARIANT-1.
///
/// `get` reads one slot; tests pass a closure over the store under audit.
/// Walks all `RING_MODULUS` pairs, so this is for tests and offline audits,
/// never the invocation paths.
#[must_use]
pub fn audit_slot_pairs(get: impl Fn(u64) -> Word) -> InvariantCheckResult {
    let mut violations = Vec::new();

    for index in 0..RING_MODULUS {
        let stored = get(index);
        if !check_slot_pair_invariant(index, stored) {
            violations.push(InvariantViolation::SlotPairUnbound {
                index,
                stored_timestamp: stored,
            });
        }
    }

    if violations.is_empty() {
        InvariantCheckResult::Valid
    } else {
        InvariantCheckResult::Invalid(violations)
    }
}

// =============================================================================
// INVARIANT TYPES
// =============================================================================

/// Result of an invariant audit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantCheckResult {
    /// All invariants hold.
    Valid,
    /// One or more invariants violated.
    Invalid(Vec<InvariantViolation>),
}

impl InvariantCheckResult {
    /// Returns true if all invariants hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A timestamp slot holds a timestamp that does not reduce to its index.
    SlotPairUnbound {
        /// Index of the offending timestamp slot.
        index: u64,
        /// The stored timestamp word.
        stored_timestamp: Word,
    },
    /// An access outside the live index range.
    LiveRangeExceeded {
        /// The out-of-range index.
        index: u64,
    },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SlotPairUnbound {
                index,
                stored_timestamp,
            } => {
                write!(
                    f,
                    "slot pair unbound: index {index} holds timestamp {stored_timestamp}"
                )
            }
            Self::LiveRangeExceeded { index } => {
                write!(f, "index outside live range: {index}")
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
