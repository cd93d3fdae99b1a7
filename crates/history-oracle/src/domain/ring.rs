//! # Ring Layout
//!
//! Storage layout and index arithmetic for the dual ring buffer.
//!
//! The store is a flat mapping of `2 * RING_MODULUS` live indices:
//!
//! ```text
//! [0, RING_MODULUS)                 timestamp slots
//! [RING_MODULUS, 2 * RING_MODULUS)  value slots (paired by offset)
//! ```
//!
//! A submission with timestamp `t` lands in the pair
//! `(t % RING_MODULUS, t % RING_MODULUS + RING_MODULUS)`, overwriting the
//! previous occupant. Effective retention is therefore about `RING_MODULUS`
//! time units, not a count of submissions.

use crate::domain::value_objects::{CallerId, U256};

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Number of retained slot pairs. Fixed for the life of the deployment.
pub const RING_MODULUS: u64 = 98_304;

/// Width of every stored word and of the query payload, in bytes.
pub const WORD_BYTES: usize = 32;

/// The single identity authorized to submit: `0xffff...fffe`.
///
/// A well-known constant; the hosting environment guarantees no ordinary
/// caller can hold it.
pub const DESIGNATED_SUBMITTER: CallerId = CallerId([
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xfe,
]);

// =============================================================================
// INDEX ARITHMETIC
// =============================================================================

/// Reduces a 256-bit timestamp to its timestamp-slot index.
///
/// The result is always in `[0, RING_MODULUS)`, so narrowing to u64 is exact.
#[must_use]
pub fn time_index(timestamp: U256) -> u64 {
    (timestamp % U256::from(RING_MODULUS)).as_u64()
}

/// Reduces a native timestamp to its timestamp-slot index.
#[must_use]
pub const fn time_index_u64(timestamp: u64) -> u64 {
    timestamp % RING_MODULUS
}

/// Maps a timestamp-slot index to its paired value-slot index.
#[must_use]
pub const fn root_index(index: u64) -> u64 {
    index + RING_MODULUS
}

// =============================================================================
// TESTS
// =============================================================================
