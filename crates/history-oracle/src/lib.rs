//! # History Oracle - Bounded Historical Lookup
//!
//! A single privileged writer periodically records a `(timestamp, value)`
//! pair; any reader may later query a timestamp and receive its value while
//! it is still inside the bounded history window. Once a later submission
//! lands on the same ring index, the old timestamp is evicted and queries
//! for it fail deterministically.
//!
//! ## Storage Scheme
//!
//! Two ring halves share one flat mapping of `2 * RING_MODULUS` slots
//! (`RING_MODULUS = 98_304`):
//!
//! | Index range | Contents |
//! |---|---|
//! | `[0, RING_MODULUS)` | last timestamp written per index |
//! | `[RING_MODULUS, 2 * RING_MODULUS)` | value paired with that timestamp |
//!
//! Both halves of a pair are overwritten by each submission at
//! `timestamp % RING_MODULUS`. Effective retention is about `RING_MODULUS`
//! time units.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Slot-Pair Binding | `domain/invariants.rs` - `check_slot_pair_invariant()` |
//! | INVARIANT-2 | Live Range | `domain/invariants.rs` - `check_live_range_invariant()` |
//! | INVARIANT-3 | Reject Atomicity | `service.rs` - rejects precede all mutation |
//!
//! ## Access Control
//!
//! | Caller | Path |
//! |---|---|
//! | `DESIGNATED_SUBMITTER` | submit (trusted, unvalidated payload) |
//! | anyone else | query (validated, read-only) |
//!
//! Identity arrives pre-authenticated from the hosting environment; dispatch
//! is one equality comparison.
//!
//! ## Usage Example
//!
//! ```
//! use history_oracle::prelude::*;
//!
//! let (mut oracle, clock) = create_test_service(1000);
//!
//! // Privileged submission at the current time.
//! oracle
//!     .invoke(DESIGNATED_SUBMITTER, &[0xaa; 32])
//!     .expect("submit path has no failure mode");
//!
//! // Public query for that timestamp.
//! let payload = Timestamp::new(1000).to_word().0;
//! let out = oracle.invoke(CallerId::new([1; 20]), &payload).unwrap();
//! assert_eq!(out, InvocationOutput::Value(Word::new([0xaa; 32])));
//! # let _ = clock;
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Value objects
    pub use crate::domain::value_objects::{CallerId, Timestamp, Word, U256};

    // Ring layout
    pub use crate::domain::ring::{
        root_index, time_index, time_index_u64, DESIGNATED_SUBMITTER, RING_MODULUS, WORD_BYTES,
    };

    // Invariants
    pub use crate::domain::invariants::{
        audit_slot_pairs, check_live_range_invariant, check_slot_pair_invariant,
        InvariantCheckResult, InvariantViolation,
    };

    // Ports
    pub use crate::ports::inbound::{HistoryOracleApi, InvocationOutput};
    pub use crate::ports::outbound::{SlotStore, TimeSource};

    // Errors
    pub use crate::errors::{RejectReason, Rejected};

    // Adapters
    pub use crate::adapters::{InMemorySlotStore, ManualClock, SystemClock};

    // Service
    pub use crate::service::{create_test_service, HistoryOracleService, ServiceStats};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Component name.
pub const COMPONENT_NAME: &str = "History Oracle";

// =============================================================================
// TESTS
// =============================================================================
