//! # History Oracle Service
//!
//! The access gate and both invocation paths over injected ports. This is
//! the whole control flow of the component: every invocation enters
//! [`HistoryOracleService::invoke`], runs one path to completion, and
//! terminates with output bytes, no output, or a rejection.
//!
//! ## Security
//!
//! Dispatch is a single equality comparison of the pre-authenticated caller
//! identity against `DESIGNATED_SUBMITTER`. The submit path performs no
//! further caller validation; the query path never mutates.

use crate::domain::ring::{
    root_index, time_index, time_index_u64, DESIGNATED_SUBMITTER, WORD_BYTES,
};
use crate::domain::value_objects::{CallerId, Word, U256};
use crate::errors::{RejectReason, Rejected};
use crate::ports::inbound::{HistoryOracleApi, InvocationOutput};
use crate::ports::outbound::{SlotStore, TimeSource};

use crate::adapters::{InMemorySlotStore, ManualClock};
use tracing::{debug, trace};

// =============================================================================
// SERVICE STATS
// =============================================================================

/// Running invocation counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ServiceStats {
    /// Privileged submissions recorded.
    pub submissions: u64,
    /// Queries answered with a value.
    pub queries_served: u64,
    /// Queries rejected (any cause).
    pub queries_rejected: u64,
}

// =============================================================================
// SERVICE
// =============================================================================

/// The oracle service: access gate + submit path + query path.
///
/// Generic over its driven ports so deployments and tests choose the store
/// and clock. Invocations are serialized by the hosting environment;
/// `&mut self` on [`HistoryOracleApi::invoke`] models that exclusivity.
#[derive(Debug)]
pub struct HistoryOracleService<S: SlotStore, C: TimeSource> {
    /// The persistent slot mapping (both ring halves).
    store: S,
    /// The environment clock read by the submit path.
    clock: C,
    /// Invocation counters.
    stats: ServiceStats,
}

impl<S: SlotStore, C: TimeSource> HistoryOracleService<S, C> {
    /// Creates a service over the given store and clock.
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            stats: ServiceStats::default(),
        }
    }

    /// Current invocation counters.
    #[must_use]
    pub const fn stats(&self) -> ServiceStats {
        self.stats
    }

    /// Read access to the underlying store, for audits and assertions.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the service, returning the store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Privileged write path.
    ///
    /// Reads the current time from the environment clock (never from the
    /// payload), derives the slot pair from it, and overwrites both halves
    /// unconditionally. The caller was already authorized by the gate and is
    /// fully trusted: the first 32 payload bytes are taken as an opaque word
    /// with no validation.
    fn submit(&mut self, payload: &[u8]) {
        let now = self.clock.now();
        let index = time_index_u64(now.value());

        // Trusted-input precondition: payload carries at least one word.
        // A shorter payload panics here rather than being handled.
        let mut value = [0u8; WORD_BYTES];
        value.copy_from_slice(&payload[..WORD_BYTES]);

        self.store.set(index, now.to_word());
        self.store.set(root_index(index), Word::new(value));

        self.stats.submissions += 1;
        debug!(timestamp = %now, index, "slot pair recorded");
    }

    /// Public read path.
    ///
    /// Validates the payload shape, checks the requested timestamp is still
    /// the one recorded at its slot, and returns the paired value. Both
    /// rejection points precede any mutation (the path never mutates at
    /// all), so a rejecting invocation is trivially atomic.
    fn query(&self, payload: &[u8]) -> Result<Word, RejectReason> {
        if payload.len() != WORD_BYTES {
            return Err(RejectReason::BadLength {
                actual: payload.len(),
            });
        }

        let requested = U256::from_big_endian(payload);
        let index = time_index(requested);
        let stored = self.store.get(index);

        // Full-word equality: never-submitted and evicted timestamps fail
        // identically, and an oversized requested timestamp cannot alias a
        // stored one through index reduction alone.
        if stored != Word::from_u256(requested) {
            return Err(RejectReason::StaleOrUnknownTimestamp);
        }

        Ok(self.store.get(root_index(index)))
    }
}

impl<S: SlotStore, C: TimeSource> HistoryOracleApi for HistoryOracleService<S, C> {
    fn invoke(&mut self, caller: CallerId, payload: &[u8]) -> Result<InvocationOutput, Rejected> {
        if caller == DESIGNATED_SUBMITTER {
            self.submit(payload);
            return Ok(InvocationOutput::Recorded);
        }

        match self.query(payload) {
            Ok(value) => {
                self.stats.queries_served += 1;
                trace!(%caller, %value, "query served");
                Ok(InvocationOutput::Value(value))
            }
            Err(reason) => {
                self.stats.queries_rejected += 1;
                debug!(%caller, %reason, "query rejected");
                Err(Rejected)
            }
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

/// Creates a service over an in-memory store and a manual clock frozen at
/// `start`, returning the clock handle so callers can drive time.
#[must_use]
pub fn create_test_service(
    start: u64,
) -> (
    HistoryOracleService<InMemorySlotStore, ManualClock>,
    ManualClock,
) {
    let clock = ManualClock::at(start);
    let service = HistoryOracleService::new(InMemorySlotStore::new(), clock.clone());
    (service, clock)
}

// =============================================================================
// TESTS
// =============================================================================
