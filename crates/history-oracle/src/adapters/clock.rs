//! # Clock Adapters
//!
//! `TimeSource` implementations: the wall clock for deployment and a
//! manually driven clock for deterministic tests.

use crate::domain::value_objects::Timestamp;
use crate::ports::outbound::TimeSource;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

// =============================================================================
// SYSTEM CLOCK
// =============================================================================

/// Wall-clock time source: whole seconds since the Unix epoch.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        Timestamp::new(secs)
    }
}

// =============================================================================
// MANUAL CLOCK
// =============================================================================

/// Manually driven clock for tests and deterministic replay.
///
/// Clones share the underlying instant, so a test can keep one handle while
/// the service owns another and advance time between invocations.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock frozen at `t`.
    #[must_use]
    pub fn at(t: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(t)),
        }
    }

    /// Moves the clock to `t`. Shared across all clones.
    pub fn set(&self, t: u64) {
        self.now.store(t, Ordering::SeqCst);
    }

    /// Advances the clock by `delta` time units.
    pub fn advance(&self, delta: u64) {
        self.now.fetch_add(delta, Ordering::SeqCst);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::new(self.now.load(Ordering::SeqCst))
    }
}

// =============================================================================
// TESTS
// =============================================================================
