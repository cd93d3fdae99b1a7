//! # Error Types
//!
//! The oracle's externally visible failure surface is deliberately a single
//! opaque rejection: callers must not be able to tell a malformed query from
//! a stale one. Diagnostic causes exist only for logging.

use thiserror::Error;

// =============================================================================
// PUBLIC REJECTION
// =============================================================================

/// Terminal rejection of an invocation.
///
/// Carries no cause on purpose: a bad-length query and a stale-or-unknown
/// timestamp must be indistinguishable in the result. A rejected invocation
/// produced no output and mutated nothing. The cause is still visible in
/// logs via [`RejectReason`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invocation rejected")]
pub struct Rejected;

// =============================================================================
// DIAGNOSTIC REASON (logs only)
// =============================================================================

/// Why the query path rejected, for `tracing` output only.
///
/// Never returned across the API boundary and never serialized into a
/// response; branching on this outside of log formatting would break the
/// failure-equivalence contract.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Query payload was not exactly 32 bytes.
    #[error("bad payload length: expected 32, got {actual}")]
    BadLength {
        /// Actual payload length in bytes.
        actual: usize,
    },

    /// The stored timestamp at the computed index does not equal the
    /// requested one: either never submitted, or evicted by a later
    /// submission sharing the index. The two causes are not separable.
    #[error("timestamp not in history window")]
    StaleOrUnknownTimestamp,
}

impl From<RejectReason> for Rejected {
    fn from(_: RejectReason) -> Self {
        Rejected
    }
}

// =============================================================================
// TESTS
// =============================================================================
