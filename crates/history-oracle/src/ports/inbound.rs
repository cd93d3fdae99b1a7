//! # Driving Port (API - Inbound)
//!
//! The single invocation entry point exposed by the oracle, plus its result
//! type. The hosting environment authenticates the caller and hands over an
//! opaque identity and payload; everything else is the oracle's concern.

use crate::domain::value_objects::{CallerId, Word};
use crate::errors::Rejected;

// =============================================================================
// INVOCATION OUTPUT
// =============================================================================

/// Successful invocation outcome.
///
/// The submit path produces no output bytes; the query path produces exactly
/// one 32-byte word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvocationOutput {
    /// Submit path completed; the slot pair was overwritten.
    Recorded,
    /// Query path completed; carries the stored 32-byte value.
    Value(Word),
}

impl InvocationOutput {
    /// Returns the output bytes, if the invocation produced any.
    #[must_use]
    pub const fn output_bytes(&self) -> Option<&[u8; 32]> {
        match self {
            Self::Recorded => None,
            Self::Value(word) => Some(word.as_bytes()),
        }
    }
}

// =============================================================================
// ORACLE API
// =============================================================================

/// The oracle's single entry point.
///
/// ## Dispatch
///
/// | Caller | Path |
/// |---|---|
/// | `DESIGNATED_SUBMITTER` | submit (privileged write) |
/// | anyone else | query (public read) |
///
/// Invocations are fully serialized by the hosting environment; `&mut self`
/// models that exclusivity directly.
pub trait HistoryOracleApi {
    /// Runs one invocation to completion.
    ///
    /// Returns `Ok` with the path's output on success, or [`Rejected`] when
    /// the query path aborts. A rejected invocation produces no output and
    /// mutates nothing.
    ///
    /// # Panics
    ///
    /// Submit-path payloads shorter than 32 bytes violate the trusted-caller
    /// precondition and panic; see the service documentation.
    fn invoke(&mut self, caller: CallerId, payload: &[u8]) -> Result<InvocationOutput, Rejected>;
}

// =============================================================================
// TESTS
// =============================================================================
