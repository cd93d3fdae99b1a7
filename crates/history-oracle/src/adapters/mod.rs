//! # Adapters Layer (Outer Hexagon)
//!
//! Concrete implementations of the driven ports: the in-memory slot store
//! and the clock adapters. Adapters implement domain ports; nothing in the
//! domain or service layer names a concrete adapter.

pub mod clock;
pub mod store;

pub use clock::*;
pub use store::*;
