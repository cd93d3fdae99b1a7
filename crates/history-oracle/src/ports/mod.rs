//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions between the oracle and the outside world.
//!
//! - **Driving Port (Inbound)**: `HistoryOracleApi` — the single invocation
//!   entry point.
//! - **Driven Ports (Outbound)**: `SlotStore`, `TimeSource` — the persistent
//!   mapping and the environment clock.
//!
//! No concrete implementations in this module.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
