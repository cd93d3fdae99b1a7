//! # Domain Layer (Inner Hexagon)
//!
//! Pure logic of the dual ring buffer: layout constants, index arithmetic,
//! value types, and checkable invariants.
//! NO I/O, NO clocks, NO external dependencies.

pub mod invariants;
pub mod ring;
pub mod value_objects;

pub use invariants::*;
pub use ring::*;
pub use value_objects::*;
