//! # History-Oracle Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # End-to-end invocation properties
//!     └── ring_lookup.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p oracle-tests
//!
//! # By category
//! cargo test -p oracle-tests integration::
//!
//! # Benchmarks
//! cargo bench -p oracle-tests
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]
