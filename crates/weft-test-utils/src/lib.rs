//! Test fixtures and synthetic field generators for Weft development.
//!
//! Deterministic building blocks for contraction tests: constant and
//! identity propagator fields, seeded random fields (ChaCha8, so the
//! same seed always produces the same field), and synthetic gamma
//! tables including single-direction tables for direction-count
//! checks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod fixtures;

pub use fixtures::{
    constant_propagator, identity_propagator, identity_table, random_propagator, random_sliced,
    single_direction_table,
};
