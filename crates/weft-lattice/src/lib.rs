//! Lattice geometry and site indexing for Weft.
//!
//! A [`Lattice`] describes the discrete spacetime volume that fields
//! live on: its per-dimension extents, canonical site ordering, and
//! timeslice structure. Fields in `weft-algebra` carry a `Lattice` to
//! validate that algebra operands share the same extent.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod lattice;

pub use error::LatticeError;
pub use lattice::{Extents, Lattice};
