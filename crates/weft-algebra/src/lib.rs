//! Spin-color matrix algebra and lattice fields for Weft.
//!
//! Three layers, bottom up:
//!
//! - [`SpinColorMatrix`] — the dense per-site algebraic object
//!   (4 spin × 3 color) with multiply, adjoint, and trace.
//! - The gamma algebra — Euclidean Dirac matrices in the chiral basis,
//!   `γ5`, and the left-handed direction-indexed family collected in a
//!   [`GammaTable`].
//! - Lattice fields — [`PropagatorField`] (a matrix per site),
//!   [`ComplexField`] (a complex scalar per site), and
//!   [`SlicedPropagator`] (a matrix per timeslice), with the field-wide
//!   operations the contraction pipeline consumes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod field;
mod gamma;
mod matrix;

pub use field::{ComplexField, PropagatorField, SlicedPropagator};
pub use gamma::{gamma, gamma5, gamma_left, GammaTable};
pub use matrix::{SpinColorMatrix, DIM, NC, NS};
