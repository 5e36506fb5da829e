//! Weft: a lattice field-theory contraction engine for weak-Hamiltonian
//! Eye-type diagrams.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Weft sub-crates. For most users, adding `weft` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use weft::prelude::*;
//!
//! // A 2×2×2×4 lattice; the last axis is time.
//! let lattice = Lattice::new(&[2, 2, 2, 4]).unwrap();
//!
//! // Four unit propagators stand in for solver output.
//! let field = PropagatorField::filled(lattice.clone(), SpinColorMatrix::identity());
//! let mut catalog = FieldCatalog::new();
//! catalog.insert_sliced("q1", field.slice_sum());
//! catalog.insert_propagator("q2", field.clone());
//! catalog.insert_propagator("q3", field.clone());
//! catalog.insert_propagator("q4", field);
//!
//! // Contract at sink time 0 and collect both correlators in memory.
//! let module = WeakHamiltonianEye::new(WeakHamiltonianEyePar {
//!     q1: "q1".into(),
//!     q2: "q2".into(),
//!     q3: "q3".into(),
//!     q4: "q4".into(),
//!     t_snk: 0,
//!     output: "eye_run".into(),
//! });
//! let mut sink = MemorySink::new();
//! module.execute(&catalog, &mut sink).unwrap();
//!
//! let run = sink.run("eye_run").unwrap();
//! assert_eq!(run[0].label(), DiagramLabel::Saucer);
//! assert_eq!(run[1].label(), DiagramLabel::Eye);
//! assert_eq!(run[0].len(), lattice.time_extent() as usize);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `weft-core` | Complex arithmetic, IDs, error types |
//! | [`lattice`] | `weft-lattice` | Lattice geometry and site addressing |
//! | [`algebra`] | `weft-algebra` | Spin-color matrices, gamma algebra, fields |
//! | [`contraction`] | `weft-contraction` | Diagrams, correlators, the pipeline module |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and error taxonomy (`weft-core`).
///
/// Contains [`types::Complex64`], the [`types::Direction`] and
/// [`types::DiagramLabel`] IDs, and the algebra and contraction error
/// enums.
pub use weft_core as types;

/// Lattice geometry (`weft-lattice`).
///
/// The [`lattice::Lattice`] type owns the extents and the canonical
/// time-major site order every field-wide operation follows.
pub use weft_lattice as lattice;

/// Spin-color algebra and lattice fields (`weft-algebra`).
///
/// Dense [`algebra::SpinColorMatrix`] arithmetic, the Euclidean gamma
/// matrices with the left-handed [`algebra::GammaTable`], and the
/// field types the pipeline consumes.
pub use weft_algebra as algebra;

/// Diagram contraction and the pipeline module (`weft-contraction`).
///
/// [`contraction::build_sub_amplitudes`], the [`contraction::saucer`]
/// and [`contraction::eye`] diagram sums, and the
/// [`contraction::WeakHamiltonianEye`] module that runs the full
/// pipeline.
pub use weft_contraction as contraction;

/// Common imports for typical Weft usage.
///
/// ```rust
/// use weft::prelude::*;
/// ```
///
/// This imports the most frequently used types: the lattice, fields,
/// matrices, the gamma table, the pipeline module, and the in-memory
/// source and sink.
pub mod prelude {
    // Core
    pub use weft_core::{
        AlgebraError, Complex64, ContractionError, DiagramLabel, Direction,
    };

    // Lattice
    pub use weft_lattice::{Lattice, LatticeError};

    // Algebra
    pub use weft_algebra::{
        ComplexField, GammaTable, PropagatorField, SlicedPropagator, SpinColorMatrix,
    };

    // Contraction
    pub use weft_contraction::{
        Correlator, FieldCatalog, MemorySink, PropagatorSource, ResultSink, WeakHamiltonianEye,
        WeakHamiltonianEyePar,
    };
}
