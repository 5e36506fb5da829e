//! Weak-Hamiltonian Eye-type contractions for Weft.
//!
//! Computes the two current-current diagram topologies built from four
//! quark propagators with a pair of left-handed current insertions:
//!
//! ```text
//! S: trace(q3·γ5·q1Snk·adj(q2)·γ5·γL[mu] · q4·γL[mu])   summed over mu
//! E: trace(q3·γ5·q1Snk·adj(q2)·γ5·γL[mu]) · trace(q4·γL[mu])
//! ```
//!
//! The per-direction "body" and "loop" sub-amplitudes are built once
//! ([`build_sub_amplitudes`]) and shared by both diagrams: the Saucer
//! takes the trace of their product, the Eye the product of their
//! traces. Spatial reduction of the resulting scalar fields yields one
//! labeled [`Correlator`] per diagram.
//!
//! The [`WeakHamiltonianEye`] module runs the whole pipeline against a
//! [`PropagatorSource`] and hands both correlators to a [`ResultSink`]
//! in a single emission, or fails without emitting anything.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod builder;
mod correlator;
mod diagram;
mod module;
mod sink;
mod source;

pub use builder::{build_sub_amplitudes, SubAmplitudes};
pub use correlator::Correlator;
pub use diagram::{eye, saucer};
pub use module::{WeakHamiltonianEye, WeakHamiltonianEyePar};
pub use sink::{MemorySink, ResultSink};
pub use source::{FieldCatalog, PropagatorSource};
