//! Construction of the per-direction body and loop sub-amplitudes.

use weft_algebra::{gamma5, GammaTable, PropagatorField, SpinColorMatrix};
use weft_core::{AlgebraError, Direction};
use weft_lattice::Lattice;

/// The per-direction intermediate tensors shared by both diagrams.
///
/// Holds one body and one loop propagator field per spacetime
/// direction. Built fresh for every contraction run and owned by it;
/// nothing here is cached across invocations.
#[derive(Clone, Debug)]
pub struct SubAmplitudes {
    body: Vec<PropagatorField>,
    loops: Vec<PropagatorField>,
}

impl SubAmplitudes {
    /// Assemble from explicit per-direction fields.
    ///
    /// Both vectors must be non-empty, of equal length, and all fields
    /// must share one lattice.
    pub fn new(
        body: Vec<PropagatorField>,
        loops: Vec<PropagatorField>,
    ) -> Result<Self, AlgebraError> {
        if body.len() != loops.len() {
            return Err(AlgebraError::DirectionCount {
                expected: body.len(),
                actual: loops.len(),
            });
        }
        if body.is_empty() {
            return Err(AlgebraError::DirectionCount {
                expected: 1,
                actual: 0,
            });
        }
        let lattice = body[0].lattice();
        for field in body.iter().chain(loops.iter()) {
            if field.lattice() != lattice {
                return Err(AlgebraError::ExtentMismatch {
                    left: lattice.extents().to_vec(),
                    right: field.lattice().extents().to_vec(),
                });
            }
        }
        Ok(Self { body, loops })
    }

    /// Number of spacetime directions.
    pub fn ndim(&self) -> usize {
        self.body.len()
    }

    /// The lattice the sub-amplitudes live on.
    pub fn lattice(&self) -> &Lattice {
        self.body[0].lattice()
    }

    /// The body sub-amplitude for direction `mu`.
    pub fn body(&self, mu: Direction) -> &PropagatorField {
        &self.body[mu.0]
    }

    /// The loop sub-amplitude for direction `mu`.
    pub fn loop_(&self, mu: Direction) -> &PropagatorField {
        &self.loops[mu.0]
    }
}

/// Build `body[mu]` and `loop[mu]` for every direction.
///
/// The body is the fixed right-multiplication chain
/// `q3 · γ5 · q1Snk · adj(q2) · γ5 · γL[mu]`; the sink-fixed matrix
/// `q1_snk` broadcasts uniformly across sites. The mu-independent
/// prefix is evaluated once, then each direction appends its `γL[mu]`.
/// The loop is `q4 · γL[mu]`.
///
/// Errors propagate from the algebra layer: mismatched extents between
/// `q2`/`q3`/`q4`, or a gamma table whose direction count differs from
/// the lattice dimensionality.
pub fn build_sub_amplitudes(
    q2: &PropagatorField,
    q3: &PropagatorField,
    q4: &PropagatorField,
    q1_snk: &SpinColorMatrix,
    gammas: &GammaTable,
) -> Result<SubAmplitudes, AlgebraError> {
    let lattice = q3.lattice();
    gammas.check_directions(lattice.ndim())?;
    if q4.lattice() != lattice {
        return Err(AlgebraError::ExtentMismatch {
            left: lattice.extents().to_vec(),
            right: q4.lattice().extents().to_vec(),
        });
    }

    let g5 = gamma5();
    let prefix = q3
        .mul_matrix(&g5)
        .mul_matrix(q1_snk)
        .mul_field(&q2.adjoint())?
        .mul_matrix(&g5);

    let ndim = lattice.ndim();
    let mut body = Vec::with_capacity(ndim);
    let mut loops = Vec::with_capacity(ndim);
    for mu in 0..ndim {
        let insertion = gammas.left(Direction(mu));
        body.push(prefix.mul_matrix(insertion));
        loops.push(q4.mul_matrix(insertion));
    }
    Ok(SubAmplitudes { body, loops })
}
