//! Euclidean Dirac gamma matrices and the left-handed insertion table.
//!
//! Uses the chiral basis with `γ5 = diag(1, 1, -1, -1)` in spin space.
//! Direction order is X, Y, Z, T; all matrices are returned embedded in
//! spin-color form (`spin ⊗ 1_color`).

use crate::matrix::{SpinColorMatrix, NS};
use weft_core::{AlgebraError, Complex64, Direction};

const ZERO: Complex64 = Complex64::ZERO;
const ONE: Complex64 = Complex64::ONE;
const M_ONE: Complex64 = Complex64::new(-1.0, 0.0);
const I: Complex64 = Complex64::I;
const M_I: Complex64 = Complex64::new(0.0, -1.0);

/// Spin-space tables for `γx`, `γy`, `γz`, `γt` in the chiral basis.
const GAMMA_SPIN: [[[Complex64; NS]; NS]; 4] = [
    // γx
    [
        [ZERO, ZERO, ZERO, I],
        [ZERO, ZERO, I, ZERO],
        [ZERO, M_I, ZERO, ZERO],
        [M_I, ZERO, ZERO, ZERO],
    ],
    // γy
    [
        [ZERO, ZERO, ZERO, M_ONE],
        [ZERO, ZERO, ONE, ZERO],
        [ZERO, ONE, ZERO, ZERO],
        [M_ONE, ZERO, ZERO, ZERO],
    ],
    // γz
    [
        [ZERO, ZERO, I, ZERO],
        [ZERO, ZERO, ZERO, M_I],
        [M_I, ZERO, ZERO, ZERO],
        [ZERO, I, ZERO, ZERO],
    ],
    // γt
    [
        [ZERO, ZERO, ONE, ZERO],
        [ZERO, ZERO, ZERO, ONE],
        [ONE, ZERO, ZERO, ZERO],
        [ZERO, ONE, ZERO, ZERO],
    ],
];

/// Spin-space table for `γ5`.
const GAMMA5_SPIN: [[Complex64; NS]; NS] = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, M_ONE, ZERO],
    [ZERO, ZERO, ZERO, M_ONE],
];

/// The gamma matrix for direction `mu` (order X, Y, Z, T).
///
/// Returns `Err(AlgebraError::UnsupportedDimensions)` for `mu >= 4`.
pub fn gamma(mu: usize) -> Result<SpinColorMatrix, AlgebraError> {
    GAMMA_SPIN
        .get(mu)
        .map(SpinColorMatrix::from_spin)
        .ok_or(AlgebraError::UnsupportedDimensions { ndim: mu + 1 })
}

/// The chirality matrix `γ5`.
pub fn gamma5() -> SpinColorMatrix {
    SpinColorMatrix::from_spin(&GAMMA5_SPIN)
}

/// The left-handed projected insertion `γL[mu] = γ_mu · (1 − γ5)`.
pub fn gamma_left(mu: usize) -> Result<SpinColorMatrix, AlgebraError> {
    let projector = &SpinColorMatrix::identity() - &gamma5();
    Ok(&gamma(mu)? * &projector)
}

/// One left-handed insertion matrix per spacetime direction.
///
/// The standard table ([`GammaTable::left_handed`]) holds `γL[mu]` for
/// `mu` in `[0, ndim)`; synthetic tables
/// ([`GammaTable::from_matrices`]) let tests substitute arbitrary
/// insertions, including tables where only one direction is non-zero.
#[derive(Clone, Debug, PartialEq)]
pub struct GammaTable {
    left: Vec<SpinColorMatrix>,
}

impl GammaTable {
    /// Build the standard left-handed table for an `ndim`-dimensional
    /// lattice.
    ///
    /// Returns `Err(AlgebraError::UnsupportedDimensions)` when
    /// `ndim == 0` or `ndim > 4`.
    pub fn left_handed(ndim: usize) -> Result<Self, AlgebraError> {
        if ndim == 0 || ndim > 4 {
            return Err(AlgebraError::UnsupportedDimensions { ndim });
        }
        let left = (0..ndim).map(gamma_left).collect::<Result<_, _>>()?;
        Ok(Self { left })
    }

    /// Build a table from explicit per-direction matrices.
    pub fn from_matrices(left: Vec<SpinColorMatrix>) -> Self {
        Self { left }
    }

    /// Number of directions this table covers.
    pub fn ndim(&self) -> usize {
        self.left.len()
    }

    /// The insertion matrix for direction `mu`.
    ///
    /// # Panics
    ///
    /// Panics if `mu` is outside `[0, ndim)`; callers validate the
    /// direction count against the lattice first via
    /// [`GammaTable::check_directions`].
    pub fn left(&self, mu: Direction) -> &SpinColorMatrix {
        &self.left[mu.0]
    }

    /// Check that the table covers exactly `ndim` directions.
    pub fn check_directions(&self, ndim: usize) -> Result<(), AlgebraError> {
        if self.left.len() == ndim {
            Ok(())
        } else {
            Err(AlgebraError::DirectionCount {
                expected: ndim,
                actual: self.left.len(),
            })
        }
    }
}
