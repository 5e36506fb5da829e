//! Reusable propagator and gamma-table fixtures.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use weft_algebra::{GammaTable, PropagatorField, SlicedPropagator, SpinColorMatrix, DIM};
use weft_core::Complex64;
use weft_lattice::Lattice;

/// A field holding the same matrix at every site.
pub fn constant_propagator(lattice: &Lattice, value: SpinColorMatrix) -> PropagatorField {
    PropagatorField::filled(lattice.clone(), value)
}

/// A field holding the identity matrix at every site.
pub fn identity_propagator(lattice: &Lattice) -> PropagatorField {
    constant_propagator(lattice, SpinColorMatrix::identity())
}

fn random_matrix(rng: &mut ChaCha8Rng) -> SpinColorMatrix {
    let mut m = SpinColorMatrix::zero();
    for i in 0..DIM {
        for j in 0..DIM {
            let re = rng.random::<f64>() * 2.0 - 1.0;
            let im = rng.random::<f64>() * 2.0 - 1.0;
            m.set(i, j, Complex64::new(re, im));
        }
    }
    m
}

/// A field of seeded random matrices, elements uniform in `[-1, 1)`.
///
/// ChaCha8-seeded: the same `seed` on the same lattice always yields
/// the same field, so tests comparing two computation paths can share
/// inputs without sharing storage.
pub fn random_propagator(lattice: &Lattice, seed: u64) -> PropagatorField {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let sites = (0..lattice.volume()).map(|_| random_matrix(&mut rng)).collect();
    PropagatorField::from_sites(lattice.clone(), sites)
        .expect("site count matches lattice volume by construction")
}

/// A seeded random time-sliced propagator with one matrix per
/// timeslice of `lattice`.
pub fn random_sliced(lattice: &Lattice, seed: u64) -> SlicedPropagator {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let slices = (0..lattice.time_extent())
        .map(|_| random_matrix(&mut rng))
        .collect();
    SlicedPropagator::new(slices)
}

/// A gamma table with the identity insertion in every direction.
pub fn identity_table(ndim: usize) -> GammaTable {
    GammaTable::from_matrices(vec![SpinColorMatrix::identity(); ndim])
}

/// A gamma table that is zero everywhere except direction `mu`, where
/// it is the identity.
///
/// With this table both diagram sums collapse to the single `mu`
/// contribution, which is how direction-count invariance is verified.
pub fn single_direction_table(ndim: usize, mu: usize) -> GammaTable {
    let mut matrices = vec![SpinColorMatrix::zero(); ndim];
    matrices[mu] = SpinColorMatrix::identity();
    GammaTable::from_matrices(matrices)
}
