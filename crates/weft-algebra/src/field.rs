//! Lattice-wide field types and the algebra operations over them.
//!
//! All field-wide operations iterate sites in canonical (time-major)
//! order, so repeated runs on the same inputs reduce in the same order
//! and produce bit-identical results.

use crate::matrix::SpinColorMatrix;
use weft_core::{AlgebraError, Complex64};
use weft_lattice::Lattice;

fn check_extents(a: &Lattice, b: &Lattice) -> Result<(), AlgebraError> {
    if a == b {
        Ok(())
    } else {
        Err(AlgebraError::ExtentMismatch {
            left: a.extents().to_vec(),
            right: b.extents().to_vec(),
        })
    }
}

/// A quark propagator field: one spin-color matrix per lattice site.
#[derive(Clone, Debug, PartialEq)]
pub struct PropagatorField {
    lattice: Lattice,
    sites: Vec<SpinColorMatrix>,
}

impl PropagatorField {
    /// A field holding the same matrix at every site.
    pub fn filled(lattice: Lattice, value: SpinColorMatrix) -> Self {
        let volume = lattice.volume();
        Self {
            lattice,
            sites: vec![value; volume],
        }
    }

    /// The all-zero field.
    pub fn zeros(lattice: Lattice) -> Self {
        Self::filled(lattice, SpinColorMatrix::zero())
    }

    /// Build a field from per-site matrices in canonical site order.
    ///
    /// Returns `Err(AlgebraError::SiteCount)` if the buffer length does
    /// not match the lattice volume.
    pub fn from_sites(lattice: Lattice, sites: Vec<SpinColorMatrix>) -> Result<Self, AlgebraError> {
        if sites.len() != lattice.volume() {
            return Err(AlgebraError::SiteCount {
                expected: lattice.volume(),
                actual: sites.len(),
            });
        }
        Ok(Self { lattice, sites })
    }

    /// The lattice this field lives on.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The per-site matrices in canonical site order.
    pub fn sites(&self) -> &[SpinColorMatrix] {
        &self.sites
    }

    /// The matrix at canonical site index `i`.
    pub fn site(&self, i: usize) -> &SpinColorMatrix {
        &self.sites[i]
    }

    /// Mutable access to the matrix at canonical site index `i`.
    pub fn site_mut(&mut self, i: usize) -> &mut SpinColorMatrix {
        &mut self.sites[i]
    }

    /// Pointwise matrix product `self(x) · rhs(x)`.
    ///
    /// Fails with `ExtentMismatch` if the operands live on different
    /// lattices.
    pub fn mul_field(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        check_extents(&self.lattice, &rhs.lattice)?;
        let sites = self
            .sites
            .iter()
            .zip(rhs.sites.iter())
            .map(|(a, b)| a.mul(b))
            .collect();
        Ok(Self {
            lattice: self.lattice.clone(),
            sites,
        })
    }

    /// Right-multiply every site by a fixed matrix (`self(x) · m`).
    ///
    /// Used for gamma insertions and the broadcast of a sink-fixed
    /// propagator value.
    pub fn mul_matrix(&self, m: &SpinColorMatrix) -> Self {
        Self {
            lattice: self.lattice.clone(),
            sites: self.sites.iter().map(|a| a.mul(m)).collect(),
        }
    }

    /// Per-site conjugate transpose.
    pub fn adjoint(&self) -> Self {
        Self {
            lattice: self.lattice.clone(),
            sites: self.sites.iter().map(SpinColorMatrix::adjoint).collect(),
        }
    }

    /// Per-site trace, reducing to a complex scalar field.
    pub fn trace(&self) -> ComplexField {
        ComplexField {
            lattice: self.lattice.clone(),
            values: self.sites.iter().map(SpinColorMatrix::trace).collect(),
        }
    }

    /// Sum the field over each timeslice, producing one matrix per
    /// global time coordinate.
    ///
    /// This is how a sink-fixed propagator is prepared from a (sink
    /// smeared) propagator field.
    pub fn slice_sum(&self) -> SlicedPropagator {
        let mut slices = Vec::with_capacity(self.lattice.time_extent() as usize);
        for t in 0..self.lattice.time_extent() {
            let range = self
                .lattice
                .timeslice_range(t)
                .expect("t < time_extent by construction");
            let mut acc = SpinColorMatrix::zero();
            for site in &self.sites[range] {
                acc = &acc + site;
            }
            slices.push(acc);
        }
        SlicedPropagator { slices }
    }
}

/// A complex scalar field: one complex value per lattice site.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexField {
    lattice: Lattice,
    values: Vec<Complex64>,
}

impl ComplexField {
    /// The all-zero field.
    pub fn zeros(lattice: Lattice) -> Self {
        let volume = lattice.volume();
        Self {
            lattice,
            values: vec![Complex64::ZERO; volume],
        }
    }

    /// Build a field from per-site values in canonical site order.
    ///
    /// Returns `Err(AlgebraError::SiteCount)` on a length mismatch.
    pub fn from_values(lattice: Lattice, values: Vec<Complex64>) -> Result<Self, AlgebraError> {
        if values.len() != lattice.volume() {
            return Err(AlgebraError::SiteCount {
                expected: lattice.volume(),
                actual: values.len(),
            });
        }
        Ok(Self { lattice, values })
    }

    /// The lattice this field lives on.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The per-site values in canonical site order.
    pub fn values(&self) -> &[Complex64] {
        &self.values
    }

    /// Pointwise product `self(x) · rhs(x)`.
    pub fn mul_pointwise(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        check_extents(&self.lattice, &rhs.lattice)?;
        let values = self
            .values
            .iter()
            .zip(rhs.values.iter())
            .map(|(&a, &b)| a * b)
            .collect();
        Ok(Self {
            lattice: self.lattice.clone(),
            values,
        })
    }

    /// Pointwise accumulation `self(x) += rhs(x)`.
    pub fn add_assign_field(&mut self, rhs: &Self) -> Result<(), AlgebraError> {
        check_extents(&self.lattice, &rhs.lattice)?;
        for (a, &b) in self.values.iter_mut().zip(rhs.values.iter()) {
            *a += b;
        }
        Ok(())
    }

    /// Sum the field over each timeslice.
    ///
    /// Entry `t` of the result is the sum over every site whose time
    /// coordinate is `t`, in ascending canonical site order. The result
    /// length equals the lattice's time extent.
    pub fn timeslice_sums(&self) -> Vec<Complex64> {
        let sv = self.lattice.spatial_volume();
        self.values
            .chunks_exact(sv)
            .map(|slice| slice.iter().copied().sum())
            .collect()
    }
}

/// A propagator restricted to single time coordinates: one spin-color
/// matrix per timeslice.
///
/// Produced by [`PropagatorField::slice_sum`] on a sink smeared
/// propagator; consumed by the contraction pipeline, which picks the
/// matrix at the requested sink time.
#[derive(Clone, Debug, PartialEq)]
pub struct SlicedPropagator {
    slices: Vec<SpinColorMatrix>,
}

impl SlicedPropagator {
    /// Build from per-timeslice matrices, index = time coordinate.
    pub fn new(slices: Vec<SpinColorMatrix>) -> Self {
        Self { slices }
    }

    /// Number of timeslices.
    pub fn time_extent(&self) -> u32 {
        self.slices.len() as u32
    }

    /// The matrix at time coordinate `t`, or `None` if out of range.
    pub fn at(&self, t: u32) -> Option<&SpinColorMatrix> {
        self.slices.get(t as usize)
    }
}
