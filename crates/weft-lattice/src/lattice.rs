//! The [`Lattice`] geometry type.

use crate::error::LatticeError;
use smallvec::SmallVec;
use std::ops::Range;

/// Per-dimension extents of a lattice.
///
/// Uses `SmallVec<[u32; 4]>` to avoid heap allocation for the usual
/// four spacetime dimensions; higher-dimensional lattices spill to the
/// heap transparently.
pub type Extents = SmallVec<[u32; 4]>;

/// A discrete Euclidean spacetime volume.
///
/// The last dimension is the time axis; all earlier dimensions are
/// spatial. Sites are ordered time-major: site index
/// `t * spatial_volume + s`, where `s` ranges over the spatial volume
/// in lexicographic order. Each timeslice therefore occupies a
/// contiguous index range, which the correlator extraction relies on.
///
/// # Examples
///
/// ```
/// use weft_lattice::Lattice;
///
/// let lat = Lattice::new(&[4, 4, 4, 8]).unwrap();
/// assert_eq!(lat.ndim(), 4);
/// assert_eq!(lat.volume(), 512);
/// assert_eq!(lat.time_extent(), 8);
/// assert_eq!(lat.spatial_volume(), 64);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lattice {
    extents: Extents,
}

impl Lattice {
    /// Maximum extent per dimension: site indices use `usize` but
    /// coordinates must fit an `i32`.
    pub const MAX_EXTENT: u32 = i32::MAX as u32;

    /// Create a lattice from per-dimension extents, last axis = time.
    ///
    /// Returns `Err(LatticeError::EmptyLattice)` if `extents` is empty
    /// or any extent is zero, `Err(LatticeError::ExtentTooLarge)` if an
    /// extent exceeds [`Lattice::MAX_EXTENT`], and
    /// `Err(LatticeError::VolumeOverflow)` if the product of the
    /// extents does not fit a `usize` site index.
    pub fn new(extents: &[u32]) -> Result<Self, LatticeError> {
        if extents.is_empty() || extents.contains(&0) {
            return Err(LatticeError::EmptyLattice);
        }
        let mut volume = 1usize;
        for (dim, &value) in extents.iter().enumerate() {
            if value > Self::MAX_EXTENT {
                return Err(LatticeError::ExtentTooLarge {
                    dim,
                    value,
                    max: Self::MAX_EXTENT,
                });
            }
            volume = volume
                .checked_mul(value as usize)
                .ok_or(LatticeError::VolumeOverflow)?;
        }
        Ok(Self {
            extents: SmallVec::from_slice(extents),
        })
    }

    /// Number of spacetime dimensions.
    pub fn ndim(&self) -> usize {
        self.extents.len()
    }

    /// Per-dimension extents, last axis = time.
    pub fn extents(&self) -> &[u32] {
        &self.extents
    }

    /// Total number of lattice sites.
    pub fn volume(&self) -> usize {
        self.extents.iter().map(|&e| e as usize).product()
    }

    /// Extent of the time axis.
    pub fn time_extent(&self) -> u32 {
        *self.extents.last().expect("lattice has at least one dimension")
    }

    /// Number of sites per timeslice.
    ///
    /// For a one-dimensional lattice (time only) this is 1.
    pub fn spatial_volume(&self) -> usize {
        self.extents[..self.extents.len() - 1]
            .iter()
            .map(|&e| e as usize)
            .product()
    }

    /// Check that `t` is a valid time coordinate.
    pub fn check_time(&self, t: u32) -> Result<(), LatticeError> {
        let extent = self.time_extent();
        if t < extent {
            Ok(())
        } else {
            Err(LatticeError::TimeOutOfRange { t, extent })
        }
    }

    /// Canonical site-index range of timeslice `t`.
    ///
    /// Sites are stored time-major, so the slice is contiguous.
    pub fn timeslice_range(&self, t: u32) -> Result<Range<usize>, LatticeError> {
        self.check_time(t)?;
        let sv = self.spatial_volume();
        let start = t as usize * sv;
        Ok(start..start + sv)
    }

    /// Time coordinate of a canonical site index.
    ///
    /// Returns `None` if the index is out of range.
    pub fn time_of_site(&self, site: usize) -> Option<u32> {
        if site < self.volume() {
            Some((site / self.spatial_volume()) as u32)
        } else {
            None
        }
    }
}
