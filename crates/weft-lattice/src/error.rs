//! Error types for lattice construction and coordinate queries.

use std::fmt;

/// Errors arising from lattice construction or time-coordinate checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// Attempted to construct a lattice with no dimensions or with a
    /// zero extent in some dimension.
    EmptyLattice,
    /// A dimension extent exceeds the supported maximum.
    ExtentTooLarge {
        /// Index of the offending dimension.
        dim: usize,
        /// The requested extent.
        value: u32,
        /// The maximum supported extent.
        max: u32,
    },
    /// The product of the extents does not fit a `usize` site index.
    VolumeOverflow,
    /// A time coordinate is outside the lattice's time range.
    TimeOutOfRange {
        /// The requested time coordinate.
        t: u32,
        /// The lattice's time extent (valid range is `[0, extent)`).
        extent: u32,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLattice => {
                write!(f, "lattice must have at least one dimension of nonzero extent")
            }
            Self::ExtentTooLarge { dim, value, max } => {
                write!(f, "extent {value} of dimension {dim} exceeds maximum {max}")
            }
            Self::VolumeOverflow => {
                write!(f, "lattice volume overflows the addressable site index range")
            }
            Self::TimeOutOfRange { t, extent } => {
                write!(f, "time coordinate {t} outside valid range [0, {extent})")
            }
        }
    }
}

impl std::error::Error for LatticeError {}
