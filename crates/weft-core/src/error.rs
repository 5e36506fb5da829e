//! Error types for the Weft contraction engine.
//!
//! Organized by subsystem: algebra (field-wide matrix operations) and
//! contraction (the end-to-end pipeline). Lattice construction errors
//! live in `weft-lattice`.

use std::error::Error;
use std::fmt;

/// Errors from field-wide algebra operations.
///
/// Returned by pointwise products, trace reductions, and gamma table
/// construction. Always fatal: callers propagate these unmodified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlgebraError {
    /// Two fields with different lattice extents were combined.
    ExtentMismatch {
        /// Extents of the left operand.
        left: Vec<u32>,
        /// Extents of the right operand.
        right: Vec<u32>,
    },
    /// A gamma table does not provide one matrix per lattice direction.
    DirectionCount {
        /// Number of directions the lattice has.
        expected: usize,
        /// Number of matrices the table provides.
        actual: usize,
    },
    /// The standard gamma table only covers lattices of up to four
    /// spacetime dimensions.
    UnsupportedDimensions {
        /// The requested number of directions.
        ndim: usize,
    },
    /// A field was constructed from a site buffer of the wrong length.
    SiteCount {
        /// Number of sites the lattice has.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExtentMismatch { left, right } => {
                write!(f, "lattice extent mismatch: {left:?} vs {right:?}")
            }
            Self::DirectionCount { expected, actual } => {
                write!(
                    f,
                    "gamma table has {actual} direction(s), lattice needs {expected}"
                )
            }
            Self::UnsupportedDimensions { ndim } => {
                write!(f, "standard gamma table supports at most 4 directions, got {ndim}")
            }
            Self::SiteCount { expected, actual } => {
                write!(f, "expected {expected} site value(s), got {actual}")
            }
        }
    }
}

impl Error for AlgebraError {}

/// Errors from the contraction pipeline.
///
/// Any variant aborts the whole run before anything is emitted; the
/// pipeline never produces partial results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContractionError {
    /// A named propagator could not be resolved from the source.
    MissingPropagator {
        /// The unresolved name.
        name: String,
    },
    /// The requested sink time lies outside the lattice's time range.
    SinkTimeOutOfRange {
        /// The requested time coordinate.
        t: u32,
        /// The lattice's time extent (valid range is `[0, extent)`).
        extent: u32,
    },
    /// An algebra operation failed mid-pipeline.
    Algebra(AlgebraError),
    /// The result sink refused the emitted correlators.
    SinkRejected {
        /// Description from the sink.
        reason: String,
    },
}

impl fmt::Display for ContractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPropagator { name } => {
                write!(f, "propagator '{name}' not found")
            }
            Self::SinkTimeOutOfRange { t, extent } => {
                write!(f, "sink time {t} outside valid range [0, {extent})")
            }
            Self::Algebra(err) => write!(f, "algebra error: {err}"),
            Self::SinkRejected { reason } => write!(f, "result sink rejected output: {reason}"),
        }
    }
}

impl Error for ContractionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algebra(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AlgebraError> for ContractionError {
    fn from(err: AlgebraError) -> Self {
        Self::Algebra(err)
    }
}
