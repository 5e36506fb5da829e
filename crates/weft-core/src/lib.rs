//! Core types for the Weft contraction engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the complex scalar used throughout the workspace, the direction and
//! diagram label types, and the shared error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod complex;
mod error;
mod id;

pub use complex::Complex64;
pub use error::{AlgebraError, ContractionError};
pub use id::{Direction, DiagramLabel};
