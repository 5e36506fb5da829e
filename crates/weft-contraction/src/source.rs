//! The propagator source seam and the in-memory catalog.

use indexmap::IndexMap;
use weft_algebra::{PropagatorField, SlicedPropagator};

/// Resolves propagators by name for a contraction run.
///
/// The core never constructs propagators; an upstream pipeline
/// produces them and a `PropagatorSource` implementation hands them
/// out. Lookups return `None` for absent names; the pipeline maps that
/// to a fatal missing-input error before any computation starts.
pub trait PropagatorSource {
    /// A full lattice-wide propagator field.
    fn propagator(&self, name: &str) -> Option<&PropagatorField>;

    /// A time-sliced propagator (one matrix per timeslice).
    fn sliced(&self, name: &str) -> Option<&SlicedPropagator>;
}

/// In-memory propagator catalog.
///
/// Insertion-ordered (`IndexMap`) so iteration and debug output are
/// deterministic across runs.
#[derive(Debug, Default)]
pub struct FieldCatalog {
    fields: IndexMap<String, PropagatorField>,
    sliced: IndexMap<String, SlicedPropagator>,
}

impl FieldCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a lattice-wide propagator under `name`, replacing any
    /// previous entry with that name.
    pub fn insert_propagator(&mut self, name: impl Into<String>, field: PropagatorField) {
        self.fields.insert(name.into(), field);
    }

    /// Register a time-sliced propagator under `name`, replacing any
    /// previous entry with that name.
    pub fn insert_sliced(&mut self, name: impl Into<String>, sliced: SlicedPropagator) {
        self.sliced.insert(name.into(), sliced);
    }

    /// Names of all registered lattice-wide propagators, in insertion
    /// order.
    pub fn propagator_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Names of all registered sliced propagators, in insertion order.
    pub fn sliced_names(&self) -> impl Iterator<Item = &str> {
        self.sliced.keys().map(String::as_str)
    }
}

impl PropagatorSource for FieldCatalog {
    fn propagator(&self, name: &str) -> Option<&PropagatorField> {
        self.fields.get(name)
    }

    fn sliced(&self, name: &str) -> Option<&SlicedPropagator> {
        self.sliced.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_algebra::SpinColorMatrix;
    use weft_lattice::Lattice;

    #[test]
    fn lookup_by_name() {
        let lattice = Lattice::new(&[2, 4]).unwrap();
        let mut catalog = FieldCatalog::new();
        catalog.insert_propagator("light", PropagatorField::zeros(lattice));
        catalog.insert_sliced(
            "light_snk",
            SlicedPropagator::new(vec![SpinColorMatrix::zero(); 4]),
        );

        assert!(catalog.propagator("light").is_some());
        assert!(catalog.propagator("strange").is_none());
        assert!(catalog.sliced("light_snk").is_some());
        assert!(catalog.sliced("light").is_none());
    }

    #[test]
    fn names_iterate_in_insertion_order() {
        let lattice = Lattice::new(&[2, 4]).unwrap();
        let mut catalog = FieldCatalog::new();
        catalog.insert_propagator("c", PropagatorField::zeros(lattice.clone()));
        catalog.insert_propagator("a", PropagatorField::zeros(lattice.clone()));
        catalog.insert_propagator("b", PropagatorField::zeros(lattice));
        let names: Vec<_> = catalog.propagator_names().collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }
}
