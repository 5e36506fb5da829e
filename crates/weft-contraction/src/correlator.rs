//! Labeled time-series correlators extracted from diagram fields.

use weft_algebra::ComplexField;
use weft_core::{Complex64, DiagramLabel};

/// A diagram correlator: one complex value per global time coordinate,
/// tagged with its diagram label and the four quark names it was built
/// from.
#[derive(Clone, Debug, PartialEq)]
pub struct Correlator {
    label: DiagramLabel,
    quarks: [String; 4],
    values: Vec<Complex64>,
}

impl Correlator {
    /// Reduce a diagram scalar field over the spatial volume at each
    /// time coordinate and attach label and provenance.
    pub fn from_field(label: DiagramLabel, quarks: [String; 4], field: &ComplexField) -> Self {
        Self {
            label,
            quarks,
            values: field.timeslice_sums(),
        }
    }

    /// Which diagram this correlator belongs to.
    pub fn label(&self) -> DiagramLabel {
        self.label
    }

    /// Names of the four input propagators, in `q1..q4` order.
    pub fn quarks(&self) -> &[String; 4] {
        &self.quarks
    }

    /// The correlator values, index = time coordinate.
    pub fn values(&self) -> &[Complex64] {
        &self.values
    }

    /// Number of time coordinates.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if the correlator has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_lattice::Lattice;

    fn quarks() -> [String; 4] {
        ["q1", "q2", "q3", "q4"].map(String::from)
    }

    #[test]
    fn zero_field_gives_all_zero_correlator_of_time_extent_length() {
        let lattice = Lattice::new(&[4, 4, 4, 8]).unwrap();
        let field = ComplexField::zeros(lattice);
        let corr = Correlator::from_field(DiagramLabel::Saucer, quarks(), &field);
        assert_eq!(corr.len(), 8);
        assert!(corr.values().iter().all(|&v| v == Complex64::ZERO));
        assert_eq!(corr.label(), DiagramLabel::Saucer);
    }

    #[test]
    fn provenance_is_preserved() {
        let lattice = Lattice::new(&[2, 2]).unwrap();
        let field = ComplexField::zeros(lattice);
        let corr = Correlator::from_field(DiagramLabel::Eye, quarks(), &field);
        assert_eq!(corr.quarks()[0], "q1");
        assert_eq!(corr.quarks()[3], "q4");
    }

    #[test]
    fn constant_field_sums_spatial_volume_per_slice() {
        let lattice = Lattice::new(&[3, 2, 4]).unwrap();
        let field = ComplexField::from_values(
            lattice.clone(),
            vec![Complex64::real(1.0); lattice.volume()],
        )
        .unwrap();
        let corr = Correlator::from_field(DiagramLabel::Saucer, quarks(), &field);
        let sv = lattice.spatial_volume() as f64;
        assert!(corr.values().iter().all(|&v| v == Complex64::real(sv)));
    }
}
