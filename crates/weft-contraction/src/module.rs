//! The end-to-end weak-Hamiltonian Eye-type contraction module.

use crate::builder::build_sub_amplitudes;
use crate::correlator::Correlator;
use crate::diagram::{eye, saucer};
use crate::sink::ResultSink;
use crate::source::PropagatorSource;
use weft_algebra::GammaTable;
use weft_core::{ContractionError, DiagramLabel};

/// Parameters of one contraction run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeakHamiltonianEyePar {
    /// Name of the first quark leg, resolved as a time-sliced
    /// propagator.
    ///
    /// Physics precondition on the caller: this propagator must be
    /// sink smeared. The core cannot verify smearing and does not try.
    pub q1: String,
    /// Name of the second quark leg (enters through its adjoint).
    pub q2: String,
    /// Name of the third quark leg.
    pub q3: String,
    /// Name of the fourth quark leg (the loop).
    pub q4: String,
    /// Sink time coordinate at which `q1` is fixed.
    pub t_snk: u32,
    /// Output identifier the results are emitted under.
    pub output: String,
}

/// Computes the Saucer and Eye diagram correlators for one set of
/// quark propagators.
///
/// One invocation runs the linear pipeline of [`execute`]: resolve the
/// four inputs, fix `q1` at the sink time, build the per-direction
/// sub-amplitudes, contract both diagrams, reduce to correlators, and
/// emit both in a single call. Any failure aborts the run with nothing
/// emitted.
///
/// [`execute`]: WeakHamiltonianEye::execute
#[derive(Clone, Debug)]
pub struct WeakHamiltonianEye {
    par: WeakHamiltonianEyePar,
    gammas: Option<GammaTable>,
}

impl WeakHamiltonianEye {
    /// Create a module with the standard left-handed gamma table.
    pub fn new(par: WeakHamiltonianEyePar) -> Self {
        Self { par, gammas: None }
    }

    /// Substitute an explicit gamma table for the standard one.
    ///
    /// The table must still provide one insertion per lattice
    /// direction; `execute` validates the count.
    pub fn with_gamma_table(mut self, gammas: GammaTable) -> Self {
        self.gammas = Some(gammas);
        self
    }

    /// The run parameters.
    pub fn par(&self) -> &WeakHamiltonianEyePar {
        &self.par
    }

    /// Names of the four input propagators this run depends on.
    pub fn inputs(&self) -> [&str; 4] {
        [&self.par.q1, &self.par.q2, &self.par.q3, &self.par.q4]
    }

    /// A one-line description of the run, suitable for caller-side
    /// logging. The core itself performs no I/O.
    pub fn describe(&self) -> String {
        format!(
            "weak-Hamiltonian Eye-type contractions '{}' using quarks '{}', '{}', '{}' and '{}' at sink time {}",
            self.par.output, self.par.q1, self.par.q2, self.par.q3, self.par.q4, self.par.t_snk
        )
    }

    /// Run the contraction pipeline.
    ///
    /// On success exactly two correlators — `HW_S` then `HW_E` — are
    /// emitted to `sink` under the configured output identifier. On
    /// failure nothing is emitted and the error identifies the failing
    /// stage.
    pub fn execute(
        &self,
        source: &dyn PropagatorSource,
        sink: &mut dyn ResultSink,
    ) -> Result<(), ContractionError> {
        let missing = |name: &str| ContractionError::MissingPropagator {
            name: name.to_owned(),
        };
        let q1 = source.sliced(&self.par.q1).ok_or_else(|| missing(&self.par.q1))?;
        let q2 = source
            .propagator(&self.par.q2)
            .ok_or_else(|| missing(&self.par.q2))?;
        let q3 = source
            .propagator(&self.par.q3)
            .ok_or_else(|| missing(&self.par.q3))?;
        let q4 = source
            .propagator(&self.par.q4)
            .ok_or_else(|| missing(&self.par.q4))?;

        let lattice = q3.lattice();
        lattice
            .check_time(self.par.t_snk)
            .map_err(|_| ContractionError::SinkTimeOutOfRange {
                t: self.par.t_snk,
                extent: lattice.time_extent(),
            })?;
        let q1_snk = q1
            .at(self.par.t_snk)
            .ok_or(ContractionError::SinkTimeOutOfRange {
                t: self.par.t_snk,
                extent: q1.time_extent(),
            })?;

        let gammas = match &self.gammas {
            Some(table) => table.clone(),
            None => GammaTable::left_handed(lattice.ndim())?,
        };

        let subs = build_sub_amplitudes(q2, q3, q4, q1_snk, &gammas)?;
        let quarks = self.inputs().map(str::to_owned);

        let saucer_field = saucer(&subs)?;
        let saucer_corr =
            Correlator::from_field(DiagramLabel::Saucer, quarks.clone(), &saucer_field);

        let eye_field = eye(&subs)?;
        let eye_corr = Correlator::from_field(DiagramLabel::Eye, quarks, &eye_field);

        sink.emit(&self.par.output, &[saucer_corr, eye_corr])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use crate::source::FieldCatalog;
    use weft_algebra::{PropagatorField, SpinColorMatrix};
    use weft_lattice::Lattice;

    fn par(t_snk: u32) -> WeakHamiltonianEyePar {
        WeakHamiltonianEyePar {
            q1: "q1".into(),
            q2: "q2".into(),
            q3: "q3".into(),
            q4: "q4".into(),
            t_snk,
            output: "eye_run".into(),
        }
    }

    fn identity_catalog(extents: &[u32]) -> FieldCatalog {
        let lattice = Lattice::new(extents).unwrap();
        let field = PropagatorField::filled(lattice, SpinColorMatrix::identity());
        let mut catalog = FieldCatalog::new();
        catalog.insert_sliced("q1", field.slice_sum());
        catalog.insert_propagator("q2", field.clone());
        catalog.insert_propagator("q3", field.clone());
        catalog.insert_propagator("q4", field);
        catalog
    }

    #[test]
    fn inputs_report_quark_names() {
        let module = WeakHamiltonianEye::new(par(0));
        assert_eq!(module.inputs(), ["q1", "q2", "q3", "q4"]);
    }

    #[test]
    fn describe_mentions_all_quarks_and_output() {
        let text = WeakHamiltonianEye::new(par(2)).describe();
        for needle in ["eye_run", "q1", "q2", "q3", "q4", "sink time 2"] {
            assert!(text.contains(needle), "missing '{needle}' in: {text}");
        }
    }

    #[test]
    fn missing_q3_aborts_before_emission() {
        let lattice = Lattice::new(&[2, 2, 4]).unwrap();
        let field = PropagatorField::filled(lattice, SpinColorMatrix::identity());
        let mut catalog = FieldCatalog::new();
        catalog.insert_sliced("q1", field.slice_sum());
        catalog.insert_propagator("q2", field.clone());
        catalog.insert_propagator("q4", field);

        let mut sink = MemorySink::new();
        let err = WeakHamiltonianEye::new(par(0))
            .execute(&catalog, &mut sink)
            .unwrap_err();
        assert_eq!(
            err,
            ContractionError::MissingPropagator { name: "q3".into() }
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn sink_time_one_past_end_aborts_before_emission() {
        let catalog = identity_catalog(&[2, 2, 4]);
        let mut sink = MemorySink::new();
        let err = WeakHamiltonianEye::new(par(4))
            .execute(&catalog, &mut sink)
            .unwrap_err();
        assert_eq!(err, ContractionError::SinkTimeOutOfRange { t: 4, extent: 4 });
        assert!(sink.is_empty());
    }

    #[test]
    fn successful_run_emits_saucer_then_eye() {
        let catalog = identity_catalog(&[2, 2, 4]);
        let mut sink = MemorySink::new();
        WeakHamiltonianEye::new(par(1))
            .execute(&catalog, &mut sink)
            .unwrap();

        let run = sink.run("eye_run").unwrap();
        assert_eq!(run.len(), 2);
        assert_eq!(run[0].label(), DiagramLabel::Saucer);
        assert_eq!(run[1].label(), DiagramLabel::Eye);
        assert_eq!(run[0].len(), 4);
        assert_eq!(run[1].len(), 4);
        assert_eq!(run[0].quarks(), &["q1", "q2", "q3", "q4"].map(String::from));
    }
}
