//! The two diagram contractions over shared sub-amplitudes.
//!
//! Both take the same [`SubAmplitudes`] — the expensive per-direction
//! matrix products are computed once and shared, so the Eye diagram's
//! dependence on the Saucer's intermediates is an explicit input
//! rather than hidden state. Direction sums run ascending
//! `0..ndim`; floating-point addition is not associative, so the
//! fixed order keeps results reproducible.

use crate::builder::SubAmplitudes;
use weft_algebra::ComplexField;
use weft_core::{AlgebraError, Direction};

/// The connected (Saucer) diagram scalar field:
/// `S(x) = Σ_mu trace(body[mu](x) · loop[mu](x))`.
pub fn saucer(subs: &SubAmplitudes) -> Result<ComplexField, AlgebraError> {
    let mut acc = ComplexField::zeros(subs.lattice().clone());
    for mu in 0..subs.ndim() {
        let mu = Direction(mu);
        let product = subs.body(mu).mul_field(subs.loop_(mu))?;
        acc.add_assign_field(&product.trace())?;
    }
    Ok(acc)
}

/// The disconnected-trace (Eye) diagram scalar field:
/// `E(x) = Σ_mu trace(body[mu](x)) · trace(loop[mu](x))`.
///
/// Reuses the Saucer's per-direction body/loop tensors; only the
/// per-direction traces and their pointwise product are new work.
pub fn eye(subs: &SubAmplitudes) -> Result<ComplexField, AlgebraError> {
    let mut acc = ComplexField::zeros(subs.lattice().clone());
    for mu in 0..subs.ndim() {
        let mu = Direction(mu);
        let body_trace = subs.body(mu).trace();
        let loop_trace = subs.loop_(mu).trace();
        acc.add_assign_field(&body_trace.mul_pointwise(&loop_trace)?)?;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_sub_amplitudes;
    use proptest::prelude::*;
    use weft_algebra::{GammaTable, PropagatorField, SpinColorMatrix, DIM};
    use weft_core::Complex64;
    use weft_lattice::Lattice;

    fn identity_subs(ndim_extents: &[u32]) -> SubAmplitudes {
        let lattice = Lattice::new(ndim_extents).unwrap();
        let q = PropagatorField::filled(lattice.clone(), SpinColorMatrix::identity());
        let table =
            GammaTable::from_matrices(vec![SpinColorMatrix::identity(); lattice.ndim()]);
        build_sub_amplitudes(&q, &q, &q, &SpinColorMatrix::identity(), &table).unwrap()
    }

    #[test]
    fn saucer_of_identity_is_ndim_times_trace() {
        let subs = identity_subs(&[2, 2, 2, 4]);
        let field = saucer(&subs).unwrap();
        let expected = Complex64::real(4.0 * DIM as f64);
        assert!(field.values().iter().all(|&v| v == expected));
    }

    #[test]
    fn eye_of_identity_is_ndim_times_trace_squared() {
        let subs = identity_subs(&[2, 2, 2, 4]);
        let field = eye(&subs).unwrap();
        let expected = Complex64::real(4.0 * (DIM * DIM) as f64);
        assert!(field.values().iter().all(|&v| v == expected));
    }

    #[test]
    fn single_direction_table_contributes_exactly_one_term() {
        // All insertions zero except direction 1: both sums collapse to
        // the mu = 1 contribution.
        let lattice = Lattice::new(&[2, 2, 4]).unwrap();
        let q = PropagatorField::filled(lattice.clone(), SpinColorMatrix::identity());
        let mut matrices = vec![SpinColorMatrix::zero(); lattice.ndim()];
        matrices[1] = SpinColorMatrix::identity();
        let table = GammaTable::from_matrices(matrices);
        let subs =
            build_sub_amplitudes(&q, &q, &q, &SpinColorMatrix::identity(), &table).unwrap();

        let s = saucer(&subs).unwrap();
        let e = eye(&subs).unwrap();
        assert!(s.values().iter().all(|&v| v == Complex64::real(DIM as f64)));
        assert!(e
            .values()
            .iter()
            .all(|&v| v == Complex64::real((DIM * DIM) as f64)));
    }

    #[test]
    fn saucer_trace_of_product_matches_direct_per_direction_sum() {
        let subs = identity_subs(&[2, 3]);
        let field = saucer(&subs).unwrap();
        // Recompute site 0 by summing per-direction traces directly.
        let mut expected = Complex64::ZERO;
        for mu in 0..subs.ndim() {
            let mu = Direction(mu);
            expected += subs.body(mu).site(0).mul(subs.loop_(mu).site(0)).trace();
        }
        assert_eq!(field.values()[0], expected);
    }

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let subs = identity_subs(&[2, 2, 4]);
        assert_eq!(saucer(&subs).unwrap(), saucer(&subs).unwrap());
        assert_eq!(eye(&subs).unwrap(), eye(&subs).unwrap());
    }

    fn arb_diag_matrix() -> impl Strategy<Value = SpinColorMatrix> {
        prop::collection::vec((-1.0..1.0f64, -1.0..1.0f64), DIM).prop_map(|diag| {
            let mut m = SpinColorMatrix::zero();
            for (i, (re, im)) in diag.into_iter().enumerate() {
                m.set(i, i, Complex64::new(re, im));
            }
            m
        })
    }

    fn arb_diag_field() -> impl Strategy<Value = PropagatorField> {
        prop::collection::vec(arb_diag_matrix(), 4).prop_map(|sites| {
            PropagatorField::from_sites(Lattice::new(&[2, 2]).unwrap(), sites).unwrap()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        // Diagonal matrices make both sums scalar: trace(b·l) is the
        // dot product of the diagonals, so each site value can be
        // recomputed without the matrix machinery.
        #[test]
        fn diagram_sums_match_diagonal_recomputation(
            bodies in prop::collection::vec(arb_diag_field(), 2),
            loops in prop::collection::vec(arb_diag_field(), 2),
        ) {
            let subs = SubAmplitudes::new(bodies.clone(), loops.clone()).unwrap();
            let s = saucer(&subs).unwrap();
            let e = eye(&subs).unwrap();
            for site in 0..4 {
                let mut expected_s = Complex64::ZERO;
                let mut expected_e = Complex64::ZERO;
                for mu in 0..2 {
                    let b = bodies[mu].site(site);
                    let l = loops[mu].site(site);
                    let mut dot = Complex64::ZERO;
                    let mut b_trace = Complex64::ZERO;
                    let mut l_trace = Complex64::ZERO;
                    for i in 0..DIM {
                        dot += b.get(i, i) * l.get(i, i);
                        b_trace += b.get(i, i);
                        l_trace += l.get(i, i);
                    }
                    expected_s += dot;
                    expected_e += b_trace * l_trace;
                }
                prop_assert!((s.values()[site] - expected_s).abs() < 1e-9);
                prop_assert!((e.values()[site] - expected_e).abs() < 1e-9);
            }
        }
    }
}
