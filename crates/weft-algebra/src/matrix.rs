//! The dense per-site spin-color matrix.

use std::ops::{Add, Mul, Sub};
use weft_core::Complex64;

/// Number of spin components.
pub const NS: usize = 4;

/// Number of color components.
pub const NC: usize = 3;

/// Combined spin-color dimension of the per-site matrix.
pub const DIM: usize = NS * NC;

/// A dense `DIM × DIM` complex matrix over combined spin-color indices.
///
/// Row-major storage; row/column index `s * NC + c` for spin `s` and
/// color `c`. This is the per-site value of a propagator field and the
/// representation of gamma-matrix insertions (spin matrices embedded
/// with a color identity, see [`SpinColorMatrix::from_spin`]).
#[derive(Clone, Debug, PartialEq)]
pub struct SpinColorMatrix {
    m: [Complex64; DIM * DIM],
}

impl SpinColorMatrix {
    /// The zero matrix.
    pub fn zero() -> Self {
        Self {
            m: [Complex64::ZERO; DIM * DIM],
        }
    }

    /// The identity matrix.
    pub fn identity() -> Self {
        let mut out = Self::zero();
        for i in 0..DIM {
            out.m[i * DIM + i] = Complex64::ONE;
        }
        out
    }

    /// Embed a spin-space matrix as `spin ⊗ 1_color`.
    ///
    /// Gamma matrices act only on spin, so their spin-color form is
    /// block-diagonal in color: entry `((s1,c1),(s2,c2))` equals
    /// `spin[s1][s2]` when `c1 == c2` and zero otherwise.
    pub fn from_spin(spin: &[[Complex64; NS]; NS]) -> Self {
        let mut out = Self::zero();
        for s1 in 0..NS {
            for s2 in 0..NS {
                let v = spin[s1][s2];
                if v == Complex64::ZERO {
                    continue;
                }
                for c in 0..NC {
                    out.m[(s1 * NC + c) * DIM + (s2 * NC + c)] = v;
                }
            }
        }
        out
    }

    /// Element at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Complex64 {
        self.m[i * DIM + j]
    }

    /// Set the element at row `i`, column `j`.
    pub fn set(&mut self, i: usize, j: usize, value: Complex64) {
        self.m[i * DIM + j] = value;
    }

    /// Matrix product `self · rhs`.
    pub fn mul(&self, rhs: &Self) -> Self {
        let mut out = Self::zero();
        for i in 0..DIM {
            for k in 0..DIM {
                let a = self.m[i * DIM + k];
                if a == Complex64::ZERO {
                    continue;
                }
                for j in 0..DIM {
                    out.m[i * DIM + j] += a * rhs.m[k * DIM + j];
                }
            }
        }
        out
    }

    /// Conjugate transpose.
    pub fn adjoint(&self) -> Self {
        let mut out = Self::zero();
        for i in 0..DIM {
            for j in 0..DIM {
                out.m[j * DIM + i] = self.m[i * DIM + j].conj();
            }
        }
        out
    }

    /// Trace over combined spin-color indices.
    pub fn trace(&self) -> Complex64 {
        (0..DIM).map(|i| self.m[i * DIM + i]).sum()
    }

    /// Multiply every element by a complex scalar.
    pub fn scale(&self, k: Complex64) -> Self {
        let mut out = self.clone();
        for v in out.m.iter_mut() {
            *v = *v * k;
        }
        out
    }
}

impl Default for SpinColorMatrix {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for &SpinColorMatrix {
    type Output = SpinColorMatrix;

    fn add(self, rhs: Self) -> SpinColorMatrix {
        let mut out = self.clone();
        for (o, r) in out.m.iter_mut().zip(rhs.m.iter()) {
            *o += *r;
        }
        out
    }
}

impl Sub for &SpinColorMatrix {
    type Output = SpinColorMatrix;

    fn sub(self, rhs: Self) -> SpinColorMatrix {
        let mut out = self.clone();
        for (o, r) in out.m.iter_mut().zip(rhs.m.iter()) {
            *o = *o - *r;
        }
        out
    }
}

impl Mul for &SpinColorMatrix {
    type Output = SpinColorMatrix;

    fn mul(self, rhs: Self) -> SpinColorMatrix {
        SpinColorMatrix::mul(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOL: f64 = 1e-9;

    fn close(a: Complex64, b: Complex64) -> bool {
        (a - b).abs() < TOL
    }

    #[test]
    fn identity_trace_is_dim() {
        assert_eq!(
            SpinColorMatrix::identity().trace(),
            Complex64::real(DIM as f64)
        );
    }

    #[test]
    fn identity_is_multiplicative_unit() {
        let mut a = SpinColorMatrix::zero();
        a.set(0, 5, Complex64::new(1.0, 2.0));
        a.set(7, 7, Complex64::new(-3.0, 0.5));
        let id = SpinColorMatrix::identity();
        assert_eq!(&a * &id, a);
        assert_eq!(&id * &a, a);
    }

    #[test]
    fn from_spin_embeds_color_identity() {
        let mut spin = [[Complex64::ZERO; NS]; NS];
        spin[1][2] = Complex64::new(0.0, 1.0);
        let m = SpinColorMatrix::from_spin(&spin);
        for c1 in 0..NC {
            for c2 in 0..NC {
                let v = m.get(NC + c1, 2 * NC + c2);
                if c1 == c2 {
                    assert_eq!(v, Complex64::new(0.0, 1.0));
                } else {
                    assert_eq!(v, Complex64::ZERO);
                }
            }
        }
    }

    #[test]
    fn from_spin_identity_has_full_trace() {
        let mut spin = [[Complex64::ZERO; NS]; NS];
        for (s, row) in spin.iter_mut().enumerate() {
            row[s] = Complex64::ONE;
        }
        let m = SpinColorMatrix::from_spin(&spin);
        assert_eq!(m, SpinColorMatrix::identity());
    }

    fn arb_matrix() -> impl Strategy<Value = SpinColorMatrix> {
        prop::collection::vec((-1.0..1.0f64, -1.0..1.0f64), DIM * DIM).prop_map(|vals| {
            let mut m = SpinColorMatrix::zero();
            for (idx, (re, im)) in vals.into_iter().enumerate() {
                m.set(idx / DIM, idx % DIM, Complex64::new(re, im));
            }
            m
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn adjoint_is_involutive(a in arb_matrix()) {
            prop_assert_eq!(a.adjoint().adjoint(), a);
        }

        #[test]
        fn trace_is_cyclic(a in arb_matrix(), b in arb_matrix()) {
            prop_assert!(close((&a * &b).trace(), (&b * &a).trace()));
        }

        #[test]
        fn trace_is_linear(a in arb_matrix(), b in arb_matrix()) {
            prop_assert!(close((&a + &b).trace(), a.trace() + b.trace()));
        }

        #[test]
        fn adjoint_reverses_products(a in arb_matrix(), b in arb_matrix()) {
            let lhs = (&a * &b).adjoint();
            let rhs = &b.adjoint() * &a.adjoint();
            for i in 0..DIM {
                for j in 0..DIM {
                    prop_assert!(close(lhs.get(i, j), rhs.get(i, j)));
                }
            }
        }
    }
}
