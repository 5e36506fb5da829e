//! Double-precision complex scalar.
//!
//! Every per-site value in Weft — matrix elements, diagram fields,
//! correlator entries — is a [`Complex64`]. The type implements the
//! `num_traits` identities so generic reductions can use `Zero`/`One`.

use num_traits::{One, Zero};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A complex number with `f64` real and imaginary parts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex64 {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

impl Complex64 {
    /// Create a complex number from real and imaginary parts.
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Create a purely real complex number.
    pub const fn real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Create a purely imaginary complex number.
    pub const fn imag(im: f64) -> Self {
        Self { re: 0.0, im }
    }

    /// The additive identity, `0 + 0i`.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// The multiplicative identity, `1 + 0i`.
    pub const ONE: Self = Self::new(1.0, 0.0);

    /// The imaginary unit, `0 + 1i`.
    pub const I: Self = Self::new(0.0, 1.0);

    /// Complex conjugate.
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Squared modulus, `re² + im²`.
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Modulus (absolute value).
    pub fn abs(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Multiply by a real scalar.
    pub fn scale(self, k: f64) -> Self {
        Self::new(self.re * k, self.im * k)
    }

    /// `true` if both parts are finite.
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl Add for Complex64 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl AddAssign for Complex64 {
    fn add_assign(&mut self, rhs: Self) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl Sub for Complex64 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex64 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Neg for Complex64 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl Zero for Complex64 {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Complex64 {
    fn one() -> Self {
        Self::ONE
    }
}

impl Sum for Complex64 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<f64> for Complex64 {
    fn from(re: f64) -> Self {
        Self::real(re)
    }
}

impl fmt::Display for Complex64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < 0.0 {
            write!(f, "{}{}i", self.re, self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOL: f64 = 1e-12;

    fn close(a: Complex64, b: Complex64) -> bool {
        (a - b).abs() < TOL
    }

    #[test]
    fn multiplication_worked() {
        // (1 + 2i)(3 + 4i) = 3 + 4i + 6i - 8 = -5 + 10i
        let z = Complex64::new(1.0, 2.0) * Complex64::new(3.0, 4.0);
        assert_eq!(z, Complex64::new(-5.0, 10.0));
    }

    #[test]
    fn i_squared_is_minus_one() {
        assert_eq!(Complex64::I * Complex64::I, Complex64::real(-1.0));
    }

    #[test]
    fn conjugate_negates_imaginary() {
        let z = Complex64::new(2.0, -3.0);
        assert_eq!(z.conj(), Complex64::new(2.0, 3.0));
    }

    #[test]
    fn sum_over_iterator() {
        let total: Complex64 = (0..4).map(|k| Complex64::new(k as f64, 1.0)).sum();
        assert_eq!(total, Complex64::new(6.0, 4.0));
    }

    fn arb_complex() -> impl Strategy<Value = Complex64> {
        (-1e3..1e3f64, -1e3..1e3f64).prop_map(|(re, im)| Complex64::new(re, im))
    }

    proptest! {
        #[test]
        fn addition_commutative(a in arb_complex(), b in arb_complex()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn multiplication_commutative(a in arb_complex(), b in arb_complex()) {
            prop_assert!(close(a * b, b * a));
        }

        #[test]
        fn conjugation_is_involutive(a in arb_complex()) {
            prop_assert_eq!(a.conj().conj(), a);
        }

        #[test]
        fn conj_of_product(a in arb_complex(), b in arb_complex()) {
            prop_assert!(close((a * b).conj(), a.conj() * b.conj()));
        }

        #[test]
        fn norm_sqr_matches_conj_product(a in arb_complex()) {
            let p = a * a.conj();
            prop_assert!((p.re - a.norm_sqr()).abs() < 1e-9 * (1.0 + a.norm_sqr()));
            prop_assert!(p.im.abs() < 1e-9 * (1.0 + a.norm_sqr()));
        }
    }
}
