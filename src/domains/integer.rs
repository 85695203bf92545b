//! Arbitrary-precision integers.
//!
//! The tower uses the multi-precision integer of [rug] directly. This module
//! implements the scalar traits for it and provides a few helpers for decimal digit handling.

use std::cmp::Ordering;

use rand::Rng;

pub use rug::Integer;

use crate::{
    errors::Result,
    sqrt::{self, SqrtContext},
};

use super::{decimal::Decimal, Modulus, OrderedScalar, RealScalar, Scalar};

/// Compute `10^n`.
#[inline]
pub fn pow10(n: u32) -> Integer {
    Integer::from(Integer::u_pow_u(10, n))
}

/// The number of decimal digits of `|n|`. Zero has one digit.
pub fn digit_count(n: &Integer) -> u32 {
    if *n == 0 {
        return 1;
    }

    // the bit count gives an estimate that is at most one digit too large
    let bits = n.significant_bits() as f64;
    let estimate = (bits * std::f64::consts::LOG10_2).floor() as u32 + 1;
    let abs = Integer::from(n.abs_ref());
    if abs < pow10(estimate - 1) {
        estimate - 1
    } else {
        estimate
    }
}

/// Divide `a` by `b`, rounding towards zero, and return the quotient and the remainder.
/// The remainder has the sign of `a`.
#[inline]
pub fn div_rem_trunc(a: &Integer, b: &Integer) -> (Integer, Integer) {
    <(Integer, Integer)>::from(a.div_rem_ref(b))
}

/// Compute the greatest common divisor of `a` and `b`, which is never negative.
#[inline]
pub fn gcd(a: &Integer, b: &Integer) -> Integer {
    Integer::from(a.gcd_ref(b))
}

/// Compute the largest integer whose square does not exceed the non-negative `n`.
#[inline]
pub fn isqrt(n: &Integer) -> Integer {
    Integer::from(n.sqrt_ref())
}

impl Scalar for Integer {
    const NAME: &'static str = "Integer";

    #[inline]
    fn zero() -> Self {
        Integer::new()
    }

    #[inline]
    fn one() -> Self {
        Integer::from(1)
    }

    #[inline]
    fn add(&self, rhs: &Self) -> Self {
        Integer::from(self + rhs)
    }

    #[inline]
    fn sub(&self, rhs: &Self) -> Self {
        Integer::from(self - rhs)
    }

    #[inline]
    fn mul(&self, rhs: &Self) -> Self {
        Integer::from(self * rhs)
    }

    #[inline]
    fn neg(&self) -> Self {
        Integer::from(-self)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == 0
    }

    #[inline]
    fn is_one(&self) -> bool {
        *self == 1
    }

    /// Only `1` and `-1` are invertible in the integer ring.
    #[inline]
    fn is_invertible(&self) -> bool {
        *self == 1 || *self == -1
    }

    fn add_mul_assign(&mut self, b: &Self, c: &Self) {
        *self += Integer::from(b * c);
    }

    fn sample(rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self {
        Integer::from(rng.gen_range(range.0..range.1))
    }
}

impl OrderedScalar for Integer {
    #[inline]
    fn value_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    #[inline]
    fn abs(&self) -> Self {
        Integer::from(self.abs_ref())
    }

    fn sqrt(&self, ctx: &SqrtContext) -> Result<Decimal> {
        sqrt::sqrt_integer(self, ctx)
    }
}

impl Modulus for Integer {
    type Real = Integer;

    #[inline]
    fn abs_pow2(&self) -> Integer {
        Integer::from(self * self)
    }
}

impl RealScalar for Integer {
    const COMPLEX_NAME: &'static str = "SimpleComplex";

    #[inline]
    fn to_decimal(&self) -> Decimal {
        Decimal::from(self.clone())
    }
}
