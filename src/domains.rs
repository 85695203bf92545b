//! Defines the scalar traits and the number types of the tower.
//!
//! The core trait is [Scalar], which has two binary operations, addition and multiplication,
//! together with their identities. Every [Vector](crate::tensors::vector::Vector) and
//! [Matrix](crate::tensors::matrix::Matrix) is generic over a scalar type. The number types are:
//! - Arbitrary-precision integers, [Integer](integer::Integer).
//! - Arbitrary-precision base-10 decimals, [Decimal](decimal::Decimal).
//! - Exact fractions of two integers, [Fraction](rational::Fraction).
//! - Complex numbers over integers or decimals, [Complex](complex::Complex).
//!
//! Extensions of the scalar trait add the capabilities needed by norms:
//! [OrderedScalar] for scalars with an absolute value, a square root and a total order on values,
//! [Modulus] for scalars with a squared absolute value and [RealScalar] for
//! real scalars that convert exactly to a decimal, so that their square root can be approximated.
pub mod complex;
pub mod decimal;
pub mod integer;
pub mod rational;

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use decimal::Decimal;

use crate::{errors::Result, sqrt::SqrtContext};

/// A scalar is an element of a ring with a unit, that can be stored in a vector or matrix.
///
/// Scalars are immutable values: every operation returns a new value.
pub trait Scalar: Clone + PartialEq + Debug {
    /// The name of the scalar type, used in error messages.
    const NAME: &'static str;

    fn zero() -> Self;
    fn one() -> Self;
    fn add(&self, rhs: &Self) -> Self;
    fn sub(&self, rhs: &Self) -> Self;
    fn mul(&self, rhs: &Self) -> Self;
    fn neg(&self) -> Self;
    fn is_zero(&self) -> bool;
    fn is_one(&self) -> bool;
    /// Return `true` iff the scalar has a multiplicative inverse in its own ring.
    /// For the integers these are only `1` and `-1`.
    fn is_invertible(&self) -> bool;

    /// Compute `self^e` using repeated squaring.
    fn pow(&self, e: u32) -> Self {
        if e == 0 {
            return Self::one();
        }

        let mut base = self.clone();
        let mut res = Self::one();
        let mut e = e;
        while e > 0 {
            if e & 1 == 1 {
                res = res.mul(&base);
            }
            e >>= 1;
            if e > 0 {
                base = base.mul(&base);
            }
        }
        res
    }

    /// Compute `self + b * c` in place.
    fn add_mul_assign(&mut self, b: &Self, c: &Self) {
        *self = self.add(&b.mul(c));
    }

    /// Sample a random scalar whose integer components lie in `[range.0, range.1)`.
    fn sample(rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self;
}

/// A scalar with an absolute value and an ordering of values.
pub trait OrderedScalar: Scalar {
    /// Compare the values of two scalars. This may differ from the structural
    /// equality of [PartialEq], for example `1/2` and `2/4` compare as equal.
    fn value_cmp(&self, other: &Self) -> Ordering;
    fn abs(&self) -> Self;

    /// Approximate the square root of a non-negative value, see [crate::sqrt].
    fn sqrt(&self, ctx: &SqrtContext) -> Result<Decimal>;

    /// Return the larger of the two values, preferring `self` when they are equal.
    fn value_max<'a>(&'a self, other: &'a Self) -> &'a Self {
        if self.value_cmp(other) == Ordering::Less {
            other
        } else {
            self
        }
    }
}

/// A scalar with a squared absolute value `|s|^2` in an ordered ring.
pub trait Modulus: Scalar {
    /// The ring in which the squared absolute value lives.
    type Real: OrderedScalar;

    /// Compute `|s|^2`. For real scalars this is `s * s`, for complex numbers `re^2 + im^2`.
    fn abs_pow2(&self) -> Self::Real;
}

/// A real scalar that converts exactly into a [Decimal].
/// Real scalars are the components of complex numbers and the input of the square root approximation.
pub trait RealScalar: OrderedScalar + Modulus<Real = Self> + Display {
    /// The name of complex numbers with components of this type, used in error messages.
    const COMPLEX_NAME: &'static str;

    fn to_decimal(&self) -> Decimal;
}
