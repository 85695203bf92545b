//! Exact fractions of two arbitrary-precision integers.
use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    ops::{Add, Mul, Neg, Sub},
};

use rand::Rng;

use crate::{
    errors::{NumericError, Result},
    sqrt::{self, SqrtContext},
};

use super::{
    decimal::{Decimal, MathContext, RoundingMode},
    integer::{digit_count, gcd, Integer},
    Modulus, OrderedScalar, Scalar,
};

/// A fraction `numerator / denominator` with a non-zero denominator.
///
/// Fractions are not reduced automatically: `2/4` and `1/2` are different
/// values under `==`, but [Fraction::equivalent]. Use [Fraction::reduce] and
/// [Fraction::normalize] to obtain the canonical representation.
///
/// ```
/// use numtower::domains::rational::Fraction;
///
/// let a = Fraction::new(1, 2).unwrap();
/// let b = Fraction::new(1, 3).unwrap();
/// assert_eq!(a.add(&b), Fraction::new(5, 6).unwrap());
/// assert!(Fraction::new(2, 4).unwrap().equivalent(&a));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Fraction {
    numerator: Integer,
    denominator: Integer,
}

impl Fraction {
    /// Create the fraction `numerator / denominator`. The denominator must not be zero.
    pub fn new(numerator: impl Into<Integer>, denominator: impl Into<Integer>) -> Result<Fraction> {
        let denominator = denominator.into();
        if denominator == 0 {
            return Err(NumericError::invalid_argument(
                "The denominator of a fraction must not be zero",
            ));
        }

        Ok(Fraction {
            numerator: numerator.into(),
            denominator,
        })
    }

    #[inline]
    fn new_unchecked(numerator: Integer, denominator: Integer) -> Fraction {
        debug_assert!(denominator != 0);
        Fraction {
            numerator,
            denominator,
        }
    }

    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    pub fn add(&self, rhs: &Fraction) -> Fraction {
        if self.denominator == rhs.denominator {
            return Fraction::new_unchecked(
                Integer::from(&self.numerator + &rhs.numerator),
                self.denominator.clone(),
            );
        }

        Fraction::new_unchecked(
            Integer::from(&self.numerator * &rhs.denominator)
                + Integer::from(&rhs.numerator * &self.denominator),
            Integer::from(&self.denominator * &rhs.denominator),
        )
    }

    pub fn subtract(&self, rhs: &Fraction) -> Fraction {
        self.add(&rhs.negate())
    }

    pub fn multiply(&self, rhs: &Fraction) -> Fraction {
        Fraction::new_unchecked(
            Integer::from(&self.numerator * &rhs.numerator),
            Integer::from(&self.denominator * &rhs.denominator),
        )
    }

    /// Divide by `rhs`, which fails when `rhs` is zero.
    pub fn divide(&self, rhs: &Fraction) -> Result<Fraction> {
        Ok(self.multiply(&rhs.invert()?))
    }

    pub fn negate(&self) -> Fraction {
        Fraction::new_unchecked(Integer::from(-&self.numerator), self.denominator.clone())
    }

    /// Swap numerator and denominator, which fails when the numerator is zero.
    pub fn invert(&self) -> Result<Fraction> {
        if self.numerator == 0 {
            return Err(NumericError::invalid_argument(format!(
                "The fraction {} is not invertible",
                self
            )));
        }

        Ok(Fraction::new_unchecked(
            self.denominator.clone(),
            self.numerator.clone(),
        ))
    }

    /// Compute `self^e`. `self^0` is `1/1`.
    pub fn pow(&self, e: u32) -> Fraction {
        if e == 0 {
            return Fraction::new_unchecked(Integer::from(1), Integer::from(1));
        }

        Fraction::new_unchecked(
            Scalar::pow(&self.numerator, e),
            Scalar::pow(&self.denominator, e),
        )
    }

    pub fn abs(&self) -> Fraction {
        Fraction::new_unchecked(
            Integer::from(self.numerator.abs_ref()),
            Integer::from(self.denominator.abs_ref()),
        )
    }

    /// `-1`, `0` or `1`, depending on the sign of the value.
    pub fn signum(&self) -> i32 {
        let s = match self.numerator.cmp0() {
            Ordering::Less => -1,
            Ordering::Equal => return 0,
            Ordering::Greater => 1,
        };

        if self.denominator < 0 {
            -s
        } else {
            s
        }
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Return `true` iff the value is one, for example for `3/3`.
    pub fn is_one(&self) -> bool {
        self.numerator == self.denominator
    }

    pub fn is_invertible(&self) -> bool {
        self.numerator != 0
    }

    /// Compare the values of two fractions.
    pub fn compare(&self, other: &Fraction) -> Ordering {
        let a = Integer::from(&self.numerator * &other.denominator);
        let b = Integer::from(&other.numerator * &self.denominator);
        let ord = a.cmp(&b);

        if (self.denominator < 0) != (other.denominator < 0) {
            ord.reverse()
        } else {
            ord
        }
    }

    /// Return the smaller value, preferring `self` when they are equivalent.
    pub fn min(&self, other: &Fraction) -> Fraction {
        if other.compare(self) == Ordering::Less {
            other.clone()
        } else {
            self.clone()
        }
    }

    /// Return the larger value, preferring `self` when they are equivalent.
    pub fn max(&self, other: &Fraction) -> Fraction {
        if other.compare(self) == Ordering::Greater {
            other.clone()
        } else {
            self.clone()
        }
    }

    /// Divide numerator and denominator by their greatest common divisor.
    pub fn reduce(&self) -> Fraction {
        let g = gcd(&self.numerator, &self.denominator);
        if g == 1 {
            return self.clone();
        }

        Fraction::new_unchecked(
            Integer::from(self.numerator.div_exact_ref(&g)),
            Integer::from(self.denominator.div_exact_ref(&g)),
        )
    }

    /// Make the denominator positive, moving its sign into the numerator.
    pub fn normalize(&self) -> Fraction {
        if self.denominator < 0 {
            Fraction::new_unchecked(
                Integer::from(-&self.numerator),
                Integer::from(-&self.denominator),
            )
        } else {
            self.clone()
        }
    }

    /// Return `true` iff both fractions have the same value.
    pub fn equivalent(&self, other: &Fraction) -> bool {
        self.compare(other) == Ordering::Equal
    }

    /// Convert to a decimal rounded to the significant digits of `mc`.
    pub fn to_decimal(&self, mc: &MathContext) -> Result<Decimal> {
        Decimal::from(&self.numerator).divide(&Decimal::from(&self.denominator), mc)
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl From<Integer> for Fraction {
    fn from(value: Integer) -> Self {
        Fraction::new_unchecked(value, Integer::from(1))
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Fraction::new_unchecked(Integer::from(value), Integer::from(1))
    }
}

impl<'a> Add<&'a Fraction> for &Fraction {
    type Output = Fraction;

    fn add(self, other: &'a Fraction) -> Self::Output {
        Fraction::add(self, other)
    }
}

impl<'a> Sub<&'a Fraction> for &Fraction {
    type Output = Fraction;

    fn sub(self, other: &'a Fraction) -> Self::Output {
        self.subtract(other)
    }
}

impl<'a> Mul<&'a Fraction> for &Fraction {
    type Output = Fraction;

    fn mul(self, other: &'a Fraction) -> Self::Output {
        self.multiply(other)
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Scalar for Fraction {
    const NAME: &'static str = "Fraction";

    #[inline]
    fn zero() -> Self {
        Fraction::new_unchecked(Integer::new(), Integer::from(1))
    }

    #[inline]
    fn one() -> Self {
        Fraction::new_unchecked(Integer::from(1), Integer::from(1))
    }

    #[inline]
    fn add(&self, rhs: &Self) -> Self {
        Fraction::add(self, rhs)
    }

    #[inline]
    fn sub(&self, rhs: &Self) -> Self {
        self.subtract(rhs)
    }

    #[inline]
    fn mul(&self, rhs: &Self) -> Self {
        self.multiply(rhs)
    }

    #[inline]
    fn neg(&self) -> Self {
        self.negate()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Fraction::is_zero(self)
    }

    #[inline]
    fn is_one(&self) -> bool {
        Fraction::is_one(self)
    }

    #[inline]
    fn is_invertible(&self) -> bool {
        Fraction::is_invertible(self)
    }

    fn pow(&self, e: u32) -> Self {
        Fraction::pow(self, e)
    }

    fn sample(rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self {
        let num = rng.gen_range(range.0..range.1);
        let den = rng.gen_range(1..range.1.max(2));
        Fraction::new_unchecked(Integer::from(num), Integer::from(den))
    }
}

impl OrderedScalar for Fraction {
    #[inline]
    fn value_cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }

    #[inline]
    fn abs(&self) -> Self {
        Fraction::abs(self)
    }

    /// Compute `sqrt(n * d) / d` for the normalized fraction `n / d`.
    fn sqrt(&self, ctx: &SqrtContext) -> Result<Decimal> {
        if self.signum() < 0 {
            return Err(NumericError::invalid_argument(format!(
                "Cannot take the square root of the negative value {}",
                self
            )));
        }

        let f = self.normalize();
        let inner = SqrtContext::with_precision_and_scale(
            ctx.precision().clone(),
            ctx.scale() + digit_count(&f.denominator) as i64 + 5,
            RoundingMode::Down,
        )?;

        let root = sqrt::sqrt_integer(&Integer::from(&f.numerator * &f.denominator), &inner)?;
        root.divide_with_scale(&Decimal::from(f.denominator), ctx.scale(), ctx.rounding())
    }
}

impl Modulus for Fraction {
    type Real = Fraction;

    #[inline]
    fn abs_pow2(&self) -> Fraction {
        self.multiply(self)
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use super::Fraction;
    use crate::{
        domains::{
            decimal::{Decimal, MathContext, RoundingMode},
            OrderedScalar, Scalar,
        },
        sqrt::SqrtContext,
    };

    fn f(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn construction() {
        assert!(Fraction::new(1, 0).is_err());
        assert_eq!(*f(3, -4).numerator(), 3);
        assert_eq!(*f(3, -4).denominator(), -4);
        assert_eq!(f(3, -4).to_string(), "3/-4");
    }

    #[test]
    fn arithmetic() {
        assert_eq!(f(1, 2).add(&f(1, 3)), f(5, 6));
        assert_eq!(f(1, 4).add(&f(1, 4)), f(2, 4));
        assert_eq!(f(1, 2).subtract(&f(1, 3)), f(1, 6));
        assert_eq!(f(2, 3).multiply(&f(3, 4)), f(6, 12));
        assert_eq!(f(2, 3).divide(&f(4, 5)).unwrap(), f(10, 12));
        assert_eq!(f(2, 3).negate(), f(-2, 3));
        assert_eq!(f(-2, 3).invert().unwrap(), f(3, -2));
        assert_eq!(f(-2, 3).abs(), f(2, 3));
        assert_eq!(&f(1, 2) + &f(1, 3), f(5, 6));
        assert_eq!(-&f(1, 2), f(-1, 2));
    }

    #[test]
    fn division_by_zero() {
        assert!(f(1, 2).divide(&f(0, 5)).is_err());
        assert!(f(0, 3).invert().is_err());
        assert!(!f(0, -3).is_invertible());
        assert!(f(1, -3).is_invertible());
    }

    #[test]
    fn powers() {
        assert_eq!(f(2, 3).pow(0), f(1, 1));
        assert_eq!(f(2, 3).pow(1), f(2, 3));
        assert_eq!(f(-2, 3).pow(3), f(-8, 27));
    }

    #[test]
    fn reduce_and_normalize() {
        let a = f(6, -4);
        assert_eq!(a.reduce(), f(3, -2));
        assert_eq!(a.reduce().reduce(), a.reduce());
        assert_eq!(a.normalize(), f(-6, 4));
        assert_eq!(a.normalize().normalize(), a.normalize());
        assert_eq!(a.reduce().normalize(), f(-3, 2));
        assert_eq!(f(0, 7).reduce(), f(0, 1));
        assert!(a.equivalent(&f(-3, 2)));
        assert_ne!(a, f(-3, 2));
    }

    #[test]
    fn ordering() {
        assert_eq!(f(1, 2).compare(&f(2, 4)), Ordering::Equal);
        assert_eq!(f(1, -2).compare(&f(1, 3)), Ordering::Less);
        assert_eq!(f(-1, -2).compare(&f(1, 3)), Ordering::Greater);
        assert_eq!(f(1, 2).min(&f(1, 3)), f(1, 3));
        assert_eq!(f(1, 2).max(&f(-1, -3)), f(1, 2));
        assert_eq!(f(1, 2).max(&f(2, 4)), f(1, 2));
        assert_eq!(f(3, -4).signum(), -1);
        assert_eq!(f(0, -4).signum(), 0);
        assert!(f(3, 3).is_one());
    }

    #[test]
    fn conversion() {
        let mc = MathContext::new(5, RoundingMode::HalfEven).unwrap();
        assert_eq!(f(1, 3).to_decimal(&mc).unwrap().to_string(), "0.33333");
        assert_eq!(f(-1, 8).to_decimal(&mc).unwrap().to_string(), "-0.125");
        assert_eq!(Fraction::from(7), f(7, 1));
    }

    #[test]
    fn square_root() {
        let ctx = SqrtContext::with_scale(6, RoundingMode::HalfEven).unwrap();
        assert_eq!(OrderedScalar::sqrt(&f(9, 4), &ctx).unwrap(), "1.5".parse::<Decimal>().unwrap());
        assert_eq!(OrderedScalar::sqrt(&f(-9, -4), &ctx).unwrap(), "1.5".parse::<Decimal>().unwrap());
        assert_eq!(
            OrderedScalar::sqrt(&f(1, 3), &ctx).unwrap().to_string(),
            "0.577350"
        );
        assert!(OrderedScalar::sqrt(&f(-1, 3), &ctx).is_err());
        assert!(Scalar::is_zero(&<Fraction as Scalar>::zero()));
    }
}
