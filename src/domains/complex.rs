//! Complex numbers over integers or decimals.
//!
//! [SimpleComplex] numbers have arbitrary-precision integer components and
//! are closed under addition, subtraction and multiplication. Their quotients,
//! absolute values and arguments are generally not integers and are returned as
//! decimals, rounded according to an explicit [MathContext], scale or [SqrtContext].
//!
//! ```
//! use numtower::domains::complex::SimpleComplex;
//! use numtower::domains::decimal::MathContext;
//! use numtower::domains::integer::Integer;
//!
//! let a = SimpleComplex::new(Integer::from(1), Integer::from(2));
//! let b = SimpleComplex::new(Integer::from(3), Integer::from(-1));
//! assert_eq!(a.multiply(&b), SimpleComplex::new(Integer::from(5), Integer::from(5)));
//!
//! let q = a.divide(&b, &MathContext::DECIMAL32).unwrap();
//! assert_eq!(q.real().to_string(), "0.1");
//! assert_eq!(q.imaginary().to_string(), "0.7");
//! ```
use std::{
    fmt::{Display, Formatter},
    ops::{Add, Mul, Neg, Sub},
};

use crate::{
    errors::{NumericError, Result},
    sqrt::{self, SqrtContext},
    tensors::matrix::Matrix,
};

use super::{
    decimal::{Decimal, MathContext, RoundingMode},
    integer::Integer,
    Modulus, RealScalar, Scalar,
};

/// A complex number `re + im * i`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Complex<T> {
    re: T,
    im: T,
}

/// A complex number with integer components.
pub type SimpleComplex = Complex<Integer>;
/// A complex number with decimal components.
pub type DecimalComplex = Complex<Decimal>;

/// The polar representation `radial * e^(i * angular)` of a non-zero complex number.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PolarForm {
    radial: Decimal,
    angular: Decimal,
}

impl PolarForm {
    /// The absolute value.
    pub fn radial(&self) -> &Decimal {
        &self.radial
    }

    /// The argument, in `(-pi, pi]`.
    pub fn angular(&self) -> &Decimal {
        &self.angular
    }
}

impl<T> Complex<T> {
    #[inline]
    pub fn new(re: T, im: T) -> Complex<T> {
        Complex { re, im }
    }

    #[inline]
    pub fn real(&self) -> &T {
        &self.re
    }

    #[inline]
    pub fn imaginary(&self) -> &T {
        &self.im
    }
}

impl<T: RealScalar> Complex<T> {
    /// The imaginary unit.
    pub fn i() -> Complex<T> {
        Complex::new(T::zero(), T::one())
    }

    pub fn add(&self, rhs: &Complex<T>) -> Complex<T> {
        Complex::new(self.re.add(&rhs.re), self.im.add(&rhs.im))
    }

    pub fn subtract(&self, rhs: &Complex<T>) -> Complex<T> {
        Complex::new(self.re.sub(&rhs.re), self.im.sub(&rhs.im))
    }

    pub fn multiply(&self, rhs: &Complex<T>) -> Complex<T> {
        Complex::new(
            self.re.mul(&rhs.re).sub(&self.im.mul(&rhs.im)),
            self.re.mul(&rhs.im).add(&self.im.mul(&rhs.re)),
        )
    }

    pub fn negate(&self) -> Complex<T> {
        Complex::new(self.re.neg(), self.im.neg())
    }

    pub fn conjugate(&self) -> Complex<T> {
        Complex::new(self.re.clone(), self.im.neg())
    }

    pub fn pow(&self, e: u32) -> Complex<T> {
        Scalar::pow(self, e)
    }

    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    /// Compute `re^2 + im^2` exactly.
    pub fn abs_pow2(&self) -> T {
        self.re.mul(&self.re).add(&self.im.mul(&self.im))
    }

    fn check_divisor(divisor: &Complex<T>) -> Result<()> {
        if divisor.is_zero() {
            Err(NumericError::invalid_argument(format!(
                "The {} {} is not invertible",
                T::COMPLEX_NAME,
                divisor
            )))
        } else {
            Ok(())
        }
    }

    /// Return the numerator `self * conj(rhs)` and the denominator `|rhs|^2` of `self / rhs`.
    fn quotient_parts(&self, rhs: &Complex<T>) -> Result<(Complex<Decimal>, Decimal)> {
        Self::check_divisor(rhs)?;
        let num = self.multiply(&rhs.conjugate());
        Ok((
            Complex::new(num.re.to_decimal(), num.im.to_decimal()),
            rhs.abs_pow2().to_decimal(),
        ))
    }

    /// Divide by `rhs`, rounding both components to the precision of `mc`.
    pub fn divide(&self, rhs: &Complex<T>, mc: &MathContext) -> Result<DecimalComplex> {
        let (num, den) = self.quotient_parts(rhs)?;
        Ok(Complex::new(num.re.divide(&den, mc)?, num.im.divide(&den, mc)?))
    }

    /// Divide by `rhs`, rounding both components to `scale` digits after the decimal point.
    pub fn divide_with_scale(
        &self,
        rhs: &Complex<T>,
        scale: i64,
        rounding: RoundingMode,
    ) -> Result<DecimalComplex> {
        let (num, den) = self.quotient_parts(rhs)?;
        Ok(Complex::new(
            num.re.divide_with_scale(&den, scale, rounding)?,
            num.im.divide_with_scale(&den, scale, rounding)?,
        ))
    }

    pub fn invert(&self, mc: &MathContext) -> Result<DecimalComplex> {
        <Complex<T> as Scalar>::one().divide(self, mc)
    }

    pub fn invert_with_scale(&self, scale: i64, rounding: RoundingMode) -> Result<DecimalComplex> {
        <Complex<T> as Scalar>::one().divide_with_scale(self, scale, rounding)
    }

    /// Approximate the absolute value `sqrt(re^2 + im^2)`.
    pub fn abs(&self, ctx: &SqrtContext) -> Result<Decimal> {
        self.abs_pow2().sqrt(ctx)
    }

    /// Approximate the absolute value to the significant digits of `mc`.
    pub fn abs_to_digits(&self, mc: &MathContext) -> Result<Decimal> {
        sqrt::sqrt_to_digits(&self.abs_pow2().to_decimal(), mc)
    }

    fn check_not_zero(&self) -> Result<()> {
        if self.is_zero() {
            Err(NumericError::illegal_state(format!(
                "The argument of the {} {} is undefined",
                T::COMPLEX_NAME,
                self
            )))
        } else {
            Ok(())
        }
    }

    /// Compute the angle with the positive real axis, in `(-pi, pi]`.
    pub fn argument(&self, mc: &MathContext) -> Result<Decimal> {
        self.check_not_zero()?;
        Decimal::atan2(&self.im.to_decimal(), &self.re.to_decimal(), mc)
    }

    /// Compute the absolute value and the argument, both to the significant digits of `mc`.
    pub fn polar_form(&self, mc: &MathContext) -> Result<PolarForm> {
        self.check_not_zero()?;
        Ok(PolarForm {
            radial: self.abs_to_digits(mc)?,
            angular: self.argument(mc)?,
        })
    }

    /// Represent multiplication by this number as the real matrix `[[re, -im], [im, re]]`.
    pub fn to_matrix(&self) -> Matrix<T> {
        Matrix::new_unchecked(
            2,
            2,
            vec![
                self.re.clone(),
                self.im.neg(),
                self.im.clone(),
                self.re.clone(),
            ],
        )
    }
}

impl<T: Display> Display for Complex<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.re, self.im)
    }
}

impl<T: RealScalar> From<T> for Complex<T> {
    fn from(re: T) -> Self {
        Complex::new(re, T::zero())
    }
}

impl<'a, T: RealScalar> Add<&'a Complex<T>> for &Complex<T> {
    type Output = Complex<T>;

    fn add(self, rhs: &'a Complex<T>) -> Self::Output {
        Complex::add(self, rhs)
    }
}

impl<'a, T: RealScalar> Sub<&'a Complex<T>> for &Complex<T> {
    type Output = Complex<T>;

    fn sub(self, rhs: &'a Complex<T>) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<'a, T: RealScalar> Mul<&'a Complex<T>> for &Complex<T> {
    type Output = Complex<T>;

    fn mul(self, rhs: &'a Complex<T>) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<T: RealScalar> Neg for &Complex<T> {
    type Output = Complex<T>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<T: RealScalar> Scalar for Complex<T> {
    const NAME: &'static str = T::COMPLEX_NAME;

    #[inline]
    fn zero() -> Self {
        Complex::new(T::zero(), T::zero())
    }

    #[inline]
    fn one() -> Self {
        Complex::new(T::one(), T::zero())
    }

    #[inline]
    fn add(&self, rhs: &Self) -> Self {
        Complex::add(self, rhs)
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
        Complex::is_zero(self)
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.re.is_one() && self.im.is_zero()
    }

    /// Every non-zero complex number has an inverse, although for
    /// [SimpleComplex] numbers it is generally a [DecimalComplex].
    #[inline]
    fn is_invertible(&self) -> bool {
        !Complex::is_zero(self)
    }

    fn sample(rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self {
        let re = T::sample(rng, range);
        let im = T::sample(rng, range);
        Complex::new(re, im)
    }
}

impl<T: RealScalar> Modulus for Complex<T> {
    type Real = T;

    #[inline]
    fn abs_pow2(&self) -> T {
        Complex::abs_pow2(self)
    }
}

#[cfg(test)]
mod test {
    use super::{Complex, DecimalComplex, SimpleComplex};
    use crate::{
        domains::{
            decimal::{Decimal, MathContext, RoundingMode},
            integer::Integer,
            Scalar,
        },
        errors::NumericError,
        sqrt::SqrtContext,
    };

    fn c(re: i64, im: i64) -> SimpleComplex {
        Complex::new(Integer::from(re), Integer::from(im))
    }

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn arithmetic() {
        let a = c(1, 2);
        let b = c(3, -4);
        assert_eq!(a.add(&b), c(4, -2));
        assert_eq!(a.subtract(&b), c(-2, 6));
        assert_eq!(a.multiply(&b), c(11, 2));
        assert_eq!(a.negate(), c(-1, -2));
        assert_eq!(a.conjugate(), c(1, -2));
        assert_eq!(&a * &b, c(11, 2));
        assert_eq!(SimpleComplex::i().pow(2), c(-1, 0));
        assert_eq!(a.pow(0), SimpleComplex::one());
        assert_eq!(b.abs_pow2(), 25);
    }

    #[test]
    fn division() {
        let mc = MathContext::new(10, RoundingMode::HalfEven).unwrap();
        let q = c(11, 2).divide(&c(3, -4), &mc).unwrap();
        assert_eq!(q, Complex::new(Decimal::from(1), Decimal::from(2)));

        let q = c(1, 0).divide(&c(0, 3), &mc).unwrap();
        assert_eq!(q.real(), &Decimal::from(0));
        assert_eq!(q.imaginary().to_string(), "-0.3333333333");

        let q = c(1, 1).divide_with_scale(&c(3, 0), 2, RoundingMode::Up).unwrap();
        assert_eq!(q, Complex::new(d("0.34"), d("0.34")));

        let inv = c(0, 2).invert(&mc).unwrap();
        assert_eq!(inv, Complex::new(Decimal::from(0), d("-0.5")));
    }

    #[test]
    fn division_by_zero() {
        let mc = MathContext::DECIMAL64;
        let err = c(1, 1).divide(&c(0, 0), &mc).unwrap_err();
        assert!(matches!(err, NumericError::InvalidArgument(_)));
        assert!(err.to_string().contains("SimpleComplex"));

        let zero = DecimalComplex::zero();
        let err = zero.invert_with_scale(3, RoundingMode::HalfUp).unwrap_err();
        assert!(err.to_string().contains("DecimalComplex"));
    }

    #[test]
    fn absolute_value() {
        let ctx = SqrtContext::with_scale(5, RoundingMode::HalfEven).unwrap();
        assert_eq!(c(3, 4).abs(&ctx).unwrap(), Decimal::from(5));
        assert_eq!(c(1, 1).abs(&ctx).unwrap().to_string(), "1.41421");

        let z = Complex::new(d("0.3"), d("-0.4"));
        assert_eq!(z.abs_pow2(), d("0.25"));
        assert_eq!(z.abs(&ctx).unwrap(), d("0.5"));
        assert_eq!(
            c(1, 2).abs_to_digits(&MathContext::DECIMAL32).unwrap().to_string(),
            "2.236068"
        );
    }

    #[test]
    fn argument() {
        let mc = MathContext::new(15, RoundingMode::HalfEven).unwrap();
        assert_eq!(
            SimpleComplex::i().argument(&mc).unwrap().to_string(),
            "1.57079632679490"
        );
        assert_eq!(c(-1, 0).argument(&mc).unwrap().to_string(), "3.14159265358979");
        assert_eq!(
            c(1, -1).argument(&mc).unwrap().to_string(),
            "-0.785398163397448"
        );

        let err = c(0, 0).argument(&mc).unwrap_err();
        assert!(matches!(err, NumericError::IllegalState(_)));
        assert!(c(0, 0).polar_form(&mc).is_err());

        let p = c(0, -2).polar_form(&mc).unwrap();
        assert_eq!(p.radial(), &Decimal::from(2));
        assert_eq!(p.angular().to_string(), "-1.57079632679490");
    }

    #[test]
    fn matrix_representation() {
        let a = c(2, 3);
        let b = c(-1, 5);
        let m = a.to_matrix();
        assert_eq!(m.entries(), &[2, -3, 3, 2]);

        // multiplication of complex numbers is multiplication of their matrices
        let p = m.multiply(&b.to_matrix()).unwrap();
        assert_eq!(p, a.multiply(&b).to_matrix());
    }
}
