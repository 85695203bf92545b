//! Arbitrary-precision base-10 numbers with explicit rounding control.
//!
//! A [Decimal] is an integer `unscaled` together with a `scale`, representing
//! `unscaled * 10^(-scale)`. Addition, subtraction and multiplication are exact.
//! Operations whose result does not terminate, such as division, take either a
//! [MathContext] (a number of significant digits and a [RoundingMode]) or an explicit
//! scale and rounding mode.
//!
//! ```
//! use numtower::domains::decimal::{Decimal, MathContext, RoundingMode};
//!
//! let a: Decimal = "1.5".parse().unwrap();
//! let b: Decimal = "0.25".parse().unwrap();
//! assert_eq!(a.multiply(&b).to_string(), "0.375");
//!
//! let third = Decimal::from(1)
//!     .divide_with_scale(&Decimal::from(3), 5, RoundingMode::HalfEven)
//!     .unwrap();
//! assert_eq!(third.to_string(), "0.33333");
//!
//! let mc = MathContext::new(3, RoundingMode::Up).unwrap();
//! assert_eq!(Decimal::from(2).divide(&Decimal::from(3), &mc).unwrap().to_string(), "0.667");
//! ```
use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use rand::Rng;

use crate::{
    errors::{NumericError, Result},
    settings::Settings,
    sqrt::{self, SqrtContext},
};

use super::{
    integer::{digit_count, div_rem_trunc, pow10, Integer},
    Modulus, OrderedScalar, RealScalar, Scalar,
};

/// The rounding applied when digits have to be discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round away from zero.
    Up,
    /// Round towards zero.
    Down,
    /// Round towards positive infinity.
    Ceiling,
    /// Round towards negative infinity.
    Floor,
    /// Round to the nearest neighbour, ties away from zero.
    HalfUp,
    /// Round to the nearest neighbour, ties towards zero.
    HalfDown,
    /// Round to the nearest neighbour, ties to the even neighbour.
    HalfEven,
    /// Assert that no rounding is necessary. Any operation that would discard
    /// a non-zero digit fails instead.
    Unnecessary,
}

impl FromStr for RoundingMode {
    type Err = NumericError;

    /// Parse a rounding mode. Case, `_` and `-` are ignored, so that
    /// `HALF_EVEN`, `half-even` and `HalfEven` are all accepted.
    fn from_str(s: &str) -> Result<Self> {
        let name: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match name.as_str() {
            "up" => Ok(RoundingMode::Up),
            "down" => Ok(RoundingMode::Down),
            "ceiling" => Ok(RoundingMode::Ceiling),
            "floor" => Ok(RoundingMode::Floor),
            "halfup" => Ok(RoundingMode::HalfUp),
            "halfdown" => Ok(RoundingMode::HalfDown),
            "halfeven" => Ok(RoundingMode::HalfEven),
            "unnecessary" => Ok(RoundingMode::Unnecessary),
            _ => Err(NumericError::invalid_argument(format!(
                "Unknown rounding mode: {}",
                s
            ))),
        }
    }
}

/// A number of significant digits together with a rounding mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MathContext {
    precision: u32,
    rounding: RoundingMode,
}

impl MathContext {
    /// 7 digits, rounding half even.
    pub const DECIMAL32: MathContext = MathContext {
        precision: 7,
        rounding: RoundingMode::HalfEven,
    };
    /// 16 digits, rounding half even.
    pub const DECIMAL64: MathContext = MathContext {
        precision: 16,
        rounding: RoundingMode::HalfEven,
    };
    /// 34 digits, rounding half even.
    pub const DECIMAL128: MathContext = MathContext {
        precision: 34,
        rounding: RoundingMode::HalfEven,
    };

    /// Create a context with `precision` significant digits, which must be positive.
    pub fn new(precision: u32, rounding: RoundingMode) -> Result<MathContext> {
        if precision == 0 {
            return Err(NumericError::invalid_argument(
                "The precision of a math context must be positive, but was 0",
            ));
        }

        Ok(MathContext {
            precision,
            rounding,
        })
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }
}

impl Default for MathContext {
    /// The context configured in the global [Settings].
    fn default() -> Self {
        Settings::get().math_context
    }
}

/// Compute `num / den` rounded to an integer according to `mode`.
pub(crate) fn round_division(num: &Integer, den: &Integer, mode: RoundingMode) -> Result<Integer> {
    let (q, r) = div_rem_trunc(num, den);
    if r == 0 {
        return Ok(q);
    }

    let negative = (*num < 0) != (*den < 0);
    let twice_rem = Integer::from(r.abs_ref()) * 2u32;
    let half = twice_rem.cmp(&Integer::from(den.abs_ref()));

    let away_from_zero = match mode {
        RoundingMode::Up => true,
        RoundingMode::Down => false,
        RoundingMode::Ceiling => !negative,
        RoundingMode::Floor => negative,
        RoundingMode::HalfUp => half != Ordering::Less,
        RoundingMode::HalfDown => half == Ordering::Greater,
        RoundingMode::HalfEven => half == Ordering::Greater || (half == Ordering::Equal && q.is_odd()),
        RoundingMode::Unnecessary => {
            return Err(NumericError::invalid_argument(format!(
                "Rounding necessary: {} / {} is not an integer",
                num, den
            )))
        }
    };

    if !away_from_zero {
        Ok(q)
    } else if negative {
        Ok(q - 1)
    } else {
        Ok(q + 1)
    }
}

/// Compute `10^n` for a non-negative scale difference.
fn scale_factor(n: i64) -> Result<Integer> {
    u32::try_from(n).map(pow10).map_err(|_| {
        NumericError::invalid_argument(format!(
            "Scale difference {} is outside of the supported range",
            n
        ))
    })
}

/// An arbitrary-precision decimal number `unscaled * 10^(-scale)`.
///
/// Equality and ordering compare values, so `2.0 == 2.00`.
/// The representation is available through [Decimal::unscaled] and [Decimal::scale].
#[derive(Clone)]
pub struct Decimal {
    unscaled: Integer,
    scale: i64,
}

impl Decimal {
    /// Create the decimal `unscaled * 10^(-scale)`.
    pub fn new(unscaled: Integer, scale: i64) -> Decimal {
        Decimal { unscaled, scale }
    }

    pub fn unscaled(&self) -> &Integer {
        &self.unscaled
    }

    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// The number of digits of the unscaled value. Zero has precision 1.
    pub fn precision(&self) -> u32 {
        digit_count(&self.unscaled)
    }

    /// The exponent of the leading digit, i.e. the `e` in `d.ddd * 10^e`.
    pub fn adjusted_exponent(&self) -> i64 {
        self.precision() as i64 - 1 - self.scale
    }

    pub fn signum(&self) -> i32 {
        match self.unscaled.cmp0() {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.unscaled == 0
    }

    pub fn is_negative(&self) -> bool {
        self.unscaled < 0
    }

    pub fn negate(&self) -> Decimal {
        Decimal::new(Integer::from(-&self.unscaled), self.scale)
    }

    pub fn abs(&self) -> Decimal {
        Decimal::new(Integer::from(self.unscaled.abs_ref()), self.scale)
    }

    /// Return the unscaled value when represented with the larger `scale`.
    fn unscaled_at(&self, scale: i64) -> Result<Integer> {
        debug_assert!(scale >= self.scale);
        if scale == self.scale || self.is_zero() {
            Ok(self.unscaled.clone())
        } else {
            Ok(Integer::from(&self.unscaled * &scale_factor(scale - self.scale)?))
        }
    }

    /// Add `rhs` exactly. Fails when the scales of the operands are too far apart
    /// to represent the sum.
    pub fn checked_add(&self, rhs: &Decimal) -> Result<Decimal> {
        let scale = self.scale.max(rhs.scale);
        Ok(Decimal::new(self.unscaled_at(scale)? + rhs.unscaled_at(scale)?, scale))
    }

    pub fn checked_subtract(&self, rhs: &Decimal) -> Result<Decimal> {
        self.checked_add(&rhs.negate())
    }

    /// Multiply by `rhs` exactly. Fails when the scale of the product overflows.
    pub fn checked_multiply(&self, rhs: &Decimal) -> Result<Decimal> {
        let scale = self.scale.checked_add(rhs.scale).ok_or_else(|| {
            NumericError::invalid_argument(format!(
                "The scale of {} * {} is outside of the supported range",
                self, rhs
            ))
        })?;
        Ok(Decimal::new(Integer::from(&self.unscaled * &rhs.unscaled), scale))
    }

    /// Add `rhs` exactly.
    ///
    /// # Panics
    ///
    /// When the scales are so far apart that the sum has more than `u32::MAX` digits.
    /// Use [Decimal::checked_add] to handle this case.
    pub fn add(&self, rhs: &Decimal) -> Decimal {
        self.checked_add(rhs).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Subtract `rhs` exactly.
    ///
    /// # Panics
    ///
    /// Under the same conditions as [Decimal::add].
    pub fn subtract(&self, rhs: &Decimal) -> Decimal {
        self.checked_subtract(rhs).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Multiply by `rhs` exactly.
    ///
    /// # Panics
    ///
    /// When the scale of the product overflows an `i64`.
    pub fn multiply(&self, rhs: &Decimal) -> Decimal {
        self.checked_multiply(rhs).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Raise to the power `e` exactly. Fails when the scale of the result overflows.
    pub fn pow(&self, e: u32) -> Result<Decimal> {
        let scale = self.scale.checked_mul(e as i64).ok_or_else(|| {
            NumericError::invalid_argument(format!(
                "The scale of {}^{} is outside of the supported range",
                self, e
            ))
        })?;
        Ok(Decimal::new(Scalar::pow(&self.unscaled, e), scale))
    }

    /// Return the integer part, rounding towards zero.
    pub fn integer_part(&self) -> Result<Integer> {
        if self.scale <= 0 {
            self.unscaled_at(0)
        } else if self.precision() as i64 <= self.scale {
            Ok(Integer::new())
        } else {
            Ok(div_rem_trunc(&self.unscaled, &scale_factor(self.scale)?).0)
        }
    }

    /// Represent the number with `scale` digits after the decimal point,
    /// rounding with `rounding` when digits are discarded.
    pub fn set_scale(&self, scale: i64, rounding: RoundingMode) -> Result<Decimal> {
        if scale >= self.scale {
            return Ok(Decimal::new(self.unscaled_at(scale)?, scale));
        }

        // every digit is discarded once the divisor exceeds 10 * |unscaled|, and
        // the rounding only depends on the remainder being non-zero and below half
        let shift = (self.scale - scale).min(self.precision() as i64 + 1);
        let divisor = scale_factor(shift)?;
        Ok(Decimal::new(
            round_division(&self.unscaled, &divisor, rounding)?,
            scale,
        ))
    }

    /// Round to the number of significant digits of `mc`.
    pub fn round(&self, mc: &MathContext) -> Result<Decimal> {
        let digits = self.precision() as i64;
        let p = mc.precision as i64;
        if digits <= p {
            return Ok(self.clone());
        }

        let mut r = self.set_scale(self.scale - (digits - p), mc.rounding)?;
        if r.precision() as i64 > p {
            // rounding carried into a new digit, the discarded digit is 0
            r = r.set_scale(r.scale - 1, mc.rounding)?;
        }
        Ok(r)
    }

    /// Remove trailing zeros of the unscaled value.
    pub fn strip_trailing_zeros(&self) -> Decimal {
        if self.is_zero() {
            return Decimal::new(Integer::new(), 0);
        }
        self.strip_trailing_zeros_to(i64::MIN)
    }

    /// Remove trailing zeros as long as the scale stays at least `min_scale`.
    fn strip_trailing_zeros_to(&self, min_scale: i64) -> Decimal {
        let mut unscaled = self.unscaled.clone();
        let mut scale = self.scale;
        let ten = Integer::from(10);
        while scale > min_scale && unscaled != 0 && unscaled.is_divisible(&ten) {
            unscaled /= 10;
            scale -= 1;
        }
        Decimal::new(unscaled, scale)
    }

    fn check_divisor(&self, divisor: &Decimal) -> Result<()> {
        if divisor.is_zero() {
            Err(NumericError::invalid_argument(format!(
                "Division by zero: {} / {}",
                self, divisor
            )))
        } else {
            Ok(())
        }
    }

    /// Return a numerator and denominator whose quotient is `self / divisor * 10^scale`.
    fn scaled_operands(&self, divisor: &Decimal, scale: i64) -> Result<(Integer, Integer)> {
        let e = scale
            .checked_add(divisor.scale)
            .and_then(|e| e.checked_sub(self.scale))
            .ok_or_else(|| {
                NumericError::invalid_argument(format!(
                    "The scale {} of the quotient {} / {} is outside of the supported range",
                    scale, self, divisor
                ))
            })?;
        if e >= 0 {
            Ok((
                Integer::from(&self.unscaled * &scale_factor(e)?),
                divisor.unscaled.clone(),
            ))
        } else {
            Ok((
                self.unscaled.clone(),
                Integer::from(&divisor.unscaled * &scale_factor(-e)?),
            ))
        }
    }

    /// Divide by `divisor` and represent the quotient with `scale` digits after the decimal point.
    pub fn divide_with_scale(
        &self,
        divisor: &Decimal,
        scale: i64,
        rounding: RoundingMode,
    ) -> Result<Decimal> {
        self.check_divisor(divisor)?;
        let (num, den) = self.scaled_operands(divisor, scale)?;
        Ok(Decimal::new(round_division(&num, &den, rounding)?, scale))
    }

    /// Divide by `divisor` and round the quotient to the precision of `mc`.
    /// Exact quotients drop trailing zeros down to the scale `self.scale - divisor.scale`.
    pub fn divide(&self, divisor: &Decimal, mc: &MathContext) -> Result<Decimal> {
        self.check_divisor(divisor)?;

        let preferred_scale = self.scale - divisor.scale;
        if self.is_zero() {
            return Ok(Decimal::new(Integer::new(), preferred_scale));
        }

        // the quotient lies in [10^(exp - 1), 10^(exp + 1))
        let exp = self.adjusted_exponent() - divisor.adjusted_exponent();
        let scale = mc.precision as i64 + 3 - exp;
        let (num, den) = self.scaled_operands(divisor, scale)?;
        let (q, r) = div_rem_trunc(&num, &den);

        if r == 0 {
            let d = Decimal::new(q, scale).round(mc)?;
            return Ok(d.strip_trailing_zeros_to(preferred_scale));
        }

        // append a sticky digit so that a single rounding step sees the discarded remainder
        let negative = (num < 0) != (den < 0);
        let sticky = if negative { -1 } else { 1 };
        Decimal::new(q * 10u32 + sticky, scale + 1).round(mc)
    }

    /// Compute `pi` to the precision of `mc`.
    pub fn pi(mc: &MathContext) -> Result<Decimal> {
        pi_at_scale(mc.precision as i64 + 5)?.round(mc)
    }

    /// Compute the angle of the point `(x, y)` in `(-pi, pi]`, rounded to the precision of `mc`.
    /// The angle of the origin is undefined.
    pub fn atan2(y: &Decimal, x: &Decimal, mc: &MathContext) -> Result<Decimal> {
        if x.is_zero() && y.is_zero() {
            return Err(NumericError::illegal_state(
                "The angle of the origin (0, 0) is undefined",
            ));
        }

        if y.is_zero() {
            return if x.is_negative() {
                Decimal::pi(mc)
            } else {
                Ok(Decimal::new(Integer::new(), 0))
            };
        }

        const GUARD_DIGITS: i64 = 10;
        let magnitude = if x.is_zero() {
            0
        } else {
            y.adjusted_exponent() - x.adjusted_exponent()
        };
        let w = mc.precision as i64 + GUARD_DIGITS + (-magnitude).max(0);

        let angle = if x.is_zero() {
            let half_pi = pi_at_scale(w)?.divide_with_scale(&Decimal::from(2), w, RoundingMode::HalfEven)?;
            if y.is_negative() {
                half_pi.negate()
            } else {
                half_pi
            }
        } else {
            let t = atan_at_scale(&y.divide_with_scale(x, w, RoundingMode::HalfEven)?, w)?;
            if !x.is_negative() {
                t
            } else if y.is_negative() {
                t.subtract(&pi_at_scale(w)?)
            } else {
                t.add(&pi_at_scale(w)?)
            }
        };

        angle.round(mc)
    }
}

/// Compute `atan(x)` for `0 <= x <= 1`, with intermediate results at scale `w`.
fn atan_reduced(x: &Decimal, w: i64) -> Result<Decimal> {
    let one = Decimal::from(1);
    let tenth = Decimal::new(Integer::from(1), 1);
    let ctx = SqrtContext::with_precision_and_scale(
        Decimal::new(Integer::from(1), w),
        w,
        RoundingMode::HalfEven,
    )?;

    // atan(y) = 2 * atan(y / (1 + sqrt(1 + y^2)))
    let mut y = x.clone();
    let mut doublings = 0;
    while y > tenth {
        let s = sqrt::sqrt(&one.add(&y.multiply(&y)), &ctx)?;
        y = y.divide_with_scale(&one.add(&s), w, RoundingMode::HalfEven)?;
        doublings += 1;
    }

    let y2 = y.multiply(&y).set_scale(w, RoundingMode::HalfEven)?;
    let mut power = y.clone();
    let mut sum = y;
    let mut k: i64 = 1;
    loop {
        power = power
            .multiply(&y2)
            .set_scale(w, RoundingMode::HalfEven)?
            .negate();
        let term = power.divide_with_scale(&Decimal::from(2 * k + 1), w, RoundingMode::HalfEven)?;
        if term.is_zero() {
            break;
        }
        sum = sum.add(&term);
        k += 1;
    }

    Ok(sum.multiply(&Decimal::from(1i64 << doublings)))
}

/// Compute `atan(x)` for any `x`, with intermediate results at scale `w`.
fn atan_at_scale(x: &Decimal, w: i64) -> Result<Decimal> {
    if x.is_negative() {
        return Ok(atan_at_scale(&x.negate(), w)?.negate());
    }

    let one = Decimal::from(1);
    if *x > one {
        // atan(x) = pi/2 - atan(1/x)
        let inv = one.divide_with_scale(x, w, RoundingMode::HalfEven)?;
        let half_pi = pi_at_scale(w)?.divide_with_scale(&Decimal::from(2), w, RoundingMode::HalfEven)?;
        Ok(half_pi.subtract(&atan_reduced(&inv, w)?))
    } else {
        atan_reduced(x, w)
    }
}

/// Compute `pi` with Machin's formula `pi = 16 atan(1/5) - 4 atan(1/239)`.
fn pi_at_scale(w: i64) -> Result<Decimal> {
    let w = w + 3;
    let a = atan_reduced(&Decimal::new(Integer::from(2), 1), w)?;
    let b = atan_reduced(
        &Decimal::from(1).divide_with_scale(&Decimal::from(239), w, RoundingMode::HalfEven)?,
        w,
    )?;
    Ok(a.multiply(&Decimal::from(16))
        .subtract(&b.multiply(&Decimal::from(4))))
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.signum().cmp(&other.signum()) {
            Ordering::Equal => {}
            ord => return ord,
        }

        if self.scale == other.scale || self.is_zero() {
            return self.unscaled.cmp(&other.unscaled);
        }

        // same sign and both non-zero: the leading digit decides unless it is in the same place
        let magnitude = self.adjusted_exponent().cmp(&other.adjusted_exponent());
        if magnitude != Ordering::Equal {
            return if self.is_negative() {
                magnitude.reverse()
            } else {
                magnitude
            };
        }

        // equal adjusted exponents bound the scale difference by the digit counts
        let shift = pow10(self.scale.abs_diff(other.scale) as u32);
        if self.scale < other.scale {
            Integer::from(&self.unscaled * &shift).cmp(&other.unscaled)
        } else {
            self.unscaled.cmp(&Integer::from(&other.unscaled * &shift))
        }
    }
}

impl From<Integer> for Decimal {
    fn from(value: Integer) -> Self {
        Decimal::new(value, 0)
    }
}

impl From<&Integer> for Decimal {
    fn from(value: &Integer) -> Self {
        Decimal::new(value.clone(), 0)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Decimal::new(Integer::from(value), 0)
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Decimal::new(Integer::from(value), 0)
    }
}

impl FromStr for Decimal {
    type Err = NumericError;

    /// Parse a decimal such as `-12.5`, `0.001` or `1.5e-7`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || NumericError::invalid_argument(format!("Could not parse decimal: {}", s));

        let (mantissa, exponent) = match s.find(|c| c == 'e' || c == 'E') {
            Some(pos) => (
                &s[..pos],
                s[pos + 1..].parse::<i64>().map_err(|_| invalid())?,
            ),
            None => (s, 0),
        };

        let (int_part, frac_part) = match mantissa.find('.') {
            Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
            None => (mantissa, ""),
        };

        let (negative, int_digits) = match int_part.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, int_part.strip_prefix('+').unwrap_or(int_part)),
        };

        if (int_digits.is_empty() && frac_part.is_empty())
            || !int_digits.chars().all(|c| c.is_ascii_digit())
            || !frac_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let digits = format!("{}{}", int_digits, frac_part);
        let mut unscaled: Integer = digits.parse().map_err(|_| invalid())?;
        if negative {
            unscaled = -unscaled;
        }

        let scale = (frac_part.len() as i64)
            .checked_sub(exponent)
            .ok_or_else(invalid)?;
        Ok(Decimal::new(unscaled, scale))
    }
}

impl Display for Decimal {
    /// Write the decimal in plain notation, without an exponent.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let digits = Integer::from(self.unscaled.abs_ref()).to_string();
        if self.is_negative() {
            f.write_str("-")?;
        }

        if self.scale <= 0 {
            f.write_str(&digits)?;
            if self.unscaled != 0 {
                for _ in 0..-self.scale {
                    f.write_str("0")?;
                }
            }
            return Ok(());
        }

        let scale = self.scale as usize;
        if digits.len() > scale {
            let (int, frac) = digits.split_at(digits.len() - scale);
            write!(f, "{}.{}", int, frac)
        } else {
            write!(f, "0.{}{}", "0".repeat(scale - digits.len()), digits)
        }
    }
}

impl Debug for Decimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Scalar for Decimal {
    const NAME: &'static str = "Decimal";

    #[inline]
    fn zero() -> Self {
        Decimal::new(Integer::new(), 0)
    }

    #[inline]
    fn one() -> Self {
        Decimal::new(Integer::from(1), 0)
    }

    #[inline]
    fn add(&self, rhs: &Self) -> Self {
        Decimal::add(self, rhs)
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
        Decimal::is_zero(self)
    }

    #[inline]
    fn is_one(&self) -> bool {
        *self == <Decimal as Scalar>::one()
    }

    #[inline]
    fn is_invertible(&self) -> bool {
        !Decimal::is_zero(self)
    }

    fn sample(rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self {
        Decimal::new(
            Integer::from(rng.gen_range(range.0..range.1)),
            rng.gen_range(0..4),
        )
    }
}

impl OrderedScalar for Decimal {
    #[inline]
    fn value_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    #[inline]
    fn abs(&self) -> Self {
        Decimal::abs(self)
    }

    fn sqrt(&self, ctx: &SqrtContext) -> Result<Decimal> {
        sqrt::sqrt(self, ctx)
    }
}

impl Modulus for Decimal {
    type Real = Decimal;

    #[inline]
    fn abs_pow2(&self) -> Decimal {
        self.multiply(self)
    }
}

impl RealScalar for Decimal {
    const COMPLEX_NAME: &'static str = "DecimalComplex";

    #[inline]
    fn to_decimal(&self) -> Decimal {
        self.clone()
    }
}
