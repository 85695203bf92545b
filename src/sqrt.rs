//! Square roots of non-negative integers and decimals.
//!
//! The square root is approximated with Heron's iteration `next = (a + x / a) / 2`,
//! carried out on [Decimal]s at a working scale that is large enough for the
//! requested precision. The iteration stops when two successive approximations
//! differ by at most `precision * next`, after which the result is rounded to the
//! scale and rounding mode of the [SqrtContext].
//!
//! ```
//! use numtower::domains::decimal::{Decimal, RoundingMode};
//! use numtower::sqrt::{sqrt, SqrtContext};
//!
//! let ctx = SqrtContext::with_scale(10, RoundingMode::HalfEven).unwrap();
//! assert_eq!(sqrt(&Decimal::from(2), &ctx).unwrap().to_string(), "1.4142135624");
//! assert_eq!(sqrt(&Decimal::from(16), &ctx).unwrap(), Decimal::from(4));
//! ```
use tracing::{debug, instrument};

use crate::{
    domains::{
        decimal::{Decimal, MathContext, RoundingMode},
        integer::{isqrt, Integer},
    },
    errors::{NumericError, Result},
    settings::Settings,
};

/// The number of digits computed beyond the requested precision.
const GUARD_DIGITS: i64 = 5;

/// The configuration of a square root approximation: the relative precision
/// at which the iteration stops, and the scale and rounding mode of the result.
#[derive(Clone, Debug, PartialEq)]
pub struct SqrtContext {
    precision: Decimal,
    scale: i64,
    rounding: RoundingMode,
}

impl Default for SqrtContext {
    /// The precision and rounding mode of the global [Settings], with
    /// the scale derived from the precision.
    fn default() -> Self {
        let settings = Settings::get();
        SqrtContext {
            precision: settings.sqrt_precision.clone(),
            scale: decimal_places(&settings.sqrt_precision),
            rounding: settings.rounding,
        }
    }
}

/// The number of digits after the decimal point, ignoring trailing zeros.
fn decimal_places(d: &Decimal) -> i64 {
    d.strip_trailing_zeros().scale().max(0)
}

fn check_precision(precision: &Decimal) -> Result<()> {
    if *precision <= Decimal::from(0) || *precision >= Decimal::from(1) {
        Err(NumericError::invalid_argument(format!(
            "The precision must be in the range (0, 1), but was {}",
            precision
        )))
    } else {
        Ok(())
    }
}

fn check_scale(scale: i64) -> Result<()> {
    if scale < 0 {
        Err(NumericError::invalid_argument(format!(
            "The scale must not be negative, but was {}",
            scale
        )))
    } else {
        Ok(())
    }
}

impl SqrtContext {
    /// Stop at relative `precision` in `(0, 1)`. The result has as many
    /// digits after the decimal point as `precision`.
    pub fn with_precision(precision: Decimal) -> Result<SqrtContext> {
        check_precision(&precision)?;
        Ok(SqrtContext {
            scale: decimal_places(&precision),
            precision,
            rounding: Settings::get().rounding,
        })
    }

    /// Produce a result with `scale` digits after the decimal point, iterating
    /// until the precision `10^-(scale + 1)` is reached.
    pub fn with_scale(scale: i64, rounding: RoundingMode) -> Result<SqrtContext> {
        check_scale(scale)?;
        Ok(SqrtContext {
            precision: Decimal::new(Integer::from(1), scale + 1),
            scale,
            rounding,
        })
    }

    pub fn with_precision_and_scale(
        precision: Decimal,
        scale: i64,
        rounding: RoundingMode,
    ) -> Result<SqrtContext> {
        check_precision(&precision)?;
        check_scale(scale)?;
        Ok(SqrtContext {
            precision,
            scale,
            rounding,
        })
    }

    pub fn precision(&self) -> &Decimal {
        &self.precision
    }

    pub fn scale(&self) -> i64 {
        self.scale
    }

    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }
}

fn check_non_negative(x: &Decimal) -> Result<()> {
    if x.is_negative() {
        Err(NumericError::invalid_argument(format!(
            "Cannot take the square root of the negative value {}",
            x
        )))
    } else {
        Ok(())
    }
}

/// Approximate the square root of the non-negative `x`.
#[instrument(level = "trace", fields(%x))]
pub fn sqrt(x: &Decimal, ctx: &SqrtContext) -> Result<Decimal> {
    check_non_negative(x)?;
    if x.is_zero() {
        return Ok(Decimal::new(Integer::new(), ctx.scale));
    }

    // the exponent of the leading digit of sqrt(x)
    let root_exp = x.adjusted_exponent().div_euclid(2);
    let precision_digits = -ctx.precision.adjusted_exponent();
    let working_scale = ctx.scale.max(precision_digits - root_exp) + GUARD_DIGITS;

    let mut approx = if *x >= Decimal::from(1) {
        Decimal::from(isqrt(&x.integer_part()?))
    } else {
        Decimal::new(Integer::from(1), -root_exp)
    };

    let two = Decimal::from(2);
    let mut iterations = 0;
    loop {
        let quotient = x.divide_with_scale(&approx, working_scale, RoundingMode::HalfEven)?;
        let next = approx
            .add(&quotient)
            .divide_with_scale(&two, working_scale, RoundingMode::HalfEven)?;
        iterations += 1;

        let converged = next.subtract(&approx).abs() <= ctx.precision.multiply(&next);
        approx = next;
        if converged {
            break;
        }
    }

    debug!(
        "Square root converged after {} iterations at working scale {}",
        iterations, working_scale
    );

    approx.set_scale(ctx.scale, ctx.rounding)
}

/// Approximate the square root of the non-negative integer `n`.
pub fn sqrt_integer(n: &Integer, ctx: &SqrtContext) -> Result<Decimal> {
    sqrt(&Decimal::from(n), ctx)
}

/// Approximate the square root of the non-negative `x` to the significant digits of `mc`.
pub fn sqrt_to_digits(x: &Decimal, mc: &MathContext) -> Result<Decimal> {
    check_non_negative(x)?;
    if x.is_zero() {
        return Ok(Decimal::new(Integer::new(), 0));
    }

    let digits = mc.precision() as i64 + 2;
    let root_exp = x.adjusted_exponent().div_euclid(2);
    let ctx = SqrtContext::with_precision_and_scale(
        Decimal::new(Integer::from(1), digits),
        (digits - root_exp).max(0),
        RoundingMode::Down,
    )?;

    sqrt(x, &ctx)?.round(mc)
}

#[cfg(test)]
mod test {
    use super::{sqrt, sqrt_integer, sqrt_to_digits, SqrtContext};
    use crate::{
        domains::{
            decimal::{Decimal, MathContext, RoundingMode},
            integer::{pow10, Integer},
        },
        errors::NumericError,
    };

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn contexts() {
        let ctx = SqrtContext::with_precision(d("0.0001")).unwrap();
        assert_eq!(ctx.scale(), 4);
        assert_eq!(ctx.precision(), &d("0.0001"));

        let ctx = SqrtContext::with_scale(3, RoundingMode::Down).unwrap();
        assert_eq!(ctx.precision(), &d("0.0001"));

        let ctx = SqrtContext::default();
        assert_eq!(ctx.scale(), 34);

        assert!(SqrtContext::with_precision(d("0")).is_err());
        assert!(SqrtContext::with_precision(d("1")).is_err());
        assert!(SqrtContext::with_precision(d("-0.1")).is_err());
        assert!(SqrtContext::with_scale(-1, RoundingMode::HalfUp).is_err());
        assert!(SqrtContext::with_precision_and_scale(d("1.5"), 2, RoundingMode::HalfUp).is_err());
    }

    #[test]
    fn extreme_precision() {
        let ctx = SqrtContext::with_precision(d("1e-5000000000")).unwrap();
        assert_eq!(ctx.scale(), 5_000_000_000);

        let err = sqrt(&d("2"), &ctx).unwrap_err();
        assert!(matches!(err, NumericError::InvalidArgument(_)));
    }

    #[test]
    fn perfect_squares_are_exact() {
        let ctx = SqrtContext::default();
        assert_eq!(sqrt_integer(&Integer::from(25), &ctx).unwrap(), Decimal::from(5));
        assert_eq!(sqrt(&d("6.25"), &ctx).unwrap(), d("2.5"));
        assert_eq!(sqrt(&d("0.0009"), &ctx).unwrap(), d("0.03"));

        let big = Integer::from(pow10(40) + 7u32);
        let square = Integer::from(&big * &big);
        assert_eq!(sqrt_integer(&square, &ctx).unwrap(), Decimal::from(big));
    }

    #[test]
    fn zero_has_requested_scale() {
        let ctx = SqrtContext::with_scale(7, RoundingMode::HalfUp).unwrap();
        let r = sqrt(&Decimal::from(0), &ctx).unwrap();
        assert!(r.is_zero());
        assert_eq!(r.scale(), 7);
    }

    #[test]
    fn irrational_roots() {
        let ctx = SqrtContext::with_scale(20, RoundingMode::HalfEven).unwrap();
        assert_eq!(
            sqrt(&Decimal::from(2), &ctx).unwrap().to_string(),
            "1.41421356237309504880"
        );
        assert_eq!(
            sqrt(&d("0.5"), &ctx).unwrap().to_string(),
            "0.70710678118654752440"
        );

        let ctx = SqrtContext::with_scale(5, RoundingMode::Down).unwrap();
        assert_eq!(sqrt(&Decimal::from(3), &ctx).unwrap().to_string(), "1.73205");
        let ctx = SqrtContext::with_scale(5, RoundingMode::Up).unwrap();
        assert_eq!(sqrt(&Decimal::from(3), &ctx).unwrap().to_string(), "1.73206");
    }

    #[test]
    fn square_is_within_precision() {
        let ctx = SqrtContext::with_precision(d("1e-12")).unwrap();
        for x in ["0.000123", "7", "12345.678", "99999999999999999999"] {
            let x = d(x);
            let r = sqrt(&x, &ctx).unwrap();
            assert_eq!(r.scale(), 12);
            let err = r.multiply(&r).subtract(&x).abs();
            let bound = x.multiply(&d("1e-10")).add(&d("1e-10"));
            assert!(err <= bound, "sqrt({}) = {}", x, r);
        }
    }

    #[test]
    fn significant_digits() {
        let mc = MathContext::new(10, RoundingMode::HalfEven).unwrap();
        assert_eq!(sqrt_to_digits(&Decimal::from(2), &mc).unwrap().to_string(), "1.414213562");
        assert_eq!(
            sqrt_to_digits(&d("2e-20"), &mc).unwrap().to_string(),
            "0.0000000001414213562"
        );
        assert_eq!(
            sqrt_to_digits(&d("2e20"), &mc).unwrap(),
            d("14142135620")
        );
        assert_eq!(sqrt_to_digits(&Decimal::from(9), &mc).unwrap(), Decimal::from(3));
    }

    #[test]
    fn negative_argument() {
        let ctx = SqrtContext::default();
        let err = sqrt(&Decimal::from(-4), &ctx).unwrap_err();
        assert!(err.to_string().contains("-4"));
        assert!(sqrt_integer(&Integer::from(-1), &ctx).is_err());
    }
}
