//! Process-wide defaults used by the zero-argument conveniences.
//!
//! The defaults are read once from the environment:
//! - `NUMTOWER_SQRT_PRECISION`: the default square root precision, a decimal in `(0, 1)`.
//! - `NUMTOWER_ROUNDING`: the default rounding mode, for example `HALF_EVEN`.
//! - `NUMTOWER_DIGITS`: the number of significant digits of the default [MathContext].
//!
//! Invalid values are reported and replaced by the built-in defaults.
use std::env;

use once_cell::sync::Lazy;
use tracing::warn;

use crate::domains::{
    decimal::{Decimal, MathContext, RoundingMode},
    integer::Integer,
};

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

/// The defaults of the square root approximation and of decimal division.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// The relative precision at which the square root iteration stops.
    pub sqrt_precision: Decimal,
    /// The rounding mode of square roots without an explicit mode.
    pub rounding: RoundingMode,
    /// The context of divisions and angles without an explicit context.
    pub math_context: MathContext,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            sqrt_precision: Decimal::new(Integer::from(1), 34),
            rounding: RoundingMode::HalfEven,
            math_context: MathContext::DECIMAL128,
        }
    }
}

impl Settings {
    /// Get the global settings.
    pub fn get() -> &'static Settings {
        &SETTINGS
    }

    /// Read the settings from the environment, falling back to the defaults
    /// for every variable that is unset or invalid.
    pub fn from_env() -> Settings {
        Settings::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Settings {
        let mut settings = Settings::default();

        if let Some(value) = lookup("NUMTOWER_SQRT_PRECISION") {
            match value.trim().parse::<Decimal>() {
                Ok(p) if p > Decimal::from(0) && p < Decimal::from(1) => settings.sqrt_precision = p,
                _ => warn!(
                    "Ignoring NUMTOWER_SQRT_PRECISION={}: expected a decimal in (0, 1)",
                    value
                ),
            }
        }

        if let Some(value) = lookup("NUMTOWER_ROUNDING") {
            match value.trim().parse::<RoundingMode>() {
                Ok(mode) => settings.rounding = mode,
                Err(e) => warn!("Ignoring NUMTOWER_ROUNDING={}: {}", value, e),
            }
        }

        let mut digits = settings.math_context.precision();
        if let Some(value) = lookup("NUMTOWER_DIGITS") {
            match value.trim().parse::<u32>() {
                Ok(d) if d > 0 => digits = d,
                _ => warn!(
                    "Ignoring NUMTOWER_DIGITS={}: expected a positive number of digits",
                    value
                ),
            }
        }

        if let Ok(mc) = MathContext::new(digits, settings.rounding) {
            settings.math_context = mc;
        }

        settings
    }
}

#[cfg(test)]
mod test {
    use super::Settings;
    use crate::domains::decimal::{Decimal, MathContext, RoundingMode};

    #[test]
    fn defaults() {
        let s = Settings::from_lookup(|_| None);
        assert_eq!(s, Settings::default());
        assert_eq!(s.sqrt_precision, "1e-34".parse::<Decimal>().unwrap());
        assert_eq!(s.math_context, MathContext::DECIMAL128);
    }

    #[test]
    fn overrides() {
        let s = Settings::from_lookup(|key| match key {
            "NUMTOWER_SQRT_PRECISION" => Some("0.001".to_owned()),
            "NUMTOWER_ROUNDING" => Some("half_up".to_owned()),
            "NUMTOWER_DIGITS" => Some("12".to_owned()),
            _ => None,
        });
        assert_eq!(s.sqrt_precision, "0.001".parse::<Decimal>().unwrap());
        assert_eq!(s.rounding, RoundingMode::HalfUp);
        assert_eq!(
            s.math_context,
            MathContext::new(12, RoundingMode::HalfUp).unwrap()
        );
    }

    #[test]
    fn invalid_values_fall_back() {
        let s = Settings::from_lookup(|key| match key {
            "NUMTOWER_SQRT_PRECISION" => Some("2".to_owned()),
            "NUMTOWER_ROUNDING" => Some("sideways".to_owned()),
            "NUMTOWER_DIGITS" => Some("0".to_owned()),
            _ => None,
        });
        assert_eq!(s, Settings::default());
    }
}
