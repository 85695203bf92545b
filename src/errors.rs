//! The error type shared by all fallible operations.

use std::fmt::{Display, Formatter};

/// A result with a [NumericError] as failure.
pub type Result<T> = std::result::Result<T, NumericError>;

/// Errors that can occur when constructing or operating on numbers, vectors and matrices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    /// A mandatory value was never supplied.
    NotNull { parameter: String },
    /// A value is well-typed but not allowed for the operation.
    InvalidArgument(String),
    /// The operation is not defined for the receiver.
    IllegalState(String),
}

impl NumericError {
    pub fn not_null(parameter: impl Into<String>) -> NumericError {
        NumericError::NotNull {
            parameter: parameter.into(),
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> NumericError {
        NumericError::InvalidArgument(msg.into())
    }

    pub fn illegal_state(msg: impl Into<String>) -> NumericError {
        NumericError::IllegalState(msg.into())
    }

    /// An index that is not in the inclusive range `[min, max]`.
    pub fn index_out_of_range(name: &str, min: u32, max: u32, actual: u32) -> NumericError {
        NumericError::InvalidArgument(format!(
            "{} must be in the range [{}, {}], but was {}",
            name, min, max, actual
        ))
    }

    /// Check that `value` lies in `[min, max]`.
    pub fn check_index(name: &str, min: u32, max: u32, actual: u32) -> Result<()> {
        if actual < min || actual > max {
            Err(NumericError::index_out_of_range(name, min, max, actual))
        } else {
            Ok(())
        }
    }

    /// Return the message of the error, without the kind.
    pub fn message(&self) -> String {
        match self {
            NumericError::NotNull { parameter } => format!("{} must not be null", parameter),
            NumericError::InvalidArgument(m) | NumericError::IllegalState(m) => m.clone(),
        }
    }
}

impl Display for NumericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericError::NotNull { parameter } => write!(f, "{} must not be null", parameter),
            NumericError::InvalidArgument(m) => write!(f, "Invalid argument: {}", m),
            NumericError::IllegalState(m) => write!(f, "Illegal state: {}", m),
        }
    }
}

impl std::error::Error for NumericError {}

#[cfg(test)]
mod test {
    use super::NumericError;

    #[test]
    fn messages() {
        let e = NumericError::index_out_of_range("index", 1, 3, 5);
        assert_eq!(e.message(), "index must be in the range [1, 3], but was 5");
        assert_eq!(
            e.to_string(),
            "Invalid argument: index must be in the range [1, 3], but was 5"
        );

        let e = NumericError::not_null("entry (2, 1)");
        assert_eq!(e.to_string(), "entry (2, 1) must not be null");

        assert!(NumericError::check_index("row", 1, 2, 2).is_ok());
        assert!(NumericError::check_index("row", 1, 2, 0).is_err());
    }
}
