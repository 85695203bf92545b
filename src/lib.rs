//! numtower is an arbitrary-precision numeric tower with immutable vectors and matrices.
//!
//! It provides exact fractions, complex numbers over integers and decimals, and
//! vectors and matrices over all of these scalars. Exact scalars keep every
//! algebraic law exactly, while irrational results such as norms are approximated
//! to a precision chosen by the caller.
//!
//! For example:
//!
//! ```
//! use numtower::domains::integer::Integer;
//! use numtower::domains::rational::Fraction;
//! use numtower::tensors::matrix::Matrix;
//!
//! let a = Fraction::new(1, 2).unwrap().add(&Fraction::new(1, 3).unwrap());
//! assert_eq!(a, Fraction::new(5, 6).unwrap());
//!
//! let m = Matrix::from_nested_vec(vec![
//!     vec![Integer::from(2), Integer::from(1)],
//!     vec![Integer::from(1), Integer::from(1)],
//! ])
//! .unwrap();
//! assert_eq!(m.determinant().unwrap(), 1);
//! assert!(m.invertible());
//! ```
//!
//! Defaults for the square root precision and for decimal rounding are read from the
//! environment, see [settings].

pub mod combinatorics;
pub mod domains;
pub mod errors;
pub mod settings;
pub mod sqrt;
pub mod tensors;
