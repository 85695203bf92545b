//! Immutable vectors and matrices over the scalars of the tower, with their builders.
//!
//! Indices are 1-based: the elements of a vector of size `n` are numbered `1..=n`,
//! and the cells of a matrix with `r` rows and `c` columns are numbered
//! `(1, 1)..=(r, c)`.
//!
//! ```
//! use numtower::domains::integer::Integer;
//! use numtower::sqrt::SqrtContext;
//! use numtower::tensors::vector::Vector;
//!
//! let mut b = Vector::builder(2).unwrap();
//! b.put(1, Integer::from(3)).unwrap();
//! b.put(2, Integer::from(4)).unwrap();
//! let v = b.build().unwrap();
//!
//! assert_eq!(v.euclidean_norm(&SqrtContext::default()).unwrap(), 5.into());
//! ```

pub mod matrix;
pub mod vector;
