use std::ops::{Add, Mul, Neg, Sub};

use ahash::HashMap;
use tracing::debug;

use crate::{
    domains::{complex::Complex, decimal::Decimal, Modulus, OrderedScalar, RealScalar, Scalar},
    errors::{NumericError, Result},
    sqrt::SqrtContext,
};

use super::matrix::Matrix;

/// An immutable vector of fixed size with 1-based indices.
///
/// Vectors are created with a [VectorBuilder] or from a list of scalars.
/// All operations return new vectors.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Vector<S> {
    pub(crate) data: Vec<S>,
}

/// A mutable staging area for the elements of a [Vector].
///
/// Indices are checked when they are put, completeness is checked by [VectorBuilder::build].
/// A builder can be reused after building.
#[derive(Clone, Debug)]
pub struct VectorBuilder<S> {
    size: u32,
    values: HashMap<u32, S>,
}

pub(crate) fn check_size(name: &str, size: u32) -> Result<()> {
    if size == 0 {
        Err(NumericError::invalid_argument(format!(
            "{} must be positive, but was 0",
            name
        )))
    } else {
        Ok(())
    }
}

/// Convert the length of a list to a positive size.
pub(crate) fn checked_size(name: &str, len: usize) -> Result<u32> {
    let size = u32::try_from(len).map_err(|_| {
        NumericError::invalid_argument(format!(
            "{} must be at most {}, but was {}",
            name,
            u32::MAX,
            len
        ))
    })?;
    check_size(name, size)?;
    Ok(size)
}

impl<S: Scalar> VectorBuilder<S> {
    /// Create a builder for a vector with `size` elements.
    pub fn new(size: u32) -> Result<VectorBuilder<S>> {
        check_size("size", size)?;
        Ok(VectorBuilder {
            size,
            values: HashMap::default(),
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Set the element at `index` in `[1, size]`.
    pub fn put(&mut self, index: u32, value: S) -> Result<&mut Self> {
        NumericError::check_index("index", 1, self.size, index)?;
        self.values.insert(index, value);
        Ok(self)
    }

    /// Set every element to `value`.
    pub fn put_all(&mut self, value: S) -> &mut Self {
        for i in 1..=self.size {
            self.values.insert(i, value.clone());
        }
        self
    }

    /// Create the vector. Every element must have been set.
    pub fn build(&self) -> Result<Vector<S>> {
        let mut data = Vec::with_capacity(self.size as usize);
        for i in 1..=self.size {
            match self.values.get(&i) {
                Some(v) => data.push(v.clone()),
                None => {
                    debug!("Vector element {} of {} was never set", i, self.size);
                    return Err(NumericError::not_null(format!("element {}", i)));
                }
            }
        }

        Ok(Vector { data })
    }
}

impl<S: Scalar> Vector<S> {
    /// Create a builder for a vector with `size` elements.
    pub fn builder(size: u32) -> Result<VectorBuilder<S>> {
        VectorBuilder::new(size)
    }

    /// Create a vector from a non-empty list of scalars.
    pub fn from_vec(data: Vec<S>) -> Result<Vector<S>> {
        checked_size("size", data.len())?;
        Ok(Vector { data })
    }

    /// Create a vector of `size` zeroes.
    pub fn zero(size: u32) -> Result<Vector<S>> {
        check_size("size", size)?;
        Ok(Vector {
            data: (0..size).map(|_| S::zero()).collect(),
        })
    }

    pub fn size(&self) -> u32 {
        self.data.len() as u32
    }

    /// Get the element at `index` in `[1, size]`.
    pub fn element(&self, index: u32) -> Result<&S> {
        NumericError::check_index("index", 1, self.size(), index)?;
        Ok(&self.data[index as usize - 1])
    }

    /// The elements in order of their index.
    pub fn elements(&self) -> &[S] {
        &self.data
    }

    /// The pairs of 1-based index and element.
    pub fn entries(&self) -> impl Iterator<Item = (u32, &S)> {
        self.data.iter().enumerate().map(|(i, e)| (i as u32 + 1, e))
    }

    fn check_same_size(&self, other: &Vector<S>) -> Result<()> {
        if self.data.len() != other.data.len() {
            Err(NumericError::invalid_argument(format!(
                "Vectors do not have equal size: {} vs {}",
                self.data.len(),
                other.data.len()
            )))
        } else {
            Ok(())
        }
    }

    fn zip_with(&self, other: &Vector<S>, f: impl Fn(&S, &S) -> S) -> Result<Vector<S>> {
        self.check_same_size(other)?;
        Ok(Vector {
            data: self.data.iter().zip(&other.data).map(|(a, b)| f(a, b)).collect(),
        })
    }

    pub fn add(&self, other: &Vector<S>) -> Result<Vector<S>> {
        self.zip_with(other, S::add)
    }

    pub fn subtract(&self, other: &Vector<S>) -> Result<Vector<S>> {
        self.zip_with(other, S::sub)
    }

    /// Multiply every element by `c`.
    pub fn scalar_multiply(&self, c: &S) -> Vector<S> {
        Vector {
            data: self.data.iter().map(|e| c.mul(e)).collect(),
        }
    }

    pub fn negate(&self) -> Vector<S> {
        Vector {
            data: self.data.iter().map(S::neg).collect(),
        }
    }

    /// Compute `sum_i v_i * w_i`. For complex vectors no element is conjugated.
    pub fn dot_product(&self, other: &Vector<S>) -> Result<S> {
        self.check_same_size(other)?;
        let mut res = S::zero();
        for (a, b) in self.data.iter().zip(&other.data) {
            res.add_mul_assign(a, b);
        }
        Ok(res)
    }

    /// Compute the cross product of two vectors of size 3.
    pub fn cross_product(&self, other: &Vector<S>) -> Result<Vector<S>> {
        self.check_same_size(other)?;
        if self.data.len() != 3 {
            return Err(NumericError::invalid_argument(format!(
                "The cross product requires vectors of size 3, but the size was {}",
                self.data.len()
            )));
        }

        let (a, b) = (&self.data, &other.data);
        Ok(Vector {
            data: vec![
                a[1].mul(&b[2]).sub(&a[2].mul(&b[1])),
                a[2].mul(&b[0]).sub(&a[0].mul(&b[2])),
                a[0].mul(&b[1]).sub(&a[1].mul(&b[0])),
            ],
        })
    }

    /// Convert into a matrix with a single column.
    pub fn to_column_matrix(&self) -> Matrix<S> {
        Matrix::new_unchecked(self.size(), 1, self.data.clone())
    }

    /// Convert into a matrix with a single row.
    pub fn to_row_matrix(&self) -> Matrix<S> {
        Matrix::new_unchecked(1, self.size(), self.data.clone())
    }

    /// Apply a function `f` to each element of the vector.
    pub fn map<T: Scalar>(&self, f: impl Fn(&S) -> T) -> Vector<T> {
        Vector {
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<S: Modulus> Vector<S> {
    /// Compute `sum_i |v_i|^2` exactly.
    pub fn euclidean_norm_pow2(&self) -> S::Real {
        let mut res = S::Real::zero();
        for e in &self.data {
            res = res.add(&e.abs_pow2());
        }
        res
    }

    /// Approximate the Euclidean norm. Perfect squares give exact results.
    pub fn euclidean_norm(&self, ctx: &SqrtContext) -> Result<Decimal> {
        self.euclidean_norm_pow2().sqrt(ctx)
    }

    pub fn euclidean_distance_pow2(&self, other: &Vector<S>) -> Result<S::Real> {
        Ok(self.subtract(other)?.euclidean_norm_pow2())
    }

    pub fn euclidean_distance(&self, other: &Vector<S>, ctx: &SqrtContext) -> Result<Decimal> {
        self.subtract(other)?.euclidean_norm(ctx)
    }
}

impl<S: OrderedScalar> Vector<S> {
    /// Compute `sum_i |v_i|`.
    pub fn taxicab_norm(&self) -> S {
        let mut res = S::zero();
        for e in &self.data {
            res = res.add(&e.abs());
        }
        res
    }

    /// Compute `max_i |v_i|`.
    pub fn max_norm(&self) -> S {
        let mut res = S::zero();
        for e in &self.data {
            let a = e.abs();
            if a.value_cmp(&res).is_gt() {
                res = a;
            }
        }
        res
    }

    pub fn taxicab_distance(&self, other: &Vector<S>) -> Result<S> {
        Ok(self.subtract(other)?.taxicab_norm())
    }

    pub fn max_distance(&self, other: &Vector<S>) -> Result<S> {
        Ok(self.subtract(other)?.max_norm())
    }
}

impl<T: RealScalar> Vector<Complex<T>> {
    /// Compute `sum_i |v_i|`, approximating every absolute value with `ctx`.
    pub fn taxicab_norm(&self, ctx: &SqrtContext) -> Result<Decimal> {
        let mut res = Decimal::new(Default::default(), ctx.scale());
        for e in &self.data {
            res = res.add(&e.abs(ctx)?);
        }
        Ok(res)
    }

    /// Compute `max_i |v_i|`, approximating the absolute value with `ctx`.
    pub fn max_norm(&self, ctx: &SqrtContext) -> Result<Decimal> {
        let mut res = T::zero();
        for e in &self.data {
            let a = e.abs_pow2();
            if a.value_cmp(&res).is_gt() {
                res = a;
            }
        }
        res.sqrt(ctx)
    }

    pub fn taxicab_distance(&self, other: &Vector<Complex<T>>, ctx: &SqrtContext) -> Result<Decimal> {
        self.subtract(other)?.taxicab_norm(ctx)
    }

    pub fn max_distance(&self, other: &Vector<Complex<T>>, ctx: &SqrtContext) -> Result<Decimal> {
        self.subtract(other)?.max_norm(ctx)
    }
}

impl<S: Scalar> Add<&Vector<S>> for &Vector<S> {
    type Output = Vector<S>;

    /// Add two vectors. Panics if the sizes differ.
    fn add(self, rhs: &Vector<S>) -> Self::Output {
        match Vector::add(self, rhs) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<S: Scalar> Sub<&Vector<S>> for &Vector<S> {
    type Output = Vector<S>;

    /// Subtract two vectors. Panics if the sizes differ.
    fn sub(self, rhs: &Vector<S>) -> Self::Output {
        match self.subtract(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<S: Scalar> Mul<&S> for &Vector<S> {
    type Output = Vector<S>;

    fn mul(self, rhs: &S) -> Self::Output {
        self.scalar_multiply(rhs)
    }
}

impl<S: Scalar> Neg for &Vector<S> {
    type Output = Vector<S>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

#[cfg(test)]
mod test {
    use crate::{
        domains::{
            complex::{Complex, SimpleComplex},
            decimal::{Decimal, RoundingMode},
            integer::Integer,
            rational::Fraction,
        },
        errors::NumericError,
        sqrt::SqrtContext,
        tensors::vector::{checked_size, Vector},
    };

    fn v(data: &[i64]) -> Vector<Integer> {
        Vector::from_vec(data.iter().map(|x| Integer::from(*x)).collect()).unwrap()
    }

    #[test]
    fn builder() {
        let mut b = Vector::builder(3).unwrap();
        b.put(1, Integer::from(1)).unwrap().put(3, Integer::from(3)).unwrap();

        let err = b.build().unwrap_err();
        assert_eq!(err, NumericError::not_null("element 2"));

        b.put(2, Integer::from(2)).unwrap();
        let a = b.build().unwrap();
        assert_eq!(a, v(&[1, 2, 3]));

        // the built vector does not share state with the builder
        b.put(2, Integer::from(5)).unwrap();
        assert_eq!(a, v(&[1, 2, 3]));
        assert_eq!(b.build().unwrap(), v(&[1, 5, 3]));

        let err = b.put(4, Integer::from(0)).unwrap_err();
        assert_eq!(err.message(), "index must be in the range [1, 3], but was 4");
        assert!(b.put(0, Integer::from(0)).is_err());

        b.put_all(Integer::from(7));
        assert_eq!(b.build().unwrap(), v(&[7, 7, 7]));

        assert!(Vector::<Integer>::builder(0).is_err());
        assert!(Vector::<Integer>::from_vec(vec![]).is_err());
    }

    #[test]
    fn sizes() {
        assert_eq!(checked_size("size", 3).unwrap(), 3);
        assert!(checked_size("size", 0).is_err());
        let err = checked_size("size", u32::MAX as usize + 1).unwrap_err();
        assert!(matches!(err, NumericError::InvalidArgument(_)));
        assert!(Vector::<Integer>::from_vec(vec![]).is_err());
    }

    #[test]
    fn accessors() {
        let a = v(&[4, 5, 6]);
        assert_eq!(a.size(), 3);
        assert_eq!(*a.element(1).unwrap(), 4);
        assert_eq!(*a.element(3).unwrap(), 6);
        assert!(a.element(0).is_err());
        assert!(a.element(4).is_err());
        assert_eq!(
            a.entries().map(|(i, e)| (i, e.clone())).collect::<Vec<_>>(),
            vec![(1, Integer::from(4)), (2, Integer::from(5)), (3, Integer::from(6))]
        );
    }

    #[test]
    fn arithmetic() {
        let a = v(&[1, -2, 3]);
        let b = v(&[4, 5, -6]);
        assert_eq!(a.add(&b).unwrap(), v(&[5, 3, -3]));
        assert_eq!(a.subtract(&b).unwrap(), v(&[-3, -7, 9]));
        assert_eq!(a.scalar_multiply(&Integer::from(-2)), v(&[-2, 4, -6]));
        assert_eq!(a.negate(), v(&[-1, 2, -3]));
        assert_eq!(a.dot_product(&b).unwrap(), -24);
        assert_eq!(a.cross_product(&b).unwrap(), v(&[-3, 18, 13]));
        assert_eq!(&a + &b, v(&[5, 3, -3]));
        assert_eq!(-&a, v(&[-1, 2, -3]));

        let err = a.add(&v(&[1, 2])).unwrap_err();
        assert_eq!(err.message(), "Vectors do not have equal size: 3 vs 2");
        assert!(a.dot_product(&v(&[1])).is_err());
        assert!(v(&[1, 2]).cross_product(&v(&[3, 4])).is_err());
    }

    #[test]
    #[should_panic(expected = "Vectors do not have equal size: 2 vs 1")]
    fn operator_size_mismatch() {
        let _ = &v(&[1, 2]) + &v(&[1]);
    }

    #[test]
    fn norms() {
        let a = v(&[3, -4]);
        let ctx = SqrtContext::default();
        assert_eq!(a.taxicab_norm(), 7);
        assert_eq!(a.max_norm(), 4);
        assert_eq!(a.euclidean_norm_pow2(), 25);
        assert_eq!(a.euclidean_norm(&ctx).unwrap(), Decimal::from(5));

        let b = v(&[0, 1]);
        assert_eq!(a.taxicab_distance(&b).unwrap(), 8);
        assert_eq!(a.max_distance(&b).unwrap(), 5);
        assert_eq!(a.euclidean_distance_pow2(&b).unwrap(), 34);

        let ctx = SqrtContext::with_scale(4, RoundingMode::HalfEven).unwrap();
        assert_eq!(a.euclidean_distance(&b, &ctx).unwrap().to_string(), "5.8310");

        assert_eq!(Vector::<Integer>::zero(4).unwrap().euclidean_norm(&ctx).unwrap(), Decimal::from(0));
    }

    #[test]
    fn fraction_norms() {
        let a = Vector::from_vec(vec![Fraction::new(3, 5).unwrap(), Fraction::new(-4, 5).unwrap()]).unwrap();
        assert!(a.taxicab_norm().equivalent(&Fraction::new(7, 5).unwrap()));
        assert!(a.max_norm().equivalent(&Fraction::new(4, 5).unwrap()));
        let ctx = SqrtContext::with_scale(3, RoundingMode::HalfEven).unwrap();
        assert_eq!(a.euclidean_norm(&ctx).unwrap(), Decimal::from(1));
    }

    #[test]
    fn complex_norms() {
        let c = |re: i64, im: i64| Complex::new(Integer::from(re), Integer::from(im));
        let a: Vector<SimpleComplex> = Vector::from_vec(vec![c(3, 4), c(0, -1), c(-6, 8)]).unwrap();
        let ctx = SqrtContext::with_scale(2, RoundingMode::HalfEven).unwrap();

        assert_eq!(a.euclidean_norm_pow2(), 126);
        assert_eq!(a.taxicab_norm(&ctx).unwrap(), Decimal::from(16));
        assert_eq!(a.max_norm(&ctx).unwrap(), Decimal::from(10));
        assert_eq!(a.euclidean_norm(&ctx).unwrap().to_string(), "11.22");
        assert_eq!(a.max_distance(&a, &ctx).unwrap(), Decimal::from(0));

        // the dot product is bilinear
        assert_eq!(a.dot_product(&a).unwrap(), c(-36, -72));
    }
}
