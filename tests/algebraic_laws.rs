use numtower::domains::{
    complex::{Complex, SimpleComplex},
    decimal::Decimal,
    integer::Integer,
    rational::Fraction,
    Scalar,
};
use numtower::tensors::{matrix::Matrix, vector::Vector};
use rand::{rngs::StdRng, SeedableRng};

const RANGE: (i64, i64) = (-50, 50);

/// Check the ring laws for `S`, with `eq` as the notion of equality.
fn check_ring_laws<S: Scalar>(rng: &mut StdRng, eq: impl Fn(&S, &S) -> bool) {
    for _ in 0..50 {
        let a = S::sample(rng, RANGE);
        let b = S::sample(rng, RANGE);
        let c = S::sample(rng, RANGE);

        assert!(eq(&a.add(&b), &b.add(&a)), "{:?} + {:?}", a, b);
        assert!(eq(&a.mul(&b), &b.mul(&a)), "{:?} * {:?}", a, b);
        assert!(eq(&a.add(&b).add(&c), &a.add(&b.add(&c))));
        assert!(eq(&a.mul(&b).mul(&c), &a.mul(&b.mul(&c))));
        assert!(eq(&a.mul(&b.add(&c)), &a.mul(&b).add(&a.mul(&c))));
        assert!(eq(&a.add(&S::zero()), &a));
        assert!(eq(&a.mul(&S::one()), &a));
        assert!(a.add(&a.neg()).is_zero());
        assert!(eq(&a.sub(&b), &a.add(&b.neg())));
        assert!(eq(&a.pow(3), &a.mul(&a).mul(&a)));
    }
}

#[test]
fn integer_laws() {
    let mut rng = StdRng::seed_from_u64(10);
    check_ring_laws::<Integer>(&mut rng, |a, b| a == b);
}

#[test]
fn decimal_laws() {
    let mut rng = StdRng::seed_from_u64(11);
    check_ring_laws::<Decimal>(&mut rng, |a, b| a == b);
}

#[test]
fn fraction_laws() {
    let mut rng = StdRng::seed_from_u64(12);
    check_ring_laws::<Fraction>(&mut rng, |a, b| a.equivalent(b));

    for _ in 0..50 {
        let a = Fraction::sample(&mut rng, RANGE);
        let r = a.reduce();
        assert_eq!(r.reduce(), r);
        assert_eq!(a.normalize().normalize(), a.normalize());
        assert!(r.equivalent(&a));

        if a.is_invertible() {
            assert!(a.multiply(&a.invert().unwrap()).is_one());
        } else {
            assert!(a.invert().is_err());
        }
    }
}

#[test]
fn complex_laws() {
    let mut rng = StdRng::seed_from_u64(13);
    check_ring_laws::<SimpleComplex>(&mut rng, |a, b| a == b);
    check_ring_laws::<Complex<Decimal>>(&mut rng, |a, b| a == b);

    for _ in 0..20 {
        let a = SimpleComplex::sample(&mut rng, RANGE);
        let b = SimpleComplex::sample(&mut rng, RANGE);
        assert_eq!(a.multiply(&b).abs_pow2(), Integer::from(a.abs_pow2() * b.abs_pow2()));
        assert_eq!(a.multiply(&a.conjugate()), Complex::from(a.abs_pow2()));
        assert_eq!(a.to_matrix().multiply(&b.to_matrix()).unwrap(), a.multiply(&b).to_matrix());
    }
}

#[test]
fn vector_laws() {
    let mut rng = StdRng::seed_from_u64(14);
    let sample = |rng: &mut StdRng| {
        Vector::from_vec((0..4).map(|_| Integer::sample(rng, RANGE)).collect()).unwrap()
    };

    for _ in 0..20 {
        let v = sample(&mut rng);
        let w = sample(&mut rng);
        let u = sample(&mut rng);
        let c = Integer::sample(&mut rng, RANGE);
        let d = Integer::sample(&mut rng, RANGE);

        assert_eq!(v.add(&w).unwrap(), w.add(&v).unwrap());
        assert_eq!(
            v.add(&w).unwrap().add(&u).unwrap(),
            v.add(&w.add(&u).unwrap()).unwrap()
        );
        assert_eq!(v.add(&Vector::zero(4).unwrap()).unwrap(), v);
        assert_eq!(v.add(&v.negate()).unwrap(), Vector::zero(4).unwrap());
        assert_eq!(
            v.add(&w).unwrap().scalar_multiply(&c),
            v.scalar_multiply(&c).add(&w.scalar_multiply(&c)).unwrap()
        );
        assert_eq!(
            v.scalar_multiply(&c.add(&d)),
            v.scalar_multiply(&c).add(&v.scalar_multiply(&d)).unwrap()
        );
        assert_eq!(v.dot_product(&w).unwrap(), w.dot_product(&v).unwrap());
    }
}

#[test]
fn matrix_laws() {
    let mut rng = StdRng::seed_from_u64(15);
    let sample = |rng: &mut StdRng, r: u32, c: u32| {
        Matrix::from_linear(
            (0..r * c).map(|_| Fraction::sample(rng, RANGE)).collect(),
            r,
            c,
        )
        .unwrap()
    };
    let equivalent = |a: &Matrix<Fraction>, b: &Matrix<Fraction>| {
        a.subtract(b).unwrap().entries().iter().all(|e| e.is_zero())
    };

    for _ in 0..10 {
        let a = sample(&mut rng, 2, 3);
        let b = sample(&mut rng, 2, 3);
        let c = sample(&mut rng, 3, 2);
        let d = sample(&mut rng, 2, 2);

        assert!(equivalent(&a.add(&b).unwrap(), &b.add(&a).unwrap()));
        assert!(equivalent(&a.add(&a.negate()).unwrap(), &Matrix::zero(2, 3).unwrap()));
        assert!(equivalent(
            &a.add(&b).unwrap().multiply(&c).unwrap(),
            &a.multiply(&c).unwrap().add(&b.multiply(&c).unwrap()).unwrap()
        ));
        assert!(equivalent(
            &a.multiply(&c).unwrap().multiply(&d).unwrap(),
            &a.multiply(&c.multiply(&d).unwrap()).unwrap()
        ));
        assert!(equivalent(
            &a.multiply(&c).unwrap().transpose(),
            &c.transpose().multiply(&a.transpose()).unwrap()
        ));
        assert!(equivalent(
            &d.multiply(&Matrix::identity_matrix(2).unwrap()).unwrap(),
            &d
        ));
        assert!(d.add(&d.transpose()).unwrap().symmetric());
        assert!(d.subtract(&d.transpose()).unwrap().skew_symmetric());
    }
}
