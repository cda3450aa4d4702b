//! Field elements: exact rationals, `a + b*sqrt(d)`, and `f64`.
//!
//! Invariants
//! - Canonical form: a quadratic element always has `b != 0` and a squarefree
//!   radicand `d > 1`; anything with `b == 0` is stored as `Rational`.
//! - Mixing exact and approximate operands yields an approximate result
//!   (coercion to the approximate domain).
//! - Mixing two *different* quadratic fields has no representation here. The
//!   `checked_*` methods report `DomainMismatch`; the operators panic, the way
//!   nalgebra panics on a dimension mismatch.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::error::PolytopeError;

/// `a + b*sqrt(d)` with `b != 0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuadNum {
    a: BigRational,
    b: BigRational,
    d: i64,
}

impl QuadNum {
    #[inline]
    pub fn rational_part(&self) -> &BigRational {
        &self.a
    }
    #[inline]
    pub fn sqrt_coeff(&self) -> &BigRational {
        &self.b
    }
    #[inline]
    pub fn radicand(&self) -> i64 {
        self.d
    }
}

/// A coordinate value in one of the three domain kinds.
#[derive(Clone, Debug)]
pub enum Scalar {
    Rational(BigRational),
    Quadratic(QuadNum),
    Approx(f64),
}

/// Hashable identity of an exact value; used for orbit deduplication.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum ExactKey {
    Rational(BigRational),
    Quadratic(QuadNum),
}

#[derive(Clone, Copy)]
enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl Scalar {
    #[inline]
    pub fn zero() -> Self {
        Self::Rational(BigRational::zero())
    }
    #[inline]
    pub fn one() -> Self {
        Self::Rational(BigRational::one())
    }
    #[inline]
    pub fn int(n: i64) -> Self {
        Self::Rational(BigRational::from_integer(BigInt::from(n)))
    }
    /// `num/den` as an exact rational. Panics if `den == 0` (as `Ratio::new`).
    #[inline]
    pub fn ratio(num: i64, den: i64) -> Self {
        Self::Rational(BigRational::new(BigInt::from(num), BigInt::from(den)))
    }

    /// Build `a + b*sqrt(d)`; collapses to `Rational` when `b == 0`.
    ///
    /// `d` must already be squarefree and `> 1`; domain code guarantees it.
    pub(crate) fn quadratic(a: BigRational, b: BigRational, d: i64) -> Self {
        debug_assert!(d > 1);
        if b.is_zero() {
            Self::Rational(a)
        } else {
            Self::Quadratic(QuadNum { a, b, d })
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        !matches!(self, Self::Approx(_))
    }

    #[inline]
    pub fn is_rational(&self) -> bool {
        matches!(self, Self::Rational(_))
    }

    /// Radicand of the quadratic field this value needs, if any.
    #[inline]
    pub fn radicand(&self) -> Option<i64> {
        match self {
            Self::Quadratic(z) => Some(z.d),
            _ => None,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Self::Rational(q) => q.is_zero(),
            Self::Quadratic(_) => false,
            Self::Approx(x) => *x == 0.0,
        }
    }

    /// Nearest `f64` (rounded parts for exact values).
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Rational(q) => q.to_f64().unwrap_or(f64::NAN),
            Self::Quadratic(z) => {
                let a = z.a.to_f64().unwrap_or(f64::NAN);
                let b = z.b.to_f64().unwrap_or(f64::NAN);
                a + b * (z.d as f64).sqrt()
            }
            Self::Approx(x) => *x,
        }
    }

    pub(crate) fn exact_key(&self) -> Option<ExactKey> {
        match self {
            Self::Rational(q) => Some(ExactKey::Rational(q.clone())),
            Self::Quadratic(z) => Some(ExactKey::Quadratic(z.clone())),
            Self::Approx(_) => None,
        }
    }

    /// Exact parts `(a, b, d)`; `None` for approximate values.
    fn exact_parts(&self) -> Option<(BigRational, BigRational, Option<i64>)> {
        match self {
            Self::Rational(q) => Some((q.clone(), BigRational::zero(), None)),
            Self::Quadratic(z) => Some((z.a.clone(), z.b.clone(), Some(z.d))),
            Self::Approx(_) => None,
        }
    }

    /// Sign of an exact value under the real embedding `sqrt(d) > 0`.
    pub fn exact_signum(&self) -> Option<Ordering> {
        match self {
            Self::Rational(q) => Some(q.cmp(&BigRational::zero())),
            Self::Quadratic(z) => Some(quad_sign(&z.a, &z.b, z.d)),
            Self::Approx(_) => None,
        }
    }

    /// Exact comparison; `None` when either side is approximate or the two
    /// values live in different quadratic fields.
    pub fn exact_cmp(&self, other: &Scalar) -> Option<Ordering> {
        if !(self.is_exact() && other.is_exact()) {
            return None;
        }
        self.checked_sub(other).ok()?.exact_signum()
    }

    pub fn checked_add(&self, rhs: &Scalar) -> Result<Scalar, PolytopeError> {
        self.binop(rhs, BinOp::Add)
    }
    pub fn checked_sub(&self, rhs: &Scalar) -> Result<Scalar, PolytopeError> {
        self.binop(rhs, BinOp::Sub)
    }
    pub fn checked_mul(&self, rhs: &Scalar) -> Result<Scalar, PolytopeError> {
        self.binop(rhs, BinOp::Mul)
    }
    /// Division; exact division by zero is `InvalidParams`.
    pub fn checked_div(&self, rhs: &Scalar) -> Result<Scalar, PolytopeError> {
        self.binop(rhs, BinOp::Div)
    }

    /// Multiplicative inverse; `None` for exact zero.
    pub fn recip(&self) -> Option<Scalar> {
        Scalar::one().checked_div(self).ok()
    }

    /// `self^e` by repeated squaring.
    pub fn pow(&self, mut e: u32) -> Scalar {
        let mut base = self.clone();
        let mut acc = Scalar::one();
        while e > 0 {
            if e & 1 == 1 {
                acc = &acc * &base;
            }
            base = &base * &base;
            e >>= 1;
        }
        acc
    }

    fn binop(&self, rhs: &Scalar, op: BinOp) -> Result<Scalar, PolytopeError> {
        let (Some((a1, b1, d1)), Some((a2, b2, d2))) = (self.exact_parts(), rhs.exact_parts())
        else {
            let (x, y) = (self.to_f64(), rhs.to_f64());
            return Ok(Self::Approx(match op {
                BinOp::Add => x + y,
                BinOp::Sub => x - y,
                BinOp::Mul => x * y,
                BinOp::Div => x / y,
            }));
        };
        let d = match (d1, d2) {
            (Some(p), Some(q)) if p != q => {
                return Err(PolytopeError::mismatch(format!(
                    "cannot combine elements of QQ[sqrt{p}] and QQ[sqrt{q}]"
                )))
            }
            (Some(p), _) | (_, Some(p)) => Some(p),
            (None, None) => None,
        };
        let rd = BigRational::from_integer(BigInt::from(d.unwrap_or(0)));
        let (a, b) = match op {
            BinOp::Add => (a1 + a2, b1 + b2),
            BinOp::Sub => (a1 - a2, b1 - b2),
            BinOp::Mul => (&a1 * &a2 + &rd * &b1 * &b2, &a1 * &b2 + &a2 * &b1),
            BinOp::Div => {
                // (a1 + b1 r)(a2 - b2 r) / (a2^2 - d b2^2)
                let norm = &a2 * &a2 - &rd * &b2 * &b2;
                if norm.is_zero() {
                    return Err(PolytopeError::invalid("division by exact zero"));
                }
                let a = (&a1 * &a2 - &rd * &b1 * &b2) / &norm;
                let b = (&b1 * &a2 - &a1 * &b2) / &norm;
                (a, b)
            }
        };
        Ok(match d {
            Some(d) => Self::quadratic(a, b, d),
            None => Self::Rational(a),
        })
    }
}

/// Sign of `a + b*sqrt(d)` for `d > 0`.
fn quad_sign(a: &BigRational, b: &BigRational, d: i64) -> Ordering {
    let sa = a.cmp(&BigRational::zero());
    let sb = b.cmp(&BigRational::zero());
    if sa == sb || sb == Ordering::Equal {
        return sa;
    }
    if sa == Ordering::Equal {
        return sb;
    }
    // Opposite signs: the larger square wins.
    let rd = BigRational::from_integer(BigInt::from(d));
    let lhs = a * a;
    let rhs = rd * b * b;
    match lhs.cmp(&rhs) {
        Ordering::Greater => sa,
        Ordering::Less => sb,
        Ordering::Equal => Ordering::Equal,
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Scalar) -> bool {
        match (self, other) {
            (Self::Rational(x), Self::Rational(y)) => x == y,
            (Self::Quadratic(x), Self::Quadratic(y)) => x == y,
            (Self::Approx(x), Self::Approx(y)) => x == y,
            _ => false,
        }
    }
}

impl From<i64> for Scalar {
    #[inline]
    fn from(n: i64) -> Self {
        Scalar::int(n)
    }
}

impl From<BigRational> for Scalar {
    #[inline]
    fn from(q: BigRational) -> Self {
        Scalar::Rational(q)
    }
}

impl From<f64> for Scalar {
    #[inline]
    fn from(x: f64) -> Self {
        Scalar::Approx(x)
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait<&Scalar> for &Scalar {
            type Output = Scalar;
            fn $method(self, rhs: &Scalar) -> Scalar {
                self.binop(rhs, $op).unwrap_or_else(|e| panic!("{e}"))
            }
        }
        impl $trait<Scalar> for Scalar {
            type Output = Scalar;
            #[inline]
            fn $method(self, rhs: Scalar) -> Scalar {
                (&self).$method(&rhs)
            }
        }
        impl $trait<&Scalar> for Scalar {
            type Output = Scalar;
            #[inline]
            fn $method(self, rhs: &Scalar) -> Scalar {
                (&self).$method(rhs)
            }
        }
        impl $trait<Scalar> for &Scalar {
            type Output = Scalar;
            #[inline]
            fn $method(self, rhs: Scalar) -> Scalar {
                self.$method(&rhs)
            }
        }
        impl $trait<i64> for &Scalar {
            type Output = Scalar;
            #[inline]
            fn $method(self, rhs: i64) -> Scalar {
                self.$method(&Scalar::int(rhs))
            }
        }
        impl $trait<i64> for Scalar {
            type Output = Scalar;
            #[inline]
            fn $method(self, rhs: i64) -> Scalar {
                (&self).$method(&Scalar::int(rhs))
            }
        }
    };
}

forward_binop!(Add, add, BinOp::Add);
forward_binop!(Sub, sub, BinOp::Sub);
forward_binop!(Mul, mul, BinOp::Mul);
forward_binop!(Div, div, BinOp::Div);

impl Neg for &Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        match self {
            Scalar::Rational(q) => Scalar::Rational(-q),
            Scalar::Quadratic(z) => Scalar::Quadratic(QuadNum {
                a: -&z.a,
                b: -&z.b,
                d: z.d,
            }),
            Scalar::Approx(x) => Scalar::Approx(-x),
        }
    }
}

impl Neg for Scalar {
    type Output = Scalar;
    #[inline]
    fn neg(self) -> Scalar {
        -&self
    }
}

impl AddAssign<&Scalar> for Scalar {
    #[inline]
    fn add_assign(&mut self, rhs: &Scalar) {
        *self = &*self + rhs;
    }
}

impl<'a> Sum<&'a Scalar> for Scalar {
    fn sum<I: Iterator<Item = &'a Scalar>>(iter: I) -> Scalar {
        iter.fold(Scalar::zero(), |acc, x| acc + x)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rational(q) => write!(f, "{q}"),
            Self::Approx(x) => write!(f, "{x}"),
            Self::Quadratic(z) => {
                // `1/2*sqrt5 + 1/2`
                let root = format!("sqrt{}", z.d);
                if z.b.is_one() {
                    write!(f, "{root}")?;
                } else if (-&z.b).is_one() {
                    write!(f, "-{root}")?;
                } else {
                    write!(f, "{}*{root}", z.b)?;
                }
                if z.a.is_positive() {
                    write!(f, " + {}", z.a)?;
                } else if z.a.is_negative() {
                    write!(f, " - {}", z.a.abs())?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqrt5() -> Scalar {
        Scalar::quadratic(BigRational::zero(), BigRational::one(), 5)
    }

    #[test]
    fn golden_ratio_satisfies_its_polynomial() {
        let g = (Scalar::one() + sqrt5()) / 2;
        // g^2 = g + 1
        assert_eq!(&g * &g, &g + 1);
        assert_eq!(g.to_string(), "1/2*sqrt5 + 1/2");
        assert!((g.to_f64() - 1.618_033_988_749_895).abs() < 1e-15);
    }

    #[test]
    fn products_collapse_to_rationals() {
        let r = sqrt5();
        assert_eq!(&r * &r, Scalar::int(5));
        assert!((&r * &r).is_rational());
        assert_eq!(&r - &r, Scalar::zero());
    }

    #[test]
    fn division_uses_the_conjugate() {
        let g = (Scalar::one() + sqrt5()) / 2;
        let inv = g.recip().unwrap();
        assert_eq!(&inv, &(&g - 1));
        assert!(Scalar::zero().recip().is_none());
    }

    #[test]
    fn exact_sign_and_ordering() {
        let r = sqrt5();
        let two = Scalar::int(2);
        let three = Scalar::int(3);
        assert_eq!(r.exact_cmp(&two), Some(Ordering::Greater));
        assert_eq!(r.exact_cmp(&three), Some(Ordering::Less));
        assert_eq!((&two - &r).exact_signum(), Some(Ordering::Less));
        assert_eq!(Scalar::Approx(1.0).exact_cmp(&two), None);
    }

    #[test]
    fn mixing_fields_is_reported() {
        let r2 = Scalar::quadratic(BigRational::zero(), BigRational::one(), 2);
        let err = r2.checked_add(&sqrt5()).unwrap_err();
        assert!(err.is_domain_mismatch());
        assert!(r2.exact_cmp(&sqrt5()).is_none());
    }

    #[test]
    fn approximate_operands_win() {
        let x = Scalar::Approx(0.5) + sqrt5();
        assert!(!x.is_exact());
        assert!((x.to_f64() - (0.5 + 5f64.sqrt())).abs() < 1e-15);
    }

    #[test]
    fn pow_matches_repeated_multiplication() {
        let g = (Scalar::one() + sqrt5()) / 2;
        // g^3 = 2g + 1
        assert_eq!(g.pow(3), &g * 2 + 1);
        assert_eq!(g.pow(0), Scalar::one());
    }

    #[test]
    fn display_of_signs() {
        let x = Scalar::int(1) - sqrt5();
        assert_eq!(x.to_string(), "-sqrt5 + 1");
        let y = sqrt5() * 3 - 2;
        assert_eq!(y.to_string(), "3*sqrt5 - 2");
        assert_eq!(Scalar::ratio(-3, 6).to_string(), "-1/2");
    }
}
