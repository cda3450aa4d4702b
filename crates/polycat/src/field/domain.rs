//! Arithmetic domains: `QQ`, `QQ[sqrt d]`, and the approximate field `RDF`.
//!
//! The domain kind is fixed at construction; every operation dispatches on the
//! tag instead of probing what a field object happens to support.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::roots::{rational_nth_root, squarefree_split};
use super::scalar::{QuadNum, Scalar};
use crate::cfg::{APPROX_PRECISION_BITS, MAX_RADICAND};
use crate::error::PolytopeError;

/// Real quadratic field `QQ[sqrt d]` with `d > 1` squarefree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QuadraticField {
    radicand: i64,
}

impl QuadraticField {
    #[inline]
    pub fn radicand(&self) -> i64 {
        self.radicand
    }
}

/// Where coordinates live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    Rational,
    Quadratic(QuadraticField),
    Approximate,
}

impl Domain {
    #[inline]
    pub fn rational() -> Self {
        Domain::Rational
    }

    #[inline]
    pub fn approximate() -> Self {
        Domain::Approximate
    }

    /// `QQ[sqrt n]`. `n` is reduced to its squarefree part; perfect squares and
    /// non-positive `n` are rejected (the former would just be `QQ`).
    pub fn quadratic(n: i64) -> Result<Self, PolytopeError> {
        if n <= 0 || n > MAX_RADICAND {
            return Err(PolytopeError::invalid(format!(
                "radicand {n} outside 1..={MAX_RADICAND}"
            )));
        }
        let (_, f) = squarefree_split(n);
        if f == 1 {
            return Err(PolytopeError::invalid(format!(
                "{n} is a perfect square; QQ[sqrt{n}] is just QQ"
            )));
        }
        Ok(Domain::Quadratic(QuadraticField { radicand: f }))
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        !matches!(self, Domain::Approximate)
    }

    #[inline]
    pub fn radicand(&self) -> Option<i64> {
        match self {
            Domain::Quadratic(k) => Some(k.radicand),
            _ => None,
        }
    }

    /// Mantissa bits for the approximate domain; `None` for exact domains.
    #[inline]
    pub fn precision_bits(&self) -> Option<u32> {
        match self {
            Domain::Approximate => Some(APPROX_PRECISION_BITS),
            _ => None,
        }
    }

    pub fn zero(&self) -> Scalar {
        self.from_int(0)
    }

    pub fn one(&self) -> Scalar {
        self.from_int(1)
    }

    pub fn from_int(&self, n: i64) -> Scalar {
        match self {
            Domain::Approximate => Scalar::Approx(n as f64),
            _ => Scalar::int(n),
        }
    }

    pub fn from_ratio(&self, num: i64, den: i64) -> Result<Scalar, PolytopeError> {
        if den == 0 {
            return Err(PolytopeError::invalid("zero denominator"));
        }
        let q = Scalar::ratio(num, den);
        self.coerce(&q)
    }

    /// The generator `sqrt(d)` of a quadratic field.
    pub fn gen(&self) -> Option<Scalar> {
        self.radicand()
            .map(|d| Scalar::quadratic(BigRational::zero(), BigRational::one(), d))
    }

    pub fn contains(&self, x: &Scalar) -> bool {
        match (self, x) {
            (Domain::Approximate, Scalar::Approx(_)) => true,
            (Domain::Approximate, _) => false,
            (_, Scalar::Rational(_)) => true,
            (Domain::Quadratic(k), Scalar::Quadratic(z)) => k.radicand == z.radicand(),
            _ => false,
        }
    }

    /// Bring `x` into this domain.
    ///
    /// Rationals embed everywhere, exact values round into `RDF`, and a
    /// quadratic value embeds only into its own field.
    pub fn coerce(&self, x: &Scalar) -> Result<Scalar, PolytopeError> {
        match (self, x) {
            (Domain::Approximate, _) => Ok(Scalar::Approx(x.to_f64())),
            (_, Scalar::Approx(v)) => Err(PolytopeError::mismatch(format!(
                "approximate value {v} has no exact image in {self}"
            ))),
            _ if self.contains(x) => Ok(x.clone()),
            _ => Err(PolytopeError::mismatch(format!(
                "unable to convert {x} into {self}"
            ))),
        }
    }

    /// Exact (or numeric, in `RDF`) square root inside this domain.
    ///
    /// Never widens the field: a root outside it is a `DomainMismatch`.
    pub fn sqrt(&self, x: &Scalar) -> Result<Scalar, PolytopeError> {
        let x = self.coerce(x)?;
        if x.exact_signum().is_some_and(|s| s.is_lt()) || x.to_f64() < 0.0 {
            return Err(PolytopeError::mismatch(format!(
                "sqrt({x}) has no real value"
            )));
        }
        match (self, &x) {
            (_, Scalar::Approx(v)) => Ok(Scalar::Approx(v.sqrt())),
            (_, Scalar::Rational(q)) => {
                if let Some(r) = rational_nth_root(q, 2) {
                    return Ok(Scalar::Rational(r));
                }
                if let Domain::Quadratic(k) = self {
                    // sqrt(q) = t*sqrt(d) iff q/d = t^2
                    let d = BigRational::from_integer(BigInt::from(k.radicand));
                    if let Some(t) = rational_nth_root(&(q / d), 2) {
                        return Ok(Scalar::quadratic(BigRational::zero(), t, k.radicand));
                    }
                }
                Err(PolytopeError::mismatch(format!("sqrt({q}) is not in {self}")))
            }
            (_, Scalar::Quadratic(z)) => denest(z)
                .ok_or_else(|| PolytopeError::mismatch(format!("sqrt({x}) is not in {self}"))),
        }
    }

    /// Square root of the integer `n`, growing `QQ` to `QQ[sqrt n]` if needed.
    ///
    /// A quadratic field only accepts its own square class; anything else
    /// would need a degree-4 extension.
    pub fn adjoin_sqrt(&self, n: i64) -> Result<(Domain, Scalar), PolytopeError> {
        if n < 0 || n > MAX_RADICAND {
            return Err(PolytopeError::invalid(format!("cannot adjoin sqrt({n})")));
        }
        if n == 0 {
            return Ok((*self, self.zero()));
        }
        match self {
            Domain::Approximate => Ok((*self, Scalar::Approx((n as f64).sqrt()))),
            Domain::Rational => {
                let (s, f) = squarefree_split(n);
                if f == 1 {
                    return Ok((*self, Scalar::int(s)));
                }
                let k = Domain::Quadratic(QuadraticField { radicand: f });
                let coeff = BigRational::from_integer(s.into());
                let root = Scalar::quadratic(BigRational::zero(), coeff, f);
                Ok((k, root))
            }
            Domain::Quadratic(_) => Ok((*self, self.sqrt(&Scalar::int(n))?)),
        }
    }

    /// Real `n`-th root. Exact domains succeed only for exact rational powers.
    pub fn nth_root(&self, x: &Scalar, n: u32) -> Result<Scalar, PolytopeError> {
        match n {
            0 => return Err(PolytopeError::invalid("0-th root")),
            1 => return self.coerce(x),
            2 => return self.sqrt(x),
            _ => {}
        }
        let x = self.coerce(x)?;
        match &x {
            Scalar::Approx(v) => {
                if *v < 0.0 && n % 2 == 0 {
                    return Err(PolytopeError::mismatch(format!(
                        "even root of negative value {v}"
                    )));
                }
                let mag = if n == 3 {
                    v.abs().cbrt()
                } else {
                    v.abs().powf(1.0 / n as f64)
                };
                Ok(Scalar::Approx(mag.copysign(*v)))
            }
            Scalar::Rational(q) => rational_nth_root(q, n).map(Scalar::Rational).ok_or_else(|| {
                PolytopeError::mismatch(format!("{n}-th root of {q} is not in {self}"))
            }),
            Scalar::Quadratic(_) => Err(PolytopeError::mismatch(format!(
                "{n}-th root of {x} is not in {self}"
            ))),
        }
    }

    /// `(cos, sin)` of `2*pi*k/n`.
    ///
    /// Exact for multiples of 30 and 45 degrees, provided the field holds
    /// `sqrt3` / `sqrt2` when the value needs it.
    pub fn unit_root(&self, n: u32, k: i64) -> Result<(Scalar, Scalar), PolytopeError> {
        if n == 0 {
            return Err(PolytopeError::invalid("root of unity of order 0"));
        }
        if !self.is_exact() {
            let theta = std::f64::consts::TAU * (k as f64) / (n as f64);
            return Ok((Scalar::Approx(theta.cos()), Scalar::Approx(theta.sin())));
        }
        let n = i64::from(n);
        let k = k.rem_euclid(n);
        let order = n / gcd(k, n);
        let (table, period, radicand): (&[(i64, i64)], i64, i64) = if 12 % order == 0 {
            (&COS_TWELFTHS, 12, 3)
        } else if 8 % order == 0 {
            (&COS_EIGHTHS, 8, 2)
        } else {
            return Err(PolytopeError::mismatch(format!(
                "cos(2*pi*{k}/{n}) is not in any exact domain here"
            )));
        };
        let m = k * period / n;
        let quarter = period / 4;
        let cos = table_value(table[m as usize], radicand);
        let sin = table_value(table[((m - quarter).rem_euclid(period)) as usize], radicand);
        Ok((self.coerce(&cos)?, self.coerce(&sin)?))
    }

    /// Smallest exact domain holding every `n`-th root of unity's coordinates.
    pub fn for_unit_roots(n: u32) -> Result<Domain, PolytopeError> {
        match n {
            1 | 2 | 4 => Ok(Domain::Rational),
            3 | 6 | 12 => Ok(Domain::Quadratic(QuadraticField { radicand: 3 })),
            8 => Ok(Domain::Quadratic(QuadraticField { radicand: 2 })),
            _ => Err(PolytopeError::mismatch(format!(
                "coordinates of {n}-th roots of unity need more than a quadratic field"
            ))),
        }
    }

    /// Smallest domain holding all `values`.
    pub fn common<'a, I>(values: I) -> Result<Domain, PolytopeError>
    where
        I: IntoIterator<Item = &'a Scalar>,
    {
        let mut radicand: Option<i64> = None;
        for x in values {
            match x {
                Scalar::Approx(_) => return Ok(Domain::Approximate),
                Scalar::Rational(_) => {}
                Scalar::Quadratic(z) => match radicand {
                    Some(d) if d != z.radicand() => {
                        return Err(PolytopeError::mismatch(format!(
                            "values from QQ[sqrt{d}] and QQ[sqrt{}] share no quadratic field",
                            z.radicand()
                        )))
                    }
                    _ => radicand = Some(z.radicand()),
                },
            }
        }
        Ok(match radicand {
            Some(d) => Domain::Quadratic(QuadraticField { radicand: d }),
            None => Domain::Rational,
        })
    }
}

// cos(2*pi*m/12) as (numerator/2 of rational part, numerator/2 of sqrt3 part).
const COS_TWELFTHS: [(i64, i64); 12] = [
    (2, 0),
    (0, 1),
    (1, 0),
    (0, 0),
    (-1, 0),
    (0, -1),
    (-2, 0),
    (0, -1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (0, 1),
];
// cos(2*pi*m/8), same halves encoding with sqrt2.
const COS_EIGHTHS: [(i64, i64); 8] = [
    (2, 0),
    (0, 1),
    (0, 0),
    (0, -1),
    (-2, 0),
    (0, -1),
    (0, 0),
    (0, 1),
];

fn table_value((a, b): (i64, i64), radicand: i64) -> Scalar {
    let half = |x: i64| BigRational::new(BigInt::from(x), BigInt::from(2));
    Scalar::quadratic(half(a), half(b), radicand)
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.abs()
}

/// `sqrt(a + b*sqrt d)` as `u + v*sqrt d`, if such rationals exist.
///
/// Squaring gives `u^2 + d v^2 = a`, `2uv = b`, so `u^2 = (a +- s)/2` with
/// `s^2 = a^2 - d b^2`.
fn denest(z: &QuadNum) -> Option<Scalar> {
    let (a, b, d) = (z.rational_part(), z.sqrt_coeff(), z.radicand());
    let rd = BigRational::from_integer(BigInt::from(d));
    let s = rational_nth_root(&(a * a - &rd * b * b), 2)?;
    let two = BigRational::from_integer(BigInt::from(2));
    for c in [(a + &s) / &two, (a - &s) / &two] {
        if !c.is_positive() {
            continue;
        }
        let Some(u) = rational_nth_root(&c, 2) else {
            continue;
        };
        let v = b / (&two * &u);
        if &u * &u + &rd * &v * &v == *a {
            let root = Scalar::quadratic(u, v, d);
            return Some(if root.exact_signum().is_some_and(|o| o.is_lt()) {
                -root
            } else {
                root
            });
        }
    }
    None
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Rational => write!(f, "QQ"),
            Domain::Quadratic(k) => write!(f, "QQ[sqrt{}]", k.radicand),
            Domain::Approximate => write!(f, "RDF"),
        }
    }
}

impl FromStr for Domain {
    type Err = PolytopeError;

    /// Accepts `QQ`, `RDF`, `sqrtN`, and `QQ[sqrtN]` (case-insensitive names).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        match t.to_ascii_lowercase().as_str() {
            "qq" | "q" | "rational" => return Ok(Domain::Rational),
            "rdf" | "approx" | "approximate" | "float" => return Ok(Domain::Approximate),
            _ => {}
        }
        let inner = t
            .strip_prefix("QQ[")
            .and_then(|r| r.strip_suffix(']'))
            .unwrap_or(t);
        let n = inner
            .strip_prefix("sqrt")
            .and_then(|r| r.trim_matches(|c| c == '(' || c == ')').parse::<i64>().ok())
            .ok_or_else(|| PolytopeError::invalid(format!("unknown domain `{s}`")))?;
        Domain::quadratic(n)
    }
}
