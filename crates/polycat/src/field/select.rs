//! Domain selection for recipes that need an irrational constant.
//!
//! Policy
//! - An explicit base always wins over the exactness flag.
//! - No base + exact: the minimal quadratic field holding the constant.
//! - No base + approximate: `RDF`, constant evaluated numerically.
//! - Explicit exact base that lacks the constant: the base is kept and the
//!   constant is returned in its own field. Recipes that never touch the
//!   constant still work in the restrictive base; the rest fail with
//!   `DomainMismatch` once the assembler coerces into the base.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use super::domain::Domain;
use super::roots::squarefree_split;
use super::scalar::Scalar;
use crate::cfg::MAX_RADICAND;
use crate::error::PolytopeError;

/// Exact or approximate coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Exactness {
    #[default]
    Exact,
    Approximate,
}

impl Exactness {
    #[inline]
    pub fn from_flag(exact: bool) -> Self {
        if exact {
            Exactness::Exact
        } else {
            Exactness::Approximate
        }
    }
}

/// `rational + coeff*sqrt(radicand)` with `radicand` squarefree (1 = rational).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuadraticConstant {
    rational: BigRational,
    coeff: BigRational,
    radicand: i64,
}

impl QuadraticConstant {
    pub fn new(rational: BigRational, coeff: BigRational, n: i64) -> Result<Self, PolytopeError> {
        if n <= 0 || n > MAX_RADICAND {
            return Err(PolytopeError::invalid(format!(
                "radicand {n} outside 1..={MAX_RADICAND}"
            )));
        }
        let (s, f) = squarefree_split(n);
        let coeff = coeff * BigRational::from_integer(BigInt::from(s));
        Ok(if f == 1 {
            Self {
                rational: rational + coeff,
                coeff: BigRational::zero(),
                radicand: 1,
            }
        } else {
            Self {
                rational,
                coeff,
                radicand: f,
            }
        })
    }

    /// `sqrt(n)` for `n >= 0`.
    pub fn sqrt(n: i64) -> Result<Self, PolytopeError> {
        if n == 0 {
            return Ok(Self {
                rational: BigRational::zero(),
                coeff: BigRational::zero(),
                radicand: 1,
            });
        }
        Self::new(
            BigRational::zero(),
            BigRational::from_integer(BigInt::from(1)),
            n,
        )
    }

    /// `(1 + sqrt5) / 2`.
    pub fn golden_ratio() -> Self {
        let half = BigRational::new(BigInt::from(1), BigInt::from(2));
        Self {
            rational: half.clone(),
            coeff: half,
            radicand: 5,
        }
    }

    pub fn exact_value(&self) -> Scalar {
        if self.radicand == 1 {
            Scalar::Rational(self.rational.clone())
        } else {
            Scalar::quadratic(self.rational.clone(), self.coeff.clone(), self.radicand)
        }
    }

    pub fn approx_value(&self) -> f64 {
        let a = self.rational.to_f64().unwrap_or(f64::NAN);
        let b = self.coeff.to_f64().unwrap_or(f64::NAN);
        a + b * (self.radicand as f64).sqrt()
    }

    /// Smallest exact domain containing the constant.
    pub fn minimal_domain(&self) -> Domain {
        if self.radicand == 1 || self.coeff.is_zero() {
            Domain::Rational
        } else {
            // radicand is squarefree and > 1 here
            Domain::quadratic(self.radicand).unwrap_or(Domain::Rational)
        }
    }
}

/// Pick the working domain and the constant's value in it.
pub fn select_domain(
    exactness: Exactness,
    base: Option<Domain>,
    constant: &QuadraticConstant,
) -> (Domain, Scalar) {
    let (domain, value) = match base {
        Some(Domain::Approximate) => (Domain::Approximate, Scalar::Approx(constant.approx_value())),
        Some(b) => {
            let exact = constant.exact_value();
            match b.coerce(&exact) {
                Ok(v) => (b, v),
                // Lazy failure: keep the base, surface the mismatch at assembly.
                Err(_) => (b, exact),
            }
        }
        None => match exactness {
            Exactness::Exact => (constant.minimal_domain(), constant.exact_value()),
            Exactness::Approximate => {
                (Domain::Approximate, Scalar::Approx(constant.approx_value()))
            }
        },
    };
    tracing::debug!(%domain, constant = %value, "selected domain");
    (domain, value)
}

/// Domain for recipes whose coordinates are all rational.
pub fn select_rational(exactness: Exactness, base: Option<Domain>) -> Domain {
    match (base, exactness) {
        (Some(b), _) => b,
        (None, Exactness::Exact) => Domain::Rational,
        (None, Exactness::Approximate) => Domain::Approximate,
    }
}
