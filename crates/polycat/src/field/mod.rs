//! Arithmetic domains and their scalars.
//!
//! Purpose
//! - Give recipes one explicit type for "where coordinates live": the rational
//!   field, a real quadratic field `QQ[sqrt d]`, or `f64`.
//!
//! Why this design (short)
//! - A closed tagged union with a fixed operation set per tag. Capabilities are
//!   known at construction; nothing inspects a field object at runtime.
//! - No global default domain. Every entry point takes the domain (or an
//!   `Exactness` + optional base) as data.
//! - Exact arithmetic is `num-rational` over `num-bigint`; quadratic values are
//!   pairs of rationals. Degree > 2 extensions are out of reach on purpose:
//!   requests that need them fail with `DomainMismatch`.

mod domain;
mod roots;
mod scalar;
mod select;

pub use domain::{Domain, QuadraticField};
pub use scalar::{QuadNum, Scalar};
pub use select::{select_domain, select_rational, Exactness, QuadraticConstant};

pub(crate) use scalar::ExactKey;
