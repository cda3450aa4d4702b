//! Tolerance and precision defaults (internal).
//!
//! Policy
//! - Fixed constants, same as the rest of the crate's numeric code: no
//!   per-call tolerance knobs. The core never compares approximate values for
//!   equality itself; these constants back tests, debug checks, and the
//!   approximate backend sanity checks.

/// Mantissa bits of the approximate domain (`f64`).
pub const APPROX_PRECISION_BITS: u32 = f64::MANTISSA_DIGITS;
/// Relative tolerance for distance comparisons after an approximate projection.
pub const ISOMETRY_REL_EPS: f64 = 1e-9;
/// Upper bound on radicands we factor by trial division.
pub(crate) const MAX_RADICAND: i64 = 1 << 40;
/// Largest group action (number of signed permutations) any constructor builds.
pub const MAX_GROUP_ORDER: usize = 1 << 20;
