//! Integer/rational root helpers used by exact domains.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Pow, Signed, Zero};

use crate::cfg::MAX_RADICAND;

/// Split `n > 0` as `s^2 * f` with `f` squarefree. Returns `(s, f)`.
///
/// Trial division; callers keep `n <= MAX_RADICAND`.
pub(crate) fn squarefree_split(n: i64) -> (i64, i64) {
    debug_assert!(n > 0 && n <= MAX_RADICAND);
    let mut rest = n;
    let mut s = 1i64;
    let mut f = 1i64;
    let mut p = 2i64;
    while p * p <= rest {
        let mut e = 0u32;
        while rest % p == 0 {
            rest /= p;
            e += 1;
        }
        s *= p.pow(e / 2);
        if e % 2 == 1 {
            f *= p;
        }
        p += 1;
    }
    (s, f * rest)
}

/// Exact `n`-th root of a non-negative integer, if it exists.
fn int_nth_root_exact(x: &BigInt, n: u32) -> Option<BigInt> {
    debug_assert!(!x.is_negative());
    let r = x.nth_root(n);
    if Pow::pow(&r, n) == *x {
        Some(r)
    } else {
        None
    }
}

/// Exact real `n`-th root of a rational (principal root; odd roots keep sign).
pub(crate) fn rational_nth_root(q: &BigRational, n: u32) -> Option<BigRational> {
    if n == 0 {
        return None;
    }
    if q.is_zero() {
        return Some(BigRational::zero());
    }
    let negative = q.is_negative();
    if negative && n % 2 == 0 {
        return None;
    }
    // Ratio keeps numer/denom reduced with a positive denominator.
    let num = int_nth_root_exact(&q.numer().abs(), n)?;
    let den = int_nth_root_exact(q.denom(), n)?;
    let root = BigRational::new(num, den);
    Some(if negative { -root } else { root })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> BigRational {
        BigRational::new(n.into(), d.into())
    }

    #[test]
    fn squarefree_split_small_values() {
        assert_eq!(squarefree_split(1), (1, 1));
        assert_eq!(squarefree_split(12), (2, 3));
        assert_eq!(squarefree_split(72), (6, 2));
        assert_eq!(squarefree_split(30), (1, 30));
        assert_eq!(squarefree_split(49), (7, 1));
    }

    #[test]
    fn rational_roots_exact_or_none() {
        assert_eq!(rational_nth_root(&q(9, 4), 2), Some(q(3, 2)));
        assert_eq!(rational_nth_root(&q(2, 1), 2), None);
        assert_eq!(rational_nth_root(&q(-27, 8), 3), Some(q(-3, 2)));
        assert_eq!(rational_nth_root(&q(-4, 1), 2), None);
        assert_eq!(rational_nth_root(&q(0, 1), 5), Some(q(0, 1)));
    }
}
