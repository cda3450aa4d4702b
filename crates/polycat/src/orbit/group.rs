//! Finite symmetry actions as explicit lists of signed permutations.

use std::collections::HashSet;
use std::ops::Deref;

use crate::cfg::MAX_GROUP_ORDER;
use crate::error::PolytopeError;
use crate::vector::Vector;

/// `out[i] = sign[i] * v[perm[i]]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SignedPerm {
    perm: Vec<usize>,
    negate: Vec<bool>,
}

impl SignedPerm {
    pub fn identity(dim: usize) -> Self {
        Self {
            perm: (0..dim).collect(),
            negate: vec![false; dim],
        }
    }

    /// Pure permutation; `perm` must be a permutation of `0..len`.
    pub fn from_perm(perm: Vec<usize>) -> Result<Self, PolytopeError> {
        let n = perm.len();
        Self::new(perm, vec![false; n])
    }

    pub fn new(perm: Vec<usize>, negate: Vec<bool>) -> Result<Self, PolytopeError> {
        if perm.len() != negate.len() {
            return Err(PolytopeError::group(format!(
                "permutation of length {} with {} signs",
                perm.len(),
                negate.len()
            )));
        }
        let mut seen = vec![false; perm.len()];
        for &p in &perm {
            if p >= perm.len() || seen[p] {
                return Err(PolytopeError::group(format!("{perm:?} is not a permutation")));
            }
            seen[p] = true;
        }
        Ok(Self { perm, negate })
    }

    /// Negate the listed coordinates, fix the rest.
    pub fn flip(dim: usize, coords: &[usize]) -> Result<Self, PolytopeError> {
        let mut g = Self::identity(dim);
        for &c in coords {
            if c >= dim {
                return Err(PolytopeError::group(format!(
                    "coordinate {c} out of range for dim {dim}"
                )));
            }
            g.negate[c] = !g.negate[c];
        }
        Ok(g)
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.perm.len()
    }

    pub fn is_identity(&self) -> bool {
        self.perm.iter().enumerate().all(|(i, &p)| i == p) && !self.negate.iter().any(|&n| n)
    }

    /// Parity of the underlying permutation (signs ignored).
    pub fn is_even(&self) -> bool {
        let mut visited = vec![false; self.dim()];
        let mut transpositions = 0usize;
        for start in 0..self.dim() {
            if visited[start] {
                continue;
            }
            let mut len = 0usize;
            let mut j = start;
            while !visited[j] {
                visited[j] = true;
                j = self.perm[j];
                len += 1;
            }
            transpositions += len - 1;
        }
        transpositions % 2 == 0
    }

    /// `self ∘ other`: apply `other` first.
    pub fn compose(&self, other: &SignedPerm) -> Result<SignedPerm, PolytopeError> {
        if self.dim() != other.dim() {
            return Err(PolytopeError::group(format!(
                "cannot compose actions on {} and {} coordinates",
                self.dim(),
                other.dim()
            )));
        }
        Ok(self.compose_unchecked(other))
    }

    fn compose_unchecked(&self, other: &SignedPerm) -> SignedPerm {
        let perm = self.perm.iter().map(|&p| other.perm[p]).collect();
        let negate = self
            .perm
            .iter()
            .zip(&self.negate)
            .map(|(&p, &n)| n ^ other.negate[p])
            .collect();
        SignedPerm { perm, negate }
    }

    pub fn apply(&self, v: &Vector) -> Result<Vector, PolytopeError> {
        if v.dim() != self.dim() {
            return Err(PolytopeError::group(format!(
                "action on {} coordinates applied to a {}-vector",
                self.dim(),
                v.dim()
            )));
        }
        let out = self
            .perm
            .iter()
            .zip(&self.negate)
            .map(|(&p, &n)| if n { -&v[p] } else { v[p].clone() })
            .collect::<Vec<_>>();
        Ok(Vector::new(out))
    }

    /// Same signed permutation, applied to whole blocks of `size` coordinates.
    fn lift(&self, size: usize) -> SignedPerm {
        let mut perm = Vec::with_capacity(self.dim() * size);
        let mut negate = Vec::with_capacity(self.dim() * size);
        for (&p, &n) in self.perm.iter().zip(&self.negate) {
            for t in 0..size {
                perm.push(p * size + t);
                negate.push(n);
            }
        }
        SignedPerm { perm, negate }
    }
}

/// Ordered, finite list of group elements on a fixed number of coordinates.
///
/// Invariants:
/// - Non-empty; every element acts on `dim` coordinates.
/// - Constructors other than `partial` produce a group (identity, closure).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupAction {
    dim: usize,
    elems: Vec<SignedPerm>,
}

impl GroupAction {
    pub fn identity(dim: usize) -> Self {
        Self {
            dim,
            elems: vec![SignedPerm::identity(dim)],
        }
    }

    /// All `dim!` permutations, lexicographic in the index images.
    pub fn symmetric(dim: usize) -> Result<Self, PolytopeError> {
        check_order(factorial(dim))?;
        let elems = permutations(dim)
            .into_iter()
            .map(|perm| SignedPerm {
                negate: vec![false; dim],
                perm,
            })
            .collect();
        Ok(Self { dim, elems })
    }

    /// Even permutations, in the same order as `symmetric`.
    pub fn alternating(dim: usize) -> Result<Self, PolytopeError> {
        let mut g = Self::symmetric(dim)?;
        g.elems.retain(SignedPerm::is_even);
        Ok(g)
    }

    /// Rotations of `coords` (cyclically), other coordinates fixed.
    ///
    /// Rotation `r` moves `v[coords[j]]` to position `coords[j + r]`.
    pub fn cyclic_on(dim: usize, coords: &[usize]) -> Result<Self, PolytopeError> {
        check_coords(dim, coords)?;
        let k = coords.len().max(1);
        let elems = (0..k)
            .map(|r| {
                let mut perm: Vec<usize> = (0..dim).collect();
                for (j, &c) in coords.iter().enumerate() {
                    perm[c] = coords[(j + k - r) % k];
                }
                SignedPerm {
                    perm,
                    negate: vec![false; dim],
                }
            })
            .collect();
        Ok(Self { dim, elems })
    }

    /// All sign patterns on `coords`: `[+,-]` product order, leftmost slowest.
    pub fn sign_flips(dim: usize, coords: &[usize]) -> Result<Self, PolytopeError> {
        check_coords(dim, coords)?;
        let k = coords.len();
        check_order(pow2(k))?;
        let mut elems = Vec::with_capacity(1usize << k);
        for mask in 0..(1usize << k) {
            let mut g = SignedPerm::identity(dim);
            for (j, &c) in coords.iter().enumerate() {
                // bit (k-1-j) drives coords[j] so the leftmost varies slowest
                g.negate[c] = (mask >> (k - 1 - j)) & 1 == 1;
            }
            elems.push(g);
        }
        Ok(Self { dim, elems })
    }

    /// Sign patterns with an even number of minus signs (a subgroup).
    pub fn even_sign_flips(dim: usize, coords: &[usize]) -> Result<Self, PolytopeError> {
        let mut g = Self::sign_flips(dim, coords)?;
        g.elems.retain(|e| e.negate.iter().filter(|&&n| n).count() % 2 == 0);
        Ok(g)
    }

    /// Sign patterns with an odd number of minus signs (a coset, not a group).
    pub fn odd_sign_flips(dim: usize, coords: &[usize]) -> Result<Self, PolytopeError> {
        let mut g = Self::sign_flips(dim, coords)?;
        g.elems.retain(|e| e.negate.iter().filter(|&&n| n).count() % 2 == 1);
        if g.elems.is_empty() {
            return Err(PolytopeError::group("no odd sign pattern on zero coordinates"));
        }
        Ok(g)
    }

    /// `{x, -x}`.
    pub fn central_inversion(dim: usize) -> Self {
        let all: Vec<usize> = (0..dim).collect();
        let elems = vec![
            SignedPerm::identity(dim),
            SignedPerm {
                perm: all,
                negate: vec![true; dim],
            },
        ];
        Self { dim, elems }
    }

    /// Signed permutations of all coordinates (`2^dim * dim!` elements).
    pub fn hyperoctahedral(dim: usize) -> Result<Self, PolytopeError> {
        check_order(pow2(dim).zip(factorial(dim)).and_then(|(a, b)| a.checked_mul(b)))?;
        let all: Vec<usize> = (0..dim).collect();
        let flips = Self {
            dim,
            elems: (0..(1usize << dim))
                .map(|mask| SignedPerm {
                    perm: all.clone(),
                    negate: (0..dim).map(|j| (mask >> (dim - 1 - j)) & 1 == 1).collect(),
                })
                .collect(),
        };
        Ok(flips.product_unchecked(&Self::symmetric(dim)?))
    }

    /// `{a ∘ b}`: `b` acts first. Outer loop over `self`, inner over `other`.
    ///
    /// Duplicate products are dropped, keeping first occurrence.
    pub fn product(&self, other: &GroupAction) -> Result<Self, PolytopeError> {
        if self.dim != other.dim {
            return Err(PolytopeError::group(format!(
                "product of actions on {} and {} coordinates",
                self.dim, other.dim
            )));
        }
        check_order(self.len().checked_mul(other.len()))?;
        Ok(self.product_unchecked(other))
    }

    fn product_unchecked(&self, other: &GroupAction) -> Self {
        let mut seen = HashSet::with_capacity(self.len() * other.len());
        let mut elems = Vec::with_capacity(self.len() * other.len());
        for a in &self.elems {
            for b in &other.elems {
                let g = a.compose_unchecked(b);
                if seen.insert(g.clone()) {
                    elems.push(g);
                }
            }
        }
        Self {
            dim: self.dim,
            elems,
        }
    }

    /// Same action on blocks of `size` coordinates (`dim * size` in total).
    pub fn block_lift(&self, size: usize) -> Result<Self, PolytopeError> {
        if size == 0 {
            return Err(PolytopeError::group("block size 0"));
        }
        Ok(Self {
            dim: self.dim * size,
            elems: self.elems.iter().map(|g| g.lift(size)).collect(),
        })
    }

    /// Validated group: non-empty, uniform dimension, identity present, closed.
    pub fn group(elems: Vec<SignedPerm>) -> Result<Self, PolytopeError> {
        let g = Self::partial(elems)?;
        if !g.elems.iter().any(SignedPerm::is_identity) {
            return Err(PolytopeError::group("identity is missing"));
        }
        if !g.is_closed() {
            return Err(PolytopeError::group("element set is not closed under composition"));
        }
        Ok(g)
    }

    /// Any non-empty list on a uniform dimension. Used for coset pieces of
    /// conditional sign selection.
    pub fn partial(elems: Vec<SignedPerm>) -> Result<Self, PolytopeError> {
        let Some(first) = elems.first() else {
            return Err(PolytopeError::group("empty action"));
        };
        let dim = first.dim();
        if let Some(bad) = elems.iter().find(|g| g.dim() != dim) {
            return Err(PolytopeError::group(format!(
                "mixed dimensions {dim} and {}",
                bad.dim()
            )));
        }
        Ok(Self { dim, elems })
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn elements(&self) -> &[SignedPerm] {
        &self.elems
    }

    /// Identity present and closed under composition.
    pub fn is_group(&self) -> bool {
        self.elems.iter().any(SignedPerm::is_identity) && self.is_closed()
    }

    fn is_closed(&self) -> bool {
        let set: HashSet<&SignedPerm> = self.elems.iter().collect();
        self.elems.iter().all(|a| {
            self.elems.iter().all(|b| {
                a.compose(b)
                    .map(|ab| set.contains(&ab))
                    .unwrap_or(false)
            })
        })
    }
}

impl Deref for GroupAction {
    type Target = [SignedPerm];
    #[inline]
    fn deref(&self) -> &[SignedPerm] {
        &self.elems
    }
}

fn check_coords(dim: usize, coords: &[usize]) -> Result<(), PolytopeError> {
    let mut seen = vec![false; dim];
    for &c in coords {
        if c >= dim || seen[c] {
            return Err(PolytopeError::group(format!(
                "coordinates {coords:?} are not distinct indices below {dim}"
            )));
        }
        seen[c] = true;
    }
    Ok(())
}

/// `None` (overflow) counts as too large.
fn check_order(order: Option<usize>) -> Result<(), PolytopeError> {
    match order {
        Some(n) if n <= MAX_GROUP_ORDER => Ok(()),
        Some(n) => Err(PolytopeError::group(format!(
            "{n} elements exceed the limit of {MAX_GROUP_ORDER}"
        ))),
        None => Err(PolytopeError::group(format!(
            "more than {MAX_GROUP_ORDER} elements"
        ))),
    }
}

fn factorial(n: usize) -> Option<usize> {
    (1..=n).try_fold(1usize, |acc, i| acc.checked_mul(i))
}

fn pow2(k: usize) -> Option<usize> {
    u32::try_from(k).ok().and_then(|k| 1usize.checked_shl(k))
}

/// All permutations of `0..n` in lexicographic order.
fn permutations(n: usize) -> Vec<Vec<usize>> {
    let mut cur: Vec<usize> = (0..n).collect();
    let mut out = vec![cur.clone()];
    // next-permutation step
    loop {
        let Some(i) = (1..n).rev().find(|&i| cur[i - 1] < cur[i]) else {
            return out;
        };
        let pivot = i - 1;
        let j = (i..n).rev().find(|&j| cur[j] > cur[pivot]).unwrap_or(i);
        cur.swap(pivot, j);
        cur[i..].reverse();
        out.push(cur.clone());
    }
}
