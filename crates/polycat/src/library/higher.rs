//! 4D regular and uniform polytopes, plus families indexed by dimension.

use super::{all_coords, finish, golden, half, ints, signs_on_nonzero, RecipeCfg};
use crate::assemble::Polytope;
use crate::error::PolytopeError;
use crate::field::{select_rational, Domain, Exactness, Scalar};
use crate::orbit::{expand, GroupAction, OrbitSet};
use crate::project::project_points;
use crate::vector::Vector;

fn vec4(a: Scalar, b: Scalar, c: Scalar, d: Scalar) -> Vector {
    Vector::new(vec![a, b, c, d])
}

fn need_positive(what: &str, v: usize) -> Result<(), PolytopeError> {
    if v == 0 {
        return Err(PolytopeError::invalid(format!("{what} must be positive")));
    }
    Ok(())
}

/// Points of a zero-sum construction, optionally projected one dimension down.
///
/// Projection defaults to `RDF`; an explicit base is honoured (and fails
/// where it cannot normalize the projection).
fn maybe_project(
    verts: Vec<Vector>,
    project: bool,
    cfg: &RecipeCfg,
) -> Result<Polytope, PolytopeError> {
    if project {
        let domain = cfg.base.unwrap_or(Domain::Approximate);
        let projected = project_points(&verts, domain)?;
        finish(projected, domain, cfg)
    } else {
        finish(verts, select_rational(cfg.exactness, cfg.base), cfg)
    }
}

/// `(±1/2)^4`: the 16 vertices shared by the 24-cell, 600-cell, and grand antiprism.
fn half_cube4() -> Result<Vec<Vector>, PolytopeError> {
    let q = half(1);
    expand(
        &[vec4(q.clone(), q.clone(), q.clone(), q)],
        &GroupAction::sign_flips(4, &all_coords(4))?,
    )
}

/// `±e_i` in the given order: all `+e_i`, then all `-e_i`.
fn unit_vectors(dim: usize) -> Result<Vec<Vector>, PolytopeError> {
    let mut e0 = vec![0i64; dim];
    e0[0] = 1;
    let cyclic = GroupAction::cyclic_on(dim, &all_coords(dim))?;
    let g = GroupAction::central_inversion(dim).product(&cyclic)?;
    expand(&[ints(&e0)], &g)
}

/// Permutation matrices of size `n`, flattened to `n * n` coordinates.
pub fn birkhoff_polytope(n: usize, cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    need_positive("n", n)?;
    let g = GroupAction::symmetric(n)
        .and_then(|g| g.block_lift(n))
        .map_err(PolytopeError::into_params)?;
    let mut seed = vec![0i64; n * n];
    for i in 0..n {
        seed[i * n + i] = 1;
    }
    let verts = expand(&[ints(&seed)], &g)?;
    finish(verts, select_rational(cfg.exactness, cfg.base), cfg)
}

/// Standard `dim`-simplex: the unit vectors of `dim + 1` space.
pub fn simplex(dim: usize, project: bool, cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let mut e0 = vec![0i64; dim + 1];
    e0[0] = 1;
    let verts = expand(&[ints(&e0)], &GroupAction::cyclic_on(dim + 1, &all_coords(dim + 1))?)?;
    maybe_project(verts, project, cfg)
}

/// `(±1/2)^4` and `±e_i`.
pub fn twenty_four_cell(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let mut verts = half_cube4()?;
    verts.extend(unit_vectors(4)?);
    finish(verts, select_rational(cfg.exactness, cfg.base), cfg)
}

/// 24-cell vertices plus even permutations of `(±1/2, ±φ/2, ±1/(2φ), 0)`.
pub fn six_hundred_cell(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let (domain, g) = golden(cfg);
    let a = Scalar::one().checked_div(&(&g * 2))?;
    let mut set = OrbitSet::new();
    for v in half_cube4()?.into_iter().chain(unit_vectors(4)?) {
        set.push(v);
    }
    let seed = vec4(half(1), &g / 2, a, Scalar::zero());
    let perms = GroupAction::alternating(4)?.product(&signs_on_nonzero(&seed)?)?;
    set.extend(&[seed], &perms)?;
    finish(set.into_vertices(), domain, cfg)
}

/// Grand antiprism: the 600-cell minus two interlocking rings of ten
/// vertices, 100 vertices in total.
pub fn grand_antiprism(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let (domain, g) = golden(cfg);
    let (z, q) = (Scalar::zero(), half(1));
    let a = Scalar::one().checked_div(&(&g * 2))?;
    let b = &g / 2;
    let mut set = OrbitSet::new();
    for v in half_cube4()? {
        set.push(v);
    }
    set.extend(
        &[ints(&[0, 0, 1, 0]), ints(&[0, 0, 0, 1])],
        &GroupAction::central_inversion(4),
    )?;
    let full = [
        vec4(q.clone(), a.clone(), b.clone(), z.clone()),
        vec4(b.clone(), q.clone(), a.clone(), z.clone()),
        vec4(a.clone(), b.clone(), q.clone(), z.clone()),
        vec4(q.clone(), b.clone(), z.clone(), a.clone()),
        vec4(a.clone(), q.clone(), z.clone(), b.clone()),
        vec4(b.clone(), a.clone(), z.clone(), q.clone()),
        vec4(q.clone(), z.clone(), a.clone(), b.clone()),
        vec4(z.clone(), q.clone(), b.clone(), a.clone()),
    ];
    for seed in &full {
        set.extend(std::slice::from_ref(seed), &signs_on_nonzero(seed)?)?;
    }
    // one free sign each; the other signs are tied
    let (nq, na, nb) = (-&q, -&a, -&b);
    let tied = [
        (vec4(z.clone(), a.clone(), q.clone(), b.clone()), 1),
        (vec4(z.clone(), a.clone(), nq.clone(), nb.clone()), 1),
        (vec4(z.clone(), b.clone(), a.clone(), q.clone()), 1),
        (vec4(z.clone(), b.clone(), na.clone(), nq.clone()), 1),
        (vec4(b.clone(), z.clone(), q.clone(), na.clone()), 0),
        (vec4(b.clone(), z.clone(), nq, a.clone()), 0),
        (vec4(a.clone(), z.clone(), b.clone(), -&q), 0),
        (vec4(a, z, nb, q), 0),
    ];
    for (seed, free) in &tied {
        set.extend(std::slice::from_ref(seed), &GroupAction::sign_flips(4, &[*free])?)?;
    }
    finish(set.into_vertices(), domain, cfg)
}

/// Gosset polytope 3_21: vectors with two `-3`s and six `1`s, and their negatives.
pub fn gosset_3_21(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let seed = ints(&[-3, -3, 1, 1, 1, 1, 1, 1]);
    let positive = expand(&[seed], &GroupAction::symmetric(8)?)?;
    let verts = expand(&positive, &GroupAction::central_inversion(8))?;
    finish(verts, select_rational(cfg.exactness, cfg.base), cfg)
}

/// Points `(t, t², .., t^dim)` on the moment curve for `t = 0..n`.
pub fn cyclic_polytope(dim: usize, n: usize, cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    need_positive("dim", dim)?;
    need_positive("n", n)?;
    let exp = u32::try_from(dim).map_err(|_| PolytopeError::invalid("dim too large"))?;
    let verts = (0..n as i64)
        .map(|t| {
            let t = Scalar::int(t);
            Vector::new((1..=exp).map(|i| t.pow(i)).collect())
        })
        .collect();
    finish(verts, select_rational(cfg.exactness, cfg.base), cfg)
}

/// 0/1 vectors of length `dim` with exactly `k` ones.
pub fn hypersimplex(
    dim: usize,
    k: usize,
    project: bool,
    cfg: &RecipeCfg,
) -> Result<Polytope, PolytopeError> {
    need_positive("dim", dim)?;
    if k > dim {
        return Err(PolytopeError::invalid(format!("k (={k}) exceeds dim (={dim})")));
    }
    let g = GroupAction::symmetric(dim).map_err(PolytopeError::into_params)?;
    let seed: Vec<i64> = (0..dim).map(|i| i64::from(i >= dim - k)).collect();
    let verts = expand(&[ints(&seed)], &g)?;
    maybe_project(verts, project, cfg)
}

/// Permutations of `(1, .., n)` in lexicographic order.
pub fn permutahedron(n: usize, project: bool, cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    need_positive("n", n)?;
    let g = GroupAction::symmetric(n).map_err(PolytopeError::into_params)?;
    let seed: Vec<i64> = (1..=n as i64).collect();
    let verts = expand(&[ints(&seed)], &g)?;
    maybe_project(verts, project, cfg)
}

/// `{±1}^dim`, `+` first, leftmost coordinate slowest.
pub fn hypercube(dim: usize, cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    need_positive("dim", dim)?;
    if dim >= usize::BITS as usize {
        return Err(PolytopeError::invalid(format!("dim (={dim}) too large for 2^dim vertices")));
    }
    let g = GroupAction::sign_flips(dim, &all_coords(dim))
        .map_err(PolytopeError::into_params)?;
    let verts = expand(&[ints(&vec![1i64; dim])], &g)?;
    finish(verts, select_rational(cfg.exactness, cfg.base), cfg)
}

pub fn cube(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    hypercube(3, cfg)
}

/// `±e_i`.
pub fn cross_polytope(dim: usize, cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    need_positive("dim", dim)?;
    finish(unit_vectors(dim)?, select_rational(cfg.exactness, cfg.base), cfg)
}

/// Zonotope spanned by `generators`: all subset sums, starting with 0.
///
/// Without an explicit base the domain is the smallest one holding every
/// generator coordinate.
pub fn parallelotope(generators: &[Vector], cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let Some(first) = generators.first() else {
        return Err(PolytopeError::invalid("parallelotope needs at least one generator"));
    };
    let dim = first.dim();
    if generators.iter().any(|g| g.dim() != dim) {
        return Err(PolytopeError::invalid("generators of mixed dimension"));
    }
    let domain = match (cfg.base, cfg.exactness) {
        (Some(b), _) => b,
        (None, Exactness::Approximate) => Domain::Approximate,
        (None, Exactness::Exact) => Domain::common(generators.iter().flat_map(|g| g.iter()))?,
    };
    let mut set = OrbitSet::new();
    set.push(Vector::zeros(dim));
    for k in 1..=generators.len() {
        for combo in combinations(generators.len(), k) {
            let mut sum = Vector::zeros(dim);
            for &i in &combo {
                sum = sum.checked_add(&generators[i])?;
            }
            set.push(sum);
        }
    }
    finish(set.into_vertices(), domain, cfg)
}

/// `k`-subsets of `0..n` in lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    if k > n {
        return out;
    }
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        out.push(idx.clone());
        let Some(i) = (0..k).rev().find(|&i| idx[i] != i + n - k) else {
            return out;
        };
        idx[i] += 1;
        for j in i + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

#[cfg(test)]
mod combo_tests {
    use super::combinations;

    #[test]
    fn lexicographic_subsets() {
        assert_eq!(
            combinations(4, 2),
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
        assert_eq!(combinations(3, 3), vec![vec![0, 1, 2]]);
        assert!(combinations(2, 3).is_empty());
    }
}
