//! Polygons, Platonic, Archimedean, and related 3D solids.

use super::{all_coords, finish, golden, half, ints, signed_orbit, RecipeCfg};
use crate::assemble::Polytope;
use crate::error::PolytopeError;
use crate::field::{select_domain, select_rational, Domain, Exactness, QuadraticConstant, Scalar};
use crate::orbit::{expand, GroupAction, OrbitSet};
use crate::vector::Vector;

fn vec3(x: Scalar, y: Scalar, z: Scalar) -> Vector {
    Vector::new(vec![x, y, z])
}

fn sqrt2(cfg: &RecipeCfg) -> Result<(Domain, Scalar), PolytopeError> {
    Ok(select_domain(cfg.exactness, cfg.base, &QuadraticConstant::sqrt(2)?))
}

/// Regular `n`-gon inscribed in the unit circle; vertex `k` is
/// `(sin(2πk/n), cos(2πk/n))`.
///
/// Exact only for `n` in {3, 4, 6, 8, 12} (and the degenerate 1, 2).
pub fn regular_polygon(n: usize, cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    if n <= 2 {
        return Err(PolytopeError::invalid(format!(
            "n (={n}) must be an integer greater than 2"
        )));
    }
    let order = u32::try_from(n).map_err(|_| PolytopeError::invalid("n too large"))?;
    let (work, target) = match (cfg.base, cfg.exactness) {
        (Some(Domain::Approximate), _) | (None, Exactness::Approximate) => {
            (Domain::Approximate, Domain::Approximate)
        }
        (Some(b), _) => (Domain::for_unit_roots(order)?, b),
        (None, Exactness::Exact) => {
            let k = Domain::for_unit_roots(order)?;
            (k, k)
        }
    };
    let mut verts = Vec::with_capacity(n);
    for k in 0..n as i64 {
        let (c, s) = work.unit_root(order, k)?;
        verts.push(Vector::new(vec![s, c]));
    }
    finish(verts, target, cfg)
}

/// Icosahedron with edge length 1: even permutations of `(0, ±1/2, ±φ/2)`.
pub fn icosahedron(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let (domain, g) = golden(cfg);
    let seed = vec3(Scalar::zero(), half(1), &g / 2);
    let verts = signed_orbit(&[seed], &GroupAction::alternating(3)?)?;
    finish(verts, domain, cfg)
}

/// Dual of the icosahedron: `(±1, ±1, ±1)` and even permutations of
/// `(0, ±1/φ, ±φ)`.
pub fn dodecahedron(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let (domain, g) = golden(cfg);
    let inv = Scalar::one().checked_div(&g)?;
    let seeds = [ints(&[1, 1, 1]), vec3(Scalar::zero(), inv, g)];
    let verts = signed_orbit(&seeds, &GroupAction::alternating(3)?)?;
    finish(verts, domain, cfg)
}

/// Even permutations of `(±1, ±1, ±(1 + √2))`.
pub fn small_rhombicuboctahedron(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let (domain, r2) = sqrt2(cfg)?;
    let a = &r2 + 1;
    let seed = vec3(Scalar::one(), Scalar::one(), a);
    let verts = signed_orbit(&[seed], &GroupAction::alternating(3)?)?;
    finish(verts, domain, cfg)
}

/// All permutations of `(±1, ±(1 + √2), ±(1 + 2√2))`.
pub fn great_rhombicuboctahedron(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let (domain, r2) = sqrt2(cfg)?;
    let seed = vec3(Scalar::one(), &r2 + 1, &r2 * 2 + 1);
    let verts = signed_orbit(&[seed], &GroupAction::symmetric(3)?)?;
    finish(verts, domain, cfg)
}

/// Permutations of `(±2, 0, 0)` and `(±1, ±1, ±1)`.
pub fn rhombic_dodecahedron(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let domain = select_rational(cfg.exactness, cfg.base);
    let mut set = OrbitSet::new();
    set.extend(&[ints(&[2, 0, 0])], &GroupAction::hyperoctahedral(3)?)?;
    set.extend(
        &[ints(&[1, 1, 1])],
        &GroupAction::sign_flips(3, &all_coords(3))?,
    )?;
    finish(set.into_vertices(), domain, cfg)
}

/// Permutations of `(±1, ±1, 0)`.
pub fn cuboctahedron(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let domain = select_rational(cfg.exactness, cfg.base);
    let verts = expand(&[ints(&[1, 1, 0])], &GroupAction::hyperoctahedral(3)?)?;
    finish(verts, domain, cfg)
}

/// Even permutations of `(±(√2 - 1), ±1, ±1)`.
pub fn truncated_cube(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let (domain, r2) = sqrt2(cfg)?;
    let g = &r2 - 1;
    let seed = vec3(g, Scalar::one(), Scalar::one());
    let verts = signed_orbit(&[seed], &GroupAction::alternating(3)?)?;
    finish(verts, domain, cfg)
}

pub fn tetrahedron(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let domain = select_rational(cfg.exactness, cfg.base);
    let verts = [[0i64, 0, 0], [1, 0, 1], [1, 1, 0], [0, 1, 1]]
        .iter()
        .map(|c| ints(c))
        .collect();
    finish(verts, domain, cfg)
}

/// Even permutations of `(3, 1, 1)` with an even number of minus signs.
pub fn truncated_tetrahedron(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let domain = select_rational(cfg.exactness, cfg.base);
    let signs = GroupAction::even_sign_flips(3, &all_coords(3))?;
    let g = signs.product(&GroupAction::alternating(3)?)?;
    let verts = expand(&[ints(&[3, 1, 1])], &g)?;
    finish(verts, domain, cfg)
}

/// All permutations of `(0, ±1, ±2)`.
pub fn truncated_octahedron(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let domain = select_rational(cfg.exactness, cfg.base);
    let verts = signed_orbit(&[ints(&[0, 1, 2])], &GroupAction::symmetric(3)?)?;
    finish(verts, domain, cfg)
}

pub fn octahedron(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    super::cross_polytope(3, cfg)
}

/// Snub cube from the tribonacci constant.
///
/// Approximate unless an explicit exact base is given; exact bases fail
/// with `DomainMismatch` since the constant is a cube root.
pub fn snub_cube(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let domain = cfg.base.unwrap_or(Domain::Approximate);
    let (work, r33) = domain.adjoin_sqrt(33)?;
    let t = &r33 * 3;
    let a = work.nth_root(&(&t + 17), 3)?;
    let b = work.nth_root(&(&t - 17), 3)?;
    let z = (a - b - 1) / 3;
    let z2 = &z * &z;
    let alt = GroupAction::alternating(3)?;
    let all = all_coords(3);
    let mut set = OrbitSet::new();
    // odd sign products on (1, z, z²), even ones on (z, 1, z²)
    set.extend(
        &[vec3(Scalar::one(), z.clone(), z2.clone())],
        &alt.product(&GroupAction::odd_sign_flips(3, &all)?)?,
    )?;
    set.extend(
        &[vec3(z, Scalar::one(), z2)],
        &alt.product(&GroupAction::even_sign_flips(3, &all)?)?,
    )?;
    finish(set.into_vertices(), domain, cfg)
}

/// Truncated icosahedron on the icosahedron's scale (edge 1/3): even
/// permutations of `(0, ±1, ±3φ)`, `(±1, ±(2 + φ), ±2φ)`, `(±φ, ±2, ±φ³)`,
/// divided by 6.
pub fn buckyball(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let (domain, g) = golden(cfg);
    let sixth = |x: Scalar| x / 6;
    let seeds = [
        vec3(Scalar::zero(), Scalar::ratio(1, 6), &g / 2),
        vec3(Scalar::ratio(1, 6), sixth(&g + 2), &g / 3),
        vec3(sixth(g.clone()), Scalar::ratio(1, 3), sixth(&g * 2 + 1)),
    ];
    let verts = signed_orbit(&seeds, &GroupAction::alternating(3)?)?;
    finish(verts, domain, cfg)
}

/// Even permutations of `(0, 0, ±φ)` and `(±1/2, ±φ/2, ±φ²/2)`.
pub fn icosidodecahedron(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let (domain, g) = golden(cfg);
    let seeds = [
        vec3(half(1), &g / 2, (&g + 1) / 2),
        vec3(Scalar::zero(), Scalar::zero(), g),
    ];
    let verts = signed_orbit(&seeds, &GroupAction::alternating(3)?)?;
    finish(verts, domain, cfg)
}

/// Even permutations of `(0, ±1/φ, ±(2 + φ))`, `(±1/φ, ±φ, ±2φ)`,
/// `(±φ, ±2, ±φ²)`.
pub fn truncated_dodecahedron(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let (domain, g) = golden(cfg);
    let inv = Scalar::one().checked_div(&g)?;
    let seeds = [
        vec3(Scalar::zero(), inv.clone(), &g + 2),
        vec3(inv, g.clone(), &g * 2),
        vec3(g.clone(), Scalar::int(2), g.pow(2)),
    ];
    let verts = signed_orbit(&seeds, &GroupAction::alternating(3)?)?;
    finish(verts, domain, cfg)
}

/// Kirkman's icosahedron: 20 integer vertices, 12 faces, not face-transitive.
pub fn kirkman_icosahedron(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let domain = select_rational(cfg.exactness, cfg.base);
    let mut set = OrbitSet::new();
    for seed in [[9i64, 6, 6], [12, 4, 0], [0, 12, 8], [6, 0, 12]] {
        let v = ints(&seed);
        set.extend(std::slice::from_ref(&v), &super::signs_on_nonzero(&v)?)?;
    }
    finish(set.into_vertices(), domain, cfg)
}

/// Even permutations of `(±1, ±1, ±φ³)`, `(±φ², ±φ, ±2φ)`, `(±(2 + φ), 0, ±φ²)`.
pub fn rhombicosidodecahedron(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let (domain, g) = golden(cfg);
    let seeds = [
        vec3(Scalar::one(), Scalar::one(), g.pow(3)),
        vec3(g.pow(2), g.clone(), &g * 2),
        vec3(&g + 2, Scalar::zero(), g.pow(2)),
    ];
    let verts = signed_orbit(&seeds, &GroupAction::alternating(3)?)?;
    finish(verts, domain, cfg)
}

/// Even permutations of five signed seed triples.
pub fn truncated_icosidodecahedron(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let (domain, g) = golden(cfg);
    let inv = Scalar::one().checked_div(&g)?;
    let seeds = [
        vec3(inv.clone(), inv.clone(), &g + 3),
        vec3(&inv * 2, g.clone(), &g * 2 + 1),
        vec3(inv, g.pow(2), &g * 3 - 1),
        vec3(&g * 2 - 1, Scalar::int(2), &g + 2),
        vec3(g.clone(), Scalar::int(3), &g * 2),
    ];
    let verts = signed_orbit(&seeds, &GroupAction::alternating(3)?)?;
    finish(verts, domain, cfg)
}

/// Snub dodecahedron; approximate unless an explicit exact base is given
/// (which then fails, the constant `ξ` being a sum of cube roots).
pub fn snub_dodecahedron(cfg: &RecipeCfg) -> Result<Polytope, PolytopeError> {
    let domain = cfg.base.unwrap_or(Domain::Approximate);
    let (_, phi) = select_domain(cfg.exactness, Some(domain), &QuadraticConstant::golden_ratio());
    let s = domain.sqrt(&(&phi - &Scalar::ratio(5, 27)))?;
    let xi = domain.nth_root(&((&phi + &s) / 2), 3)? + domain.nth_root(&((&phi - &s) / 2), 3)?;
    let inv_xi = Scalar::one().checked_div(&xi)?;
    let inv_phi = Scalar::one().checked_div(&phi)?;
    let alpha = &xi - &inv_xi;
    let beta = &xi * &phi + phi.pow(2) + &phi * &inv_xi;
    let (a, b, p, ip) = (&alpha, &beta, &phi, &inv_phi);
    let seeds = [
        vec3(a * 2, Scalar::int(2), b * 2),
        vec3(a + b * ip + p, -(a * p) + b + ip, a * ip + b * p - 1),
        vec3(a + b * ip - p, a * p - b + ip, a * ip + b * p + 1),
        vec3(-(a * ip) + b * p + 1, -a + b * ip - p, a * p + b - ip),
        vec3(-(a * ip) + b * p - 1, a - b * ip - p, a * p + b + ip),
    ];
    // sign patterns with an odd number of minus signs
    let odd = GroupAction::odd_sign_flips(3, &all_coords(3))?;
    let g = GroupAction::alternating(3)?.product(&odd)?;
    let verts = expand(&seeds, &g)?;
    finish(verts, domain, cfg)
}
