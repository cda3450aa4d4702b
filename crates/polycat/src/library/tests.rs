use std::cmp::Ordering;

use super::*;
use crate::field::{Domain, Scalar};
use crate::vector::Vector;

fn exact() -> RecipeCfg {
    RecipeCfg::default()
}

/// Smallest squared distance between two distinct vertices, compared exactly.
fn min_edge_squared(p: &Polytope) -> Scalar {
    let vs = p.vertices();
    let mut best: Option<Scalar> = None;
    for i in 0..vs.len() {
        for j in i + 1..vs.len() {
            let d = vs[i].checked_sub(&vs[j]).unwrap().norm_squared().unwrap();
            best = match best {
                Some(b) if b.exact_cmp(&d) != Some(Ordering::Greater) => Some(b),
                _ => Some(d),
            };
        }
    }
    best.unwrap()
}

fn no_duplicates(p: &Polytope) -> bool {
    let vs = p.vertices();
    (0..vs.len()).all(|i| (i + 1..vs.len()).all(|j| vs[i] != vs[j]))
}

#[test]
fn solid_vertex_counts() {
    let cfg = exact();
    let cases: [(&str, Result<Polytope, PolytopeError>, usize); 20] = [
        ("icosahedron", icosahedron(&cfg), 12),
        ("dodecahedron", dodecahedron(&cfg), 20),
        ("small_rhombicuboctahedron", small_rhombicuboctahedron(&cfg), 24),
        ("great_rhombicuboctahedron", great_rhombicuboctahedron(&cfg), 48),
        ("rhombic_dodecahedron", rhombic_dodecahedron(&cfg), 14),
        ("cuboctahedron", cuboctahedron(&cfg), 12),
        ("truncated_cube", truncated_cube(&cfg), 24),
        ("tetrahedron", tetrahedron(&cfg), 4),
        ("truncated_tetrahedron", truncated_tetrahedron(&cfg), 12),
        ("truncated_octahedron", truncated_octahedron(&cfg), 24),
        ("octahedron", octahedron(&cfg), 6),
        ("snub_cube", snub_cube(&cfg), 24),
        ("buckyball", buckyball(&cfg), 60),
        ("icosidodecahedron", icosidodecahedron(&cfg), 30),
        ("truncated_dodecahedron", truncated_dodecahedron(&cfg), 60),
        ("kirkman_icosahedron", kirkman_icosahedron(&cfg), 20),
        ("rhombicosidodecahedron", rhombicosidodecahedron(&cfg), 60),
        ("truncated_icosidodecahedron", truncated_icosidodecahedron(&cfg), 120),
        ("snub_dodecahedron", snub_dodecahedron(&cfg), 60),
        ("cube", cube(&cfg), 8),
    ];
    for (name, p, n) in cases {
        let p = p.unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(p.n_vertices(), n, "{name}");
        assert_eq!(p.ambient_dim(), 3, "{name}");
        assert!(no_duplicates(&p), "{name}");
    }
}

#[test]
fn higher_vertex_counts() {
    let cfg = exact();
    let gens = vec![
        Vector::from_ints(&[1, 0, 0]),
        Vector::from_ints(&[0, 1, 0]),
        Vector::from_ints(&[1, 1, 1]),
    ];
    let cases: [(&str, Result<Polytope, PolytopeError>, usize, usize); 12] = [
        ("twenty_four_cell", twenty_four_cell(&cfg), 24, 4),
        ("six_hundred_cell", six_hundred_cell(&cfg), 120, 4),
        ("grand_antiprism", grand_antiprism(&cfg), 100, 4),
        ("gosset_3_21", gosset_3_21(&cfg), 56, 8),
        ("birkhoff_polytope", birkhoff_polytope(3, &cfg), 6, 9),
        ("simplex", simplex(3, false, &cfg), 4, 4),
        ("hypersimplex", hypersimplex(4, 2, false, &cfg), 6, 4),
        ("permutahedron", permutahedron(4, false, &cfg), 24, 4),
        ("hypercube", hypercube(4, &cfg), 16, 4),
        ("cross_polytope", cross_polytope(4, &cfg), 8, 4),
        ("cyclic_polytope", cyclic_polytope(3, 6, &cfg), 6, 3),
        ("parallelotope", parallelotope(&gens, &cfg), 8, 3),
    ];
    for (name, p, n, dim) in cases {
        let p = p.unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!((p.n_vertices(), p.ambient_dim()), (n, dim), "{name}");
        assert!(no_duplicates(&p), "{name}");
    }
}

#[test]
fn golden_solids_are_exact_by_default() {
    let p = icosahedron(&exact()).unwrap();
    assert_eq!(p.domain(), Domain::quadratic(5).unwrap());
    assert!(p.vertices().iter().all(Vector::is_exact));
    assert_eq!(min_edge_squared(&p), Scalar::int(1));

    let b = buckyball(&exact()).unwrap();
    assert_eq!(min_edge_squared(&b), Scalar::ratio(1, 9));

    let r = rhombicosidodecahedron(&exact()).unwrap();
    assert_eq!(min_edge_squared(&r), Scalar::int(4));
}

#[test]
fn golden_solids_share_edge_length_two_over_phi() {
    // (2/φ)² = 8 - 4φ = 6 - 2√5
    let (_, r5) = Domain::rational().adjoin_sqrt(5).unwrap();
    let expected = Scalar::int(6) - &r5 * 2;
    for p in [
        dodecahedron(&exact()).unwrap(),
        truncated_dodecahedron(&exact()).unwrap(),
        truncated_icosidodecahedron(&exact()).unwrap(),
    ] {
        assert_eq!(min_edge_squared(&p), expected);
    }
}

#[test]
fn approximate_variants_match_exact_counts() {
    let cfg = RecipeCfg::approximate();
    for name in [
        "icosahedron",
        "dodecahedron",
        "small_rhombicuboctahedron",
        "great_rhombicuboctahedron",
        "truncated_cube",
        "buckyball",
        "icosidodecahedron",
        "truncated_dodecahedron",
        "rhombicosidodecahedron",
        "truncated_icosidodecahedron",
        "six_hundred_cell",
        "grand_antiprism",
    ] {
        let e = build_named(name, &RecipeArgs::default(), &exact()).unwrap();
        let a = build_named(name, &RecipeArgs::default(), &cfg).unwrap();
        assert_eq!(a.domain(), Domain::Approximate, "{name}");
        assert_eq!(a.n_vertices(), e.n_vertices(), "{name}");
        for (x, y) in a.vertices_f64().iter().zip(e.vertices_f64()) {
            for (u, v) in x.iter().zip(&y) {
                assert!((u - v).abs() < 1e-12, "{name}: {u} vs {v}");
            }
        }
    }
}

#[test]
fn incompatible_base_fails_at_assembly() {
    let err = icosahedron(&exact().with_base(Domain::Rational)).unwrap_err();
    assert!(err.is_domain_mismatch(), "{err}");

    let err = truncated_cube(&exact().with_base(Domain::quadratic(5).unwrap())).unwrap_err();
    assert!(err.is_domain_mismatch(), "{err}");
}

#[test]
fn rational_solid_honours_explicit_base() {
    let k = Domain::quadratic(2).unwrap();
    let p = cuboctahedron(&exact().with_base(k)).unwrap();
    assert_eq!(p.domain(), k);
    let p = cuboctahedron(&RecipeCfg::approximate()).unwrap();
    assert!(p.vertices().iter().all(|v| !v.is_exact()));
}

#[test]
fn snub_solids_need_an_approximate_domain() {
    assert_eq!(snub_cube(&exact()).unwrap().domain(), Domain::Approximate);
    let err = snub_cube(&exact().with_base(Domain::Rational)).unwrap_err();
    assert!(err.is_domain_mismatch(), "{err}");
    let err = snub_dodecahedron(&exact().with_base(Domain::quadratic(5).unwrap())).unwrap_err();
    assert!(err.is_domain_mismatch(), "{err}");
}

#[test]
fn regular_polygons() {
    let hex = regular_polygon(6, &exact()).unwrap();
    assert_eq!(hex.n_vertices(), 6);
    assert_eq!(hex.domain(), Domain::quadratic(3).unwrap());
    assert_eq!(hex.vertices()[0], Vector::from_ints(&[0, 1]));

    let square = regular_polygon(4, &exact()).unwrap();
    assert_eq!(square.domain(), Domain::Rational);
    assert_eq!(square.vertices()[1], Vector::from_ints(&[1, 0]));

    assert!(regular_polygon(5, &exact()).unwrap_err().is_domain_mismatch());
    let pent = regular_polygon(5, &RecipeCfg::approximate()).unwrap();
    assert_eq!(pent.n_vertices(), 5);
    for v in pent.vertices_f64() {
        assert!((v[0] * v[0] + v[1] * v[1] - 1.0).abs() < 1e-12);
    }

    assert!(matches!(
        regular_polygon(2, &exact()),
        Err(PolytopeError::InvalidParams { .. })
    ));
}

#[test]
fn projected_families_drop_one_dimension() {
    let p = permutahedron(4, true, &exact()).unwrap();
    assert_eq!((p.n_vertices(), p.ambient_dim()), (24, 3));
    assert_eq!(p.domain(), Domain::Approximate);

    let s = simplex(2, true, &exact()).unwrap();
    assert_eq!(s.ambient_dim(), 2);
    // equilateral: every pair at distance √2
    for d in [
        (&s.vertices_f64()[0], &s.vertices_f64()[1]),
        (&s.vertices_f64()[1], &s.vertices_f64()[2]),
    ] {
        let n: f64 = d.0.iter().zip(d.1).map(|(a, b)| (a - b).powi(2)).sum();
        assert!((n - 2.0).abs() < 1e-12);
    }
}

#[test]
fn family_parameter_validation() {
    let cfg = exact();
    assert!(hypersimplex(3, 4, false, &cfg).is_err());
    assert!(hypercube(0, &cfg).is_err());
    assert!(cyclic_polytope(0, 4, &cfg).is_err());
    assert!(parallelotope(&[], &cfg).is_err());
    let mixed = [Vector::from_ints(&[1]), Vector::from_ints(&[1, 1])];
    assert!(parallelotope(&mixed, &cfg).is_err());
}

#[test]
fn oversized_families_are_invalid_params() {
    let cfg = exact();
    let bad = |r: Result<Polytope, PolytopeError>| {
        matches!(r, Err(PolytopeError::InvalidParams { .. }))
    };
    assert!(bad(hypercube(64, &cfg)));
    assert!(bad(hypercube(usize::MAX, &cfg)));
    assert!(bad(permutahedron(20, false, &cfg)));
    assert!(bad(hypersimplex(21, 3, false, &cfg)));
    assert!(bad(birkhoff_polytope(20, &cfg)));
    let args = RecipeArgs {
        dim: Some(64),
        ..RecipeArgs::default()
    };
    assert!(bad(build_named("hypercube", &args, &cfg)));
}

#[test]
fn parallelotope_picks_the_generator_domain() {
    let (k, r2) = Domain::rational().adjoin_sqrt(2).unwrap();
    let gens = [
        Vector::new(vec![r2, Scalar::zero()]),
        Vector::from_ints(&[0, 1]),
    ];
    let p = parallelotope(&gens, &exact()).unwrap();
    assert_eq!(p.domain(), k);
    assert_eq!(p.vertices()[0], Vector::zeros(2));
    assert_eq!(p.n_vertices(), 4);
}

#[test]
fn cyclic_polytope_lies_on_the_moment_curve() {
    let p = cyclic_polytope(3, 4, &exact()).unwrap();
    assert_eq!(p.vertices()[3], Vector::from_ints(&[3, 9, 27]));
}

#[test]
fn every_name_dispatches() {
    let args = RecipeArgs {
        n: Some(4),
        k: Some(2),
        dim: Some(3),
        project: false,
        generators: vec![Vector::from_ints(&[1, 0]), Vector::from_ints(&[0, 1])],
    };
    for name in NAMES {
        let p = build_named(name, &args, &exact()).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert!(p.n_vertices() > 0, "{name}");
        assert_eq!(p.backend(), crate::assemble::DEFAULT_BACKEND);
    }
}

#[test]
fn unknown_names_and_missing_args_are_rejected() {
    let err = build_named("pentakis", &RecipeArgs::default(), &exact()).unwrap_err();
    assert_eq!(err.to_string(), "invalid params: unknown polytope `pentakis`");
    assert!(matches!(
        build_named("hypercube", &RecipeArgs::default(), &exact()),
        Err(PolytopeError::InvalidParams { .. })
    ));
    let cfg = exact().with_backend("cdd");
    let err = build_named("cube", &RecipeArgs::default(), &cfg).unwrap_err();
    assert!(matches!(err, PolytopeError::BackendFailure { .. }));
}
