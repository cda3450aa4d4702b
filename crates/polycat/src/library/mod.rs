//! Catalogue of symmetric polytopes.
//!
//! Each recipe picks a domain, writes a few seed vectors, expands them under
//! its symmetry group, optionally projects, and hands the result to the
//! assembler. Recipes carry no enumeration logic of their own.
//!
//! Conventions
//! - Rational coordinates are always built as exact scalars, even when the
//!   target domain is `RDF`; the assembler coerces. This keeps exact
//!   deduplication available for every rational orbit.
//! - Seeds that carry an approximate constant are expanded only under actions
//!   that cannot produce literal duplicates (sign flips restricted to
//!   non-zero coordinates, permutation groups acting freely on the seed).
//! - Scales follow the classical coordinates (icosahedron edge 1, etc.).

use crate::assemble::{assemble, Polytope};
use crate::error::PolytopeError;
use crate::field::{select_domain, Domain, Exactness, QuadraticConstant, Scalar};
use crate::orbit::{GroupAction, OrbitSet};
use crate::vector::Vector;

mod higher;
mod solids;

pub use higher::{
    birkhoff_polytope, cross_polytope, cube, cyclic_polytope, gosset_3_21, grand_antiprism,
    hypercube, hypersimplex, parallelotope, permutahedron, simplex, six_hundred_cell,
    twenty_four_cell,
};
pub use solids::{
    buckyball, cuboctahedron, dodecahedron, great_rhombicuboctahedron, icosahedron,
    icosidodecahedron, kirkman_icosahedron, octahedron, regular_polygon, rhombic_dodecahedron,
    rhombicosidodecahedron, small_rhombicuboctahedron, snub_cube, snub_dodecahedron, tetrahedron,
    truncated_cube, truncated_dodecahedron, truncated_icosidodecahedron, truncated_octahedron,
    truncated_tetrahedron,
};

/// Per-call recipe configuration. `Default` = exact, no base, default backend.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecipeCfg {
    pub exactness: Exactness,
    /// Explicit domain; wins over `exactness`.
    pub base: Option<Domain>,
    /// Backend hint for the assembler.
    pub backend: Option<String>,
}

impl RecipeCfg {
    pub fn approximate() -> Self {
        Self {
            exactness: Exactness::Approximate,
            ..Self::default()
        }
    }

    pub fn with_base(mut self, base: Domain) -> Self {
        self.base = Some(base);
        self
    }

    pub fn with_backend(mut self, backend: impl Into<String>) -> Self {
        self.backend = Some(backend.into());
        self
    }
}

/// Numeric arguments for name-based dispatch; unused fields are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipeArgs {
    pub n: Option<usize>,
    pub k: Option<usize>,
    pub dim: Option<usize>,
    pub project: bool,
    pub generators: Vec<Vector>,
}

/// Every name accepted by `build_named`.
pub const NAMES: &[&str] = &[
    "regular_polygon",
    "birkhoff_polytope",
    "simplex",
    "icosahedron",
    "dodecahedron",
    "small_rhombicuboctahedron",
    "great_rhombicuboctahedron",
    "rhombic_dodecahedron",
    "cuboctahedron",
    "truncated_cube",
    "tetrahedron",
    "truncated_tetrahedron",
    "truncated_octahedron",
    "octahedron",
    "snub_cube",
    "buckyball",
    "icosidodecahedron",
    "truncated_dodecahedron",
    "kirkman_icosahedron",
    "rhombicosidodecahedron",
    "truncated_icosidodecahedron",
    "snub_dodecahedron",
    "twenty_four_cell",
    "six_hundred_cell",
    "grand_antiprism",
    "gosset_3_21",
    "cyclic_polytope",
    "hypersimplex",
    "permutahedron",
    "hypercube",
    "cube",
    "cross_polytope",
    "parallelotope",
];

/// Build a catalogue entry by name.
pub fn build_named(
    name: &str,
    args: &RecipeArgs,
    cfg: &RecipeCfg,
) -> Result<Polytope, PolytopeError> {
    tracing::debug!(name, n = ?args.n, k = ?args.k, dim = ?args.dim, "recipe");
    let need = |v: Option<usize>, what: &str| {
        v.ok_or_else(|| PolytopeError::invalid(format!("`{name}` needs --{what}")))
    };
    match name {
        "regular_polygon" => regular_polygon(need(args.n, "n")?, cfg),
        "birkhoff_polytope" => birkhoff_polytope(need(args.n, "n")?, cfg),
        "simplex" => simplex(args.dim.unwrap_or(3), args.project, cfg),
        "icosahedron" => icosahedron(cfg),
        "dodecahedron" => dodecahedron(cfg),
        "small_rhombicuboctahedron" => small_rhombicuboctahedron(cfg),
        "great_rhombicuboctahedron" => great_rhombicuboctahedron(cfg),
        "rhombic_dodecahedron" => rhombic_dodecahedron(cfg),
        "cuboctahedron" => cuboctahedron(cfg),
        "truncated_cube" => truncated_cube(cfg),
        "tetrahedron" => tetrahedron(cfg),
        "truncated_tetrahedron" => truncated_tetrahedron(cfg),
        "truncated_octahedron" => truncated_octahedron(cfg),
        "octahedron" => octahedron(cfg),
        "snub_cube" => snub_cube(cfg),
        "buckyball" => buckyball(cfg),
        "icosidodecahedron" => icosidodecahedron(cfg),
        "truncated_dodecahedron" => truncated_dodecahedron(cfg),
        "kirkman_icosahedron" => kirkman_icosahedron(cfg),
        "rhombicosidodecahedron" => rhombicosidodecahedron(cfg),
        "truncated_icosidodecahedron" => truncated_icosidodecahedron(cfg),
        "snub_dodecahedron" => snub_dodecahedron(cfg),
        "twenty_four_cell" => twenty_four_cell(cfg),
        "six_hundred_cell" => six_hundred_cell(cfg),
        "grand_antiprism" => grand_antiprism(cfg),
        "gosset_3_21" => gosset_3_21(cfg),
        "cyclic_polytope" => cyclic_polytope(need(args.dim, "dim")?, need(args.n, "n")?, cfg),
        "hypersimplex" => hypersimplex(
            need(args.dim, "dim")?,
            need(args.k, "k")?,
            args.project,
            cfg,
        ),
        "permutahedron" => permutahedron(need(args.n, "n")?, args.project, cfg),
        "hypercube" => hypercube(need(args.dim, "dim")?, cfg),
        "cube" => cube(cfg),
        "cross_polytope" => cross_polytope(need(args.dim, "dim")?, cfg),
        "parallelotope" => parallelotope(&args.generators, cfg),
        other => Err(PolytopeError::invalid(format!("unknown polytope `{other}`"))),
    }
}

fn finish(
    vertices: Vec<Vector>,
    domain: Domain,
    cfg: &RecipeCfg,
) -> Result<Polytope, PolytopeError> {
    assemble(vertices, domain, cfg.backend.as_deref())
}

/// Golden ratio in the domain the configuration asks for.
fn golden(cfg: &RecipeCfg) -> (Domain, Scalar) {
    select_domain(cfg.exactness, cfg.base, &QuadraticConstant::golden_ratio())
}

fn ints(coords: &[i64]) -> Vector {
    Vector::from_ints(coords)
}

fn half(n: i64) -> Scalar {
    Scalar::ratio(n, 2)
}

fn all_coords(dim: usize) -> Vec<usize> {
    (0..dim).collect()
}

/// Sign flips on the non-zero coordinates of `seed`.
pub(crate) fn signs_on_nonzero(seed: &Vector) -> Result<GroupAction, PolytopeError> {
    let nonzero: Vec<usize> = (0..seed.dim()).filter(|&i| !seed[i].is_zero()).collect();
    GroupAction::sign_flips(seed.dim(), &nonzero)
}

/// `perms ∘ (signs on non-zero coordinates)` for each seed, seed-major.
///
/// The "all even permutations of (±a, ±b, ±c)" pattern.
fn signed_orbit(seeds: &[Vector], perms: &GroupAction) -> Result<Vec<Vector>, PolytopeError> {
    let mut set = OrbitSet::new();
    for seed in seeds {
        let g = perms.product(&signs_on_nonzero(seed)?)?;
        set.extend(std::slice::from_ref(seed), &g)?;
    }
    Ok(set.into_vertices())
}

#[cfg(test)]
mod tests;
