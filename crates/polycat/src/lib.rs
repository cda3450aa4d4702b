//! Symmetric polytope construction over exact and approximate coordinates.
//!
//! Layers, bottom-up:
//! - `field`: arithmetic domains (`QQ`, `QQ[sqrt d]`, `RDF`) and the selector
//!   that decides where a recipe's coordinates live.
//! - `orbit`: seed vectors expanded under signed-permutation actions.
//! - `project`: isometric map from the zero-sum hyperplane of `R^d` to `R^(d-1)`.
//! - `assemble`: hand-off of a vertex list to a hull backend.
//! - `library`: the named catalogue built from the layers above.
//!
//! API Policy
//! - Project-internal; no stable public API. Prefer clearer types over
//!   compatibility when the two pull apart.

pub mod assemble;
pub mod cfg;
mod error;
pub mod field;
pub mod library;
pub mod orbit;
pub mod project;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use assemble::{assemble, Polytope};
pub use error::PolytopeError;
pub use field::{Domain, Scalar};
pub use vector::Vector;

/// Common exports for recipe callers.
pub mod prelude {
    pub use crate::assemble::{assemble, assemble_with, HullBackend, Polytope};
    pub use crate::field::{
        select_domain, select_rational, Domain, Exactness, QuadraticConstant, Scalar,
    };
    pub use crate::library::{build_named, RecipeArgs, RecipeCfg, NAMES};
    pub use crate::orbit::{expand, GroupAction, OrbitSet, SignedPerm};
    pub use crate::project::{build_projection, project_points, ProjectionMap};
    pub use crate::vector::Vector;
    pub use crate::PolytopeError;
}
