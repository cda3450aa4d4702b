//! Orbit generation under finite coordinate symmetries.
//!
//! Purpose
//! - One deduplicating expansion primitive shared by every recipe, instead of
//!   bespoke vertex enumeration per polytope.
//!
//! Why this design (short)
//! - Groups are precomputed lists of signed permutations: plain data, built
//!   once per recipe, hashable and composable.
//! - Conditional sign selection (vertex `v` under one sign pattern, a permuted
//!   `v` under the complementary one) is expressed as several seed /
//!   partial-action pairs fed into one `OrbitSet`; `expand` itself has no
//!   special cases.
//!
//! Conventions
//! - `expand(S, G)` is seed-major, element-minor, first occurrence kept.
//! - Exact vectors deduplicate by value; approximate vectors never do.
//! - An empty action is `InvalidGroupAction`; the smallest valid action is
//!   the identity, which returns the seeds unchanged.

mod expand;
mod group;

pub use expand::{expand, OrbitSet};
pub use group::{GroupAction, SignedPerm};
