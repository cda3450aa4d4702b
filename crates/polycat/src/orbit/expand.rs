//! Seed × group expansion with exact deduplication.

use std::collections::HashSet;

use super::group::SignedPerm;
use crate::error::PolytopeError;
use crate::field::ExactKey;
use crate::vector::Vector;

/// Apply every element of `action` to every seed; drop exact duplicates.
///
/// Output order is seed-major, element-minor, first occurrence kept.
/// Approximate candidates are never deduplicated.
pub fn expand(seeds: &[Vector], action: &[SignedPerm]) -> Result<Vec<Vector>, PolytopeError> {
    let mut set = OrbitSet::new();
    set.extend(seeds, action)?;
    Ok(set.into_vertices())
}

/// Accumulator for several seed / partial-action pairs.
///
/// Deduplication spans all pairs, so recipes that split one orbit into
/// sign-conditional pieces get each vertex once.
#[derive(Clone, Debug, Default)]
pub struct OrbitSet {
    seen: HashSet<Vec<ExactKey>>,
    vertices: Vec<Vector>,
}

impl OrbitSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand `seeds` under `action` into the set.
    ///
    /// All-or-nothing: on error the set is left unchanged.
    pub fn extend(
        &mut self,
        seeds: &[Vector],
        action: &[SignedPerm],
    ) -> Result<&mut Self, PolytopeError> {
        if action.is_empty() {
            return Err(PolytopeError::group("empty action"));
        }
        let mut candidates = Vec::with_capacity(seeds.len() * action.len());
        for seed in seeds {
            for g in action {
                candidates.push(g.apply(seed)?);
            }
        }
        for v in candidates {
            self.push(v);
        }
        Ok(self)
    }

    /// Insert one vertex; returns `false` if an exact copy is already present.
    pub fn push(&mut self, v: Vector) -> bool {
        if let Some(key) = v.exact_key() {
            if !self.seen.insert(key) {
                return false;
            }
        }
        self.vertices.push(v);
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Vector> {
        self.vertices
    }
}
