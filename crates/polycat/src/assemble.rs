//! Hand-off from vertex lists to a hull backend.
//!
//! The assembler owns exactly two things: coercing every coordinate into the
//! requested domain, and picking a backend by name. Hull construction proper
//! (faces, volume, lattice) belongs to the backend; errors from either step
//! reach the caller unchanged.

use crate::error::PolytopeError;
use crate::field::Domain;
use crate::vector::Vector;

/// Name of the built-in backend, used when no hint is given.
pub const DEFAULT_BACKEND: &str = "vrep";

/// Convex-hull construction from a vertex list.
pub trait HullBackend {
    fn name(&self) -> &str;

    /// Coordinates arrive already coerced into `domain`.
    fn build(&self, vertices: Vec<Vector>, domain: Domain) -> Result<Polytope, PolytopeError>;
}

/// V-representation only: stores the vertex list after basic sanity checks.
#[derive(Clone, Copy, Debug, Default)]
pub struct VertexRep;

impl HullBackend for VertexRep {
    fn name(&self) -> &str {
        DEFAULT_BACKEND
    }

    fn build(&self, vertices: Vec<Vector>, domain: Domain) -> Result<Polytope, PolytopeError> {
        let Some(first) = vertices.first() else {
            return Err(PolytopeError::backend(self.name(), "no vertices"));
        };
        let dim = first.dim();
        if let Some(bad) = vertices.iter().find(|v| v.dim() != dim) {
            return Err(PolytopeError::backend(
                self.name(),
                format!("mixed dimensions {dim} and {}", bad.dim()),
            ));
        }
        if !domain.is_exact() {
            let finite = vertices
                .iter()
                .all(|v| v.iter().all(|x| x.to_f64().is_finite()));
            if !finite {
                return Err(PolytopeError::backend(self.name(), "non-finite coordinate"));
            }
        }
        Ok(Polytope::from_parts(domain, vertices, self.name()))
    }
}

/// Opaque result of hull construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Polytope {
    domain: Domain,
    vertices: Vec<Vector>,
    backend: String,
}

impl Polytope {
    /// For backends: wrap coerced vertices.
    pub fn from_parts(domain: Domain, vertices: Vec<Vector>, backend: impl Into<String>) -> Self {
        Self {
            domain,
            vertices,
            backend: backend.into(),
        }
    }

    #[inline]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector] {
        &self.vertices
    }

    #[inline]
    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn ambient_dim(&self) -> usize {
        self.vertices.first().map_or(0, Vector::dim)
    }

    #[inline]
    pub fn backend(&self) -> &str {
        &self.backend
    }

    pub fn vertices_f64(&self) -> Vec<Vec<f64>> {
        self.vertices.iter().map(Vector::to_f64_vec).collect()
    }

    pub fn into_vertices(self) -> Vec<Vector> {
        self.vertices
    }
}

/// Look up a backend by hint; `None` is the default.
pub fn backend_for(hint: Option<&str>) -> Result<Box<dyn HullBackend>, PolytopeError> {
    match hint.unwrap_or(DEFAULT_BACKEND) {
        DEFAULT_BACKEND => Ok(Box::new(VertexRep)),
        other => Err(PolytopeError::backend(other, "unknown backend")),
    }
}

/// Coerce `vertices` into `domain` and build with the hinted backend.
pub fn assemble(
    vertices: Vec<Vector>,
    domain: Domain,
    backend_hint: Option<&str>,
) -> Result<Polytope, PolytopeError> {
    let backend = backend_for(backend_hint)?;
    assemble_with(backend.as_ref(), vertices, domain)
}

pub fn assemble_with(
    backend: &dyn HullBackend,
    vertices: Vec<Vector>,
    domain: Domain,
) -> Result<Polytope, PolytopeError> {
    let coerced = vertices
        .iter()
        .map(|v| {
            v.iter()
                .map(|x| domain.coerce(x))
                .collect::<Result<Vec<_>, _>>()
                .map(Vector::new)
        })
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(
        backend = backend.name(),
        n_vertices = coerced.len(),
        %domain,
        "assemble"
    );
    backend.build(coerced, domain)
}
