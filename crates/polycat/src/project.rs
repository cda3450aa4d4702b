//! Isometric projection of the hyperplane `sum(x) = k` in R^d onto R^(d-1).
//!
//! Rows are the normalized vectors `(1, .., 1, -i, 0, .., 0)` (`i` ones) for
//! `i = 1..d-1`: an orthonormal basis of the zero-sum hyperplane. Row `i` only
//! touches the first `i+1` coordinates, so the map for `d+1` restricted to
//! the first `d-1` outputs is exactly the map for `d` on the prefix.
//!
//! Exact domains need `sqrt(i(i+1))` for every row, which a single quadratic
//! field only provides for `d <= 2` (`QQ[sqrt2]`). Anything else is a
//! `DomainMismatch`; pass `Domain::Approximate` for general `d`.

use nalgebra::DMatrix;

use crate::error::PolytopeError;
use crate::field::{Domain, Scalar};
use crate::vector::Vector;

/// `(d-1) x d` matrix over a domain, built once per dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectionMap {
    dim: usize,
    domain: Domain,
    rows: Vec<Vector>,
}

/// Build the projection for `dim`-dimensional input.
pub fn build_projection(dim: usize, domain: Domain) -> Result<ProjectionMap, PolytopeError> {
    if dim == 0 {
        return Err(PolytopeError::invalid("projection of 0-dimensional points"));
    }
    let mut rows = Vec::with_capacity(dim - 1);
    for i in 1..dim {
        let ii = i as i64;
        let norm_sq = Scalar::int(ii * (ii + 1));
        let entries: Vec<Scalar> = (0..dim)
            .map(|j| match j.cmp(&i) {
                std::cmp::Ordering::Less => 1,
                std::cmp::Ordering::Equal => -ii,
                std::cmp::Ordering::Greater => 0,
            })
            .map(Scalar::int)
            .collect();
        let row = match domain {
            Domain::Approximate => {
                let norm = norm_sq.to_f64().sqrt();
                entries
                    .iter()
                    .map(|e| Scalar::Approx(e.to_f64() / norm))
                    .collect()
            }
            _ => {
                let norm = domain.sqrt(&norm_sq)?;
                entries
                    .iter()
                    .map(|e| e.checked_div(&norm))
                    .collect::<Result<Vec<_>, _>>()?
            }
        };
        rows.push(Vector::new(row));
    }
    Ok(ProjectionMap { dim, domain, rows })
}

impl ProjectionMap {
    /// Input dimension `d`.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    #[inline]
    pub fn rows(&self) -> &[Vector] {
        &self.rows
    }

    pub fn to_matrix_f64(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.rows.len(), self.dim, |r, c| self.rows[r][c].to_f64())
    }

    /// Project one point.
    pub fn apply_one(&self, p: &Vector) -> Result<Vector, PolytopeError> {
        self.check_dim(p)?;
        if !self.domain.is_exact() {
            let y = self.to_matrix_f64() * p.to_dvector();
            return Ok(Vector::from_f64(y.as_slice()));
        }
        let p = self.coerce(p)?;
        let out = self
            .rows
            .iter()
            .map(|row| row.dot(&p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Vector::new(out))
    }

    /// Project every point; all-or-nothing.
    pub fn apply(&self, points: &[Vector]) -> Result<Vec<Vector>, PolytopeError> {
        if self.domain.is_exact() {
            return points.iter().map(|p| self.apply_one(p)).collect();
        }
        for p in points {
            self.check_dim(p)?;
        }
        let m = self.to_matrix_f64();
        Ok(points
            .iter()
            .map(|p| {
                let y = &m * p.to_dvector();
                Vector::from_f64(y.as_slice())
            })
            .collect())
    }

    fn coerce(&self, p: &Vector) -> Result<Vector, PolytopeError> {
        let coords = p
            .iter()
            .map(|x| self.domain.coerce(x))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Vector::new(coords))
    }

    fn check_dim(&self, p: &Vector) -> Result<(), PolytopeError> {
        if p.dim() != self.dim {
            return Err(PolytopeError::invalid(format!(
                "projection for dimension {} applied to a {}-vector",
                self.dim,
                p.dim()
            )));
        }
        Ok(())
    }
}

/// Project points sharing one dimension; the map is built from the first.
///
/// Empty input returns empty output without building a map.
pub fn project_points(points: &[Vector], domain: Domain) -> Result<Vec<Vector>, PolytopeError> {
    let Some(first) = points.first() else {
        return Ok(Vec::new());
    };
    build_projection(first.dim(), domain)?.apply(points)
}
