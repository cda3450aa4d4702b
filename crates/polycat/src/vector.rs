//! Coordinate vectors over a `Scalar` domain.

use std::fmt;
use std::ops::Index;

use nalgebra::DVector;

use crate::error::PolytopeError;
use crate::field::{ExactKey, Scalar};

/// Ordered tuple of coordinates.
///
/// Equality is exact, component by component. Approximate coordinates compare
/// by `f64 ==`; callers own any tolerance policy.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector(Vec<Scalar>);

impl Vector {
    #[inline]
    pub fn new(coords: Vec<Scalar>) -> Self {
        Self(coords)
    }

    pub fn from_ints(coords: &[i64]) -> Self {
        Self(coords.iter().map(|&c| Scalar::int(c)).collect())
    }

    pub fn from_f64(coords: &[f64]) -> Self {
        Self(coords.iter().map(|&c| Scalar::Approx(c)).collect())
    }

    pub fn zeros(dim: usize) -> Self {
        Self(vec![Scalar::zero(); dim])
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn coords(&self) -> &[Scalar] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.0.iter()
    }

    pub fn is_exact(&self) -> bool {
        self.0.iter().all(Scalar::is_exact)
    }

    /// Sum of coordinates; mixing two quadratic fields is a `DomainMismatch`.
    pub fn sum(&self) -> Result<Scalar, PolytopeError> {
        self.0
            .iter()
            .try_fold(Scalar::zero(), |acc, x| acc.checked_add(x))
    }

    pub fn dot(&self, other: &Vector) -> Result<Scalar, PolytopeError> {
        self.check_dim(other)?;
        let mut acc = Scalar::zero();
        for (x, y) in self.0.iter().zip(&other.0) {
            acc = acc.checked_add(&x.checked_mul(y)?)?;
        }
        Ok(acc)
    }

    pub fn norm_squared(&self) -> Result<Scalar, PolytopeError> {
        self.dot(self)
    }

    pub fn checked_add(&self, other: &Vector) -> Result<Vector, PolytopeError> {
        self.zip_with(other, Scalar::checked_add)
    }

    pub fn checked_sub(&self, other: &Vector) -> Result<Vector, PolytopeError> {
        self.zip_with(other, Scalar::checked_sub)
    }

    fn zip_with<F>(&self, other: &Vector, f: F) -> Result<Vector, PolytopeError>
    where
        F: Fn(&Scalar, &Scalar) -> Result<Scalar, PolytopeError>,
    {
        self.check_dim(other)?;
        let coords = self
            .0
            .iter()
            .zip(&other.0)
            .map(|(x, y)| f(x, y))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(coords))
    }

    pub fn to_dvector(&self) -> DVector<f64> {
        DVector::from_iterator(self.dim(), self.0.iter().map(Scalar::to_f64))
    }

    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.0.iter().map(Scalar::to_f64).collect()
    }

    /// Hashable identity; `None` if any coordinate is approximate.
    pub(crate) fn exact_key(&self) -> Option<Vec<ExactKey>> {
        self.0.iter().map(Scalar::exact_key).collect()
    }

    fn check_dim(&self, other: &Vector) -> Result<(), PolytopeError> {
        if self.dim() != other.dim() {
            return Err(PolytopeError::invalid(format!(
                "dimension mismatch: {} vs {}",
                self.dim(),
                other.dim()
            )));
        }
        Ok(())
    }
}

impl Index<usize> for Vector {
    type Output = Scalar;
    #[inline]
    fn index(&self, i: usize) -> &Scalar {
        &self.0[i]
    }
}

impl From<Vec<Scalar>> for Vector {
    #[inline]
    fn from(v: Vec<Scalar>) -> Self {
        Self(v)
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Domain;

    #[test]
    fn dot_and_norm() {
        let a = Vector::from_ints(&[1, 2, 3]);
        let b = Vector::from_ints(&[4, -5, 6]);
        assert_eq!(a.dot(&b).unwrap(), Scalar::int(12));
        assert_eq!(a.norm_squared().unwrap(), Scalar::int(14));
        assert_eq!(a.sum().unwrap(), Scalar::int(6));
        assert!(a.dot(&Vector::from_ints(&[1])).is_err());
    }

    #[test]
    fn sum_across_fields_is_an_error() {
        let (_, r2) = Domain::rational().adjoin_sqrt(2).unwrap();
        let (_, r5) = Domain::rational().adjoin_sqrt(5).unwrap();
        let v = Vector::new(vec![r2, r5]);
        assert_eq!(v.dot(&v).unwrap(), Scalar::int(7));
        assert!(v.sum().unwrap_err().is_domain_mismatch());
    }

    #[test]
    fn keys_only_for_exact_vectors() {
        assert!(Vector::from_ints(&[1, 0]).exact_key().is_some());
        let mixed = Vector::new(vec![Scalar::int(1), Scalar::Approx(0.5)]);
        assert!(mixed.exact_key().is_none());
        assert!(!mixed.is_exact());
    }

    #[test]
    fn display_lists_coordinates() {
        let v = Vector::new(vec![Scalar::ratio(1, 2), Scalar::int(-3)]);
        assert_eq!(v.to_string(), "(1/2, -3)");
        assert_eq!(v.to_dvector(), DVector::from_vec(vec![0.5, -3.0]));
    }
}
