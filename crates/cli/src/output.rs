//! JSON shapes written by `build` and printed by `project`.

use anyhow::{bail, Context, Result};
use polycat::{Polytope, Scalar, Vector};
use serde::Serialize;

/// One point: exact coordinates as strings (absent in `RDF`) plus `f64`s.
#[derive(Debug, Serialize)]
pub struct PointOut {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<Vec<String>>,
    pub approx: Vec<f64>,
}

impl From<&Vector> for PointOut {
    fn from(v: &Vector) -> Self {
        Self {
            exact: v.is_exact().then(|| v.iter().map(Scalar::to_string).collect()),
            approx: v.to_f64_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PolytopeOut {
    pub name: String,
    pub domain: String,
    pub backend: String,
    pub ambient_dim: usize,
    pub n_vertices: usize,
    pub vertices: Vec<PointOut>,
}

impl PolytopeOut {
    pub fn new(name: &str, p: &Polytope) -> Self {
        Self {
            name: name.to_string(),
            domain: p.domain().to_string(),
            backend: p.backend().to_string(),
            ambient_dim: p.ambient_dim(),
            n_vertices: p.n_vertices(),
            vertices: p.vertices().iter().map(PointOut::from).collect(),
        }
    }
}

/// Parse `2,-1,1/2,3` into a vector; any decimal point or exponent makes the
/// whole point approximate.
pub fn parse_point(s: &str) -> Result<Vector> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.iter().any(|p| p.is_empty()) {
        bail!("empty coordinate in `{s}`");
    }
    let approximate = parts.iter().any(|p| p.contains(['.', 'e', 'E']));
    if approximate {
        let xs = parts
            .iter()
            .map(|p| p.parse::<f64>().with_context(|| format!("bad coordinate `{p}`")))
            .collect::<Result<Vec<_>>>()?;
        return Ok(Vector::from_f64(&xs));
    }
    let xs = parts
        .iter()
        .map(|p| parse_ratio(p))
        .collect::<Result<Vec<_>>>()?;
    Ok(Vector::new(xs))
}

fn parse_ratio(p: &str) -> Result<Scalar> {
    let (num, den) = match p.split_once('/') {
        Some((n, d)) => (n.trim(), d.trim()),
        None => (p, "1"),
    };
    let num: i64 = num.parse().with_context(|| format!("bad numerator in `{p}`"))?;
    let den: i64 = den.parse().with_context(|| format!("bad denominator in `{p}`"))?;
    if den == 0 {
        bail!("zero denominator in `{p}`");
    }
    Ok(Scalar::ratio(num, den))
}

/// clap adapter for `--point` / `--gen`.
pub fn point_arg(s: &str) -> Result<Vector, String> {
    parse_point(s).map_err(|e| format!("{e:#}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_parse_exact_or_approximate() {
        let v = parse_point("2, -1, 1/2").unwrap();
        assert_eq!(v, Vector::new(vec![Scalar::int(2), Scalar::int(-1), Scalar::ratio(1, 2)]));
        let w = parse_point("0.5,1").unwrap();
        assert!(!w.is_exact());
        assert_eq!(w.to_f64_vec(), vec![0.5, 1.0]);
        assert!(parse_point("1,,2").is_err());
        assert!(parse_point("1/0").is_err());
        assert!(point_arg("x").unwrap_err().contains("bad numerator"));
    }

    #[test]
    fn exact_strings_only_for_exact_points() {
        let out = PointOut::from(&Vector::new(vec![Scalar::ratio(-3, 2)]));
        assert_eq!(out.exact, Some(vec!["-3/2".to_string()]));
        let json = serde_json::to_value(PointOut::from(&Vector::from_f64(&[1.5]))).unwrap();
        assert!(json.get("exact").is_none());
        assert_eq!(json["approx"][0], 1.5);
    }
}
