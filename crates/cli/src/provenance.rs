//! `<name>.provenance.json` sidecars recording how a catalogue artifact was made.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// Sidecar document; field order is the JSON key order.
#[derive(Serialize)]
pub struct Sidecar {
    code_rev: String,
    polycat: &'static str,
    callsite: Callsite,
    recipe: String,
    params: Value,
    outputs: Vec<String>,
}

impl Sidecar {
    /// The callsite recorded is the caller of `new`.
    #[track_caller]
    pub fn new(recipe: impl Into<String>, params: Value) -> Self {
        let at = Location::caller();
        Self {
            code_rev: code_rev(),
            polycat: polycat::VERSION,
            callsite: Callsite {
                file: at.file(),
                line: at.line(),
            },
            recipe: recipe.into(),
            params,
            outputs: Vec::new(),
        }
    }

    /// Record `artifact` as the output and write the sidecar beside it.
    pub fn write_beside(mut self, artifact: &Path) -> Result<PathBuf> {
        self.outputs = vec![artifact.to_string_lossy().into_owned()];
        let path = sidecar_path(artifact);
        let bytes = serde_json::to_vec_pretty(&self)?;
        std::fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `dir/ico.json` -> `dir/ico.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Build-time `GIT_COMMIT`, runtime `GIT_COMMIT`, `git rev-parse HEAD`, or `"unknown"`.
pub fn code_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    from_env
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status.success().then_some(())?;
            let rev = String::from_utf8(out.stdout).ok()?;
            Some(rev.trim().to_owned())
        })
        .unwrap_or_else(|| "unknown".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_replaces_the_extension() {
        let derived = sidecar_path(Path::new("/tmp/out/icosahedron.json"));
        assert_eq!(derived, Path::new("/tmp/out/icosahedron.provenance.json"));
        assert_eq!(sidecar_path(Path::new("cube")), Path::new("cube.provenance.json"));
    }

    #[test]
    fn sidecar_records_recipe_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("cube.json");
        std::fs::write(&artifact, "{}").unwrap();
        let path = Sidecar::new("cube", json!({"approx": false}))
            .write_beside(&artifact)
            .unwrap();
        assert_eq!(path, dir.path().join("cube.provenance.json"));
        let parsed: Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["recipe"], "cube");
        assert_eq!(parsed["params"]["approx"], false);
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["polycat"], polycat::VERSION);
        assert!(parsed["callsite"]["file"].as_str().unwrap().ends_with("provenance.rs"));
        assert!(!parsed["code_rev"].as_str().unwrap().is_empty());
    }
}
