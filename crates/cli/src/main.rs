use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use polycat::field::Exactness;
use polycat::library::{build_named, RecipeArgs, RecipeCfg, NAMES};
use polycat::project::project_points;
use polycat::{Domain, Vector};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod output;
mod provenance;

use output::{point_arg, PointOut, PolytopeOut};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Build catalogue polytopes and write their vertex lists")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print every recipe name
    List,
    /// Build one recipe; write vertices as JSON plus a provenance sidecar
    Build(BuildArgs),
    /// Project zero-sum points of R^d isometrically into R^(d-1)
    Project {
        /// Comma-separated coordinates, e.g. `2,-1,3,2` or `0.5,-0.5`
        #[arg(long = "point", required = true, value_parser = point_arg)]
        points: Vec<Vector>,
        /// Domain of the projection (`QQ`, `RDF`, `sqrtN`)
        #[arg(long, default_value = "RDF")]
        base: Domain,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug)]
struct BuildArgs {
    #[arg(long)]
    name: String,
    /// Approximate (`RDF`) coordinates instead of exact ones
    #[arg(long)]
    approx: bool,
    /// Explicit coordinate domain; overrides `--approx`
    #[arg(long)]
    base: Option<Domain>,
    /// Hull backend name
    #[arg(long)]
    backend: Option<String>,
    #[arg(long)]
    n: Option<usize>,
    #[arg(long)]
    k: Option<usize>,
    #[arg(long)]
    dim: Option<usize>,
    /// Project zero-sum families one dimension down
    #[arg(long)]
    project: bool,
    /// Parallelotope generator (repeatable)
    #[arg(long = "gen", value_parser = point_arg)]
    generators: Vec<Vector>,
    /// Output file; stdout when absent (and then no sidecar)
    #[arg(long)]
    out: Option<PathBuf>,
}

impl BuildArgs {
    fn cfg(&self) -> RecipeCfg {
        RecipeCfg {
            exactness: Exactness::from_flag(!self.approx),
            base: self.base,
            backend: self.backend.clone(),
        }
    }

    fn recipe_args(&self) -> RecipeArgs {
        RecipeArgs {
            n: self.n,
            k: self.k,
            dim: self.dim,
            project: self.project,
            generators: self.generators.clone(),
        }
    }

    fn params(&self) -> serde_json::Value {
        json!({
            "approx": self.approx,
            "base": self.base.map(|b| b.to_string()),
            "backend": self.backend,
            "n": self.n,
            "k": self.k,
            "dim": self.dim,
            "project": self.project,
            "generators": self.generators.iter().map(|g| g.to_string()).collect::<Vec<_>>(),
        })
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::List => list(),
        Action::Build(args) => build(&args).map(|_| ()),
        Action::Project { points, base } => project(&points, base),
        Action::Report => report(),
    }
}

fn list() -> Result<()> {
    for name in NAMES {
        println!("{name}");
    }
    Ok(())
}

/// Returns the sidecar path when an output file was written.
fn build(args: &BuildArgs) -> Result<Option<PathBuf>> {
    tracing::info!(name = %args.name, approx = args.approx, base = ?args.base, "build");
    let polytope = build_named(&args.name, &args.recipe_args(), &args.cfg())
        .with_context(|| format!("building `{}`", args.name))?;
    tracing::info!(
        n_vertices = polytope.n_vertices(),
        ambient_dim = polytope.ambient_dim(),
        domain = %polytope.domain(),
        "built"
    );
    let doc = serde_json::to_vec_pretty(&PolytopeOut::new(&args.name, &polytope))?;
    let Some(out) = &args.out else {
        println!("{}", String::from_utf8_lossy(&doc));
        return Ok(None);
    };
    write_artifact(out, &doc)?;
    let sidecar = provenance::Sidecar::new(args.name.clone(), args.params()).write_beside(out)?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote");
    Ok(Some(sidecar))
}

fn write_artifact(out: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, bytes).with_context(|| format!("writing {}", out.display()))
}

fn projected_json(points: &[Vector], base: Domain) -> Result<serde_json::Value> {
    let projected = project_points(points, base)?;
    let out: Vec<PointOut> = projected.iter().map(PointOut::from).collect();
    Ok(json!({ "domain": base.to_string(), "points": out }))
}

fn project(points: &[Vector], base: Domain) -> Result<()> {
    tracing::info!(n_points = points.len(), %base, "project");
    let doc = projected_json(points, base)?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::code_rev(),
        "polycat": polycat::VERSION,
        "recipes": NAMES.len(),
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> BuildArgs {
        let mut argv = vec!["cli", "build"];
        argv.extend_from_slice(args);
        match Cmd::try_parse_from(argv).unwrap().action {
            Action::Build(b) => b,
            _ => panic!("expected build"),
        }
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
    }

    #[test]
    fn build_writes_vertices_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/ico.json");
        let args = parse(&["--name", "icosahedron", "--out", out.to_str().unwrap()]);
        let sidecar = build(&args).unwrap().unwrap();
        assert_eq!(sidecar, dir.path().join("nested/ico.provenance.json"));

        let doc = read_json(&out);
        assert_eq!(doc["domain"], "QQ[sqrt5]");
        assert_eq!(doc["n_vertices"], 12);
        assert_eq!(doc["vertices"].as_array().unwrap().len(), 12);
        assert!(doc["vertices"][0]["exact"].is_array());

        let prov = read_json(&sidecar);
        assert_eq!(prov["recipe"], "icosahedron");
        assert_eq!(prov["params"]["approx"], false);
    }

    #[test]
    fn approx_flag_and_family_args() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("perm.json");
        let args = parse(&[
            "--name",
            "permutahedron",
            "--n",
            "4",
            "--project",
            "--approx",
            "--out",
            out.to_str().unwrap(),
        ]);
        build(&args).unwrap();
        let doc = read_json(&out);
        assert_eq!(doc["domain"], "RDF");
        assert_eq!(doc["ambient_dim"], 3);
        assert!(doc["vertices"][0].get("exact").is_none());
    }

    #[test]
    fn generators_and_base_parse() {
        let args = parse(&[
            "--name",
            "parallelotope",
            "--gen",
            "1,0",
            "--gen",
            "1/2,1",
            "--base",
            "sqrt2",
        ]);
        assert_eq!(args.generators.len(), 2);
        assert_eq!(args.base, Some(Domain::quadratic(2).unwrap()));
        let cfg = args.cfg();
        assert_eq!(cfg.exactness, Exactness::Exact);
    }

    #[test]
    fn failures_carry_context() {
        let args = parse(&["--name", "icosahedron", "--base", "QQ"]);
        let err = build(&args).unwrap_err();
        assert!(format!("{err:#}").contains("domain mismatch"));
        let args = parse(&["--name", "nonesuch"]);
        assert!(build(&args).unwrap_err().to_string().contains("nonesuch"));
    }

    #[test]
    fn project_emits_one_dimension_less() {
        let pts = vec![Vector::from_ints(&[2, -1, 3, -4])];
        let doc = projected_json(&pts, Domain::Approximate).unwrap();
        assert_eq!(doc["points"][0]["approx"].as_array().unwrap().len(), 3);
        assert!(projected_json(&pts, Domain::Rational).is_err());
    }

    #[test]
    fn project_requires_a_point() {
        assert!(Cmd::try_parse_from(["cli", "project"]).is_err());
        assert!(Cmd::try_parse_from(["cli", "project", "--point", "1,-1"]).is_ok());
    }
}
