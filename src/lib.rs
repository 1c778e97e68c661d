// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod types;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_with;
use crate::config::{ConfigFile, RawConfigFile, default_config_path};
use crate::fs::{FileSystem, RealFileSystem};
use crate::report::{fingerprint, render_text_report};

pub use crate::dag::Dag;
pub use crate::errors::DagError;
pub use crate::pipeline::{
    GeneratedDag, Generator, build_dag, generate_dag, seeded_rng, write_reports,
};
pub use crate::types::{NodeAttrs, NodeId};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and CLI overrides
/// - RNG seeding
/// - the generation pipeline
/// - the run summary on stdout
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = resolve_config(&args)?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    let mut rng = seeded_rng(cfg.generator.seed);
    let generator = Generator::default().with_render_options(cfg.render_options());
    let generated = generator.generate(
        cfg.generator.vertices,
        cfg.generator.probability,
        &cfg.output.text,
        &cfg.output.image,
        &mut rng,
    )?;

    info!(
        text = %cfg.output.text.display(),
        image = %cfg.output.image.display(),
        "generation complete"
    );
    print_summary(&cfg, &generated);
    Ok(())
}

/// Build the effective configuration from the config file (if any) and the
/// CLI flags, which take precedence.
pub fn resolve_config(args: &CliArgs) -> errors::Result<ConfigFile> {
    resolve_config_with(&RealFileSystem, args)
}

/// [`resolve_config`] against an arbitrary [`FileSystem`].
///
/// An explicit `--config` path must exist; the default `Dagforge.toml` is only
/// read when present.
pub fn resolve_config_with(fs: &dyn FileSystem, args: &CliArgs) -> errors::Result<ConfigFile> {
    let mut raw = match &args.config {
        Some(path) => load_with(fs, path)?,
        None => {
            let path = default_config_path();
            if fs.exists(&path) {
                load_with(fs, &path)?
            } else {
                debug!("no config file found, using defaults");
                RawConfigFile::default()
            }
        }
    };

    apply_cli_overrides(&mut raw, args);
    ConfigFile::try_from(raw)
}

fn apply_cli_overrides(raw: &mut RawConfigFile, args: &CliArgs) {
    if let Some(vertices) = args.vertices {
        raw.generator.vertices = vertices;
    }
    if let Some(probability) = args.probability {
        raw.generator.probability = probability;
    }
    if let Some(seed) = args.seed {
        raw.generator.seed = Some(seed);
    }
    if let Some(ref text) = args.output {
        raw.output.text = text.clone();
    }
    if let Some(ref image) = args.image {
        raw.output.image = image.clone();
    }
}

/// Simple dry-run output: print the resolved parameters.
fn print_dry_run(cfg: &ConfigFile) {
    println!("dagforge dry-run");
    println!("  generator.vertices = {}", cfg.generator.vertices);
    println!("  generator.probability = {}", cfg.generator.probability);
    match cfg.generator.seed {
        Some(seed) => println!("  generator.seed = {seed}"),
        None => println!("  generator.seed = (entropy)"),
    }
    println!("  output.text = {}", cfg.output.text.display());
    println!("  output.image = {}", cfg.output.image.display());
    println!(
        "  render = {}x{}, {} iterations, layout_seed {}",
        cfg.render.width, cfg.render.height, cfg.render.iterations, cfg.render.layout_seed
    );

    debug!("dry-run complete (nothing generated)");
}

fn print_summary(cfg: &ConfigFile, generated: &GeneratedDag) {
    let report = render_text_report(&generated.dag, &generated.frontier);
    let describe = |id: Option<NodeId>| id.map_or_else(|| "none".to_string(), |id| id.to_string());

    println!(
        "generated DAG: {} nodes, {} edges",
        generated.dag.node_count(),
        generated.dag.edge_count()
    );
    println!("  vertex order: {:?}", generated.ranking.order());
    println!(
        "  q draws: d=0 -> {}, d=1 -> {}",
        generated.quality.d0, generated.quality.d1
    );
    println!("  dummy source: {}", describe(generated.dummies.source));
    println!("  dummy sink: {}", describe(generated.dummies.sink));
    println!("  report: {} ({})", cfg.output.text.display(), fingerprint(&report));
    println!("  image: {}", cfg.output.image.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFileSystem;
    use std::path::PathBuf;

    #[test]
    fn defaults_without_config_file() {
        let cfg = resolve_config_with(&MockFileSystem::new(), &CliArgs::default()).unwrap();
        assert_eq!(cfg.generator.vertices, 5);
        assert_eq!(cfg.generator.probability, 0.3);
        assert_eq!(cfg.output.text, PathBuf::from("dag_info.txt"));
    }

    #[test]
    fn cli_flags_override_config_file() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "Dagforge.toml",
            "[generator]\nvertices = 9\nprobability = 0.5\nseed = 1\n[output]\ntext = \"a.txt\"\n",
        );
        let args = CliArgs {
            probability: Some(0.1),
            image: Some(PathBuf::from("b.png")),
            ..CliArgs::default()
        };

        let cfg = resolve_config_with(&fs, &args).unwrap();
        assert_eq!(cfg.generator.vertices, 9);
        assert_eq!(cfg.generator.probability, 0.1);
        assert_eq!(cfg.generator.seed, Some(1));
        assert_eq!(cfg.output.text, PathBuf::from("a.txt"));
        assert_eq!(cfg.output.image, PathBuf::from("b.png"));
    }

    #[test]
    fn explicit_config_must_exist() {
        let args = CliArgs {
            config: Some(PathBuf::from("missing.toml")),
            ..CliArgs::default()
        };
        let err = resolve_config_with(&MockFileSystem::new(), &args).unwrap_err();
        assert!(matches!(err, DagError::Io { .. }));
    }

    #[test]
    fn invalid_override_is_a_config_error() {
        let args = CliArgs {
            probability: Some(3.0),
            ..CliArgs::default()
        };
        let err = resolve_config_with(&MockFileSystem::new(), &args).unwrap_err();
        assert!(matches!(err, DagError::ConfigError(_)));
    }
}
