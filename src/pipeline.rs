// src/pipeline.rs

//! End-to-end generation: sample, orient, augment, report.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, info_span};

use crate::dag::{
    Dag, DummyNodes, Frontier, QualityDraws, Ranking, add_dummy_nodes, identify_frontier, orient,
    sample_undirected,
};
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};
use crate::report::{RenderOptions, write_image, write_text_report};

/// A generated, augmented DAG together with everything needed to explain it.
#[derive(Debug, Clone)]
pub struct GeneratedDag {
    /// The DAG including any dummy nodes.
    pub dag: Dag,
    /// Vertex order used to orient the edges.
    pub ranking: Ranking,
    /// Session-wide `q` values for each class.
    pub quality: QualityDraws,
    /// Frontier sets computed before the dummies were attached.
    pub frontier: Frontier,
    pub dummies: DummyNodes,
}

/// RNG for a generation run: deterministic when `seed` is given.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Sample, orient and augment a DAG without writing anything.
pub fn build_dag<R: Rng>(num_vertices: usize, probability: f64, rng: &mut R) -> Result<GeneratedDag> {
    let graph = sample_undirected(num_vertices, probability, rng)?;
    let oriented = orient(&graph, rng);
    let mut dag = oriented.dag;

    let frontier = identify_frontier(&dag);
    let dummies = add_dummy_nodes(&mut dag, &frontier);

    info!(
        nodes = dag.node_count(),
        edges = dag.edge_count(),
        sources = frontier.no_incoming.len(),
        sinks = frontier.no_outgoing.len(),
        "built DAG"
    );

    Ok(GeneratedDag {
        dag,
        ranking: oriented.ranking,
        quality: oriented.quality,
        frontier,
        dummies,
    })
}

/// Write the text report, then the image, for an already built DAG.
///
/// Stops at the first failure; the DAG itself is unaffected either way.
pub fn write_reports(
    fs: &dyn FileSystem,
    generated: &GeneratedDag,
    text_path: &Path,
    image_path: &Path,
    render: &RenderOptions,
) -> Result<()> {
    write_text_report(fs, text_path, &generated.dag, &generated.frontier)?;
    write_image(fs, image_path, &generated.dag, render)?;
    Ok(())
}

/// Generator bound to a filesystem and render settings.
#[derive(Debug)]
pub struct Generator {
    fs: Box<dyn FileSystem>,
    render: RenderOptions,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(Box::new(RealFileSystem))
    }
}

impl Generator {
    pub fn new(fs: Box<dyn FileSystem>) -> Self {
        Self {
            fs,
            render: RenderOptions::default(),
        }
    }

    pub fn with_render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    pub fn render_options(&self) -> &RenderOptions {
        &self.render
    }

    /// Run the full pipeline and return the augmented DAG.
    ///
    /// A reporting failure is returned as an error; use [`build_dag`] and
    /// [`write_reports`] separately to keep the DAG in that case.
    pub fn generate<R: Rng>(
        &self,
        num_vertices: usize,
        probability: f64,
        output_file_path: impl AsRef<Path>,
        image_file_path: impl AsRef<Path>,
        rng: &mut R,
    ) -> Result<GeneratedDag> {
        let span = info_span!("generate", num_vertices, probability);
        let _guard = span.enter();

        let generated = build_dag(num_vertices, probability, rng)?;
        write_reports(
            self.fs.as_ref(),
            &generated,
            output_file_path.as_ref(),
            image_file_path.as_ref(),
            &self.render,
        )?;
        Ok(generated)
    }
}

/// Generate a DAG with `num_vertices` vertices and edge probability
/// `probability`, write its text report to `output_file_path` and its PNG
/// rendering to `image_file_path`, and return it.
pub fn generate_dag<R: Rng>(
    num_vertices: usize,
    probability: f64,
    output_file_path: impl AsRef<Path>,
    image_file_path: impl AsRef<Path>,
    rng: &mut R,
) -> Result<GeneratedDag> {
    Generator::default().generate(num_vertices, probability, output_file_path, image_file_path, rng)
}
