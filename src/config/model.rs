// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::report::RenderOptions;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [generator]
/// vertices = 5
/// probability = 0.3
/// seed = 42
///
/// [output]
/// text = "dag_info.txt"
/// image = "dag.png"
///
/// [render]
/// width = 1000
/// height = 1000
/// ```
///
/// All sections are optional and have reasonable defaults. This is the
/// unvalidated form; it becomes a [`ConfigFile`] via `TryFrom`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub generator: GeneratorSection,

    #[serde(default)]
    pub output: OutputSection,

    #[serde(default)]
    pub render: RenderSection,
}

/// Validated configuration.
///
/// Only constructed through `ConfigFile::try_from(RawConfigFile)`, so the
/// values are known to be usable.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub generator: GeneratorSection,
    pub output: OutputSection,
    pub render: RenderSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        generator: GeneratorSection,
        output: OutputSection,
        render: RenderSection,
    ) -> Self {
        Self {
            generator,
            output,
            render,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::from(&self.render)
    }
}

/// `[generator]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSection {
    /// Number of vertices in the sampled graph (before dummies).
    #[serde(default = "default_vertices")]
    pub vertices: usize,

    /// Edge probability of the Erdos-Renyi sampler.
    #[serde(default = "default_probability")]
    pub probability: f64,

    /// RNG seed. Without one, each run draws fresh entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Upper bound accepted for `vertices`.
    #[serde(default = "default_max_vertices")]
    pub max_vertices: usize,
}

fn default_vertices() -> usize {
    5
}

fn default_probability() -> f64 {
    0.3
}

fn default_max_vertices() -> usize {
    10_000
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            vertices: default_vertices(),
            probability: default_probability(),
            seed: None,
            max_vertices: default_max_vertices(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Path of the text report.
    #[serde(default = "default_text_path")]
    pub text: PathBuf,

    /// Path of the PNG visualization.
    #[serde(default = "default_image_path")]
    pub image: PathBuf,
}

fn default_text_path() -> PathBuf {
    PathBuf::from("dag_info.txt")
}

fn default_image_path() -> PathBuf {
    PathBuf::from("dag.png")
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            text: default_text_path(),
            image: default_image_path(),
        }
    }
}

/// `[render]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderSection {
    #[serde(default = "default_canvas_size")]
    pub width: u32,

    #[serde(default = "default_canvas_size")]
    pub height: u32,

    /// Force-directed layout iterations.
    #[serde(default = "default_iterations")]
    pub iterations: usize,

    /// Seed for the initial layout positions.
    #[serde(default)]
    pub layout_seed: u64,
}

fn default_canvas_size() -> u32 {
    1000
}

fn default_iterations() -> usize {
    200
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
            iterations: default_iterations(),
            layout_seed: 0,
        }
    }
}

impl From<&RenderSection> for RenderOptions {
    fn from(section: &RenderSection) -> Self {
        RenderOptions {
            width: section.width,
            height: section.height,
            iterations: section.iterations,
            layout_seed: section.layout_seed,
        }
    }
}
