// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{DagError, Result};

/// Smallest canvas edge that still fits a labelled node.
pub const MIN_CANVAS_SIZE: u32 = 64;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = DagError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.generator, raw.output, raw.render))
    }
}

/// Check a raw config without consuming it.
pub fn validate_config(cfg: &RawConfigFile) -> Result<()> {
    validate_generator(cfg)?;
    validate_output(cfg)?;
    validate_render(cfg)?;
    Ok(())
}

fn validate_generator(cfg: &RawConfigFile) -> Result<()> {
    let generator = &cfg.generator;

    if !(0.0..=1.0).contains(&generator.probability) {
        return Err(DagError::ConfigError(format!(
            "[generator].probability must be within [0, 1] (got {})",
            generator.probability
        )));
    }

    if generator.vertices > generator.max_vertices {
        return Err(DagError::ConfigError(format!(
            "[generator].vertices = {} exceeds max_vertices = {}",
            generator.vertices, generator.max_vertices
        )));
    }

    Ok(())
}

fn validate_output(cfg: &RawConfigFile) -> Result<()> {
    let output = &cfg.output;

    if output.text.as_os_str().is_empty() || output.image.as_os_str().is_empty() {
        return Err(DagError::ConfigError(
            "[output].text and [output].image must be non-empty paths".to_string(),
        ));
    }

    if output.text == output.image {
        return Err(DagError::ConfigError(format!(
            "[output].text and [output].image both point to {:?}",
            output.text
        )));
    }

    Ok(())
}

fn validate_render(cfg: &RawConfigFile) -> Result<()> {
    let render = &cfg.render;

    if render.width < MIN_CANVAS_SIZE || render.height < MIN_CANVAS_SIZE {
        return Err(DagError::ConfigError(format!(
            "[render] canvas must be at least {MIN_CANVAS_SIZE}x{MIN_CANVAS_SIZE} (got {}x{})",
            render.width, render.height
        )));
    }

    Ok(())
}
