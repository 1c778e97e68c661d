// src/errors.rs

//! Crate-wide error type.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DagError {
    /// Generator parameters out of range (`p` outside `[0, 1]`, too many
    /// vertices, zero-sized canvas, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The visualization backend could not draw or encode the image.
    #[error("Render error: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Report parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl DagError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        DagError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        DagError::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DagError>;
