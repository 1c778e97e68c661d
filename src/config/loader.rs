// src/config/loader.rs

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};

/// Load a configuration file from a given path and return the raw
/// `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** range-check any
/// values. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    load_with(&RealFileSystem, path.as_ref())
}

/// Same as [`load_from_path`], reading through an arbitrary [`FileSystem`].
pub fn load_with(fs: &dyn FileSystem, path: &Path) -> Result<RawConfigFile> {
    let contents = fs.read_to_string(path)?;
    let config = parse_str(&contents)?;
    debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

pub fn parse_str(contents: &str) -> Result<RawConfigFile> {
    Ok(toml::from_str(contents)?)
}

/// Load a configuration file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(path)?;
    ConfigFile::try_from(raw_config)
}

/// Config file picked up when `--config` is not given: `Dagforge.toml` in
/// the current working directory, if it exists.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Dagforge.toml")
}
