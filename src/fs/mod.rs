// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::errors::{DagError, Result};

pub mod mock;

/// Abstract filesystem interface used for reading config and writing reports.
pub trait FileSystem: Send + Sync + Debug {
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Create (or truncate) `path` and write `contents` to it. Missing parent
    /// directories are created.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| DagError::io(path, e))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| DagError::io(parent, e))?;
            }
        }
        // The handle is dropped (and closed) on every return path.
        let mut file = fs::File::create(path).map_err(|e| DagError::io(path, e))?;
        file.write_all(contents).map_err(|e| DagError::io(path, e))?;
        file.flush().map_err(|e| DagError::io(path, e))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_fs_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/report.txt");

        RealFileSystem.write(&path, b"Edges:\n").unwrap();

        assert!(RealFileSystem.exists(&path));
        assert_eq!(RealFileSystem.read_to_string(&path).unwrap(), "Edges:\n");
    }

    #[test]
    fn real_fs_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a file for writing.
        let err = RealFileSystem.write(dir.path(), b"x").unwrap_err();
        match err {
            DagError::Io { path, .. } => assert_eq!(path, dir.path()),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
