// src/fs/mock.rs

use super::FileSystem;
use crate::errors::{DagError, Result};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct MockState {
    files: HashMap<PathBuf, Vec<u8>>,
    failing: HashSet<PathBuf>,
}

/// In-memory filesystem for tests.
///
/// Clones share the same storage, so a test can hand one clone to the code
/// under test and inspect the written files through another.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    state: Arc<Mutex<MockState>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        self.lock()
            .files
            .insert(path.as_ref().to_path_buf(), content.into());
    }

    /// Make every later write to `path` fail with `PermissionDenied`.
    pub fn fail_writes_to(&self, path: impl AsRef<Path>) {
        self.lock().failing.insert(path.as_ref().to_path_buf());
    }

    /// Raw contents of a previously written file.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.lock().files.get(path.as_ref()).cloned()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.lock().files.keys().cloned().collect();
        paths.sort();
        paths
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let state = self.lock();
        match state.files.get(path) {
            Some(content) => String::from_utf8(content.clone()).map_err(|e| {
                DagError::io(path, io::Error::new(io::ErrorKind::InvalidData, e))
            }),
            None => Err(DagError::io(
                path,
                io::Error::new(io::ErrorKind::NotFound, "file not found"),
            )),
        }
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        let mut state = self.lock();
        if state.failing.contains(path) {
            return Err(DagError::io(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "write rejected by mock"),
            ));
        }
        state.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.lock().files.contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_storage() {
        let fs = MockFileSystem::new();
        let view = fs.clone();
        fs.write(Path::new("out/a.txt"), b"hello").unwrap();

        assert!(view.exists(Path::new("out/a.txt")));
        assert_eq!(view.read_to_string(Path::new("out/a.txt")).unwrap(), "hello");
        assert_eq!(view.paths(), vec![PathBuf::from("out/a.txt")]);
    }

    #[test]
    fn injected_failures_surface_as_io_errors() {
        let fs = MockFileSystem::new();
        fs.fail_writes_to("locked.png");

        let err = fs.write(Path::new("locked.png"), b"png").unwrap_err();
        assert!(matches!(err, DagError::Io { .. }));
        assert!(fs.file("locked.png").is_none());
    }

    #[test]
    fn missing_file_is_not_found() {
        let fs = MockFileSystem::new();
        match fs.read_to_string(Path::new("nope")) {
            Err(DagError::Io { source, .. }) => assert_eq!(source.kind(), io::ErrorKind::NotFound),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
