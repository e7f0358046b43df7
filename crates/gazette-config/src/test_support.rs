//! Temporary archive trees for gazette-config unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A temporary directory laid out like a gazette archive.
pub struct TestDir {
    /// Owns the tree; removed on drop.
    root: TempDir,
}

impl TestDir {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Returns the tree root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates `rel` (and its parents) and returns its path.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.root.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes `.gazette.toml` into `rel` (empty for the tree root) and returns its path.
    pub fn config(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir(rel).join(CONFIG_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }
}
