//! Scan roots and file jobs.

use crate::error::{Error, Result};

use std::path::{Path, PathBuf};

/// A validated root directory plus its recursion flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    root: PathBuf,
    recursive: bool,
}

impl ScanTarget {
    /// Creates a target, resolving `root` to an absolute path.
    ///
    /// Fails with [`Error::MissingRoot`] if nothing exists at `root` and with
    /// [`Error::NotADirectory`] if it is not a directory.
    pub fn new(root: impl AsRef<Path>, recursive: bool) -> Result<Self> {
        let root = std::path::absolute(root.as_ref())?;
        if !root.exists() {
            return Err(Error::MissingRoot(root));
        }
        if !root.is_dir() {
            return Err(Error::NotADirectory(root));
        }
        Ok(Self { root, recursive })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn recursive(&self) -> bool {
        self.recursive
    }
}

/// One file queued for extraction and download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileJob {
    path: PathBuf,
}

impl FileJob {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory downloads for this file are written to.
    pub fn target_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}
