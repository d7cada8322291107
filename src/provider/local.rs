use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::provider::interface::Provider;
use log::debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Provider over a directory on the real filesystem.
pub struct FsProvider {
    root: PathBuf,
}

impl FsProvider {
    /// Creates a provider rooted at `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

impl Provider for FsProvider {
    fn get(&self, path: &Path) -> Result<Vec<u8>> {
        let full_path = self.root.join_confined(path)?;
        debug!("Reading '{}'", full_path.display());

        std::fs::read(&full_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::FileNotFound { path: full_path },
            ErrorKind::PermissionDenied => Error::PermissionDenied { path: full_path },
            _ => Error::IoError(e),
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.root.join_confined(path).map(|full_path| full_path.is_file()).unwrap_or(false)
    }
}
