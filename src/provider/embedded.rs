use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::provider::interface::Provider;
use include_dir::Dir;
use log::debug;
use std::path::{Path, PathBuf};

/// Provider over a resource tree compiled into the binary.
pub struct EmbeddedProvider<'a> {
    dir: &'a Dir<'a>,
    root: PathBuf,
}

impl<'a> EmbeddedProvider<'a> {
    /// Creates a provider that resolves every path under `root` inside `dir`.
    pub fn new<P: Into<PathBuf>>(dir: &'a Dir<'a>, root: P) -> Self {
        Self { dir, root: root.into() }
    }
}

impl Provider for EmbeddedProvider<'_> {
    fn get(&self, path: &Path) -> Result<Vec<u8>> {
        let full_path = self.root.join_confined(path)?;
        debug!("Reading embedded resource '{}'", full_path.display());

        self.dir
            .get_file(&full_path)
            .map(|file| file.contents().to_vec())
            .ok_or(Error::FileNotFound { path: full_path })
    }

    fn exists(&self, path: &Path) -> bool {
        self.root
            .join_confined(path)
            .map(|full_path| self.dir.get_file(full_path).is_some())
            .unwrap_or(false)
    }
}
