//! Template sources and the providers that read their resources.

use crate::bundle;
use crate::error::{Error, Result};
use crate::manifest::find_manifest;
use log::debug;
use std::path::{Path, PathBuf};

pub mod embedded;
pub mod interface;
pub mod local;

pub use embedded::EmbeddedProvider;
pub use interface::Provider;
pub use local::FsProvider;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Identifier of a template bundled into the binary, e.g. `go/hello-world`
    Bundled(String),
    /// Path to a custom manifest file or a directory containing one
    FileSystem(PathBuf),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Bundled(id) => write!(f, "bundled template: '{id}'"),
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
        }
    }
}

impl TemplateSource {
    /// Builds a source from a command-line argument.
    ///
    /// # Arguments
    /// * `s` - Template identifier, or a path when `is_path` is set
    /// * `is_path` - Whether `s` points at a custom manifest on disk
    pub fn from_arg(s: &str, is_path: bool) -> Self {
        if is_path {
            TemplateSource::FileSystem(PathBuf::from(s))
        } else {
            TemplateSource::Bundled(s.to_string())
        }
    }

    /// Resolves the source into a provider and the manifest path inside it.
    pub fn open(&self) -> Result<(Box<dyn Provider>, PathBuf)> {
        debug!("Opening {self}");
        match self {
            TemplateSource::Bundled(id) => {
                let provider = bundle::provider();
                let manifest_path = find_manifest(&provider, Path::new(id))?;
                Ok((Box::new(provider), manifest_path))
            }
            TemplateSource::FileSystem(path) if path.is_dir() => {
                let provider = FsProvider::new(path);
                let manifest_path = find_manifest(&provider, Path::new(""))?;
                Ok((Box::new(provider), manifest_path))
            }
            TemplateSource::FileSystem(path) if path.is_file() => {
                let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                let file_name = path
                    .file_name()
                    .map(PathBuf::from)
                    .ok_or_else(|| Error::FileNotFound { path: path.clone() })?;
                Ok((Box::new(FsProvider::new(root)), file_name))
            }
            TemplateSource::FileSystem(path) => {
                Err(Error::FileNotFound { path: path.clone() })
            }
        }
    }
}
