//! Reading manifest documents through a [`Provider`].

use crate::constants::MANIFEST_FILENAMES;
use crate::error::{Error, Result};
use crate::manifest::types::Manifest;
use crate::provider::Provider;
use log::debug;
use std::path::{Path, PathBuf};

/// Serialization format of a manifest document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Toml,
    Yaml,
    Json,
}

impl ManifestFormat {
    /// Picks the format from the file extension. Anything unknown is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => ManifestFormat::Yaml,
            Some("json") => ManifestFormat::Json,
            _ => ManifestFormat::Toml,
        }
    }
}

/// Decodes a manifest document without validating it.
///
/// # Arguments
/// * `path` - Path of the document, used for error messages
/// * `bytes` - Raw document contents
/// * `format` - Serialization format
pub fn parse_manifest(path: &Path, bytes: &[u8], format: ManifestFormat) -> Result<Manifest> {
    debug!("Parsing manifest '{}' as {format:?}", path.display());

    let parse_error =
        |reason: String| Error::ManifestParseError { path: path.to_path_buf(), reason };

    let content = std::str::from_utf8(bytes).map_err(|e| parse_error(e.to_string()))?;

    match format {
        ManifestFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
        ManifestFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))
        }
        ManifestFormat::Json => {
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))
        }
    }
}

/// Fetches, decodes and validates the manifest at `path`.
///
/// The directory containing `path` becomes the manifest's namespace.
pub fn load<P: Provider + ?Sized>(provider: &P, path: &Path) -> Result<Manifest> {
    debug!("Loading manifest '{}'", path.display());

    let bytes = provider.get(path)?;
    let manifest = parse_manifest(path, &bytes, ManifestFormat::from_path(path))?;
    manifest.validate()?;

    let namespace = path.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(manifest.with_namespace(namespace))
}

/// Returns the path of the first supported manifest file found in `dir`.
pub fn find_manifest<P: Provider + ?Sized>(provider: &P, dir: &Path) -> Result<PathBuf> {
    MANIFEST_FILENAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| provider.exists(candidate))
        .ok_or_else(|| Error::FileNotFound { path: dir.join(MANIFEST_FILENAMES[0]) })
}

/// Finds and loads the manifest stored in `dir`.
pub fn load_from_dir<P: Provider + ?Sized>(provider: &P, dir: &Path) -> Result<Manifest> {
    let path = find_manifest(provider, dir)?;
    load(provider, &path)
}
