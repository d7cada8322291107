//! Discovery of the templates available in a resource tree.
//!
//! Every directory that directly contains a manifest file is a template; its
//! identifier is the directory path relative to the tree's root, with `/`
//! separators. A manifest directly in the root is listed as `.`.
//! Identifiers are returned in traversal order.

use crate::constants::MANIFEST_FILENAMES;
use crate::error::{Error, Result};
use include_dir::Dir;
use log::debug;
use std::path::{Component, Path};
use walkdir::WalkDir;

/// Identifier of a template whose manifest sits in the traversal root.
pub const ROOT_IDENTIFIER: &str = ".";

fn is_manifest(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| MANIFEST_FILENAMES.contains(&name))
}

fn to_identifier(relative: &Path) -> String {
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        ROOT_IDENTIFIER.to_string()
    } else {
        parts.join("/")
    }
}

fn register(manifests: &mut Vec<String>, relative: &Path) {
    let id = to_identifier(relative);
    if !manifests.contains(&id) {
        debug!("Manifest detected, registered '{id}' as template");
        manifests.push(id);
    }
}

/// Lists templates inside `root` of an embedded resource tree.
///
/// # Arguments
/// * `dir` - Embedded resource tree
/// * `root` - Directory inside `dir` to search, empty for the whole tree
///
/// # Returns
/// * `Result<Vec<String>>` - Template identifiers relative to `root`,
///   `Error::FileNotFound` if `root` does not exist
pub fn collect_embedded_manifests(dir: &Dir<'_>, root: &Path) -> Result<Vec<String>> {
    let start = if root.as_os_str().is_empty() {
        dir
    } else {
        dir.get_dir(root).ok_or_else(|| Error::FileNotFound { path: root.to_path_buf() })?
    };

    debug!("Reading embedded directory '{}'", root.display());
    let mut manifests = Vec::new();
    walk_embedded(start, root, &mut manifests);
    Ok(manifests)
}

fn walk_embedded(dir: &Dir<'_>, root: &Path, manifests: &mut Vec<String>) {
    if dir.files().any(|file| is_manifest(file.path())) {
        let relative = dir.path().strip_prefix(root).unwrap_or(dir.path());
        register(manifests, relative);
    }

    for child in dir.dirs() {
        walk_embedded(child, root, manifests);
    }
}

/// Lists templates inside a directory on the real filesystem.
///
/// # Returns
/// * `Result<Vec<String>>` - Template identifiers relative to `root`
pub fn collect_manifests(root: &Path) -> Result<Vec<String>> {
    debug!("Reading directory '{}'", root.display());
    if !root.is_dir() {
        return Err(Error::FileNotFound { path: root.to_path_buf() });
    }

    let mut manifests = Vec::new();
    for dir_entry in WalkDir::new(root) {
        let dir_entry = dir_entry.map_err(std::io::Error::from)?;
        if !dir_entry.file_type().is_file() || !is_manifest(dir_entry.path()) {
            continue;
        }

        if let Some(parent) = dir_entry.path().parent() {
            let relative = parent.strip_prefix(root).unwrap_or(parent);
            register(&mut manifests, relative);
        }
    }

    Ok(manifests)
}
