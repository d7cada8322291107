//! Templates compiled into the binary.

use crate::catalog::collect_embedded_manifests;
use crate::error::Result;
use crate::provider::EmbeddedProvider;
use include_dir::{include_dir, Dir};
use std::path::Path;

static BUNDLE: Dir = include_dir!("$CARGO_MANIFEST_DIR/resources/templates");

/// Provider over the bundled templates. Paths start with the template identifier.
pub fn provider() -> EmbeddedProvider<'static> {
    EmbeddedProvider::new(&BUNDLE, "")
}

/// Identifiers of every bundled template, in lexicographic order.
pub fn list_templates() -> Result<Vec<String>> {
    let mut templates = collect_embedded_manifests(&BUNDLE, Path::new(""))?;
    templates.sort();
    Ok(templates)
}
