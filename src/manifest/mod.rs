//! Template manifests: data model, loading and validation.

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{find_manifest, load, load_from_dir, parse_manifest, ManifestFormat};
pub use types::{File, Manifest, Step};
pub use validation::{Scope, ValidationErrors, Violation};
