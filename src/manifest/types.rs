//! Typed representation of a template manifest.
//!
//! Decoding is purely structural: every field has a default, so a document
//! with missing fields still decodes and the validator reports what is wrong.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::{Path, PathBuf};

/// Metadata of a project template and the ordered steps that generate it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Manifest {
    pub name: String,
    pub author: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub steps: Vec<Step>,
    /// Directory, relative to the provider root, the manifest was loaded from.
    #[serde(skip)]
    pub namespace: PathBuf,
}

/// One unit of generation work: templated files to write and/or a shell script to run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Step {
    pub name: String,
    /// Optional steps only run when activated by name.
    pub optional: bool,
    pub files: Vec<File>,
    pub shell: String,
}

/// Mapping between a template source file and its rendered output path.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct File {
    pub path: String,
    pub output: String,
}

impl Manifest {
    pub fn namespace(&self) -> &Path {
        &self.namespace
    }

    pub fn with_namespace<P: Into<PathBuf>>(mut self, namespace: P) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Whether generating this manifest can execute shell commands.
    pub fn has_shell_steps(&self) -> bool {
        self.steps.iter().any(Step::has_shell)
    }

    /// Manifest metadata as exposed to templates under `Manifest`.
    pub fn to_context(&self) -> serde_json::Value {
        json!({
            "Name": self.name,
            "Author": self.author,
            "Version": self.version,
            "URL": self.url.clone().unwrap_or_default(),
            "Description": self.description.clone().unwrap_or_default(),
        })
    }
}

impl Step {
    pub fn has_shell(&self) -> bool {
        !self.shell.trim().is_empty()
    }
}
