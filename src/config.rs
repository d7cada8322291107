//! Parameters of a single generation run.

use crate::manifest::Manifest;
use log::debug;
use serde_json::json;
use std::path::PathBuf;

/// Everything a template can be rendered against.
///
/// A `Config` is filled in during setup and only read while generating.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Directory the project is generated into
    pub working_directory: PathBuf,
    pub project_author: String,
    pub project_name: String,
    /// Package or module name, defaults to the project name
    pub project_package: String,
    /// Names of optional steps to run
    pub optional_steps: Vec<String>,
    /// Manifest being generated, set once loaded
    pub manifest: Option<Manifest>,
}

impl Config {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(working_directory: P, project_name: S) -> Self {
        Self {
            working_directory: working_directory.into(),
            project_name: project_name.into(),
            ..Default::default()
        }
    }

    pub fn with_author<S: Into<String>>(mut self, author: S) -> Self {
        self.project_author = author.into();
        self
    }

    pub fn with_package<S: Into<String>>(mut self, package: S) -> Self {
        self.project_package = package.into();
        self
    }

    pub fn with_optional_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_steps = steps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_manifest(mut self, manifest: Manifest) -> Self {
        self.manifest = Some(manifest);
        self
    }

    /// Fills in the values the user left empty.
    ///
    /// The package falls back to the project name and the author to `default_author`.
    pub fn with_defaults(mut self, default_author: &str) -> Self {
        if self.project_package.is_empty() {
            debug!(
                "Project package is not provided, using project name '{}'",
                self.project_name
            );
            self.project_package = self.project_name.clone();
        }
        if self.project_author.is_empty() {
            debug!("Project author is not provided, using '{default_author}'");
            self.project_author = default_author.to_string();
        }
        self
    }

    /// Template context of this run.
    ///
    /// Only values held by the config are exposed, so identical configs
    /// always render identical output.
    pub fn to_context(&self) -> serde_json::Value {
        json!({
            "WorkingDirectory": self.working_directory.to_string_lossy(),
            "ProjectAuthor": self.project_author,
            "ProjectName": self.project_name,
            "ProjectPackage": self.project_package,
            "OptionalSteps": self.optional_steps,
            "Manifest": self
                .manifest
                .as_ref()
                .map(Manifest::to_context)
                .unwrap_or_else(|| Manifest::default().to_context()),
        })
    }
}

/// Default project author taken from the environment.
pub fn default_author() -> String {
    crate::constants::AUTHOR_ENV_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|value| !value.is_empty()))
        .unwrap_or_default()
}
