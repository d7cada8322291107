//! Manifest validation.
//!
//! Validation never stops at the first problem: every rule is checked for the
//! manifest, each step and each file, and all violations are returned together.

use std::fmt;

use crate::{
    error::{Error, Result},
    manifest::types::{File, Manifest, Step},
    renderer::{get_template_engine, TemplateRenderer},
};

/// Where in the manifest a violation was found. Ordinals are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Manifest,
    Step { ordinal: usize, name: String },
    File { step_ordinal: usize, step_name: String, ordinal: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub scope: Scope,
    pub message: String,
}

/// Aggregate of every violation found in one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push<S: Into<String>>(&mut self, scope: &Scope, message: S) {
        self.0.push(Violation { scope: scope.clone(), message: message.into() });
    }

    fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::ValidationError(self))
        }
    }
}

fn describe_step(ordinal: usize, name: &str) -> String {
    if name.is_empty() {
        format!("step #{ordinal}")
    } else {
        format!("step #{ordinal} '{name}'")
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Manifest => write!(f, "manifest"),
            Scope::Step { ordinal, name } => write!(f, "{}", describe_step(*ordinal, name)),
            Scope::File { step_ordinal, step_name, ordinal } => {
                write!(f, "{}, file #{ordinal}", describe_step(*step_ordinal, step_name))
            }
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.scope, self.message)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.0.iter().map(|v| format!("  - {v}")).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

/// Walks a manifest and records every rule violation.
struct Validator<'a> {
    renderer: &'a dyn TemplateRenderer,
    errors: ValidationErrors,
}

impl<'a> Validator<'a> {
    fn new(renderer: &'a dyn TemplateRenderer) -> Self {
        Self { renderer, errors: ValidationErrors::default() }
    }

    fn check_template(&mut self, scope: &Scope, what: &str, template: &str) {
        if let Err(e) = self.renderer.check(what, template) {
            let reason = match e {
                Error::TemplateParseError { source, .. } => source.to_string(),
                other => other.to_string(),
            };
            self.errors.push(scope, format!("{what} is not a valid template: {reason}"));
        }
    }

    fn manifest(&mut self, manifest: &Manifest) {
        let scope = Scope::Manifest;

        if manifest.name.is_empty() {
            self.errors.push(&scope, "name is required");
        }
        if manifest.author.is_empty() {
            self.errors.push(&scope, "author is required");
        }
        if manifest.version.is_empty() {
            self.errors.push(&scope, "version is required");
        }
        if let Some(raw) = manifest.url.as_deref().filter(|u| !u.is_empty()) {
            if let Err(e) = url::Url::parse(raw) {
                self.errors.push(&scope, format!("url '{raw}' is not a valid URL: {e}"));
            }
        }
        if manifest.steps.is_empty() {
            self.errors.push(&scope, "at least one step is required");
        }

        for (i, step) in manifest.steps.iter().enumerate() {
            self.step(i + 1, step);
        }
    }

    fn step(&mut self, ordinal: usize, step: &Step) {
        let scope = Scope::Step { ordinal, name: step.name.clone() };

        if step.name.is_empty() {
            self.errors.push(&scope, "name is required");
        }
        if step.files.is_empty() && step.shell.is_empty() {
            self.errors.push(&scope, "either files or shell must be specified");
        }
        if !step.shell.is_empty() {
            self.check_template(&scope, "shell", &step.shell);
        }

        for (j, file) in step.files.iter().enumerate() {
            let scope = Scope::File {
                step_ordinal: ordinal,
                step_name: step.name.clone(),
                ordinal: j + 1,
            };
            self.file(&scope, file);
        }
    }

    fn file(&mut self, scope: &Scope, file: &File) {
        if file.path.is_empty() {
            self.errors.push(scope, "path is required");
        }
        if file.output.is_empty() {
            self.errors.push(scope, "output is required");
        } else {
            self.check_template(scope, "output", &file.output);
        }
    }
}

impl Manifest {
    /// Validates the manifest with the default template engine.
    pub fn validate(&self) -> Result<()> {
        self.validate_with(&get_template_engine())
    }

    /// Validates the manifest, checking template syntax with `renderer`.
    ///
    /// # Returns
    /// * `Result<()>` - `Error::ValidationError` listing every violation found
    pub fn validate_with(&self, renderer: &dyn TemplateRenderer) -> Result<()> {
        let mut validator = Validator::new(renderer);
        validator.manifest(self);
        validator.errors.into_result()
    }
}

impl Step {
    /// Validates a single step as if it were the first step of a manifest.
    pub fn validate(&self) -> Result<()> {
        let engine = get_template_engine();
        let mut validator = Validator::new(&engine);
        validator.step(1, self);
        validator.errors.into_result()
    }
}

impl File {
    /// Validates a single file mapping.
    pub fn validate(&self) -> Result<()> {
        let engine = get_template_engine();
        let mut validator = Validator::new(&engine);
        let scope = Scope::File { step_ordinal: 1, step_name: String::new(), ordinal: 1 };
        validator.file(&scope, self);
        validator.errors.into_result()
    }
}
