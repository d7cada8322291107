//! Step execution: turns a loaded manifest and a [`Config`] into files on disk.

pub mod plan;
pub mod shell;

use std::fs;
use std::path::PathBuf;

use log::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::manifest::{File, Manifest, Step};
use crate::provider::Provider;
use crate::renderer::{get_template_engine, TemplateRenderer};

pub use plan::ExecutionPlan;
pub use shell::{ShellOutput, ShellRunner, SystemShell};

/// Runs the steps of a manifest against a config.
///
/// Template sources are read through the provider under the manifest's
/// namespace. Every output path and the shell's working directory are
/// resolved against the configured working directory; the process working
/// directory is never changed.
pub struct Generator<'a> {
    config: &'a Config,
    manifest: &'a Manifest,
    context: serde_json::Value,
    provider: &'a dyn Provider,
    engine: Box<dyn TemplateRenderer + 'a>,
    shell: Box<dyn ShellRunner + 'a>,
}

impl<'a> Generator<'a> {
    /// Creates a generator for the manifest held by `config`.
    ///
    /// # Returns
    /// * `Result<Self>` - `Error::ConfigError` if no manifest has been loaded
    pub fn new(config: &'a Config, provider: &'a dyn Provider) -> Result<Self> {
        let manifest = config.manifest.as_ref().ok_or_else(|| {
            Error::ConfigError("no manifest has been loaded".to_string())
        })?;

        Ok(Self {
            config,
            manifest,
            context: config.to_context(),
            provider,
            engine: Box::new(get_template_engine()),
            shell: Box::new(SystemShell),
        })
    }

    pub fn with_shell<S: ShellRunner + 'a>(mut self, shell: S) -> Self {
        self.shell = Box::new(shell);
        self
    }

    pub fn with_renderer<R: TemplateRenderer + 'a>(mut self, engine: R) -> Self {
        self.engine = Box::new(engine);
        self
    }

    /// Runs every selected step in manifest order, stopping at the first failure.
    ///
    /// Unknown optional step names are reported before the working directory
    /// is created. Files written by earlier steps are left in place on failure.
    pub fn generate(&self) -> Result<()> {
        let plan = ExecutionPlan::resolve(self.manifest, &self.config.optional_steps)?;

        let working_directory = &self.config.working_directory;
        debug!("Creating working directory '{}'", working_directory.display());
        fs::create_dir_all(working_directory)?;

        let total = self.manifest.steps.len();
        for (i, step) in self.manifest.steps.iter().enumerate() {
            let position = i + 1;
            if !plan.should_run(i) {
                debug!("[{position}/{total}] Skipping optional step '{}'", step.name);
                continue;
            }

            debug!("[{position}/{total}] Running step '{}'", step.name);
            self.run_step(step).map_err(|(file, source)| Error::StepError {
                step: step.name.clone(),
                position,
                total,
                file,
                source: Box::new(source),
            })?;
        }

        Ok(())
    }

    fn run_step(&self, step: &Step) -> std::result::Result<(), (Option<(usize, String)>, Error)> {
        for (j, file) in step.files.iter().enumerate() {
            self.generate_file(file).map_err(|e| (Some((j + 1, file.path.clone())), e))?;
        }

        if step.has_shell() {
            self.run_shell(&step.shell).map_err(|e| (None, e))?;
        }

        Ok(())
    }

    fn generate_file(&self, file: &File) -> Result<()> {
        let template = self.extract_template(&file.path)?;
        let content = self.engine.render(&file.path, &template, &self.context)?;
        let target = self.render_output_path(file)?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, content)?;
        info!("Generated '{}'", target.display());

        Ok(())
    }

    /// Reads the source of a template file from the manifest's namespace.
    ///
    /// `path` may not leave the namespace; an absolute path is relative to it.
    pub fn extract_template(&self, path: &str) -> Result<String> {
        let source_path = self.manifest.namespace().join_confined(path)?;
        let bytes = self.provider.get(&source_path)?;

        String::from_utf8(bytes).map_err(|_| {
            Error::Other(anyhow::anyhow!(
                "Template '{}' is not valid UTF-8",
                source_path.display()
            ))
        })
    }

    /// Renders the output path of `file` and resolves it under the working directory.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - The target path, `Error::InvalidOutputPath` if it renders
    ///   empty or to the working directory itself, `Error::PathEscapesRoot` if it
    ///   points outside the working directory
    pub fn render_output_path(&self, file: &File) -> Result<PathBuf> {
        let rendered = self.engine.render(&file.output, &file.output, &self.context)?;
        if rendered.trim().is_empty() {
            return Err(Error::InvalidOutputPath {
                output: file.output.clone(),
                reason: "rendered path is empty".to_string(),
            });
        }

        let working_directory = &self.config.working_directory;
        let target = working_directory.join_confined(&rendered)?;
        if &target == working_directory {
            return Err(Error::InvalidOutputPath {
                output: file.output.clone(),
                reason: format!("'{rendered}' resolves to the working directory itself"),
            });
        }

        Ok(target)
    }

    /// Renders a shell script template and runs it in the working directory.
    pub fn run_shell(&self, raw_script: &str) -> Result<ShellOutput> {
        let script = self.engine.render("shell", raw_script, &self.context)?;
        debug!("Executing shell script:\n{script}");

        let output = self.shell.run(&script, &self.config.working_directory)?;
        if !output.success() {
            return Err(Error::ShellExecError { code: output.code, output: output.output });
        }

        info!("Shell script finished");
        if !output.output.is_empty() {
            debug!("Shell output:\n{}", output.output);
        }
        Ok(output)
    }
}

/// Generates the project described by `config` using the default renderer and shell.
pub fn generate(config: &Config, provider: &dyn Provider) -> Result<()> {
    Generator::new(config, provider)?.generate()
}
