use std::path::PathBuf;
use thiserror::Error;

use crate::manifest::validation::ValidationErrors;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("File '{}' not found.", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Permission denied while reading '{}'.", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Path '{}' escapes the root directory '{}'.", .path.display(), .root.display())]
    PathEscapesRoot { path: PathBuf, root: PathBuf },

    #[error("Failed to parse manifest '{}'. Original error: {reason}", .path.display())]
    ManifestParseError { path: PathBuf, reason: String },

    /// Every rule violation found in a manifest, collected in one pass.
    #[error("Manifest is invalid:\n{0}")]
    ValidationError(ValidationErrors),

    #[error("Failed to parse template '{name}'. Original error: {source}")]
    TemplateParseError { name: String, source: minijinja::Error },

    #[error("Failed to render template '{name}'. Original error: {source}")]
    TemplateExecError { name: String, source: minijinja::Error },

    /// The shell command ran but exited unsuccessfully.
    #[error("Shell command failed ({}). Output:\n{output}", describe_exit(.code))]
    ShellExecError { code: Option<i32>, output: String },

    #[error("Output path '{output}' rendered to an invalid path: {reason}.")]
    InvalidOutputPath { output: String, reason: String },

    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Wraps the first failure of a generation run with the position of the failing step.
    #[error(
        "[step '{step}', {position} of {total}]{} {source}",
        describe_file(.file.as_ref())
    )]
    StepError {
        step: String,
        position: usize,
        total: usize,
        file: Option<(usize, String)>,
        source: Box<Error>,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn describe_file(file: Option<&(usize, String)>) -> String {
    match file {
        Some((ordinal, path)) => format!(" [file '{path}', #{ordinal}]"),
        None => String::new(),
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

impl Error {
    /// Returns the innermost error, looking through step annotations.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::StepError { source, .. } => source.root_cause(),
            other => other,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.root_cause(), Error::FileNotFound { .. })
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self.root_cause(), Error::PermissionDenied { .. })
    }
}

/// Convenience type alias for Results with projector's Error as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
