use crate::constants::{exit_codes, verbosity, DEFAULT_PROJECT_NAME};
use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Generate projects from language and framework agnostic templates.
#[derive(Parser, Debug)]
#[command(name = "projector", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a project from a template.
    Create(CreateArgs),
    /// List bundled templates.
    List,
    /// Show meta information about a template.
    Info(InfoArgs),
    /// Load and validate a manifest without generating anything.
    Validate(ValidateArgs),
    /// Create a starter template manifest in the current directory.
    Init,
}

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Bundled template identifier, or a path to a manifest with `--file`.
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Directory to generate the project into.
    #[arg(value_name = "WORKING_DIR")]
    pub working_directory: PathBuf,

    /// Project name.
    #[arg(short, long, default_value = DEFAULT_PROJECT_NAME)]
    pub name: String,

    /// Package or module name (defaults to the project name).
    #[arg(short, long)]
    pub package: Option<String>,

    /// Project author (defaults to the current OS user).
    #[arg(short, long)]
    pub author: Option<String>,

    /// Optional steps to run (comma-separated or repeated).
    #[arg(long = "optional", value_name = "STEP", value_delimiter = ',')]
    pub optional_steps: Vec<String>,

    /// Treat TEMPLATE as a path to a custom manifest file or directory.
    #[arg(short, long)]
    pub file: bool,

    /// Run shell steps without asking for confirmation.
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Bundled template identifier, or a path to a manifest with `--file`.
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Treat TEMPLATE as a path to a custom manifest file or directory.
    #[arg(short, long)]
    pub file: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Bundled template identifier.
    #[arg(value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Path to a manifest file or a directory containing one.
    #[arg(short, long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,
}

/// Parse command line arguments, printing help when a required input is missing.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument
            || e.kind() == ErrorKind::MissingSubcommand
        {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
