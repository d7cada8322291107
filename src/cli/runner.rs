use crate::{
    cli::{Cli, Commands, CreateArgs, InfoArgs, ValidateArgs},
    bundle,
    config::{default_author, Config},
    constants::INIT_TEMPLATE,
    error::{Error, Result},
    generator::generate,
    manifest::{load, Manifest},
    provider::{Provider, TemplateSource},
};
use dialoguer::Confirm;
use log::debug;
use std::path::{Path, PathBuf};

/// Dispatches a parsed command line to the matching command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Create(args) => create(args),
        Commands::List => list(),
        Commands::Info(args) => info(args),
        Commands::Validate(args) => validate(args),
        Commands::Init => init(),
    }
}

/// Opens a template source and loads its manifest.
fn open_manifest(source: &TemplateSource) -> Result<(Box<dyn Provider>, Manifest)> {
    let (provider, manifest_path) = source.open()?;
    let manifest = load(&provider, &manifest_path)?;
    Ok((provider, manifest))
}

/// Asks before running a manifest that executes shell commands.
fn confirm_shell_steps(manifest: &Manifest, skip: bool) -> Result<()> {
    if skip || !manifest.has_shell_steps() {
        return Ok(());
    }

    let confirmed = Confirm::new()
        .with_prompt(format!(
            "Template '{}' runs shell commands. Do you want to continue?",
            manifest.name
        ))
        .default(false)
        .interact()
        .map_err(anyhow::Error::from)?;

    if confirmed {
        Ok(())
    } else {
        Err(Error::ConfigError("shell commands were not confirmed, nothing generated".into()))
    }
}

fn create(args: CreateArgs) -> Result<()> {
    let source = TemplateSource::from_arg(&args.template, args.file);
    let (provider, manifest) = open_manifest(&source)?;
    confirm_shell_steps(&manifest, args.yes)?;

    let config = Config::new(&args.working_directory, args.name)
        .with_package(args.package.unwrap_or_default())
        .with_author(args.author.unwrap_or_default())
        .with_optional_steps(args.optional_steps)
        .with_manifest(manifest)
        .with_defaults(&default_author());
    debug!("Generating with {config:?}");

    generate(&config, &provider)?;

    println!(
        "Project '{}' generated successfully in {}.",
        config.project_name,
        config.working_directory.display()
    );
    Ok(())
}

fn list() -> Result<()> {
    for template in bundle::list_templates()? {
        println!("{template}");
    }
    Ok(())
}

/// Formats the meta information shown by `info`.
pub fn describe_manifest(manifest: &Manifest) -> String {
    let mut lines = vec![format!("{}@{} by {}", manifest.name, manifest.version, manifest.author)];
    if let Some(url) = manifest.url.as_deref().filter(|u| !u.is_empty()) {
        lines.push(format!("URL: {url}"));
    }
    if let Some(description) = manifest.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("Description: {description}"));
    }
    lines.join("\n")
}

fn info(args: InfoArgs) -> Result<()> {
    let (_, manifest) = open_manifest(&TemplateSource::from_arg(&args.template, args.file))?;
    println!("{}", describe_manifest(&manifest));
    Ok(())
}

fn validate(args: ValidateArgs) -> Result<()> {
    let source = match (args.manifest, args.template) {
        (Some(path), _) => TemplateSource::FileSystem(path),
        (None, Some(template)) => TemplateSource::Bundled(template),
        (None, None) => {
            return Err(Error::ConfigError(
                "a bundled template name is required if no manifest path is given".into(),
            ))
        }
    };

    open_manifest(&source)?;
    println!("Manifest is valid");
    Ok(())
}

fn project_name_of(dir: &Path) -> String {
    dir.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
}

fn init() -> Result<()> {
    let working_directory: PathBuf = std::env::current_dir()?;
    let project_name = project_name_of(&working_directory);

    let (provider, manifest) =
        open_manifest(&TemplateSource::Bundled(INIT_TEMPLATE.to_string()))?;

    let config = Config::new(&working_directory, project_name)
        .with_manifest(manifest)
        .with_defaults(&default_author());
    generate(&config, &provider)?;

    println!("Template manifest created in {}.", working_directory.display());
    Ok(())
}
