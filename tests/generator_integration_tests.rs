mod utils;

use projector::config::Config;
use projector::error::Error;
use projector::generator::{Generator, ShellOutput, ShellRunner};
use projector::manifest::{File, Manifest, Step};
use projector::provider::{FsProvider, TemplateSource};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use test_log::test;
use utils::{assert_same_tree, fixtures, generate_into, run_and_assert};

/// Records, for every script, which files already existed in the working directory.
#[derive(Default)]
struct SnapshotShell {
    runs: RefCell<Vec<(String, Vec<PathBuf>)>>,
}

impl ShellRunner for SnapshotShell {
    fn run(&self, script: &str, cwd: &Path) -> projector::error::Result<ShellOutput> {
        let mut existing: Vec<PathBuf> = walkdir::WalkDir::new(cwd)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().strip_prefix(cwd).unwrap().to_path_buf())
            .collect();
        existing.sort();
        self.runs.borrow_mut().push((script.to_string(), existing));
        Ok(ShellOutput { code: Some(0), output: String::new() })
    }
}

fn web_source() -> TemplateSource {
    TemplateSource::FileSystem(fixtures().join("templates/web"))
}

fn step(name: &str, files: Vec<File>, shell: &str) -> Step {
    Step { name: name.into(), files, shell: shell.into(), ..Default::default() }
}

fn file(path: &str, output: &str) -> File {
    File { path: path.into(), output: output.into() }
}

fn web_manifest(steps: Vec<Step>) -> Manifest {
    Manifest {
        name: "web/static".into(),
        author: "tomakado".into(),
        version: "0.3.1".into(),
        steps,
        ..Default::default()
    }
}

#[test]
fn generates_bundled_go_template() {
    run_and_assert(
        TemplateSource::Bundled("go/hello-world".into()),
        &fixtures().join("expected/go-hello-world"),
        |config| {
            config
                .with_optional_steps(["makefile", "license"])
                .with_package("github.com/tomakado/the-best-app")
                .with_author("tomakado")
        },
    );
}

#[test]
fn generates_bundled_go_template_without_optional_steps() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let output = generate_into(
        &TemplateSource::Bundled("go/hello-world".into()),
        tmp_dir.path(),
        |config| config,
    )
    .unwrap();

    assert!(output.join("main.go").is_file());
    assert!(output.join(".gitignore").is_file());
    assert!(!output.join("Makefile").exists());
    assert!(!output.join("LICENSE").exists());
    assert_eq!(fs::read_to_string(output.join("go.mod")).unwrap(), "module my-app\n\ngo 1.21\n");
}

#[cfg(unix)]
#[test]
fn generates_filesystem_template() {
    run_and_assert(web_source(), &fixtures().join("expected/web"), |config| {
        Config { project_name: "landing".into(), ..config }
            .with_package("example.com/landing")
            .with_optional_steps(["docs"])
    });
}

#[cfg(unix)]
#[test]
fn identical_inputs_produce_identical_trees() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let configure = |config: Config| config.with_optional_steps(["docs", "deploy"]);

    let first_output = generate_into(&web_source(), first.path(), configure).unwrap();
    let second_output = generate_into(&web_source(), second.path(), configure).unwrap();

    assert!(first_output.join("deploy.log").is_file());
    assert_same_tree(&first_output, &second_output);
}

#[test]
fn unknown_optional_step_fails_before_creating_anything() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let err = generate_into(&web_source(), tmp_dir.path(), |config| {
        config.with_optional_steps(["docs", "kubernetes", "terraform"])
    })
    .unwrap_err();

    assert!(matches!(err, Error::ConfigError(_)));
    let message = err.to_string();
    assert!(message.contains("'kubernetes'"));
    assert!(message.contains("'terraform'"));
    assert!(!tmp_dir.path().join("project").exists());
}

#[test]
fn shell_step_finishes_before_next_file_step() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let working_directory = tmp_dir.path().join("project");
    let manifest = web_manifest(vec![
        step("readme", vec![file("README.md.tpl", "README.md")], "first {{ ProjectName }}"),
        step("page", vec![file("index.html.tpl", "index.html")], "second"),
    ]);
    let config = Config::new(&working_directory, "landing")
        .with_manifest(manifest)
        .with_defaults("tomakado");
    let provider = FsProvider::new(fixtures().join("templates/web"));
    let shell = SnapshotShell::default();

    Generator::new(&config, &provider).unwrap().with_shell(&shell).generate().unwrap();

    let runs = shell.runs.borrow();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].0, "first landing");
    assert_eq!(runs[0].1, vec![PathBuf::from("README.md")]);
    assert_eq!(runs[1].0, "second");
    assert_eq!(runs[1].1, vec![PathBuf::from("README.md"), PathBuf::from("index.html")]);
}

#[cfg(unix)]
#[test]
fn shell_output_is_visible_to_later_steps() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let working_directory = tmp_dir.path().join("project");
    let manifest = web_manifest(vec![
        step("write", vec![], "printf from-shell > note.txt"),
        step("overwrite", vec![file("assets/style.css", "note.txt")], ""),
        step("copy", vec![], "cp note.txt copy.txt"),
    ]);
    let config = Config::new(&working_directory, "landing")
        .with_manifest(manifest)
        .with_defaults("tomakado");
    let provider = FsProvider::new(fixtures().join("templates/web"));

    Generator::new(&config, &provider).unwrap().generate().unwrap();

    let style = fs::read_to_string(fixtures().join("templates/web/assets/style.css")).unwrap();
    assert_eq!(fs::read_to_string(working_directory.join("note.txt")).unwrap(), style);
    assert_eq!(fs::read_to_string(working_directory.join("copy.txt")).unwrap(), style);
}

#[test]
fn invalid_output_template_stops_before_writing_the_file() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let working_directory = tmp_dir.path().join("project");
    let manifest = web_manifest(vec![step(
        "bootstrap",
        vec![
            file("README.md.tpl", "README.md"),
            file("index.html.tpl", "src/{{ ProjectName }/index.html"),
            file("assets/style.css", "style.css"),
        ],
        "",
    )]);
    assert!(manifest.validate().is_err());

    let config = Config::new(&working_directory, "landing")
        .with_manifest(manifest)
        .with_defaults("tomakado");
    let provider = FsProvider::new(fixtures().join("templates/web"));
    let err = Generator::new(&config, &provider).unwrap().generate().unwrap_err();

    match &err {
        Error::StepError { step, position, total, file, source } => {
            assert_eq!(step, "bootstrap");
            assert_eq!((*position, *total), (1, 1));
            assert_eq!(file, &Some((2, "index.html.tpl".to_string())));
            assert!(matches!(**source, Error::TemplateParseError { .. }));
        }
        other => panic!("expected StepError, got {other:?}"),
    }
    assert!(working_directory.join("README.md").is_file());
    assert!(!working_directory.join("src").exists());
    assert!(!working_directory.join("style.css").exists());
}

#[test]
fn missing_template_source_is_reported_with_file_ordinal() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let manifest = web_manifest(vec![
        step("bootstrap", vec![file("README.md.tpl", "README.md")], ""),
        step("extras", vec![file("README.md.tpl", "a.md"), file("Makefile", "Makefile")], ""),
    ]);
    let config = Config::new(tmp_dir.path(), "landing")
        .with_manifest(manifest)
        .with_defaults("tomakado");
    let provider = FsProvider::new(fixtures().join("templates/web"));

    let err = Generator::new(&config, &provider).unwrap().generate().unwrap_err();

    assert!(err.is_not_found());
    let message = err.to_string();
    assert!(message.starts_with("[step 'extras', 2 of 2] [file 'Makefile', #2]"));
    assert!(tmp_dir.path().join("a.md").is_file());
}

#[test]
fn undefined_variable_in_body_fails_generation() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let templates = tempfile::tempdir().unwrap();
    fs::write(templates.path().join("version.txt.tpl"), "{{ ProjectVersion }}\n").unwrap();

    let manifest = web_manifest(vec![step("v", vec![file("version.txt.tpl", "VERSION")], "")]);
    let config = Config::new(tmp_dir.path(), "landing")
        .with_manifest(manifest)
        .with_defaults("tomakado");
    let provider = FsProvider::new(templates.path());

    let err = Generator::new(&config, &provider).unwrap().generate().unwrap_err();
    assert!(matches!(err.root_cause(), Error::TemplateExecError { .. }));
    assert!(!tmp_dir.path().join("VERSION").exists());
}

#[cfg(unix)]
#[test]
fn failing_shell_reports_exit_code_and_output() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let manifest = web_manifest(vec![
        step("ok", vec![], "true"),
        step("broken", vec![], "echo 'about to fail'; datee"),
        step("never", vec![file("README.md.tpl", "README.md")], ""),
    ]);
    let config = Config::new(tmp_dir.path(), "landing")
        .with_manifest(manifest)
        .with_defaults("tomakado");
    let provider = FsProvider::new(fixtures().join("templates/web"));

    let err = Generator::new(&config, &provider).unwrap().generate().unwrap_err();

    match err.root_cause() {
        Error::ShellExecError { code, output } => {
            assert_eq!(*code, Some(127));
            assert!(output.starts_with("about to fail\n"));
        }
        other => panic!("expected ShellExecError, got {other:?}"),
    }
    assert!(err.to_string().starts_with("[step 'broken', 2 of 3]"));
    assert!(!tmp_dir.path().join("README.md").exists());
}

#[test]
fn starter_template_can_be_generated_from() {
    let starter = tempfile::tempdir().unwrap();
    let template_dir = generate_into(
        &TemplateSource::Bundled("projector".into()),
        starter.path(),
        |config| Config { project_name: "my-template".into(), ..config },
    )
    .unwrap();
    assert!(template_dir.join("projector.toml").is_file());
    assert!(template_dir.join("README.md.tpl").is_file());

    let project = tempfile::tempdir().unwrap();
    let output =
        generate_into(&TemplateSource::FileSystem(template_dir), project.path(), |config| config)
            .unwrap();

    assert_eq!(
        fs::read_to_string(output.join("README.md")).unwrap(),
        "# my-app\n\nMaintained by tomakado.\nGenerated from my-template@0.1.0.\n"
    );
}
