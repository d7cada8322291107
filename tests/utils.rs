#![allow(dead_code)]

use log::debug;
use projector::config::Config;
use projector::generator::Generator;
use projector::manifest::load;
use projector::provider::TemplateSource;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Root of the test fixtures.
pub fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn relative_files(dir: &Path) -> std::collections::HashSet<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect()
}

/// Prints a diff of files and their contents between two directories.
///
/// # Arguments
/// * `actual` - Generated output
/// * `expected` - Expected output
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    let actual_files = relative_files(actual);
    let expected_files = relative_files(expected);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", actual);
    println!("Expected output: {:?}", expected);

    for file in actual_files.difference(&expected_files) {
        println!("  + {:?} (only in actual)", file);
    }
    for file in expected_files.difference(&actual_files) {
        println!("  - {:?} (only in expected)", file);
    }
    for file in actual_files.intersection(&expected_files) {
        let actual_content = fs::read(actual.join(file)).unwrap();
        let expected_content = fs::read(expected.join(file)).unwrap();
        if actual_content != expected_content {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{}", String::from_utf8_lossy(&actual_content));
            println!("  --- Expected content:\n{}", String::from_utf8_lossy(&expected_content));
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that two directory trees hold the same files with the same contents.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    match dir_diff::is_different(actual, expected) {
        Ok(true) => {
            print_dir_diff(actual, expected);
            panic!("Directories differ. See above for details.");
        }
        Ok(false) => {}
        Err(e) => {
            debug!("Error comparing directories: {e:?}");
            panic!("Failed to compare directories");
        }
    }
}

/// Generates `source` into a fresh temporary directory with `configure`
/// applied to the config, then compares the result with `expected_dir`.
pub fn run_and_assert<F>(source: TemplateSource, expected_dir: &Path, configure: F)
where
    F: FnOnce(Config) -> Config,
{
    let tmp_dir = tempfile::tempdir().unwrap();
    let output = generate_into(&source, tmp_dir.path(), configure).unwrap();
    assert_same_tree(&output, expected_dir);
}

/// Loads `source` and generates it into `dir`, returning the working directory.
pub fn generate_into<F>(
    source: &TemplateSource,
    dir: &Path,
    configure: F,
) -> projector::error::Result<PathBuf>
where
    F: FnOnce(Config) -> Config,
{
    let (provider, manifest_path) = source.open()?;
    let manifest = load(&provider, &manifest_path)?;

    let working_directory = dir.join("project");
    let config = configure(Config::new(&working_directory, "my-app"))
        .with_manifest(manifest)
        .with_defaults("tomakado");

    Generator::new(&config, &provider)?.generate()?;
    Ok(working_directory)
}
