//! Constants used throughout the projector application

/// Manifest file names in order of preference
pub const MANIFEST_FILENAMES: &[&str] =
    &["projector.toml", "projector.yaml", "projector.yml", "projector.json"];

/// Identifier of the bundled template used by `projector init`
pub const INIT_TEMPLATE: &str = "projector";

/// Project name used when none is given on the command line
pub const DEFAULT_PROJECT_NAME: &str = "my-app";

/// Environment variables consulted for the default project author
pub const AUTHOR_ENV_VARS: &[&str] = &["USER", "USERNAME"];

/// Shell used to execute step scripts
pub mod shell {
    pub const PROGRAM: &str = "sh";
    pub const COMMAND_FLAG: &str = "-c";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
