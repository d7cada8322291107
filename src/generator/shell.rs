use crate::constants::shell::{COMMAND_FLAG, PROGRAM};
use crate::error::Result;
use log::{debug, warn};
use std::path::Path;
use std::process::{Command, Stdio};

/// Result of running a shell script to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOutput {
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
    /// Captured standard output followed by standard error
    pub output: String,
}

impl ShellOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Executes rendered shell scripts.
pub trait ShellRunner {
    /// Runs `script` with `cwd` as its working directory and waits for it to exit.
    ///
    /// # Returns
    /// * `Result<ShellOutput>` - Exit status and captured output; an error only
    ///   if the shell could not be started
    fn run(&self, script: &str, cwd: &Path) -> Result<ShellOutput>;
}

impl<T: ShellRunner + ?Sized> ShellRunner for &T {
    fn run(&self, script: &str, cwd: &Path) -> Result<ShellOutput> {
        (**self).run(script, cwd)
    }
}

/// Runs scripts with `sh -c`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShell;

fn decode(bytes: Vec<u8>, stream: &str) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| {
        warn!("Shell {stream} is not valid UTF-8, invalid sequences were replaced");
        String::from_utf8_lossy(e.as_bytes()).into_owned()
    })
}

impl ShellRunner for SystemShell {
    fn run(&self, script: &str, cwd: &Path) -> Result<ShellOutput> {
        debug!("Running `{PROGRAM} {COMMAND_FLAG}` in '{}'", cwd.display());

        let output = Command::new(PROGRAM)
            .arg(COMMAND_FLAG)
            .arg(script)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()?;

        let mut captured = decode(output.stdout, "stdout");
        captured.push_str(&decode(output.stderr, "stderr"));

        Ok(ShellOutput { code: output.status.code(), output: captured })
    }
}
