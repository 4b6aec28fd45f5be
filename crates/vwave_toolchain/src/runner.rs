//! Blocking execution of external programs.

use std::path::PathBuf;
use std::process::Command;

use crate::error::ToolchainError;

/// One external program call: argv plus an optional working directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    /// The program name or path.
    pub program: String,
    /// Arguments passed verbatim (no shell interpretation).
    pub args: Vec<String>,
    /// Working directory; the caller's directory when `None`.
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    /// Creates an invocation of `program` with `args`.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
        }
    }

    /// Runs the program inside `dir`.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

/// What a finished program reported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Whether the program exited successfully.
    pub success: bool,
    /// The exit code, if the program exited normally.
    pub code: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl ProcessOutput {
    /// Describes the exit status for error messages.
    pub fn status_text(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs external programs to completion.
///
/// Implementations block until the program exits. An `Err` means the program
/// could not be started; a program that ran and failed is an `Ok` with
/// `success == false`.
pub trait CommandRunner {
    /// Runs the invocation and waits for it to finish.
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput, ToolchainError>;
}

/// Runs programs on the host with [`std::process::Command`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput, ToolchainError> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        if let Some(dir) = &invocation.cwd {
            cmd.current_dir(dir);
        }

        tracing::debug!(
            program = %invocation.program,
            args = ?invocation.args,
            cwd = ?invocation.cwd,
            "spawning"
        );

        let output = cmd.output().map_err(|source| ToolchainError::Spawn {
            tool: invocation.program.clone(),
            source,
        })?;

        Ok(ProcessOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Runs `invocation` and turns a failed exit into [`ToolchainError::Failed`].
pub fn run_checked<R: CommandRunner + ?Sized>(
    runner: &R,
    invocation: &Invocation,
) -> Result<ProcessOutput, ToolchainError> {
    let output = runner.run(invocation)?;
    if output.success {
        Ok(output)
    } else {
        Err(ToolchainError::Failed {
            tool: invocation.program.clone(),
            status: output.status_text(),
            stderr: output.stderr,
        })
    }
}
