//! Error types for the external toolchain pipeline.

use std::path::PathBuf;

use vwave_testbench::TestbenchError;

/// Errors that abort the generate-waveform pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ToolchainError {
    /// Creating the workspace or writing an input file failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The testbench could not be generated from the design source.
    #[error(transparent)]
    Testbench(#[from] TestbenchError),

    /// The external program could not be started at all.
    #[error("failed to run `{tool}`: {source}")]
    Spawn {
        /// The program that was invoked.
        tool: String,
        /// The underlying OS error.
        source: std::io::Error,
    },

    /// The external program ran but reported failure.
    #[error("`{tool}` failed ({status}){}", format_stderr(.stderr))]
    Failed {
        /// The program that was invoked.
        tool: String,
        /// A description of the exit status, e.g. `exit code 1`.
        status: String,
        /// Captured standard error output.
        stderr: String,
    },

    /// The simulation finished without producing its trace file.
    #[error("VCD file was not generated")]
    MissingArtifact(PathBuf),
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}
