//! Per-run scratch directory holding the simulation artifacts.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tempfile::TempDir;

use crate::error::ToolchainError;

/// File name of the copied design source.
pub const DESIGN_FILE: &str = "design.v";
/// File name of the generated testbench.
pub const TESTBENCH_FILE: &str = "testbench.v";
/// File name of the compiled simulation.
pub const SIM_FILE: &str = "sim.vvp";
/// File name of the waveform trace written by the simulation.
pub const VCD_FILE: &str = "sim.vcd";

/// A uniquely named directory for one generate-waveform run.
///
/// The directory is removed when the workspace is dropped, on success and
/// on every error path alike, unless it was created with `keep` set.
pub struct SimWorkspace {
    dir: Option<TempDir>,
    path: PathBuf,
    keep: bool,
}

impl SimWorkspace {
    /// Creates a fresh directory named `verilog-sim-<unix millis>-<random>`.
    ///
    /// The directory lives under `parent` if given, otherwise under the
    /// system temporary directory.
    pub fn create(parent: Option<&Path>, keep: bool) -> Result<Self, ToolchainError> {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let prefix = format!("verilog-sim-{millis}-");
        let mut builder = tempfile::Builder::new();
        builder.prefix(&prefix);
        let dir = match parent {
            Some(parent) => builder.tempdir_in(parent)?,
            None => builder.tempdir()?,
        };
        let path = dir.path().to_path_buf();
        tracing::debug!(path = %path.display(), keep, "created simulation workspace");
        Ok(Self {
            dir: Some(dir),
            path,
            keep,
        })
    }

    /// Returns the workspace directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns whether the directory survives this workspace.
    pub fn is_kept(&self) -> bool {
        self.keep
    }

    /// `<dir>/design.v`
    pub fn design_path(&self) -> PathBuf {
        self.path.join(DESIGN_FILE)
    }

    /// `<dir>/testbench.v`
    pub fn testbench_path(&self) -> PathBuf {
        self.path.join(TESTBENCH_FILE)
    }

    /// `<dir>/sim.vvp`
    pub fn sim_path(&self) -> PathBuf {
        self.path.join(SIM_FILE)
    }

    /// `<dir>/sim.vcd`
    pub fn vcd_path(&self) -> PathBuf {
        self.path.join(VCD_FILE)
    }
}

impl Drop for SimWorkspace {
    fn drop(&mut self) {
        let Some(dir) = self.dir.take() else {
            return;
        };
        if self.keep {
            let kept = dir.keep();
            tracing::debug!(path = %kept.display(), "keeping simulation workspace");
        } else if let Err(e) = dir.close() {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to remove simulation workspace");
        }
    }
}
