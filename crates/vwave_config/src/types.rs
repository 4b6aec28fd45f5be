//! Configuration types deserialized from `vwave.toml`.

use serde::Deserialize;

/// The top-level configuration parsed from `vwave.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectConfig {
    /// External tool names.
    #[serde(default)]
    pub toolchain: ToolchainConfig,
    /// Settings for the generate-waveform pipeline.
    #[serde(default)]
    pub waveform: WaveformConfig,
    /// Lint settings (deny/allow rules).
    #[serde(default)]
    pub lint: LintConfig,
}

/// Names (or paths) of the external programs the pipeline shells out to.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToolchainConfig {
    /// The Verilog compiler, invoked as `<compiler> -o sim.vvp design.v testbench.v`.
    pub compiler: String,
    /// The simulation runner, invoked as `<simulator> sim.vvp`.
    pub simulator: String,
    /// The waveform viewer, invoked as `<viewer> sim.vcd`.
    pub viewer: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            compiler: "iverilog".to_string(),
            simulator: "vvp".to_string(),
            viewer: "gtkwave".to_string(),
        }
    }
}

/// Settings for the generate-waveform pipeline.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WaveformConfig {
    /// Keep the per-run temporary directory instead of removing it.
    pub keep_artifacts: bool,
    /// Launch the waveform viewer as the last step.
    pub open_viewer: bool,
    /// Parent directory for per-run directories (system temp dir if unset).
    pub temp_root: Option<String>,
}

impl Default for WaveformConfig {
    fn default() -> Self {
        Self {
            keep_artifacts: false,
            open_viewer: true,
            temp_root: None,
        }
    }
}

/// Lint configuration controlling which rules are denied or allowed.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct LintConfig {
    /// Rule names promoted to error severity.
    #[serde(default)]
    pub deny: Vec<String>,
    /// Rule names suppressed entirely.
    #[serde(default)]
    pub allow: Vec<String>,
}
