//! The generate-waveform pipeline: write, compile, simulate, check, view.

use std::path::{Path, PathBuf};

use vwave_config::{ToolchainConfig, WaveformConfig};
use vwave_testbench::generate_testbench;

use crate::error::ToolchainError;
use crate::runner::{run_checked, CommandRunner, Invocation};
use crate::workspace::{SimWorkspace, SIM_FILE};

/// Per-run switches for [`run_waveform_pipeline`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaveformOptions {
    /// Launch the viewer on the trace as the final step.
    pub open_viewer: bool,
    /// Keep the workspace directory after the run.
    pub keep_artifacts: bool,
    /// Parent directory for the workspace (system temp dir if `None`).
    pub temp_root: Option<PathBuf>,
}

impl Default for WaveformOptions {
    fn default() -> Self {
        Self {
            open_viewer: true,
            keep_artifacts: false,
            temp_root: None,
        }
    }
}

impl From<&WaveformConfig> for WaveformOptions {
    fn from(config: &WaveformConfig) -> Self {
        Self {
            open_viewer: config.open_viewer,
            keep_artifacts: config.keep_artifacts,
            temp_root: config.temp_root.as_ref().map(PathBuf::from),
        }
    }
}

/// The outcome of a successful pipeline run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaveformRun {
    /// The workspace directory used for this run.
    pub workspace: PathBuf,
    /// The trace file produced by the simulation.
    pub vcd_path: PathBuf,
    /// Whether the workspace (and the trace) still exists.
    pub kept: bool,
    /// Whether the viewer was launched.
    pub viewed: bool,
}

/// Runs the full generate-waveform pipeline for one design source.
///
/// In order: write `design.v`, generate and write `testbench.v`, compile both
/// into `sim.vvp`, run the simulation inside the workspace, require
/// `sim.vcd` to exist, then open it in the viewer. Each step blocks until
/// the previous one finished; the first failure aborts the rest. The
/// workspace is removed on return unless `keep_artifacts` is set.
pub fn run_waveform_pipeline<R: CommandRunner + ?Sized>(
    source: &str,
    runner: &R,
    tools: &ToolchainConfig,
    options: &WaveformOptions,
) -> Result<WaveformRun, ToolchainError> {
    let workspace = SimWorkspace::create(options.temp_root.as_deref(), options.keep_artifacts)?;

    let design = workspace.design_path();
    std::fs::write(&design, source)?;

    let testbench = workspace.testbench_path();
    std::fs::write(&testbench, generate_testbench(source)?)?;

    let sim = workspace.sim_path();
    tracing::info!(compiler = %tools.compiler, "compiling design and testbench");
    run_checked(runner, &compile_invocation(tools, &sim, &design, &testbench))?;

    tracing::info!(simulator = %tools.simulator, "running simulation");
    run_checked(runner, &simulate_invocation(tools, workspace.path()))?;

    let vcd_path = workspace.vcd_path();
    if !vcd_path.is_file() {
        return Err(ToolchainError::MissingArtifact(vcd_path));
    }

    if options.open_viewer {
        tracing::info!(viewer = %tools.viewer, "opening waveform viewer");
        run_checked(runner, &view_invocation(tools, &vcd_path))?;
    }

    Ok(WaveformRun {
        workspace: workspace.path().to_path_buf(),
        vcd_path,
        kept: workspace.is_kept(),
        viewed: options.open_viewer,
    })
}

/// `<compiler> -o <dir>/sim.vvp <dir>/design.v <dir>/testbench.v`
pub fn compile_invocation(
    tools: &ToolchainConfig,
    sim: &Path,
    design: &Path,
    testbench: &Path,
) -> Invocation {
    Invocation::new(
        tools.compiler.as_str(),
        [
            "-o".to_string(),
            path_arg(sim),
            path_arg(design),
            path_arg(testbench),
        ],
    )
}

/// `<simulator> <dir>/sim.vvp`, run with `<dir>` as the working directory so
/// the testbench's relative `$dumpfile` lands next to the other artifacts.
pub fn simulate_invocation(tools: &ToolchainConfig, workspace: &Path) -> Invocation {
    Invocation::new(tools.simulator.as_str(), [path_arg(&workspace.join(SIM_FILE))])
        .in_dir(workspace)
}

/// `<viewer> <dir>/sim.vcd`
pub fn view_invocation(tools: &ToolchainConfig, vcd: &Path) -> Invocation {
    Invocation::new(tools.viewer.as_str(), [path_arg(vcd)])
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::ProcessOutput;
    use crate::workspace::VCD_FILE;
    use std::cell::RefCell;

    const DESIGN: &str = "module top (a, b);\n  assign b = a;\nendmodule\n";

    /// Records invocations; the simulator step writes a trace unless told not to.
    struct FakeRunner {
        calls: RefCell<Vec<Invocation>>,
        fail_program: Option<&'static str>,
        write_vcd: bool,
    }

    impl FakeRunner {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_program: None,
                write_vcd: true,
            }
        }

        fn programs(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|c| c.program.clone()).collect()
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, invocation: &Invocation) -> Result<ProcessOutput, ToolchainError> {
            self.calls.borrow_mut().push(invocation.clone());
            if self.fail_program == Some(invocation.program.as_str()) {
                return Ok(ProcessOutput {
                    success: false,
                    code: Some(1),
                    stdout: String::new(),
                    stderr: "boom".to_string(),
                });
            }
            if invocation.program == "vvp" && self.write_vcd {
                let dir = invocation.cwd.as_ref().expect("simulator runs in workspace");
                std::fs::write(dir.join(VCD_FILE), "$enddefinitions $end\n").unwrap();
            }
            Ok(ProcessOutput {
                success: true,
                code: Some(0),
                ..Default::default()
            })
        }
    }

    fn options(root: &Path, keep: bool, view: bool) -> WaveformOptions {
        WaveformOptions {
            open_viewer: view,
            keep_artifacts: keep,
            temp_root: Some(root.to_path_buf()),
        }
    }

    #[test]
    fn runs_steps_in_order_with_exact_arguments() {
        let root = tempfile::tempdir().unwrap();
        let runner = FakeRunner::new();
        let tools = ToolchainConfig::default();

        let run = run_waveform_pipeline(DESIGN, &runner, &tools, &options(root.path(), true, true))
            .unwrap();

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 3);
        let ws = &run.workspace;
        assert_eq!(
            calls[0],
            Invocation::new(
                "iverilog",
                [
                    "-o".to_string(),
                    path_arg(&ws.join("sim.vvp")),
                    path_arg(&ws.join("design.v")),
                    path_arg(&ws.join("testbench.v")),
                ]
            )
        );
        assert_eq!(
            calls[1],
            Invocation::new("vvp", [path_arg(&ws.join("sim.vvp"))]).in_dir(ws)
        );
        assert_eq!(
            calls[2],
            Invocation::new("gtkwave", [path_arg(&ws.join("sim.vcd"))])
        );

        assert!(run.kept && run.viewed);
        assert_eq!(std::fs::read_to_string(ws.join("design.v")).unwrap(), DESIGN);
        let tb = std::fs::read_to_string(ws.join("testbench.v")).unwrap();
        assert!(tb.contains("top dut(a, b);"));
    }

    #[test]
    fn workspace_removed_after_success_by_default() {
        let root = tempfile::tempdir().unwrap();
        let runner = FakeRunner::new();
        let run = run_waveform_pipeline(
            DESIGN,
            &runner,
            &ToolchainConfig::default(),
            &options(root.path(), false, true),
        )
        .unwrap();
        assert!(!run.kept);
        assert!(!run.workspace.exists());
    }

    #[test]
    fn viewer_skipped_when_disabled() {
        let root = tempfile::tempdir().unwrap();
        let runner = FakeRunner::new();
        let run = run_waveform_pipeline(
            DESIGN,
            &runner,
            &ToolchainConfig::default(),
            &options(root.path(), true, false),
        )
        .unwrap();
        assert_eq!(runner.programs(), vec!["iverilog", "vvp"]);
        assert!(!run.viewed);
        assert!(run.vcd_path.is_file());
    }

    #[test]
    fn compile_failure_aborts_remaining_steps() {
        let root = tempfile::tempdir().unwrap();
        let mut runner = FakeRunner::new();
        runner.fail_program = Some("iverilog");

        let err = run_waveform_pipeline(
            DESIGN,
            &runner,
            &ToolchainConfig::default(),
            &options(root.path(), false, true),
        )
        .unwrap_err();

        assert!(matches!(err, ToolchainError::Failed { ref tool, .. } if tool == "iverilog"));
        assert_eq!(runner.programs(), vec!["iverilog"]);
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[test]
    fn missing_trace_is_distinct_error() {
        let root = tempfile::tempdir().unwrap();
        let mut runner = FakeRunner::new();
        runner.write_vcd = false;

        let err = run_waveform_pipeline(
            DESIGN,
            &runner,
            &ToolchainConfig::default(),
            &options(root.path(), false, true),
        )
        .unwrap_err();

        assert!(matches!(err, ToolchainError::MissingArtifact(_)));
        assert_eq!(err.to_string(), "VCD file was not generated");
        assert_eq!(runner.programs(), vec!["iverilog", "vvp"]);
    }

    #[test]
    fn no_module_fails_before_any_process() {
        let root = tempfile::tempdir().unwrap();
        let runner = FakeRunner::new();
        let err = run_waveform_pipeline(
            "assign y = a;\n",
            &runner,
            &ToolchainConfig::default(),
            &options(root.path(), false, true),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "No module declaration found");
        assert!(runner.programs().is_empty());
    }

    #[test]
    fn kept_workspace_survives_failure() {
        let root = tempfile::tempdir().unwrap();
        let mut runner = FakeRunner::new();
        runner.fail_program = Some("vvp");
        run_waveform_pipeline(
            DESIGN,
            &runner,
            &ToolchainConfig::default(),
            &options(root.path(), true, true),
        )
        .unwrap_err();
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 1);
    }

    #[test]
    fn configured_tool_names_are_used() {
        let root = tempfile::tempdir().unwrap();
        let runner = FakeRunner::new();
        let tools = ToolchainConfig {
            compiler: "iverilog-12".to_string(),
            simulator: "vvp".to_string(),
            viewer: "surfer".to_string(),
        };
        run_waveform_pipeline(DESIGN, &runner, &tools, &options(root.path(), false, true)).unwrap();
        assert_eq!(runner.programs(), vec!["iverilog-12", "vvp", "surfer"]);
    }

    #[test]
    fn options_from_config() {
        let config = WaveformConfig {
            keep_artifacts: true,
            open_viewer: false,
            temp_root: Some("/scratch".to_string()),
        };
        let opts = WaveformOptions::from(&config);
        assert!(opts.keep_artifacts);
        assert!(!opts.open_viewer);
        assert_eq!(opts.temp_root, Some(PathBuf::from("/scratch")));
    }
}
