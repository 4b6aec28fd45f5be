//! vwave CLI: lint Verilog designs and view their simulated waveforms.
//!
//! Provides `vwave lint` for the line-based checks, `vwave wave` for the
//! compile/simulate/view pipeline, `vwave testbench` for printing the
//! generated testbench, and `vwave doctor` for checking the external tools.

#![warn(missing_docs)]

mod doctor;
mod document;
mod lint;
mod logging;
mod testbench;
mod wave;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// vwave, the Verilog waveform and lint helper.
#[derive(Parser, Debug)]
#[command(name = "vwave", version, about = "Verilog waveform visualizer and linter")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a custom `vwave.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the lint checks on a Verilog file.
    Lint(LintArgs),
    /// Simulate a Verilog file and open the waveform.
    Wave(WaveArgs),
    /// Print the testbench generated for a Verilog file.
    Testbench(TestbenchArgs),
    /// Check that the external compiler and viewer are installed.
    Doctor,
}

/// Arguments for the `vwave lint` subcommand.
#[derive(Parser, Debug)]
pub struct LintArgs {
    /// The Verilog file to check.
    #[arg(required_unless_present = "list_rules")]
    pub file: Option<String>,

    /// Rule names to suppress (e.g., `--allow missing-semicolon`).
    #[arg(long, num_args = 1..)]
    pub allow: Vec<String>,

    /// Rule names to promote to errors (e.g., `--deny unterminated-module`).
    #[arg(long, num_args = 1..)]
    pub deny: Vec<String>,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Print the available rules and exit.
    #[arg(long)]
    pub list_rules: bool,
}

/// Arguments for the `vwave wave` subcommand.
#[derive(Parser, Debug)]
pub struct WaveArgs {
    /// The Verilog design to simulate.
    pub file: String,

    /// Keep the simulation directory after the run.
    #[arg(long)]
    pub keep: bool,

    /// Skip launching the viewer (implies `--keep`).
    #[arg(long)]
    pub no_view: bool,
}

/// Arguments for the `vwave testbench` subcommand.
#[derive(Parser, Debug)]
pub struct TestbenchArgs {
    /// The Verilog design to generate a testbench for.
    pub file: String,

    /// Write the testbench here instead of standard output.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON with 1-based positions.
    Json,
    /// JSON with 0-based editor ranges.
    Editor,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    logging::init_tracing(cli.verbose, cli.quiet);

    let color = match cli.color {
        ColorChoice::Auto => atty_is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Lint(ref args) => lint::run(args, &global),
        Command::Wave(ref args) => wave::run(args, &global),
        Command::Testbench(ref args) => testbench::run(args, &global),
        Command::Doctor => doctor::run(&global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Rough terminal detection from the `TERM` environment variable.
fn atty_is_terminal() -> bool {
    std::env::var("TERM").is_ok()
}
