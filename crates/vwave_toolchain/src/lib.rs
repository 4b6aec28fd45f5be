//! External toolchain orchestration for waveform generation.
//!
//! Writes the design and a generated testbench into a per-run
//! [`SimWorkspace`], drives the compiler, simulator and viewer through a
//! [`CommandRunner`], and checks whether those tools are installed at all.

#![warn(missing_docs)]

pub mod error;
pub mod pipeline;
pub mod probe;
pub mod runner;
pub mod workspace;

pub use error::ToolchainError;
pub use pipeline::{run_waveform_pipeline, WaveformOptions, WaveformRun};
pub use probe::{probe_dependencies, DependencyReport, Platform};
pub use runner::{run_checked, CommandRunner, Invocation, ProcessOutput, SystemRunner};
pub use workspace::SimWorkspace;
