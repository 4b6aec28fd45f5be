//! Availability checks for the external compiler and viewer.

use std::fmt;

use vwave_config::ToolchainConfig;

use crate::runner::{CommandRunner, Invocation};

/// Host platform, used only to pick installation instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// macOS.
    MacOs,
    /// Linux.
    Linux,
    /// Windows.
    Windows,
    /// Anything else; no instructions are offered.
    Other,
}

impl Platform {
    /// The platform this binary is running on.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` value to a platform.
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Platform::MacOs,
            "linux" => Platform::Linux,
            "windows" => Platform::Windows,
            _ => Platform::Other,
        }
    }

    fn install_hint(self) -> &'static str {
        match self {
            Platform::MacOs => "macOS: brew install icarus-verilog gtkwave",
            Platform::Linux => {
                "Ubuntu/Debian: sudo apt-get install iverilog gtkwave\n\
                 Fedora: sudo dnf install iverilog gtkwave"
            }
            Platform::Windows => {
                "Windows: Download and install from:\n\
                 1. Icarus Verilog: http://bleyer.org/icarus/\n\
                 2. GTKWave: http://gtkwave.sourceforge.net/"
            }
            Platform::Other => "",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
            Platform::Windows => "windows",
            Platform::Other => "other",
        };
        f.write_str(name)
    }
}

/// Which external tools answered a version query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DependencyReport {
    /// The compiler (Icarus Verilog) is callable.
    pub compiler_available: bool,
    /// The viewer (GTKWave) is callable.
    pub viewer_available: bool,
    /// Platform whose install instructions the advisory carries.
    pub platform: Platform,
}

impl DependencyReport {
    /// True when nothing is missing.
    pub fn all_available(&self) -> bool {
        self.compiler_available && self.viewer_available
    }

    /// The advisory shown when something is missing, `None` otherwise.
    pub fn advisory(&self) -> Option<String> {
        if self.all_available() {
            return None;
        }

        let mut message = String::from("Required dependencies are missing:\n");
        if !self.compiler_available {
            message.push_str("- Icarus Verilog\n");
        }
        if !self.viewer_available {
            // The blank separator line only follows the viewer bullet.
            message.push_str("- GTKWave\n\n");
        }
        message.push_str("Please install the missing dependencies:\n");
        message.push_str(self.platform.install_hint());
        Some(message)
    }
}

/// Asks `<compiler> --version` and `<viewer> --version` whether they run.
///
/// A tool counts as available only if it starts and exits successfully.
/// Probing never fails; problems are folded into the report.
pub fn probe_dependencies<R: CommandRunner + ?Sized>(
    runner: &R,
    tools: &ToolchainConfig,
    platform: Platform,
) -> DependencyReport {
    DependencyReport {
        compiler_available: responds(runner, &tools.compiler),
        viewer_available: responds(runner, &tools.viewer),
        platform,
    }
}

fn responds<R: CommandRunner + ?Sized>(runner: &R, program: &str) -> bool {
    match runner.run(&Invocation::new(program, ["--version"])) {
        Ok(output) if output.success => {
            let version = output.stdout.lines().next().unwrap_or_default();
            tracing::debug!(program, version, "tool available");
            true
        }
        Ok(output) => {
            tracing::debug!(program, status = %output.status_text(), "version query failed");
            false
        }
        Err(e) => {
            tracing::debug!(program, error = %e, "tool not found");
            false
        }
    }
}
