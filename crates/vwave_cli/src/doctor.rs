//! `vwave doctor`: report missing external tools.

use vwave_toolchain::{probe_dependencies, CommandRunner, DependencyReport, Platform, SystemRunner};

use crate::document::resolve_config;
use crate::GlobalArgs;

/// Runs the `vwave doctor` command.
///
/// Missing tools produce an advisory, never a failure: the exit code is 0.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(global, &std::env::current_dir()?)?;
    let report = check(&SystemRunner, &config.toolchain);
    Ok(report_status(&report, global))
}

fn check<R: CommandRunner + ?Sized>(
    runner: &R,
    tools: &vwave_config::ToolchainConfig,
) -> DependencyReport {
    probe_dependencies(runner, tools, Platform::current())
}

fn report_status(report: &DependencyReport, global: &GlobalArgs) -> i32 {
    match report.advisory() {
        Some(advisory) => eprintln!("{advisory}"),
        None if !global.quiet => eprintln!("   All dependencies found"),
        None => {}
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;
    use vwave_toolchain::{Invocation, ProcessOutput, ToolchainError};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    struct Nothing;

    impl CommandRunner for Nothing {
        fn run(&self, invocation: &Invocation) -> Result<ProcessOutput, ToolchainError> {
            Err(ToolchainError::Spawn {
                tool: invocation.program.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            })
        }
    }

    #[test]
    fn missing_tools_still_exit_zero() {
        let report = check(&Nothing, &vwave_config::ToolchainConfig::default());
        assert!(!report.compiler_available);
        assert!(!report.viewer_available);
        let global = GlobalArgs {
            quiet: false,
            verbose: false,
            color: false,
            config: None,
        };
        assert_eq!(report_status(&report, &global), 0);
    }

    #[test]
    fn missing_tools_log_at_debug_only() {
        let logs = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(logs.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            check(&Nothing, &vwave_config::ToolchainConfig::default());
        });

        let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("tool not found"));
        assert!(!text.contains("WARN"));
    }
}
