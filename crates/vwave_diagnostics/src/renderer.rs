//! Diagnostic rendering for human-readable terminal output.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;
use vwave_source::SourceFile;

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    fn render(&self, diag: &Diagnostic, source: &SourceFile) -> String;
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// error[E101]: Missing semicolon
///   --> src/top.v:2:6
///   |
/// 2 | y = 2
///   |      ^
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn header(&self, diag: &Diagnostic) -> String {
        let head = format!("{}[{}]", diag.severity, diag.code);
        if !self.color {
            return format!("{head}: {}", diag.message);
        }
        let ansi = match diag.severity {
            Severity::Error => "\x1b[1;31m",
            Severity::Warning => "\x1b[1;33m",
        };
        format!("{ansi}{head}\x1b[0m\x1b[1m: {}\x1b[0m", diag.message)
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic, source: &SourceFile) -> String {
        let mut out = String::new();

        out.push_str(&self.header(diag));
        out.push('\n');
        out.push_str(&format!(
            "  --> {}:{}:{}\n",
            source.path.display(),
            diag.line,
            diag.column
        ));

        if let Some(line_content) = source.line_text(diag.line) {
            let line_num = diag.line.to_string();
            let padding = " ".repeat(line_num.len());
            let line_content = line_content.trim_end_matches('\r');

            out.push_str(&format!("{padding} |\n"));
            out.push_str(&format!("{line_num} | {line_content}\n"));

            let carets = "^".repeat(diag.length.max(1) as usize);
            let col_padding = " ".repeat((diag.column as usize).saturating_sub(1));
            out.push_str(&format!("{padding} | {col_padding}{carets}\n"));
        }

        out
    }
}
