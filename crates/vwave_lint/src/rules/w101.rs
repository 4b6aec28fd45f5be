//! W101: Unterminated module. `module` appears on a line without `endmodule`.

use vwave_diagnostics::{Category, Diagnostic, DiagnosticCode, Severity};

use crate::{LintRule, SourceLine};

/// Flags lines that contain `module` but not `endmodule`.
///
/// Only same-line co-occurrence is checked, so a module whose `endmodule`
/// sits on a later line is still flagged at its header. Matching is by
/// substring: `submodule` or a `module` inside a comment count as well.
/// The diagnostic covers the whole raw line.
pub struct UnterminatedModule;

impl LintRule for UnterminatedModule {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 101)
    }

    fn name(&self) -> &str {
        "unterminated-module"
    }

    fn description(&self) -> &str {
        "module keyword without endmodule on the same line"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_line(&self, line: SourceLine<'_>, out: &mut Vec<Diagnostic>) {
        if !line.text.contains("module") || line.text.contains("endmodule") {
            return;
        }
        out.push(self.diagnostic(
            "Module declaration should be followed by endmodule",
            line.number,
            1,
            line.utf16_len(),
        ));
    }
}
