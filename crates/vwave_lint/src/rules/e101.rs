//! E101: Missing semicolon. A non-blank line that does not end in `;`.

use vwave_diagnostics::{Category, Diagnostic, DiagnosticCode, Severity};

use crate::{LintRule, SourceLine};

/// Flags every non-blank line whose trimmed text does not end with `;`.
///
/// This is not a syntax check. Comments, `begin`/`end`, `always`, `initial`
/// and module headers all trip it. The diagnostic points one column past
/// the end of the raw line with a length of 1.
pub struct MissingSemicolon;

impl LintRule for MissingSemicolon {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 101)
    }

    fn name(&self) -> &str {
        "missing-semicolon"
    }

    fn description(&self) -> &str {
        "non-blank line does not end with a semicolon"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check_line(&self, line: SourceLine<'_>, out: &mut Vec<Diagnostic>) {
        let trimmed = line.text.trim();
        if trimmed.is_empty() || trimmed.ends_with(';') {
            return;
        }
        out.push(self.diagnostic(
            "Missing semicolon",
            line.number,
            line.utf16_len() + 1,
            1,
        ));
    }
}
