//! Translation of diagnostics into the 0-based ranges editors expect.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;
use serde::Serialize;

/// A 0-based line/character position.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Position {
    /// The 0-based line index.
    pub line: u32,
    /// The 0-based UTF-16 code unit offset within the line.
    pub character: u32,
}

/// A half-open range between two positions on the same line.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct EditorRange {
    /// Where the range starts (inclusive).
    pub start: Position,
    /// Where the range ends (exclusive).
    pub end: Position,
}

/// A diagnostic in the shape handed to an editor's diagnostic display.
#[derive(Clone, Debug, Serialize)]
pub struct EditorDiagnostic {
    /// The 0-based range the diagnostic covers.
    pub range: EditorRange,
    /// The diagnostic message.
    pub message: String,
    /// The severity level.
    pub severity: Severity,
    /// The rule code, e.g. `E101`.
    pub code: String,
}

impl From<&Diagnostic> for EditorDiagnostic {
    fn from(diag: &Diagnostic) -> Self {
        Self {
            range: diag.editor_range(),
            message: diag.message.clone(),
            severity: diag.severity,
            code: diag.code.to_string(),
        }
    }
}

/// Converts a diagnostic set, preserving order.
pub fn to_editor_diagnostics(diags: &[Diagnostic]) -> Vec<EditorDiagnostic> {
    diags.iter().map(EditorDiagnostic::from).collect()
}
