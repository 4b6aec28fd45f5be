//! Line-oriented diagnostic records.

use crate::code::DiagnosticCode;
use crate::editor::{EditorRange, Position};
use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// A single finding reported against one source line.
///
/// `line` and `column` are 1-based. `column` and `length` count UTF-16 code
/// units, matching editor positions. Diagnostics carry no cross-line relationships; a set of them is
/// ordered by scan order only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The code of the rule that produced this diagnostic.
    pub code: DiagnosticCode,
    /// The main diagnostic message.
    pub message: String,
    /// The 1-based line number.
    pub line: u32,
    /// The 1-based column number.
    pub column: u32,
    /// The number of UTF-16 code units covered, starting at `column`.
    pub length: u32,
}

impl Diagnostic {
    /// Creates a new error diagnostic.
    pub fn error(
        code: DiagnosticCode,
        message: impl Into<String>,
        line: u32,
        column: u32,
        length: u32,
    ) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            line,
            column,
            length,
        }
    }

    /// Creates a new warning diagnostic.
    pub fn warning(
        code: DiagnosticCode,
        message: impl Into<String>,
        line: u32,
        column: u32,
        length: u32,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            line,
            column,
            length,
        }
    }

    /// Converts the 1-based location into a 0-based editor range.
    ///
    /// The start is `(line - 1, column - 1)`; the end sits `length`
    /// code units further along the same line.
    pub fn editor_range(&self) -> EditorRange {
        let line = self.line.saturating_sub(1);
        let start = self.column.saturating_sub(1);
        EditorRange {
            start: Position {
                line,
                character: start,
            },
            end: Position {
                line,
                character: start + self.length,
            },
        }
    }
}
