//! Line-based lint rules and engine for Verilog source text.
//!
//! The checks here are superficial pattern matches applied to one line at a
//! time; no grammar is parsed. Each line is examined independently, so a
//! diagnostic for line N never depends on the content of any other line.
//!
//! # Rules
//!
//! - **E101 `missing-semicolon`:** a non-blank line whose trimmed text does not
//!   end in `;`. Fires on comments, block keywords and module headers too.
//! - **W101 `unterminated-module`:** a line mentioning `module` without also
//!   mentioning `endmodule` on that same line.

#![warn(missing_docs)]

mod engine;
mod rules;

pub use engine::LintEngine;
pub use rules::register_builtin_rules;
pub use rules::{MissingSemicolon, UnterminatedModule};

use vwave_diagnostics::{Diagnostic, DiagnosticCode, Severity};

/// One line of source text handed to a rule.
#[derive(Clone, Copy, Debug)]
pub struct SourceLine<'a> {
    /// The 1-based line number.
    pub number: u32,
    /// The raw line text without its `\n` (a `\r` is kept).
    pub text: &'a str,
}

impl SourceLine<'_> {
    /// Returns the line length in UTF-16 code units, the unit editors use
    /// for positions. Characters outside the BMP count twice.
    pub fn utf16_len(&self) -> u32 {
        self.text.encode_utf16().count() as u32
    }
}

/// A single lint rule that checks one line at a time.
///
/// Each rule has a unique diagnostic code, a kebab-case name used by
/// allow/deny configuration, a description, and a default severity.
pub trait LintRule: Send + Sync {
    /// Returns the diagnostic code for this rule (e.g., E101).
    fn code(&self) -> DiagnosticCode;

    /// Returns the short kebab-case name of this rule (e.g., "missing-semicolon").
    fn name(&self) -> &str;

    /// Returns a human-readable description of what this rule checks.
    fn description(&self) -> &str;

    /// Returns the default severity for diagnostics emitted by this rule.
    fn default_severity(&self) -> Severity;

    /// Checks one line and appends any findings to `out`.
    fn check_line(&self, line: SourceLine<'_>, out: &mut Vec<Diagnostic>);

    /// Builds a diagnostic for this rule at its default severity.
    fn diagnostic(&self, message: &str, line: u32, column: u32, length: u32) -> Diagnostic {
        match self.default_severity() {
            Severity::Error => Diagnostic::error(self.code(), message, line, column, length),
            Severity::Warning => Diagnostic::warning(self.code(), message, line, column, length),
        }
    }
}

/// Lints `source` with both built-in rules at their default severities.
///
/// Total: never fails, and returns an empty set for empty input. Output is
/// ordered by line, then by rule (E101 before W101 on the same line).
pub fn lint_source(source: &str) -> Vec<Diagnostic> {
    LintEngine::with_defaults().run(source)
}
