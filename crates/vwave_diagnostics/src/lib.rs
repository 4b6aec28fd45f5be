//! Diagnostic records, severity levels, editor translation, and rendering.
//!
//! This crate provides the line-oriented [`Diagnostic`] produced by the lint
//! scanner, the closed [`Severity`] enumeration, [`EditorDiagnostic`] for the
//! 0-based ranges an editor displays, and [`TerminalRenderer`] for
//! human-readable output.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod editor;
pub mod renderer;
pub mod severity;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use editor::{to_editor_diagnostics, EditorDiagnostic, EditorRange, Position};
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
