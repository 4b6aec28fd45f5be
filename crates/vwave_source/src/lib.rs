//! Source text loading and document-kind detection.
//!
//! A [`SourceFile`] holds the full text of one design file as it was at the
//! moment a command ran, together with precomputed line starts so renderers
//! can pull out a single line by number. [`HdlKind`] classifies a path by its
//! extension; only [`HdlKind::Verilog`] documents are accepted by the host
//! commands.

#![warn(missing_docs)]

pub mod kind;
pub mod source_file;

pub use kind::HdlKind;
pub use source_file::SourceFile;
