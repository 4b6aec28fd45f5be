//! Shared helpers for CLI commands: resolving the target document and the
//! configuration that applies to it.

use std::path::{Path, PathBuf};

use vwave_config::ProjectConfig;
use vwave_source::{HdlKind, SourceFile};

use crate::GlobalArgs;

/// A Verilog file ready for one of the commands, with its configuration.
pub struct Document {
    /// The loaded source text.
    pub source: SourceFile,
    /// Configuration found for the file (or defaults).
    pub config: ProjectConfig,
}

/// Loads `file` as the active Verilog document.
///
/// Fails with `No active editor found` when the file does not exist and with
/// `Please open a Verilog file first` when it is not a Verilog source.
pub fn open_document(
    file: &str,
    global: &GlobalArgs,
) -> Result<Document, Box<dyn std::error::Error>> {
    let path = Path::new(file);
    if !path.is_file() {
        return Err(format!("No active editor found ({} does not exist)", path.display()).into());
    }
    ensure_verilog(path)?;

    let source = SourceFile::load(path)?;
    let config = resolve_config(global, &document_dir(path))?;
    tracing::debug!(
        path = %path.display(),
        bytes = source.content.len(),
        lines = source.line_count(),
        "opened document"
    );
    Ok(Document { source, config })
}

/// Rejects anything that is not a plain Verilog file.
pub fn ensure_verilog(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    match HdlKind::from_path(path) {
        Some(kind) if kind.is_supported() => Ok(()),
        _ => Err("Please open a Verilog file first".into()),
    }
}

/// Loads the configuration for files in `start`.
///
/// An explicit `--config` path wins; otherwise `vwave.toml` is searched for
/// from `start` upward, falling back to defaults.
pub fn resolve_config(
    global: &GlobalArgs,
    start: &Path,
) -> Result<ProjectConfig, Box<dyn std::error::Error>> {
    let config = match global.config {
        Some(ref config_path) => vwave_config::load_config_file(Path::new(config_path))?,
        None => vwave_config::load_config(start)?,
    };
    Ok(config)
}

/// The absolute directory containing `path`, for the upward config search.
fn document_dir(path: &Path) -> PathBuf {
    let absolute = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    absolute
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
