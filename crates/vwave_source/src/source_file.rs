//! Source file representation with line-start indexing for line lookup.

use std::io;
use std::path::{Path, PathBuf};

/// The full text of one design file captured when a command is invoked.
///
/// Lines are delimited by `\n` only. A trailing `\r` stays part of the line,
/// so line numbers and lengths agree with what the lint scanner reports.
pub struct SourceFile {
    /// The filesystem path of this file (or a synthetic name for in-memory sources).
    pub path: PathBuf,
    /// The full text content of the file.
    pub content: String,
    /// Byte offsets of each line start (the first entry is always 0).
    line_starts: Vec<usize>,
}

impl SourceFile {
    /// Reads a source file from disk, dropping a leading byte-order mark.
    pub fn load(path: &Path) -> Result<Self, io::Error> {
        let mut content = std::fs::read_to_string(path)?;
        if content.starts_with(BOM) {
            content.drain(..BOM.len_utf8());
        }
        Ok(Self::from_text(path, content))
    }

    /// Wraps in-memory text; `name` is used as the path in diagnostics.
    pub fn from_text(name: impl Into<PathBuf>, content: String) -> Self {
        let line_starts = compute_line_starts(&content);
        Self {
            path: name.into(),
            content,
            line_starts,
        }
    }

    /// Returns the number of lines (an empty file has one empty line).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the text of the 1-based line `line`, without its `\n`.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let idx = (line as usize).checked_sub(1)?;
        let start = *self.line_starts.get(idx)?;
        let end = self
            .line_starts
            .get(idx + 1)
            .map_or(self.content.len(), |next| next - 1);
        Some(&self.content[start..end])
    }
}

const BOM: char = '\u{FEFF}';

/// Computes the byte offsets of each line start in the given content.
fn compute_line_starts(content: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for (i, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            starts.push(i + 1);
        }
    }
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_file(content: &str) -> SourceFile {
        SourceFile::from_text("test.v", content.to_string())
    }

    #[test]
    fn line_starts_computation() {
        let f = make_file("abc\ndef\nghi");
        assert_eq!(f.line_starts, vec![0, 4, 8]);
        assert_eq!(f.line_count(), 3);
    }

    #[test]
    fn line_text_lookup() {
        let f = make_file("abc\ndef\nghi");
        assert_eq!(f.line_text(1), Some("abc"));
        assert_eq!(f.line_text(2), Some("def"));
        assert_eq!(f.line_text(3), Some("ghi"));
        assert_eq!(f.line_text(0), None);
        assert_eq!(f.line_text(4), None);
    }

    #[test]
    fn trailing_newline_yields_empty_last_line() {
        let f = make_file("wire a;\n");
        assert_eq!(f.line_count(), 2);
        assert_eq!(f.line_text(2), Some(""));
    }

    #[test]
    fn carriage_return_is_kept() {
        let f = make_file("x = 1;\r\ny = 2;");
        assert_eq!(f.line_text(1), Some("x = 1;\r"));
    }

    #[test]
    fn empty_file() {
        let f = make_file("");
        assert_eq!(f.line_count(), 1);
        assert_eq!(f.line_text(1), Some(""));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counter.v");
        std::fs::write(&path, "module counter(clk);\nendmodule\n").unwrap();

        let f = SourceFile::load(&path).unwrap();
        assert_eq!(f.path, path);
        assert_eq!(f.line_text(2), Some("endmodule"));
    }

    #[test]
    fn load_strips_byte_order_mark() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bom.v");
        std::fs::write(&path, "\u{FEFF}\nwire a;").unwrap();

        let f = SourceFile::load(&path).unwrap();
        assert_eq!(f.content, "\nwire a;");
        assert_eq!(f.line_text(1), Some(""));
    }

    #[test]
    fn byte_order_mark_inside_text_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mid.v");
        std::fs::write(&path, "wire a;\u{FEFF}").unwrap();

        let f = SourceFile::load(&path).unwrap();
        assert_eq!(f.content, "wire a;\u{FEFF}");
    }

    #[test]
    fn load_missing_file_errors() {
        let err = SourceFile::load(Path::new("/nonexistent/dir/top.v"));
        assert!(err.is_err());
    }
}
