//! Module header extraction.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::TestbenchError;

lazy_static! {
    /// `module`, whitespace, an ASCII identifier, optional whitespace, then the
    /// shortest parenthesized run that stays on one line.
    static ref MODULE_HEADER: Regex =
        Regex::new(r"module\s+([A-Za-z0-9_]+)\s*\(([^\n\r\x{2028}\x{2029}]*?)\)")
            .expect("module header pattern is valid");
}

/// The name and positional port list of the first module header in a source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleSignature {
    /// The identifier following the `module` keyword.
    pub name: String,
    /// Comma-separated port tokens, trimmed, in declaration order.
    ///
    /// Tokens are not validated: `input wire a` or an empty string pass
    /// through unchanged.
    pub ports: Vec<String>,
}

impl ModuleSignature {
    /// Extracts the signature of the first module header in `source`.
    ///
    /// Only the first match is used. Returns [`TestbenchError::NoModuleFound`]
    /// when no header with a parenthesized port list exists.
    pub fn extract(source: &str) -> Result<Self, TestbenchError> {
        let caps = MODULE_HEADER
            .captures(source)
            .ok_or(TestbenchError::NoModuleFound)?;
        let name = caps[1].to_string();
        let ports = caps[2]
            .split(',')
            .map(|port| port.trim().to_string())
            .collect();
        Ok(Self { name, ports })
    }
}
