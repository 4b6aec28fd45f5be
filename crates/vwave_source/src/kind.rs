//! HDL document kinds detected from file extensions.

use std::fmt;
use std::path::Path;

/// The hardware-description language a document is written in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum HdlKind {
    /// Verilog (`.v`, `.vh`, `.vl`).
    Verilog,
    /// SystemVerilog (`.sv`, `.svh`).
    SystemVerilog,
    /// VHDL (`.vhd`, `.vhdl`).
    Vhdl,
}

impl HdlKind {
    /// Detects the HDL kind from a file's extension.
    ///
    /// Returns `None` for unrecognized extensions.
    pub fn from_path(path: &Path) -> Option<HdlKind> {
        match path.extension()?.to_str()? {
            "v" | "vh" | "vl" => Some(HdlKind::Verilog),
            "sv" | "svh" => Some(HdlKind::SystemVerilog),
            "vhd" | "vhdl" => Some(HdlKind::Vhdl),
            _ => None,
        }
    }

    /// Returns `true` if the waveform and lint commands accept this kind.
    pub fn is_supported(self) -> bool {
        self == HdlKind::Verilog
    }
}

impl fmt::Display for HdlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HdlKind::Verilog => write!(f, "verilog"),
            HdlKind::SystemVerilog => write!(f, "systemverilog"),
            HdlKind::Vhdl => write!(f, "vhdl"),
        }
    }
}
