//! Parsing and validation of optional `vwave.toml` configuration files.
//!
//! Every section has defaults that reproduce the stock behaviour (the
//! `iverilog`/`vvp`/`gtkwave` toolchain, temporary artifacts removed after a
//! run, both lint rules enabled), so a missing file is never an error.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{find_config, load_config, load_config_file, load_config_from_str, CONFIG_FILE};
pub use types::*;
