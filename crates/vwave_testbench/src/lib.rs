//! Testbench scaffolding for Verilog modules.
//!
//! Finds the first `module <name> ( ... )` header in a source text and emits a
//! minimal `<name>_tb` wrapper: one `reg` per port, a positional instance of
//! the design, and an `initial` block that dumps a VCD trace and finishes
//! after a fixed delay. The generator is deliberately naive; it does not infer
//! port directions or widths, so the output is a skeleton to be filled in.

#![warn(missing_docs)]

pub mod error;
pub mod generate;
pub mod signature;

pub use error::TestbenchError;
pub use generate::{generate_testbench, render_testbench, DUMP_FILE, DUT_INSTANCE, STIMULUS_DELAY};
pub use signature::ModuleSignature;
