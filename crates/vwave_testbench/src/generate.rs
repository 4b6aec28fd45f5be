//! Testbench text emission.

use crate::error::TestbenchError;
use crate::signature::ModuleSignature;

/// The trace file the generated stimulus block dumps to.
pub const DUMP_FILE: &str = "sim.vcd";

/// Time units the stimulus block waits before `$finish`.
pub const STIMULUS_DELAY: u32 = 10;

/// Instance name of the design under test inside the testbench.
pub const DUT_INSTANCE: &str = "dut";

/// Generates a testbench for the first module header in `source`.
pub fn generate_testbench(source: &str) -> Result<String, TestbenchError> {
    let signature = ModuleSignature::extract(source)?;
    tracing::debug!(
        module = %signature.name,
        ports = signature.ports.len(),
        "generating testbench"
    );
    Ok(render_testbench(&signature))
}

/// Renders the testbench text for an already extracted signature.
///
/// Every port becomes a plain `reg` and is wired to the instance
/// positionally. No direction or width is inferred.
pub fn render_testbench(signature: &ModuleSignature) -> String {
    let name = &signature.name;
    let regs = signature
        .ports
        .iter()
        .map(|port| format!("reg {port};"))
        .collect::<Vec<_>>()
        .join("\n    ");
    let connections = signature.ports.join(", ");

    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("module {name}_tb;\n"));
    out.push_str(&format!("\t{regs}\n"));
    out.push_str("\t\n");
    out.push_str(&format!("\t{name} {DUT_INSTANCE}({connections});\n"));
    out.push_str("\t\n");
    out.push_str("\tinitial begin\n");
    out.push_str(&format!("\t\t$dumpfile(\"{DUMP_FILE}\");\n"));
    out.push_str(&format!("\t\t$dumpvars(0, {name}_tb);\n"));
    out.push_str("\t\t\n");
    out.push_str("\t\t// Add your test vectors here\n");
    out.push_str(&format!("\t\t#{STIMULUS_DELAY};\n"));
    out.push_str("\t\t\n");
    out.push_str("\t\t$finish;\n");
    out.push_str("\tend\n");
    out.push_str("endmodule\n");
    out.push('\t');
    out
}
