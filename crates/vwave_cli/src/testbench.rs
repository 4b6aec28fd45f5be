//! `vwave testbench`: print or write the generated testbench.

use vwave_testbench::ModuleSignature;

use crate::document::open_document;
use crate::{GlobalArgs, TestbenchArgs};

/// Runs the `vwave testbench` command.
pub fn run(args: &TestbenchArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let doc = open_document(&args.file, global)?;
    let signature = ModuleSignature::extract(&doc.source.content)?;
    let text = vwave_testbench::render_testbench(&signature);

    match args.output {
        Some(ref output) => {
            std::fs::write(output, &text)?;
            if !global.quiet {
                eprintln!(
                    "   Wrote {}_tb ({} port(s)) to {}",
                    signature.name,
                    signature.ports.len(),
                    output
                );
            }
        }
        None => print!("{text}"),
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn quiet() -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: false,
            color: false,
            config: None,
        }
    }

    #[test]
    fn writes_testbench_to_output() {
        let tmp = TempDir::new().unwrap();
        let design = tmp.path().join("adder.v");
        fs::write(&design, "module adder(x, y, sum);\nendmodule\n").unwrap();
        let output = tmp.path().join("adder_tb.v");

        let args = TestbenchArgs {
            file: design.to_str().unwrap().to_string(),
            output: Some(output.to_str().unwrap().to_string()),
        };
        assert_eq!(run(&args, &quiet()).unwrap(), 0);

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("\nmodule adder_tb;\n"));
        assert!(text.contains("\tadder dut(x, y, sum);\n"));
    }

    #[test]
    fn no_module_is_error() {
        let tmp = TempDir::new().unwrap();
        let design = tmp.path().join("empty.v");
        fs::write(&design, "// nothing here\n").unwrap();
        let args = TestbenchArgs {
            file: design.to_str().unwrap().to_string(),
            output: None,
        };
        let err = run(&args, &quiet()).unwrap_err();
        assert_eq!(err.to_string(), "No module declaration found");
    }
}
