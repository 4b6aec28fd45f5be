//! `vwave wave`: simulate a design and open the resulting waveform.

use vwave_config::WaveformConfig;
use vwave_toolchain::{run_waveform_pipeline, CommandRunner, SystemRunner, WaveformOptions};

use crate::document::{open_document, Document};
use crate::{GlobalArgs, WaveArgs};

/// Runs the `vwave wave` command against the host toolchain.
pub fn run(args: &WaveArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let doc = open_document(&args.file, global)?;
    simulate(&doc, args, global, &SystemRunner)
}

fn simulate<R: CommandRunner + ?Sized>(
    doc: &Document,
    args: &WaveArgs,
    global: &GlobalArgs,
    runner: &R,
) -> Result<i32, Box<dyn std::error::Error>> {
    let options = wave_options(&doc.config.waveform, args);
    let tools = &doc.config.toolchain;

    if !global.quiet {
        eprintln!("   Simulating {}", doc.source.path.display());
    }

    let run = run_waveform_pipeline(&doc.source.content, runner, tools, &options)
        .map_err(|e| format!("Error generating waveform: {e}"))?;

    if !global.quiet {
        if run.viewed {
            eprintln!(
                "Waveform visualization started in {}",
                viewer_label(&tools.viewer)
            );
        }
        if run.kept {
            eprintln!("   Waveform: {}", run.vcd_path.display());
        }
    }

    Ok(0)
}

/// Applies `--keep` and `--no-view` on top of the `[waveform]` section.
fn wave_options(config: &WaveformConfig, args: &WaveArgs) -> WaveformOptions {
    let mut options = WaveformOptions::from(config);
    if args.keep {
        options.keep_artifacts = true;
    }
    if args.no_view {
        // Without a viewer the trace is the only result, so it must survive.
        options.open_viewer = false;
        options.keep_artifacts = true;
    }
    options
}

fn viewer_label(viewer: &str) -> &str {
    if viewer == "gtkwave" {
        "GTKWave"
    } else {
        viewer
    }
}
