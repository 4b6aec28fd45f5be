//! `vwave lint`: line-based checks on one Verilog file.
//!
//! 1. Resolve the document and its `vwave.toml`
//! 2. Merge CLI `--allow`/`--deny` with the config's lint section
//! 3. Run the lint engine
//! 4. Render diagnostics as text, JSON, or editor ranges

use vwave_config::LintConfig;
use vwave_diagnostics::{
    to_editor_diagnostics, Diagnostic, DiagnosticRenderer, TerminalRenderer,
};
use vwave_lint::LintEngine;

use crate::document::{open_document, Document};
use crate::{GlobalArgs, LintArgs, ReportFormat};

/// Runs the `vwave lint` command.
///
/// Returns exit code 0 if no errors were reported, 1 otherwise.
pub fn run(args: &LintArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    if args.list_rules {
        print_rules(&LintEngine::with_defaults());
        return Ok(0);
    }

    let file = args.file.as_deref().ok_or("no input file given")?;
    let doc = open_document(file, global)?;

    if !global.quiet {
        eprintln!("   Linting {}", doc.source.path.display());
    }

    lint_document(&doc, args, global).map_err(|e| format!("Error linting Verilog code: {e}").into())
}

fn lint_document(
    doc: &Document,
    args: &LintArgs,
    global: &GlobalArgs,
) -> Result<i32, Box<dyn std::error::Error>> {
    let merged_config = merge_lint_config(&doc.config.lint, args);
    let engine = LintEngine::new(&merged_config);
    let diagnostics = engine.run(&doc.source.content);
    tracing::debug!(count = diagnostics.len(), "lint finished");

    match args.format {
        ReportFormat::Text => {
            let renderer = TerminalRenderer::new(global.color);
            for diag in &diagnostics {
                eprintln!("{}", renderer.render(diag, &doc.source));
            }
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&diagnostics)?);
        }
        ReportFormat::Editor => {
            let editor = to_editor_diagnostics(&diagnostics);
            println!("{}", serde_json::to_string_pretty(&editor)?);
        }
    }

    let (error_count, warning_count) = count_by_severity(&diagnostics);
    if !global.quiet && args.format == ReportFormat::Text {
        eprintln!(
            "   Result: {} error(s), {} warning(s)",
            error_count, warning_count
        );
    }

    Ok(if error_count > 0 { 1 } else { 0 })
}

fn count_by_severity(diagnostics: &[Diagnostic]) -> (usize, usize) {
    let errors = diagnostics
        .iter()
        .filter(|d| d.severity.is_error())
        .count();
    (errors, diagnostics.len() - errors)
}

fn print_rules(engine: &LintEngine) {
    for (code, name, description) in engine.rule_summaries() {
        println!("{code}  {name:<22} {description}");
    }
}

/// Merges CLI `--allow`/`--deny` flags with the config file's lint section.
///
/// CLI flags take precedence: if a rule appears in both CLI `--allow` and
/// config `deny`, the CLI `--allow` wins.
fn merge_lint_config(config: &LintConfig, args: &LintArgs) -> LintConfig {
    let mut deny = config.deny.clone();
    let mut allow = config.allow.clone();

    for rule in &args.deny {
        allow.retain(|r| r != rule);
        if !deny.contains(rule) {
            deny.push(rule.clone());
        }
    }
    for rule in &args.allow {
        deny.retain(|r| r != rule);
        if !allow.contains(rule) {
            allow.push(rule.clone());
        }
    }

    LintConfig { deny, allow }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(file: Option<String>, allow: &[&str], deny: &[&str]) -> LintArgs {
        LintArgs {
            file,
            allow: allow.iter().map(|s| s.to_string()).collect(),
            deny: deny.iter().map(|s| s.to_string()).collect(),
            format: ReportFormat::Json,
            list_rules: false,
        }
    }

    fn quiet() -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: false,
            color: false,
            config: None,
        }
    }

    fn config(deny: &[&str], allow: &[&str]) -> LintConfig {
        LintConfig {
            deny: deny.iter().map(|s| s.to_string()).collect(),
            allow: allow.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn write_design(tmp: &TempDir, text: &str) -> String {
        let file = tmp.path().join("top.v");
        fs::write(&file, text).unwrap();
        file.to_str().unwrap().to_string()
    }

    #[test]
    fn merge_config_cli_deny_overrides() {
        let merged = merge_lint_config(
            &config(&[], &["unterminated-module"]),
            &args(None, &[], &["unterminated-module"]),
        );
        assert!(merged.deny.contains(&"unterminated-module".to_string()));
        assert!(!merged.allow.contains(&"unterminated-module".to_string()));
    }

    #[test]
    fn merge_config_cli_allow_overrides() {
        let merged = merge_lint_config(
            &config(&["missing-semicolon"], &[]),
            &args(None, &["missing-semicolon"], &[]),
        );
        assert!(merged.allow.contains(&"missing-semicolon".to_string()));
        assert!(!merged.deny.contains(&"missing-semicolon".to_string()));
    }

    #[test]
    fn merge_config_combines_rules() {
        let merged = merge_lint_config(
            &config(&["rule-a"], &["rule-b"]),
            &args(None, &[], &["rule-c"]),
        );
        assert_eq!(merged.deny, vec!["rule-a", "rule-c"]);
        assert_eq!(merged.allow, vec!["rule-b"]);
    }

    #[test]
    fn merge_config_empty() {
        let merged = merge_lint_config(&LintConfig::default(), &args(None, &[], &[]));
        assert_eq!(merged, LintConfig::default());
    }

    #[test]
    fn clean_file_exits_zero() {
        let tmp = TempDir::new().unwrap();
        let file = write_design(&tmp, "wire a;\nassign a = 1'b0;\n");
        assert_eq!(run(&args(Some(file), &[], &[]), &quiet()).unwrap(), 0);
    }

    #[test]
    fn missing_semicolon_exits_one() {
        let tmp = TempDir::new().unwrap();
        let file = write_design(&tmp, "wire a\n");
        assert_eq!(run(&args(Some(file), &[], &[]), &quiet()).unwrap(), 1);
    }

    #[test]
    fn warnings_alone_exit_zero() {
        let tmp = TempDir::new().unwrap();
        let file = write_design(&tmp, "module top(a);\n");
        let code = run(&args(Some(file), &[], &[]), &quiet()).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn denied_warning_exits_one() {
        let tmp = TempDir::new().unwrap();
        let file = write_design(&tmp, "module top(a);\n");
        let code = run(&args(Some(file), &[], &["unterminated-module"]), &quiet()).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn allowed_error_exits_zero() {
        let tmp = TempDir::new().unwrap();
        let file = write_design(&tmp, "wire a\n");
        let code = run(&args(Some(file), &["missing-semicolon"], &[]), &quiet()).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn non_verilog_is_not_wrapped() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("top.sv");
        fs::write(&file, "wire a;").unwrap();
        let err = run(
            &args(Some(file.to_str().unwrap().to_string()), &[], &[]),
            &quiet(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Please open a Verilog file first");
    }

    #[test]
    fn list_rules_needs_no_file() {
        let mut list = args(None, &[], &[]);
        list.list_rules = true;
        assert_eq!(run(&list, &quiet()).unwrap(), 0);
    }

    #[test]
    fn byte_order_mark_is_not_linted() {
        let tmp = TempDir::new().unwrap();
        let file = write_design(&tmp, "\u{FEFF}wire a;\n");
        assert_eq!(run(&args(Some(file), &[], &[]), &quiet()).unwrap(), 0);
    }

    #[test]
    fn severity_counts() {
        let diags = vwave_lint::lint_source("module top (a, b)\nx = 1;");
        assert_eq!(count_by_severity(&diags), (1, 1));
    }
}
