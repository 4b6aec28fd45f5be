//! Lint engine that manages rule registration, configuration, and execution.
//!
//! The `LintEngine` accepts a `LintConfig` to control which rules are denied
//! or allowed, then walks the source line by line running each enabled rule.

use std::collections::HashSet;

use vwave_config::LintConfig;
use vwave_diagnostics::{Diagnostic, Severity};

use crate::rules::register_builtin_rules;
use crate::{LintRule, SourceLine};

/// The lint engine that orchestrates running lint rules over source text.
///
/// Rules are registered at construction time. The engine respects the
/// `LintConfig` to suppress rules (allow) or promote them to errors (deny).
pub struct LintEngine {
    /// All registered lint rules, in the order they run on each line.
    rules: Vec<Box<dyn LintRule>>,
    /// Rule names that should be promoted to error severity.
    denied: HashSet<String>,
    /// Rule names that should be suppressed (not reported).
    allowed: HashSet<String>,
}

impl LintEngine {
    /// Creates a new lint engine configured by the given `LintConfig`.
    ///
    /// All builtin rules are registered automatically.
    pub fn new(config: &LintConfig) -> Self {
        let denied: HashSet<String> = config.deny.iter().cloned().collect();
        let allowed: HashSet<String> = config.allow.iter().cloned().collect();

        let mut engine = Self {
            rules: Vec::new(),
            denied,
            allowed,
        };

        register_builtin_rules(&mut engine);
        engine
    }

    /// Creates a new lint engine with default configuration (no overrides).
    pub fn with_defaults() -> Self {
        Self::new(&LintConfig::default())
    }

    /// Registers a lint rule with the engine. It runs after all earlier rules.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    /// Returns the number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all registered rules.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns `(code, name, description)` for every registered rule.
    pub fn rule_summaries(&self) -> Vec<(String, &str, &str)> {
        self.rules
            .iter()
            .map(|r| (r.code().to_string(), r.name(), r.description()))
            .collect()
    }

    /// Runs all enabled rules over every line of `source`.
    ///
    /// Lines are split on `\n` and visited top to bottom; on each line the
    /// rules run in registration order. Diagnostics from denied rules are
    /// promoted to [`Severity::Error`].
    pub fn run(&self, source: &str) -> Vec<Diagnostic> {
        let active: Vec<(&dyn LintRule, bool)> = self
            .rules
            .iter()
            .filter(|rule| !self.allowed.contains(rule.name()))
            .map(|rule| (rule.as_ref(), self.denied.contains(rule.name())))
            .collect();

        let mut diagnostics = Vec::new();
        for (idx, text) in source.split('\n').enumerate() {
            let line = SourceLine {
                number: idx as u32 + 1,
                text,
            };
            for (rule, is_denied) in &active {
                let first_new = diagnostics.len();
                rule.check_line(line, &mut diagnostics);
                if *is_denied {
                    for diag in &mut diagnostics[first_new..] {
                        diag.severity = Severity::Error;
                    }
                }
            }
        }

        tracing::debug!(
            rules = active.len(),
            diagnostics = diagnostics.len(),
            "lint run finished"
        );
        diagnostics
    }
}
