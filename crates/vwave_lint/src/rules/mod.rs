//! All built-in lint rule implementations.

mod e101;
mod w101;

pub use e101::MissingSemicolon;
pub use w101::UnterminatedModule;

use crate::LintEngine;

/// Registers the built-in rules with the engine.
///
/// Registration order is the per-line reporting order: E101, then W101.
pub fn register_builtin_rules(engine: &mut LintEngine) {
    engine.register(Box::new(MissingSemicolon));
    engine.register(Box::new(UnterminatedModule));
}
