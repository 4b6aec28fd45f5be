//! Error types for testbench generation.

/// Errors that can occur while generating a testbench.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestbenchError {
    /// The source has no `module <name> ( ... )` header.
    #[error("No module declaration found")]
    NoModuleFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_no_module_found() {
        assert_eq!(
            TestbenchError::NoModuleFound.to_string(),
            "No module declaration found"
        );
    }
}
