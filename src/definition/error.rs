//! Errors for definition construction and validation.

use thiserror::Error;

/// Errors that can occur when building a machine definition.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,
}

/// Findings from the opt-in structural validation of a definition.
//
// `Display`/`Error` are implemented by hand rather than via `#[derive(Error)]`
// because thiserror treats a field named `source` as the error's
// `#[source]` (which requires `std::error::Error`). Here `source` is the
// name of the source state, not an error, so the derive cannot be used.
#[derive(Debug)]
pub enum DefinitionError {
    DanglingTarget {
        source: String,
        event: String,
        target: String,
    },
}

impl std::fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefinitionError::DanglingTarget {
                source,
                event,
                target,
            } => write!(
                f,
                "Transition '{source}' --{event}--> '{target}' points at an undeclared state"
            ),
        }
    }
}

impl std::error::Error for DefinitionError {}
