use thiserror::Error;

/// Library errors using thiserror for structured error handling.
///
/// Construction is the only fallible surface: navigation past a boundary or
/// to an unknown step is a silent no-op by contract, and a missing step view
/// degrades to a rendered placeholder instead of an error.

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("step mapping must contain at least one step")]
    EmptyMapping,

    #[error("wizard data must be a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },
}
