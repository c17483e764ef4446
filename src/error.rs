//! Error types for the generator API.

use crate::validation::ValidationError;

/// Error returned when a generation run cannot start.
///
/// Infeasible shifts are not errors: they are reported on
/// [`GenerationOutcome`](crate::generator::GenerationOutcome).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
    /// The input failed validation.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
}

impl GenerateError {
    /// The validation problems behind this error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
        }
    }
}

impl From<Vec<ValidationError>> for GenerateError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
