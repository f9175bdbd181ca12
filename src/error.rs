use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Input cannot be an empty string")]
    EmptyInput,

    #[error("Input must contain at least one alphanumeric character")]
    NoAlphanumericContent,
}

impl CaseError {
    pub fn null_input() -> Self {
        CaseError::InvalidInput("Input cannot be null or undefined".to_string())
    }

    pub fn not_a_string() -> Self {
        CaseError::InvalidInput("Input must be a string".to_string())
    }
}

pub type Result<T> = std::result::Result<T, CaseError>;
