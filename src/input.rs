use crate::error::{CaseError, Result};
use serde_json::Value;

/// Anything a converter can be handed.
///
/// Typed strings always yield text. `Option` and JSON values cover inputs that
/// arrive without a static type, where null and non-string values are rejected.
pub trait CaseInput {
    fn as_text(&self) -> Result<&str>;
}

impl CaseInput for str {
    fn as_text(&self) -> Result<&str> {
        Ok(self)
    }
}

impl CaseInput for String {
    fn as_text(&self) -> Result<&str> {
        Ok(self.as_str())
    }
}

impl<T: AsRef<str>> CaseInput for Option<T> {
    fn as_text(&self) -> Result<&str> {
        match self {
            Some(text) => Ok(text.as_ref()),
            None => Err(CaseError::null_input()),
        }
    }
}

impl CaseInput for Value {
    fn as_text(&self) -> Result<&str> {
        match self {
            Value::String(text) => Ok(text.as_str()),
            Value::Null => Err(CaseError::null_input()),
            _ => Err(CaseError::not_a_string()),
        }
    }
}
