use thiserror::Error;

use super::ValueKind;

/// Errors raised when reading a variable from a store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariableError {
    /// No value is stored under the name.
    #[error("missing variable: {name}")]
    Missing { name: String },

    /// The stored value has the wrong shape.
    #[error("variable {name} is not a {expected}")]
    WrongKind { name: String, expected: ValueKind },
}

impl VariableError {
    pub(crate) fn missing(name: &str) -> Self {
        Self::Missing { name: name.into() }
    }

    pub(crate) fn wrong_kind(name: &str, expected: ValueKind) -> Self {
        Self::WrongKind {
            name: name.into(),
            expected,
        }
    }
}
