use thiserror::Error;

use crate::support::{constraint::ConstraintError, variables::VariableError};

/// Errors that can occur while computing a component or group.
#[derive(Debug, Error)]
pub enum ComponentError {
    /// An input variable was missing or had the wrong shape.
    #[error(transparent)]
    Variable(#[from] VariableError),

    /// An input value violated a physical constraint.
    #[error("invalid input {name}: {source}")]
    InvalidInput {
        /// Name of the offending variable.
        name: String,

        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// A component did not produce one of its declared outputs.
    #[error("component {component} did not produce {name}")]
    MissingOutput { component: String, name: String },

    /// A coupled group reached its iteration limit.
    #[error("coupled group did not converge after {iters} iterations: residual={residual}")]
    NotConverged {
        /// Iteration count performed.
        iters: usize,

        /// Largest relative change among watched variables at the last iteration.
        residual: f64,
    },

    /// No factory is registered under the requested key.
    #[error("unknown submodel: {key}")]
    UnknownSubmodel { key: String },

    /// The underlying model failed.
    #[error("model failed: {context}")]
    ModelFailed {
        /// Operation context for the model failure.
        context: String,

        /// Underlying model error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ComponentError {
    /// Creates a model failure error with context.
    pub(crate) fn model_failed(
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ModelFailed {
            context: context.into(),
            source: Box::new(err),
        }
    }

    /// Creates an invalid input error for a constraint violation.
    pub(crate) fn invalid_input(name: impl Into<String>, source: ConstraintError) -> Self {
        Self::InvalidInput {
            name: name.into(),
            source,
        }
    }
}
