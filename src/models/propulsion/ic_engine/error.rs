use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{Length, Power};

use crate::support::{constraint::ConstraintError, interp::InterpError};

/// Errors raised by the IC engine model.
#[derive(Debug, Error)]
pub enum PropulsionError {
    /// The thrust inputs of a flight point are ambiguous or incomplete.
    #[error("inconsistent thrust inputs: {0}")]
    InconsistentThrustInputs(&'static str),

    /// A flight point column cannot be broadcast against the others.
    #[error("column {column} has length {len}, expected 1 or {expected}")]
    ShapeMismatch {
        column: &'static str,
        len: usize,
        expected: usize,
    },

    /// A requested thrust or thrust rate is invalid.
    #[error("invalid thrust demand at flight point {index}")]
    InvalidThrust {
        /// Index of the offending flight point.
        index: usize,

        #[source]
        source: ConstraintError,
    },

    #[error("unknown engine setting: {0}")]
    UnknownEngineSetting(f64),

    #[error("unknown fuel type: {0}")]
    UnknownFuelType(f64),

    #[error("unsupported stroke count: {0}")]
    UnknownStrokeCount(f64),

    #[error("unknown propulsion layout: {0}")]
    UnknownLayout(f64),

    /// The power lapse leaves no shaft power at this altitude.
    #[error("no shaft power available at altitude={altitude:?}")]
    NoAvailablePower { altitude: Length },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// Neither the efficiency fixed point nor the bisection fallback converged.
    #[error("max thrust did not converge: residual={residual:?}")]
    MaxThrustNotConverged {
        /// Shaft power mismatch at the last bisection iterate.
        residual: Power,

        /// Bisection iteration count performed.
        iters: usize,
    },

    /// A power-thrust lookup failed.
    #[error("interpolation failed")]
    Interp(#[from] InterpError),
}
