use thiserror::Error;

use crate::support::interp::InterpError;

/// Errors raised when building a [`PropellerMap`](super::PropellerMap).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PropellerMapError {
    /// A table has no points or mismatched lengths.
    #[error("invalid propeller table")]
    Table(#[from] InterpError),

    /// An efficiency entry is zero, negative, or NaN.
    #[error("efficiency must be positive at speed={speed} m/s, thrust={thrust} N")]
    NonPositiveEfficiency {
        /// Airspeed of the offending entry, in m/s.
        speed: f64,

        /// Thrust of the offending entry, in N.
        thrust: f64,
    },
}
