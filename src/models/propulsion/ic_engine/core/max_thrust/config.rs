use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Force, Power},
    force::newton,
    power::watt,
};

/// Solver configuration for the maximum thrust search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxThrustConfig {
    /// Number of thrust samples spanning the propeller envelope.
    pub samples: usize,

    /// Relative efficiency change below which the fixed point has settled.
    pub efficiency_rel_tol: f64,

    /// Maximum iteration count for the efficiency fixed point.
    pub max_iters: usize,

    /// Maximum iteration count for the bisection fallback.
    pub bisection_max_iters: usize,

    /// Absolute tolerance on thrust for the bisection fallback.
    pub thrust_tol: Force,

    /// Absolute tolerance on the shaft power residual for the bisection fallback.
    pub power_tol: Power,
}

impl Default for MaxThrustConfig {
    fn default() -> Self {
        Self {
            samples: 10,
            efficiency_rel_tol: 1e-2,
            max_iters: 50,
            bisection_max_iters: 100,
            thrust_tol: Force::new::<newton>(1e-6),
            power_tol: Power::new::<watt>(1e-6),
        }
    }
}

impl MaxThrustConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.bisection_max_iters,
            x_abs_tol: self.thrust_tol.get::<newton>(),
            x_rel_tol: 0.0,
            residual_tol: self.power_tol.get::<watt>(),
        }
    }
}
