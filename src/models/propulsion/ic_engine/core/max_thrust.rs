//! Maximum thrust of a propeller driven by a power-limited engine.
//!
//! Thrust is bounded both by the propeller envelope and by the shaft power
//! the engine delivers at altitude. The envelope is sampled evenly and the
//! power each sample needs is interpolated against the power available. When
//! even the lightest sample needs more power than is available, the efficiency
//! fixed point `T = P·η(T)/V` is iterated instead, with bisection on the power
//! balance as a fallback.

mod config;
mod problem;

pub use config::MaxThrustConfig;

use log::{debug, warn};
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Force, Length, Power, Velocity},
    force::newton,
    power::watt,
    ratio::ratio,
    velocity::meter_per_second,
};

use crate::models::propulsion::{ic_engine::PropulsionError, propeller::Propeller};
use crate::support::interp::{interp1d, linspace};

use problem::{PowerBalanceProblem, ShaftPowerModel};

/// Finds the maximum thrust at a flight condition.
///
/// # Errors
///
/// Returns [`PropulsionError::NoAvailablePower`] if no shaft power is left at
/// this altitude, or [`PropulsionError::MaxThrustNotConverged`] if neither the
/// fixed point nor the bisection fallback settles.
pub(super) fn max_thrust(
    propeller: &Propeller,
    available: Power,
    altitude: Length,
    airspeed: Velocity,
    config: &MaxThrustConfig,
) -> Result<Force, PropulsionError> {
    let available_w = available.get::<watt>();
    if available_w.is_nan() || available_w <= 0.0 {
        return Err(PropulsionError::NoAvailablePower { altitude });
    }

    let limit = propeller.thrust_limit(airspeed, altitude);
    let thrusts = linspace(
        propeller.min_thrust().get::<newton>(),
        limit.get::<newton>(),
        config.samples.max(2),
    );
    let powers: Vec<f64> = thrusts
        .iter()
        .map(|&t| {
            propeller
                .required_shaft_power(Force::new::<newton>(t), airspeed, altitude)
                .get::<watt>()
        })
        .collect();

    let lightest = powers.iter().copied().fold(f64::INFINITY, f64::min);
    if lightest <= available_w {
        let thrust = interp1d(available_w, &powers, &thrusts)?;
        return Ok(Force::new::<newton>(thrust));
    }

    let first = Force::new::<newton>(thrusts[0]);
    if let Some(thrust) =
        efficiency_fixed_point(propeller, available, altitude, airspeed, first, config)
    {
        return Ok(thrust);
    }

    warn!(
        "efficiency fixed point did not settle in {} iterations, bisecting power balance",
        config.max_iters
    );
    bisect_power_balance(propeller, available, altitude, airspeed, first, config)
}

/// Iterates `T = P·η/V`, re-evaluating η at each new thrust.
///
/// Starts from the efficiency at `start` and returns `None` if the relative
/// change in efficiency is still above tolerance after `max_iters`.
fn efficiency_fixed_point(
    propeller: &Propeller,
    available: Power,
    altitude: Length,
    airspeed: Velocity,
    start: Force,
    config: &MaxThrustConfig,
) -> Option<Force> {
    let speed = airspeed.get::<meter_per_second>();
    let power = available.get::<watt>();
    let mut eta = propeller.efficiency(start, airspeed, altitude).get::<ratio>();

    for iter in 1..=config.max_iters {
        let thrust = Force::new::<newton>(power * eta / speed);
        let next = propeller.efficiency(thrust, airspeed, altitude).get::<ratio>();
        let change = ((next - eta) / eta).abs();
        eta = next;

        if change < config.efficiency_rel_tol {
            debug!("efficiency fixed point settled after {iter} iterations: change={change:e}");
            return Some(thrust);
        }
    }
    None
}

/// Bisects `T·V/η(T) − P` on `[0, upper]`.
fn bisect_power_balance(
    propeller: &Propeller,
    available: Power,
    altitude: Length,
    airspeed: Velocity,
    upper: Force,
    config: &MaxThrustConfig,
) -> Result<Force, PropulsionError> {
    let model = ShaftPowerModel::new(propeller, airspeed, altitude);
    let problem = PowerBalanceProblem::new(available);

    let solution = bisection::solve(
        &model,
        &problem,
        [0.0, upper.get::<newton>()],
        &config.bisection(),
        |_event: &bisection::Event<'_, _, _>| None,
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(PropulsionError::MaxThrustNotConverged {
            residual: Power::new::<watt>(solution.residual),
            iters: solution.iters,
        });
    }

    debug!(
        "power balance bisection converged after {} iterations",
        solution.iters
    );
    Ok(solution.snapshot.output.thrust)
}
