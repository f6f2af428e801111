//! Problem formulation for the power-limited thrust fallback.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Force, Length, Power, Velocity},
    force::newton,
    power::watt,
};

use crate::models::propulsion::propeller::Propeller;

/// Thrust paired with the shaft power it requires.
#[derive(Debug, Clone, Copy)]
pub(super) struct ShaftPower {
    pub(super) thrust: Force,
    pub(super) power: Power,
}

/// Shaft power required by the propeller at a fixed flight condition.
pub(super) struct ShaftPowerModel<'a> {
    propeller: &'a Propeller,
    airspeed: Velocity,
    altitude: Length,
}

impl<'a> ShaftPowerModel<'a> {
    pub(super) fn new(propeller: &'a Propeller, airspeed: Velocity, altitude: Length) -> Self {
        Self {
            propeller,
            airspeed,
            altitude,
        }
    }
}

impl Model for ShaftPowerModel<'_> {
    type Input = Force;
    type Output = ShaftPower;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(ShaftPower {
            thrust: *input,
            power: self
                .propeller
                .required_shaft_power(*input, self.airspeed, self.altitude),
        })
    }
}

/// Equation problem balancing required against available shaft power.
///
/// Computes the residual as `required - available`.
pub(super) struct PowerBalanceProblem {
    available: Power,
}

impl PowerBalanceProblem {
    pub(super) fn new(available: Power) -> Self {
        Self { available }
    }
}

impl EquationProblem<1> for PowerBalanceProblem {
    type Input = Force;
    type Output = ShaftPower;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Force::new::<newton>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.power.get::<watt>() - self.available.get::<watt>()])
    }
}
