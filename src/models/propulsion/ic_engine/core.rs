mod descriptor;
mod max_thrust;
mod sfc;

pub use descriptor::{EngineDimensions, NacelleDimensions, uninstalled_mass};
pub use max_thrust::MaxThrustConfig;

use uom::si::{
    f64::{Area, Force, Length, Power, Velocity},
    force::newton,
    ratio::ratio,
};

use crate::models::aerodynamics::nacelle_drag::{NacelleDragError, nacelle_drag_area};
use crate::models::propulsion::propeller::Propeller;
use crate::support::{
    atmosphere::Atmosphere,
    constraint::{Constrained, StrictlyPositive},
    units::{PowerSpecificFuelConsumption, SpecificFuelConsumption, UnitReynolds},
};

use super::{
    FlightPoints, FlightPointsOutput, FuelType, PropulsionError, PropulsionLayout, StrokeCount,
    flight_point::Demand,
};

/// Mach numbers of exactly zero are replaced by this value.
const MIN_MACH: f64 = 1e-12;

/// Thrust floor used when dividing fuel flow by thrust.
const MIN_THRUST: f64 = 1e-6;

/// Parameters describing a reciprocating engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IcEngineParams {
    /// Sea-level maximum shaft power.
    pub max_power: Constrained<Power, StrictlyPositive>,
    pub fuel_type: FuelType,
    pub strokes: StrokeCount,
    pub layout: PropulsionLayout,
}

/// Parametric internal combustion engine driving a propeller.
///
/// Engine and nacelle dimensions are scaled from a reference engine once, at
/// construction. All other quantities are evaluated per flight condition.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicIcEngine {
    params: IcEngineParams,
    propeller: Propeller,
    engine: EngineDimensions,
    nacelle: NacelleDimensions,
    config: MaxThrustConfig,
}

impl BasicIcEngine {
    /// Creates an engine with the default maximum thrust solver settings.
    #[must_use]
    pub fn new(params: IcEngineParams, propeller: Propeller) -> Self {
        let engine = EngineDimensions::scaled(params.max_power.into_inner(), params.fuel_type);
        let nacelle = NacelleDimensions::around(&engine, params.layout);

        Self {
            params,
            propeller,
            engine,
            nacelle,
            config: MaxThrustConfig::default(),
        }
    }

    /// Replaces the maximum thrust solver settings.
    #[must_use]
    pub fn with_config(mut self, config: MaxThrustConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn params(&self) -> &IcEngineParams {
        &self.params
    }

    #[must_use]
    pub fn propeller(&self) -> &Propeller {
        &self.propeller
    }

    #[must_use]
    pub fn engine(&self) -> &EngineDimensions {
        &self.engine
    }

    #[must_use]
    pub fn nacelle(&self) -> &NacelleDimensions {
        &self.nacelle
    }

    #[must_use]
    pub fn config(&self) -> &MaxThrustConfig {
        &self.config
    }

    /// Shaft power available at `altitude` after density lapse.
    #[must_use]
    pub fn available_power(&self, altitude: Length) -> Power {
        sfc::available_power(self.max_power(), &Atmosphere::new(altitude))
    }

    /// Power-specific fuel consumption at full available power.
    #[must_use]
    pub fn sfc_at_max_power(&self, altitude: Length) -> PowerSpecificFuelConsumption {
        sfc::sfc_at_max_power(
            self.max_power(),
            self.params.fuel_type,
            self.params.strokes,
            &Atmosphere::new(altitude),
        )
    }

    /// Part-power SFC ratio and the shaft power drawn to deliver `thrust`.
    #[must_use]
    pub fn sfc_ratio(&self, thrust: Force, airspeed: Velocity, altitude: Length) -> (f64, Power) {
        let power = self
            .propeller
            .required_shaft_power(thrust, airspeed, altitude);
        let power_rate = (power / self.available_power(altitude)).get::<ratio>();
        (sfc::sfc_ratio(power_rate), power)
    }

    /// Maximum thrust at a flight condition.
    ///
    /// # Errors
    ///
    /// Returns [`PropulsionError::NoAvailablePower`] above the altitude where
    /// the power lapse reaches zero, or a solver error if the power-limited
    /// search does not converge.
    pub fn max_thrust(&self, airspeed: Velocity, altitude: Length) -> Result<Force, PropulsionError> {
        max_thrust::max_thrust(
            &self.propeller,
            self.available_power(altitude),
            altitude,
            airspeed,
            &self.config,
        )
    }

    /// Parasite drag area of the nacelle, including wing interference.
    ///
    /// # Errors
    ///
    /// Returns [`NacelleDragError`] if the nacelle Reynolds number is too low
    /// for the skin friction correlation.
    pub fn nacelle_drag_area(
        &self,
        mach: f64,
        unit_reynolds: UnitReynolds,
        wing_mac: Length,
    ) -> Result<Area, NacelleDragError> {
        nacelle_drag_area(&self.nacelle, mach, unit_reynolds, wing_mac)
    }

    /// Computes fuel consumption, thrust rate, and thrust at each flight point.
    ///
    /// Points demanding a thrust rate get that fraction of the maximum thrust.
    /// Points demanding a thrust are capped at the maximum thrust. The output
    /// is scalar only if every input column is scalar.
    ///
    /// # Errors
    ///
    /// Returns [`PropulsionError`] if the columns cannot be broadcast, the
    /// thrust demand is ambiguous or out of range, or the maximum thrust at a
    /// point cannot be found.
    pub fn compute_flight_points(
        &self,
        points: &FlightPoints,
    ) -> Result<FlightPointsOutput, PropulsionError> {
        let shape = points.shape()?;
        let demand = points.thrust_demand()?;

        let mut sfc = Vec::with_capacity(shape.len);
        let mut thrust_rate = Vec::with_capacity(shape.len);
        let mut thrust = Vec::with_capacity(shape.len);

        for index in 0..shape.len {
            let altitude = points.altitude.at(index);
            let mach = match points.mach.at(index) {
                mach if mach == 0.0 => MIN_MACH,
                mach => mach,
            };
            let airspeed = Atmosphere::new(altitude).true_airspeed(mach);
            let max_thrust = self.max_thrust(airspeed, altitude)?;

            let delivered = match demand.at(index)? {
                Demand::Rate(rate) => max_thrust * rate,
                Demand::Thrust(required) => required.min(max_thrust),
            };

            let (part_power, power) = self.sfc_ratio(delivered, airspeed, altitude);
            let floor = delivered.max(Force::new::<newton>(MIN_THRUST));
            let point_sfc: SpecificFuelConsumption =
                self.sfc_at_max_power(altitude) * part_power * power / floor;

            sfc.push(point_sfc);
            thrust_rate.push((delivered / max_thrust).get::<ratio>());
            thrust.push(delivered);
        }

        Ok(FlightPointsOutput {
            sfc: shape.column(sfc),
            thrust_rate: shape.column(thrust_rate),
            thrust: shape.column(thrust),
        })
    }

    fn max_power(&self) -> Power {
        *self.params.max_power.as_ref()
    }
}
