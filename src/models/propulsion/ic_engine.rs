//! Parametric reciprocating engine driving a propeller.
//!
//! A [`BasicIcEngine`] is sized from its sea-level maximum power: engine and
//! nacelle dimensions come from cube-root scaling of a reference engine, and
//! fuel consumption from regressions on power available at altitude. Its
//! thrust is bounded by both the shaft power and the [`Propeller`] envelope.
//!
//! The engine evaluates batches of [`FlightPoints`], where each point demands
//! either a thrust rate (a fraction of the maximum thrust) or a thrust.
//!
//! # Example
//!
//! ```
//! use aircraft_models::models::propulsion::{
//!     ic_engine::{
//!         BasicIcEngine, Column, EngineSetting, FlightPoints, FuelType, IcEngineParams,
//!         PropulsionLayout, StrokeCount,
//!     },
//!     propeller::{Propeller, PropellerMap},
//! };
//! use aircraft_models::support::constraint::StrictlyPositive;
//! use uom::si::{
//!     f64::{Length, Power},
//!     length::meter,
//!     power::kilowatt,
//! };
//!
//! let map = PropellerMap::new(
//!     vec![10.0, 80.0],
//!     vec![100.0, 3_000.0],
//!     vec![3_000.0, 2_000.0],
//!     vec![vec![0.6, 0.3], vec![0.85, 0.8]],
//! )
//! .unwrap();
//! let propeller = Propeller::new(
//!     map.clone(),
//!     map,
//!     StrictlyPositive::new(Length::new::<meter>(2_400.0)).unwrap(),
//! );
//!
//! let engine = BasicIcEngine::new(
//!     IcEngineParams {
//!         max_power: StrictlyPositive::new(Power::new::<kilowatt>(150.0)).unwrap(),
//!         fuel_type: FuelType::Gasoline,
//!         strokes: StrokeCount::Four,
//!         layout: PropulsionLayout::Nose,
//!     },
//!     propeller,
//! );
//!
//! let points = FlightPoints::new(
//!     Column::Scalar(0.2),
//!     Column::Scalar(Length::new::<meter>(1_000.0)),
//!     Column::Scalar(EngineSetting::Cruise),
//! )
//! .with_thrust_rate(Column::Scalar(0.75));
//!
//! let output = engine.compute_flight_points(&points).unwrap();
//! assert!(matches!(output.thrust_rate, Column::Scalar(rate) if (rate - 0.75).abs() < 1e-12));
//! ```
//!
//! [`Propeller`]: crate::models::propulsion::propeller::Propeller

mod components;
mod core;
mod error;
mod flight_point;
mod setting;

#[cfg(test)]
pub(crate) mod test_support;

pub use components::{BasicIcEngineWrapper, ComputeEngineDimensions};
pub(crate) use components::{engine_inputs, engine_params};
pub use self::core::{
    BasicIcEngine, EngineDimensions, IcEngineParams, MaxThrustConfig, NacelleDimensions,
    uninstalled_mass,
};
pub use error::PropulsionError;
pub use flight_point::{Column, FlightPoints, FlightPointsOutput};
pub use setting::{EngineSetting, FuelType, PropulsionLayout, StrokeCount};

use twine_core::Model;

impl Model for BasicIcEngine {
    type Input = FlightPoints;
    type Output = FlightPointsOutput;
    type Error = PropulsionError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.compute_flight_points(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Force, Length},
        force::newton,
        length::meter,
        power::kilowatt,
    };

    use crate::support::{atmosphere::Atmosphere, units::SpecificFuelConsumption};

    use test_support::sr22_engine;

    fn cruise(mach: f64) -> FlightPoints {
        FlightPoints::new(
            Column::Scalar(mach),
            Column::Scalar(Length::new::<meter>(2_438.4)),
            Column::Scalar(EngineSetting::Cruise),
        )
    }

    fn sfc_value(sfc: &Column<SpecificFuelConsumption>, index: usize) -> f64 {
        sfc.at(index).value
    }

    #[test]
    fn cruise_point_at_part_throttle() {
        let engine = sr22_engine();
        let output = engine
            .call(&cruise(0.25).with_thrust_rate(Column::Scalar(0.8)))
            .unwrap();

        assert_relative_eq!(output.thrust.at(0).get::<newton>(), 1_377.039, epsilon = 1e-3);
        assert_relative_eq!(output.thrust_rate.at(0), 0.8, epsilon = 1e-12);
        assert_relative_eq!(sfc_value(&output.sfc, 0), 7.985_045e-6, max_relative = 1e-6);
        assert!(matches!(output.sfc, Column::Scalar(_)));
    }

    #[test]
    fn engines_compare_by_solver_settings() {
        let config = MaxThrustConfig {
            samples: 20,
            ..MaxThrustConfig::default()
        };
        let tuned = sr22_engine().with_config(config);

        assert_eq!(sr22_engine(), sr22_engine());
        assert_eq!(tuned.config(), &config);
        assert_ne!(tuned, sr22_engine());
    }

    #[test]
    fn thrust_rate_above_one_is_rejected() {
        let engine = sr22_engine();
        let err = engine
            .call(&cruise(0.25).with_thrust_rate(Column::Scalar(3.0)))
            .unwrap_err();

        assert!(matches!(err, PropulsionError::InvalidThrust { index: 0, .. }));
    }

    #[test]
    fn required_thrust_is_capped_at_max_thrust() {
        let engine = sr22_engine();
        let thrust = Column::Scalar(Force::new::<newton>(3_000.0));
        let output = engine
            .call(&cruise(0.25).with_thrust(thrust).with_regulation(Column::Scalar(true)))
            .unwrap();

        assert_relative_eq!(output.thrust.at(0).get::<newton>(), 1_721.299, epsilon = 1e-3);
        assert_relative_eq!(output.thrust_rate.at(0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(sfc_value(&output.sfc, 0), 8.413_043e-6, max_relative = 1e-6);
    }

    #[test]
    fn regulated_thrust_below_max_is_kept() {
        let engine = sr22_engine();
        let thrust = Column::Scalar(Force::new::<newton>(1_000.0));
        let output = engine.call(&cruise(0.25).with_thrust(thrust)).unwrap();

        assert_relative_eq!(output.thrust.at(0).get::<newton>(), 1_000.0);
        assert_relative_eq!(output.thrust_rate.at(0), 0.580_956, epsilon = 1e-6);
        assert_relative_eq!(sfc_value(&output.sfc, 0), 6.737_611e-6, max_relative = 1e-6);
    }

    #[test]
    fn zero_thrust_has_zero_consumption() {
        let engine = sr22_engine();
        let points = FlightPoints::new(
            Column::Scalar(0.1),
            Column::Scalar(Length::new::<meter>(0.0)),
            Column::Scalar(EngineSetting::Idle),
        )
        .with_thrust(Column::Scalar(Force::new::<newton>(0.0)));
        let output = engine.call(&points).unwrap();

        assert_eq!(output.thrust_rate.at(0), 0.0);
        assert_eq!(sfc_value(&output.sfc, 0), 0.0);
    }

    #[test]
    fn static_point_reaches_propeller_limit() {
        let engine = sr22_engine();
        let points = FlightPoints::new(
            Column::Scalar(0.0),
            Column::Scalar(Length::new::<meter>(0.0)),
            Column::Scalar(EngineSetting::Takeoff),
        )
        .with_thrust_rate(Column::Scalar(1.0));
        let output = engine.call(&points).unwrap();

        assert_relative_eq!(output.thrust.at(0).get::<newton>(), 4_000.0, epsilon = 1e-9);
        assert!(sfc_value(&output.sfc, 0).is_finite());
    }

    #[test]
    fn mixed_regulation_across_points() {
        let engine = sr22_engine();
        let points = FlightPoints::new(
            Column::Array(vec![0.25, 0.2, 0.1]),
            Column::Array(vec![
                Length::new::<meter>(2_438.4),
                Length::new::<meter>(1_219.2),
                Length::new::<meter>(0.0),
            ]),
            Column::Scalar(EngineSetting::Cruise),
        )
        .with_regulation(Column::Array(vec![false, false, true]))
        .with_thrust_rate(Column::Array(vec![0.8, 0.5, 0.0]))
        .with_thrust(Column::Array(vec![
            Force::new::<newton>(0.0),
            Force::new::<newton>(0.0),
            Force::new::<newton>(0.0),
        ]));
        let output = engine.call(&points).unwrap();

        assert!(matches!(output.thrust, Column::Array(ref t) if t.len() == 3));
        assert_relative_eq!(output.thrust.at(0).get::<newton>(), 1_377.039, epsilon = 1e-3);
        assert_relative_eq!(output.thrust.at(1).get::<newton>(), 1_180.163, epsilon = 1e-3);
        assert_eq!(output.thrust.at(2).get::<newton>(), 0.0);
    }

    #[test]
    fn thrust_rate_round_trips_through_thrust() {
        let engine = sr22_engine();

        for (mach, altitude) in [(0.1, 0.0), (0.2, 1_219.2), (0.25, 2_438.4), (0.3, 3_500.0)] {
            let altitude = Length::new::<meter>(altitude);
            for rate in [0.1, 0.35, 0.6, 0.9] {
                let by_rate = FlightPoints::new(
                    Column::Scalar(mach),
                    Column::Scalar(altitude),
                    Column::Scalar(EngineSetting::Climb),
                )
                .with_thrust_rate(Column::Scalar(rate));
                let forward = engine.call(&by_rate).unwrap();

                let by_thrust = FlightPoints::new(
                    Column::Scalar(mach),
                    Column::Scalar(altitude),
                    Column::Scalar(EngineSetting::Climb),
                )
                .with_thrust(forward.thrust.clone());
                let back = engine.call(&by_thrust).unwrap();

                assert_relative_eq!(back.thrust_rate.at(0), rate, max_relative = 1e-9);
                assert_relative_eq!(
                    sfc_value(&back.sfc, 0),
                    sfc_value(&forward.sfc, 0),
                    max_relative = 1e-9
                );
                assert!(sfc_value(&forward.sfc, 0) >= 0.0);
                assert!(forward.thrust.at(0).get::<newton>().is_finite());
            }
        }
    }

    #[test]
    fn max_thrust_bounds_thrust_rate_one() {
        let engine = sr22_engine();
        let altitude = Length::new::<meter>(1_219.2);
        let airspeed = Atmosphere::new(altitude).true_airspeed(0.2);

        assert_relative_eq!(
            engine.max_thrust(airspeed, altitude).unwrap().get::<newton>(),
            2_360.326,
            epsilon = 1e-3
        );
    }

    #[test]
    fn sfc_ratio_reports_shaft_power() {
        let engine = sr22_engine();
        let altitude = Length::new::<meter>(0.0);
        let airspeed = Atmosphere::sea_level().true_airspeed(0.2);
        let thrust = Force::new::<newton>(1_500.0);

        let (ratio, power) = engine.sfc_ratio(thrust, airspeed, altitude);
        let expected = engine
            .propeller()
            .required_shaft_power(thrust, airspeed, altitude);
        let rate = expected.get::<kilowatt>() / 231.0;

        assert_relative_eq!(power.get::<kilowatt>(), expected.get::<kilowatt>());
        assert_relative_eq!(ratio, -0.9976 * rate * rate + 1.9964 * rate, epsilon = 1e-12);
    }

    #[test]
    fn dimensions_are_fixed_at_construction() {
        let engine = sr22_engine();

        assert_relative_eq!(engine.engine().power_sl.get::<kilowatt>(), 231.0);
        assert_relative_eq!(
            engine.nacelle().length.get::<meter>(),
            1.15 * engine.engine().length.get::<meter>()
        );
        assert_relative_eq!(
            engine.available_power(Length::new::<meter>(0.0)).get::<kilowatt>(),
            231.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn rejects_high_altitude_points() {
        let engine = sr22_engine();
        let points = FlightPoints::new(
            Column::Scalar(0.3),
            Column::Scalar(Length::new::<meter>(20_000.0)),
            Column::Scalar(EngineSetting::Cruise),
        )
        .with_thrust_rate(Column::Scalar(0.5));

        assert!(matches!(
            engine.call(&points),
            Err(PropulsionError::NoAvailablePower { .. })
        ));
    }
}
