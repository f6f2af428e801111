//! Shared engine and propeller fixtures for tests.
//!
//! The maps resemble a three-blade constant-speed propeller sized for a
//! 231 kW four-seat tourer, with the cruise map measured at 8,000 ft.

use uom::si::{
    f64::{Length, Power},
    length::meter,
    power::kilowatt,
};

use crate::models::propulsion::propeller::{Propeller, PropellerMap};
use crate::support::{constraint::StrictlyPositive, variables::Variables};

use super::{BasicIcEngine, FuelType, IcEngineParams, PropulsionLayout, StrokeCount};

pub(crate) const CRUISE_ALTITUDE: f64 = 2_438.4;

pub(crate) const SPEED: [f64; 6] = [5.0, 20.0, 40.0, 60.0, 80.0, 100.0];

pub(crate) const THRUST: [f64; 9] = [
    100.0, 500.0, 1_000.0, 1_500.0, 2_000.0, 2_500.0, 3_000.0, 3_500.0, 4_000.0,
];

pub(crate) const THRUST_LIMIT_SL: [f64; 6] = [4_000.0, 3_800.0, 3_400.0, 3_000.0, 2_600.0, 2_300.0];

pub(crate) const THRUST_LIMIT_CL: [f64; 6] = [3_400.0, 3_200.0, 2_900.0, 2_550.0, 2_200.0, 1_950.0];

pub(crate) const EFFICIENCY_SL: [[f64; 9]; 6] = [
    [0.603, 0.375, 0.288, 0.244, 0.216, 0.196, 0.181, 0.169, 0.160],
    [0.821, 0.735, 0.664, 0.612, 0.572, 0.541, 0.514, 0.492, 0.472],
    [0.842, 0.815, 0.785, 0.759, 0.735, 0.715, 0.696, 0.679, 0.664],
    [0.847, 0.834, 0.818, 0.804, 0.791, 0.779, 0.767, 0.756, 0.745],
    [0.848, 0.841, 0.832, 0.823, 0.815, 0.807, 0.799, 0.792, 0.785],
    [0.849, 0.844, 0.838, 0.832, 0.827, 0.821, 0.816, 0.811, 0.806],
];

pub(crate) const EFFICIENCY_CL: [[f64; 9]; 6] = [
    [0.570, 0.343, 0.261, 0.221, 0.195, 0.177, 0.163, 0.152, 0.143],
    [0.814, 0.713, 0.634, 0.579, 0.538, 0.506, 0.479, 0.457, 0.438],
    [0.840, 0.806, 0.770, 0.740, 0.713, 0.690, 0.669, 0.651, 0.634],
    [0.846, 0.829, 0.811, 0.793, 0.778, 0.763, 0.749, 0.736, 0.724],
    [0.848, 0.838, 0.827, 0.816, 0.806, 0.797, 0.787, 0.779, 0.770],
    [0.848, 0.842, 0.835, 0.828, 0.821, 0.814, 0.808, 0.802, 0.795],
];

fn table(rows: &[[f64; 9]; 6]) -> Vec<Vec<f64>> {
    rows.iter().map(|row| row.to_vec()).collect()
}

/// Sea-level propeller map.
pub(crate) fn test_map() -> PropellerMap {
    PropellerMap::new(
        SPEED.to_vec(),
        THRUST.to_vec(),
        THRUST_LIMIT_SL.to_vec(),
        table(&EFFICIENCY_SL),
    )
    .expect("sea-level map is valid")
}

/// Cruise-level propeller map.
pub(crate) fn cruise_map() -> PropellerMap {
    PropellerMap::new(
        SPEED.to_vec(),
        THRUST.to_vec(),
        THRUST_LIMIT_CL.to_vec(),
        table(&EFFICIENCY_CL),
    )
    .expect("cruise-level map is valid")
}

pub(crate) fn sr22_propeller() -> Propeller {
    Propeller::new(
        test_map(),
        cruise_map(),
        StrictlyPositive::new(Length::new::<meter>(CRUISE_ALTITUDE)).unwrap(),
    )
}

/// 231 kW four-stroke gasoline engine in the nose.
pub(crate) fn sr22_engine() -> BasicIcEngine {
    BasicIcEngine::new(
        IcEngineParams {
            max_power: StrictlyPositive::new(Power::new::<kilowatt>(231.0)).unwrap(),
            fuel_type: FuelType::Gasoline,
            strokes: StrokeCount::Four,
            layout: PropulsionLayout::Nose,
        },
        sr22_propeller(),
    )
}

/// Engine and propeller inputs of the wrapper component, matching [`sr22_engine`].
pub(crate) fn sr22_engine_variables() -> Variables {
    let mut vars = Variables::new()
        .with("data:propulsion:IC_engine:max_power", 231_000.0)
        .with("data:propulsion:IC_engine:fuel_type", 1.0)
        .with("data:propulsion:IC_engine:strokes_nb", 4.0)
        .with("data:geometry:propulsion:layout", 3.0)
        .with("data:aerodynamics:propeller:cruise_level:altitude", CRUISE_ALTITUDE);

    for (level, limit, efficiency) in [
        ("sea_level", &THRUST_LIMIT_SL, &EFFICIENCY_SL),
        ("cruise_level", &THRUST_LIMIT_CL, &EFFICIENCY_CL),
    ] {
        let prefix = format!("data:aerodynamics:propeller:{level}");
        vars.insert(format!("{prefix}:speed"), SPEED.to_vec());
        vars.insert(format!("{prefix}:thrust"), THRUST.to_vec());
        vars.insert(format!("{prefix}:thrust_limit"), limit.to_vec());
        vars.insert(format!("{prefix}:efficiency"), table(efficiency));
    }
    vars
}
