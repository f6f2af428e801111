//! Mass and geometry fixture resembling a Cirrus SR22.

use crate::support::{
    component::{Component, Group},
    variables::Variables,
};

use super::{
    ComputeCgRatioAft, ComputeEngineCg, ComputeFlightControlCg, ComputeFuelLinesCg,
    ComputeFuselageCg, ComputeLandingGearCg, ComputeLifeSupportCg, ComputeNavigationSystemsCg,
    ComputePassengerSeatsCg, ComputePayloadCg, ComputePowerSystemsCg, ComputeTailCg,
    ComputeTankCg, ComputeWingCg,
};

/// Every input of the CG chain, with the main gear at its initial guess.
pub(crate) fn sr22_cg_variables() -> Variables {
    let geometry = [
        ("data:geometry:wing:MAC:length", 1.2),
        ("data:geometry:wing:MAC:at25percent:x", 2.8392),
        ("data:geometry:wing:MAC:leading_edge:x:local", 0.14),
        ("data:geometry:wing:span", 11.7),
        ("data:geometry:wing:root:y", 0.6),
        ("data:geometry:wing:root:chord", 1.49),
        ("data:geometry:wing:tip:y", 5.85),
        ("data:geometry:wing:tip:chord", 0.74),
        ("data:geometry:wing:tip:leading_edge:x:local", 0.19),
        ("data:geometry:wing:spar_ratio:front:root", 0.15),
        ("data:geometry:wing:spar_ratio:rear:root", 0.53),
        ("data:geometry:fuselage:length", 7.92),
        ("data:geometry:fuselage:front_length", 1.44),
        ("data:geometry:fuselage:luggage_length", 0.6),
        ("data:geometry:cabin:length", 3.5),
        ("data:geometry:cabin:seats:pilot:length", 1.0),
        ("data:geometry:cabin:seats:passenger:length", 0.9),
        ("data:geometry:cabin:seats:passenger:count_by_row", 2.0),
        ("data:geometry:cabin:seats:passenger:NPAX_max", 2.0),
        ("data:geometry:horizontal_tail:MAC:length", 0.55),
        ("data:geometry:horizontal_tail:MAC:at25percent:x:from_wingMAC25", 4.04),
        ("data:geometry:vertical_tail:MAC:length", 0.95),
        ("data:geometry:vertical_tail:MAC:at25percent:x:from_wingMAC25", 3.92),
        ("data:geometry:propulsion:layout", 3.0),
        ("data:geometry:propulsion:engine:length", 0.9),
        ("data:geometry:propulsion:nacelle:length", 1.035),
    ];

    let masses = [
        ("data:weight:airframe:wing:mass", 174.0),
        ("data:weight:airframe:fuselage:mass", 291.89),
        ("data:weight:airframe:horizontal_tail:mass", 16.0),
        ("data:weight:airframe:vertical_tail:mass", 10.0),
        ("data:weight:airframe:flight_controls:mass", 26.0),
        ("data:weight:airframe:landing_gear:main:mass", 68.0),
        ("data:weight:airframe:landing_gear:front:mass", 21.0),
        ("data:weight:propulsion:engine:mass", 237.06),
        ("data:weight:propulsion:fuel_lines:mass", 16.0),
        ("data:weight:systems:power:electric_systems:mass", 15.0),
        ("data:weight:systems:power:hydraulic_systems:mass", 8.0),
        ("data:weight:systems:life_support:insulation:mass", 10.0),
        ("data:weight:systems:life_support:air_conditioning:mass", 8.0),
        ("data:weight:systems:life_support:internal_lighting:mass", 3.0),
        ("data:weight:systems:navigation:mass", 33.0),
        ("data:weight:furniture:passenger_seats:mass", 60.0),
        ("data:weight:payload:rear_fret:mass", 59.0),
        ("data:weight:aircraft:MTOW", 1542.0),
        ("data:weight:aircraft:MFW", 180.0),
        ("data:mission:sizing:fuel:reserve", 30.0),
        ("data:weight:airframe:landing_gear:main:CG:x", 3.0),
    ];

    geometry.into_iter().chain(masses).collect()
}

/// Item and payload CGs computed from [`sr22_cg_variables`].
pub(crate) fn sr22_item_cgs() -> Variables {
    Group::new()
        .with("wing", ComputeWingCg)
        .with("fuselage", ComputeFuselageCg)
        .with("tail", ComputeTailCg)
        .with("flight_controls", ComputeFlightControlCg)
        .with("landing_gear", ComputeLandingGearCg)
        .with("engine", ComputeEngineCg)
        .with("tank", ComputeTankCg)
        .with("fuel_lines", ComputeFuelLinesCg)
        .with("power_systems", ComputePowerSystemsCg)
        .with("life_support", ComputeLifeSupportCg)
        .with("navigation", ComputeNavigationSystemsCg)
        .with("passenger_seats", ComputePassengerSeatsCg)
        .with("payload", ComputePayloadCg)
        .evaluate(&sr22_cg_variables())
        .expect("fixture item CGs compute")
}

/// Inputs of the loading cases: the fixture, its item CGs, and the empty
/// aircraft with the main gear at its initial guess.
pub(crate) fn sr22_loading_variables() -> Variables {
    let mut vars = sr22_cg_variables();
    vars.extend(sr22_item_cgs());
    let empty = ComputeCgRatioAft
        .evaluate(&vars)
        .expect("fixture empty aircraft computes");
    vars.extend(empty);
    vars
}
