use uom::si::{f64::Mass, mass::kilogram};

use crate::support::{
    component::{Component, ComponentError},
    constraint::NonNegative,
    variables::{VariableSpec, Variables},
};

use super::{
    CabinLayout, EMPTY_CG, EMPTY_MASS, FLIGHT_MAX, FLIGHT_MIN, FRONT_FRET_CG, GROUND_MAX,
    GROUND_MIN, LoadCase, Mac, REAR_FRET_CG, TANK_CG, length, mass,
};

const MASS_PER_PASSENGER: &str = "settings:weight:airframe:payload:design_mass_per_passenger";
const REAR_FRET_MASS: &str = "data:weight:payload:rear_fret:mass";
const FRONT_FRET_MASS: &str = "data:weight:payload:front_fret:mass";
const MTOW: &str = "data:weight:aircraft:MTOW";
const MFW: &str = "data:weight:aircraft:MFW";
const RESERVE_FUEL: &str = "data:mission:sizing:fuel:reserve";

fn payload_inputs() -> Vec<VariableSpec> {
    let mut inputs = Mac::inputs().to_vec();
    inputs.extend(CabinLayout::inputs());
    inputs.extend([
        VariableSpec::with_units(EMPTY_MASS, "kg"),
        VariableSpec::with_units(EMPTY_CG, "m"),
        VariableSpec::with_units(MASS_PER_PASSENGER, "kg").default_value(80.0),
        VariableSpec::with_units(REAR_FRET_MASS, "kg"),
        VariableSpec::with_units(REAR_FRET_CG, "m"),
        VariableSpec::with_units(FRONT_FRET_MASS, "kg").default_value(0.0),
        VariableSpec::with_units(FRONT_FRET_CG, "m"),
    ]);
    inputs
}

/// The loading scenarios, each as its list of payload items.
///
/// Pilots only, pilots with passengers, pilots with passengers and luggage,
/// and pilots with luggage.
fn payload_scenarios(inputs: &Variables) -> Result<Vec<Vec<LoadCase>>, ComponentError> {
    let cabin = CabinLayout::read(inputs)?;
    let per_seat = mass(inputs, MASS_PER_PASSENGER)?;

    let pilot_row = cabin.pilot_row();
    let pilots = LoadCase::new("pilots", per_seat * f64::from(pilot_row.seats), pilot_row.x);
    let passengers: Vec<_> = cabin
        .passenger_rows()
        .into_iter()
        .map(|row| LoadCase::new("passengers", per_seat * f64::from(row.seats), row.x))
        .collect();
    let luggage = [
        LoadCase::new(
            "rear luggage",
            mass(inputs, REAR_FRET_MASS)?,
            length(inputs, REAR_FRET_CG)?,
        ),
        LoadCase::new(
            "front luggage",
            mass(inputs, FRONT_FRET_MASS)?,
            length(inputs, FRONT_FRET_CG)?,
        ),
    ];

    let crewed = vec![pilots];
    let mut full = crewed.clone();
    full.extend(passengers);
    let mut full_with_luggage = full.clone();
    full_with_luggage.extend(luggage.iter().cloned());
    let mut crewed_with_luggage = crewed.clone();
    crewed_with_luggage.extend(luggage);

    Ok(vec![crewed, full, full_with_luggage, crewed_with_luggage])
}

fn empty_aircraft(inputs: &Variables) -> Result<LoadCase, ComponentError> {
    Ok(LoadCase::new(
        "empty",
        mass(inputs, EMPTY_MASS)?,
        length(inputs, EMPTY_CG)?,
    ))
}

/// Smallest and largest MAC position over `cases`.
fn envelope(mac: &Mac, cases: &[LoadCase]) -> (f64, f64) {
    cases
        .iter()
        .map(|case| mac.position(case.x))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), position| {
            (min.min(position), max.max(position))
        })
}

fn combine(name: &str, parts: &[LoadCase]) -> Result<LoadCase, ComponentError> {
    LoadCase::combine(name, parts)
        .map_err(|err| ComponentError::model_failed(format!("{name} load case"), err))
}

/// CG envelope on the ground, without fuel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeGroundCgCase;

impl Component for ComputeGroundCgCase {
    fn inputs(&self) -> Vec<VariableSpec> {
        payload_inputs()
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        vec![VariableSpec::new(GROUND_MIN), VariableSpec::new(GROUND_MAX)]
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let mac = Mac::read(inputs)?;
        let empty = empty_aircraft(inputs)?;

        let cases = payload_scenarios(inputs)?
            .into_iter()
            .map(|mut parts| {
                parts.push(empty.clone());
                combine("ground", &parts)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let (min, max) = envelope(&mac, &cases);
        Ok(Variables::new().with(GROUND_MIN, min).with(GROUND_MAX, max))
    }
}

/// CG envelope in flight, with reserve fuel and with the most fuel each
/// payload allows.
///
/// The most fuel is the smaller of the fuel capacity and what the
/// maximum take-off weight leaves, never negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeFlightCgCase;

impl Component for ComputeFlightCgCase {
    fn inputs(&self) -> Vec<VariableSpec> {
        let mut inputs = payload_inputs();
        inputs.extend([
            VariableSpec::with_units(TANK_CG, "m"),
            VariableSpec::with_units(MTOW, "kg"),
            VariableSpec::with_units(MFW, "kg"),
            VariableSpec::with_units(RESERVE_FUEL, "kg"),
        ]);
        inputs
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        vec![VariableSpec::new(FLIGHT_MIN), VariableSpec::new(FLIGHT_MAX)]
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let mac = Mac::read(inputs)?;
        let empty = empty_aircraft(inputs)?;
        let tank = length(inputs, TANK_CG)?;
        let mtow = mass(inputs, MTOW)?;
        let mfw = mass(inputs, MFW)?;
        let reserve = NonNegative::new(mass(inputs, RESERVE_FUEL)?)
            .map_err(|err| ComponentError::invalid_input(RESERVE_FUEL, err))?
            .into_inner();

        let mut cases = Vec::new();
        for mut parts in payload_scenarios(inputs)? {
            let payload: Mass = parts
                .iter()
                .fold(Mass::new::<kilogram>(0.0), |total, part| total + part.mass);
            let allowed = (mtow - empty.mass - payload)
                .get::<kilogram>()
                .min(mfw.get::<kilogram>())
                .max(0.0);

            parts.push(empty.clone());
            for fuel in [reserve, Mass::new::<kilogram>(allowed)] {
                let mut loaded = parts.clone();
                loaded.push(LoadCase::new("fuel", fuel, tank));
                cases.push(combine("flight", &loaded)?);
            }
        }

        let (min, max) = envelope(&mac, &cases);
        Ok(Variables::new().with(FLIGHT_MIN, min).with(FLIGHT_MAX, max))
    }
}
