use uom::si::{length::meter, mass::kilogram};

use crate::support::{
    component::{Component, ComponentError},
    variables::{VariableSpec, Variables},
};

use super::{EMPTY_CG, EMPTY_MAC_POSITION, EMPTY_MASS, LoadCase, Mac, length, mass};

/// Items of each mass group, below `data:weight:<group>`.
const GROUPS: [(&str, &[&str]); 4] = [
    (
        "airframe",
        &[
            "wing",
            "fuselage",
            "horizontal_tail",
            "vertical_tail",
            "flight_controls",
            "landing_gear:main",
            "landing_gear:front",
        ],
    ),
    ("propulsion", &["engine", "fuel_lines"]),
    (
        "systems",
        &[
            "power:electric_systems",
            "power:hydraulic_systems",
            "life_support:insulation",
            "life_support:air_conditioning",
            "life_support:internal_lighting",
            "navigation",
        ],
    ),
    ("furniture", &["passenger_seats"]),
];

/// Mass and CG of each mass group and of the empty aircraft.
///
/// Also reports the empty CG as a fraction of the wing MAC.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeCgRatioAft;

impl Component for ComputeCgRatioAft {
    fn inputs(&self) -> Vec<VariableSpec> {
        let mut inputs = Mac::inputs().to_vec();
        for (group, items) in GROUPS {
            for item in items {
                inputs.push(VariableSpec::with_units(
                    format!("data:weight:{group}:{item}:mass"),
                    "kg",
                ));
                inputs.push(VariableSpec::with_units(
                    format!("data:weight:{group}:{item}:CG:x"),
                    "m",
                ));
            }
        }
        inputs
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        let mut outputs = Vec::new();
        for (group, _) in GROUPS {
            outputs.push(VariableSpec::with_units(format!("data:weight:{group}:mass"), "kg"));
            outputs.push(VariableSpec::with_units(format!("data:weight:{group}:CG:x"), "m"));
        }
        outputs.extend([
            VariableSpec::with_units(EMPTY_MASS, "kg"),
            VariableSpec::with_units(EMPTY_CG, "m"),
            VariableSpec::new(EMPTY_MAC_POSITION),
        ]);
        outputs
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let mut outputs = Variables::new();
        let mut groups = Vec::with_capacity(GROUPS.len());

        for (group, items) in GROUPS {
            let parts = items
                .iter()
                .map(|item| {
                    Ok(LoadCase::new(
                        *item,
                        mass(inputs, &format!("data:weight:{group}:{item}:mass"))?,
                        length(inputs, &format!("data:weight:{group}:{item}:CG:x"))?,
                    ))
                })
                .collect::<Result<Vec<_>, ComponentError>>()?;

            let case = LoadCase::combine(group, &parts)
                .map_err(|err| ComponentError::model_failed(format!("{group} mass"), err))?;

            outputs.insert(format!("data:weight:{group}:mass"), case.mass.get::<kilogram>());
            outputs.insert(format!("data:weight:{group}:CG:x"), case.x.get::<meter>());
            groups.push(case);
        }

        let empty = LoadCase::combine("empty", &groups)
            .map_err(|err| ComponentError::model_failed("empty aircraft mass", err))?;
        let mac = Mac::read(inputs)?;

        outputs.insert(EMPTY_MASS, empty.mass.get::<kilogram>());
        outputs.insert(EMPTY_CG, empty.x.get::<meter>());
        outputs.insert(EMPTY_MAC_POSITION, mac.position(empty.x));
        Ok(outputs)
    }
}
