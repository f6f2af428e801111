use uom::si::length::meter;

use crate::models::propulsion::ic_engine::PropulsionLayout;
use crate::support::{
    component::{Component, ComponentError},
    variables::{VariableSpec, Variables},
};

use super::{ENGINE_CG, FRONT_LENGTH, FUSELAGE_LENGTH, LAYOUT, Mac, TANK_CG, layout, length};

const ENGINE_LENGTH: &str = "data:geometry:propulsion:engine:length";
const NACELLE_LENGTH: &str = "data:geometry:propulsion:nacelle:length";
const FRONT_SPAR: &str = "data:geometry:wing:spar_ratio:front:root";
const REAR_SPAR: &str = "data:geometry:wing:spar_ratio:rear:root";
const FUEL_LINES_CG: &str = "data:weight:propulsion:fuel_lines:CG:x";

/// Engine CG at the middle of the engine or nacelle, placed by layout.
///
/// - Nose: the engine sits ahead of the firewall.
/// - Wing: the nacelle ends at the wing MAC leading edge.
/// - Rear fuselage: the nacelle ends at the fuselage tail.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeEngineCg;

impl Component for ComputeEngineCg {
    fn inputs(&self) -> Vec<VariableSpec> {
        let mut inputs = Mac::inputs().to_vec();
        inputs.extend(
            [FRONT_LENGTH, FUSELAGE_LENGTH, ENGINE_LENGTH, NACELLE_LENGTH]
                .map(|name| VariableSpec::with_units(name, "m")),
        );
        inputs.push(VariableSpec::new(LAYOUT));
        inputs
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        vec![VariableSpec::with_units(ENGINE_CG, "m")]
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let x = match layout(inputs)? {
            PropulsionLayout::Nose => {
                length(inputs, FRONT_LENGTH)? - length(inputs, ENGINE_LENGTH)? * 0.5
            }
            PropulsionLayout::Wing => {
                Mac::read(inputs)?.leading_edge() - length(inputs, NACELLE_LENGTH)? * 0.5
            }
            PropulsionLayout::RearFuselage => {
                length(inputs, FUSELAGE_LENGTH)? - length(inputs, NACELLE_LENGTH)? * 0.5
            }
        };

        Ok(Variables::new().with(ENGINE_CG, x.get::<meter>()))
    }
}

/// Wing tank CG midway between the spars along the MAC.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeTankCg;

impl Component for ComputeTankCg {
    fn inputs(&self) -> Vec<VariableSpec> {
        let mut inputs = Mac::inputs().to_vec();
        inputs.extend([VariableSpec::new(FRONT_SPAR), VariableSpec::new(REAR_SPAR)]);
        inputs
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        vec![VariableSpec::with_units(TANK_CG, "m")]
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let spar_midpoint = 0.5 * (inputs.scalar(FRONT_SPAR)? + inputs.scalar(REAR_SPAR)?);
        let x = Mac::read(inputs)?.x_at(spar_midpoint);

        Ok(Variables::new().with(TANK_CG, x.get::<meter>()))
    }
}

/// Fuel lines midway between the engine and the tank.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeFuelLinesCg;

impl Component for ComputeFuelLinesCg {
    fn inputs(&self) -> Vec<VariableSpec> {
        vec![
            VariableSpec::with_units(ENGINE_CG, "m"),
            VariableSpec::with_units(TANK_CG, "m"),
        ]
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        vec![VariableSpec::with_units(FUEL_LINES_CG, "m")]
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let x = (length(inputs, ENGINE_CG)? + length(inputs, TANK_CG)?) * 0.5;
        Ok(Variables::new().with(FUEL_LINES_CG, x.get::<meter>()))
    }
}
