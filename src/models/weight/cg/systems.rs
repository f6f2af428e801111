use uom::si::length::meter;

use crate::support::{
    component::{Component, ComponentError},
    variables::{VariableSpec, Variables},
};

use super::{CABIN_LENGTH, ENGINE_CG, FRONT_LENGTH, MAC_AT25, length};

const ELECTRIC_CG: &str = "data:weight:systems:power:electric_systems:CG:x";
const HYDRAULIC_CG: &str = "data:weight:systems:power:hydraulic_systems:CG:x";
const INSULATION_CG: &str = "data:weight:systems:life_support:insulation:CG:x";
const AIR_CONDITIONING_CG: &str = "data:weight:systems:life_support:air_conditioning:CG:x";
const INTERNAL_LIGHTING_CG: &str = "data:weight:systems:life_support:internal_lighting:CG:x";
const NAVIGATION_CG: &str = "data:weight:systems:navigation:CG:x";

/// Electric and hydraulic systems midway between the engine and the wing
/// quarter chord.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputePowerSystemsCg;

impl Component for ComputePowerSystemsCg {
    fn inputs(&self) -> Vec<VariableSpec> {
        vec![
            VariableSpec::with_units(ENGINE_CG, "m"),
            VariableSpec::with_units(MAC_AT25, "m"),
        ]
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        vec![
            VariableSpec::with_units(ELECTRIC_CG, "m"),
            VariableSpec::with_units(HYDRAULIC_CG, "m"),
        ]
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let x = ((length(inputs, ENGINE_CG)? + length(inputs, MAC_AT25)?) * 0.5).get::<meter>();
        Ok(Variables::new().with(ELECTRIC_CG, x).with(HYDRAULIC_CG, x))
    }
}

/// Insulation and lighting at the cabin center, air conditioning at the
/// firewall.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeLifeSupportCg;

impl Component for ComputeLifeSupportCg {
    fn inputs(&self) -> Vec<VariableSpec> {
        vec![
            VariableSpec::with_units(FRONT_LENGTH, "m"),
            VariableSpec::with_units(CABIN_LENGTH, "m"),
        ]
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        [INSULATION_CG, AIR_CONDITIONING_CG, INTERNAL_LIGHTING_CG]
            .map(|name| VariableSpec::with_units(name, "m"))
            .to_vec()
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let firewall = length(inputs, FRONT_LENGTH)?;
        let cabin_center = (firewall + length(inputs, CABIN_LENGTH)? * 0.5).get::<meter>();

        Ok(Variables::new()
            .with(INSULATION_CG, cabin_center)
            .with(AIR_CONDITIONING_CG, firewall.get::<meter>())
            .with(INTERNAL_LIGHTING_CG, cabin_center))
    }
}

/// Avionics just behind the firewall, under the instrument panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeNavigationSystemsCg;

impl Component for ComputeNavigationSystemsCg {
    fn inputs(&self) -> Vec<VariableSpec> {
        vec![
            VariableSpec::with_units(FRONT_LENGTH, "m"),
            VariableSpec::with_units(CABIN_LENGTH, "m"),
        ]
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        vec![VariableSpec::with_units(NAVIGATION_CG, "m")]
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let x = length(inputs, FRONT_LENGTH)? + length(inputs, CABIN_LENGTH)? * 0.1;
        Ok(Variables::new().with(NAVIGATION_CG, x.get::<meter>()))
    }
}
