use thiserror::Error;
use uom::si::length::meter;

use crate::support::{
    component::{Component, ComponentError},
    constraint::UnitInterval,
    variables::{VariableSpec, Variables},
};

use super::{AFT_CG, FRONT_GEAR_CG, MAIN_GEAR_CG, length};

const FRONT_WEIGHT_RATIO: &str = "settings:weight:airframe:landing_gear:front:weight_ratio";

#[derive(Debug, Error)]
#[error("the nose gear cannot carry the whole weight")]
struct NoseGearCarriesAll;

/// Places the main gear so the nose gear carries a set share of the weight
/// at the aft CG limit.
///
/// From the moment balance about the aft CG,
/// `x_main = (x_aft - δ·x_front) / (1 - δ)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateMlg;

impl Component for UpdateMlg {
    fn inputs(&self) -> Vec<VariableSpec> {
        vec![
            VariableSpec::with_units(AFT_CG, "m"),
            VariableSpec::with_units(FRONT_GEAR_CG, "m"),
            VariableSpec::new(FRONT_WEIGHT_RATIO).default_value(0.08),
        ]
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        vec![VariableSpec::with_units(MAIN_GEAR_CG, "m")]
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let ratio = UnitInterval::new(inputs.scalar(FRONT_WEIGHT_RATIO)?)
            .map_err(|err| ComponentError::invalid_input(FRONT_WEIGHT_RATIO, err))?
            .into_inner();
        if ratio >= 1.0 {
            return Err(ComponentError::model_failed(
                "main gear placement",
                NoseGearCarriesAll,
            ));
        }

        let x = (length(inputs, AFT_CG)? - length(inputs, FRONT_GEAR_CG)? * ratio) / (1.0 - ratio);
        Ok(Variables::new().with(MAIN_GEAR_CG, x.get::<meter>()))
    }
}
