use uom::si::length::meter;

use crate::support::{
    component::{Component, ComponentError},
    variables::{VariableSpec, Variables},
};

use super::{AFT_CG, EMPTY_MAC_POSITION, FLIGHT_MAX, FLIGHT_MIN, GROUND_MAX, GROUND_MIN, Mac};

const AFT_MARGIN: &str = "settings:weight:aircraft:CG:aft:MAC_position:margin";
const FWD_MARGIN: &str = "settings:weight:aircraft:CG:fwd:MAC_position:margin";

const AFT_POSITION: &str = "data:weight:aircraft:CG:aft:MAC_position";
const FWD_POSITION: &str = "data:weight:aircraft:CG:fwd:MAC_position";
const FWD_CG: &str = "data:weight:aircraft:CG:fwd:x";

/// Aft and forward CG limits with a safety margin on each side.
///
/// The aft limit covers the empty aircraft and every ground and flight
/// case. The forward limit covers the loaded cases only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeMaxMinCgRatio;

impl Component for ComputeMaxMinCgRatio {
    fn inputs(&self) -> Vec<VariableSpec> {
        let mut inputs = Mac::inputs().to_vec();
        inputs.extend(
            [EMPTY_MAC_POSITION, GROUND_MIN, GROUND_MAX, FLIGHT_MIN, FLIGHT_MAX]
                .map(VariableSpec::new),
        );
        inputs.extend([
            VariableSpec::new(AFT_MARGIN).default_value(0.05),
            VariableSpec::new(FWD_MARGIN).default_value(0.03),
        ]);
        inputs
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        vec![
            VariableSpec::new(AFT_POSITION),
            VariableSpec::new(FWD_POSITION),
            VariableSpec::with_units(AFT_CG, "m"),
            VariableSpec::with_units(FWD_CG, "m"),
        ]
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let mac = Mac::read(inputs)?;

        let aft = inputs
            .scalar(EMPTY_MAC_POSITION)?
            .max(inputs.scalar(GROUND_MAX)?)
            .max(inputs.scalar(FLIGHT_MAX)?)
            + inputs.scalar(AFT_MARGIN)?;
        let fwd = inputs.scalar(GROUND_MIN)?.min(inputs.scalar(FLIGHT_MIN)?)
            - inputs.scalar(FWD_MARGIN)?;

        Ok(Variables::new()
            .with(AFT_POSITION, aft)
            .with(FWD_POSITION, fwd)
            .with(AFT_CG, mac.x_at(aft).get::<meter>())
            .with(FWD_CG, mac.x_at(fwd).get::<meter>()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::weight::cg::{MAC_AT25, MAC_LENGTH};

    fn inputs() -> Variables {
        Variables::new()
            .with(MAC_LENGTH, 1.24)
            .with(MAC_AT25, 2.7956)
            .with(EMPTY_MAC_POSITION, 0.12)
            .with(GROUND_MIN, 0.05)
            .with(GROUND_MAX, 0.14)
            .with(FLIGHT_MIN, 0.06)
            .with(FLIGHT_MAX, 0.17)
            .with(AFT_MARGIN, 0.05)
            .with(FWD_MARGIN, 0.03)
    }

    #[test]
    fn limits_with_margins() {
        let outputs = ComputeMaxMinCgRatio.evaluate(&inputs()).unwrap();

        assert_relative_eq!(outputs.scalar(AFT_POSITION).unwrap(), 0.22, epsilon = 1e-12);
        assert_relative_eq!(outputs.scalar(FWD_POSITION).unwrap(), 0.02, epsilon = 1e-12);
        assert_relative_eq!(outputs.scalar(AFT_CG).unwrap(), 2.4856 + 0.22 * 1.24, epsilon = 1e-12);
        assert_relative_eq!(outputs.scalar(FWD_CG).unwrap(), 2.4856 + 0.02 * 1.24, epsilon = 1e-12);
    }

    #[test]
    fn empty_aircraft_can_set_aft_limit() {
        let outputs = ComputeMaxMinCgRatio
            .evaluate(&inputs().with(EMPTY_MAC_POSITION, 0.3))
            .unwrap();

        assert_relative_eq!(outputs.scalar(AFT_POSITION).unwrap(), 0.35, epsilon = 1e-12);
        assert_relative_eq!(outputs.scalar(FWD_POSITION).unwrap(), 0.02, epsilon = 1e-12);
    }
}
