use uom::si::length::meter;

use crate::support::{
    component::{Component, ComponentError},
    variables::{VariableSpec, Variables},
};

use super::{CabinLayout, FRONT_FRET_CG, REAR_FRET_CG, SEATS_CG, length};

const PAX_CG: &str = "data:weight:payload:PAX:CG:x";
const REAR_LUGGAGE_LENGTH: &str = "data:geometry:fuselage:luggage_length";
const FRONT_LUGGAGE_LENGTH: &str = "data:geometry:fuselage:front_luggage_length";

/// Passenger and luggage bay CGs.
///
/// Passengers sit at the seat CG. The rear bay starts behind the last seat
/// row. The optional front bay ends at the firewall; without one its CG is
/// reported as zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputePayloadCg;

impl Component for ComputePayloadCg {
    fn inputs(&self) -> Vec<VariableSpec> {
        let mut inputs = CabinLayout::inputs();
        inputs.extend([
            VariableSpec::with_units(SEATS_CG, "m"),
            VariableSpec::with_units(REAR_LUGGAGE_LENGTH, "m"),
            VariableSpec::with_units(FRONT_LUGGAGE_LENGTH, "m").default_value(0.0),
        ]);
        inputs
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        [PAX_CG, REAR_FRET_CG, FRONT_FRET_CG]
            .map(|name| VariableSpec::with_units(name, "m"))
            .to_vec()
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let cabin = CabinLayout::read(inputs)?;

        let rear = cabin.rear_end() + length(inputs, REAR_LUGGAGE_LENGTH)? * 0.5;
        let front_length = inputs.scalar(FRONT_LUGGAGE_LENGTH)?;
        let front = if front_length > 0.0 {
            cabin.firewall.get::<meter>() - 0.5 * front_length
        } else {
            0.0
        };

        Ok(Variables::new()
            .with(PAX_CG, inputs.scalar(SEATS_CG)?)
            .with(REAR_FRET_CG, rear.get::<meter>())
            .with(FRONT_FRET_CG, front))
    }
}
