use uom::si::{f64::Length, length::meter};

use crate::models::propulsion::ic_engine::PropulsionLayout;
use crate::support::{
    component::{Component, ComponentError},
    variables::{VariableSpec, Variables},
};

use super::{FRONT_GEAR_CG, FRONT_LENGTH, FUSELAGE_LENGTH, LAYOUT, MAC_AT25, Mac, layout, length};

const MAC_LE_LOCAL: &str = "data:geometry:wing:MAC:leading_edge:x:local";
const SPAN: &str = "data:geometry:wing:span";
const ROOT_Y: &str = "data:geometry:wing:root:y";
const ROOT_CHORD: &str = "data:geometry:wing:root:chord";
const TIP_Y: &str = "data:geometry:wing:tip:y";
const TIP_CHORD: &str = "data:geometry:wing:tip:chord";
const TIP_LE_LOCAL: &str = "data:geometry:wing:tip:leading_edge:x:local";

const HT_MAC: &str = "data:geometry:horizontal_tail:MAC:length";
const HT_ARM: &str = "data:geometry:horizontal_tail:MAC:at25percent:x:from_wingMAC25";
const VT_MAC: &str = "data:geometry:vertical_tail:MAC:length";
const VT_ARM: &str = "data:geometry:vertical_tail:MAC:at25percent:x:from_wingMAC25";

const WING_CG: &str = "data:weight:airframe:wing:CG:x";
const FUSELAGE_CG: &str = "data:weight:airframe:fuselage:CG:x";
const HT_CG: &str = "data:weight:airframe:horizontal_tail:CG:x";
const VT_CG: &str = "data:weight:airframe:vertical_tail:CG:x";
const FLIGHT_CONTROLS_CG: &str = "data:weight:airframe:flight_controls:CG:x";

/// Spanwise station of the wing CG, as a fraction of the half span.
const WING_CG_STATION: f64 = 0.4;

/// Chordwise position of wing and tail CGs, as a fraction of the local chord.
const STRUCTURE_CG_CHORD: f64 = 0.42;

/// Wing CG at 42% of the local chord, 40% of the half span out.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeWingCg;

impl Component for ComputeWingCg {
    fn inputs(&self) -> Vec<VariableSpec> {
        let mut inputs = Mac::inputs().to_vec();
        inputs.extend(
            [
                MAC_LE_LOCAL,
                SPAN,
                ROOT_Y,
                ROOT_CHORD,
                TIP_Y,
                TIP_CHORD,
                TIP_LE_LOCAL,
            ]
            .map(|name| VariableSpec::with_units(name, "m")),
        );
        inputs
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        vec![VariableSpec::with_units(WING_CG, "m")]
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let mac = Mac::read(inputs)?;
        let root_y = length(inputs, ROOT_Y)?;
        let root_chord = length(inputs, ROOT_CHORD)?;
        let tip_y = length(inputs, TIP_Y)?;
        let station = length(inputs, SPAN)? * (0.5 * WING_CG_STATION);

        // Inside the root station the chord is constant and unswept.
        let (chord, leading_edge) = if station > root_y {
            let fraction = ((station - root_y) / (tip_y - root_y)).value;
            (
                root_chord + (length(inputs, TIP_CHORD)? - root_chord) * fraction,
                length(inputs, TIP_LE_LOCAL)? * fraction,
            )
        } else {
            (root_chord, Length::new::<meter>(0.0))
        };

        let root_leading_edge = mac.leading_edge() - length(inputs, MAC_LE_LOCAL)?;
        let x = root_leading_edge + leading_edge + chord * STRUCTURE_CG_CHORD;

        Ok(Variables::new().with(WING_CG, x.get::<meter>()))
    }
}

/// Fuselage CG at 45% of its length with a nose engine, 48% otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeFuselageCg;

impl Component for ComputeFuselageCg {
    fn inputs(&self) -> Vec<VariableSpec> {
        vec![
            VariableSpec::with_units(FUSELAGE_LENGTH, "m"),
            VariableSpec::new(LAYOUT),
        ]
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        vec![VariableSpec::with_units(FUSELAGE_CG, "m")]
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let fraction = match layout(inputs)? {
            PropulsionLayout::Nose => 0.45,
            PropulsionLayout::Wing | PropulsionLayout::RearFuselage => 0.48,
        };
        let x = length(inputs, FUSELAGE_LENGTH)? * fraction;

        Ok(Variables::new().with(FUSELAGE_CG, x.get::<meter>()))
    }
}

/// Horizontal and vertical tail CGs at 42% of each tail MAC.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeTailCg;

impl Component for ComputeTailCg {
    fn inputs(&self) -> Vec<VariableSpec> {
        [MAC_AT25, HT_MAC, HT_ARM, VT_MAC, VT_ARM]
            .map(|name| VariableSpec::with_units(name, "m"))
            .to_vec()
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        vec![
            VariableSpec::with_units(HT_CG, "m"),
            VariableSpec::with_units(VT_CG, "m"),
        ]
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let wing_quarter_chord = length(inputs, MAC_AT25)?;
        let tail_cg = |mac: &str, arm: &str| -> Result<f64, ComponentError> {
            let mac = length(inputs, mac)?;
            let x = wing_quarter_chord + length(inputs, arm)? + mac * (STRUCTURE_CG_CHORD - 0.25);
            Ok(x.get::<meter>())
        };

        Ok(Variables::new()
            .with(HT_CG, tail_cg(HT_MAC, HT_ARM)?)
            .with(VT_CG, tail_cg(VT_MAC, VT_ARM)?))
    }
}

/// Flight controls at the wing MAC trailing edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeFlightControlCg;

impl Component for ComputeFlightControlCg {
    fn inputs(&self) -> Vec<VariableSpec> {
        Mac::inputs().to_vec()
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        vec![VariableSpec::with_units(FLIGHT_CONTROLS_CG, "m")]
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let mac = Mac::read(inputs)?;
        let x = mac.leading_edge() + mac.length;

        Ok(Variables::new().with(FLIGHT_CONTROLS_CG, x.get::<meter>()))
    }
}

/// Nose gear at 75% of the nose length.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeLandingGearCg;

impl Component for ComputeLandingGearCg {
    fn inputs(&self) -> Vec<VariableSpec> {
        vec![VariableSpec::with_units(FRONT_LENGTH, "m")]
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        vec![VariableSpec::with_units(FRONT_GEAR_CG, "m")]
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let x = length(inputs, FRONT_LENGTH)? * 0.75;
        Ok(Variables::new().with(FRONT_GEAR_CG, x.get::<meter>()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::weight::cg::test_support::sr22_cg_variables;

    fn run(component: &impl Component, name: &str) -> f64 {
        component
            .evaluate(&sr22_cg_variables())
            .unwrap()
            .scalar(name)
            .unwrap()
    }

    #[test]
    fn wing() {
        assert_relative_eq!(run(&ComputeWingCg, WING_CG), 2.983_571, epsilon = 1e-6);
    }

    #[test]
    fn wing_station_inside_root() {
        let inputs = sr22_cg_variables().with(ROOT_Y, 2.5);
        let x = ComputeWingCg.evaluate(&inputs).unwrap().scalar(WING_CG).unwrap();

        // 2.8392 - 0.3 - 0.14 + 0.42 * 1.49
        assert_relative_eq!(x, 3.025, epsilon = 1e-9);
    }

    #[test]
    fn fuselage_depends_on_layout() {
        assert_relative_eq!(run(&ComputeFuselageCg, FUSELAGE_CG), 3.564, epsilon = 1e-9);

        let inputs = sr22_cg_variables().with(LAYOUT, 1.0);
        let x = ComputeFuselageCg.evaluate(&inputs).unwrap().scalar(FUSELAGE_CG).unwrap();
        assert_relative_eq!(x, 0.48 * 7.92, epsilon = 1e-9);

        let inputs = sr22_cg_variables().with(LAYOUT, 5.0);
        assert!(matches!(
            ComputeFuselageCg.evaluate(&inputs),
            Err(ComponentError::ModelFailed { .. })
        ));
    }

    #[test]
    fn tails() {
        let outputs = ComputeTailCg.evaluate(&sr22_cg_variables()).unwrap();
        assert_relative_eq!(outputs.scalar(HT_CG).unwrap(), 6.9727, epsilon = 1e-9);
        assert_relative_eq!(outputs.scalar(VT_CG).unwrap(), 6.9207, epsilon = 1e-9);
    }

    #[test]
    fn flight_controls() {
        assert_relative_eq!(
            run(&ComputeFlightControlCg, FLIGHT_CONTROLS_CG),
            3.7392,
            epsilon = 1e-9
        );
    }

    #[test]
    fn front_gear() {
        assert_relative_eq!(run(&ComputeLandingGearCg, FRONT_GEAR_CG), 1.08, epsilon = 1e-9);
    }
}
