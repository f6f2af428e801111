//! Nacelle parasite drag.
//!
//! Skin friction follows the fully turbulent flat-plate correlation with a
//! compressibility correction (Roskam, vol. 6). The form factor is Raymer's
//! nacelle expression, and a fixed interference area accounts for the
//! wing-nacelle junction.

use thiserror::Error;
use uom::si::{
    area::square_meter,
    f64::{Area, Length, Ratio},
    length::meter,
    ratio::ratio,
};

use crate::models::propulsion::ic_engine::{
    EngineDimensions, NacelleDimensions, engine_inputs, engine_params,
};
use crate::support::{
    component::{Component, ComponentError, aero_namespace},
    units::UnitReynolds,
    variables::{VariableSpec, Variables},
};

/// Errors raised by the nacelle drag model.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NacelleDragError {
    /// The skin friction correlation needs a Reynolds number above one.
    #[error("nacelle Reynolds number {reynolds} is too low")]
    ReynoldsTooLow { reynolds: f64 },
}

/// Drag area `cf·FF·S_wet` of a nacelle plus its interference area.
///
/// # Errors
///
/// Returns [`NacelleDragError::ReynoldsTooLow`] if the Reynolds number based
/// on nacelle length is not above one.
pub fn nacelle_drag_area(
    nacelle: &NacelleDimensions,
    mach: f64,
    unit_reynolds: UnitReynolds,
    wing_mac: Length,
) -> Result<Area, NacelleDragError> {
    let length = nacelle.length.get::<meter>();
    let height = nacelle.height.get::<meter>();
    let width = nacelle.width.get::<meter>();

    let reynolds = unit_reynolds.value * length;
    if reynolds.is_nan() || reynolds <= 1.0 {
        return Err(NacelleDragError::ReynoldsTooLow { reynolds });
    }

    let cf = 0.455 / ((1.0 + 0.144 * mach * mach).powf(0.65) * reynolds.log10().powf(2.58));
    let fineness = length / (4.0 * height * width / std::f64::consts::PI).sqrt();
    let form_factor = 1.0 + 0.35 / fineness;
    let interference = 0.036 * width * wing_mac.get::<meter>() * 0.04;

    Ok(Area::new::<square_meter>(
        cf * form_factor * nacelle.wet_area.get::<square_meter>() + interference,
    ))
}

const WING_MAC: &str = "data:geometry:wing:MAC:length";
const WING_AREA: &str = "data:geometry:wing:area";
const ENGINE_COUNT: &str = "data:geometry:propulsion:engine:count";

/// Nacelle CD0 referenced to the wing area, for all installed engines.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeNacelleDrag {
    low_speed: bool,
}

impl ComputeNacelleDrag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and writes the `low_speed` namespace instead of `cruise`.
    #[must_use]
    pub fn low_speed(mut self, low_speed: bool) -> Self {
        self.low_speed = low_speed;
        self
    }

    fn name(&self, template: &str) -> String {
        aero_namespace(template, self.low_speed)
    }
}

impl Component for ComputeNacelleDrag {
    fn inputs(&self) -> Vec<VariableSpec> {
        let mut inputs = engine_inputs();
        inputs.extend([
            VariableSpec::new(ENGINE_COUNT).default_value(1.0),
            VariableSpec::new(self.name("data:aerodynamics:{ns}:mach")),
            VariableSpec::with_units(self.name("data:aerodynamics:{ns}:unit_reynolds"), "m**-1"),
            VariableSpec::with_units(WING_MAC, "m"),
            VariableSpec::with_units(WING_AREA, "m**2"),
        ]);
        inputs
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        vec![VariableSpec::new(self.name("data:aerodynamics:nacelles:{ns}:CD0"))]
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let params = engine_params(inputs)?;
        let engine = EngineDimensions::scaled(params.max_power.into_inner(), params.fuel_type);
        let nacelle = NacelleDimensions::around(&engine, params.layout);

        let mach = inputs.scalar(&self.name("data:aerodynamics:{ns}:mach"))?;
        let unit_reynolds = Ratio::new::<ratio>(
            inputs.scalar(&self.name("data:aerodynamics:{ns}:unit_reynolds"))?,
        ) / Length::new::<meter>(1.0);
        let wing_mac = Length::new::<meter>(inputs.scalar(WING_MAC)?);

        let drag_area = nacelle_drag_area(&nacelle, mach, unit_reynolds, wing_mac)
            .map_err(|err| ComponentError::model_failed("nacelle drag", err))?;
        let cd0 = inputs.scalar(ENGINE_COUNT)? * drag_area.get::<square_meter>()
            / inputs.scalar(WING_AREA)?;

        Ok(Variables::new().with(self.name("data:aerodynamics:nacelles:{ns}:CD0"), cd0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Power, power::kilowatt};

    use crate::models::propulsion::ic_engine::{FuelType, PropulsionLayout};

    fn sr22_nacelle() -> NacelleDimensions {
        let engine = EngineDimensions::scaled(Power::new::<kilowatt>(231.0), FuelType::Gasoline);
        NacelleDimensions::around(&engine, PropulsionLayout::Nose)
    }

    fn per_meter(value: f64) -> UnitReynolds {
        Ratio::new::<ratio>(value) / Length::new::<meter>(1.0)
    }

    #[test]
    fn cruise_drag_area() {
        let area = nacelle_drag_area(
            &sr22_nacelle(),
            0.25,
            per_meter(4.7e6),
            Length::new::<meter>(1.24),
        )
        .unwrap();

        assert_relative_eq!(area.get::<square_meter>(), 0.020_794, epsilon = 1e-6);
    }

    #[test]
    fn compressibility_lowers_friction() {
        let nacelle = sr22_nacelle();
        let mac = Length::new::<meter>(1.24);

        let slow = nacelle_drag_area(&nacelle, 0.1, per_meter(4.7e6), mac).unwrap();
        let fast = nacelle_drag_area(&nacelle, 0.5, per_meter(4.7e6), mac).unwrap();
        assert!(fast < slow);
    }

    #[test]
    fn rejects_tiny_reynolds() {
        let result = nacelle_drag_area(
            &sr22_nacelle(),
            0.25,
            per_meter(0.5),
            Length::new::<meter>(1.24),
        );
        assert!(matches!(result, Err(NacelleDragError::ReynoldsTooLow { .. })));
    }

    #[test]
    fn component_normalizes_by_wing_area() {
        let inputs = Variables::new()
            .with("data:propulsion:IC_engine:max_power", 231_000.0)
            .with("data:propulsion:IC_engine:fuel_type", 1.0)
            .with("data:propulsion:IC_engine:strokes_nb", 4.0)
            .with("data:geometry:propulsion:layout", 3.0)
            .with(ENGINE_COUNT, 1.0)
            .with("data:aerodynamics:cruise:mach", 0.25)
            .with("data:aerodynamics:cruise:unit_reynolds", 4.7e6)
            .with(WING_MAC, 1.24)
            .with(WING_AREA, 13.5);

        let outputs = ComputeNacelleDrag::new().evaluate(&inputs).unwrap();
        assert_relative_eq!(
            outputs.scalar("data:aerodynamics:nacelles:cruise:CD0").unwrap(),
            0.020_794 / 13.5,
            epsilon = 1e-7
        );

        let low_speed = ComputeNacelleDrag::new().low_speed(true);
        assert!(
            low_speed
                .outputs()
                .iter()
                .all(|spec| spec.name.contains(":low_speed:"))
        );
        assert!(low_speed.evaluate(&inputs).is_err());
    }
}
