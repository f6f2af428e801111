//! Named-variable components for the IC engine.

use uom::si::{
    area::square_meter,
    f64::{Force, Length, Power},
    force::newton,
    length::meter,
    mass::kilogram,
    power::watt,
};

use crate::models::propulsion::propeller::{InstallationEffects, Propeller, PropellerMap};
use crate::support::{
    component::{Component, ComponentError},
    constraint::StrictlyPositive,
    variables::{Value, ValueKind, VariableError, VariableSpec, Variables},
};

use super::{
    BasicIcEngine, Column, EngineDimensions, EngineSetting, FlightPoints, FuelType,
    IcEngineParams, NacelleDimensions, PropulsionLayout, StrokeCount,
};

const MAX_POWER: &str = "data:propulsion:IC_engine:max_power";
const FUEL_TYPE: &str = "data:propulsion:IC_engine:fuel_type";
const STROKES: &str = "data:propulsion:IC_engine:strokes_nb";
const LAYOUT: &str = "data:geometry:propulsion:layout";

const PROPELLER: &str = "data:aerodynamics:propeller";
const CRUISE_ALTITUDE: &str = "data:aerodynamics:propeller:cruise_level:altitude";
const EFFICIENCY_LOW_SPEED: &str =
    "data:aerodynamics:propeller:installation_effect:effective_efficiency:low_speed";
const EFFICIENCY_CRUISE: &str =
    "data:aerodynamics:propeller:installation_effect:effective_efficiency:cruise";
const ADVANCE_RATIO: &str = "data:aerodynamics:propeller:installation_effect:effective_advance_ratio";

const MACH: &str = "flight_point:mach";
const ALTITUDE: &str = "flight_point:altitude";
const ENGINE_SETTING: &str = "flight_point:engine_setting";
const THRUST_IS_REGULATED: &str = "flight_point:thrust_is_regulated";
const THRUST_RATE: &str = "flight_point:thrust_rate";
const THRUST: &str = "flight_point:thrust";
const SFC: &str = "flight_point:sfc";

const LEVELS: [&str; 2] = ["sea_level", "cruise_level"];

/// Evaluates a [`BasicIcEngine`] at the flight points held in the store.
///
/// Flight point variables may be scalars or arrays. The optional
/// `thrust_is_regulated`, `thrust_rate`, and `thrust` inputs default to an
/// empty array, which means absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicIcEngineWrapper;

impl BasicIcEngineWrapper {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Component for BasicIcEngineWrapper {
    fn inputs(&self) -> Vec<VariableSpec> {
        let mut inputs = engine_inputs();
        for level in LEVELS {
            inputs.extend([
                VariableSpec::with_units(format!("{PROPELLER}:{level}:speed"), "m/s"),
                VariableSpec::with_units(format!("{PROPELLER}:{level}:thrust"), "N"),
                VariableSpec::with_units(format!("{PROPELLER}:{level}:thrust_limit"), "N"),
                VariableSpec::new(format!("{PROPELLER}:{level}:efficiency")),
            ]);
        }

        inputs.extend([
            VariableSpec::with_units(CRUISE_ALTITUDE, "m"),
            VariableSpec::new(EFFICIENCY_LOW_SPEED).default_value(1.0),
            VariableSpec::new(EFFICIENCY_CRUISE).default_value(1.0),
            VariableSpec::new(ADVANCE_RATIO).default_value(1.0),
            VariableSpec::new(MACH),
            VariableSpec::with_units(ALTITUDE, "m"),
            VariableSpec::new(ENGINE_SETTING),
            VariableSpec::new(THRUST_IS_REGULATED).default_value(Vec::<f64>::new()),
            VariableSpec::new(THRUST_RATE).default_value(Vec::<f64>::new()),
            VariableSpec::with_units(THRUST, "N").default_value(Vec::<f64>::new()),
        ]);
        inputs
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        vec![
            VariableSpec::with_units(SFC, "kg/s/N"),
            VariableSpec::new(THRUST_RATE),
            VariableSpec::with_units(THRUST, "N"),
        ]
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let engine = BasicIcEngine::new(engine_params(inputs)?, propeller(inputs)?);
        let points = flight_points(inputs)?;

        let output = engine
            .compute_flight_points(&points)
            .map_err(|err| ComponentError::model_failed("IC engine flight points", err))?;

        Ok(Variables::new()
            .with(SFC, to_value(output.sfc.map(|sfc| sfc.value)))
            .with(THRUST_RATE, to_value(output.thrust_rate))
            .with(THRUST, to_value(output.thrust.map(|t| t.get::<newton>()))))
    }
}

/// Sizes the engine and its nacelle from the maximum power.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeEngineDimensions;

impl ComputeEngineDimensions {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Component for ComputeEngineDimensions {
    fn inputs(&self) -> Vec<VariableSpec> {
        engine_inputs()
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        vec![
            VariableSpec::with_units("data:weight:propulsion:engine:uninstalled_mass", "kg"),
            VariableSpec::with_units("data:geometry:propulsion:engine:length", "m"),
            VariableSpec::with_units("data:geometry:propulsion:engine:height", "m"),
            VariableSpec::with_units("data:geometry:propulsion:engine:width", "m"),
            VariableSpec::with_units("data:geometry:propulsion:nacelle:length", "m"),
            VariableSpec::with_units("data:geometry:propulsion:nacelle:height", "m"),
            VariableSpec::with_units("data:geometry:propulsion:nacelle:width", "m"),
            VariableSpec::with_units("data:geometry:propulsion:nacelle:wet_area", "m**2"),
        ]
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let params = engine_params(inputs)?;
        let engine = EngineDimensions::scaled(params.max_power.into_inner(), params.fuel_type);
        let nacelle = NacelleDimensions::around(&engine, params.layout);

        Ok(Variables::new()
            .with(
                "data:weight:propulsion:engine:uninstalled_mass",
                engine.mass.get::<kilogram>(),
            )
            .with("data:geometry:propulsion:engine:length", engine.length.get::<meter>())
            .with("data:geometry:propulsion:engine:height", engine.height.get::<meter>())
            .with("data:geometry:propulsion:engine:width", engine.width.get::<meter>())
            .with("data:geometry:propulsion:nacelle:length", nacelle.length.get::<meter>())
            .with("data:geometry:propulsion:nacelle:height", nacelle.height.get::<meter>())
            .with("data:geometry:propulsion:nacelle:width", nacelle.width.get::<meter>())
            .with(
                "data:geometry:propulsion:nacelle:wet_area",
                nacelle.wet_area.get::<square_meter>(),
            ))
    }
}

/// Engine parameter declarations shared by the engine components.
pub(crate) fn engine_inputs() -> Vec<VariableSpec> {
    vec![
        VariableSpec::with_units(MAX_POWER, "W"),
        VariableSpec::new(FUEL_TYPE),
        VariableSpec::new(STROKES),
        VariableSpec::new(LAYOUT),
    ]
}

/// Reads and parses the engine parameters declared by [`engine_inputs`].
pub(crate) fn engine_params(inputs: &Variables) -> Result<IcEngineParams, ComponentError> {
    let max_power = StrictlyPositive::new(Power::new::<watt>(inputs.scalar(MAX_POWER)?))
        .map_err(|err| ComponentError::invalid_input(MAX_POWER, err))?;
    let invalid = |err| ComponentError::model_failed("IC engine parameters", err);

    Ok(IcEngineParams {
        max_power,
        fuel_type: FuelType::from_code(inputs.scalar(FUEL_TYPE)?).map_err(invalid)?,
        strokes: StrokeCount::from_code(inputs.scalar(STROKES)?).map_err(invalid)?,
        layout: PropulsionLayout::from_code(inputs.scalar(LAYOUT)?).map_err(invalid)?,
    })
}

fn propeller(inputs: &Variables) -> Result<Propeller, ComponentError> {
    let map = |level: &str| -> Result<PropellerMap, ComponentError> {
        let name = |field: &str| format!("{PROPELLER}:{level}:{field}");
        PropellerMap::new(
            inputs.array(&name("speed"))?.to_vec(),
            inputs.array(&name("thrust"))?.to_vec(),
            inputs.array(&name("thrust_limit"))?.to_vec(),
            inputs.table(&name("efficiency"))?.to_vec(),
        )
        .map_err(|err| ComponentError::model_failed(format!("propeller {level} map"), err))
    };

    let cruise_altitude = StrictlyPositive::new(Length::new::<meter>(inputs.scalar(CRUISE_ALTITUDE)?))
        .map_err(|err| ComponentError::invalid_input(CRUISE_ALTITUDE, err))?;

    Ok(
        Propeller::new(map("sea_level")?, map("cruise_level")?, cruise_altitude).with_installation(
            InstallationEffects {
                efficiency_low_speed: inputs.scalar(EFFICIENCY_LOW_SPEED)?,
                efficiency_cruise: inputs.scalar(EFFICIENCY_CRUISE)?,
                advance_ratio: inputs.scalar(ADVANCE_RATIO)?,
            },
        ),
    )
}

fn flight_points(inputs: &Variables) -> Result<FlightPoints, ComponentError> {
    let required = |name: &str| -> Result<Column<f64>, VariableError> {
        column(inputs, name)?.ok_or_else(|| VariableError::missing(name))
    };

    let setting_error = |err| ComponentError::model_failed("flight point engine setting", err);
    let engine_setting = match required(ENGINE_SETTING)? {
        Column::Scalar(code) => {
            Column::Scalar(EngineSetting::from_code(code).map_err(setting_error)?)
        }
        Column::Array(codes) => Column::Array(
            codes
                .into_iter()
                .map(EngineSetting::from_code)
                .collect::<Result<_, _>>()
                .map_err(setting_error)?,
        ),
    };

    let mut points = FlightPoints::new(
        required(MACH)?,
        required(ALTITUDE)?.map(Length::new::<meter>),
        engine_setting,
    );
    if let Some(regulated) = column(inputs, THRUST_IS_REGULATED)? {
        points = points.with_regulation(regulated.map(|flag| flag.round() != 0.0));
    }
    if let Some(rate) = column(inputs, THRUST_RATE)? {
        points = points.with_thrust_rate(rate);
    }
    if let Some(thrust) = column(inputs, THRUST)? {
        points = points.with_thrust(thrust.map(Force::new::<newton>));
    }
    Ok(points)
}

/// Reads a flight point column, treating an empty array as absent.
fn column(inputs: &Variables, name: &str) -> Result<Option<Column<f64>>, VariableError> {
    match inputs.get(name)? {
        Value::Scalar(value) => Ok(Some(Column::Scalar(*value))),
        Value::Array(values) if values.is_empty() => Ok(None),
        Value::Array(values) => Ok(Some(Column::Array(values.clone()))),
        Value::Table(_) => Err(VariableError::wrong_kind(name, ValueKind::Array)),
    }
}

fn to_value(column: Column<f64>) -> Value {
    match column {
        Column::Scalar(value) => Value::Scalar(value),
        Column::Array(values) => Value::Array(values),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::propulsion::ic_engine::test_support::sr22_engine_variables;

    #[test]
    fn scalar_flight_point() {
        let inputs = sr22_engine_variables()
            .with(MACH, 0.25)
            .with(ALTITUDE, 2_438.4)
            .with(ENGINE_SETTING, 2.0)
            .with(THRUST_RATE, 0.8)
            .with(THRUST_IS_REGULATED, Vec::<f64>::new())
            .with(THRUST, Vec::<f64>::new())
            .with(EFFICIENCY_LOW_SPEED, 1.0)
            .with(EFFICIENCY_CRUISE, 1.0)
            .with(ADVANCE_RATIO, 1.0);

        let outputs = BasicIcEngineWrapper::new().evaluate(&inputs).unwrap();

        assert!(matches!(outputs.get(THRUST).unwrap(), Value::Scalar(_)));
        assert_relative_eq!(outputs.scalar(THRUST).unwrap(), 1_377.039, epsilon = 1e-3);
        assert_relative_eq!(outputs.scalar(SFC).unwrap(), 7.985_045e-6, max_relative = 1e-6);
    }

    #[test]
    fn thrust_rate_beyond_full_throttle_fails() {
        let inputs = sr22_engine_variables()
            .with(MACH, 0.25)
            .with(ALTITUDE, 2_438.4)
            .with(ENGINE_SETTING, 2.0)
            .with(THRUST_RATE, 3.0);

        let err = BasicIcEngineWrapper::new().evaluate(&inputs).unwrap_err();
        assert!(matches!(err, ComponentError::ModelFailed { .. }));
    }

    #[test]
    fn array_flight_points_keep_shape() {
        let inputs = sr22_engine_variables()
            .with(MACH, vec![0.25, 0.2])
            .with(ALTITUDE, vec![2_438.4, 1_219.2])
            .with(ENGINE_SETTING, 1.0)
            .with(THRUST_IS_REGULATED, vec![0.0, 1.0])
            .with(THRUST_RATE, vec![0.8, 0.0])
            .with(THRUST, vec![0.0, 5_000.0])
            .with(EFFICIENCY_LOW_SPEED, 1.0)
            .with(EFFICIENCY_CRUISE, 1.0)
            .with(ADVANCE_RATIO, 1.0);

        let outputs = BasicIcEngineWrapper::new().evaluate(&inputs).unwrap();
        let thrust = outputs.array(THRUST).unwrap();
        let rate = outputs.array(THRUST_RATE).unwrap();

        assert_eq!(thrust.len(), 2);
        assert_relative_eq!(thrust[0], 1_377.039, epsilon = 1e-3);
        assert_relative_eq!(thrust[1], 2_360.326, epsilon = 1e-3);
        assert_relative_eq!(rate[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn unknown_fuel_is_a_model_failure() {
        let inputs = sr22_engine_variables().with(FUEL_TYPE, 5.0);

        let err = ComputeEngineDimensions::new().evaluate(&inputs).unwrap_err();
        assert!(matches!(err, ComponentError::ModelFailed { .. }));
    }

    #[test]
    fn non_positive_power_is_invalid() {
        let inputs = sr22_engine_variables().with(MAX_POWER, 0.0);

        let err = ComputeEngineDimensions::new().evaluate(&inputs).unwrap_err();
        assert!(matches!(err, ComponentError::InvalidInput { ref name, .. } if name == MAX_POWER));
    }

    #[test]
    fn engine_dimensions() {
        let outputs = ComputeEngineDimensions::new()
            .evaluate(&sr22_engine_variables())
            .unwrap();

        let scale = (231_000.0_f64 / 132_480.0).cbrt();
        assert_relative_eq!(
            outputs.scalar("data:geometry:propulsion:engine:length").unwrap(),
            0.83 * scale,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            outputs.scalar("data:geometry:propulsion:nacelle:length").unwrap(),
            1.15 * 0.83 * scale,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            outputs
                .scalar("data:weight:propulsion:engine:uninstalled_mass")
                .unwrap(),
            237.06,
            epsilon = 0.01
        );
    }
}
