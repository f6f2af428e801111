//! Wing contribution to yaw damping, Cn_r.
//!
//! The yaw moment due to yaw rate of a wing has a lift part, scaling with
//! CL², and a profile drag part, scaling with CD0 (Roskam, part VI, §10.2.8).
//! Both chart factors are encoded as closed-form regressions of the handbook
//! figures and evaluated at a reference angle of attack. The fuselage
//! contribution is neglected.

use std::convert::Infallible;

use twine_core::Model;
use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};

use crate::support::{
    component::{Component, ComponentError, aero_namespace},
    constraint::{Constrained, StrictlyPositive, UnitInterval},
    variables::{VariableSpec, Variables},
};

/// Static margin range covered by the handbook charts.
const STATIC_MARGIN_RANGE: (f64, f64) = (-0.2, 0.5);

/// Wing planform and aerodynamic state at the reference condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YawDampingInput {
    pub aspect_ratio: Constrained<f64, StrictlyPositive>,
    pub taper_ratio: Constrained<f64, UnitInterval>,
    /// Quarter-chord sweep.
    pub sweep_25: Angle,
    /// Stick-fixed static margin as a fraction of MAC.
    pub static_margin: f64,
    pub reference_aoa: Angle,
    pub cd0: f64,
    pub cl0_clean: f64,
    /// Lift curve slope, per radian.
    pub cl_alpha: f64,
}

impl YawDampingInput {
    /// Wing lift coefficient at the reference angle of attack.
    #[must_use]
    pub fn lift_coefficient(&self) -> f64 {
        self.cl0_clean + self.cl_alpha * self.reference_aoa.get::<radian>()
    }
}

/// Lift-effect chart factor, (Cn_r/CL²).
#[must_use]
pub fn lift_effect(
    static_margin: f64,
    sweep_25: Angle,
    aspect_ratio: Constrained<f64, StrictlyPositive>,
    taper_ratio: Constrained<f64, UnitInterval>,
) -> f64 {
    let aspect_ratio = aspect_ratio.into_inner();
    let taper = taper_ratio.into_inner();
    let sweep = sweep_25.get::<radian>().sin().powi(2);

    -(0.008 + 0.25 / aspect_ratio)
        * (1.0 - 0.2 * (1.0 - taper))
        * (1.0 + 1.5 * sweep)
        * (1.0 + 0.6 * chart_margin(static_margin))
}

/// Drag-effect chart factor, (Cn_r/CD0).
#[must_use]
pub fn drag_effect(
    static_margin: f64,
    sweep_25: Angle,
    aspect_ratio: Constrained<f64, StrictlyPositive>,
) -> f64 {
    let aspect_ratio = aspect_ratio.into_inner();
    let sweep = sweep_25.get::<radian>().sin().powi(2);

    -(0.26 + 0.3 / aspect_ratio) * (1.0 + 0.8 * sweep) * (1.0 + 0.2 * chart_margin(static_margin))
}

fn chart_margin(static_margin: f64) -> f64 {
    static_margin.clamp(STATIC_MARGIN_RANGE.0, STATIC_MARGIN_RANGE.1)
}

/// Wing yaw damping derivative Cn_r, per radian.
#[derive(Debug, Clone, Copy, Default)]
pub struct WingYawDamping;

impl Model for WingYawDamping {
    type Input = YawDampingInput;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let cl = input.lift_coefficient();
        let lift = lift_effect(
            input.static_margin,
            input.sweep_25,
            input.aspect_ratio,
            input.taper_ratio,
        );
        let drag = drag_effect(input.static_margin, input.sweep_25, input.aspect_ratio);

        Ok(lift * cl * cl + drag * input.cd0)
    }
}

const ASPECT_RATIO: &str = "data:geometry:wing:aspect_ratio";
const TAPER_RATIO: &str = "data:geometry:wing:taper_ratio";
const SWEEP_25: &str = "data:geometry:wing:sweep_25";
const STATIC_MARGIN: &str = "data:handling_qualities:stick_fixed_static_margin";
const REFERENCE_AOA: &str = "settings:aerodynamics:reference_flight_conditions:AOA";

/// Component computing `data:aerodynamics:wing:{ns}:Cn_r`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CnYawRateWing {
    low_speed: bool,
}

impl CnYawRateWing {
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

impl Component for CnYawRateWing {
    fn inputs(&self) -> Vec<VariableSpec> {
        vec![
            VariableSpec::new(ASPECT_RATIO),
            VariableSpec::new(TAPER_RATIO),
            VariableSpec::with_units(SWEEP_25, "rad"),
            VariableSpec::new(STATIC_MARGIN),
            VariableSpec::with_units(REFERENCE_AOA, "rad")
                .default_value(Angle::new::<degree>(5.0).get::<radian>()),
            VariableSpec::new(self.name("data:aerodynamics:wing:{ns}:CD0")),
            VariableSpec::new(self.name("data:aerodynamics:wing:{ns}:CL0_clean")),
            VariableSpec::with_units(self.name("data:aerodynamics:wing:{ns}:CL_alpha"), "rad**-1"),
        ]
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        vec![VariableSpec::with_units(
            self.name("data:aerodynamics:wing:{ns}:Cn_r"),
            "rad**-1",
        )]
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let input = YawDampingInput {
            aspect_ratio: StrictlyPositive::new(inputs.scalar(ASPECT_RATIO)?)
                .map_err(|err| ComponentError::invalid_input(ASPECT_RATIO, err))?,
            taper_ratio: UnitInterval::new(inputs.scalar(TAPER_RATIO)?)
                .map_err(|err| ComponentError::invalid_input(TAPER_RATIO, err))?,
            sweep_25: Angle::new::<radian>(inputs.scalar(SWEEP_25)?),
            static_margin: inputs.scalar(STATIC_MARGIN)?,
            reference_aoa: Angle::new::<radian>(inputs.scalar(REFERENCE_AOA)?),
            cd0: inputs.scalar(&self.name("data:aerodynamics:wing:{ns}:CD0"))?,
            cl0_clean: inputs.scalar(&self.name("data:aerodynamics:wing:{ns}:CL0_clean"))?,
            cl_alpha: inputs.scalar(&self.name("data:aerodynamics:wing:{ns}:CL_alpha"))?,
        };

        let Ok(cn_r) = WingYawDamping.call(&input);
        Ok(Variables::new().with(self.name("data:aerodynamics:wing:{ns}:Cn_r"), cn_r))
    }
}
