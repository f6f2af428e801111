//! Aircraft design models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized by design discipline:
//!
//! - [`aerodynamics`]: Stability derivatives and parasite drag.
//! - [`geometry`]: Planform quantities derived from the wing definition.
//! - [`propulsion`]: Propellers and piston engines.
//! - [`weight`]: Center-of-gravity estimation.
//!
//! # Model structure
//!
//! Computation lives in typed functions and structs using `uom` quantities.
//! Where a model has a natural input and output, a [`twine_core::Model`]
//! implementation is a thin adapter over that typed API.
//!
//! Each model is also exposed as one or more [`Component`]s, which read and
//! write named variables. Components are registered under symbolic submodel
//! keys by [`Registry::with_defaults`], so an alternative implementation can
//! replace any of them.

pub mod aerodynamics;
pub mod geometry;
pub mod propulsion;
pub mod weight;

use crate::support::component::{Component, ComponentOptions, Registry};

use self::aerodynamics::{nacelle_drag::ComputeNacelleDrag, yaw_damping::CnYawRateWing};
use self::geometry::wing_chords::ComputeWingL1AndL4;
use self::propulsion::ic_engine::{BasicIcEngineWrapper, ComputeEngineDimensions};
use self::weight::cg::{
    Cg, ComputeCgRatioAft, ComputeEngineCg, ComputeFlightCgCase, ComputeFlightControlCg,
    ComputeFuelLinesCg, ComputeFuselageCg, ComputeGroundCgCase, ComputeLandingGearCg,
    ComputeLifeSupportCg, ComputeMaxMinCgRatio, ComputeNavigationSystemsCg,
    ComputePassengerSeatsCg, ComputePayloadCg, ComputePowerSystemsCg, ComputeTailCg,
    ComputeTankCg, ComputeWingCg, UpdateMlg,
};

fn boxed(component: impl Component + 'static) -> Box<dyn Component> {
    Box::new(component)
}

impl Registry {
    /// Creates a registry holding every component of this crate.
    ///
    /// Keys follow `submodel.<discipline>.<item>`. Aerodynamic components
    /// honor [`ComponentOptions::low_speed_aero`].
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register("submodel.aerodynamics.wing.cn_r", |options: &ComponentOptions| {
            boxed(CnYawRateWing::new().low_speed(options.low_speed_aero))
        });
        registry.register("submodel.aerodynamics.nacelle.cd0", |options: &ComponentOptions| {
            boxed(ComputeNacelleDrag::new().low_speed(options.low_speed_aero))
        });
        registry.register("submodel.geometry.wing.l1_l4", |_: &ComponentOptions| {
            boxed(ComputeWingL1AndL4::new())
        });
        registry.register("submodel.propulsion.ic_engine", |_: &ComponentOptions| {
            boxed(BasicIcEngineWrapper::new())
        });
        registry.register("submodel.propulsion.ic_engine.dimensions", |_: &ComponentOptions| {
            boxed(ComputeEngineDimensions::new())
        });

        registry.register("submodel.weight.cg", |_: &ComponentOptions| boxed(Cg::new()));
        registry.register("submodel.weight.cg.airframe.wing", |_: &ComponentOptions| {
            boxed(ComputeWingCg)
        });
        registry.register("submodel.weight.cg.airframe.fuselage", |_: &ComponentOptions| {
            boxed(ComputeFuselageCg)
        });
        registry.register("submodel.weight.cg.airframe.tail", |_: &ComponentOptions| {
            boxed(ComputeTailCg)
        });
        registry.register("submodel.weight.cg.airframe.flight_controls", |_: &ComponentOptions| {
            boxed(ComputeFlightControlCg)
        });
        registry.register("submodel.weight.cg.airframe.landing_gear", |_: &ComponentOptions| {
            boxed(ComputeLandingGearCg)
        });
        registry.register("submodel.weight.cg.propulsion.engine", |_: &ComponentOptions| {
            boxed(ComputeEngineCg)
        });
        registry.register("submodel.weight.cg.propulsion.tank", |_: &ComponentOptions| {
            boxed(ComputeTankCg)
        });
        registry.register("submodel.weight.cg.propulsion.fuel_lines", |_: &ComponentOptions| {
            boxed(ComputeFuelLinesCg)
        });
        registry.register("submodel.weight.cg.systems.power", |_: &ComponentOptions| {
            boxed(ComputePowerSystemsCg)
        });
        registry.register("submodel.weight.cg.systems.life_support", |_: &ComponentOptions| {
            boxed(ComputeLifeSupportCg)
        });
        registry.register("submodel.weight.cg.systems.navigation", |_: &ComponentOptions| {
            boxed(ComputeNavigationSystemsCg)
        });
        registry.register("submodel.weight.cg.furniture.seats", |_: &ComponentOptions| {
            boxed(ComputePassengerSeatsCg)
        });
        registry.register("submodel.weight.cg.payload", |_: &ComponentOptions| {
            boxed(ComputePayloadCg)
        });
        registry.register("submodel.weight.cg.ratio_aft", |_: &ComponentOptions| {
            boxed(ComputeCgRatioAft)
        });
        registry.register("submodel.weight.cg.load_case.ground", |_: &ComponentOptions| {
            boxed(ComputeGroundCgCase)
        });
        registry.register("submodel.weight.cg.load_case.flight", |_: &ComponentOptions| {
            boxed(ComputeFlightCgCase)
        });
        registry.register("submodel.weight.cg.max_min", |_: &ComponentOptions| {
            boxed(ComputeMaxMinCgRatio)
        });
        registry.register("submodel.weight.cg.update_mlg", |_: &ComponentOptions| {
            boxed(UpdateMlg)
        });

        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::{
        component::ComponentError,
        variables::{VariableSpec, Variables},
    };

    const CN_R_KEY: &str = "submodel.aerodynamics.wing.cn_r";

    /// Fixed Cn_r, standing in for a higher-fidelity estimate.
    struct FixedCnR;

    impl Component for FixedCnR {
        fn inputs(&self) -> Vec<VariableSpec> {
            Vec::new()
        }

        fn outputs(&self) -> Vec<VariableSpec> {
            vec![VariableSpec::new("data:aerodynamics:wing:cruise:Cn_r")]
        }

        fn compute(&self, _inputs: &Variables) -> Result<Variables, ComponentError> {
            Ok(Variables::new().with("data:aerodynamics:wing:cruise:Cn_r", -0.012))
        }
    }

    #[test]
    fn defaults_cover_every_model() {
        let registry = Registry::with_defaults();

        for key in [
            CN_R_KEY,
            "submodel.aerodynamics.nacelle.cd0",
            "submodel.geometry.wing.l1_l4",
            "submodel.propulsion.ic_engine",
            "submodel.weight.cg",
            "submodel.weight.cg.update_mlg",
        ] {
            assert!(registry.contains(key), "missing {key}");
        }
        assert_eq!(registry.keys().filter(|key| key.starts_with("submodel.weight.cg")).count(), 19);
    }

    #[test]
    fn options_select_namespace() {
        let registry = Registry::with_defaults();
        let low_speed = ComponentOptions {
            low_speed_aero: true,
        };

        let component = registry.build(CN_R_KEY, &low_speed).unwrap();
        assert_eq!(
            component.outputs()[0].name,
            "data:aerodynamics:wing:low_speed:Cn_r"
        );

        let component = registry.build(CN_R_KEY, &ComponentOptions::default()).unwrap();
        assert_eq!(component.outputs()[0].name, "data:aerodynamics:wing:cruise:Cn_r");
    }

    #[test]
    fn swap_in_replaces_default() {
        let mut registry = Registry::with_defaults();
        let previous = registry.register(CN_R_KEY, |_: &ComponentOptions| boxed(FixedCnR));
        assert!(previous.is_some());

        let outputs = registry
            .build(CN_R_KEY, &ComponentOptions::default())
            .unwrap()
            .evaluate(&Variables::new())
            .unwrap();
        assert_relative_eq!(
            outputs.scalar("data:aerodynamics:wing:cruise:Cn_r").unwrap(),
            -0.012
        );
    }
}
