//! Center-of-gravity estimation.
//!
//! Each item of the aircraft gets a longitudinal CG position `x`, measured
//! from the fuselage nose, from simple geometric rules. Items are then
//! aggregated by mass into the empty aircraft, loaded in several payload and
//! fuel scenarios, and reduced to the forward and aft CG limits used for
//! sizing.
//!
//! The [`Cg`] component chains every step. The main landing gear is placed
//! behind the aft CG limit, which itself depends on the main gear position,
//! so the chain is iterated until the main gear settles.
//!
//! # Example
//!
//! ```
//! use aircraft_models::models::weight::cg::{LoadCase, weighted_cg};
//! use uom::si::{f64::{Length, Mass}, length::meter, mass::kilogram};
//!
//! let (mass, x) = weighted_cg(&[
//!     (Mass::new::<kilogram>(600.0), Length::new::<meter>(2.5)),
//!     (Mass::new::<kilogram>(200.0), Length::new::<meter>(3.3)),
//! ])?;
//!
//! assert_eq!(mass.get::<kilogram>(), 800.0);
//! assert!((x.get::<meter>() - 2.7).abs() < 1e-12);
//!
//! let empty = LoadCase::new("empty", mass, x);
//! assert_eq!(empty.name, "empty");
//! # Ok::<(), aircraft_models::models::weight::cg::CgError>(())
//! ```

mod airframe;
mod furniture;
mod load_case;
mod max_min;
mod payload;
mod propulsion;
mod ratio_aft;
mod systems;
mod update_mlg;

#[cfg(test)]
pub(crate) mod test_support;

pub use airframe::{
    ComputeFlightControlCg, ComputeFuselageCg, ComputeLandingGearCg, ComputeTailCg, ComputeWingCg,
};
pub use furniture::{CabinLayout, ComputePassengerSeatsCg, SeatRow};
pub use load_case::{ComputeFlightCgCase, ComputeGroundCgCase};
pub use max_min::ComputeMaxMinCgRatio;
pub use payload::ComputePayloadCg;
pub use propulsion::{ComputeEngineCg, ComputeFuelLinesCg, ComputeTankCg};
pub use ratio_aft::ComputeCgRatioAft;
pub use systems::{ComputeLifeSupportCg, ComputeNavigationSystemsCg, ComputePowerSystemsCg};
pub use update_mlg::UpdateMlg;

use thiserror::Error;
use uom::si::{
    f64::{Length, Mass},
    length::meter,
    mass::kilogram,
};

use crate::models::propulsion::ic_engine::PropulsionLayout;
use crate::support::{
    component::{Component, ComponentError, CoupledConfig, Group},
    variables::{VariableSpec, Variables},
};

const MAC_LENGTH: &str = "data:geometry:wing:MAC:length";
const MAC_AT25: &str = "data:geometry:wing:MAC:at25percent:x";
const FUSELAGE_LENGTH: &str = "data:geometry:fuselage:length";
const FRONT_LENGTH: &str = "data:geometry:fuselage:front_length";
const CABIN_LENGTH: &str = "data:geometry:cabin:length";
const LAYOUT: &str = "data:geometry:propulsion:layout";

const ENGINE_CG: &str = "data:weight:propulsion:engine:CG:x";
const TANK_CG: &str = "data:weight:propulsion:tank:CG:x";
const FRONT_GEAR_CG: &str = "data:weight:airframe:landing_gear:front:CG:x";
const MAIN_GEAR_CG: &str = "data:weight:airframe:landing_gear:main:CG:x";
const SEATS_CG: &str = "data:weight:furniture:passenger_seats:CG:x";
const REAR_FRET_CG: &str = "data:weight:payload:rear_fret:CG:x";
const FRONT_FRET_CG: &str = "data:weight:payload:front_fret:CG:x";

const EMPTY_MASS: &str = "data:weight:aircraft_empty:mass";
const EMPTY_CG: &str = "data:weight:aircraft_empty:CG:x";
const EMPTY_MAC_POSITION: &str = "data:weight:aircraft:empty:CG:MAC_position";
const GROUND_MIN: &str = "data:weight:aircraft:CG:ground_condition:min:MAC_position";
const GROUND_MAX: &str = "data:weight:aircraft:CG:ground_condition:max:MAC_position";
const FLIGHT_MIN: &str = "data:weight:aircraft:CG:flight_condition:min:MAC_position";
const FLIGHT_MAX: &str = "data:weight:aircraft:CG:flight_condition:max:MAC_position";
const AFT_CG: &str = "data:weight:aircraft:CG:aft:x";

/// Errors raised when aggregating masses.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CgError {
    /// Nothing to aggregate.
    #[error("no items to aggregate")]
    Empty,

    /// The items carry no mass.
    #[error("total mass must be positive: {total:?}")]
    NonPositiveMass { total: Mass },
}

/// Total mass and mass-weighted CG of `items`.
///
/// # Errors
///
/// Returns [`CgError::Empty`] if `items` is empty, or
/// [`CgError::NonPositiveMass`] if the masses do not sum to a positive value.
pub fn weighted_cg(items: &[(Mass, Length)]) -> Result<(Mass, Length), CgError> {
    if items.is_empty() {
        return Err(CgError::Empty);
    }

    let (total, moment) = items.iter().fold((0.0, 0.0), |(total, moment), (m, x)| {
        let m = m.get::<kilogram>();
        (total + m, moment + m * x.get::<meter>())
    });

    if total.is_nan() || total <= 0.0 {
        return Err(CgError::NonPositiveMass {
            total: Mass::new::<kilogram>(total),
        });
    }

    Ok((
        Mass::new::<kilogram>(total),
        Length::new::<meter>(moment / total),
    ))
}

/// A named mass and its CG.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadCase {
    pub name: String,
    pub mass: Mass,
    pub x: Length,
}

impl LoadCase {
    #[must_use]
    pub fn new(name: impl Into<String>, mass: Mass, x: Length) -> Self {
        Self {
            name: name.into(),
            mass,
            x,
        }
    }

    /// Aggregates `parts` into a single case.
    ///
    /// # Errors
    ///
    /// See [`weighted_cg`].
    pub fn combine(name: impl Into<String>, parts: &[LoadCase]) -> Result<Self, CgError> {
        let items: Vec<_> = parts.iter().map(|part| (part.mass, part.x)).collect();
        let (mass, x) = weighted_cg(&items)?;
        Ok(Self::new(name, mass, x))
    }
}

/// Length and placement of the wing mean aerodynamic chord.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mac {
    pub length: Length,
    /// Position of the 25% MAC point.
    pub quarter_chord_x: Length,
}

impl Mac {
    #[must_use]
    pub fn leading_edge(&self) -> Length {
        self.quarter_chord_x - self.length * 0.25
    }

    /// Position of `x` as a fraction of the MAC, from its leading edge.
    #[must_use]
    pub fn position(&self, x: Length) -> f64 {
        ((x - self.leading_edge()) / self.length).value
    }

    /// Inverse of [`position`](Self::position).
    #[must_use]
    pub fn x_at(&self, position: f64) -> Length {
        self.leading_edge() + self.length * position
    }

    fn inputs() -> [VariableSpec; 2] {
        [
            VariableSpec::with_units(MAC_LENGTH, "m"),
            VariableSpec::with_units(MAC_AT25, "m"),
        ]
    }

    fn read(inputs: &Variables) -> Result<Self, ComponentError> {
        Ok(Self {
            length: length(inputs, MAC_LENGTH)?,
            quarter_chord_x: length(inputs, MAC_AT25)?,
        })
    }
}

/// The full CG chain, iterated on the main landing gear position.
pub struct Cg {
    group: Group,
    config: CoupledConfig,
}

impl Cg {
    #[must_use]
    pub fn new() -> Self {
        let group = Group::new()
            .with("wing", ComputeWingCg)
            .with("fuselage", ComputeFuselageCg)
            .with("tail", ComputeTailCg)
            .with("flight_controls", ComputeFlightControlCg)
            .with("landing_gear", ComputeLandingGearCg)
            .with("engine", ComputeEngineCg)
            .with("tank", ComputeTankCg)
            .with("fuel_lines", ComputeFuelLinesCg)
            .with("power_systems", ComputePowerSystemsCg)
            .with("life_support", ComputeLifeSupportCg)
            .with("navigation", ComputeNavigationSystemsCg)
            .with("passenger_seats", ComputePassengerSeatsCg)
            .with("payload", ComputePayloadCg)
            .with("ratio_aft", ComputeCgRatioAft)
            .with("ground_case", ComputeGroundCgCase)
            .with("flight_case", ComputeFlightCgCase)
            .with("max_min", ComputeMaxMinCgRatio)
            .with("update_mlg", UpdateMlg);

        Self {
            group,
            config: CoupledConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: CoupledConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the chain on `store` until the main gear settles.
    ///
    /// `store` must hold an initial main gear position. Returns the number of
    /// passes performed.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::NotConverged`] if the main gear does not
    /// settle, or any error raised by a member.
    pub fn run(&self, store: &mut Variables) -> Result<usize, ComponentError> {
        self.group.run_coupled(store, &[MAIN_GEAR_CG], self.config)
    }
}

impl Default for Cg {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Cg {
    fn inputs(&self) -> Vec<VariableSpec> {
        self.group.inputs()
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        self.group.outputs()
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let mut store = inputs.clone();
        self.run(&mut store)?;

        let mut outputs = Variables::new();
        for spec in self.outputs() {
            let value = store.get(&spec.name)?.clone();
            outputs.insert(spec.name, value);
        }
        Ok(outputs)
    }
}

fn length(inputs: &Variables, name: &str) -> Result<Length, ComponentError> {
    Ok(Length::new::<meter>(inputs.scalar(name)?))
}

fn mass(inputs: &Variables, name: &str) -> Result<Mass, ComponentError> {
    Ok(Mass::new::<kilogram>(inputs.scalar(name)?))
}

fn layout(inputs: &Variables) -> Result<PropulsionLayout, ComponentError> {
    PropulsionLayout::from_code(inputs.scalar(LAYOUT)?)
        .map_err(|err| ComponentError::model_failed("propulsion layout", err))
}
