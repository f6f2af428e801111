//! Wing root virtual chord (l1) and tip chord (l4).
//!
//! The planform is a constant-chord center section out to the root station
//! `y2`, followed by a trapezoidal panel tapering to the tip station `y4`.
//! The root virtual chord is the chord of that panel extended to the root,
//! chosen so the reference area is matched:
//!
//! ```text
//! S = l1 · (2·y2 + (y4 − y2)·(1 + λ))
//! ```

use thiserror::Error;
use twine_core::Model;
use uom::si::{
    area::square_meter,
    f64::{Area, Length},
    length::meter,
};

use crate::support::{
    component::{Component, ComponentError},
    constraint::{Constrained, StrictlyPositive, UnitInterval},
    variables::{VariableSpec, Variables},
};

/// Errors raised when computing wing chords.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WingChordsError {
    /// The span stations leave no planform to carry the area.
    #[error("degenerate planform: root y={root_y:?}, tip y={tip_y:?}")]
    DegeneratePlanform { root_y: Length, tip_y: Length },
}

/// Reference area and span stations of a wing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WingPlanform {
    pub area: Constrained<Area, StrictlyPositive>,
    /// Spanwise station where the tapered panel starts.
    pub root_y: Length,
    /// Spanwise station of the tip.
    pub tip_y: Length,
    pub taper_ratio: Constrained<f64, UnitInterval>,
}

/// Chords of a [`WingPlanform`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WingChords {
    pub root_virtual: Length,
    pub tip: Length,
}

impl WingPlanform {
    /// Computes the root virtual chord and tip chord.
    ///
    /// # Errors
    ///
    /// Returns [`WingChordsError::DegeneratePlanform`] if the span stations
    /// give a non-positive equivalent span.
    pub fn chords(&self) -> Result<WingChords, WingChordsError> {
        let taper = self.taper_ratio.into_inner();
        let y2 = self.root_y.get::<meter>();
        let y4 = self.tip_y.get::<meter>();

        let span = 2.0 * y2 + (y4 - y2) * (1.0 + taper);
        if span.is_nan() || span <= 0.0 {
            return Err(WingChordsError::DegeneratePlanform {
                root_y: self.root_y,
                tip_y: self.tip_y,
            });
        }

        let root_virtual = self.area.into_inner().get::<square_meter>() / span;
        Ok(WingChords {
            root_virtual: Length::new::<meter>(root_virtual),
            tip: Length::new::<meter>(root_virtual * taper),
        })
    }
}

/// [`Model`] adapter over [`WingPlanform::chords`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WingChordsModel;

impl Model for WingChordsModel {
    type Input = WingPlanform;
    type Output = WingChords;
    type Error = WingChordsError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        input.chords()
    }
}

const AREA: &str = "data:geometry:wing:area";
const ROOT_Y: &str = "data:geometry:wing:root:y";
const TIP_Y: &str = "data:geometry:wing:tip:y";
const TAPER_RATIO: &str = "data:geometry:wing:taper_ratio";
const ROOT_VIRTUAL_CHORD: &str = "data:geometry:wing:root:virtual_chord";
const TIP_CHORD: &str = "data:geometry:wing:tip:chord";

/// Component computing the wing root virtual chord and tip chord.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeWingL1AndL4;

impl ComputeWingL1AndL4 {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Component for ComputeWingL1AndL4 {
    fn inputs(&self) -> Vec<VariableSpec> {
        vec![
            VariableSpec::with_units(AREA, "m**2"),
            VariableSpec::with_units(ROOT_Y, "m"),
            VariableSpec::with_units(TIP_Y, "m"),
            VariableSpec::new(TAPER_RATIO),
        ]
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        vec![
            VariableSpec::with_units(ROOT_VIRTUAL_CHORD, "m"),
            VariableSpec::with_units(TIP_CHORD, "m"),
        ]
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let planform = WingPlanform {
            area: StrictlyPositive::new(Area::new::<square_meter>(inputs.scalar(AREA)?))
                .map_err(|err| ComponentError::invalid_input(AREA, err))?,
            root_y: Length::new::<meter>(inputs.scalar(ROOT_Y)?),
            tip_y: Length::new::<meter>(inputs.scalar(TIP_Y)?),
            taper_ratio: UnitInterval::new(inputs.scalar(TAPER_RATIO)?)
                .map_err(|err| ComponentError::invalid_input(TAPER_RATIO, err))?,
        };

        let chords = WingChordsModel
            .call(&planform)
            .map_err(|err| ComponentError::model_failed("wing chords", err))?;

        Ok(Variables::new()
            .with(ROOT_VIRTUAL_CHORD, chords.root_virtual.get::<meter>())
            .with(TIP_CHORD, chords.tip.get::<meter>()))
    }
}
