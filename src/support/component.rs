//! Named-variable component contract.
//!
//! A [`Component`] declares the variables it reads and writes, then computes
//! its outputs from a [`Variables`] store holding its inputs. Components know
//! nothing about each other: a [`Group`] wires them together by matching
//! variable names and runs them in order.
//!
//! Submodels can be swapped by symbolic key through a [`Registry`].

mod error;
mod group;
mod registry;

pub use error::ComponentError;
pub use group::{CoupledConfig, Group};
pub use registry::{ComponentOptions, Factory, Registry};

use crate::support::variables::{VariableSpec, Variables};

/// A unit of computation over named variables.
pub trait Component: Send + Sync {
    /// Variables read by [`compute`](Self::compute).
    fn inputs(&self) -> Vec<VariableSpec>;

    /// Variables written by [`compute`](Self::compute).
    fn outputs(&self) -> Vec<VariableSpec>;

    /// Computes outputs from inputs.
    ///
    /// The `inputs` store holds at least every variable declared by
    /// [`inputs`](Self::inputs), with defaults already applied.
    ///
    /// # Errors
    ///
    /// Returns a [`ComponentError`] if an input is missing or invalid, or if
    /// the underlying model fails.
    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError>;

    /// Computes outputs from a store that may omit defaulted inputs.
    ///
    /// Selects the declared inputs from `store`, applying defaults for absent
    /// ones, then calls [`compute`](Self::compute).
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::Variable`] if an input without default is
    /// absent, or any error raised by [`compute`](Self::compute).
    fn evaluate(&self, store: &Variables) -> Result<Variables, ComponentError> {
        let inputs = store.select(&self.inputs())?;
        self.compute(&inputs)
    }
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn inputs(&self) -> Vec<VariableSpec> {
        (**self).inputs()
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        (**self).outputs()
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        (**self).compute(inputs)
    }
}

/// Selects the `low_speed` or `cruise` namespace of an aerodynamic variable.
///
/// Replaces the `{ns}` placeholder in `template`.
pub(crate) fn aero_namespace(template: &str, low_speed: bool) -> String {
    template.replace("{ns}", if low_speed { "low_speed" } else { "cruise" })
}
