//! Supporting utilities shared by models.
//!
//! - [`atmosphere`]: International Standard Atmosphere.
//! - [`component`]: Named-variable component contract, groups, and submodel registry.
//! - [`constraint`]: Type-level numeric constraints.
//! - [`interp`]: Table interpolation.
//! - [`units`]: Extensions to [`uom`].
//! - [`variables`]: Named physical variable store.

pub mod atmosphere;
pub mod component;
pub mod constraint;
pub mod interp;
pub mod units;
pub mod variables;
