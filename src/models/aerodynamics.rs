//! Aerodynamic coefficient models.
//!
//! - [`yaw_damping`]: Wing contribution to the yaw moment due to yaw rate.
//! - [`nacelle_drag`]: Nacelle parasite drag referenced to the wing area.
//!
//! Components here take a `low_speed` option selecting the `low_speed` or
//! `cruise` namespace of their aerodynamic variables.

pub mod nacelle_drag;
pub mod yaw_damping;
