//! Geometry models.
//!
//! - [`wing_chords`]: Root virtual chord and tip chord of a trapezoidal wing.

pub mod wing_chords;
