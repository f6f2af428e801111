//! Propulsion models.
//!
//! - [`propeller`]: Propeller performance maps with altitude blending.
//! - [`ic_engine`]: Parametric internal-combustion engine driving a propeller.

pub mod ic_engine;
pub mod propeller;
