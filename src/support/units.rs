//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., length, mass, power).
//! This module provides quantities that are useful for propulsion modeling but
//! aren't included in [`uom`].
//!
//! ## Specific fuel consumption
//!
//! Thrust-specific fuel consumption is a fuel mass flow per unit thrust, and
//! power-specific fuel consumption is a fuel mass flow per unit shaft power:
//!
//! ```
//! use aircraft_models::support::units::{PowerSpecificFuelConsumption, SpecificFuelConsumption};
//! use uom::si::{
//!     f64::{Force, MassRate, Power},
//!     force::newton,
//!     mass_rate::kilogram_per_second,
//!     power::watt,
//! };
//!
//! let fuel_flow = MassRate::new::<kilogram_per_second>(0.012);
//! let psfc: PowerSpecificFuelConsumption = fuel_flow / Power::new::<watt>(150e3);
//! let tsfc: SpecificFuelConsumption = fuel_flow / Force::new::<newton>(2_400.0);
//! assert!(psfc.value > 0.0 && tsfc.value > 0.0);
//! ```
//!
//! ## Unit Reynolds number
//!
//! Skin friction models take the Reynolds number per meter of reference
//! length, [`UnitReynolds`], and multiply it by a body length.

mod quantities;

pub use quantities::{PowerSpecificFuelConsumption, SpecificFuelConsumption, UnitReynolds};
