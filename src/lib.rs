//! # Aircraft Models
//!
//! Conceptual-design estimation models for light propeller aircraft, built on
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain models (aerodynamics, geometry, propulsion, weight).
//!   Each exposes a typed core API, a [`twine_core::Model`] adapter where the
//!   model has a natural typed input, and named-variable
//!   [`Component`](support::component::Component) adapters.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Named variables
//!
//! Components read and write variables by hierarchical, colon-separated names
//! (e.g. `data:geometry:wing:area`). Values are stored in the unit declared by
//! each component; a [`Group`](support::component::Group) chains components by
//! matching names.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code in this crate follows a natural progression as needs emerge:
//!
//! 1. **Model-specific**: Starts in a model's internal `core` module
//! 2. **Domain-specific**: If useful across models in a domain (e.g., `propulsion`),
//!    it moves to a domain-level module
//! 3. **Crate-level**: If useful across multiple domains or potentially useful
//!    outside this crate, it moves to [`support`]

pub mod models;
pub mod support;
