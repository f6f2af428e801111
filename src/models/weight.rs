//! Mass and balance models.
//!
//! - [`cg`]: Center-of-gravity positions of aircraft items, loading cases,
//!   and the resulting CG envelope.

pub mod cg;
