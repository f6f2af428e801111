//! Enumerated engine options.
//!
//! Variable stores carry these as floating-point codes; each type parses its
//! code after rounding to the nearest integer.

use super::PropulsionError;

/// Rounds a stored code to a small non-negative integer.
fn code(value: f64) -> Option<u8> {
    let rounded = value.round();
    (0.0..=f64::from(u8::MAX))
        .contains(&rounded)
        .then_some(rounded as u8)
}

/// Engine rating used at a flight point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineSetting {
    Takeoff,
    Climb,
    Cruise,
    Idle,
}

impl EngineSetting {
    /// Parses a setting code: takeoff (0), climb (1), cruise (2), idle (3).
    ///
    /// # Errors
    ///
    /// Returns [`PropulsionError::UnknownEngineSetting`] for any other code.
    pub fn from_code(value: f64) -> Result<Self, PropulsionError> {
        match code(value) {
            Some(0) => Ok(Self::Takeoff),
            Some(1) => Ok(Self::Climb),
            Some(2) => Ok(Self::Cruise),
            Some(3) => Ok(Self::Idle),
            _ => Err(PropulsionError::UnknownEngineSetting(value)),
        }
    }

    /// Mixture coefficient applied at this setting.
    #[must_use]
    pub fn mixture(self) -> f64 {
        match self {
            Self::Takeoff | Self::Climb => 1.5,
            Self::Cruise | Self::Idle => 1.0,
        }
    }
}

/// Fuel burned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelType {
    Gasoline,
    Diesel,
    JetFuel,
}

impl FuelType {
    /// Parses a fuel code: gasoline (1), diesel (2), jet fuel (3).
    ///
    /// # Errors
    ///
    /// Returns [`PropulsionError::UnknownFuelType`] for any other code.
    pub fn from_code(value: f64) -> Result<Self, PropulsionError> {
        match code(value) {
            Some(1) => Ok(Self::Gasoline),
            Some(2) => Ok(Self::Diesel),
            Some(3) => Ok(Self::JetFuel),
            _ => Err(PropulsionError::UnknownFuelType(value)),
        }
    }
}

/// Engine cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCount {
    Two,
    Four,
}

impl StrokeCount {
    /// Parses a stroke count of 2 or 4.
    ///
    /// # Errors
    ///
    /// Returns [`PropulsionError::UnknownStrokeCount`] for any other value.
    pub fn from_code(value: f64) -> Result<Self, PropulsionError> {
        match code(value) {
            Some(2) => Ok(Self::Two),
            Some(4) => Ok(Self::Four),
            _ => Err(PropulsionError::UnknownStrokeCount(value)),
        }
    }
}

/// Where the engine is installed on the airframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropulsionLayout {
    /// Wing-mounted nacelles.
    Wing,
    /// Pusher engine at the rear of the fuselage.
    RearFuselage,
    /// Tractor engine in the fuselage nose.
    Nose,
}

impl PropulsionLayout {
    /// Parses a layout code: wing (1), rear fuselage (2), nose (3).
    ///
    /// # Errors
    ///
    /// Returns [`PropulsionError::UnknownLayout`] for any other code.
    pub fn from_code(value: f64) -> Result<Self, PropulsionError> {
        match code(value) {
            Some(1) => Ok(Self::Wing),
            Some(2) => Ok(Self::RearFuselage),
            Some(3) => Ok(Self::Nose),
            _ => Err(PropulsionError::UnknownLayout(value)),
        }
    }
}
