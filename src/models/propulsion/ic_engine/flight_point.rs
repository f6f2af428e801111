//! Flight point inputs and outputs.

use uom::si::{f64::Force, f64::Length};

use crate::models::propulsion::ic_engine::{EngineSetting, PropulsionError};
use crate::support::{
    constraint::{NonNegative, UnitInterval},
    units::SpecificFuelConsumption,
};

/// A flight point field holding one value or one value per point.
///
/// Scalars and length-one arrays broadcast against longer arrays.
#[derive(Debug, Clone, PartialEq)]
pub enum Column<T> {
    Scalar(T),
    Array(Vec<T>),
}

impl<T: Copy> Column<T> {
    /// Array length, or `None` for a scalar.
    #[must_use]
    pub fn array_len(&self) -> Option<usize> {
        match self {
            Self::Scalar(_) => None,
            Self::Array(values) => Some(values.len()),
        }
    }

    /// Value at point `index`, broadcasting scalars and length-one arrays.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for an array of length two or more.
    #[must_use]
    pub fn at(&self, index: usize) -> T {
        match self {
            Self::Scalar(value) => *value,
            Self::Array(values) if values.len() == 1 => values[0],
            Self::Array(values) => values[index],
        }
    }

    /// Applies `f` to every value, keeping the shape.
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Column<U> {
        match self {
            Self::Scalar(value) => Column::Scalar(f(*value)),
            Self::Array(values) => Column::Array(values.iter().map(|&v| f(v)).collect()),
        }
    }

    /// `true` for a scalar or a length-one array.
    fn is_single(&self) -> bool {
        self.array_len().is_none_or(|len| len == 1)
    }
}

/// Trajectory state at which the engine is evaluated.
///
/// Exactly how thrust is demanded depends on `thrust_is_regulated`:
///
/// - `None`: `thrust_rate` is used if given, otherwise `thrust`.
/// - A single flag: `true` reads `thrust`, `false` reads `thrust_rate`.
/// - One flag per point: both columns are required, one value per point.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPoints {
    pub mach: Column<f64>,
    pub altitude: Column<Length>,
    pub engine_setting: Column<EngineSetting>,
    pub thrust_is_regulated: Option<Column<bool>>,
    pub thrust_rate: Option<Column<f64>>,
    pub thrust: Option<Column<Force>>,
}

impl FlightPoints {
    /// Creates flight points with no thrust demand yet.
    #[must_use]
    pub fn new(
        mach: Column<f64>,
        altitude: Column<Length>,
        engine_setting: Column<EngineSetting>,
    ) -> Self {
        Self {
            mach,
            altitude,
            engine_setting,
            thrust_is_regulated: None,
            thrust_rate: None,
            thrust: None,
        }
    }

    #[must_use]
    pub fn with_thrust_rate(mut self, thrust_rate: Column<f64>) -> Self {
        self.thrust_rate = Some(thrust_rate);
        self
    }

    #[must_use]
    pub fn with_thrust(mut self, thrust: Column<Force>) -> Self {
        self.thrust = Some(thrust);
        self
    }

    #[must_use]
    pub fn with_regulation(mut self, thrust_is_regulated: Column<bool>) -> Self {
        self.thrust_is_regulated = Some(thrust_is_regulated);
        self
    }

    /// Common broadcast shape of all columns.
    pub(super) fn shape(&self) -> Result<Shape, PropulsionError> {
        let lens = [
            ("mach", self.mach.array_len()),
            ("altitude", self.altitude.array_len()),
            ("engine_setting", self.engine_setting.array_len()),
            (
                "thrust_is_regulated",
                self.thrust_is_regulated.as_ref().and_then(Column::array_len),
            ),
            ("thrust_rate", self.thrust_rate.as_ref().and_then(Column::array_len)),
            ("thrust", self.thrust.as_ref().and_then(Column::array_len)),
        ];

        let is_scalar = lens.iter().all(|(_, len)| len.is_none());
        let len = lens.iter().filter_map(|(_, len)| *len).max().unwrap_or(1);

        for (column, array_len) in lens {
            match array_len {
                Some(array_len) if array_len != 1 && array_len != len => {
                    return Err(PropulsionError::ShapeMismatch {
                        column,
                        len: array_len,
                        expected: len,
                    });
                }
                _ => {}
            }
        }

        Ok(Shape { len, is_scalar })
    }

    /// Resolves which of thrust or thrust rate drives each point.
    pub(super) fn thrust_demand(&self) -> Result<ThrustDemand<'_>, PropulsionError> {
        let rate = self.thrust_rate.as_ref();
        let thrust = self.thrust.as_ref();

        let Some(regulated) = &self.thrust_is_regulated else {
            return match (rate, thrust) {
                (Some(rate), _) => Ok(ThrustDemand::Rate(rate)),
                (None, Some(thrust)) => Ok(ThrustDemand::Thrust(thrust)),
                (None, None) => Err(PropulsionError::InconsistentThrustInputs(
                    "either thrust_rate or thrust should be provided",
                )),
            };
        };

        if regulated.is_single() {
            return if regulated.at(0) {
                thrust.map(ThrustDemand::Thrust).ok_or(
                    PropulsionError::InconsistentThrustInputs(
                        "thrust should be provided when thrust is regulated",
                    ),
                )
            } else {
                rate.map(ThrustDemand::Rate).ok_or(
                    PropulsionError::InconsistentThrustInputs(
                        "thrust_rate should be provided when thrust is not regulated",
                    ),
                )
            };
        }

        let (Some(rate), Some(thrust)) = (rate, thrust) else {
            return Err(PropulsionError::InconsistentThrustInputs(
                "both thrust_rate and thrust should be provided with per-point regulation flags",
            ));
        };
        if rate.array_len() != regulated.array_len() || thrust.array_len() != regulated.array_len()
        {
            return Err(PropulsionError::InconsistentThrustInputs(
                "thrust_rate and thrust should have the same length as the regulation flags",
            ));
        }

        Ok(ThrustDemand::Mixed {
            regulated,
            rate,
            thrust,
        })
    }
}

/// Computed engine state at each flight point, shaped like the input.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPointsOutput {
    pub sfc: Column<SpecificFuelConsumption>,
    pub thrust_rate: Column<f64>,
    pub thrust: Column<Force>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Shape {
    pub(super) len: usize,
    pub(super) is_scalar: bool,
}

impl Shape {
    /// Packs per-point values into a column of this shape.
    pub(super) fn column<T: Copy>(self, values: Vec<T>) -> Column<T> {
        match (self.is_scalar, values.as_slice()) {
            (true, [value]) => Column::Scalar(*value),
            _ => Column::Array(values),
        }
    }
}

/// How thrust is demanded across flight points.
#[derive(Debug, Clone, Copy)]
pub(super) enum ThrustDemand<'a> {
    Rate(&'a Column<f64>),
    Thrust(&'a Column<Force>),
    Mixed {
        regulated: &'a Column<bool>,
        rate: &'a Column<f64>,
        thrust: &'a Column<Force>,
    },
}

/// Thrust demand at a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Demand {
    Rate(f64),
    Thrust(Force),
}

impl ThrustDemand<'_> {
    /// Demand at point `index`.
    ///
    /// A thrust must be non-negative and a thrust rate must lie in `[0, 1]`.
    pub(super) fn at(&self, index: usize) -> Result<Demand, PropulsionError> {
        let demand = match *self {
            Self::Rate(rate) => Demand::Rate(rate.at(index)),
            Self::Thrust(thrust) => Demand::Thrust(thrust.at(index)),
            Self::Mixed {
                regulated,
                rate,
                thrust,
            } => {
                if regulated.at(index) {
                    Demand::Thrust(thrust.at(index))
                } else {
                    Demand::Rate(rate.at(index))
                }
            }
        };

        let check = match demand {
            Demand::Rate(rate) => UnitInterval::new(rate).map(|_| ()),
            Demand::Thrust(thrust) => NonNegative::new(thrust).map(|_| ()),
        };
        check.map_err(|source| PropulsionError::InvalidThrust { index, source })?;

        Ok(demand)
    }
}
