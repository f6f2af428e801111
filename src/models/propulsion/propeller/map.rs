use crate::support::interp::{Grid2d, Table1d};

use super::PropellerMapError;

/// Propeller performance measured at one altitude.
///
/// Tables are in SI units: airspeed in m/s, thrust in N.
#[derive(Debug, Clone, PartialEq)]
pub struct PropellerMap {
    thrust_limit: Table1d,
    efficiency: Grid2d,
    min_thrust: f64,
}

impl PropellerMap {
    /// Builds a map from its axes and tables.
    ///
    /// - `speed`: airspeed axis, non-decreasing.
    /// - `thrust`: thrust axis, non-decreasing.
    /// - `thrust_limit`: maximum thrust at each `speed`.
    /// - `efficiency`: `efficiency[i][j]` at `(speed[i], thrust[j])`.
    ///
    /// # Errors
    ///
    /// Returns [`PropellerMapError::Table`] if a table is empty or sized
    /// inconsistently with its axes, or
    /// [`PropellerMapError::NonPositiveEfficiency`] if an efficiency entry is
    /// not strictly positive.
    pub fn new(
        speed: Vec<f64>,
        thrust: Vec<f64>,
        thrust_limit: Vec<f64>,
        efficiency: Vec<Vec<f64>>,
    ) -> Result<Self, PropellerMapError> {
        for (row, &v) in efficiency.iter().zip(&speed) {
            for (&eta, &t) in row.iter().zip(&thrust) {
                if eta.is_nan() || eta <= 0.0 {
                    return Err(PropellerMapError::NonPositiveEfficiency {
                        speed: v,
                        thrust: t,
                    });
                }
            }
        }

        let min_thrust = thrust.iter().copied().fold(f64::INFINITY, f64::min);
        let thrust_limit = Table1d::new(speed.clone(), thrust_limit)?;
        let efficiency = Grid2d::new(speed, thrust, efficiency)?;

        Ok(Self {
            thrust_limit,
            efficiency,
            min_thrust,
        })
    }

    /// Airspeed axis, in m/s.
    #[must_use]
    pub fn speed(&self) -> &[f64] {
        self.efficiency.rows()
    }

    /// Thrust axis, in N.
    #[must_use]
    pub fn thrust(&self) -> &[f64] {
        self.efficiency.cols()
    }

    pub(super) fn min_thrust(&self) -> f64 {
        self.min_thrust
    }

    /// Thrust limit in N at `speed` m/s.
    pub(super) fn thrust_limit(&self, speed: f64) -> f64 {
        self.thrust_limit.eval(speed)
    }

    /// Efficiency at `speed` m/s, with `thrust` N clamped to
    /// `[min thrust, thrust limit]`.
    pub(super) fn efficiency(&self, thrust: f64, speed: f64) -> f64 {
        let thrust = thrust.max(self.min_thrust).min(self.thrust_limit(speed));
        self.efficiency.eval(speed, thrust)
    }
}
