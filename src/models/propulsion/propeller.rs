//! Propeller performance.
//!
//! A [`Propeller`] holds two [`PropellerMap`]s, one measured at sea level and
//! one at a cruise altitude. Between those levels, thrust limits and
//! efficiencies are blended linearly with altitude; above the cruise level the
//! cruise map is used unchanged.

mod error;
mod map;

pub use error::PropellerMapError;
pub use map::PropellerMap;

use uom::si::{
    f64::{Force, Length, Power, Ratio, Velocity},
    force::newton,
    length::meter,
    power::watt,
    ratio::ratio,
    velocity::meter_per_second,
};

use crate::support::constraint::{Constrained, StrictlyPositive};

/// Corrections applied to isolated-propeller maps once installed on an airframe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstallationEffects {
    /// Efficiency multiplier applied to the sea-level map.
    pub efficiency_low_speed: f64,

    /// Efficiency multiplier applied to the cruise-level map.
    pub efficiency_cruise: f64,

    /// Multiplier on airspeed before map lookup, representing the change in
    /// effective advance ratio behind the airframe.
    pub advance_ratio: f64,
}

impl Default for InstallationEffects {
    fn default() -> Self {
        Self {
            efficiency_low_speed: 1.0,
            efficiency_cruise: 1.0,
            advance_ratio: 1.0,
        }
    }
}

/// A propeller described by sea-level and cruise-level performance maps.
#[derive(Debug, Clone, PartialEq)]
pub struct Propeller {
    sea_level: PropellerMap,
    cruise_level: PropellerMap,
    cruise_altitude: f64,
    installation: InstallationEffects,
}

impl Propeller {
    /// Creates a propeller from its two maps and the altitude of the cruise map.
    #[must_use]
    pub fn new(
        sea_level: PropellerMap,
        cruise_level: PropellerMap,
        cruise_altitude: Constrained<Length, StrictlyPositive>,
    ) -> Self {
        Self {
            sea_level,
            cruise_level,
            cruise_altitude: cruise_altitude.into_inner().get::<meter>(),
            installation: InstallationEffects::default(),
        }
    }

    /// Applies installation effects.
    #[must_use]
    pub fn with_installation(mut self, installation: InstallationEffects) -> Self {
        self.installation = installation;
        self
    }

    #[must_use]
    pub fn sea_level(&self) -> &PropellerMap {
        &self.sea_level
    }

    #[must_use]
    pub fn cruise_level(&self) -> &PropellerMap {
        &self.cruise_level
    }

    #[must_use]
    pub fn cruise_altitude(&self) -> Length {
        Length::new::<meter>(self.cruise_altitude)
    }

    #[must_use]
    pub fn installation(&self) -> InstallationEffects {
        self.installation
    }

    /// Smallest thrust covered by the sea-level map.
    #[must_use]
    pub fn min_thrust(&self) -> Force {
        Force::new::<newton>(self.sea_level.min_thrust())
    }

    /// Maximum thrust the propeller can deliver at this airspeed and altitude.
    #[must_use]
    pub fn thrust_limit(&self, airspeed: Velocity, altitude: Length) -> Force {
        let speed = self.map_speed(airspeed);
        let lower = self.sea_level.thrust_limit(speed);
        let upper = self.cruise_level.thrust_limit(speed);
        Force::new::<newton>(lower + (upper - lower) * self.level_fraction(altitude))
    }

    /// Installed propeller efficiency when delivering `thrust`.
    ///
    /// Thrust is clamped into each map's valid range before lookup.
    #[must_use]
    pub fn efficiency(&self, thrust: Force, airspeed: Velocity, altitude: Length) -> Ratio {
        let thrust = thrust.get::<newton>();
        let speed = self.map_speed(airspeed);

        let lower = self.sea_level.efficiency(thrust, speed) * self.installation.efficiency_low_speed;
        let upper = self.cruise_level.efficiency(thrust, speed) * self.installation.efficiency_cruise;
        Ratio::new::<ratio>(lower + (upper - lower) * self.level_fraction(altitude))
    }

    /// Shaft power needed to deliver `thrust`, `T·V/η`.
    #[must_use]
    pub fn required_shaft_power(&self, thrust: Force, airspeed: Velocity, altitude: Length) -> Power {
        let eta = self.efficiency(thrust, airspeed, altitude).get::<ratio>();
        Power::new::<watt>(thrust.get::<newton>() * airspeed.get::<meter_per_second>() / eta)
    }

    fn map_speed(&self, airspeed: Velocity) -> f64 {
        airspeed.get::<meter_per_second>() * self.installation.advance_ratio
    }

    /// Position between the sea-level (0) and cruise-level (1) maps.
    fn level_fraction(&self, altitude: Length) -> f64 {
        altitude.get::<meter>().clamp(0.0, self.cruise_altitude) / self.cruise_altitude
    }
}
