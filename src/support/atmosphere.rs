//! International Standard Atmosphere.

use uom::si::{
    f64::{Length, MassDensity, Pressure, Ratio, ThermodynamicTemperature, Velocity},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

const SEA_LEVEL_TEMPERATURE: f64 = 288.15;
const SEA_LEVEL_PRESSURE: f64 = 101_325.0;
const LAPSE_RATE: f64 = -0.0065;
const TROPOPAUSE_ALTITUDE: f64 = 11_000.0;
const GRAVITY: f64 = 9.806_65;
const GAS_CONSTANT: f64 = 287.052_87;
const HEAT_CAPACITY_RATIO: f64 = 1.4;

/// Static air properties at one geometric altitude.
///
/// The troposphere has a constant lapse rate of −6.5 K/km up to 11 km. Above
/// that the air is isothermal at 216.65 K, which is exact up to 20 km and
/// extrapolated beyond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    altitude: f64,
    temperature: f64,
    pressure: f64,
}

impl Atmosphere {
    /// Evaluates the standard atmosphere at `altitude`.
    #[must_use]
    pub fn new(altitude: Length) -> Self {
        let altitude = altitude.get::<meter>();
        let (temperature, pressure) = temperature_and_pressure(altitude);
        Self {
            altitude,
            temperature,
            pressure,
        }
    }

    /// Sea-level conditions.
    #[must_use]
    pub fn sea_level() -> Self {
        Self::new(Length::new::<meter>(0.0))
    }

    #[must_use]
    pub fn altitude(&self) -> Length {
        Length::new::<meter>(self.altitude)
    }

    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(self.temperature)
    }

    #[must_use]
    pub fn pressure(&self) -> Pressure {
        Pressure::new::<pascal>(self.pressure)
    }

    #[must_use]
    pub fn density(&self) -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(self.density_si())
    }

    #[must_use]
    pub fn speed_of_sound(&self) -> Velocity {
        Velocity::new::<meter_per_second>(
            (HEAT_CAPACITY_RATIO * GAS_CONSTANT * self.temperature).sqrt(),
        )
    }

    /// Density relative to sea level, σ = ρ/ρ₀.
    #[must_use]
    pub fn density_ratio(&self) -> Ratio {
        let sea_level = SEA_LEVEL_PRESSURE / (GAS_CONSTANT * SEA_LEVEL_TEMPERATURE);
        Ratio::new::<ratio>(self.density_si() / sea_level)
    }

    /// True airspeed at the given Mach number.
    #[must_use]
    pub fn true_airspeed(&self, mach: f64) -> Velocity {
        self.speed_of_sound() * mach
    }

    fn density_si(&self) -> f64 {
        self.pressure / (GAS_CONSTANT * self.temperature)
    }
}

fn temperature_and_pressure(altitude: f64) -> (f64, f64) {
    let exponent = -GRAVITY / (LAPSE_RATE * GAS_CONSTANT);

    if altitude <= TROPOPAUSE_ALTITUDE {
        let temperature = SEA_LEVEL_TEMPERATURE + LAPSE_RATE * altitude;
        let pressure =
            SEA_LEVEL_PRESSURE * (temperature / SEA_LEVEL_TEMPERATURE).powf(exponent);
        return (temperature, pressure);
    }

    let (temperature, tropopause_pressure) = temperature_and_pressure(TROPOPAUSE_ALTITUDE);
    let pressure = tropopause_pressure
        * (-GRAVITY * (altitude - TROPOPAUSE_ALTITUDE) / (GAS_CONSTANT * temperature)).exp();
    (temperature, pressure)
}
