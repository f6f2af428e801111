//! Engine and nacelle dimensions from reference-engine scaling.

use uom::si::{
    area::square_meter,
    f64::{Area, Length, Mass, Power},
    length::meter,
    mass::pound,
    power::{horsepower, watt},
};

use crate::models::propulsion::ic_engine::{FuelType, PropulsionLayout};

/// An existing engine whose size is scaled to the requested power.
struct ReferenceEngine {
    max_power: f64,
    length: f64,
    height: f64,
    width: f64,
}

/// Lycoming IO-360-B1A.
const GASOLINE_REFERENCE: ReferenceEngine = ReferenceEngine {
    max_power: 132_480.0,
    length: 0.83,
    height: 0.57,
    width: 0.85,
};

/// TDA CR 1.9 16V.
const DIESEL_REFERENCE: ReferenceEngine = ReferenceEngine {
    max_power: 160_000.0,
    length: 0.859,
    height: 0.659,
    width: 0.650,
};

/// Uninstalled engine mass and bounding-box dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineDimensions {
    pub power_sl: Power,
    pub mass: Mass,
    pub length: Length,
    pub height: Length,
    pub width: Length,
}

impl EngineDimensions {
    /// Scales the reference engine for `fuel_type` to `max_power`.
    ///
    /// Each dimension grows with the cube root of the power ratio.
    #[must_use]
    pub fn scaled(max_power: Power, fuel_type: FuelType) -> Self {
        let reference = match fuel_type {
            FuelType::Gasoline => &GASOLINE_REFERENCE,
            FuelType::Diesel | FuelType::JetFuel => &DIESEL_REFERENCE,
        };
        let scale = (max_power.get::<watt>() / reference.max_power).cbrt();

        Self {
            power_sl: max_power,
            mass: uninstalled_mass(max_power),
            length: Length::new::<meter>(reference.length * scale),
            height: Length::new::<meter>(reference.height * scale),
            width: Length::new::<meter>(reference.width * scale),
        }
    }
}

/// Nacelle enclosing an engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NacelleDimensions {
    pub length: Length,
    pub height: Length,
    pub width: Length,
    pub wet_area: Area,
}

impl NacelleDimensions {
    /// Sizes the nacelle around `engine`.
    ///
    /// Nose installations use a shorter cowling, matching the nose-to-firewall
    /// length of current single-engine tractors.
    #[must_use]
    pub fn around(engine: &EngineDimensions, layout: PropulsionLayout) -> Self {
        let length_factor = match layout {
            PropulsionLayout::Nose => 1.15,
            PropulsionLayout::Wing | PropulsionLayout::RearFuselage => 1.50,
        };

        let length = engine.length * length_factor;
        let height = engine.height * 1.1;
        let width = engine.width * 1.1;
        let wet_area = Area::new::<square_meter>(
            2.0 * (height.get::<meter>() + width.get::<meter>()) * length.get::<meter>(),
        );

        Self {
            length,
            height,
            width,
            wet_area,
        }
    }
}

/// Uninstalled engine mass from Gudmundsson, eq. 6-44.
///
/// The regression gives pounds from horsepower and is floored at zero for
/// very small engines.
#[must_use]
pub fn uninstalled_mass(max_power: Power) -> Mass {
    let hp = max_power.get::<horsepower>();
    Mass::new::<pound>(((hp - 21.55) / 0.5515).max(0.0))
}
