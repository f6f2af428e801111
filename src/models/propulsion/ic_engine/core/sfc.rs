//! Power lapse and fuel consumption regressions.

use log::warn;
use uom::si::{
    f64::{MassRate, Power},
    mass_rate::kilogram_per_second,
    power::{kilowatt, watt},
    ratio::ratio,
};

use crate::models::propulsion::ic_engine::{FuelType, StrokeCount};
use crate::support::{atmosphere::Atmosphere, units::PowerSpecificFuelConsumption};

/// Shaft power available at altitude, `P·(σ − (1 − σ)/7.55)`.
pub(super) fn available_power(max_power: Power, atmosphere: &Atmosphere) -> Power {
    let sigma = atmosphere.density_ratio().get::<ratio>();
    max_power * (sigma - (1.0 - sigma) / 7.55)
}

/// Power-specific fuel consumption at full available power.
///
/// Regressions in g/kWh against available power in kW, by fuel and cycle.
/// Jet fuel has no regression of its own and uses the gasoline curves.
///
/// The diesel curves fall linearly with power and turn negative beyond about
/// 240 kW (four-stroke) and 437 kW (two-stroke) of available power. Such
/// values are returned unchanged with a warning.
pub(super) fn sfc_at_max_power(
    max_power: Power,
    fuel_type: FuelType,
    strokes: StrokeCount,
    atmosphere: &Atmosphere,
) -> PowerSpecificFuelConsumption {
    let p = available_power(max_power, atmosphere).get::<kilowatt>();

    let fuel_type = if fuel_type == FuelType::JetFuel {
        warn!("no fuel consumption regression for jet fuel, using gasoline");
        FuelType::Gasoline
    } else {
        fuel_type
    };

    let grams_per_kwh = match (fuel_type, strokes) {
        (FuelType::Diesel, StrokeCount::Two) => -0.765 * p + 334.94,
        (FuelType::Diesel, StrokeCount::Four) => -0.964 * p + 231.91,
        (_, StrokeCount::Two) => 1125.9 * p.powf(-0.2441),
        (_, StrokeCount::Four) => -0.0011 * p * p + 0.5905 * p + 228.58,
    };

    if grams_per_kwh <= 0.0 {
        warn!(
            "{fuel_type:?} {strokes:?}-stroke SFC regression is {grams_per_kwh:.1} g/kWh \
             at {p:.1} kW, outside its valid power range"
        );
    }

    MassRate::new::<kilogram_per_second>(grams_per_kwh / 1e6 / 3600.0) / Power::new::<watt>(1.0)
}

/// Ratio of part-power to full-power SFC at a given power rate.
pub(super) fn sfc_ratio(power_rate: f64) -> f64 {
    -0.9976 * power_rate * power_rate + 1.9964 * power_rate
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Length, length::meter};

    fn psfc_g_per_kwh(psfc: PowerSpecificFuelConsumption) -> f64 {
        psfc.value * 1e6 * 3600.0
    }

    #[test]
    fn no_lapse_at_sea_level() {
        let power = available_power(Power::new::<kilowatt>(231.0), &Atmosphere::sea_level());
        assert_relative_eq!(power.get::<kilowatt>(), 231.0, epsilon = 1e-9);
    }

    #[test]
    fn power_lapses_with_density() {
        let atm = Atmosphere::new(Length::new::<meter>(2_438.4));
        let sigma = atm.density_ratio().get::<ratio>();
        let power = available_power(Power::new::<kilowatt>(231.0), &atm);

        assert_relative_eq!(
            power.get::<kilowatt>(),
            231.0 * (sigma - (1.0 - sigma) / 7.55),
            epsilon = 1e-9
        );
        assert!(power.get::<kilowatt>() < 231.0 * sigma);
    }

    #[test]
    fn regressions_at_sea_level() {
        let sl = Atmosphere::sea_level();
        let p = Power::new::<kilowatt>(150.0);

        let gas_4 = sfc_at_max_power(p, FuelType::Gasoline, StrokeCount::Four, &sl);
        assert_relative_eq!(
            psfc_g_per_kwh(gas_4),
            -0.0011 * 150.0_f64.powi(2) + 0.5905 * 150.0 + 228.58,
            epsilon = 1e-6
        );

        let gas_2 = sfc_at_max_power(p, FuelType::Gasoline, StrokeCount::Two, &sl);
        assert_relative_eq!(
            psfc_g_per_kwh(gas_2),
            1125.9 * 150.0_f64.powf(-0.2441),
            epsilon = 1e-6
        );

        let diesel_4 = sfc_at_max_power(p, FuelType::Diesel, StrokeCount::Four, &sl);
        assert_relative_eq!(psfc_g_per_kwh(diesel_4), -0.964 * 150.0 + 231.91, epsilon = 1e-6);

        let diesel_2 = sfc_at_max_power(p, FuelType::Diesel, StrokeCount::Two, &sl);
        assert_relative_eq!(psfc_g_per_kwh(diesel_2), -0.765 * 150.0 + 334.94, epsilon = 1e-6);
    }

    #[test]
    fn diesel_regression_leaves_its_range_above_240_kw() {
        let sl = Atmosphere::sea_level();

        let valid = sfc_at_max_power(
            Power::new::<kilowatt>(240.0),
            FuelType::Diesel,
            StrokeCount::Four,
            &sl,
        );
        assert!(valid.value > 0.0);

        let beyond = sfc_at_max_power(
            Power::new::<kilowatt>(300.0),
            FuelType::Diesel,
            StrokeCount::Four,
            &sl,
        );
        assert_relative_eq!(psfc_g_per_kwh(beyond), -0.964 * 300.0 + 231.91, epsilon = 1e-6);
        assert!(beyond.value < 0.0);
    }

    #[test]
    fn jet_fuel_falls_back_to_gasoline() {
        let sl = Atmosphere::sea_level();
        let p = Power::new::<kilowatt>(150.0);

        assert_relative_eq!(
            sfc_at_max_power(p, FuelType::JetFuel, StrokeCount::Four, &sl).value,
            sfc_at_max_power(p, FuelType::Gasoline, StrokeCount::Four, &sl).value
        );
    }

    #[test]
    fn ratio_curve() {
        assert_eq!(sfc_ratio(0.0), 0.0);
        assert_relative_eq!(sfc_ratio(1.0), 0.9988, epsilon = 1e-12);
        assert_relative_eq!(sfc_ratio(0.5), -0.9976 * 0.25 + 1.9964 * 0.5, epsilon = 1e-12);
    }
}
