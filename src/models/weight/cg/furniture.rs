use uom::si::{f64::Length, length::meter};

use crate::support::{
    component::{Component, ComponentError},
    constraint::{NonNegative, StrictlyPositive},
    variables::{VariableSpec, Variables},
};

use super::{FRONT_LENGTH, SEATS_CG, length};

const PILOT_ROW_LENGTH: &str = "data:geometry:cabin:seats:pilot:length";
const PASSENGER_ROW_LENGTH: &str = "data:geometry:cabin:seats:passenger:length";
const SEATS_PER_ROW: &str = "data:geometry:cabin:seats:passenger:count_by_row";
const PASSENGERS: &str = "data:geometry:cabin:seats:passenger:NPAX_max";

/// Seats in the pilot row.
const PILOT_SEATS: u32 = 2;

/// A row of seats and the position of its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeatRow {
    pub x: Length,
    pub seats: u32,
}

/// Seat rows of the cabin, starting at the firewall.
///
/// The pilot row comes first. Passenger rows follow it, each full except
/// possibly the last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CabinLayout {
    pub firewall: Length,
    pub pilot_row_length: Length,
    pub passenger_row_length: Length,
    pub seats_per_row: u32,
    pub passengers: u32,
}

impl CabinLayout {
    #[must_use]
    pub fn pilot_row(&self) -> SeatRow {
        SeatRow {
            x: self.firewall + self.pilot_row_length * 0.5,
            seats: PILOT_SEATS,
        }
    }

    #[must_use]
    pub fn passenger_rows(&self) -> Vec<SeatRow> {
        let first = self.firewall + self.pilot_row_length;
        let mut rows = Vec::new();
        let mut remaining = self.passengers;
        let mut index = 0_u32;

        while remaining > 0 {
            let seats = remaining.min(self.seats_per_row);
            rows.push(SeatRow {
                x: first + self.passenger_row_length * (f64::from(index) + 0.5),
                seats,
            });
            remaining -= seats;
            index += 1;
        }
        rows
    }

    /// Position just behind the last seat row.
    #[must_use]
    pub fn rear_end(&self) -> Length {
        let rows = self.passengers.div_ceil(self.seats_per_row);
        self.firewall + self.pilot_row_length + self.passenger_row_length * f64::from(rows)
    }

    /// Seat-count-weighted center of all rows.
    #[must_use]
    pub fn seats_cg(&self) -> Length {
        let rows: Vec<_> = std::iter::once(self.pilot_row())
            .chain(self.passenger_rows())
            .collect();
        let seats: f64 = rows.iter().map(|row| f64::from(row.seats)).sum();
        let moment: f64 = rows
            .iter()
            .map(|row| f64::from(row.seats) * row.x.get::<meter>())
            .sum();

        Length::new::<meter>(moment / seats)
    }

    pub(super) fn inputs() -> Vec<VariableSpec> {
        vec![
            VariableSpec::with_units(FRONT_LENGTH, "m"),
            VariableSpec::with_units(PILOT_ROW_LENGTH, "m"),
            VariableSpec::with_units(PASSENGER_ROW_LENGTH, "m"),
            VariableSpec::new(SEATS_PER_ROW),
            VariableSpec::new(PASSENGERS),
        ]
    }

    pub(super) fn read(inputs: &Variables) -> Result<Self, ComponentError> {
        let seats_per_row = StrictlyPositive::new(inputs.scalar(SEATS_PER_ROW)?)
            .map_err(|err| ComponentError::invalid_input(SEATS_PER_ROW, err))?;
        let passengers = NonNegative::new(inputs.scalar(PASSENGERS)?)
            .map_err(|err| ComponentError::invalid_input(PASSENGERS, err))?;

        Ok(Self {
            firewall: length(inputs, FRONT_LENGTH)?,
            pilot_row_length: length(inputs, PILOT_ROW_LENGTH)?,
            passenger_row_length: length(inputs, PASSENGER_ROW_LENGTH)?,
            seats_per_row: seat_count(seats_per_row.into_inner()).max(1),
            passengers: seat_count(passengers.into_inner()),
        })
    }
}

/// Rounds a non-negative stored count.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seat_count(value: f64) -> u32 {
    value.round().min(f64::from(u32::MAX)) as u32
}

/// Passenger seats at the seat-count-weighted center of the seat rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputePassengerSeatsCg;

impl Component for ComputePassengerSeatsCg {
    fn inputs(&self) -> Vec<VariableSpec> {
        CabinLayout::inputs()
    }

    fn outputs(&self) -> Vec<VariableSpec> {
        vec![VariableSpec::with_units(SEATS_CG, "m")]
    }

    fn compute(&self, inputs: &Variables) -> Result<Variables, ComponentError> {
        let x = CabinLayout::read(inputs)?.seats_cg();
        Ok(Variables::new().with(SEATS_CG, x.get::<meter>()))
    }
}
