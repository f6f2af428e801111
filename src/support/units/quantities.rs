use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, P2, Z0},
};

/// Thrust-specific fuel consumption, kg/(s·N) in SI.
pub type SpecificFuelConsumption = Quantity<ISQ<N1, Z0, P1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Power-specific fuel consumption, kg/(s·W) in SI.
pub type PowerSpecificFuelConsumption = Quantity<ISQ<N2, Z0, P2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Reynolds number per unit length, 1/m in SI.
pub type UnitReynolds = Quantity<ISQ<N1, Z0, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
