use std::{fmt, ops::Deref};

use uom::si::{
    f64::{Frequency, ThermodynamicTemperature, Time},
    frequency::hertz,
    thermodynamic_temperature::degree_celsius,
    time::second,
};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

const SECONDS_PER_MINUTE: f64 = 60.0;

/// The two liquids the model distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Substance {
    /// Coffee without cream.
    Black,
    /// Coffee after cream has been added.
    Cream,
}

impl Substance {
    /// Both substances, black first.
    pub const ALL: [Substance; 2] = [Substance::Black, Substance::Cream];
}

impl fmt::Display for Substance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Substance::Black => f.write_str("black coffee"),
            Substance::Cream => f.write_str("creamed coffee"),
        }
    }
}

/// Cooling constant `c` in `dT/dt = -c (T - T_eq)`.
///
/// Larger values mean a faster approach to equilibrium.
/// The value must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CoolingConstant(Constrained<Frequency, StrictlyPositive>);

impl CoolingConstant {
    /// Create a [`CoolingConstant`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::frequency::Unit + uom::Conversion<f64, T = f64>,
    {
        Self::from_quantity(Frequency::new::<U>(value))
    }

    /// Create a [`CoolingConstant`] from a quantity with frequency units.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: Frequency) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Create a [`CoolingConstant`] from a rate expressed per minute.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn from_per_minute(value: f64) -> ConstraintResult<Self> {
        Self::new::<hertz>(value / SECONDS_PER_MINUTE)
    }

    /// The constant expressed per minute.
    #[must_use]
    pub fn per_minute(&self) -> f64 {
        self.get::<hertz>() * SECONDS_PER_MINUTE
    }

    /// Fraction of the excess temperature shed over one step, `c * dt`.
    pub(crate) fn decay_over(&self, step: Time) -> f64 {
        self.get::<hertz>() * step.get::<second>()
    }
}

impl Deref for CoolingConstant {
    type Target = Frequency;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Cooling constants for both substances.
///
/// `reference_temperature` is the equilibrium the calibration samples were
/// assumed to approach. The simulator compares it against its own
/// equilibrium and warns when they differ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingConstants {
    pub black: CoolingConstant,
    pub cream: CoolingConstant,
    pub reference_temperature: ThermodynamicTemperature,
}

impl CoolingConstants {
    /// Bundle the constants with the reference they were fitted against.
    #[must_use]
    pub fn new(
        black: CoolingConstant,
        cream: CoolingConstant,
        reference_temperature: ThermodynamicTemperature,
    ) -> Self {
        Self {
            black,
            cream,
            reference_temperature,
        }
    }

    /// Returns the constant for the given substance.
    #[must_use]
    pub fn get(&self, substance: Substance) -> CoolingConstant {
        match substance {
            Substance::Black => self.black,
            Substance::Cream => self.cream,
        }
    }
}

impl fmt::Display for CoolingConstants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "black coffee c = {:.6}/min, creamed coffee c = {:.6}/min (reference {} °C)",
            self.black.per_minute(),
            self.cream.per_minute(),
            self.reference_temperature.get::<degree_celsius>(),
        )
    }
}
