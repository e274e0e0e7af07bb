//! Extensions to [`uom`].
//!
//! All physical quantities in this crate are [`uom`] quantities. This module
//! holds the pieces [`uom`] doesn't provide.
//!
//! ## Temperature differences
//!
//! Subtracting two [`ThermodynamicTemperature`] values in [`uom`] yields
//! another absolute temperature. The cooling law needs the excess over the
//! surroundings as an interval, which [`TemperatureDifference::minus`] gives:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::temperature_interval::degree_celsius as delta_celsius;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use coffee_cooling::support::units::TemperatureDifference;
//!
//! let coffee = ThermodynamicTemperature::new::<degree_celsius>(90.0);
//! let room = ThermodynamicTemperature::new::<degree_celsius>(20.0);
//! let excess = coffee.minus(room);
//! assert!((excess.get::<delta_celsius>() - 70.0).abs() < 1e-9);
//! ```
//!
//! [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
