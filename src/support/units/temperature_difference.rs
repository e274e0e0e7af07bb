use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Absolute-temperature subtraction that yields an interval.
///
/// [`uom`] treats `ThermodynamicTemperature - ThermodynamicTemperature` as
/// another absolute temperature, see
/// [#380](https://github.com/iliekturtles/uom/issues/380).
/// Both operands are read in kelvin, so the result is independent of the
/// units they were built in.
pub trait TemperatureDifference {
    /// Returns `self - other` as a [`TemperatureInterval`].
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}
