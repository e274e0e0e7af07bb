use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

/// Settings for fitting cooling constants to measured samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationConfig {
    /// Equilibrium the measured samples are assumed to approach.
    ///
    /// The built-in samples were taken in a 20 °C room.
    pub reference_temperature: ThermodynamicTemperature,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            reference_temperature: ThermodynamicTemperature::new::<degree_celsius>(20.0),
        }
    }
}
