use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature, Time},
    temperature_interval::degree_celsius as delta_celsius,
    thermodynamic_temperature::degree_celsius,
    time::minute,
};

use super::{CoolingConstant, CoolingConstants, SampleRow, SampleTable};

pub(super) fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

pub(super) fn delta_c(value: f64) -> TemperatureInterval {
    TemperatureInterval::new::<delta_celsius>(value)
}

pub(super) fn minutes(value: f64) -> Time {
    Time::new::<minute>(value)
}

/// Constants fitted against a 20 °C reference.
pub(super) fn constants(black_per_minute: f64, cream_per_minute: f64) -> CoolingConstants {
    CoolingConstants::new(
        CoolingConstant::from_per_minute(black_per_minute).expect("positive black constant"),
        CoolingConstant::from_per_minute(cream_per_minute).expect("positive cream constant"),
        celsius(20.0),
    )
}

/// Samples generated with the exact discrete rule `T' = T - c (T - T_ref) dt`.
///
/// Black starts at 85 °C and cream at 70 °C.
pub(super) fn synthetic_table(
    black_per_minute: f64,
    cream_per_minute: f64,
    reference_c: f64,
    step_minutes: f64,
    rows: usize,
) -> SampleTable {
    let mut black = 85.0;
    let mut cream = 70.0;
    let mut samples = Vec::with_capacity(rows);

    for i in 0..rows {
        #[allow(clippy::cast_precision_loss)]
        let time = i as f64 * step_minutes;
        samples.push(SampleRow::from_minutes_celsius(time, black, cream));
        black -= black_per_minute * (black - reference_c) * step_minutes;
        cream -= cream_per_minute * (cream - reference_c) * step_minutes;
    }

    SampleTable::new(samples).expect("synthetic samples are valid")
}
