//! Measured cooling samples used for calibration.

use uom::si::{
    f64::{ThermodynamicTemperature, Time},
    thermodynamic_temperature::degree_celsius,
    time::minute,
};

use super::{CalibrationError, Sample, Substance};

/// Built-in measurements as `[minutes, black °C, creamed °C]`.
const DEFAULT_ROWS: [[f64; 3]; 24] = [
    [0.0, 82.3, 68.8],
    [2.0, 78.5, 64.8],
    [4.0, 74.3, 62.1],
    [6.0, 70.7, 59.9],
    [8.0, 67.6, 57.7],
    [10.0, 65.0, 55.9],
    [12.0, 62.5, 53.9],
    [14.0, 60.1, 52.3],
    [16.0, 58.1, 50.8],
    [18.0, 56.1, 49.5],
    [20.0, 54.3, 48.1],
    [22.0, 52.8, 46.8],
    [24.0, 51.2, 45.9],
    [26.0, 49.9, 44.8],
    [28.0, 48.6, 43.7],
    [30.0, 47.2, 42.6],
    [32.0, 46.1, 41.7],
    [34.0, 45.0, 40.8],
    [36.0, 43.9, 39.9],
    [38.0, 43.0, 39.3],
    [40.0, 41.9, 38.6],
    [42.0, 41.0, 37.7],
    [44.0, 40.1, 37.0],
    [46.0, 39.5, 36.4],
];

/// One measurement of both cups taken at the same moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRow {
    pub time: Time,
    pub black: ThermodynamicTemperature,
    pub cream: ThermodynamicTemperature,
}

impl SampleRow {
    /// Creates a row from a time and the two measured temperatures.
    #[must_use]
    pub fn new(time: Time, black: ThermodynamicTemperature, cream: ThermodynamicTemperature) -> Self {
        Self { time, black, cream }
    }

    /// Creates a row from minutes and degrees Celsius.
    #[must_use]
    pub fn from_minutes_celsius(minutes: f64, black: f64, cream: f64) -> Self {
        Self::new(
            Time::new::<minute>(minutes),
            ThermodynamicTemperature::new::<degree_celsius>(black),
            ThermodynamicTemperature::new::<degree_celsius>(cream),
        )
    }

    /// Returns the measured temperature of the given substance.
    #[must_use]
    pub fn temperature(&self, substance: Substance) -> ThermodynamicTemperature {
        match substance {
            Substance::Black => self.black,
            Substance::Cream => self.cream,
        }
    }

    fn is_finite(&self) -> bool {
        self.time.value.is_finite() && self.black.value.is_finite() && self.cream.value.is_finite()
    }
}

/// An ordered, validated table of cooling measurements.
///
/// Holds at least two rows with strictly increasing times, so every
/// consecutive pair yields a finite difference.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    rows: Vec<SampleRow>,
}

impl SampleTable {
    /// Validates and wraps the given rows.
    ///
    /// # Errors
    ///
    /// Returns a [`CalibrationError`] if there are fewer than two rows, a
    /// value is not finite, or the times do not strictly increase.
    pub fn new(rows: Vec<SampleRow>) -> Result<Self, CalibrationError> {
        if rows.len() < 2 {
            return Err(CalibrationError::TooFewSamples { count: rows.len() });
        }

        if let Some(row) = rows.iter().position(|sample| !sample.is_finite()) {
            return Err(CalibrationError::NonFinite { row });
        }

        if let Some(row) = rows.windows(2).position(|pair| pair[1].time <= pair[0].time) {
            return Err(CalibrationError::NonIncreasingTime { row: row + 1 });
        }

        Ok(Self { rows })
    }

    /// Builds a table from `[minutes, black °C, creamed °C]` triples.
    ///
    /// # Errors
    ///
    /// Returns a [`CalibrationError`] under the same conditions as [`SampleTable::new`].
    pub fn from_minutes_celsius(rows: &[[f64; 3]]) -> Result<Self, CalibrationError> {
        Self::new(
            rows.iter()
                .map(|&[minutes, black, cream]| SampleRow::from_minutes_celsius(minutes, black, cream))
                .collect(),
        )
    }

    /// The validated rows, ordered by time.
    #[must_use]
    pub fn rows(&self) -> &[SampleRow] {
        &self.rows
    }

    /// Number of rows in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false` for a validated table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The measurements of one substance as time/temperature samples.
    pub fn samples(&self, substance: Substance) -> impl Iterator<Item = Sample> + '_ {
        self.rows.iter().map(move |row| Sample {
            time: row.time,
            temperature: row.temperature(substance),
        })
    }
}

impl Default for SampleTable {
    /// The built-in 24-row table: two cups measured every two minutes.
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS
                .iter()
                .map(|&[minutes, black, cream]| SampleRow::from_minutes_celsius(minutes, black, cream))
                .collect(),
        }
    }
}
