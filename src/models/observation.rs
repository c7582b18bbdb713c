use chrono::{Datelike, NaiveDate};

/// One day's weather record. A `None` field was blank or non-numeric in the
/// source file and is never treated as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub date: NaiveDate,
    /// Degrees Celsius
    pub max_temperature: Option<i32>,
    /// Degrees Celsius
    pub min_temperature: Option<i32>,
    /// Percent, 0-100
    pub max_humidity: Option<i32>,
    /// Percent, 0-100
    pub mean_humidity: Option<i32>,
}

impl Observation {
    pub fn new(
        date: NaiveDate,
        max_temperature: Option<i32>,
        min_temperature: Option<i32>,
        max_humidity: Option<i32>,
        mean_humidity: Option<i32>,
    ) -> Self {
        Self {
            date,
            max_temperature,
            min_temperature,
            max_humidity,
            mean_humidity,
        }
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn has_temperature_range(&self) -> bool {
        self.max_temperature.is_some() && self.min_temperature.is_some()
    }
}
