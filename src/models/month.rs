use chrono::Datelike;

use crate::error::{Result, WeatherError};
use crate::models::extreme::{find_extreme, Direction, Extreme, ExtremeSource};
use crate::models::{Metric, Observation};
use crate::utils::constants::month_name;

/// All observations of one calendar month, sorted by date.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthAggregate {
    year: i32,
    month: u32,
    observations: Vec<Observation>,
}

impl MonthAggregate {
    pub fn from_observations(
        year: i32,
        month: u32,
        mut observations: Vec<Observation>,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(WeatherError::InvalidArgument(format!(
                "Month must be between 1 and 12, got: {}",
                month
            )));
        }

        if observations.is_empty() {
            return Err(WeatherError::EmptyMonth { year, month });
        }

        observations.sort_by_key(|o| o.date);

        for observation in &observations {
            if observation.date.year() != year || observation.date.month() != month {
                return Err(WeatherError::malformed(
                    &observation.date.to_string(),
                    format!("date lies outside {}/{}", year, month),
                ));
            }
        }

        if let Some(pair) = observations.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(WeatherError::malformed(
                &pair[1].date.to_string(),
                "date appears more than once in the month",
            ));
        }

        Ok(Self {
            year,
            month,
            observations,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn name(&self) -> &'static str {
        month_name(self.month)
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Sum of present values over the number of days in the aggregate,
    /// rounded half away from zero. Absent values add nothing to the sum but
    /// still count in the divisor.
    pub fn average(&self, metric: Metric) -> i32 {
        let sum: i64 = self
            .observations
            .iter()
            .filter_map(|o| metric.value(o))
            .map(i64::from)
            .sum();

        (sum as f64 / self.observations.len() as f64).round() as i32
    }

    pub fn average_max_temperature(&self) -> i32 {
        self.average(Metric::MaxTemperature)
    }

    pub fn average_min_temperature(&self) -> i32 {
        self.average(Metric::MinTemperature)
    }

    pub fn average_mean_humidity(&self) -> i32 {
        self.average(Metric::MeanHumidity)
    }
}

impl ExtremeSource for MonthAggregate {
    fn extreme(&self, metric: Metric, direction: Direction) -> Option<Extreme> {
        let candidates = self
            .observations
            .iter()
            .filter_map(|o| metric.value(o).map(|value| Extreme::new(value, o.date)));

        find_extreme(candidates, direction)
    }
}
