use crate::models::Observation;
use crate::utils::constants::{HUMIDITY_UNIT, TEMPERATURE_UNIT};

/// A single daily field of an observation that can be aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    MaxTemperature,
    MinTemperature,
    MaxHumidity,
    MeanHumidity,
}

impl Metric {
    pub fn value(&self, observation: &Observation) -> Option<i32> {
        match self {
            Metric::MaxTemperature => observation.max_temperature,
            Metric::MinTemperature => observation.min_temperature,
            Metric::MaxHumidity => observation.max_humidity,
            Metric::MeanHumidity => observation.mean_humidity,
        }
    }

    pub fn units(&self) -> &'static str {
        match self {
            Metric::MaxTemperature | Metric::MinTemperature => TEMPERATURE_UNIT,
            Metric::MaxHumidity | Metric::MeanHumidity => HUMIDITY_UNIT,
        }
    }
}
