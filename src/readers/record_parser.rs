use chrono::NaiveDate;
use csv::StringRecord;

use crate::error::{Result, WeatherError};
use crate::models::Observation;
use crate::readers::ColumnLayout;
use crate::utils::constants::RECORD_DATE_FORMAT;

/// Turns one data row into an [`Observation`] using a resolved layout.
#[derive(Debug, Clone)]
pub struct ObservationParser {
    layout: ColumnLayout,
}

impl ObservationParser {
    pub fn new(layout: ColumnLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// Parse a raw comma-separated line.
    pub fn parse_line(&self, line: &str) -> Result<Observation> {
        let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split(',').collect();
        self.parse_fields(&fields)
    }

    /// Parse a record already split by the CSV reader.
    pub fn parse_record(&self, record: &StringRecord) -> Result<Observation> {
        let fields: Vec<&str> = record.iter().collect();
        self.parse_fields(&fields)
    }

    fn parse_fields(&self, fields: &[&str]) -> Result<Observation> {
        let field = |index: usize| fields.get(index).copied();

        let date = parse_date(field(self.layout.date))
            .map_err(|reason| WeatherError::malformed(&fields.join(","), reason))?;

        Ok(Observation::new(
            date,
            parse_optional(field(self.layout.max_temperature)),
            parse_optional(field(self.layout.min_temperature)),
            parse_optional(field(self.layout.max_humidity)),
            parse_optional(field(self.layout.mean_humidity)),
        ))
    }
}

fn parse_date(field: Option<&str>) -> std::result::Result<NaiveDate, String> {
    let value = field.map(str::trim).unwrap_or_default();

    if value.is_empty() {
        return Err("missing date".to_string());
    }

    NaiveDate::parse_from_str(value, RECORD_DATE_FORMAT)
        .map_err(|e| format!("invalid date '{}': {}", value, e))
}

/// Blank, missing or non-integer fields are absent.
fn parse_optional(field: Option<&str>) -> Option<i32> {
    field
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<i32>().ok())
}
