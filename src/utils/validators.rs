use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WeatherError};

/// Validate a four digit year such as `2004`. The first digit must be 1-9.
pub fn parse_year(value: &str) -> Result<i32> {
    let value = value.trim();
    let mut chars = value.chars();

    let valid = value.len() == 4
        && chars.next().is_some_and(|c| ('1'..='9').contains(&c))
        && chars.all(|c| c.is_ascii_digit());

    if !valid {
        return Err(WeatherError::InvalidArgument(format!(
            "'{}' is not a four digit year (e.g. 2004)",
            value
        )));
    }

    value
        .parse::<i32>()
        .map_err(|_| WeatherError::InvalidArgument(format!("Invalid year: '{}'", value)))
}

/// Validate a month number given as `6` or `06`.
pub fn parse_month(value: &str) -> Result<u32> {
    let value = value.trim();

    if value.is_empty() || value.len() > 2 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(WeatherError::InvalidArgument(format!(
            "'{}' is not a month number (1-12)",
            value
        )));
    }

    match value.parse::<u32>() {
        Ok(month) if (1..=12).contains(&month) => Ok(month),
        _ => Err(WeatherError::InvalidArgument(format!(
            "Month must be between 1 and 12, got: '{}'",
            value
        ))),
    }
}

/// A `YYYY/MM` request argument, e.g. `2005/6` or `2005/06`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

impl FromStr for YearMonth {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self> {
        let (year, month) = s.trim().split_once('/').ok_or_else(|| {
            WeatherError::InvalidArgument(format!(
                "'{}' is not in YYYY/MM format (e.g. 2005/6)",
                s
            ))
        })?;

        Ok(Self {
            year: parse_year(year)?,
            month: parse_month(month)?,
        })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.year, self.month)
    }
}
