use serde::{Deserialize, Serialize};

use crate::error::{Result, WeatherError};
use crate::models::extreme::{find_extreme, Direction, Extreme, ExtremeSource};
use crate::models::{Metric, MonthAggregate};

/// What to do when a month of the year has no weather file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearPolicy {
    /// Months without a file are declared absent and skipped.
    #[default]
    SkipAbsent,
    /// Every month must be present.
    RequireAll,
}

/// The month aggregates of one year, in calendar order.
#[derive(Debug, Clone, PartialEq)]
pub struct YearAggregate {
    year: i32,
    months: Vec<MonthAggregate>,
    absent_months: Vec<u32>,
}

impl YearAggregate {
    /// Requires exactly one aggregate for each month 1-12.
    pub fn from_year(year: i32, months: Vec<MonthAggregate>) -> Result<Self> {
        Self::from_available_months(year, months, &[])
    }

    /// Builds a year where the months in `absent_months` are known to have no
    /// data. Every month must be either supplied or declared absent, and at
    /// least one month must be supplied.
    pub fn from_available_months(
        year: i32,
        mut months: Vec<MonthAggregate>,
        absent_months: &[u32],
    ) -> Result<Self> {
        // Aggregates from another year do not cover this year's months.
        months.retain(|m| m.year() == year);
        months.sort_by_key(|m| m.month());

        if let Some(pair) = months.windows(2).find(|w| w[0].month() == w[1].month()) {
            return Err(WeatherError::DuplicateMonth {
                year,
                month: pair[1].month(),
            });
        }

        let mut absent: Vec<u32> = absent_months
            .iter()
            .copied()
            .filter(|&m| (1..=12).contains(&m) && !months.iter().any(|a| a.month() == m))
            .collect();
        absent.sort_unstable();
        absent.dedup();

        let missing: Vec<u32> = (1..=12)
            .filter(|m| !months.iter().any(|a| a.month() == *m) && !absent.contains(m))
            .collect();

        if !missing.is_empty() || months.is_empty() {
            return Err(WeatherError::IncompleteYear {
                year,
                missing: if months.is_empty() {
                    (1..=12).collect()
                } else {
                    missing
                },
            });
        }

        Ok(Self {
            year,
            months,
            absent_months: absent,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn months(&self) -> &[MonthAggregate] {
        &self.months
    }

    pub fn absent_months(&self) -> &[u32] {
        &self.absent_months
    }

    pub fn is_complete(&self) -> bool {
        self.absent_months.is_empty()
    }

    pub fn observation_count(&self) -> usize {
        self.months.iter().map(MonthAggregate::len).sum()
    }
}

impl ExtremeSource for YearAggregate {
    fn extreme(&self, metric: Metric, direction: Direction) -> Option<Extreme> {
        let candidates = self
            .months
            .iter()
            .filter_map(|month| month.extreme(metric, direction));

        find_extreme(candidates, direction)
    }
}
