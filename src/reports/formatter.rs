use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::models::{Direction, Extreme, ExtremeSource, Metric, MonthAggregate, Observation};
use crate::utils::constants::{month_name, CHART_BAR, NO_ENTRY};

const AVERAGE_LINES: [(&str, Metric); 3] = [
    ("Average Highest", Metric::MaxTemperature),
    ("Average Lowest", Metric::MinTemperature),
    ("Average Mean Humidity", Metric::MeanHumidity),
];

const EXTREME_LINES: [(&str, Metric, Direction); 3] = [
    ("Highest", Metric::MaxTemperature, Direction::Highest),
    ("Lowest", Metric::MinTemperature, Direction::Lowest),
    ("Humidity", Metric::MaxHumidity, Direction::Highest),
];

/// How the daily chart treats a day whose high or low temperature is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingEntryPolicy {
    /// Leave the day out of the chart.
    #[default]
    Skip,
    /// Draw the day and write "No Entry" for each absent value.
    NoEntry,
}

/// Renders aggregates as report lines. Holds no state beyond its options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter {
    missing_entry: MissingEntryPolicy,
}

impl ReportFormatter {
    pub fn new(missing_entry: MissingEntryPolicy) -> Self {
        Self { missing_entry }
    }

    pub fn averages_report(&self, month: &MonthAggregate) -> Vec<String> {
        AVERAGE_LINES
            .iter()
            .map(|&(label, metric)| {
                format!("{}: {}{}", label, month.average(metric), metric.units())
            })
            .collect()
    }

    /// Works for a month or a year.
    pub fn extremes_report<S: ExtremeSource>(&self, source: &S) -> Vec<String> {
        EXTREME_LINES
            .iter()
            .map(|&(label, metric, direction)| {
                extreme_line(label, source.extreme(metric, direction), metric.units())
            })
            .collect()
    }

    pub fn chart_report(&self, month: &MonthAggregate) -> Vec<String> {
        let mut lines = vec![format!("{} {}", month.name(), month.year())];

        lines.extend(
            month
                .observations()
                .iter()
                .filter_map(|observation| self.chart_line(observation)),
        );

        lines
    }

    fn chart_line(&self, observation: &Observation) -> Option<String> {
        let (low, high) = (observation.min_temperature, observation.max_temperature);

        if self.missing_entry == MissingEntryPolicy::Skip && !observation.has_temperature_range()
        {
            return None;
        }

        let bars = format!("{}{}", bar(low), bar(high));
        let values = format!("{}-{}", temperature_label(low), temperature_label(high));

        Some(if bars.is_empty() {
            format!("{:02} {}", observation.day(), values)
        } else {
            format!("{:02} {} {}", observation.day(), bars, values)
        })
    }
}

fn extreme_line(label: &str, extreme: Option<Extreme>, unit: &str) -> String {
    match extreme {
        Some(extreme) => format!(
            "{}: {}{} on {} {}",
            label,
            extreme.value,
            unit,
            month_name(extreme.date.month()),
            extreme.date.day()
        ),
        None => format!("{}: {}", label, NO_ENTRY),
    }
}

/// One bar character per degree; negative temperatures use their magnitude.
fn bar(temperature: Option<i32>) -> String {
    let length = temperature.map_or(0, |t| t.unsigned_abs() as usize);
    std::iter::repeat(CHART_BAR).take(length).collect()
}

fn temperature_label(temperature: Option<i32>) -> String {
    match temperature {
        Some(t) => format!("{}{}", t, Metric::MinTemperature.units()),
        None => NO_ENTRY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::YearAggregate;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn obs(day: u32, max_t: Option<i32>, min_t: Option<i32>) -> Observation {
        Observation::new(
            NaiveDate::from_ymd_opt(2004, 8, day).unwrap(),
            max_t,
            min_t,
            Some(60 + day as i32),
            Some(40 + day as i32),
        )
    }

    fn august() -> MonthAggregate {
        MonthAggregate::from_observations(
            2004,
            8,
            vec![
                obs(1, Some(5), Some(2)),
                obs(2, None, Some(3)),
                obs(3, Some(4), Some(-1)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_averages_report() {
        let lines = ReportFormatter::default().averages_report(&august());
        assert_eq!(
            lines,
            vec![
                "Average Highest: 3C",
                "Average Lowest: 1C",
                "Average Mean Humidity: 42%",
            ]
        );
    }

    #[test]
    fn test_month_extremes_report() {
        let lines = ReportFormatter::default().extremes_report(&august());
        assert_eq!(
            lines,
            vec![
                "Highest: 5C on August 1",
                "Lowest: -1C on August 3",
                "Humidity: 63% on August 3",
            ]
        );
    }

    #[test]
    fn test_extremes_report_without_values() {
        let month = MonthAggregate::from_observations(
            2004,
            8,
            vec![Observation::new(
                NaiveDate::from_ymd_opt(2004, 8, 1).unwrap(),
                None,
                None,
                None,
                None,
            )],
        )
        .unwrap();

        assert_eq!(
            ReportFormatter::default().extremes_report(&month),
            vec!["Highest: No Entry", "Lowest: No Entry", "Humidity: No Entry"]
        );
    }

    #[test]
    fn test_year_extremes_report() {
        let months: Vec<MonthAggregate> = (1..=12)
            .map(|m| {
                MonthAggregate::from_observations(
                    2004,
                    m,
                    vec![Observation::new(
                        NaiveDate::from_ymd_opt(2004, m, 10).unwrap(),
                        Some(20 + m as i32),
                        Some(m as i32 - 6),
                        Some(50),
                        None,
                    )],
                )
                .unwrap()
            })
            .collect();
        let year = YearAggregate::from_year(2004, months).unwrap();

        assert_eq!(
            ReportFormatter::default().extremes_report(&year),
            vec![
                "Highest: 32C on December 10",
                "Lowest: -5C on January 10",
                "Humidity: 50% on January 10",
            ]
        );
    }

    #[test]
    fn test_chart_report_skip_policy() {
        let lines = ReportFormatter::new(MissingEntryPolicy::Skip).chart_report(&august());
        assert_eq!(
            lines,
            vec!["August 2004", "01 +++++++ 2C-5C", "03 +++++ -1C-4C"]
        );
    }

    #[test]
    fn test_chart_report_no_entry_policy() {
        let lines = ReportFormatter::new(MissingEntryPolicy::NoEntry).chart_report(&august());
        assert_eq!(
            lines,
            vec![
                "August 2004",
                "01 +++++++ 2C-5C",
                "02 +++ 3C-No Entry",
                "03 +++++ -1C-4C",
            ]
        );
    }

    #[test]
    fn test_chart_policy_applies_to_every_day() {
        let month = MonthAggregate::from_observations(
            2004,
            8,
            vec![obs(1, None, Some(1)), obs(2, Some(1), None), obs(3, None, None)],
        )
        .unwrap();

        let skipped = ReportFormatter::new(MissingEntryPolicy::Skip).chart_report(&month);
        assert_eq!(skipped, vec!["August 2004"]);

        let marked = ReportFormatter::new(MissingEntryPolicy::NoEntry).chart_report(&month);
        assert_eq!(marked.len(), 4);
        assert!(marked[1..].iter().all(|line| line.contains(NO_ENTRY)));
    }

    #[test]
    fn test_chart_day_without_bars_has_single_space() {
        let month = MonthAggregate::from_observations(
            2004,
            8,
            vec![obs(3, None, None), obs(4, Some(0), None)],
        )
        .unwrap();

        assert_eq!(
            ReportFormatter::new(MissingEntryPolicy::NoEntry).chart_report(&month),
            vec!["August 2004", "03 No Entry-No Entry", "04 No Entry-0C"]
        );
    }
}
