use chrono::NaiveDate;

use crate::models::Metric;

/// A maximum or minimum value paired with the day it was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extreme {
    pub value: i32,
    pub date: NaiveDate,
}

impl Extreme {
    pub fn new(value: i32, date: NaiveDate) -> Self {
        Self { value, date }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Highest,
    Lowest,
}

impl Direction {
    /// Strict comparison: an equal candidate never replaces the current extreme.
    fn beats(&self, candidate: i32, current: i32) -> bool {
        match self {
            Direction::Highest => candidate > current,
            Direction::Lowest => candidate < current,
        }
    }
}

/// Folds candidates in the order given. With date-ascending input the
/// earliest date wins ties.
pub fn find_extreme<I>(candidates: I, direction: Direction) -> Option<Extreme>
where
    I: IntoIterator<Item = Extreme>,
{
    candidates.into_iter().fold(None, |current, candidate| match current {
        Some(best) if !direction.beats(candidate.value, best.value) => Some(best),
        _ => Some(candidate),
    })
}

/// Anything that can report extremes with the date they occurred.
pub trait ExtremeSource {
    fn extreme(&self, metric: Metric, direction: Direction) -> Option<Extreme>;

    fn max_temperature_with_date(&self) -> Option<Extreme> {
        self.extreme(Metric::MaxTemperature, Direction::Highest)
    }

    fn min_temperature_with_date(&self) -> Option<Extreme> {
        self.extreme(Metric::MinTemperature, Direction::Lowest)
    }

    fn max_humidity_with_date(&self) -> Option<Extreme> {
        self.extreme(Metric::MaxHumidity, Direction::Highest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2004, 8, d).unwrap()
    }

    #[test]
    fn test_find_extreme_empty() {
        assert_eq!(find_extreme(Vec::new(), Direction::Highest), None);
    }

    #[test]
    fn test_find_extreme_keeps_first_on_tie() {
        let candidates = vec![
            Extreme::new(25, day(1)),
            Extreme::new(31, day(2)),
            Extreme::new(31, day(3)),
            Extreme::new(12, day(4)),
            Extreme::new(12, day(5)),
        ];

        assert_eq!(
            find_extreme(candidates.clone(), Direction::Highest),
            Some(Extreme::new(31, day(2)))
        );
        assert_eq!(
            find_extreme(candidates, Direction::Lowest),
            Some(Extreme::new(12, day(4)))
        );
    }

    #[test]
    fn test_find_extreme_negative_values() {
        let candidates = vec![Extreme::new(-3, day(1)), Extreme::new(-7, day(2))];
        assert_eq!(
            find_extreme(candidates, Direction::Lowest),
            Some(Extreme::new(-7, day(2)))
        );
    }
}
