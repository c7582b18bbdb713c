use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{Result, WeatherError};
use crate::models::{MonthAggregate, YearAggregate, YearPolicy};
use crate::readers::WeatherDirectory;
use crate::utils::progress::ProgressReporter;

/// Loads the months of a year concurrently, one worker per month file, and
/// reduces them into a [`YearAggregate`] once every worker has finished.
pub struct ParallelLoader {
    max_workers: usize,
    year_policy: YearPolicy,
}

impl ParallelLoader {
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers: max_workers.max(1),
            year_policy: YearPolicy::default(),
        }
    }

    pub fn with_year_policy(mut self, year_policy: YearPolicy) -> Self {
        self.year_policy = year_policy;
        self
    }

    pub fn load_year(
        &self,
        directory: &WeatherDirectory,
        year: i32,
        progress: Option<&ProgressReporter>,
    ) -> Result<YearAggregate> {
        if !directory.has_year(year) {
            return Err(WeatherError::YearNotFound(year));
        }

        if let Some(p) = progress {
            p.set_message(&format!("Reading {} months...", year));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()?;

        // The collect is the barrier: no reduction happens before every
        // month has been read.
        let results: Vec<(u32, Result<MonthAggregate>)> = pool.install(|| {
            (1..=12u32)
                .into_par_iter()
                .map(|month| {
                    let result = directory.read_month(year, month);

                    if let Some(p) = progress {
                        p.increment(1);
                    }

                    (month, result)
                })
                .collect()
        });

        let mut months = Vec::with_capacity(12);
        let mut absent = Vec::new();

        for (month, result) in results {
            match result {
                Ok(aggregate) => months.push(aggregate),
                Err(WeatherError::MonthNotFound { .. }) => {
                    debug!(year, month, "no file for month");
                    absent.push(month);
                }
                Err(err) => return Err(err),
            }
        }

        if let Some(p) = progress {
            p.finish_and_clear();
        }

        info!(
            year,
            loaded = months.len(),
            absent = absent.len(),
            "year loaded"
        );

        match self.year_policy {
            YearPolicy::SkipAbsent => YearAggregate::from_available_months(year, months, &absent),
            YearPolicy::RequireAll => YearAggregate::from_year(year, months),
        }
    }
}

impl Default for ParallelLoader {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}
