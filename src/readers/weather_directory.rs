use std::fs::{self, File};
use std::path::{Path, PathBuf};

use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::error::{Result, WeatherError};
use crate::models::{MonthAggregate, Observation};
use crate::readers::{ColumnLayout, ObservationParser};
use crate::settings::{ColumnLabels, Settings};
use crate::utils::constants::DEFAULT_BUFFER_SIZE;
use crate::utils::filename::{is_month_file, is_weather_file};

/// A directory of monthly weather files sharing one column layout.
pub struct WeatherDirectory {
    files: Vec<PathBuf>,
    parser: ObservationParser,
    skip_malformed: bool,
}

impl WeatherDirectory {
    /// Scan `root` for weather files and resolve the column layout from the
    /// header of the first one.
    pub fn open(root: &Path, labels: &ColumnLabels) -> Result<Self> {
        let files = list_weather_files(root)?;

        let representative = files
            .first()
            .ok_or_else(|| WeatherError::NoWeatherFiles(root.to_path_buf()))?;

        let layout = read_layout(representative, labels)?;
        debug!(
            file = %representative.display(),
            ?layout,
            "resolved column layout"
        );

        Ok(Self {
            files,
            parser: ObservationParser::new(layout),
            skip_malformed: false,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::open(&settings.data_dir, &settings.columns)?
            .with_skip_malformed(settings.skip_malformed_records))
    }

    pub fn with_skip_malformed(mut self, skip_malformed: bool) -> Self {
        self.skip_malformed = skip_malformed;
        self
    }

    pub fn layout(&self) -> &ColumnLayout {
        self.parser.layout()
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// The file holding a month, if any. With several candidates the first
    /// in name order is used.
    pub fn locate_month(&self, year: i32, month: u32) -> Option<&Path> {
        let mut matches = self.files.iter().filter(|path| {
            path.file_name()
                .and_then(|f| f.to_str())
                .is_some_and(|name| is_month_file(name, year, month))
        });

        let first = matches.next()?;
        let extra = matches.count();
        if extra > 0 {
            warn!(
                year,
                month,
                file = %first.display(),
                ignored = extra,
                "several files match one month, using the first"
            );
        }

        Some(first.as_path())
    }

    pub fn has_year(&self, year: i32) -> bool {
        (1..=12).any(|month| self.locate_month(year, month).is_some())
    }

    /// Read one month. A missing file is `MonthNotFound`; a file without data
    /// rows is `EmptyMonth`.
    pub fn read_month(&self, year: i32, month: u32) -> Result<MonthAggregate> {
        let path = self
            .locate_month(year, month)
            .ok_or(WeatherError::MonthNotFound { year, month })?;

        let observations = self.read_observations(path)?;
        debug!(
            year,
            month,
            days = observations.len(),
            file = %path.display(),
            "read month file"
        );

        MonthAggregate::from_observations(year, month, observations)
    }

    /// Parse every data row of one file in file order.
    pub fn read_observations(&self, path: &Path) -> Result<Vec<Observation>> {
        let mut reader = csv_reader(path)?;
        let mut observations = Vec::new();

        for result in reader.records() {
            let record = result?;

            if is_comment(&record) || is_blank(&record) {
                continue;
            }

            match self.parser.parse_record(&record) {
                Ok(observation) => observations.push(observation),
                Err(err) if self.skip_malformed => {
                    warn!(
                        file = %path.display(),
                        line = ?record.position().map(|p| p.line()),
                        error = %err,
                        "skipping malformed record"
                    );
                }
                Err(err) => return Err(err),
            }
        }

        Ok(observations)
    }
}

fn list_weather_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(WeatherError::NoWeatherFiles(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();

        if !path.is_file() {
            continue;
        }

        if path
            .file_name()
            .and_then(|f| f.to_str())
            .is_some_and(is_weather_file)
        {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn csv_reader(path: &Path) -> Result<Reader<File>> {
    Ok(ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .buffer_capacity(DEFAULT_BUFFER_SIZE)
        .from_path(path)?)
}

fn read_layout(path: &Path, labels: &ColumnLabels) -> Result<ColumnLayout> {
    let mut reader = csv_reader(path)?;
    let headers = reader.headers()?;
    ColumnLayout::resolve(headers.iter(), labels)
}

/// Some exports end with an HTML comment such as `<!-- 0.82:1 -->`.
fn is_comment(record: &StringRecord) -> bool {
    record.get(0).is_some_and(|f| f.starts_with("<!--"))
}

/// Whitespace-only lines and rows of bare separators carry no data.
fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|f| f.trim().is_empty())
}
