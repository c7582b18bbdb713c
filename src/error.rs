use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WeatherError>;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Malformed record '{line}': {reason}")]
    MalformedRecord { line: String, reason: String },

    #[error("No observations for {year}/{month}")]
    EmptyMonth { year: i32, month: u32 },

    #[error("Incomplete year {year}: missing months {missing:?}")]
    IncompleteYear { year: i32, missing: Vec<u32> },

    #[error("Month {year}/{month} supplied more than once")]
    DuplicateMonth { year: i32, month: u32 },

    #[error("Required column '{0}' not found in header")]
    MissingColumn(String),

    #[error("No weather file found for {year}/{month}")]
    MonthNotFound { year: i32, month: u32 },

    #[error("No weather files found for year {0}")]
    YearNotFound(i32),

    #[error("No weather files found in {}", .0.display())]
    NoWeatherFiles(PathBuf),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl WeatherError {
    pub fn malformed(line: &str, reason: impl Into<String>) -> Self {
        WeatherError::MalformedRecord {
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    /// Process exit code used by the command-line front-end.
    pub fn exit_code(&self) -> u8 {
        match self {
            WeatherError::InvalidArgument(_)
            | WeatherError::Config(_)
            | WeatherError::Validation(_) => 2,
            WeatherError::MonthNotFound { .. }
            | WeatherError::YearNotFound(_)
            | WeatherError::NoWeatherFiles(_) => 3,
            _ => 1,
        }
    }
}

impl From<config::ConfigError> for WeatherError {
    fn from(err: config::ConfigError) -> Self {
        WeatherError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(WeatherError::InvalidArgument("x".into()).exit_code(), 2);
        assert_eq!(WeatherError::YearNotFound(2004).exit_code(), 3);
        assert_eq!(
            WeatherError::MonthNotFound {
                year: 2004,
                month: 8
            }
            .exit_code(),
            3
        );
        assert_eq!(
            WeatherError::EmptyMonth {
                year: 2004,
                month: 8
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn test_malformed_message() {
        let err = WeatherError::malformed("x,1,2", "missing date");
        assert_eq!(err.to_string(), "Malformed record 'x,1,2': missing date");
    }
}
