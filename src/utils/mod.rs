pub mod constants;
pub mod filename;
pub mod progress;
pub mod validators;

pub use constants::*;
pub use filename::{is_month_file, is_weather_file, month_file_token};
pub use progress::ProgressReporter;
pub use validators::{parse_month, parse_year, YearMonth};
