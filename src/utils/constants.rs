/// Default directory holding the monthly weather files
pub const DEFAULT_DATA_DIR: &str = "weatherfiles";

/// Configuration sources
pub const CONFIG_FILE: &str = "weatherman.toml";
pub const ENV_PREFIX: &str = "WEATHERMAN";

/// Header labels of the monthly weather files
pub const DATE_COLUMN_LABELS: [&str; 3] = ["PKT", "PKST", "GST"];
pub const MAX_TEMPERATURE_LABEL: &str = "Max TemperatureC";
pub const MIN_TEMPERATURE_LABEL: &str = "Min TemperatureC";
pub const MAX_HUMIDITY_LABEL: &str = "Max Humidity";
pub const MEAN_HUMIDITY_LABEL: &str = " Mean Humidity";

/// Date format of the date column (month and day may be unpadded)
pub const RECORD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Report units and markers
pub const TEMPERATURE_UNIT: &str = "C";
pub const HUMIDITY_UNIT: &str = "%";
pub const NO_ENTRY: &str = "No Entry";
pub const CHART_BAR: char = '+';

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 2; // 16KB, a month file is small

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English name of a month number (1-12). Out-of-range numbers give "".
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .unwrap_or("")
}

/// Three-letter abbreviation used in weather file names, e.g. "Aug".
pub fn month_abbreviation(month: u32) -> &'static str {
    let name = month_name(month);
    &name[..name.len().min(3)]
}
