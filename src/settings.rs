use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::error::Result;
use crate::models::YearPolicy;
use crate::reports::MissingEntryPolicy;
use crate::utils::constants::{
    CONFIG_FILE, DATE_COLUMN_LABELS, DEFAULT_DATA_DIR, ENV_PREFIX, MAX_HUMIDITY_LABEL,
    MAX_TEMPERATURE_LABEL, MEAN_HUMIDITY_LABEL, MIN_TEMPERATURE_LABEL,
};

/// Header labels used to locate each field in the weather files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ColumnLabels {
    /// Any of these labels marks the date column; the first match wins.
    #[validate(length(min = 1))]
    pub date: Vec<String>,

    #[validate(length(min = 1))]
    pub max_temperature: String,

    #[validate(length(min = 1))]
    pub min_temperature: String,

    #[validate(length(min = 1))]
    pub max_humidity: String,

    #[validate(length(min = 1))]
    pub mean_humidity: String,
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            date: DATE_COLUMN_LABELS.iter().map(|s| s.to_string()).collect(),
            max_temperature: MAX_TEMPERATURE_LABEL.to_string(),
            min_temperature: MIN_TEMPERATURE_LABEL.to_string(),
            max_humidity: MAX_HUMIDITY_LABEL.to_string(),
            mean_humidity: MEAN_HUMIDITY_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Settings {
    pub data_dir: PathBuf,

    #[validate(nested)]
    pub columns: ColumnLabels,

    pub missing_entry: MissingEntryPolicy,

    pub year_policy: YearPolicy,

    /// Drop unparsable records with a warning instead of failing the request.
    pub skip_malformed_records: bool,

    #[validate(range(min = 1, max = 256))]
    pub max_workers: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            columns: ColumnLabels::default(),
            missing_entry: MissingEntryPolicy::default(),
            year_policy: YearPolicy::default(),
            skip_malformed_records: false,
            max_workers: num_cpus::get().clamp(1, 256),
        }
    }
}

impl Settings {
    /// Layer built-in defaults, a TOML file and `WEATHERMAN_*` environment
    /// variables. Without an explicit path, `weatherman.toml` in the working
    /// directory is read if present. Validation is left to the caller so
    /// command-line overrides can be applied first.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let file_source = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(CONFIG_FILE).required(false),
        };

        let settings: Settings = Config::builder()
            .add_source(file_source)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        debug!(?settings, "configuration loaded");

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.data_dir, PathBuf::from("weatherfiles"));
        assert_eq!(settings.columns.date, vec!["PKT", "PKST", "GST"]);
        assert_eq!(settings.missing_entry, MissingEntryPolicy::Skip);
        assert_eq!(settings.year_policy, YearPolicy::SkipAbsent);
        assert!(!settings.skip_malformed_records);
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "data_dir = \"/data/murree\"")?;
        writeln!(file, "missing_entry = \"no_entry\"")?;
        writeln!(file, "year_policy = \"require_all\"")?;
        writeln!(file, "max_workers = 3")?;
        writeln!(file, "[columns]")?;
        writeln!(file, "date = [\"Date\"]")?;

        let settings = Settings::load(Some(file.path()))?;

        assert_eq!(settings.data_dir, PathBuf::from("/data/murree"));
        assert_eq!(settings.missing_entry, MissingEntryPolicy::NoEntry);
        assert_eq!(settings.year_policy, YearPolicy::RequireAll);
        assert_eq!(settings.max_workers, 3);
        assert_eq!(settings.columns.date, vec!["Date"]);
        assert_eq!(settings.columns.max_temperature, "Max TemperatureC");

        Ok(())
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = Settings::default();
        settings.max_workers = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.columns.date.clear();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let result = Settings::load(Some(Path::new("/nonexistent/weatherman.toml")));
        assert!(result.is_err());
    }
}
