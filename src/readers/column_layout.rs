use crate::error::{Result, WeatherError};
use crate::settings::ColumnLabels;

/// Column positions of the fields the parser needs, resolved once per data
/// directory from a header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub date: usize,
    pub max_temperature: usize,
    pub min_temperature: usize,
    pub max_humidity: usize,
    pub mean_humidity: usize,
}

impl ColumnLayout {
    /// Match header cells against the configured labels. Whitespace around
    /// both is ignored, so `" Mean Humidity"` matches `"Mean Humidity"`.
    pub fn resolve<'a, I>(headers: I, labels: &ColumnLabels) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let headers: Vec<&str> = headers
            .into_iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim())
            .collect();

        let find = |label: &str| -> Result<usize> {
            let label = label.trim();
            headers
                .iter()
                .position(|h| *h == label)
                .ok_or_else(|| WeatherError::MissingColumn(label.to_string()))
        };

        let date_labels: Vec<&str> = labels
            .date
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect();

        let date = headers
            .iter()
            .position(|h| date_labels.contains(h))
            .ok_or_else(|| WeatherError::MissingColumn(date_labels.join(" / ")))?;

        Ok(Self {
            date,
            max_temperature: find(&labels.max_temperature)?,
            min_temperature: find(&labels.min_temperature)?,
            max_humidity: find(&labels.max_humidity)?,
            mean_humidity: find(&labels.mean_humidity)?,
        })
    }

    pub fn from_header_line(line: &str, labels: &ColumnLabels) -> Result<Self> {
        Self::resolve(line.trim_end_matches(['\r', '\n']).split(','), labels)
    }
}
