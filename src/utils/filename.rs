use crate::utils::constants::month_abbreviation;

/// File name fragment identifying one month, e.g. `_2004_Aug` as in
/// `Murree_weather_2004_Aug.txt`.
pub fn month_file_token(year: i32, month: u32) -> String {
    format!("_{}_{}", year, month_abbreviation(month))
}

/// Whether a file name belongs to the given month.
pub fn is_month_file(file_name: &str, year: i32, month: u32) -> bool {
    file_name.contains(&month_file_token(year, month))
}

/// Whether a file name looks like any monthly weather file (`..._YYYY_Mon...`).
pub fn is_weather_file(file_name: &str) -> bool {
    file_name.split('_').collect::<Vec<_>>().windows(2).any(|pair| {
        let year_like = pair[0].len() == 4 && pair[0].chars().all(|c| c.is_ascii_digit());
        let month_like = (1..=12).any(|m| pair[1].starts_with(month_abbreviation(m)));
        year_like && month_like
    })
}
