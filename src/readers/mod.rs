pub mod column_layout;
pub mod record_parser;
pub mod weather_directory;

pub use column_layout::ColumnLayout;
pub use record_parser::ObservationParser;
pub use weather_directory::WeatherDirectory;
