pub mod cli;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod reports;
pub mod settings;
pub mod utils;

pub use error::{Result, WeatherError};
