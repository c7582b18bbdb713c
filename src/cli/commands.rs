use std::io::{self, Write};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use validator::Validate;

use crate::cli::args::{Cli, Commands};
use crate::error::{Result, WeatherError};
use crate::processors::ParallelLoader;
use crate::readers::WeatherDirectory;
use crate::reports::ReportFormatter;
use crate::settings::Settings;
use crate::utils::progress::ProgressReporter;
use crate::utils::validators::YearMonth;

/// One report asked for on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportRequest {
    Extremes(i32),
    Averages(YearMonth),
    Chart(YearMonth),
}

impl Commands {
    /// Requests in the order they are rendered: extremes, averages, charts.
    pub fn requests(&self) -> Vec<ReportRequest> {
        match self {
            Commands::Extremes { year } => vec![ReportRequest::Extremes(*year)],
            Commands::Averages { month } => vec![ReportRequest::Averages(*month)],
            Commands::Chart { month } => vec![ReportRequest::Chart(*month)],
            Commands::Report {
                extremes,
                averages,
                charts,
            } => extremes
                .iter()
                .map(|&year| ReportRequest::Extremes(year))
                .chain(averages.iter().map(|&m| ReportRequest::Averages(m)))
                .chain(charts.iter().map(|&m| ReportRequest::Chart(m)))
                .collect(),
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    let settings = resolve_settings(&cli)?;
    let requests = cli.command.requests();
    if requests.is_empty() {
        return Err(WeatherError::InvalidArgument(
            "report needs at least one of -e YEAR, -a YYYY/MM or -c YYYY/MM".to_string(),
        ));
    }

    let directory = WeatherDirectory::from_settings(&settings)?;
    let session = ReportSession::new(&settings, &directory, cli.quiet);

    // Every report is built before anything is written, so a failure never
    // leaves partial output behind.
    let reports = requests
        .iter()
        .map(|request| session.render(*request))
        .collect::<Result<Vec<_>>>()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_reports(&mut out, &reports)?;

    info!(reports = reports.len(), "done");
    Ok(())
}

/// Renders requests against one data directory.
pub struct ReportSession<'a> {
    directory: &'a WeatherDirectory,
    loader: ParallelLoader,
    formatter: ReportFormatter,
    quiet: bool,
}

impl<'a> ReportSession<'a> {
    pub fn new(settings: &Settings, directory: &'a WeatherDirectory, quiet: bool) -> Self {
        Self {
            directory,
            loader: ParallelLoader::new(settings.max_workers)
                .with_year_policy(settings.year_policy),
            formatter: ReportFormatter::new(settings.missing_entry),
            quiet,
        }
    }

    pub fn render(&self, request: ReportRequest) -> Result<Vec<String>> {
        debug!(?request, "rendering report");

        match request {
            ReportRequest::Extremes(year) => {
                let progress = ProgressReporter::new(12, &format!("Loading {}", year), self.quiet);
                let aggregate = self.loader.load_year(self.directory, year, Some(&progress))?;
                Ok(self.formatter.extremes_report(&aggregate))
            }
            ReportRequest::Averages(YearMonth { year, month }) => {
                let aggregate = self.directory.read_month(year, month)?;
                Ok(self.formatter.averages_report(&aggregate))
            }
            ReportRequest::Chart(YearMonth { year, month }) => {
                let aggregate = self.directory.read_month(year, month)?;
                Ok(self.formatter.chart_report(&aggregate))
            }
        }
    }
}

/// Write reports separated by a blank line.
pub fn write_reports<W: Write>(out: &mut W, reports: &[Vec<String>]) -> io::Result<()> {
    for (index, lines) in reports.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        for line in lines {
            writeln!(out, "{}", line)?;
        }
    }
    out.flush()
}

fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;

    if let Some(ref data_dir) = cli.data_dir {
        settings.data_dir = data_dir.clone();
    }
    if let Some(missing_entry) = cli.missing_entry {
        settings.missing_entry = missing_entry.into();
    }
    if let Some(max_workers) = cli.max_workers {
        settings.max_workers = max_workers;
    }

    settings.validate()?;
    Ok(settings)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "weatherman=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
