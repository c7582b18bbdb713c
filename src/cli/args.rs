use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::reports::MissingEntryPolicy;
use crate::utils::validators::{parse_year, YearMonth};

#[derive(Parser)]
#[command(name = "weatherman")]
#[command(about = "Weather reports from monthly observation files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Directory holding the weather files")]
    pub data_dir: Option<PathBuf>,

    #[arg(long, global = true, help = "Configuration file [default: weatherman.toml]")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, value_enum, help = "Chart days without a high or low")]
    pub missing_entry: Option<MissingEntryArg>,

    #[arg(long, global = true)]
    pub max_workers: Option<usize>,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide progress output")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Highest and lowest temperature and highest humidity of a year
    Extremes {
        #[arg(value_parser = parse_year, help = "Year, e.g. 2004")]
        year: i32,
    },

    /// Average highest and lowest temperature and mean humidity of a month
    Averages {
        #[arg(help = "Month as YYYY/MM, e.g. 2005/6")]
        month: YearMonth,
    },

    /// Daily bar chart of a month's highest and lowest temperature
    Chart {
        #[arg(help = "Month as YYYY/MM, e.g. 2005/6")]
        month: YearMonth,
    },

    /// Run several reports in one go: extremes, then averages, then charts
    Report {
        #[arg(short = 'e', long = "extremes", value_parser = parse_year)]
        extremes: Vec<i32>,

        #[arg(short = 'a', long = "averages")]
        averages: Vec<YearMonth>,

        #[arg(short = 'c', long = "chart")]
        charts: Vec<YearMonth>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MissingEntryArg {
    Skip,
    NoEntry,
}

impl From<MissingEntryArg> for MissingEntryPolicy {
    fn from(arg: MissingEntryArg) -> Self {
        match arg {
            MissingEntryArg::Skip => MissingEntryPolicy::Skip,
            MissingEntryArg::NoEntry => MissingEntryPolicy::NoEntry,
        }
    }
}
