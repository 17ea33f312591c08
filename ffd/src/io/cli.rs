use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Instance as JSON, or a plain-text piece list (.txt, .csv) with `length, quantity[, label]` lines
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    /// Overrides the stock lengths of the instance (mm)
    #[arg(long, value_name = "MM,MM,...", value_delimiter = ',')]
    pub stock_lengths: Option<Vec<u64>>,
    /// Overrides the clamp clearance of the config (mm)
    #[arg(long, value_name = "MM")]
    pub clamp: Option<u64>,
    /// Overrides the kerf loss of the config (mm)
    #[arg(long, value_name = "MM")]
    pub kerf: Option<u64>,
}
