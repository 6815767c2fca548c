use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Plans greedy cutting layouts on stock bars and writes them as JSON and SVG
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON instance, or a .csv/.xlsx table with one row per cut size
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Receives sol_<input>.json and one sol_<input>_<job>.svg per job, created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// JSON config with column names, drawing options, and the unusable length and kerf loss
    /// applied to table rows (JSON instances carry their own). Defaults are used when absent
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Verbosity of the log on stdout, `debug` also reports every closed bar
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
