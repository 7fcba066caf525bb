use clap::Parser;
use std::path::PathBuf;

use crate::config::defaults::LABELS_FILE_NAME;

#[derive(Parser, Debug)]
#[command(name = "tcg-labels")]
#[command(
    author,
    version,
    about = "Convert a TCGplayer shipping export into a PirateShip import CSV and a sheet of address labels"
)]
pub struct Args {
    /// TCGplayer shipping export (TCGplayer_ShippingExport_YYYYMMDD_N.csv)
    #[arg(required = true)]
    pub input: PathBuf,

    /// JSON configuration file
    #[arg(required = true)]
    pub config: PathBuf,

    /// Directory that receives the CSV and the label PDF
    #[arg(required = true)]
    pub output_dir: PathBuf,

    /// Order value threshold in dollars (overrides value_threshold)
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Row of the first label on the first sheet, 0-9 (overrides start_row)
    #[arg(long, allow_negative_numbers = true)]
    pub start_row: Option<i64>,

    /// Column of the first label on the first sheet, 0-2 (overrides start_col)
    #[arg(long, allow_negative_numbers = true)]
    pub start_col: Option<i64>,

    /// Skip PDF stream compression
    #[arg(long)]
    pub no_compress: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Path of the carrier import CSV for a given file name
    pub fn csv_output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Path of the label sheet PDF
    pub fn labels_output_path(&self) -> PathBuf {
        self.output_dir.join(LABELS_FILE_NAME)
    }
}
