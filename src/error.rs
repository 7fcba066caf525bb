use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(
        "File name '{0}' does not match the expected pattern: TCGplayer_ShippingExport_YYYYMMDD_number.csv"
    )]
    InputFilenamePattern(String),

    #[error("Invalid export date '{0}' (expected YYYYMMDD)")]
    InvalidExportDate(String),

    #[error("Failed to read CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write CSV: {0}")]
    CsvWrite(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF generation error: {0}")]
    PdfGeneration(String),

    #[error("Invalid layout configuration: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid start row {0}: must be between 0 and 9")]
    InvalidStartRow(i64),

    #[error("Invalid start column {0}: must be between 0 and 2")]
    InvalidStartColumn(i64),

    #[error("Invalid color specification: {0}")]
    InvalidColor(String),

    #[error("Invalid repeat_default {0}: must be -1 or a non-negative count")]
    InvalidRepeatDefault(i64),

    #[error("Invalid value threshold: {0}")]
    InvalidThreshold(f64),

    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
