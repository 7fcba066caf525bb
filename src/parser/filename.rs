//! Export filename parsing
//!
//! TCGplayer names its shipping exports
//! `TCGplayer_ShippingExport_<YYYYMMDD>_<number>.csv`. The date and export
//! number are carried over into the PirateShip import file name.

use std::path::Path;

use chrono::NaiveDate;
use nom::{
    bytes::complete::{tag, take_while_m_n},
    character::complete::{char, digit1},
    IResult,
};

use crate::error::ExportError;

const EXPORT_PREFIX: &str = "TCGplayer_ShippingExport_";

/// Date and sequence number identifying one shipping export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportInfo {
    pub date: NaiveDate,
    pub number: String,
}

impl ExportInfo {
    /// Export date as YYYY-MM-DD
    pub fn formatted_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Name of the carrier import file generated from this export
    pub fn pirateship_file_name(&self) -> String {
        format!(
            "PirateShip_Import_{}_{}.csv",
            self.formatted_date(),
            self.number
        )
    }
}

/// Parse `TCGplayer_ShippingExport_YYYYMMDD_N.csv` into (date digits, number)
fn export_name(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, _) = tag(EXPORT_PREFIX)(input)?;
    let (input, date) = take_while_m_n(8, 8, |c: char| c.is_ascii_digit())(input)?;
    let (input, _) = char('_')(input)?;
    let (input, number) = digit1(input)?;
    let (input, _) = tag(".csv")(input)?;
    Ok((input, (date, number)))
}

/// Extract the export date and number from an export file path
pub fn parse_export_filename(path: &Path) -> Result<ExportInfo, ExportError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ExportError::InputFilenamePattern(path.display().to_string()))?;

    let (date, number) = match export_name(file_name) {
        Ok(("", parts)) => parts,
        _ => return Err(ExportError::InputFilenamePattern(file_name.to_string())),
    };

    let date = NaiveDate::parse_from_str(date, "%Y%m%d")
        .map_err(|_| ExportError::InvalidExportDate(date.to_string()))?;

    Ok(ExportInfo {
        date,
        number: number.to_string(),
    })
}
