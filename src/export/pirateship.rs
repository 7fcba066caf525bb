//! PirateShip import CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ExportError;
use crate::model::ShippingRecord;

/// Column order expected by the PirateShip spreadsheet importer
pub const PIRATESHIP_HEADERS: [&str; 12] = [
    "Name",
    "Address 1",
    "Address 2",
    "City",
    "State",
    "Zipcode",
    "Country",
    "Order Id",
    "Ounces",
    "Length",
    "Width",
    "Height",
];

/// Write carrier import rows as CSV
///
/// The header row is always written, even with no records.
pub fn write_pirateship_csv<W: Write>(
    writer: W,
    records: &[ShippingRecord],
) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(PIRATESHIP_HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Write carrier import rows to a file, replacing any existing file
pub fn write_pirateship_file(path: &Path, records: &[ShippingRecord]) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_pirateship_csv(file, records)?;
    log::info!(
        "Wrote {} carrier rows to {}",
        records.len(),
        path.display()
    );
    Ok(())
}
