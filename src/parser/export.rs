//! TCGplayer shipping export reader
//!
//! Columns are matched by header name, so column order and any extra
//! columns in the export do not matter.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ExportError;
use crate::model::Order;

/// Read all orders from an export file on disk
pub fn read_orders(path: &Path) -> Result<Vec<Order>, ExportError> {
    let file = File::open(path)?;
    parse_orders(file).map_err(|source| ExportError::CsvRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse orders from any reader containing export CSV content
pub fn parse_orders<R: Read>(reader: R) -> Result<Vec<Order>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut orders = Vec::new();
    for result in reader.deserialize::<Order>() {
        orders.push(result?);
    }

    log::debug!("Parsed {} orders from export", orders.len());
    Ok(orders)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "\
FirstName,LastName,Address1,Address2,City,State,PostalCode,Country,Order #,Value Of Products,Shipping Fee Paid
John,Doe,456 Main St,Apt 789,Anytown,ST,67890,US,12345,15.00,2.00
Jane,Smith,789 Oak St,,Othertown,ST,04321,US,12346,25.00,3.00
";

    #[test]
    fn test_parse_full_export() {
        let orders = parse_orders(EXPORT.as_bytes()).unwrap();
        assert_eq!(orders.len(), 2);

        assert_eq!(orders[0].full_name(), "John Doe");
        assert_eq!(orders[0].address2(), "Apt 789");
        assert_eq!(orders[0].order_id, "12345");

        assert_eq!(orders[1].address2, None);
        assert_eq!(orders[1].postal_code, "04321");
        assert!((orders[1].full_cost() - 28.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_without_optional_columns() {
        let content = "\
FirstName,LastName,Address1,Address2,City,State,PostalCode,Value Of Products,Shipping Fee Paid
John,Doe,456 Main St,Apt 789,Anytown,ST,67890,15.00,2.00
";
        let orders = parse_orders(content.as_bytes()).unwrap();
        assert_eq!(orders.len(), 1);
        assert!(orders[0].country.is_empty());
        assert!(orders[0].order_id.is_empty());
    }

    #[test]
    fn test_non_numeric_cost_is_rejected() {
        let content = "\
FirstName,LastName,Address1,Address2,City,State,PostalCode,Value Of Products,Shipping Fee Paid
John,Doe,456 Main St,,Anytown,ST,67890,lots,2.00
";
        assert!(parse_orders(content.as_bytes()).is_err());
    }

    #[test]
    fn test_missing_required_column_is_rejected() {
        let content = "\
FirstName,LastName,City
John,Doe,Anytown
";
        assert!(parse_orders(content.as_bytes()).is_err());
    }
}
