pub mod export;
pub mod filename;

pub use export::{parse_orders, read_orders};
pub use filename::{parse_export_filename, ExportInfo};
