pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;
pub mod select;

pub use config::{LayoutConfig, Settings};
pub use error::{ConfigError, ExportError, RenderError};
pub use layout::{layout, LabelSheetLayout, PlacedLabel};
pub use model::{AddressRecord, Order, ShippingRecord};
pub use parser::{parse_export_filename, read_orders, ExportInfo};
pub use render::LabelSheetRenderer;

/// High-level API for rendering a label sheet.
///
/// Lays out `addresses` (followed by any filler copies of the configured
/// default address) on the 30-up label grid and returns the PDF bytes.
///
/// # Example
///
/// ```no_run
/// use tcg_labels::{render_label_sheet, AddressRecord, Settings};
///
/// let addresses = vec![AddressRecord::new(
///     "John Doe", "456 Main St", "Apt 789", "Anytown", "ST", "67890",
/// )];
///
/// let pdf_bytes = render_label_sheet(&addresses, &Settings::default()).unwrap();
/// std::fs::write("formatted_addresses.pdf", pdf_bytes).unwrap();
/// ```
pub fn render_label_sheet(
    addresses: &[AddressRecord],
    settings: &Settings,
) -> Result<Vec<u8>, RenderError> {
    LabelSheetRenderer::new(settings.clone()).render(addresses)
}
