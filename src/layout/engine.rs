use printpdf::Mm;

use crate::config::{FontColor, LayoutConfig};
use crate::error::ConfigError;
use crate::model::AddressRecord;

use super::cursor::PlacementCursor;
use super::geometry::SheetGeometry;

/// One address positioned on the label sheet
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    /// Page index (0-based)
    pub page: usize,
    pub row: usize,
    pub column: usize,
    /// Left edge and top edge of the cell
    pub cell: (Mm, Mm),
    /// Start of the first text line; later lines step down by the line height
    pub origin: (Mm, Mm),
    pub lines: Vec<String>,
    pub color: FontColor,
    /// True for padding labels carrying the default address
    pub filler: bool,
}

/// Lays out addresses on a fixed 3 x 10 label grid
#[derive(Debug, Clone)]
pub struct LabelSheetLayout {
    geometry: SheetGeometry,
    config: LayoutConfig,
}

impl LabelSheetLayout {
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            geometry: SheetGeometry::default(),
            config,
        })
    }

    pub fn geometry(&self) -> &SheetGeometry {
        &self.geometry
    }

    /// Real addresses followed by the filler copies, paired with a filler flag
    ///
    /// The filler count depends only on the number of real addresses passed
    /// in; fillers are never padded themselves.
    pub fn effective_addresses<'a>(
        &'a self,
        addresses: &'a [AddressRecord],
    ) -> impl Iterator<Item = (&'a AddressRecord, bool)> + 'a {
        let fillers = self.config.repeat_default.count(addresses.len());
        addresses
            .iter()
            .map(|a| (a, false))
            .chain(std::iter::repeat((&self.config.default_address, true)).take(fillers))
    }

    /// Place every address (and filler) in input order
    pub fn layout(&self, addresses: &[AddressRecord]) -> Vec<PlacedLabel> {
        let mut cursor = PlacementCursor::new(self.config.start_row, self.config.start_col);

        let labels: Vec<PlacedLabel> = self
            .effective_addresses(addresses)
            .map(|(address, filler)| {
                let slot = cursor.next_slot();
                let lines = address.label_lines();
                PlacedLabel {
                    page: slot.page,
                    row: slot.row,
                    column: slot.column,
                    cell: self.geometry.cell_origin(slot.row, slot.column),
                    origin: self.geometry.text_origin(slot.row, slot.column, lines.len()),
                    lines,
                    color: self.config.font_color,
                    filler,
                }
            })
            .collect();

        log::info!(
            "Laid out {} labels ({} real) on {} page(s)",
            labels.len(),
            addresses.len(),
            page_count(&labels)
        );

        labels
    }
}

/// Lay out `addresses` with `config` on the standard label sheet
pub fn layout(
    addresses: &[AddressRecord],
    config: &LayoutConfig,
) -> Result<Vec<PlacedLabel>, ConfigError> {
    Ok(LabelSheetLayout::new(config.clone())?.layout(addresses))
}

/// Number of pages needed for `labels`; an empty sheet is still one page
pub fn page_count(labels: &[PlacedLabel]) -> usize {
    labels.last().map(|l| l.page + 1).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FillerCount;

    const EPS: f32 = 0.001;

    fn address(name: &str, addr2: &str) -> AddressRecord {
        AddressRecord::new(name, "1 Main St", addr2, "Anytown", "ST", "01234")
    }

    fn addresses(n: usize) -> Vec<AddressRecord> {
        (0..n).map(|i| address(&format!("Buyer {}", i), "")).collect()
    }

    fn filler() -> AddressRecord {
        AddressRecord::new("Test Business", "123 Test St", "", "Test City", "TS", "12345")
    }

    fn config(start_row: usize, start_col: usize, repeat_default: FillerCount) -> LayoutConfig {
        LayoutConfig {
            start_row,
            start_col,
            default_address: filler(),
            repeat_default,
            ..Default::default()
        }
    }

    #[test]
    fn test_single_address_default_config() {
        let john = AddressRecord::new(
            "John Doe",
            "456 Main St",
            "Apt 789",
            "Anytown",
            "ST",
            "67890",
        );
        let labels = layout(&[john], &LayoutConfig::default()).unwrap();

        assert_eq!(labels.len(), 1);
        let label = &labels[0];
        assert_eq!(label.page, 0);
        assert_eq!(label.column, 0);
        assert_eq!(label.row, 0);
        assert_eq!(label.lines.len(), 4);
        assert_eq!(label.lines[3], "Anytown, ST 67890");
        assert!(!label.filler);
    }

    #[test]
    fn test_no_fillers_keeps_count() {
        let engine = LabelSheetLayout::new(config(0, 0, FillerCount::Exactly(0))).unwrap();
        assert_eq!(engine.layout(&addresses(7)).len(), 7);
    }

    #[test]
    fn test_per_address_fillers_double_count() {
        let engine = LabelSheetLayout::new(config(0, 0, FillerCount::PerAddress)).unwrap();
        let labels = engine.layout(&addresses(5));

        assert_eq!(labels.len(), 10);
        assert!(labels[..5].iter().all(|l| !l.filler));
        assert!(labels[5..].iter().all(|l| l.filler));
        assert_eq!(labels[5].lines[0], "Test Business");
    }

    #[test]
    fn test_per_address_fillers_with_no_addresses() {
        let engine = LabelSheetLayout::new(config(0, 0, FillerCount::PerAddress)).unwrap();
        assert!(engine.layout(&[]).is_empty());
    }

    #[test]
    fn test_fixed_fillers_with_no_addresses() {
        let engine = LabelSheetLayout::new(config(0, 0, FillerCount::Exactly(4))).unwrap();
        let labels = engine.layout(&[]);
        assert_eq!(labels.len(), 4);
        assert!(labels.iter().all(|l| l.filler));
    }

    #[test]
    fn test_order_is_preserved() {
        let engine = LabelSheetLayout::new(config(3, 1, FillerCount::Exactly(2))).unwrap();
        let input = addresses(4);
        let labels = engine.layout(&input);

        for (label, address) in labels.iter().zip(&input) {
            assert_eq!(label.lines[0], address.name);
        }
        assert_eq!(labels[4].lines[0], "Test Business");
        assert_eq!(labels[5].lines[0], "Test Business");
    }

    #[test]
    fn test_start_position() {
        let engine = LabelSheetLayout::new(config(4, 2, FillerCount::Exactly(0))).unwrap();
        let labels = engine.layout(&addresses(2));

        assert_eq!((labels[0].row, labels[0].column), (4, 2));
        assert_eq!((labels[1].row, labels[1].column), (5, 0));
        assert_eq!(labels[0].cell, engine.geometry().cell_origin(4, 2));
    }

    #[test]
    fn test_index_thirty_starts_second_page() {
        let engine = LabelSheetLayout::new(config(0, 0, FillerCount::Exactly(0))).unwrap();
        let labels = engine.layout(&addresses(31));

        assert_eq!(labels[29].page, 0);
        assert_eq!(labels[30].page, 1);
        assert_eq!((labels[30].row, labels[30].column), (0, 0));
        assert_eq!(labels[30].cell, labels[0].cell);
        assert_eq!(page_count(&labels), 2);
    }

    #[test]
    fn test_three_and_four_line_blocks_share_center() {
        let engine = LabelSheetLayout::new(LayoutConfig::default()).unwrap();
        let labels = engine.layout(&[address("A", ""), address("B", "Suite 5")]);
        let geometry = engine.geometry();
        let lh = geometry.line_height;

        let center = |label: &PlacedLabel| {
            let n = label.lines.len() as f32;
            // Midpoint between the first line and the bottom of the last line
            label.origin.1 .0 - (n * lh) / 2.0
        };

        let (_, top) = labels[0].cell;
        assert!((labels[0].origin.1 .0 - (top.0 - (geometry.cell_height - 3.0 * lh) / 2.0)).abs() < EPS);
        assert!(
            (labels[1].origin.1 .0 - (top.0 - (geometry.cell_height - 4.0 * lh) / 2.0)).abs() < EPS
        );
        assert!((center(&labels[0]) - center(&labels[1])).abs() < EPS);
        assert!((center(&labels[0]) - (top.0 - geometry.cell_height / 2.0)).abs() < EPS);
    }

    #[test]
    fn test_color_is_carried() {
        let cfg = LayoutConfig {
            font_color: (0.2, 0.4, 0.6),
            ..Default::default()
        };
        let labels = layout(&addresses(2), &cfg).unwrap();
        assert!(labels.iter().all(|l| l.color == (0.2, 0.4, 0.6)));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let cfg = LayoutConfig {
            start_col: 3,
            ..Default::default()
        };
        assert!(matches!(
            layout(&addresses(1), &cfg),
            Err(ConfigError::InvalidStartColumn(3))
        ));
    }

    #[test]
    fn test_empty_sheet_is_one_page() {
        assert_eq!(page_count(&[]), 1);
    }
}
