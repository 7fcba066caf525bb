use crate::config::defaults::{COLUMNS, ROWS_PER_PAGE};

/// Grid position assigned to one label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub page: usize,
    pub row: usize,
    pub column: usize,
}

/// Row/column/page bookkeeping for one layout pass
///
/// The column counter starts at the configured start column and only ever
/// increases; the visible column is that counter modulo the column count.
/// A row is consumed each time the column wraps back to 0, except for the
/// very first placement, and a page is consumed each time the row counter
/// reaches the rows-per-page limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementCursor {
    index: usize,
    row: usize,
    col_count: usize,
    page: usize,
}

impl PlacementCursor {
    pub fn new(start_row: usize, start_col: usize) -> Self {
        Self {
            index: 0,
            row: start_row,
            col_count: start_col,
            page: 0,
        }
    }

    /// Number of slots handed out so far
    pub fn index(&self) -> usize {
        self.index
    }

    /// Claim the slot for the next label
    pub fn next_slot(&mut self) -> Slot {
        let column = self.col_count % COLUMNS;

        if column == 0 && self.index != 0 {
            self.row += 1;
        }

        if self.row >= ROWS_PER_PAGE {
            self.page += 1;
            self.row = 0;
            log::debug!("Page break before label {} (page {})", self.index, self.page + 1);
        }

        let slot = Slot {
            page: self.page,
            row: self.row,
            column,
        };

        self.index += 1;
        self.col_count += 1;
        slot
    }
}

impl Iterator for PlacementCursor {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        Some(self.next_slot())
    }
}
