//! Cursor state for the hero listing.
//!
//! The cursor lives in the same row coordinates as the rendered list and
//! is reconciled against the row span on every render, because the page
//! under it can shrink, grow, or empty out between input events.

/// Selection state over the rows currently on screen.
///
/// Plain clamping into the new row count is not enough here: the first
/// render, a page that shrank, and a page that grew each need a different
/// cursor placement, and getting the "shrank" case wrong parks the cursor
/// on a row that no longer exists.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    first_row: usize,
    current_row: usize,
    last_row: usize,
    row_count: usize,
}

impl Listing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile the cursor with a freshly rendered page whose rows span
    /// `first_row..first_row + row_count`.
    ///
    /// - empty page: no cursor until the next non-empty render;
    /// - `current <= first`: first render or a reset cursor, select the
    ///   first row;
    /// - `current > last`: the page shrank (e.g. a deletion emptied the
    ///   tail of the last page), select the last row;
    /// - otherwise the cursor sticks to the same visual row.
    pub fn render(&mut self, first_row: usize, row_count: usize) {
        self.first_row = first_row;
        self.row_count = row_count;
        if row_count == 0 {
            return;
        }
        self.last_row = first_row + row_count - 1;

        if self.current_row <= self.first_row {
            self.current_row = self.first_row;
        } else if self.current_row > self.last_row {
            self.current_row = self.last_row;
        }
    }

    /// Move the cursor down one row, wrapping back to the top.
    pub fn select_next(&mut self) {
        if self.row_count == 0 {
            return;
        }
        self.current_row = if self.current_row < self.last_row {
            self.current_row + 1
        } else {
            self.first_row
        };
    }

    /// Move the cursor up one row, wrapping around to the bottom.
    pub fn select_previous(&mut self) {
        if self.row_count == 0 {
            return;
        }
        self.current_row = if self.current_row > self.first_row {
            self.current_row - 1
        } else {
            self.last_row
        };
    }

    /// The in-page index of the selected row, or `None` for an empty page.
    /// Downstream mutations resolve the targeted record through this.
    pub fn selected_element(&self) -> Option<usize> {
        (self.row_count > 0).then(|| self.current_row - self.first_row)
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Drop the cursor back to the top of the page on the next render.
    pub fn reset(&mut self) {
        self.current_row = 0;
    }
}
