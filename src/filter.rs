//! Narrowing of perspective rows by match outcome.

use crate::domain::{PerspectiveRow, ResultFilter};

impl ResultFilter {
    #[inline]
    pub fn matches(&self, row: &PerspectiveRow) -> bool {
        match self {
            ResultFilter::All => true,
            ResultFilter::Win => row.win,
            ResultFilter::Draw => row.is_draw(),
            // a draw also has win=0, so both conditions are required
            ResultFilter::Loss => !row.win && !row.is_draw(),
        }
    }

    /// Retains the rows that pass the filter, in their original order.
    pub fn apply(&self, mut rows: Vec<PerspectiveRow>) -> Vec<PerspectiveRow> {
        if *self != ResultFilter::All {
            rows.retain(|row| self.matches(row));
        }
        rows
    }
}
