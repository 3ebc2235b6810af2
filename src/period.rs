//! Assignment of [Period] labels by ordinal position within a chronologically ordered sequence.
//!
//! The boundaries are the real-valued thirds `len / 3` and `2 * len / 3`, never truncated. For
//! lengths that are not a multiple of three this gives a specific split: 10 rows become 4 Early,
//! 3 Mid and 3 Late; 7 rows become 3, 2 and 2; 8 rows become 3, 3 and 2.

use serde::Serialize;

use crate::domain::{Period, PerspectiveRow};

impl Period {
    /// The period of the element at `index` in a sequence of `len` elements.
    #[inline]
    pub fn of(index: usize, len: usize) -> Self {
        debug_assert!(index < len, "index {index} out of bounds for length {len}");
        // index < len/3 and index < 2len/3, scaled by 3 to stay exact
        let scaled = 3 * index;
        if scaled < len {
            Period::Early
        } else if scaled < 2 * len {
            Period::Mid
        } else {
            Period::Late
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelledRow {
    #[serde(flatten)]
    pub row: PerspectiveRow,
    pub period: Period,
}

/// Labels each row by its position, preserving order.
pub fn assign(rows: Vec<PerspectiveRow>) -> Vec<LabelledRow> {
    let len = rows.len();
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| LabelledRow {
            row,
            period: Period::of(index, len),
        })
        .collect()
}
