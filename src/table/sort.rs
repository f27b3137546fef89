//! Stable row ordering and the sort cache.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::table::column::Column;
use crate::table::item::TableRow;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Map the caller-facing "ascending?" flag onto a direction.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Current sort target and direction.
///
/// `column` holds a column id; `None` leaves the data in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: Option<String>,
    pub direction: SortDirection,
}

/// Compute the stable sort permutation of `rows` under `column`/`direction`.
///
/// Returns row indices in sorted order rather than moving the rows
/// themselves; the engine materializes whatever slice of the permutation
/// it needs. Ties keep their relative input order (`sort_by` is stable),
/// so equal-valued rows never scramble on repeated sorts.
pub fn sort_permutation<T: TableRow>(
    rows: &[T],
    column: &Column<T>,
    direction: SortDirection,
) -> Vec<usize> {
    let mut permutation: Vec<usize> = (0..rows.len()).collect();

    if let Some(comparator) = &column.comparator {
        permutation.sort_by(|&a, &b| direction.apply(comparator(&rows[a], &rows[b])));
        return permutation;
    }

    // Extract each row's sort key once up front; comparisons are then
    // O(1) instead of re-running the selector O(n log n) times.
    let keys: Vec<_> = rows.iter().map(|row| column.value_of(row)).collect();
    permutation.sort_by(|&a, &b| direction.apply(keys[a].cmp(&keys[b])));
    permutation
}

/// One-slot memo for the sort permutation.
///
/// Keyed on `(data generation, column id, direction)`. The engine bumps
/// the generation whenever it receives new data, so a cached permutation
/// can never outlive the rows it was computed from. Recomputation is
/// observably pure; the cache only avoids the O(n log n) work on
/// unrelated re-reads.
#[derive(Debug, Default)]
pub(crate) struct SortCache {
    key: Option<(u64, String, SortDirection)>,
    permutation: Vec<usize>,
}

impl SortCache {
    /// Return the cached permutation for the key, computing it on miss.
    pub(crate) fn get_or_compute<T: TableRow>(
        &mut self,
        generation: u64,
        rows: &[T],
        column: &Column<T>,
        direction: SortDirection,
    ) -> &[usize] {
        let key = (generation, column.id.clone(), direction);
        if self.key.as_ref() != Some(&key) {
            self.permutation = sort_permutation(rows, column, direction);
            self.key = Some(key);
        }
        &self.permutation
    }

    /// Drop any cached permutation.
    pub(crate) fn invalidate(&mut self) {
        self.key = None;
        self.permutation.clear();
    }
}
