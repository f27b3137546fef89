//! Snapshots and the observer boundary.
//!
//! The engine's only externally observable side effect is calling into a
//! [`TableObserver`]. Observers are passed into each action by the host,
//! which keeps the engine free of stored callbacks and lets the host
//! decide how (and whether) to react — including kicking off a remote
//! refetch on page changes.

use serde::Serialize;

use crate::table::item::{RowKey, TableRow};
use crate::table::sort::SortDirection;

/// The externally observable bundle of derived state.
///
/// Emitted through [`TableObserver::table_updated`] whenever a
/// state-affecting action changed any selection or sort field; at most
/// once per action, and never from reading views alone.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TableSnapshot {
    pub all_selected: bool,
    pub selected_count: usize,
    pub selected_rows: Vec<RowKey>,
    pub sort_column: Option<String>,
    pub sort_direction: SortDirection,
    pub clear_selected_rows: bool,
}

impl TableSnapshot {
    /// Whether the selection/sort fields differ from `other`.
    ///
    /// `clear_selected_rows` is deliberately not part of the comparison:
    /// consuming the clear toggle already changes the selection fields
    /// whenever it has any effect.
    pub(crate) fn differs_from(&self, other: &TableSnapshot) -> bool {
        self.all_selected != other.all_selected
            || self.selected_count != other.selected_count
            || self.selected_rows != other.selected_rows
            || self.sort_column != other.sort_column
            || self.sort_direction != other.sort_direction
    }
}

/// Observer of engine state changes.
///
/// All methods default to no-ops, so implementors only pick up the events
/// they care about. The engine calls at most one `table_updated` per
/// action; the finer-grained methods fire alongside it for the action
/// that triggered them.
pub trait TableObserver<T: TableRow> {
    /// The derived snapshot changed (selection or sort fields).
    fn table_updated(&mut self, _snapshot: &TableSnapshot) {}

    /// A sortable header was clicked. Fires even when the resulting
    /// column/direction happens to equal the previous state.
    fn sort_changed(&mut self, _column_id: &str, _direction: SortDirection) {}

    /// The current page changed. `total_rows` is the authoritative total
    /// (configured total in remote mode, data length otherwise).
    fn page_changed(&mut self, _current_page: usize, _total_rows: usize) {}

    /// The page size changed.
    fn rows_per_page_changed(&mut self, _rows_per_page: usize) {}

    /// A row was clicked. Raw pass-through; the engine does no filtering.
    fn row_clicked(&mut self, _row: &T) {}
}

/// The no-op observer, for hosts that poll state instead of listening.
impl<T: TableRow> TableObserver<T> for () {}
