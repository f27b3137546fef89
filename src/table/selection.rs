//! The selection state machine.

use crate::table::item::RowKey;

/// Which rows are selected, plus the derived aggregates.
///
/// Selection is keyed by [`RowKey`], not by position, so it survives
/// re-sorts and re-pages. Keys are kept in insertion order (`select_all`
/// yields data order) so snapshots are deterministic.
///
/// Invariants, upheld after every action:
/// - `selected_count() == selected().len()`
/// - `all_selected() == true` iff the count equals the total row count and
///   that total is non-zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    selected: Vec<RowKey>,
    all_selected: bool,
    /// Last value of the external clear-selection toggle, for idempotence.
    clear_signal: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected keys, in insertion order.
    pub fn selected(&self) -> &[RowKey] {
        &self.selected
    }

    /// Number of selected rows.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Whether every row of the data set is selected.
    pub fn all_selected(&self) -> bool {
        self.all_selected
    }

    /// Last consumed clear-toggle value.
    pub fn clear_signal(&self) -> bool {
        self.clear_signal
    }

    /// Whether a key is currently selected.
    pub fn is_selected(&self, key: &RowKey) -> bool {
        self.selected.contains(key)
    }

    /// Select-all toggle over the full logical data set.
    ///
    /// If everything is already selected, clears the selection; otherwise
    /// replaces it with `all_keys` wholesale. "All" means all rows of the
    /// data set, not just the visible page.
    pub fn select_all(&mut self, all_keys: Vec<RowKey>) {
        if self.all_selected {
            self.selected.clear();
            self.all_selected = false;
        } else {
            self.all_selected = !all_keys.is_empty();
            self.selected = all_keys;
        }
    }

    /// Toggle one row in or out of the selection.
    ///
    /// `total_rows` is the size of the full data set, used to rederive the
    /// all-selected flag. The key is not validated against the data set:
    /// with remote paging the full set may not be locally available, so a
    /// key the engine has never seen simply joins the selection.
    pub fn toggle_row(&mut self, key: RowKey, total_rows: usize) {
        if let Some(position) = self.selected.iter().position(|k| *k == key) {
            self.selected.remove(position);
            self.all_selected = false;
        } else {
            self.selected.push(key);
            self.all_selected = total_rows > 0 && self.selected.len() == total_rows;
        }
    }

    /// Wholesale reset, driven by the external clear-selection toggle.
    ///
    /// Records `signal`; a second clear with the same signal value is a
    /// no-op, which keeps a host re-rendering with an unchanged "please
    /// clear" flag from looping. Returns whether the reset ran.
    pub fn clear(&mut self, signal: bool) -> bool {
        if self.clear_signal == signal {
            return false;
        }
        self.selected.clear();
        self.all_selected = false;
        self.clear_signal = signal;
        true
    }
}
