//! The engine facade: owns the state slices, applies actions, notifies.

use log::{debug, warn};

use crate::error::ConfigError;
use crate::table::column::{Column, ColumnSpec};
use crate::table::events::{TableObserver, TableSnapshot};
use crate::table::item::{RowKey, TableRow};
use crate::table::pagination::PaginationState;
use crate::table::selection::SelectionState;
use crate::table::sort::{SortCache, SortDirection, SortState};

/// Engine configuration.
///
/// Built up builder-style and handed to [`TableEngine::new`] once; the
/// engine owns it for its lifetime.
///
/// # Examples
///
/// ```
/// use tablecore::prelude::*;
///
/// let config = TableConfig::new()
///     .key_field("id")
///     .pagination(true)
///     .pagination_per_page(25)
///     .default_sort_field("title");
/// ```
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Row field used for identity. Rows lacking it fall back to their
    /// position in the input data order.
    pub key_field: String,
    /// Enable the pagination engine.
    pub pagination: bool,
    /// Remote ("ajax") mode: the caller supplies exactly one page of rows
    /// and owns any refetching. The engine does not slice, and it sorts
    /// only the supplied page — never the full remote set.
    pub pagination_remote: bool,
    /// Initial page size.
    pub pagination_per_page: usize,
    /// Authoritative total row count when remote mode hides the true data
    /// length. Used for page-count reporting, never for local slicing.
    pub pagination_total_rows: Option<usize>,
    /// Initial sort column (a column id / field name).
    pub default_sort_field: Option<String>,
    /// Initial sort direction, and the direction a newly clicked column
    /// starts from.
    pub default_sort_ascending: bool,
    /// Whether the host wires up row selection. Carried for the host's
    /// benefit; the engine's selection actions work regardless.
    pub selectable_rows: bool,
    /// Whether the host renders an expander cell. Engine logic ignores it.
    pub expandable_rows: bool,
    /// Snap back to page 1 when the page size changes. Off by default:
    /// the current page is left untouched, even if it then points past
    /// the end of the data (the window comes back empty).
    pub reset_page_on_rows_change: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            key_field: "id".to_string(),
            pagination: false,
            pagination_remote: false,
            pagination_per_page: 10,
            pagination_total_rows: None,
            default_sort_field: None,
            default_sort_ascending: true,
            selectable_rows: false,
            expandable_rows: false,
            reset_page_on_rows_change: false,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row identity field.
    pub fn key_field(mut self, field: impl Into<String>) -> Self {
        self.key_field = field.into();
        self
    }

    /// Enable or disable pagination.
    pub fn pagination(mut self, enabled: bool) -> Self {
        self.pagination = enabled;
        self
    }

    /// Delegate page windowing to the caller (remote mode).
    pub fn pagination_remote(mut self, remote: bool) -> Self {
        self.pagination_remote = remote;
        self
    }

    /// Set the initial page size.
    pub fn pagination_per_page(mut self, rows: usize) -> Self {
        self.pagination_per_page = rows;
        self
    }

    /// Set the authoritative total row count (remote mode).
    pub fn pagination_total_rows(mut self, total: usize) -> Self {
        self.pagination_total_rows = Some(total);
        self
    }

    /// Set the initial sort column.
    pub fn default_sort_field(mut self, field: impl Into<String>) -> Self {
        self.default_sort_field = Some(field.into());
        self
    }

    /// Set the initial (and per-column default) sort direction.
    pub fn default_sort_ascending(mut self, ascending: bool) -> Self {
        self.default_sort_ascending = ascending;
        self
    }

    /// Mark rows as selectable for the host layer.
    pub fn selectable_rows(mut self, selectable: bool) -> Self {
        self.selectable_rows = selectable;
        self
    }

    /// Mark rows as expandable for the host layer.
    pub fn expandable_rows(mut self, expandable: bool) -> Self {
        self.expandable_rows = expandable;
        self
    }

    /// Snap back to page 1 whenever the page size changes.
    pub fn reset_page_on_rows_change(mut self, reset: bool) -> Self {
        self.reset_page_on_rows_change = reset;
        self
    }
}

/// The table state engine.
///
/// One instance per table. All state lives here, is mutated only through
/// the action methods, and is read back through the view accessors and
/// the observer notifications. Actions take the observer as a parameter
/// (the way rafter hands a context into event handlers), so the engine
/// stores no callbacks.
///
/// # Examples
///
/// ```
/// use tablecore::prelude::*;
///
/// let columns = vec![
///     ColumnSpec::<Record>::new("Title").field("title").sortable(),
///     ColumnSpec::<Record>::new("Year").field("year").sortable(),
/// ];
/// let mut engine = TableEngine::new(columns, TableConfig::new().selectable_rows(true)).unwrap();
/// engine.set_data(vec![
///     Record::new().with("id", 1).with("title", "Alien").with("year", 1979),
///     Record::new().with("id", 2).with("title", "Blade Runner").with("year", 1982),
/// ]);
///
/// engine.toggle_sort("year", &mut ());
/// assert_eq!(engine.visible_rows()[0].field("year"), Some(CellValue::Int(1979)));
/// ```
#[derive(Debug)]
pub struct TableEngine<T: TableRow> {
    config: TableConfig,
    columns: Vec<Column<T>>,
    data: Vec<T>,
    /// Bumped on every `set_data`; keys the sort cache.
    generation: u64,
    sort: SortState,
    selection: SelectionState,
    pagination: PaginationState,
    cache: SortCache,
    last_snapshot: TableSnapshot,
}

impl<T: TableRow> TableEngine<T> {
    /// Create an engine from raw column descriptors and a configuration.
    ///
    /// Fails fast on configuration problems (missing selectors, empty
    /// column list, zero page size); nothing after construction returns
    /// an error.
    pub fn new(columns: Vec<ColumnSpec<T>>, config: TableConfig) -> Result<Self, ConfigError> {
        if config.pagination_per_page == 0 {
            return Err(ConfigError::ZeroRowsPerPage);
        }
        let columns = Column::normalize(columns)?;

        let sort = SortState {
            column: config.default_sort_field.clone(),
            direction: SortDirection::from_ascending(config.default_sort_ascending),
        };
        let pagination = PaginationState::new(config.pagination_per_page);
        let selection = SelectionState::new();

        let mut engine = Self {
            config,
            columns,
            data: Vec::new(),
            generation: 0,
            sort,
            selection,
            pagination,
            cache: SortCache::default(),
            last_snapshot: TableSnapshot::default(),
        };
        // The initial snapshot is the diffing baseline; the first
        // notification fires on the first actual change, not on startup.
        engine.last_snapshot = engine.snapshot();
        Ok(engine)
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    /// Replace the data wholesale.
    ///
    /// No incremental patching: every relevant change supplies the rows
    /// fresh, and the sort cache generation moves on. Selection is keyed
    /// by row identity and deliberately survives data replacement.
    pub fn set_data(&mut self, rows: Vec<T>) {
        self.data = rows;
        self.generation += 1;
        self.cache.invalidate();
    }

    /// The raw data, in input order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Number of locally held rows.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the engine holds no rows.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The authoritative total row count: the configured total when the
    /// data source hides the true length, the local data length otherwise.
    pub fn total_rows(&self) -> usize {
        self.config.pagination_total_rows.unwrap_or(self.data.len())
    }

    // -------------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------------

    /// The normalized columns, in display order. Sorting and pagination
    /// never reorder them.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// The engine configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Current sort state.
    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Current selection state.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Current pagination state.
    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Number of pages for the authoritative total.
    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.total_rows())
    }

    /// The current derived snapshot.
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            all_selected: self.selection.all_selected(),
            selected_count: self.selection.selected_count(),
            selected_rows: self.selection.selected().to_vec(),
            sort_column: self.sort.column.clone(),
            sort_direction: self.sort.direction,
            clear_selected_rows: self.selection.clear_signal(),
        }
    }

    /// Whether a row is currently selected.
    pub fn is_row_selected(&self, row: &T) -> bool {
        self.key_of(row)
            .is_some_and(|key| self.selection.is_selected(&key))
    }

    /// The rows to draw, in order: sorted, then windowed to the current
    /// page in local pagination mode.
    ///
    /// Pure with respect to observable state — reading it never mutates
    /// anything but the sort cache and never notifies. In remote mode the
    /// supplied rows are assumed to be exactly one page and are sorted
    /// but not sliced.
    pub fn visible_rows(&mut self) -> Vec<T> {
        let order = self.sorted_order();
        let window = if self.config.pagination && !self.config.pagination_remote {
            self.pagination.window(order.len())
        } else {
            0..order.len()
        };
        order[window].iter().map(|&i| self.data[i].clone()).collect()
    }

    /// Sorted row indices for the current sort state, via the cache.
    fn sorted_order(&mut self) -> Vec<usize> {
        let column = self
            .sort
            .column
            .as_deref()
            .and_then(|id| self.columns.iter().find(|c| c.id == id));
        match column {
            Some(column) => self
                .cache
                .get_or_compute(self.generation, &self.data, column, self.sort.direction)
                .to_vec(),
            // No sort column (or a stale reference): input order.
            None => (0..self.data.len()).collect(),
        }
    }

    // -------------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------------

    /// Header-click action: toggle sort for a column.
    ///
    /// Unknown or non-sortable columns are a silent no-op, which tolerates
    /// stale column references after a column-set change. Clicking the
    /// current sort column flips the direction; clicking another column
    /// switches to it at the configured default direction. Any click on a
    /// sortable column emits [`TableObserver::sort_changed`].
    pub fn toggle_sort(&mut self, column_id: &str, observer: &mut dyn TableObserver<T>) {
        let Some(column) = self.columns.iter().find(|c| c.id == column_id) else {
            debug!("toggle_sort: no column with id '{column_id}'");
            return;
        };
        if !column.sortable {
            debug!("toggle_sort: column '{column_id}' is not sortable");
            return;
        }
        let id = column.id.clone();

        if self.sort.column.as_deref() == Some(id.as_str()) {
            self.sort.direction = self.sort.direction.flipped();
        } else {
            self.sort.column = Some(id.clone());
            self.sort.direction = SortDirection::from_ascending(self.config.default_sort_ascending);
        }

        observer.sort_changed(&id, self.sort.direction);
        self.maybe_notify(observer);
    }

    /// Select-all toggle over the full data set (not the visible page).
    pub fn select_all(&mut self, observer: &mut dyn TableObserver<T>) {
        let all_keys = self.all_keys();
        self.selection.select_all(all_keys);
        self.maybe_notify(observer);
    }

    /// Toggle selection of a single row.
    ///
    /// A keyed row needs no presence in the current data set; an unkeyed
    /// row not in the data has no stable identity, so toggling it is a
    /// logged no-op.
    pub fn toggle_row(&mut self, row: &T, observer: &mut dyn TableObserver<T>) {
        let Some(key) = self.key_of(row) else {
            warn!(
                "toggle_row: row has no '{}' field and is not in the data set",
                self.config.key_field
            );
            return;
        };
        self.selection.toggle_row(key, self.data.len());
        self.maybe_notify(observer);
    }

    /// Row-click pass-through.
    pub fn click_row(&mut self, row: &T, observer: &mut dyn TableObserver<T>) {
        observer.row_clicked(row);
    }

    /// Move to a page (1-based) and forward the change to the observer,
    /// which owns any remote refetch.
    pub fn change_page(&mut self, page: usize, observer: &mut dyn TableObserver<T>) {
        if page == 0 {
            warn!("change_page: pages are 1-based, ignoring page 0");
            return;
        }
        self.pagination.current_page = page;
        observer.page_changed(page, self.total_rows());
    }

    /// Change the page size.
    ///
    /// The current page stays put unless the config's
    /// `reset_page_on_rows_change` flag is set.
    pub fn change_rows_per_page(&mut self, rows: usize, observer: &mut dyn TableObserver<T>) {
        if rows == 0 {
            warn!("change_rows_per_page: ignoring zero page size");
            return;
        }
        self.pagination.rows_per_page = rows;
        if self.config.reset_page_on_rows_change {
            self.pagination.current_page = 1;
        }
        observer.rows_per_page_changed(rows);
    }

    /// Consume externally supplied props.
    ///
    /// The explicit stand-in for a framework's derive-state-from-props
    /// hook: the host calls this whenever its own inputs change. Currently
    /// the only prop consumed is the clear-selection toggle; flipping it
    /// resets the selection, re-passing the same value is a no-op.
    pub fn sync_props(&mut self, clear_selected_rows: bool, observer: &mut dyn TableObserver<T>) {
        if self.selection.clear(clear_selected_rows) {
            self.maybe_notify(observer);
        }
    }

    // -------------------------------------------------------------------------
    // Identity and notification
    // -------------------------------------------------------------------------

    /// Identity of a row: its key field value, or its position in the
    /// input data order when the field is absent.
    fn key_of(&self, row: &T) -> Option<RowKey> {
        if let Some(value) = row.field(&self.config.key_field) {
            return Some(RowKey::Key(value));
        }
        self.data.iter().position(|r| r == row).map(RowKey::Index)
    }

    /// Keys of every row, in input data order.
    fn all_keys(&self) -> Vec<RowKey> {
        self.data
            .iter()
            .enumerate()
            .map(|(index, row)| match row.field(&self.config.key_field) {
                Some(value) => RowKey::Key(value),
                None => RowKey::Index(index),
            })
            .collect()
    }

    /// Diff the snapshot against the previous one and notify on change.
    ///
    /// Runs at the end of every state-affecting action, so a single user
    /// action produces at most one `table_updated`.
    fn maybe_notify(&mut self, observer: &mut dyn TableObserver<T>) {
        let snapshot = self.snapshot();
        if snapshot.differs_from(&self.last_snapshot) {
            observer.table_updated(&snapshot);
        }
        self.last_snapshot = snapshot;
    }
}
