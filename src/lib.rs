//! tablecore: a rendering-agnostic table state engine.
//!
//! Given an ordered sequence of rows and a set of column descriptors,
//! [`TableEngine`](table::TableEngine) derives a sortable, selectable,
//! paginated view of the data and notifies an observer of state changes.
//! It owns no rendering, no I/O, and no async work: every action runs to
//! completion inside the caller's event handler, and every derived view
//! (sorted order, page window, selection aggregates) is a pure function of
//! the engine's state.
//!
//! The host layer is expected to:
//! - feed data in wholesale via [`TableEngine::set_data`](table::TableEngine::set_data),
//! - forward user interactions (header clicks, row clicks, page controls)
//!   into the engine's action methods,
//! - read [`TableEngine::visible_rows`](table::TableEngine::visible_rows)
//!   when drawing,
//! - implement [`TableObserver`](table::TableObserver) to hear about
//!   selection/sort/page changes.

pub mod error;
pub mod table;
pub mod value;

pub use error::ConfigError;

pub mod prelude {
    pub use crate::error::ConfigError;
    pub use crate::table::{
        Column, ColumnSpec, PaginationState, Record, RowKey, Selector, SelectionState,
        SortDirection, SortState, TableConfig, TableEngine, TableObserver, TableRow,
        TableSnapshot,
    };
    pub use crate::value::CellValue;
}
