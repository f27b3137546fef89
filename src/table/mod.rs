//! The table state engine and its cooperating parts.
//!
//! Module layout mirrors the engine's decomposition:
//! - [`item`] — row identity ([`TableRow`], [`RowKey`]) and the map-backed
//!   [`Record`] row type
//! - [`column`] — column descriptors and normalization
//! - [`sort`] — stable ordering and the sort cache
//! - [`pagination`] — page windowing
//! - [`selection`] — the selection state machine
//! - [`events`] — snapshots and the observer boundary
//! - [`engine`] — the facade tying the slices together

pub mod column;
pub mod engine;
pub mod events;
pub mod item;
pub mod pagination;
pub mod selection;
pub mod sort;

pub use column::{Column, ColumnSpec, Selector};
pub use engine::{TableConfig, TableEngine};
pub use events::{TableObserver, TableSnapshot};
pub use item::{Record, RowKey, TableRow};
pub use pagination::PaginationState;
pub use selection::SelectionState;
pub use sort::{SortDirection, SortState};
