//! Configuration error types.
//!
//! Errors here are raised only while constructing an engine (column
//! normalization, config validation). Runtime misuse is never fatal: the
//! engine degrades to a logged no-op instead (see the action methods on
//! [`TableEngine`](crate::table::TableEngine)).

use thiserror::Error;

/// Error raised when an engine is constructed from an invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A column descriptor carries no selector, so the engine would have no
    /// way to extract its value from a row.
    #[error("column '{name}' has no selector")]
    MissingSelector {
        /// Display name of the offending column.
        name: String,
    },

    /// `pagination_per_page` was zero; a page must hold at least one row.
    #[error("rows per page must be greater than zero")]
    ZeroRowsPerPage,

    /// The column list is empty.
    #[error("a table needs at least one column")]
    NoColumns,
}
