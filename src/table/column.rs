//! Column descriptors and normalization.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::table::item::TableRow;
use crate::value::CellValue;

/// How a column extracts its value from a row.
pub enum Selector<T> {
    /// Read a named field via [`TableRow::field`].
    Field(String),
    /// Compute the value with a closure.
    Computed(Arc<dyn Fn(&T) -> CellValue + Send + Sync>),
}

impl<T: TableRow> Selector<T> {
    /// Extract this selector's value from a row.
    ///
    /// A missing field resolves to [`CellValue::Null`], which sorts before
    /// everything else.
    pub fn value_of(&self, row: &T) -> CellValue {
        match self {
            Selector::Field(name) => row.field(name).unwrap_or(CellValue::Null),
            Selector::Computed(get) => get(row),
        }
    }
}

impl<T> Clone for Selector<T> {
    fn clone(&self) -> Self {
        match self {
            Selector::Field(name) => Selector::Field(name.clone()),
            Selector::Computed(get) => Selector::Computed(Arc::clone(get)),
        }
    }
}

impl<T> fmt::Debug for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Selector::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Raw column descriptor, as supplied by the caller.
///
/// # Examples
///
/// ```
/// use tablecore::prelude::*;
///
/// # #[derive(Clone, PartialEq)] struct Film;
/// # impl TableRow for Film {
/// #     fn field(&self, _: &str) -> Option<CellValue> { None }
/// # }
/// let specs: Vec<ColumnSpec<Film>> = vec![
///     ColumnSpec::new("Title").field("title").sortable(),
///     ColumnSpec::new("Year").field("year").sortable(),
/// ];
/// ```
pub struct ColumnSpec<T> {
    /// Display name (header text).
    pub name: String,
    /// Value selector. Required; normalization fails without one.
    pub selector: Option<Selector<T>>,
    /// Whether header clicks may sort by this column.
    pub sortable: bool,
    /// Custom row comparator, overriding the natural [`CellValue`] order.
    pub comparator: Option<Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>>,
}

impl<T: TableRow> ColumnSpec<T> {
    /// Create a descriptor with the given header text and no selector.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selector: None,
            sortable: false,
            comparator: None,
        }
    }

    /// Select the value of a named row field.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.selector = Some(Selector::Field(name.into()));
        self
    }

    /// Select a computed value.
    pub fn computed(mut self, get: impl Fn(&T) -> CellValue + Send + Sync + 'static) -> Self {
        self.selector = Some(Selector::Computed(Arc::new(get)));
        self
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Sort with a custom comparator instead of the natural value order.
    pub fn comparator(mut self, cmp: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static) -> Self {
        self.comparator = Some(Arc::new(cmp));
        self
    }
}

/// A normalized column: a [`ColumnSpec`] with a stable unique id assigned.
///
/// The id doubles as a reconciliation key for the host's rendering layer
/// and as the sort-target reference in [`SortState`](crate::table::SortState).
pub struct Column<T> {
    /// Stable unique id, derived from the selector.
    pub id: String,
    /// Display name (header text).
    pub name: String,
    /// Value selector.
    pub selector: Selector<T>,
    /// Whether header clicks may sort by this column.
    pub sortable: bool,
    /// Custom row comparator, if any.
    pub comparator: Option<Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>>,
}

impl<T: TableRow> Column<T> {
    /// Normalize raw descriptors into canonical columns.
    ///
    /// Ids come from field-selector names; computed selectors get an
    /// ordinal id (`column-3` for the third column). A duplicate id picks
    /// up an ordinal suffix so every id stays unique. Deterministic for
    /// identical input.
    ///
    /// Fails if the list is empty or any descriptor lacks a selector.
    pub fn normalize(specs: Vec<ColumnSpec<T>>) -> Result<Vec<Column<T>>, ConfigError> {
        if specs.is_empty() {
            return Err(ConfigError::NoColumns);
        }

        let mut columns = Vec::with_capacity(specs.len());
        let mut used_ids: Vec<String> = Vec::with_capacity(specs.len());

        for (index, spec) in specs.into_iter().enumerate() {
            let selector = spec
                .selector
                .ok_or_else(|| ConfigError::MissingSelector {
                    name: spec.name.clone(),
                })?;

            let base_id = match &selector {
                Selector::Field(field) => field.clone(),
                Selector::Computed(_) => format!("column-{}", index + 1),
            };
            let id = if used_ids.iter().any(|existing| *existing == base_id) {
                format!("{}-{}", base_id, index + 1)
            } else {
                base_id
            };
            used_ids.push(id.clone());

            columns.push(Column {
                id,
                name: spec.name,
                selector,
                sortable: spec.sortable,
                comparator: spec.comparator,
            });
        }

        Ok(columns)
    }

    /// Extract this column's value from a row.
    pub fn value_of(&self, row: &T) -> CellValue {
        self.selector.value_of(row)
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            selector: self.selector.clone(),
            sortable: self.sortable,
            comparator: self.comparator.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("selector", &self.selector)
            .field("sortable", &self.sortable)
            .field("comparator", &self.comparator.as_ref().map(|_| ".."))
            .finish()
    }
}
