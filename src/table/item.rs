//! Row types: the `TableRow` trait, row identity, and the map-backed
//! `Record` row.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// Trait for items that can be driven through the table engine as rows.
///
/// The engine never looks inside a row except through [`field`], which
/// resolves a named field to a [`CellValue`]. Field-name selectors and the
/// configured key field both go through it.
///
/// # Examples
///
/// ```
/// use tablecore::prelude::*;
///
/// #[derive(Clone, PartialEq)]
/// struct Film {
///     title: String,
///     year: i64,
/// }
///
/// impl TableRow for Film {
///     fn field(&self, name: &str) -> Option<CellValue> {
///         match name {
///             "title" => Some(self.title.as_str().into()),
///             "year" => Some(self.year.into()),
///             _ => None,
///         }
///     }
/// }
/// ```
///
/// [`field`]: TableRow::field
pub trait TableRow: Clone + PartialEq + Send + Sync + 'static {
    /// Resolve a named field to its value, or `None` if the row has no
    /// such field.
    fn field(&self, name: &str) -> Option<CellValue>;
}

/// Stable identity of a row, used to key selection across re-sorts and
/// re-pages.
///
/// Rows that carry the configured key field are identified by that field's
/// value; rows that do not fall back to their position in the input data
/// order. The fallback is positional, so it is only as stable as the data
/// sequence itself — callers who mutate data and expect selection to
/// survive should provide a key field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RowKey {
    /// Value of the key field.
    Key(CellValue),
    /// Position in the input data order (key field absent).
    Index(usize),
}

/// A dynamically-shaped row: a mapping from field name to value.
///
/// `Record` is the built-in row type for callers whose data arrives as
/// loosely-typed documents (JSON and the like) rather than as domain
/// structs. It deserializes straight from a JSON object.
///
/// # Examples
///
/// ```
/// use tablecore::prelude::*;
///
/// let row: Record = serde_json::from_str(r#"{"id": 1, "title": "Alien"}"#).unwrap();
/// assert_eq!(row.field("title"), Some(CellValue::Str("Alien".into())));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub BTreeMap<String, CellValue>);

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any previous value. Builder-style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }
}

impl TableRow for Record {
    fn field(&self, name: &str) -> Option<CellValue> {
        self.0.get(name).cloned()
    }
}

impl FromIterator<(String, CellValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, CellValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
