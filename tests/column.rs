//! Tests for column normalization.

use tablecore::prelude::*;

fn film(id: i64, title: &str) -> Record {
    Record::new().with("id", id).with("title", title)
}

#[test]
fn test_ids_derive_from_field_selectors() {
    let columns = Column::normalize(vec![
        ColumnSpec::<Record>::new("Title").field("title"),
        ColumnSpec::<Record>::new("Year").field("year"),
    ])
    .unwrap();

    assert_eq!(columns[0].id, "title");
    assert_eq!(columns[1].id, "year");
}

#[test]
fn test_computed_selector_gets_ordinal_id() {
    let columns = Column::normalize(vec![
        ColumnSpec::<Record>::new("Title").field("title"),
        ColumnSpec::new("Decade").computed(|row: &Record| {
            match row.field("year") {
                Some(CellValue::Int(year)) => CellValue::Int(year / 10 * 10),
                _ => CellValue::Null,
            }
        }),
    ])
    .unwrap();

    assert_eq!(columns[1].id, "column-2");
}

#[test]
fn test_duplicate_ids_are_disambiguated() {
    let columns = Column::normalize(vec![
        ColumnSpec::<Record>::new("Title").field("title"),
        ColumnSpec::<Record>::new("Title again").field("title"),
    ])
    .unwrap();

    assert_eq!(columns[0].id, "title");
    assert_eq!(columns[1].id, "title-2");
    assert_ne!(columns[0].id, columns[1].id);
}

#[test]
fn test_normalize_is_deterministic() {
    let make = || {
        Column::normalize(vec![
            ColumnSpec::<Record>::new("Title").field("title"),
            ColumnSpec::new("Len").computed(|_: &Record| CellValue::Int(0)),
        ])
        .unwrap()
    };
    let a = make();
    let b = make();
    let ids_a: Vec<_> = a.iter().map(|c| c.id.clone()).collect();
    let ids_b: Vec<_> = b.iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids_a, ids_b);
}

#[test]
fn test_missing_selector_fails_normalization() {
    let result = Column::normalize(vec![ColumnSpec::<Record>::new("Broken")]);
    assert_eq!(
        result.err(),
        Some(ConfigError::MissingSelector {
            name: "Broken".to_string()
        })
    );
}

#[test]
fn test_empty_column_list_is_rejected() {
    let result = Column::normalize(Vec::<ColumnSpec<Record>>::new());
    assert_eq!(result.err(), Some(ConfigError::NoColumns));
}

#[test]
fn test_zero_rows_per_page_is_rejected() {
    let result = TableEngine::<Record>::new(
        vec![ColumnSpec::new("Title").field("title")],
        TableConfig::new().pagination(true).pagination_per_page(0),
    );
    assert!(matches!(result.err(), Some(ConfigError::ZeroRowsPerPage)));
}

#[test]
fn test_column_value_extraction() {
    let columns = Column::normalize(vec![
        ColumnSpec::<Record>::new("Title").field("title"),
        ColumnSpec::<Record>::new("Missing").field("nope"),
    ])
    .unwrap();
    let row = film(1, "Alien");

    assert_eq!(columns[0].value_of(&row), CellValue::Str("Alien".into()));
    assert_eq!(columns[1].value_of(&row), CellValue::Null);
}
