//! Tests for the sort engine and its toggle protocol.

use tablecore::prelude::*;

fn film(id: i64, title: &str, year: i64) -> Record {
    Record::new()
        .with("id", id)
        .with("title", title)
        .with("year", year)
}

fn columns() -> Vec<ColumnSpec<Record>> {
    vec![
        ColumnSpec::new("Title").field("title").sortable(),
        ColumnSpec::new("Year").field("year").sortable(),
        ColumnSpec::new("Notes").field("notes"),
    ]
}

fn engine() -> TableEngine<Record> {
    let mut engine = TableEngine::new(columns(), TableConfig::new()).unwrap();
    engine.set_data(vec![
        film(1, "Solaris", 2001),
        film(2, "Memento", 1999),
        film(3, "Amelie", 2001),
    ]);
    engine
}

fn ids(rows: &[Record]) -> Vec<CellValue> {
    rows.iter().map(|r| r.field("id").unwrap()).collect()
}

#[test]
fn test_sort_ascending_with_stable_ties() {
    let mut engine = engine();
    engine.toggle_sort("year", &mut ());

    // 1999 first; the two 2001 rows keep their input order.
    assert_eq!(
        ids(&engine.visible_rows()),
        vec![CellValue::Int(2), CellValue::Int(1), CellValue::Int(3)]
    );
}

#[test]
fn test_reclick_toggles_direction_without_drift() {
    let mut engine = engine();

    engine.toggle_sort("year", &mut ());
    assert_eq!(engine.sort_state().direction, SortDirection::Ascending);

    engine.toggle_sort("year", &mut ());
    assert_eq!(engine.sort_state().direction, SortDirection::Descending);
    assert_eq!(
        ids(&engine.visible_rows()),
        vec![CellValue::Int(1), CellValue::Int(3), CellValue::Int(2)]
    );

    engine.toggle_sort("year", &mut ());
    assert_eq!(engine.sort_state().direction, SortDirection::Ascending);
}

#[test]
fn test_switching_column_resets_direction() {
    let mut engine = engine();

    engine.toggle_sort("year", &mut ());
    engine.toggle_sort("year", &mut ());
    assert_eq!(engine.sort_state().direction, SortDirection::Descending);

    engine.toggle_sort("title", &mut ());
    assert_eq!(engine.sort_state().column.as_deref(), Some("title"));
    assert_eq!(engine.sort_state().direction, SortDirection::Ascending);
    assert_eq!(
        ids(&engine.visible_rows()),
        vec![CellValue::Int(3), CellValue::Int(2), CellValue::Int(1)]
    );
}

#[test]
fn test_unknown_column_is_silent_noop() {
    let mut engine = engine();
    let before = engine.sort_state().clone();

    engine.toggle_sort("no-such-column", &mut ());

    assert_eq!(engine.sort_state(), &before);
}

#[test]
fn test_unsortable_column_is_silent_noop() {
    let mut engine = engine();
    engine.toggle_sort("notes", &mut ());
    assert_eq!(engine.sort_state().column, None);
}

#[test]
fn test_no_sort_column_keeps_input_order() {
    let mut engine = engine();
    assert_eq!(
        ids(&engine.visible_rows()),
        vec![CellValue::Int(1), CellValue::Int(2), CellValue::Int(3)]
    );
}

#[test]
fn test_default_sort_field_applies_at_construction() {
    let mut engine = TableEngine::new(
        columns(),
        TableConfig::new()
            .default_sort_field("year")
            .default_sort_ascending(false),
    )
    .unwrap();
    engine.set_data(vec![
        film(1, "Solaris", 2001),
        film(2, "Memento", 1999),
        film(3, "Amelie", 2001),
    ]);

    assert_eq!(engine.sort_state().column.as_deref(), Some("year"));
    assert_eq!(
        ids(&engine.visible_rows()),
        vec![CellValue::Int(1), CellValue::Int(3), CellValue::Int(2)]
    );
}

#[test]
fn test_missing_field_sorts_before_present_values() {
    let mut engine = TableEngine::new(columns(), TableConfig::new()).unwrap();
    engine.set_data(vec![
        film(1, "Solaris", 2001),
        Record::new().with("id", 2).with("title", "Untitled"),
        film(3, "Amelie", 1999),
    ]);

    engine.toggle_sort("year", &mut ());
    assert_eq!(
        ids(&engine.visible_rows()),
        vec![CellValue::Int(2), CellValue::Int(3), CellValue::Int(1)]
    );
}

#[test]
fn test_custom_comparator_overrides_value_order() {
    // Sort by title length instead of lexicographically.
    let specs = vec![
        ColumnSpec::<Record>::new("Title")
            .field("title")
            .sortable()
            .comparator(|a, b| {
                let len = |r: &Record| match r.field("title") {
                    Some(CellValue::Str(s)) => s.len(),
                    _ => 0,
                };
                len(a).cmp(&len(b))
            }),
    ];
    let mut engine = TableEngine::new(specs, TableConfig::new()).unwrap();
    engine.set_data(vec![
        film(1, "Solaris", 2001),
        film(2, "Up", 2009),
        film(3, "Amelie", 2001),
    ]);

    engine.toggle_sort("title", &mut ());
    assert_eq!(
        ids(&engine.visible_rows()),
        vec![CellValue::Int(2), CellValue::Int(3), CellValue::Int(1)]
    );
}

#[test]
fn test_repeated_reads_are_identical() {
    let mut engine = engine();
    engine.toggle_sort("year", &mut ());

    let first = engine.visible_rows();
    let second = engine.visible_rows();
    assert_eq!(first, second);
}

#[test]
fn test_sort_recomputes_after_set_data() {
    let mut engine = engine();
    engine.toggle_sort("year", &mut ());
    let _ = engine.visible_rows();

    engine.set_data(vec![film(9, "Alien", 1979), film(8, "Gattaca", 1997)]);
    assert_eq!(
        ids(&engine.visible_rows()),
        vec![CellValue::Int(9), CellValue::Int(8)]
    );
}

#[test]
fn test_struct_rows_sort_through_the_trait() {
    #[derive(Clone, PartialEq)]
    struct Film {
        id: i64,
        year: i64,
    }

    impl TableRow for Film {
        fn field(&self, name: &str) -> Option<CellValue> {
            match name {
                "id" => Some(self.id.into()),
                "year" => Some(self.year.into()),
                _ => None,
            }
        }
    }

    let specs = vec![ColumnSpec::<Film>::new("Year").field("year").sortable()];
    let mut engine = TableEngine::new(specs, TableConfig::new()).unwrap();
    engine.set_data(vec![
        Film { id: 1, year: 2001 },
        Film { id: 2, year: 1999 },
    ]);

    engine.toggle_sort("year", &mut ());
    assert_eq!(engine.visible_rows()[0].id, 2);
}
