//! Table Engine Demo
//!
//! Drives the engine through a typical session — sorting, paging,
//! selecting — and prints what a rendering layer would see, with an
//! observer logging every notification.

use simplelog::{Config, LevelFilter, TermLogger, TerminalMode};
use tablecore::prelude::*;

/// A film record for the demo.
#[derive(Clone, Debug, PartialEq)]
struct Film {
    id: u32,
    title: String,
    year: i64,
    rating: f64,
}

impl Film {
    fn new(id: u32, title: &str, year: i64, rating: f64) -> Self {
        Self {
            id,
            title: title.to_string(),
            year,
            rating,
        }
    }
}

impl TableRow for Film {
    fn field(&self, name: &str) -> Option<CellValue> {
        match name {
            "id" => Some(CellValue::Int(self.id.into())),
            "title" => Some(self.title.as_str().into()),
            "year" => Some(self.year.into()),
            "rating" => Some(self.rating.into()),
            _ => None,
        }
    }
}

/// Observer that logs every engine notification.
struct LoggingObserver;

impl TableObserver<Film> for LoggingObserver {
    fn table_updated(&mut self, snapshot: &TableSnapshot) {
        log::info!(
            "table updated: {} selected (all: {}), sort {:?} {:?}",
            snapshot.selected_count,
            snapshot.all_selected,
            snapshot.sort_column,
            snapshot.sort_direction
        );
    }

    fn sort_changed(&mut self, column_id: &str, direction: SortDirection) {
        log::info!("sort changed: {column_id} {direction:?}");
    }

    fn page_changed(&mut self, current_page: usize, total_rows: usize) {
        log::info!("page changed: {current_page} of {total_rows} rows");
    }

    fn rows_per_page_changed(&mut self, rows_per_page: usize) {
        log::info!("rows per page changed: {rows_per_page}");
    }

    fn row_clicked(&mut self, row: &Film) {
        log::info!("row clicked: {}", row.title);
    }
}

fn create_sample_films() -> Vec<Film> {
    vec![
        Film::new(1, "Solaris", 2002, 6.2),
        Film::new(2, "Memento", 2000, 8.4),
        Film::new(3, "Amelie", 2001, 8.3),
        Film::new(4, "Gattaca", 1997, 7.8),
        Film::new(5, "Alien", 1979, 8.5),
        Film::new(6, "Blade Runner", 1982, 8.1),
        Film::new(7, "Arrival", 2016, 7.9),
        Film::new(8, "Moon", 2009, 7.8),
        Film::new(9, "Primer", 2004, 6.8),
        Film::new(10, "Coherence", 2013, 7.2),
        Film::new(11, "Annihilation", 2018, 6.8),
        Film::new(12, "Sunshine", 2007, 7.2),
    ]
}

fn print_page(engine: &mut TableEngine<Film>) {
    for film in engine.visible_rows() {
        let marker = if engine.is_row_selected(&film) { "■" } else { "□" };
        println!("  {marker} {:<14} {}  {:.1}", film.title, film.year, film.rating);
    }
}

fn main() -> Result<(), ConfigError> {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );

    let columns = vec![
        ColumnSpec::new("Title").field("title").sortable(),
        ColumnSpec::new("Year").field("year").sortable(),
        ColumnSpec::new("Rating").field("rating").sortable(),
    ];
    let config = TableConfig::new()
        .key_field("id")
        .selectable_rows(true)
        .pagination(true)
        .pagination_per_page(5)
        .default_sort_field("year");

    let mut engine = TableEngine::new(columns, config)?;
    engine.set_data(create_sample_films());
    let mut observer = LoggingObserver;

    println!("page 1, sorted by year:");
    print_page(&mut engine);

    engine.toggle_sort("rating", &mut observer);
    engine.toggle_sort("rating", &mut observer);
    println!("\npage 1, best rated first:");
    print_page(&mut engine);

    engine.select_all(&mut observer);
    engine.change_page(3, &mut observer);
    println!("\npage 3 of {}, everything selected:", engine.page_count());
    print_page(&mut engine);

    engine.sync_props(true, &mut observer);
    println!("\nafter external clear:");
    print_page(&mut engine);

    Ok(())
}
