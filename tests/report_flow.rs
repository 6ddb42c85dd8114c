//! Full pass over the data path: CSV on disk -> cached load -> aggregation
//! -> presentation, the same sequence one UI interaction triggers.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use painel_comercial::models::{Month, Selection};
use painel_comercial::services::{
    aggregate, display_table, seller_long_form, total_series, DataStore,
};

fn write_csv(dir: &tempfile::TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("ventas.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

const SHUFFLED_CSV: &str = "\
Mes,Ana,Bruno,Total
Junio,300,100,400
Enero,100,50,150
Marzo,0,0,0
Abril,150,250,400
";

#[tokio::test]
async fn full_pass_from_disk_to_presentation() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, SHUFFLED_CSV);

    let store = Arc::new(DataStore::new());
    let table = store.get(&path).await.unwrap();

    // Rows come back in calendar order even though the file is shuffled
    assert_eq!(
        table.months(),
        vec![Month::Enero, Month::Marzo, Month::Abril, Month::Junio]
    );

    let selection = Selection::full(&table).unwrap();
    let summary = aggregate(&table, &selection).unwrap();

    assert_eq!(summary.period_total, 950.0);
    assert_eq!(summary.best_month, Month::Abril);
    assert_eq!(summary.best_month_total, 400.0);
    assert_eq!(summary.last_month_total, 400.0);
    // Previous month (Abril) is 400 -> delta is 0%
    assert_eq!(summary.delta_pct, Some(0.0));
    assert_eq!(summary.top_seller().name, "Ana");
    assert_eq!(summary.top_seller().total, 550.0);

    let series = total_series(&table, &selection).unwrap();
    assert_eq!(series.len(), 4);
    assert_eq!(series[0].month, Month::Enero);
    assert_eq!(series[3].total, 400.0);

    let points = seller_long_form(&table, &selection).unwrap();
    assert_eq!(points.len(), 8);

    let formatted = display_table(&table, &selection).unwrap();
    assert_eq!(formatted.columns, vec!["Mes", "Ana", "Bruno", "Total"]);
    assert_eq!(formatted.rows[0], vec!["Enero", "R$ 100", "R$ 50", "R$ 150"]);
}

#[tokio::test]
async fn zero_previous_month_reports_no_delta() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, SHUFFLED_CSV);

    let store = DataStore::new();
    let table = store.get(&path).await.unwrap();

    // Marzo has total 0; ending the range in Abril makes it the previous month
    let selection = Selection {
        start: Month::Enero,
        end: Month::Abril,
        sellers: table.sellers.clone(),
    };
    let summary = aggregate(&table, &selection).unwrap();
    assert_eq!(summary.last_month_total, 400.0);
    assert_eq!(summary.delta_pct, None);
}

#[tokio::test]
async fn formatted_total_parses_back_to_rounded_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "Mes,Ana,Total\nEnero,1234567.4,1234567.4\n");

    let store = DataStore::new();
    let table = store.get(&path).await.unwrap();
    let selection = Selection::full(&table).unwrap();

    let formatted = display_table(&table, &selection).unwrap();
    let cell = formatted.rows[0].last().unwrap();
    let stripped: String = cell
        .trim_start_matches("R$ ")
        .chars()
        .filter(|c| *c != '.')
        .collect();
    assert_eq!(stripped.parse::<i64>().unwrap(), 1234567_f64.round() as i64);

    // Formatting never touched the numbers the aggregator sees
    assert_eq!(table.rows[0].total, 1234567.4);
}
