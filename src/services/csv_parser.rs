use csv::Reader;
use std::io::Read;
use std::path::Path;

use crate::constants::{MONTH_COLUMN, TOTAL_COLUMN};
use crate::error::{AppError, Result};
use crate::models::{Month, SalesRow, SalesTable};

/// Load the sales potential CSV from disk.
///
/// Header must contain `Mes` and `Total`; every remaining column is a
/// seller column, in header order. Rows come back sorted in calendar
/// month order regardless of input order. Any unreadable file, missing
/// column, malformed number, unknown month label or duplicate month
/// fails the whole load with `DataUnavailable`.
pub fn load_sales_csv(path: &Path) -> Result<SalesTable> {
    let reader = Reader::from_path(path).map_err(|e| {
        AppError::DataUnavailable(format!("Cannot open '{}': {}", path.display(), e))
    })?;
    parse_sales_csv(reader)
}

/// Parse an already-open CSV source. Split out so tests can feed
/// in-memory data without touching disk.
pub fn parse_sales_csv<R: Read>(mut reader: Reader<R>) -> Result<SalesTable> {
    let headers = reader
        .headers()
        .map_err(|e| AppError::DataUnavailable(format!("Cannot read header: {}", e)))?
        .clone();

    let month_idx = headers
        .iter()
        .position(|h| h == MONTH_COLUMN)
        .ok_or_else(|| AppError::DataUnavailable(format!("Missing '{}' column", MONTH_COLUMN)))?;
    let total_idx = headers
        .iter()
        .position(|h| h == TOTAL_COLUMN)
        .ok_or_else(|| AppError::DataUnavailable(format!("Missing '{}' column", TOTAL_COLUMN)))?;

    // Seller schema: every header that is not Mes/Total, declaration order
    let seller_columns: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != month_idx && *i != total_idx)
        .map(|(i, h)| (i, h.to_string()))
        .collect();

    if seller_columns.is_empty() {
        return Err(AppError::DataUnavailable(
            "No seller columns found (need at least one column besides Mes and Total)".to_string(),
        ));
    }

    let mut rows: Vec<SalesRow> = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let record = result
            .map_err(|e| AppError::DataUnavailable(format!("Malformed row {}: {}", line + 2, e)))?;

        let month_label = record.get(month_idx).unwrap_or("");
        let month = Month::from_label(month_label).ok_or_else(|| {
            AppError::DataUnavailable(format!(
                "Row {}: month '{}' is not one of the 12 expected labels",
                line + 2,
                month_label
            ))
        })?;

        if rows.iter().any(|r| r.month == month) {
            return Err(AppError::DataUnavailable(format!(
                "Duplicate month '{}'",
                month
            )));
        }

        let total = parse_amount(record.get(total_idx).unwrap_or(""), line, TOTAL_COLUMN)?;

        let mut seller_values = Vec::with_capacity(seller_columns.len());
        for (idx, name) in &seller_columns {
            seller_values.push(parse_amount(record.get(*idx).unwrap_or(""), line, name)?);
        }

        rows.push(SalesRow {
            month,
            total,
            seller_values,
        });
    }

    // Calendar order, not input or lexical order
    rows.sort_by_key(|r| r.month);

    Ok(SalesTable {
        sellers: seller_columns.into_iter().map(|(_, name)| name).collect(),
        rows,
    })
}

fn parse_amount(raw: &str, line: usize, column: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|_| {
        AppError::DataUnavailable(format!(
            "Row {}: value '{}' in column '{}' is not a number",
            line + 2,
            raw,
            column
        ))
    })
}
