//! Reshapes the filtered table into chart-ready and display-ready forms.
//!
//! Everything here is a read-only view over the loaded table; the numeric
//! data the aggregator works on is never mutated.

use crate::constants::{MONTH_COLUMN, TOTAL_COLUMN};
use crate::error::Result;
use crate::models::{FormattedTable, SalesTable, Selection, SellerPoint, TotalPoint};
use crate::services::aggregator::{filter_rows, validate_sellers};
use crate::services::currency::format_currency;

/// Ordered (month, total) pairs over the filtered range, for the
/// total-evolution line chart
pub fn total_series(table: &SalesTable, selection: &Selection) -> Result<Vec<TotalPoint>> {
    validate_sellers(table, selection)?;
    let rows = filter_rows(table, selection)?;
    Ok(rows
        .iter()
        .map(|r| TotalPoint {
            month: r.month,
            total: r.total,
        })
        .collect())
}

/// Wide-to-long reshape: one (month, seller, value) triple per
/// (month, selected seller), for the participation bar chart. Month-major
/// order, sellers in schema declaration order within each month.
pub fn seller_long_form(table: &SalesTable, selection: &Selection) -> Result<Vec<SellerPoint>> {
    let sellers = validate_sellers(table, selection)?;
    let rows = filter_rows(table, selection)?;

    let mut points = Vec::with_capacity(rows.len() * sellers.len());
    for row in rows {
        for &(idx, name) in &sellers {
            points.push(SellerPoint {
                month: row.month,
                seller: name.to_string(),
                value: row.seller_values[idx],
            });
        }
    }
    Ok(points)
}

/// Currency-formatted copy of the filtered table: `Mes`, the selected
/// seller columns in schema order, then `Total`
pub fn display_table(table: &SalesTable, selection: &Selection) -> Result<FormattedTable> {
    let sellers = validate_sellers(table, selection)?;
    let rows = filter_rows(table, selection)?;

    let mut columns = Vec::with_capacity(sellers.len() + 2);
    columns.push(MONTH_COLUMN.to_string());
    columns.extend(sellers.iter().map(|&(_, name)| name.to_string()));
    columns.push(TOTAL_COLUMN.to_string());

    let formatted_rows = rows
        .iter()
        .map(|row| {
            let mut cells = Vec::with_capacity(sellers.len() + 2);
            cells.push(row.month.to_string());
            cells.extend(sellers.iter().map(|&(idx, _)| format_currency(row.seller_values[idx])));
            cells.push(format_currency(row.total));
            cells
        })
        .collect();

    Ok(FormattedTable {
        columns,
        rows: formatted_rows,
    })
}
