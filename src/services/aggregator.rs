use tracing::debug;

use crate::error::{AppError, Result};
use crate::models::{PeriodSummary, SalesRow, SalesTable, Selection, SellerTotal};

/// Compute the period summary for one selection pass.
///
/// Pure function of (table, selection): no side effects, safe to call on
/// every UI interaction. Validates the selection before touching any
/// numbers, so a failed call produces no partial result.
pub fn aggregate(table: &SalesTable, selection: &Selection) -> Result<PeriodSummary> {
    let sellers = validate_sellers(table, selection)?;
    let rows = filter_rows(table, selection)?;

    debug!(
        "Aggregating {} rows ({} - {}) over {} sellers",
        rows.len(),
        selection.start,
        selection.end,
        sellers.len()
    );

    let period_total: f64 = rows.iter().map(|r| r.total).sum();

    // Strictly-greater comparison keeps the earliest month on a tie
    let best = rows
        .iter()
        .fold(rows[0], |best, &row| if row.total > best.total { row } else { best });

    // Sum in schema declaration order, then stable-sort descending so
    // equal sums keep that order
    let mut seller_totals: Vec<SellerTotal> = sellers
        .iter()
        .map(|&(idx, name)| SellerTotal {
            name: name.to_string(),
            total: rows.iter().map(|r| r.seller_values[idx]).sum(),
        })
        .collect();
    seller_totals.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));

    let last_month_total = rows[rows.len() - 1].total;
    let delta_pct = if rows.len() < 2 {
        None
    } else {
        let previous = rows[rows.len() - 2].total;
        if previous == 0.0 {
            // Not applicable, never a division error
            None
        } else {
            Some((last_month_total - previous) / previous * 100.0)
        }
    };

    Ok(PeriodSummary {
        period_total,
        best_month: best.month,
        best_month_total: best.total,
        seller_totals,
        last_month_total,
        delta_pct,
    })
}

/// Rows of the table inside the inclusive [start, end] month range.
///
/// Shared by the aggregator and the presentation adapter so both apply
/// identical range validation.
pub fn filter_rows<'a>(table: &'a SalesTable, selection: &Selection) -> Result<Vec<&'a SalesRow>> {
    let months = table.months();
    if !months.contains(&selection.start) {
        return Err(AppError::InvalidRange(format!(
            "Start month '{}' is not in the table",
            selection.start
        )));
    }
    if !months.contains(&selection.end) {
        return Err(AppError::InvalidRange(format!(
            "End month '{}' is not in the table",
            selection.end
        )));
    }
    if selection.start > selection.end {
        return Err(AppError::InvalidRange(format!(
            "Start month '{}' is after end month '{}'",
            selection.start, selection.end
        )));
    }

    let rows: Vec<&SalesRow> = table
        .rows
        .iter()
        .filter(|r| r.month >= selection.start && r.month <= selection.end)
        .collect();

    if rows.is_empty() {
        return Err(AppError::EmptySelection(
            "No rows in the selected month range".to_string(),
        ));
    }
    Ok(rows)
}

/// Resolve the selected seller names against the table schema, keeping
/// schema declaration order (the ranking tie-break order).
pub fn validate_sellers<'a>(
    table: &'a SalesTable,
    selection: &Selection,
) -> Result<Vec<(usize, &'a str)>> {
    if selection.sellers.is_empty() {
        return Err(AppError::EmptySelection(
            "Select at least one seller".to_string(),
        ));
    }
    for name in &selection.sellers {
        if table.seller_index(name).is_none() {
            return Err(AppError::InvalidInput(format!(
                "Unknown seller column: '{}'",
                name
            )));
        }
    }
    Ok(table
        .sellers
        .iter()
        .enumerate()
        .filter(|(_, name)| selection.sellers.iter().any(|s| s == *name))
        .map(|(idx, name)| (idx, name.as_str()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Month;

    fn table() -> SalesTable {
        // The two-month scenario from the reporting requirements
        SalesTable {
            sellers: vec!["SellerA".to_string(), "SellerB".to_string()],
            rows: vec![
                SalesRow {
                    month: Month::Enero,
                    total: 150.0,
                    seller_values: vec![100.0, 50.0],
                },
                SalesRow {
                    month: Month::Febrero,
                    total: 300.0,
                    seller_values: vec![200.0, 100.0],
                },
            ],
        }
    }

    fn full_selection() -> Selection {
        Selection {
            start: Month::Enero,
            end: Month::Febrero,
            sellers: vec!["SellerA".to_string(), "SellerB".to_string()],
        }
    }

    #[test]
    fn test_full_range_summary() {
        let summary = aggregate(&table(), &full_selection()).unwrap();

        assert_eq!(summary.period_total, 450.0);
        assert_eq!(summary.best_month, Month::Febrero);
        assert_eq!(summary.best_month_total, 300.0);
        assert_eq!(summary.last_month_total, 300.0);
        assert_eq!(summary.delta_pct, Some(100.0));
        assert_eq!(
            summary.seller_totals,
            vec![
                SellerTotal {
                    name: "SellerA".to_string(),
                    total: 300.0
                },
                SellerTotal {
                    name: "SellerB".to_string(),
                    total: 150.0
                },
            ]
        );
        assert_eq!(summary.top_seller().name, "SellerA");
    }

    #[test]
    fn test_aggregate_is_deterministic() {
        let t = table();
        let s = full_selection();
        assert_eq!(aggregate(&t, &s).unwrap(), aggregate(&t, &s).unwrap());
    }

    #[test]
    fn test_single_month_has_no_delta() {
        let selection = Selection {
            start: Month::Febrero,
            end: Month::Febrero,
            sellers: vec!["SellerA".to_string()],
        };
        let summary = aggregate(&table(), &selection).unwrap();
        assert_eq!(summary.delta_pct, None);
        assert_eq!(summary.period_total, 300.0);
        assert_eq!(summary.last_month_total, 300.0);
    }

    #[test]
    fn test_zero_previous_total_has_no_delta() {
        let mut t = table();
        t.rows[0].total = 0.0;
        let summary = aggregate(&t, &full_selection()).unwrap();
        assert_eq!(summary.delta_pct, None);
    }

    #[test]
    fn test_best_month_tie_goes_to_earliest() {
        let mut t = table();
        t.rows[0].total = 300.0;
        let summary = aggregate(&t, &full_selection()).unwrap();
        assert_eq!(summary.best_month, Month::Enero);
    }

    #[test]
    fn test_equal_seller_sums_keep_column_order() {
        let t = SalesTable {
            sellers: vec!["Zoe".to_string(), "Ana".to_string()],
            rows: vec![SalesRow {
                month: Month::Enero,
                total: 200.0,
                seller_values: vec![100.0, 100.0],
            }],
        };
        let selection = Selection {
            start: Month::Enero,
            end: Month::Enero,
            // Selection order differs from schema order; schema order wins
            sellers: vec!["Ana".to_string(), "Zoe".to_string()],
        };
        let summary = aggregate(&t, &selection).unwrap();
        let names: Vec<_> = summary.seller_totals.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Zoe", "Ana"]);
    }

    #[test]
    fn test_empty_seller_selection_rejected() {
        let selection = Selection {
            sellers: vec![],
            ..full_selection()
        };
        let err = aggregate(&table(), &selection).unwrap_err();
        assert!(matches!(err, AppError::EmptySelection(_)));
    }

    #[test]
    fn test_unknown_seller_rejected() {
        let selection = Selection {
            sellers: vec!["Nobody".to_string()],
            ..full_selection()
        };
        let err = aggregate(&table(), &selection).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_range_not_in_table_rejected() {
        let selection = Selection {
            start: Month::Enero,
            end: Month::Diciembre,
            sellers: vec!["SellerA".to_string()],
        };
        let err = aggregate(&table(), &selection).unwrap_err();
        assert!(matches!(err, AppError::InvalidRange(_)));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let selection = Selection {
            start: Month::Febrero,
            end: Month::Enero,
            sellers: vec!["SellerA".to_string()],
        };
        let err = aggregate(&table(), &selection).unwrap_err();
        assert!(matches!(err, AppError::InvalidRange(_)));
    }
}
