use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::Month;

/// One month of sales potential figures.
///
/// `seller_values` is aligned with the owning table's `sellers` schema:
/// `seller_values[i]` belongs to `table.sellers[i]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesRow {
    pub month: Month,
    pub total: f64,
    pub seller_values: Vec<f64>,
}

/// The loaded sales table: seller schema plus rows in calendar month order.
///
/// The schema (seller column names, in header declaration order) is
/// discovered once at load time and fixed for the life of the table. The
/// table itself is immutable after load; `Total` is trusted as given and
/// never recomputed from the seller columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesTable {
    pub sellers: Vec<String>,
    pub rows: Vec<SalesRow>,
}

impl SalesTable {
    /// Months present in the table, in calendar order
    pub fn months(&self) -> Vec<Month> {
        self.rows.iter().map(|r| r.month).collect()
    }

    /// Position of a seller in the schema, if present
    pub fn seller_index(&self, name: &str) -> Option<usize> {
        self.sellers.iter().position(|s| s == name)
    }

    pub fn first_month(&self) -> Option<Month> {
        self.rows.first().map(|r| r.month)
    }

    pub fn last_month(&self) -> Option<Month> {
        self.rows.last().map(|r| r.month)
    }
}

/// The user's current analysis window: an inclusive month range plus a
/// seller subset. Owned by the caller and passed in on every pass; nothing
/// about it is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selection {
    pub start: Month,
    pub end: Month,
    pub sellers: Vec<String>,
}

impl Selection {
    /// Full-range selection over every month and seller in the table.
    /// Returns None for a table with no rows.
    pub fn full(table: &SalesTable) -> Option<Selection> {
        Some(Selection {
            start: table.first_month()?,
            end: table.last_month()?,
            sellers: table.sellers.clone(),
        })
    }

    /// Fill unset parameters from the table: absent bounds fall back to
    /// the table's full month range, an empty seller list means all
    /// sellers. Single source of these defaults for the CLI and the API.
    pub fn resolve(
        table: &SalesTable,
        start: Option<Month>,
        end: Option<Month>,
        sellers: Vec<String>,
    ) -> Result<Selection> {
        let full = Selection::full(table)
            .ok_or_else(|| AppError::DataUnavailable("Data source has no rows".to_string()))?;

        Ok(Selection {
            start: start.unwrap_or(full.start),
            end: end.unwrap_or(full.end),
            sellers: if sellers.is_empty() { full.sellers } else { sellers },
        })
    }
}
