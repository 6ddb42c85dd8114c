use serde::{Deserialize, Serialize};

use crate::models::Month;

/// A seller's summed potential over the selected period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerTotal {
    pub name: String,
    pub total: f64,
}

/// Aggregated snapshot for one selection pass.
///
/// Read-only output of the aggregator; recomputed from scratch on every
/// selection change rather than updated incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Sum of the Total column over the filtered range
    pub period_total: f64,

    /// Month with the highest total; earliest month wins a tie
    pub best_month: Month,
    pub best_month_total: f64,

    /// Selected sellers ranked descending by summed potential. Equal sums
    /// keep CSV column declaration order.
    pub seller_totals: Vec<SellerTotal>,

    /// Total of the chronologically last filtered month
    pub last_month_total: f64,

    /// Percent change of the last filtered month against the one before
    /// it. None when fewer than two months are in range or the previous
    /// total is exactly zero ("not applicable", not an error).
    pub delta_pct: Option<f64>,
}

impl PeriodSummary {
    /// Highest-ranked seller. Always present: aggregation rejects empty
    /// seller selections before building a summary.
    pub fn top_seller(&self) -> &SellerTotal {
        &self.seller_totals[0]
    }
}

/// One point of the total-evolution line chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalPoint {
    pub month: Month,
    pub total: f64,
}

/// One (month, seller, value) triple of the long-form seller series,
/// feeding the grouped participation bar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerPoint {
    pub month: Month,
    pub seller: String,
    pub value: f64,
}

/// Currency-formatted copy of the filtered table, ready for display.
/// Purely cosmetic: the numeric table underneath is never touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
