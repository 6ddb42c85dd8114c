mod month;
mod report;
mod sales;

pub use month::Month;
pub use report::{FormattedTable, PeriodSummary, SellerPoint, SellerTotal, TotalPoint};
pub use sales::{SalesRow, SalesTable, Selection};
