//! CSV Format Constants
//!
//! Defines the column contract for the sales potential CSV.
//!
//! The file has a header row with at least `Mes` and `Total`; every other
//! column is a seller column. Seller columns are discovered once at load
//! time and their header order is the ranking tie-break order.

/// Header name of the month column.
pub const MONTH_COLUMN: &str = "Mes";

/// Header name of the consolidated monthly total column.
pub const TOTAL_COLUMN: &str = "Total";

/// Currency prefix used by every formatted amount (`R$ 1.234.567`).
pub const CURRENCY_PREFIX: &str = "R$";

/// Default port for the report API server.
pub const DEFAULT_PORT: u16 = 8000;
