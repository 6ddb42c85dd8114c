pub mod aggregator;
pub mod csv_parser;
pub mod currency;
pub mod data_store;
pub mod presenter;

pub use aggregator::aggregate;
pub use csv_parser::load_sales_csv;
pub use currency::format_currency;
pub use data_store::{DataStore, SharedDataStore};
pub use presenter::{display_table, seller_long_form, total_series};
